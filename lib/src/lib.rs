//! Conway's Game of Life on a finite grid.
//!
//! * [`next_generation`] computes the next generation of a [`Grid`].
//!   Cells outside the grid are always dead.
//! * [`empty_grid`] and [`seeded_grid`] create square grids, optionally with
//!   a named [`Pattern`] at the center.
//! * [`Grid::toggled`] flips a single cell.
//! * [`Simulation`] keeps a grid running over time for a host that calls
//!   [`Simulation::tick`] at its own pace.
//!
//! None of the grid operations change their input; they return new grids.

mod cells;
mod config;
mod error;
mod grid;
mod life;
pub mod patterns;
mod simulation;

pub use cells::{Coord, State, ALIVE, DEAD};
pub use config::Config;
pub use error::Error;
pub use grid::Grid;
pub use life::{advance, live_neighbors, next_generation, next_state};
pub use patterns::{empty_grid, random_grid, seeded_grid, Pattern};
pub use simulation::{Simulation, Status};

/// Flips the cell at `(row, col)`, returning a new grid.
///
/// Same as [`Grid::toggled`].
pub fn toggle_cell(grid: &Grid, row: isize, col: isize) -> Result<Grid, Error> {
    grid.toggled((row, col))
}
