//! Running the engine over time.
//!
//! The engine itself is a pure function. [`Simulation`] is the state a
//! host keeps around it: the current grid, the generation counter, and
//! whether it is playing. The host decides how often to call
//! [`tick`](Simulation::tick).

use crate::{
    cells::{Coord, State},
    error::Error,
    grid::Grid,
    life,
};
use derivative::Derivative;
use log::{debug, info, trace};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Simulation status.
#[derive(Clone, Copy, Debug, Derivative, PartialEq, Eq, Hash)]
#[derivative(Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Status {
    /// Ticks do nothing.
    #[derivative(Default)]
    Stopped,
    /// Every tick advances one generation.
    Running,
}

/// A grid evolving over time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Simulation {
    /// The current grid.
    grid: Grid,

    /// Number of generations since the last reset.
    generation: u64,

    /// Whether ticks advance the grid.
    status: Status,

    /// Stops playing when [`generation`](#structfield.generation)
    /// reaches this number.
    ///
    /// `None` means that it plays until stopped.
    max_generations: Option<u64>,

    /// Stops playing when a generation leaves the grid unchanged.
    stop_when_settled: bool,
}

impl Simulation {
    /// Creates a stopped simulation at generation 0.
    pub fn new(grid: Grid) -> Self {
        Simulation {
            grid,
            generation: 0,
            status: Status::Stopped,
            max_generations: None,
            stop_when_settled: false,
        }
    }

    /// Sets the number of generations after which playing stops.
    pub fn set_max_generations<T: Into<Option<u64>>>(mut self, max_generations: T) -> Self {
        self.max_generations = max_generations.into();
        self
    }

    /// Whether playing stops once the grid no longer changes.
    ///
    /// Off by default, so that cells toggled into a still or empty grid
    /// keep evolving while playing.
    pub fn set_stop_when_settled(mut self, stop_when_settled: bool) -> Self {
        self.stop_when_settled = stop_when_settled;
        self
    }

    /// The current grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Number of generations since the last reset.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Current status.
    pub fn status(&self) -> Status {
        self.status
    }

    /// Whether the simulation is playing.
    pub fn is_running(&self) -> bool {
        self.status == Status::Running
    }

    /// Number of living cells in the current grid.
    pub fn population(&self) -> usize {
        self.grid.population()
    }

    /// The generation limit, if any.
    pub fn max_generations(&self) -> Option<u64> {
        self.max_generations
    }

    /// Starts playing.
    pub fn start(&mut self) {
        if self.status != Status::Running {
            info!("Playing from generation {}", self.generation);
            self.status = Status::Running;
        }
    }

    /// Stops playing.
    pub fn stop(&mut self) {
        if self.status != Status::Stopped {
            info!("Stopped at generation {}", self.generation);
            self.status = Status::Stopped;
        }
    }

    /// Starts if stopped, stops if running.
    pub fn toggle_running(&mut self) {
        match self.status {
            Status::Running => self.stop(),
            Status::Stopped => self.start(),
        }
    }

    fn limit_reached(&self) -> bool {
        self.max_generations
            .map_or(false, |max| self.generation >= max)
    }

    /// Advances one generation if playing.
    ///
    /// Returns whether a generation was computed.
    ///
    /// Playing stops by itself when the generation limit is reached.
    /// With [`set_stop_when_settled`](Simulation::set_stop_when_settled),
    /// it also stops when the grid no longer changes.
    pub fn tick(&mut self) -> bool {
        if self.status == Status::Stopped {
            return false;
        }
        if self.limit_reached() {
            self.stop();
            return false;
        }
        let changed = self.step();
        if !changed && self.stop_when_settled {
            debug!("Grid settled at generation {}", self.generation);
            self.stop();
        } else if self.limit_reached() {
            debug!("Reached the limit of {} generations", self.generation);
            self.stop();
        }
        true
    }

    /// Advances one generation, whether playing or not.
    ///
    /// Returns whether the grid changed.
    pub fn step(&mut self) -> bool {
        let next = life::next_generation(&self.grid);
        let changed = next != self.grid;
        self.grid = next;
        self.generation += 1;
        trace!(
            "Generation {}: {} living cells",
            self.generation,
            self.grid.population()
        );
        changed
    }

    /// Advances `generations` generations one after another.
    pub fn advance(&mut self, generations: u64) {
        debug!(
            "Moving {} generations forward from generation {}",
            generations, self.generation
        );
        for _ in 0..generations {
            self.step();
        }
    }

    /// Flips one cell of the current grid.
    ///
    /// The previous grid is replaced, not changed, so copies of it
    /// handed out earlier stay as they were.
    pub fn toggle_cell(&mut self, coord: Coord) -> Result<State, Error> {
        self.grid = self.grid.toggled(coord)?;
        self.grid.cell(coord)
    }

    /// Replaces the grid, resets the generation counter and stops.
    pub fn reset(&mut self, grid: Grid) {
        self.stop();
        info!("Reset to a {}x{} grid", grid.rows(), grid.cols());
        self.grid = grid;
        self.generation = 0;
    }
}
