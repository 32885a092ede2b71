//! Conway's Game of Life, `B3/S23`, on a bounded grid.
//!
//! Cells outside the grid count as dead neighbors.

use crate::{
    cells::{State, ALIVE, DEAD},
    grid::Grid,
};

/// Offsets of the eight cells in the Moore neighborhood.
const NBHD: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Number of living neighbors of the cell at `(row, col)`.
///
/// Neighbors outside the grid are dead.
pub fn live_neighbors(grid: &Grid, row: usize, col: usize) -> u8 {
    let mut count = 0;
    for &(dr, dc) in NBHD.iter() {
        let (r, c) = (row as isize + dr, col as isize + dc);
        if r < 0 || c < 0 {
            continue;
        }
        if let Some(ALIVE) = grid.get(r as usize, c as usize) {
            count += 1;
        }
    }
    count
}

/// The state of a cell in the next generation.
///
/// A living cell survives with 2 or 3 living neighbors.
/// A dead cell is born with exactly 3.
#[inline]
pub fn next_state(state: State, alives: u8) -> State {
    match (state, alives) {
        (ALIVE, 2) | (ALIVE, 3) | (DEAD, 3) => ALIVE,
        _ => DEAD,
    }
}

/// Computes the next generation.
///
/// The result is a new grid with the same dimensions.
pub fn next_generation(grid: &Grid) -> Grid {
    Grid::from_fn(grid.rows(), grid.cols(), |row, col| {
        let state = grid.get(row, col).unwrap_or_default();
        next_state(state, live_neighbors(grid, row, col))
    })
}

/// Applies [`next_generation`] `generations` times in a row.
pub fn advance(grid: &Grid, generations: u64) -> Grid {
    let mut grid = grid.clone();
    for _ in 0..generations {
        grid = next_generation(&grid);
    }
    grid
}

impl Grid {
    /// Computes the next generation. See [`next_generation`].
    pub fn next_generation(&self) -> Grid {
        next_generation(self)
    }

    /// Advances several generations. See [`advance`].
    pub fn advance(&self, generations: u64) -> Grid {
        advance(self, generations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: &[&[u8]]) -> Grid {
        Grid::from_rows(rows).unwrap()
    }

    #[test]
    fn blinker() {
        let vertical = grid(&[&[0, 1, 0], &[0, 1, 0], &[0, 1, 0]]);
        let horizontal = grid(&[&[0, 0, 0], &[1, 1, 1], &[0, 0, 0]]);
        assert_eq!(vertical.next_generation(), horizontal);
        assert_eq!(vertical.advance(2), vertical);
    }

    #[test]
    fn block_is_still() {
        let block = grid(&[&[0, 0, 0, 0], &[0, 1, 1, 0], &[0, 1, 1, 0], &[0, 0, 0, 0]]);
        assert_eq!(block.next_generation(), block);
        let corner = grid(&[&[1, 1], &[1, 1]]);
        assert_eq!(corner.next_generation(), corner);
    }

    #[test]
    fn no_wraparound() {
        let diagonal = grid(&[&[1, 0], &[0, 1]]);
        assert_eq!(diagonal.next_generation(), Grid::new(2, 2));
        assert_eq!(live_neighbors(&diagonal, 0, 0), 1);
        assert_eq!(live_neighbors(&diagonal, 0, 1), 2);
    }

    #[test]
    fn underpopulation() {
        let lone = grid(&[&[0, 0, 0], &[0, 1, 0], &[0, 0, 0]]);
        assert_eq!(lone.next_generation(), Grid::new(3, 3));
    }

    #[test]
    fn reproduction() {
        let input = grid(&[&[1, 1, 0], &[0, 1, 0], &[0, 0, 0]]);
        let expected = grid(&[&[1, 1, 0], &[1, 1, 0], &[0, 0, 0]]);
        assert_eq!(input.next_generation(), expected);
    }

    #[test]
    fn transition_table() {
        for alives in 0..=8 {
            let survive = alives == 2 || alives == 3;
            assert_eq!(next_state(ALIVE, alives), State::from(survive));
            assert_eq!(next_state(DEAD, alives), State::from(alives == 3));
        }
    }

    #[test]
    fn degenerate_shapes() {
        assert_eq!(Grid::new(0, 0).next_generation(), Grid::new(0, 0));
        let row = grid(&[&[1, 1, 1, 1]]);
        assert_eq!(row.next_generation(), grid(&[&[0, 1, 1, 0]]));
        let col = grid(&[&[1], &[1], &[1]]);
        assert_eq!(col.next_generation(), grid(&[&[0], &[1], &[0]]));
    }

    #[test]
    fn input_is_not_changed() {
        let input = grid(&[&[0, 1, 0], &[0, 1, 0], &[0, 1, 0]]);
        let copy = input.clone();
        let _ = next_generation(&input);
        assert_eq!(input, copy);
    }
}
