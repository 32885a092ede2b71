//! The grid.

use crate::{
    cells::{Coord, State, ALIVE, DEAD},
    error::Error,
};
use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A finite rectangular grid of cells.
///
/// Everything outside the grid is permanently dead; there is no wrapping.
///
/// A grid is rectangular by construction. Raw rows are checked when they
/// are ingested (see [`Grid::from_rows`]), so every other operation can
/// rely on it. Operations never change a grid that may still be shared:
/// [`toggled`](Grid::toggled) and the engine return new grids.
///
/// With the `serde` feature, a grid is (de)serialized as a matrix of `0`
/// and `1`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "Vec<Vec<u8>>", into = "Vec<Vec<u8>>")
)]
pub struct Grid {
    /// Number of rows.
    rows: usize,

    /// Number of columns.
    ///
    /// Always `0` when there are no rows.
    cols: usize,

    /// All cells, row by row.
    cells: Vec<State>,
}

impl Grid {
    /// Creates a grid where every cell is dead.
    ///
    /// A grid with no rows also has no columns.
    pub fn new(rows: usize, cols: usize) -> Self {
        let cols = if rows == 0 { 0 } else { cols };
        Grid {
            rows,
            cols,
            cells: vec![DEAD; rows * cols],
        }
    }

    /// Creates a grid by computing the state of every cell.
    pub fn from_fn<F>(rows: usize, cols: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> State,
    {
        let cols = if rows == 0 { 0 } else { cols };
        let mut cells = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                cells.push(f(row, col));
            }
        }
        Grid { rows, cols, cells }
    }

    /// Ingests a raw matrix of cell values.
    ///
    /// `0` is dead and any other value is alive.
    /// Returns [`Error::MalformedGrid`] if the rows have different lengths.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, Error> {
        let cols = rows.first().map_or(0, |r| r.as_ref().len());
        let mut cells = Vec::with_capacity(rows.len() * cols);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(Error::MalformedGrid {
                    row: i,
                    expected: cols,
                    found: row.len(),
                });
            }
            cells.extend(row.iter().map(|&v| State::from(v)));
        }
        Ok(Grid {
            rows: rows.len(),
            cols,
            cells,
        })
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Whether the grid has no cells at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Gets the state of a cell, or `None` if it is outside the grid.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<State> {
        if row < self.rows && col < self.cols {
            Some(self.cells[row * self.cols + col])
        } else {
            None
        }
    }

    /// Gets the state of a cell.
    ///
    /// Returns [`Error::OutOfBounds`] if there is no such cell.
    pub fn cell(&self, coord: Coord) -> Result<State, Error> {
        let index = self.index(coord)?;
        Ok(self.cells[index])
    }

    /// Returns a new grid with the cell at `coord` flipped.
    ///
    /// The grid itself is left untouched.
    /// Returns [`Error::OutOfBounds`] if there is no such cell.
    pub fn toggled(&self, coord: Coord) -> Result<Self, Error> {
        let index = self.index(coord)?;
        let mut grid = self.clone();
        grid.cells[index] = !grid.cells[index];
        Ok(grid)
    }

    /// Sets a cell on a grid that is still being built.
    ///
    /// Cells outside the grid are ignored.
    pub(crate) fn set(&mut self, coord: Coord, state: State) {
        if let Ok(index) = self.index(coord) {
            self.cells[index] = state;
        }
    }

    /// Number of living cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|s| s.is_alive()).count()
    }

    /// Iterates over the rows.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[State]> + '_ {
        (0..self.rows).map(move |row| &self.cells[row * self.cols..(row + 1) * self.cols])
    }

    /// Iterates over the coordinates of all living cells, row by row.
    pub fn alive_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, s)| s.is_alive())
            .map(move |(i, _)| (i / cols, i % cols))
    }

    /// The grid as a matrix of `0` and `1`.
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.iter_rows()
            .map(|row| row.iter().map(|s| s.raw()).collect())
            .collect()
    }

    /// Index of a cell in `cells`.
    fn index(&self, (row, col): Coord) -> Result<usize, Error> {
        if row >= 0 && col >= 0 && (row as usize) < self.rows && (col as usize) < self.cols {
            Ok(row as usize * self.cols + col as usize)
        } else {
            Err(Error::OutOfBounds {
                coord: (row, col),
                rows: self.rows,
                cols: self.cols,
            })
        }
    }
}

/// Displays the grid in [Plaintext](https://conwaylife.com/wiki/Plaintext)
/// format, without the header.
///
/// * **Dead** cells are represented by `.`;
/// * **Living** cells are represented by `o`.
impl Display for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in self.iter_rows() {
            for &state in row {
                match state {
                    ALIVE => f.write_str("o")?,
                    _ => f.write_str(".")?,
                }
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

/// Parses a grid in [Plaintext](https://conwaylife.com/wiki/Plaintext) format.
///
/// Lines starting with `!` are comments. Empty lines are skipped.
/// `.` is dead; `o`, `O` and `*` are alive.
impl FromStr for Grid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rows = Vec::new();
        for line in s.lines() {
            let line = line.trim_end();
            if line.is_empty() || line.starts_with('!') {
                continue;
            }
            let row = line
                .chars()
                .map(|c| match c {
                    '.' => Ok(0),
                    'o' | 'O' | '*' => Ok(1),
                    c => Err(Error::InvalidCell(c)),
                })
                .collect::<Result<Vec<u8>, _>>()?;
            rows.push(row);
        }
        Grid::from_rows(&rows)
    }
}

impl TryFrom<Vec<Vec<u8>>> for Grid {
    type Error = Error;

    fn try_from(rows: Vec<Vec<u8>>) -> Result<Self, Self::Error> {
        Grid::from_rows(&rows)
    }
}

impl From<Grid> for Vec<Vec<u8>> {
    fn from(grid: Grid) -> Self {
        grid.to_rows()
    }
}
