//! All kinds of errors in this crate.

use crate::cells::Coord;
use displaydoc::Display;
use thiserror::Error;

/// All kinds of errors in this crate.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum Error {
    /// Row {row} has {found} cells, but the first row has {expected}.
    MalformedGrid {
        /// Index of the offending row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },
    /// Dimension should be non-negative, got {0}.
    InvalidDimension(isize),
    /// Dimension {0} is too large: the grid would not fit in memory.
    DimensionTooLarge(isize),
    /// Unknown pattern: {0:?}.
    UnknownPattern(String),
    /// Cell at {coord:?} is outside the {rows}x{cols} grid.
    OutOfBounds {
        /// The requested coordinates.
        coord: Coord,
        /// Number of rows of the grid.
        rows: usize,
        /// Number of columns of the grid.
        cols: usize,
    },
    /// Invalid character in plaintext grid: {0:?}.
    InvalidCell(char),
}
