//! Cells in the cellular automaton.

use std::ops::Not;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Possible states of a cell.
///
/// There are exactly two of them, [`DEAD`] and [`ALIVE`].
/// Raw integer values are normalized when they are converted into a
/// `State`: `0` is [`DEAD`], anything else is [`ALIVE`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(from = "u8", into = "u8")
)]
pub struct State(u8);

/// The Dead state.
pub const DEAD: State = State(0);
/// The Alive state.
pub const ALIVE: State = State(1);

impl State {
    /// Whether the state is [`ALIVE`].
    #[inline]
    pub fn is_alive(self) -> bool {
        self == ALIVE
    }

    /// The state as `0` or `1`.
    #[inline]
    pub fn raw(self) -> u8 {
        self.0
    }
}

/// Flips the state.
impl Not for State {
    type Output = Self;

    #[inline]
    fn not(self) -> Self::Output {
        match self {
            ALIVE => DEAD,
            _ => ALIVE,
        }
    }
}

impl From<bool> for State {
    #[inline]
    fn from(alive: bool) -> Self {
        if alive {
            ALIVE
        } else {
            DEAD
        }
    }
}

/// Any non-zero value is alive.
impl From<u8> for State {
    #[inline]
    fn from(raw: u8) -> Self {
        State::from(raw != 0)
    }
}

impl From<State> for u8 {
    #[inline]
    fn from(state: State) -> Self {
        state.0
    }
}

/// The coordinates of a cell.
///
/// `(row, column)`, both 0-indexed.
/// They are signed so that positions outside the grid can be expressed
/// (and rejected) without wrapping.
pub type Coord = (isize, isize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_raw_values() {
        assert_eq!(State::from(0), DEAD);
        assert_eq!(State::from(1), ALIVE);
        assert_eq!(State::from(7), ALIVE);
        assert_eq!(State::from(255).raw(), 1);
    }

    #[test]
    fn not_flips() {
        assert_eq!(!DEAD, ALIVE);
        assert_eq!(!ALIVE, DEAD);
        assert!(State::default() == DEAD);
    }
}
