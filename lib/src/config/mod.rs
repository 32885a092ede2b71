//! Simulation configuration.

use crate::{
    cells::Coord,
    error::Error,
    grid::Grid,
    patterns::{self, Pattern},
    simulation::Simulation,
};
use derivative::Derivative;
use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Simulation configuration.
///
/// The initial grid and the [`Simulation`] will be generated from this
/// configuration.
#[derive(Clone, Debug, Derivative, PartialEq)]
#[derivative(Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct Config {
    /// Edge length of the square grid.
    #[derivative(Default(value = "50"))]
    pub dimension: isize,

    /// Name of the starting pattern.
    ///
    /// Any name accepted by [`Pattern::find`], or
    /// [`"Random"`](patterns::RANDOM).
    #[derivative(Default(value = "String::from(\"Empty\")"))]
    pub pattern: String,

    /// Milliseconds between two generations while playing.
    #[derivative(Default(value = "300"))]
    pub interval_ms: u64,

    /// Playing stops after this many generations.
    ///
    /// `None` means that it plays until stopped.
    pub max_generations: Option<u64>,

    /// Cells to flip after the pattern is placed, as `(row, column)`.
    pub toggles: Vec<Coord>,

    /// Seed of the random pattern.
    ///
    /// `None` means a different grid every time.
    pub seed: Option<u64>,

    /// Probability for a cell of the random pattern to be alive.
    #[derivative(Default(value = "0.5"))]
    pub density: f64,
}

impl Config {
    /// Sets up a new configuration with given dimension and pattern.
    pub fn new<S: ToString>(dimension: isize, pattern: S) -> Self {
        Config {
            dimension,
            pattern: pattern.to_string(),
            ..Config::default()
        }
    }

    /// Sets the dimension.
    pub fn set_dimension(mut self, dimension: isize) -> Self {
        self.dimension = dimension;
        self
    }

    /// Sets the pattern name.
    pub fn set_pattern<S: ToString>(mut self, pattern: S) -> Self {
        self.pattern = pattern.to_string();
        self
    }

    /// Sets the interval between two generations, in milliseconds.
    pub fn set_interval_ms(mut self, interval_ms: u64) -> Self {
        self.interval_ms = interval_ms;
        self
    }

    /// Sets the generation limit.
    pub fn set_max_generations<T: Into<Option<u64>>>(mut self, max_generations: T) -> Self {
        self.max_generations = max_generations.into();
        self
    }

    /// Sets the cells to flip.
    pub fn set_toggles(mut self, toggles: Vec<Coord>) -> Self {
        self.toggles = toggles;
        self
    }

    /// Sets the seed of the random pattern.
    pub fn set_seed<T: Into<Option<u64>>>(mut self, seed: T) -> Self {
        self.seed = seed.into();
        self
    }

    /// Sets the density of the random pattern.
    pub fn set_density(mut self, density: f64) -> Self {
        self.density = density;
        self
    }

    /// The interval between two generations.
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    /// Creates the initial grid.
    ///
    /// Returns an error if the dimension is negative, the pattern is
    /// unknown, or a toggled cell is outside the grid.
    pub fn grid(&self) -> Result<Grid, Error> {
        let mut grid = if patterns::is_random(&self.pattern) {
            patterns::random_grid(self.dimension, self.density, self.seed)?
        } else {
            Pattern::find(&self.pattern)?.centered(self.dimension)?
        };
        for &coord in self.toggles.iter() {
            grid = grid.toggled(coord)?;
        }
        Ok(grid)
    }

    /// Creates a stopped simulation from the configuration.
    pub fn simulation(&self) -> Result<Simulation, Error> {
        let grid = self.grid()?;
        Ok(Simulation::new(grid).set_max_generations(self.max_generations))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.dimension, 50);
        assert_eq!(config.pattern, "Empty");
        assert_eq!(config.interval(), Duration::from_millis(300));
        assert_eq!(config.max_generations, None);
    }

    #[test]
    fn toggles_are_applied() -> Result<(), Error> {
        let config = Config::new(5, "Empty").set_toggles(vec![(0, 0), (4, 4), (0, 0)]);
        let grid = config.grid()?;
        assert_eq!(grid.alive_cells().collect::<Vec<_>>(), vec![(4, 4)]);

        let config = config.set_toggles(vec![(5, 0)]);
        assert!(matches!(config.grid(), Err(Error::OutOfBounds { .. })));
        Ok(())
    }

    #[test]
    fn random_pattern() -> Result<(), Error> {
        let config = Config::new(16, "random").set_seed(7).set_density(0.25);
        assert_eq!(config.grid()?, config.grid()?);
        Ok(())
    }

    #[test]
    fn errors() {
        assert_eq!(
            Config::new(-1, "LWSS").grid(),
            Err(Error::InvalidDimension(-1))
        );
        assert_eq!(
            Config::new(10, "Pulsar").simulation(),
            Err(Error::UnknownPattern(String::from("Pulsar")))
        );
    }
}
