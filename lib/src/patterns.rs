//! Named starting patterns.
//!
//! Every pattern is placed at the center of a square grid.
//! Cells that do not fit into the grid are dropped.

use crate::{
    cells::{Coord, ALIVE},
    error::Error,
    grid::Grid,
};
use rand::{rngs::StdRng, Rng, SeedableRng};

/// A named pattern.
///
/// The cells are given relative to the top-left corner of the bounding box.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Pattern {
    /// The name of the pattern.
    pub name: &'static str,
    /// Other names that are accepted by [`Pattern::find`].
    pub aliases: &'static [&'static str],
    /// Height of the bounding box.
    pub height: usize,
    /// Width of the bounding box.
    pub width: usize,
    /// Living cells, as `(row, column)`.
    pub cells: &'static [(usize, usize)],
}

/// No living cells at all.
pub const EMPTY: Pattern = Pattern {
    name: "Empty",
    aliases: &["Clear"],
    height: 0,
    width: 0,
    cells: &[],
};

/// The Gosper Glider Gun.
///
/// Emits a glider every 30 generations.
#[rustfmt::skip]
pub const GLIDER_GUN: Pattern = Pattern {
    name: "GliderGun",
    aliases: &["Gosper", "GosperGliderGun"],
    height: 11,
    width: 38,
    cells: &[
        (5, 1), (5, 2), (6, 1), (6, 2),
        (5, 11), (6, 11), (7, 11),
        (4, 12), (8, 12),
        (3, 13), (9, 13),
        (3, 14), (9, 14),
        (6, 15),
        (4, 16), (8, 16),
        (5, 17), (6, 17), (7, 17),
        (6, 18),
        (3, 21), (4, 21), (5, 21),
        (3, 22), (4, 22), (5, 22),
        (2, 23), (6, 23),
        (1, 25), (2, 25), (6, 25), (7, 25),
        (3, 35), (4, 35), (3, 36), (4, 36),
    ],
};

/// The Lightweight Spaceship.
///
/// Moves two columns to the right every 4 generations.
#[rustfmt::skip]
pub const LWSS: Pattern = Pattern {
    name: "LightweightSpaceship",
    aliases: &["LWSS"],
    height: 5,
    width: 5,
    cells: &[
        (0, 1), (0, 2), (0, 3), (0, 4),
        (1, 0), (1, 4),
        (2, 4),
        (3, 0), (3, 3),
    ],
};

/// The Glider.
pub const GLIDER: Pattern = Pattern {
    name: "Glider",
    aliases: &[],
    height: 3,
    width: 3,
    cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
};

/// The Blinker, in its horizontal phase.
pub const BLINKER: Pattern = Pattern {
    name: "Blinker",
    aliases: &[],
    height: 1,
    width: 3,
    cells: &[(0, 0), (0, 1), (0, 2)],
};

/// The Block.
pub const BLOCK: Pattern = Pattern {
    name: "Block",
    aliases: &[],
    height: 2,
    width: 2,
    cells: &[(0, 0), (0, 1), (1, 0), (1, 1)],
};

/// The name of the random seed. It is not a [`Pattern`].
pub const RANDOM: &str = "Random";

/// Lowercase, without separators.
fn normalize(name: &str) -> String {
    name.chars()
        .filter(|&c| !matches!(c, '-' | '_' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Whether `name` refers to the random seed.
pub fn is_random(name: &str) -> bool {
    normalize(name) == normalize(RANDOM)
}

impl Pattern {
    /// All the patterns.
    pub const ALL: [Pattern; 6] = [EMPTY, GLIDER_GUN, LWSS, GLIDER, BLINKER, BLOCK];

    /// Finds a pattern by its name or one of its aliases.
    ///
    /// Case, `-`, `_` and spaces are ignored.
    pub fn find(name: &str) -> Result<Pattern, Error> {
        let key = normalize(name);
        Pattern::ALL
            .iter()
            .find(|p| {
                normalize(p.name) == key || p.aliases.iter().any(|a| normalize(a) == key)
            })
            .copied()
            .ok_or_else(|| Error::UnknownPattern(name.to_string()))
    }

    /// Where the top-left corner of the bounding box goes in a
    /// `dimension × dimension` grid.
    ///
    /// Rounded down. May be negative if the pattern does not fit.
    pub fn offset(&self, dimension: isize) -> Coord {
        (
            (dimension - self.height as isize).div_euclid(2),
            (dimension - self.width as isize).div_euclid(2),
        )
    }

    /// A `dimension × dimension` grid with the pattern at the center.
    pub fn centered(&self, dimension: isize) -> Result<Grid, Error> {
        let mut grid = empty_grid(dimension)?;
        let (row, col) = self.offset(dimension);
        for &(r, c) in self.cells {
            grid.set((row + r as isize, col + c as isize), ALIVE);
        }
        Ok(grid)
    }
}

/// Checks the dimension and converts it to a size.
fn size(dimension: isize) -> Result<usize, Error> {
    if dimension < 0 {
        return Err(Error::InvalidDimension(dimension));
    }
    let size = dimension as usize;
    size.checked_mul(size).ok_or(Error::DimensionTooLarge(dimension))?;
    Ok(size)
}

/// A `dimension × dimension` grid where every cell is dead.
pub fn empty_grid(dimension: isize) -> Result<Grid, Error> {
    let size = size(dimension)?;
    Ok(Grid::new(size, size))
}

/// A `dimension × dimension` grid with the named pattern at the center.
pub fn seeded_grid(name: &str, dimension: isize) -> Result<Grid, Error> {
    let pattern = Pattern::find(name)?;
    pattern.centered(dimension)
}

/// A `dimension × dimension` grid where each cell is alive with
/// probability `density`.
///
/// `density` is clamped to `[0, 1]`. The same `seed` always gives
/// the same grid; `None` draws a seed from the system.
pub fn random_grid(dimension: isize, density: f64, seed: Option<u64>) -> Result<Grid, Error> {
    let size = size(dimension)?;
    let density = if density.is_nan() {
        0.0
    } else {
        density.clamp(0.0, 1.0)
    };
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    Ok(Grid::from_fn(size, size, |_, _| rng.gen_bool(density).into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glider_gun_in_50() -> Result<(), Error> {
        let grid = seeded_grid("GliderGun", 50)?;
        assert_eq!(GLIDER_GUN.offset(50), (19, 6));
        assert_eq!(grid.population(), 36);
        for &(r, c) in GLIDER_GUN.cells {
            assert!(grid.get(19 + r, 6 + c).unwrap().is_alive());
        }
        Ok(())
    }

    #[test]
    fn bounding_boxes() {
        for pattern in Pattern::ALL.iter() {
            for &(r, c) in pattern.cells {
                assert!(r < pattern.height && c < pattern.width, "{}", pattern.name);
            }
        }
        assert_eq!(GLIDER_GUN.cells.len(), 36);
        assert_eq!(LWSS.cells.len(), 9);
    }

    #[test]
    fn names() {
        assert_eq!(Pattern::find("lwss"), Ok(LWSS));
        assert_eq!(Pattern::find("Lightweight Spaceship"), Ok(LWSS));
        assert_eq!(Pattern::find("glider-gun"), Ok(GLIDER_GUN));
        assert_eq!(Pattern::find("GOSPER"), Ok(GLIDER_GUN));
        assert_eq!(
            seeded_grid("Pulsar", 10),
            Err(Error::UnknownPattern(String::from("Pulsar")))
        );
        assert!(is_random("random"));
        assert!(Pattern::find(RANDOM).is_err());
    }

    #[test]
    fn negative_offsets_are_clipped() -> Result<(), Error> {
        assert_eq!(GLIDER_GUN.offset(0), (-6, -19));
        assert_eq!(GLIDER_GUN.offset(1), (-5, -19));
        assert_eq!(seeded_grid("GliderGun", 0)?.rows(), 0);
        assert_eq!(seeded_grid("GliderGun", 1)?.population(), 0);
        assert_eq!(seeded_grid("GliderGun", 4)?.population(), 4);
        assert_eq!(seeded_grid("GliderGun", 10)?.population(), 17);
        let lwss = seeded_grid("LWSS", 4)?;
        assert_eq!(lwss.alive_cells().collect::<Vec<_>>(), vec![(0, 3), (1, 3), (2, 2)]);
        Ok(())
    }

    #[test]
    fn huge_dimension() {
        assert_eq!(
            empty_grid(isize::MAX),
            Err(Error::DimensionTooLarge(isize::MAX))
        );
        assert_eq!(
            seeded_grid("Glider", isize::MAX),
            Err(Error::DimensionTooLarge(isize::MAX))
        );
        assert_eq!(
            random_grid(isize::MAX, 0.5, Some(0)),
            Err(Error::DimensionTooLarge(isize::MAX))
        );
    }

    #[test]
    fn invalid_dimension() {
        assert_eq!(empty_grid(-1), Err(Error::InvalidDimension(-1)));
        assert_eq!(seeded_grid("LWSS", -3), Err(Error::InvalidDimension(-3)));
        assert_eq!(random_grid(-2, 0.5, Some(1)), Err(Error::InvalidDimension(-2)));
    }

    #[test]
    fn empty() -> Result<(), Error> {
        assert_eq!(empty_grid(0)?.rows(), 0);
        assert_eq!(empty_grid(7)?, Grid::new(7, 7));
        assert_eq!(seeded_grid("Empty", 7)?, Grid::new(7, 7));
        Ok(())
    }

    #[test]
    fn random_is_reproducible() -> Result<(), Error> {
        let a = random_grid(20, 0.3, Some(42))?;
        let b = random_grid(20, 0.3, Some(42))?;
        assert_eq!(a, b);
        assert_eq!(random_grid(20, 0.0, Some(1))?.population(), 0);
        assert_eq!(random_grid(20, 2.0, Some(1))?.population(), 400);
        assert_eq!(random_grid(5, f64::NAN, None)?.population(), 0);
        Ok(())
    }
}
