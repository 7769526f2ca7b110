//! Strongly-typed counters and the [`Coord`] type alias.

use std::fmt;

/// Monotonically increasing generation counter.
///
/// Generation 0 is the seeded (or freshly created) state. Each call to
/// the arena's update advances it by exactly one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Generation(pub u64);

impl Generation {
    /// The next generation.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for Generation {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

/// A `(row, col)` position inside the padded field.
///
/// Row 0, column 0, row `height + 1` and column `length + 1` are the
/// dead border; interior coordinates are 1-based.
pub type Coord = (usize, usize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generation_next_increments_by_one() {
        assert_eq!(Generation(0).next(), Generation(1));
        assert_eq!(Generation(41).next().next(), Generation(43));
    }

    #[test]
    fn generation_display_is_bare_number() {
        assert_eq!(Generation(7).to_string(), "7");
    }
}
