//! Seed string parsing and encoding.
//!
//! A seed is one character per active cell in row-major order: `'0'`
//! for dead, `'1'` for live. Lengths are counted in characters, so a
//! multi-byte character is still a single (invalid) position.

use lifegrid_core::CellState;

use crate::error::ArenaError;

/// Parse `seed` into per-cell states, checking it has `expected_len` characters.
///
/// The length check runs first: a seed of the wrong length reports
/// [`ArenaError::SeedLengthMismatch`] even if it also contains invalid
/// characters. Otherwise the first offending character is reported as
/// [`ArenaError::InvalidSeedCharacter`].
pub fn parse_seed(seed: &str, expected_len: usize) -> Result<Vec<CellState>, ArenaError> {
    let seed_len = seed.chars().count();
    if seed_len != expected_len {
        return Err(ArenaError::SeedLengthMismatch {
            seed_len,
            expected: expected_len,
        });
    }
    seed.chars()
        .enumerate()
        .map(|(index, c)| {
            CellState::from_seed_char(c).ok_or(ArenaError::InvalidSeedCharacter { index, found: c })
        })
        .collect()
}

/// A seed of `len` dead cells.
pub fn zero_seed(len: usize) -> String {
    "0".repeat(len)
}

/// Encode states as a seed string.
pub fn encode_states<I>(states: I) -> String
where
    I: IntoIterator<Item = CellState>,
{
    states.into_iter().map(CellState::to_seed_char).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_seed() {
        let states = parse_seed("0110", 4).unwrap();
        assert_eq!(
            states,
            vec![
                CellState::Dead,
                CellState::Live,
                CellState::Live,
                CellState::Dead
            ]
        );
    }

    #[test]
    fn length_checked_before_characters() {
        assert_eq!(
            parse_seed("01x", 4),
            Err(ArenaError::SeedLengthMismatch {
                seed_len: 3,
                expected: 4
            })
        );
    }

    #[test]
    fn reports_first_bad_character() {
        assert_eq!(
            parse_seed("01a2", 4),
            Err(ArenaError::InvalidSeedCharacter {
                index: 2,
                found: 'a'
            })
        );
    }

    #[test]
    fn multibyte_character_counts_once() {
        assert_eq!(
            parse_seed("0●0", 3),
            Err(ArenaError::InvalidSeedCharacter {
                index: 1,
                found: '●'
            })
        );
    }

    #[test]
    fn zero_seed_and_encode() {
        assert_eq!(zero_seed(5), "00000");
        assert_eq!(
            encode_states([CellState::Live, CellState::Dead, CellState::Live]),
            "101"
        );
    }
}
