//! Game configuration and validation.
//!
//! [`GameConfig`] collects every knob the game loop reads.
//! [`GameConfig::validate`] checks them up front so that a bad value is
//! reported before any prompt is shown.

use std::error::Error;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use lifegrid_arena::Dimensions;

/// Default live-cell glyph.
pub const DEFAULT_LIVE_GLYPH: &str = "●";
/// Default dead-cell glyph.
pub const DEFAULT_DEAD_GLYPH: &str = "◌";
/// Default hint appended to the status block.
pub const DEFAULT_STOP_HINT: &str = "Press Enter to stop the game.";

// ── ConfigError ────────────────────────────────────────────────────

/// A [`GameConfig`] value that cannot be used.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Only one of `length` and `height` was given.
    PartialDimensions,
    /// A configured dimension is below [`Dimensions::MIN`].
    InvalidDimension {
        /// Configured length.
        length: usize,
        /// Configured height.
        height: usize,
    },
    /// The bordered field would exceed [`Dimensions::MAX_PADDED_CELLS`].
    DimensionTooLarge {
        /// Configured length.
        length: usize,
        /// Configured height.
        height: usize,
    },
    /// An initial seed was given without both dimensions.
    SeedWithoutDimensions,
    /// A glyph is empty or both glyphs are the same.
    InvalidGlyphs {
        /// Description of the problem.
        reason: String,
    },
    /// `max_generations` was set to zero.
    ZeroGenerationLimit,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PartialDimensions => {
                write!(f, "length and height must be configured together")
            }
            Self::InvalidDimension { length, height } => write!(
                f,
                "arena {length}x{height} is below the minimum of {min}x{min}",
                min = Dimensions::MIN
            ),
            Self::DimensionTooLarge { length, height } => {
                write!(f, "arena {length}x{height} is too large")
            }
            Self::SeedWithoutDimensions => {
                write!(f, "an initial seed requires both length and height")
            }
            Self::InvalidGlyphs { reason } => write!(f, "invalid glyphs: {reason}"),
            Self::ZeroGenerationLimit => write!(f, "max_generations must be at least 1"),
        }
    }
}

impl Error for ConfigError {}

// ── GameConfig ─────────────────────────────────────────────────────

/// Everything the game loop needs besides its console and save store.
#[derive(Clone, Debug, PartialEq)]
pub struct GameConfig {
    /// Arena length. Prompted for when `None`.
    pub length: Option<usize>,
    /// Arena height. Prompted for when `None`.
    pub height: Option<usize>,
    /// Pause between generations. Default: 1s.
    pub tick_interval: Duration,
    /// Glyph drawn for live cells.
    pub live_glyph: String,
    /// Glyph drawn for dead cells.
    pub dead_glyph: String,
    /// Clear the console before each frame. Default: true.
    pub clear_each_frame: bool,
    /// Seed used instead of a random one. Requires both dimensions.
    pub initial_seed: Option<String>,
    /// Seed for the random seed generator. `None` draws from the OS.
    pub rng_seed: Option<u64>,
    /// Stop after this many generations even without a stop signal.
    pub max_generations: Option<u64>,
    /// Offer to load a save on start and to save on exit. Default: true.
    pub save_prompts: bool,
    /// Directory holding `*.save.json` files. Default: the working directory.
    pub save_dir: PathBuf,
    /// Last line of the status block.
    pub stop_hint: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            length: None,
            height: None,
            tick_interval: Duration::from_millis(1000),
            live_glyph: DEFAULT_LIVE_GLYPH.to_string(),
            dead_glyph: DEFAULT_DEAD_GLYPH.to_string(),
            clear_each_frame: true,
            initial_seed: None,
            rng_seed: None,
            max_generations: None,
            save_prompts: true,
            save_dir: PathBuf::from("."),
            stop_hint: DEFAULT_STOP_HINT.to_string(),
        }
    }
}

impl GameConfig {
    /// Check every field without touching the console or the disk.
    ///
    /// The seed itself is not parsed here; a malformed seed surfaces as
    /// an arena error when the game starts.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match (self.length, self.height) {
            (Some(length), Some(height)) => {
                if length < Dimensions::MIN || height < Dimensions::MIN {
                    return Err(ConfigError::InvalidDimension { length, height });
                }
                if Dimensions::new(length, height).is_err() {
                    return Err(ConfigError::DimensionTooLarge { length, height });
                }
            }
            (None, None) => {
                if self.initial_seed.is_some() {
                    return Err(ConfigError::SeedWithoutDimensions);
                }
            }
            _ => return Err(ConfigError::PartialDimensions),
        }
        if self.live_glyph.is_empty() || self.dead_glyph.is_empty() {
            return Err(ConfigError::InvalidGlyphs {
                reason: "glyphs must not be empty".to_string(),
            });
        }
        if self.live_glyph == self.dead_glyph {
            return Err(ConfigError::InvalidGlyphs {
                reason: format!("live and dead glyphs are both {:?}", self.live_glyph),
            });
        }
        if self.max_generations == Some(0) {
            return Err(ConfigError::ZeroGenerationLimit);
        }
        Ok(())
    }

    /// Both dimensions, when configured.
    pub fn dimensions(&self) -> Option<(usize, usize)> {
        self.length.zip(self.height)
    }
}
