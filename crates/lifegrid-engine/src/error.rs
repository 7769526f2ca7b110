//! Errors surfaced by the game loop.

use std::error::Error;
use std::fmt;
use std::io;

use lifegrid_arena::ArenaError;
use lifegrid_save::SaveError;

use crate::config::ConfigError;
use crate::seeds::SeedError;

/// Anything that can stop a game.
#[derive(Debug)]
pub enum GameError {
    /// The configuration failed validation.
    Config(ConfigError),
    /// The arena rejected a dimension, seed or model.
    Arena(ArenaError),
    /// Saves could not be listed.
    Save(SaveError),
    /// A random seed could not be generated.
    Seed(SeedError),
    /// The console failed or its input closed.
    Io(io::Error),
    /// [`Game::step`](crate::Game::step) or [`Game::run`](crate::Game::run)
    /// was called before [`Game::start`](crate::Game::start).
    NotStarted,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Arena(e) => write!(f, "arena: {e}"),
            Self::Save(e) => write!(f, "save: {e}"),
            Self::Seed(e) => write!(f, "seed: {e}"),
            Self::Io(e) => write!(f, "console: {e}"),
            Self::NotStarted => write!(f, "game has not been started"),
        }
    }
}

impl Error for GameError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Arena(e) => Some(e),
            Self::Save(e) => Some(e),
            Self::Seed(e) => Some(e),
            Self::Io(e) => Some(e),
            Self::NotStarted => None,
        }
    }
}

impl From<ConfigError> for GameError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<ArenaError> for GameError {
    fn from(e: ArenaError) -> Self {
        Self::Arena(e)
    }
}

impl From<SaveError> for GameError {
    fn from(e: SaveError) -> Self {
        Self::Save(e)
    }
}

impl From<SeedError> for GameError {
    fn from(e: SeedError) -> Self {
        Self::Seed(e)
    }
}

impl From<io::Error> for GameError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
