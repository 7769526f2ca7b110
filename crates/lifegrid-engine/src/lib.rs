//! Console front end for lifegrid: prompts, rendering, save dialogs
//! and the tick-paced game loop.
//!
//! # Architecture
//!
//! - [`GameConfig`] holds every setting and validates them up front
//! - [`menu::prompt_dimensions`] asks for a new arena's size
//! - [`SeedGenerator`] produces random seeds, optionally reproducible
//! - [`TextRenderer`] draws frames; [`status_text`] builds the info block
//! - [`dialog`] offers to resume a save and to save on exit
//! - [`Game`] ties these together and paces generations against a
//!   crossbeam stop channel
//! - [`ChannelConsole`] shares one stdin reader between prompts and
//!   that stop channel
//!
//! All interaction goes through [`lifegrid_core::Console`], and all save
//! access through [`lifegrid_save::SaveStore`], so a whole game can be
//! driven from memory in tests.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod console;
pub mod dialog;
pub mod error;
pub mod game;
pub mod menu;
pub mod render;
pub mod seeds;

pub use config::{ConfigError, GameConfig};
pub use console::{spawn_line_reader, ChannelConsole};
pub use error::GameError;
pub use game::{Game, RunSummary};
pub use render::{status_text, TextRenderer};
pub use seeds::{SeedError, SeedGenerator};

pub use lifegrid_core::{Console, TextConsole};
