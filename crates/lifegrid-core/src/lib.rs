//! Core types for the lifegrid simulation workspace.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the per-cell vocabulary shared by every other crate: the two-state
//! [`CellState`], the [`Cell`] record stored in the arena field, the
//! [`Generation`] counter, the birth/survival rule itself, and the
//! [`Console`] seam every interactive front end talks through.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod console;
pub mod id;
pub mod rule;

pub use cell::{Cell, CellState};
pub use console::{Console, TextConsole};
pub use id::{Coord, Generation};
pub use rule::next_state;
