//! Lifegrid: Conway's Game of Life on a bounded arena.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all lifegrid sub-crates. It also builds the `lifegrid` binary.
//!
//! # Quick start
//!
//! ```rust
//! use lifegrid::prelude::*;
//!
//! // A blinker flips between horizontal and vertical every generation.
//! let mut arena = CellArena::new(3, 3).unwrap();
//! arena.initialize_with_seed("000111000").unwrap();
//! arena.update();
//! assert_eq!(arena.model().state_string(), "010010010");
//! assert_eq!(arena.generation(), Generation(1));
//!
//! let live: Vec<_> = arena
//!     .active_cells()
//!     .filter(|cell| cell.state == CellState::Live)
//!     .map(|cell| cell.coord())
//!     .collect();
//! assert_eq!(live, vec![(1, 2), (2, 2), (3, 2)]);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `lifegrid-core` | Cells, generations, the life rule, the console trait |
//! | [`arena`] | `lifegrid-arena` | Bordered arena, seeds, row-major traversal |
//! | [`save`] | `lifegrid-save` | JSON save documents and save stores |
//! | [`engine`] | `lifegrid-engine` | Prompts, rendering and the game loop |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Cell types, the life rule and the console seam (`lifegrid-core`).
pub use lifegrid_core as types;

/// Bordered arena storage and generation updates (`lifegrid-arena`).
///
/// [`arena::CellArena`] is the main entry point; it is also in the
/// [`prelude`].
pub use lifegrid_arena as arena;

/// Save documents and stores (`lifegrid-save`).
pub use lifegrid_save as save;

/// Interactive game loop (`lifegrid-engine`).
pub use lifegrid_engine as engine;

/// Common imports for typical lifegrid usage.
pub mod prelude {
    // Core types
    pub use lifegrid_core::{Cell, CellState, Console, Coord, Generation};

    // Arena
    pub use lifegrid_arena::{ActiveCells, ArenaError, ArenaModel, CellArena};

    // Persistence
    pub use lifegrid_save::{DirStore, SaveError, SaveStore};

    // Engine
    pub use lifegrid_engine::{Game, GameConfig, GameError, RunSummary, TextRenderer};
}
