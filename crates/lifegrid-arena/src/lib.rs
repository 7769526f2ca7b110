//! Ghost-bordered cell arena and generation engine.
//!
//! # Architecture
//!
//! ```text
//! CellArena (engine: seed, update, recount)
//! └── ArenaModel (state)
//!     ├── Dimensions (length, height, padded index arithmetic)
//!     ├── Vec<Cell>  ((height+2) x (length+2), row-major, dead border)
//!     ├── seed       ('0'/'1' per active cell)
//!     └── iteration_count
//! ```
//!
//! The dead border ring means every interior cell has all 8 neighbours
//! inside the field, so neighbour counting has no edge cases. All
//! interior traversal goes through [`InteriorCoords`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod arena;
pub mod dims;
pub mod error;
pub mod model;
pub mod seed;
pub mod traverse;

pub use arena::CellArena;
pub use dims::Dimensions;
pub use error::ArenaError;
pub use model::ArenaModel;
pub use seed::parse_seed;
pub use traverse::{ActiveCells, InteriorCoords};
