//! Save and load lifegrid arenas as JSON documents.
//!
//! # Architecture
//!
//! - [`SaveDocument`] / [`CellRecord`] define the on-disk JSON layout
//! - [`codec`] converts between documents and [`ArenaModel`]s, remapping
//!   saved cells into a fresh bordered field
//! - [`SaveStore`] abstracts where saves live; [`DirStore`] uses a
//!   directory of `*.save.json` files
//! - [`save`] and [`load`] tie the two together

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod codec;
pub mod error;
pub mod store;
pub mod types;

use lifegrid_arena::ArenaModel;
use tracing::info;

pub use codec::{from_json, to_document, to_json, to_model};
pub use error::SaveError;
pub use store::{save_file_name, DirStore, SaveStore, SAVE_EXTENSION};
pub use types::{CellRecord, SaveDocument};

/// Serialize `model` and write it to `store` under `name`.
pub fn save<S: SaveStore + ?Sized>(
    store: &S,
    name: &str,
    model: &ArenaModel,
) -> Result<(), SaveError> {
    let json = to_json(model)?;
    store.write(name, &json)?;
    info!(
        name,
        generation = model.iteration_count(),
        "saved arena"
    );
    Ok(())
}

/// Read the save called `name` from `store` and rebuild its model.
pub fn load<S: SaveStore + ?Sized>(store: &S, name: &str) -> Result<ArenaModel, SaveError> {
    let json = store.read(name)?;
    let model = from_json(&json)?;
    info!(
        name,
        length = model.length(),
        height = model.height(),
        generation = model.iteration_count(),
        "loaded arena"
    );
    Ok(model)
}
