//! Conversion between [`ArenaModel`] and [`SaveDocument`].

use lifegrid_arena::{ArenaError, ArenaModel, CellArena, Dimensions};
use lifegrid_core::Cell;

use crate::error::SaveError;
use crate::types::{CellRecord, SaveDocument};

/// Capture a model as a save document.
pub fn to_document(model: &ArenaModel) -> SaveDocument {
    SaveDocument {
        field_length: model.length(),
        field_height: model.height(),
        iteration_count: model.iteration_count(),
        seed: model.seed().to_string(),
        active_cells: model.active_cells().map(CellRecord::from).collect(),
    }
}

/// Rebuild a model from a save document.
///
/// The active cells are remapped into a freshly allocated bordered
/// field. The result passes the same seed-size check as
/// [`CellArena::assign_model`], so it can always be assigned.
///
/// Dimensions and the cell count are checked before the field is
/// allocated.
pub fn to_model(document: SaveDocument) -> Result<ArenaModel, SaveError> {
    let dims = Dimensions::new(document.field_length, document.field_height)?;
    if document.active_cells.len() != dims.area() {
        return Err(ArenaError::ActiveCellCountMismatch {
            expected: dims.area(),
            found: document.active_cells.len(),
        }
        .into());
    }
    let model = ArenaModel::from_active_cells(
        document.field_length,
        document.field_height,
        document.iteration_count,
        document.seed,
        document.active_cells.into_iter().map(Cell::from),
    )?;
    Ok(CellArena::from_model(model)?.into_model())
}

/// Serialize a model to a JSON string.
pub fn to_json(model: &ArenaModel) -> Result<String, SaveError> {
    Ok(serde_json::to_string(&to_document(model))?)
}

/// Parse a JSON string into a model.
pub fn from_json(json: &str) -> Result<ArenaModel, SaveError> {
    let document: SaveDocument = serde_json::from_str(json)?;
    to_model(document)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A save of a 3x3 arena one generation after seeding `010100011`.
    const SAVED: &str = concat!(
        r#"{"FieldLength":3,"FieldHeight":3,"IterationCount":1,"Seed":"010100011","ActiveCells":["#,
        r#"{"Col":1,"Row":1,"State":1,"LiveNeighborCellCount":1},"#,
        r#"{"Col":2,"Row":1,"State":1,"LiveNeighborCellCount":2},"#,
        r#"{"Col":3,"Row":1,"State":1,"LiveNeighborCellCount":1},"#,
        r#"{"Col":1,"Row":2,"State":0,"LiveNeighborCellCount":1},"#,
        r#"{"Col":2,"Row":2,"State":1,"LiveNeighborCellCount":3},"#,
        r#"{"Col":3,"Row":2,"State":0,"LiveNeighborCellCount":1},"#,
        r#"{"Col":1,"Row":3,"State":1,"LiveNeighborCellCount":2},"#,
        r#"{"Col":2,"Row":3,"State":0,"LiveNeighborCellCount":2},"#,
        r#"{"Col":3,"Row":3,"State":1,"LiveNeighborCellCount":2}]}"#
    );

    #[test]
    fn reads_saved_document() {
        let model = from_json(SAVED).unwrap();
        assert_eq!(model.length(), 3);
        assert_eq!(model.height(), 3);
        assert_eq!(model.iteration_count(), 1);
        assert_eq!(model.seed(), "010100011");
        assert_eq!(model.state_string(), "111010101");
        assert_eq!(model.cell(2, 2).unwrap().live_neighbors, 3);
    }

    #[test]
    fn writes_identical_document() {
        let model = from_json(SAVED).unwrap();
        assert_eq!(to_json(&model).unwrap(), SAVED);
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(
            from_json("incorrect_json_string"),
            Err(SaveError::Json(_))
        ));
        assert!(matches!(from_json(""), Err(SaveError::Json(_))));
    }

    #[test]
    fn rejects_seed_size_mismatch() {
        let json = SAVED.replace(r#""Seed":"010100011""#, r#""Seed":"0101""#);
        assert!(matches!(
            from_json(&json),
            Err(SaveError::Model(ArenaError::SeedSizeMismatch {
                seed_len: 4,
                expected: 9
            }))
        ));
    }

    #[test]
    fn rejects_missing_cells() {
        let json = SAVED.replace(
            r#",{"Col":3,"Row":3,"State":1,"LiveNeighborCellCount":2}"#,
            "",
        );
        assert!(matches!(
            from_json(&json),
            Err(SaveError::Model(ArenaError::ActiveCellCountMismatch {
                expected: 9,
                found: 8
            }))
        ));
    }

    #[test]
    fn rejects_huge_dimensions_without_allocating() {
        let json = concat!(
            r#"{"FieldLength":1000000000,"FieldHeight":1000000000,"#,
            r#""IterationCount":0,"Seed":"","ActiveCells":[]}"#
        );
        assert!(matches!(
            from_json(json),
            Err(SaveError::Model(ArenaError::DimensionTooLarge {
                length: 1_000_000_000,
                height: 1_000_000_000
            }))
        ));
    }

    #[test]
    fn rejects_empty_cell_list_for_large_arena() {
        let json = concat!(
            r#"{"FieldLength":4000,"FieldHeight":4000,"#,
            r#""IterationCount":0,"Seed":"","ActiveCells":[]}"#
        );
        assert!(matches!(
            from_json(json),
            Err(SaveError::Model(ArenaError::ActiveCellCountMismatch {
                expected: 16_000_000,
                found: 0
            }))
        ));
    }

    #[test]
    fn rejects_exhausted_generation_count() {
        let json = SAVED.replace(
            r#""IterationCount":1"#,
            r#""IterationCount":18446744073709551615"#,
        );
        assert!(matches!(
            from_json(&json),
            Err(SaveError::Model(ArenaError::IterationCountOverflow {
                count: u64::MAX
            }))
        ));
    }

    #[test]
    fn rejects_small_dimensions() {
        let json = SAVED.replace(r#""FieldHeight":3"#, r#""FieldHeight":2"#);
        assert!(matches!(
            from_json(&json),
            Err(SaveError::Model(ArenaError::InvalidDimension { .. }))
        ));
    }
}
