use iamc_model::error::HierarchyError;
use thiserror::Error;

/// Row-scoped processing errors.
///
/// Each variant carries the offending column, row index, or conflicting
/// values, so bad input can be located without re-deriving it. Row indexes
/// are zero-based positions within the data rows (the header is not
/// counted).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RowError {
    #[error("column `{field}` required by the structure is missing from the input header")]
    MissingField { field: String },

    #[error("row {row}: {source}")]
    InvalidPath {
        row: usize,
        #[source]
        source: HierarchyError,
    },

    #[error("row {row}: series key already present: {key}")]
    DuplicateKey { row: usize, key: String },

    #[error(
        "row {row}: attribute `{attribute}` conflicts for series [{key}]: have `{existing}`, got `{incoming}`"
    )]
    AttributeConflict {
        row: usize,
        key: String,
        attribute: String,
        existing: String,
        incoming: String,
    },

    #[error("row {row}: key carries {actual} dimension values, structure declares {expected}")]
    KeyShape {
        row: usize,
        expected: usize,
        actual: usize,
    },
}

impl RowError {
    /// Row index the error is scoped to, if it is row-scoped.
    pub fn row(&self) -> Option<usize> {
        match self {
            RowError::MissingField { .. } => None,
            RowError::InvalidPath { row, .. }
            | RowError::DuplicateKey { row, .. }
            | RowError::AttributeConflict { row, .. }
            | RowError::KeyShape { row, .. } => Some(*row),
        }
    }
}
