use thiserror::Error;

use crate::scalar::ScalarType;

/// A textual value could not be converted to a field's declared type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot convert '{value}' to {target}")]
pub struct CoerceError {
    pub value: String,
    pub target: ScalarType,
}

impl CoerceError {
    pub fn new(value: impl Into<String>, target: ScalarType) -> Self {
        Self {
            value: value.into(),
            target,
        }
    }
}

#[derive(Debug, Error)]
pub enum ModelError {
    /// A row does not carry one cell per column.
    #[error("row length mismatch: expected {expected} cells, got {actual}")]
    RowLength { expected: usize, actual: usize },

    #[error("unknown column: {name}")]
    UnknownColumn { name: String },
}

pub type Result<T> = std::result::Result<T, ModelError>;
