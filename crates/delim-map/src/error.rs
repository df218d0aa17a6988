//! Error types for field mapping.

use thiserror::Error;

/// Errors raised while resolving a field mapping.
///
/// Malformed bindings never fail; they fall back to the declared name and
/// declaration index. Only an ambiguous column contract is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MappingError {
    /// Two fields resolved to the same external name.
    #[error("fields '{first}' and '{second}' of {record} both map to column '{name}'")]
    DuplicateExternalName {
        record: &'static str,
        name: String,
        first: &'static str,
        second: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, MappingError>;
