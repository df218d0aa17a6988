//! Error types for delimited text conversion.

use delim_map::MappingError;
use delim_model::CoerceError;
use thiserror::Error;

/// Errors that can occur while serializing or deserializing a document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// A value could not be converted to its field's declared type. Aborts
    /// the remaining records of the call.
    #[error("line {line}, column '{column}': {source}")]
    Coerce {
        line: usize,
        column: String,
        #[source]
        source: CoerceError,
    },

    #[error(transparent)]
    Mapping(#[from] MappingError),

    #[error("invalid separator {separator:?}: {reason}")]
    InvalidSeparator {
        separator: char,
        reason: &'static str,
    },
}

/// Result type for codec operations.
pub type Result<T> = std::result::Result<T, CodecError>;

#[cfg(test)]
mod tests {
    use delim_model::ScalarType;

    use super::*;

    #[test]
    fn coerce_error_display() {
        let err = CodecError::Coerce {
            line: 3,
            column: "Age".to_string(),
            source: CoerceError::new("old", ScalarType::U8),
        };
        assert_eq!(
            err.to_string(),
            "line 3, column 'Age': cannot convert 'old' to u8"
        );
    }

    #[test]
    fn separator_error_display() {
        let err = CodecError::InvalidSeparator {
            separator: '\n',
            reason: "line terminators cannot separate fields",
        };
        assert_eq!(
            err.to_string(),
            "invalid separator '\\n': line terminators cannot separate fields"
        );
    }
}
