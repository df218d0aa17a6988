//! Codec configuration.

use serde::{Deserialize, Serialize};

use crate::error::{CodecError, Result};

/// Separator used when none is configured.
pub const DEFAULT_SEPARATOR: char = ';';

/// Options fixed at codec construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecOptions {
    /// Field separator; every line also ends with one.
    pub separator: char,
}

impl Default for CodecOptions {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR,
        }
    }
}

impl CodecOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    /// Rejects separators that would collide with the line structure or
    /// that sanitizing cannot remove from values.
    pub fn validate(&self) -> Result<()> {
        let reason = match self.separator {
            '\n' | '\r' => "line terminators cannot separate fields",
            // Sanitizing replaces the separator with a space.
            ' ' => "a space separator cannot be sanitized out of values",
            _ => return Ok(()),
        };
        Err(CodecError::InvalidSeparator {
            separator: self.separator,
            reason,
        })
    }
}
