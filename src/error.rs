//! Error types for argument conversion and CLI operations.
//!
//! Conversion failures carry the offending argument verbatim so the command
//! layer can tell the user exactly which value it could not understand.

use std::fmt;
use thiserror::Error;

/// Result type alias for timewords operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for all timewords operations
#[derive(Error, Debug)]
pub enum Error {
    /// A raw argument could not be converted
    #[error("Conversion error: {0}")]
    Conversion(#[from] ConversionError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// The category of value a converter was asked to produce.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ValueKind {
    /// Signed integer
    Int,
    /// Compact duration string such as `1d5h30m10s`
    Duration,
    /// Yes/no token
    Bool,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ValueKind::Int => "integer",
            ValueKind::Duration => "duration",
            ValueKind::Bool => "boolean",
        })
    }
}

/// A raw string could not be converted into the requested kind of value.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
#[error("invalid {kind}: {argument:?}")]
pub struct ConversionError {
    kind: ValueKind,
    argument: String,
}

impl ConversionError {
    pub fn new(kind: ValueKind, argument: impl Into<String>) -> Self {
        Self {
            kind,
            argument: argument.into(),
        }
    }

    /// Shorthand for a failed duration conversion.
    pub fn duration(argument: impl Into<String>) -> Self {
        Self::new(ValueKind::Duration, argument)
    }

    /// Which kind of value failed to convert
    pub fn kind(&self) -> ValueKind {
        self.kind
    }

    /// The argument exactly as the user supplied it
    pub fn argument(&self) -> &str {
        &self.argument
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversion_error_display() {
        let err = ConversionError::duration("5x");
        assert_eq!(err.to_string(), "invalid duration: \"5x\"");
        assert_eq!(err.kind(), ValueKind::Duration);
        assert_eq!(err.argument(), "5x");
    }

    #[test]
    fn test_conversion_error_wraps() {
        let err: Error = ConversionError::new(ValueKind::Bool, "maybe").into();
        assert_eq!(err.to_string(), "Conversion error: invalid boolean: \"maybe\"");
    }
}
