//! Error types for the text crate.

use thiserror::Error;

/// Errors that can occur when converting a string to an enum.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseEnumError {
    /// The input was empty or only whitespace.
    #[error("cannot parse an empty string as {type_name}")]
    Empty { type_name: &'static str },

    /// The input matched none of the enum's variant names.
    #[error("'{value}' is not a variant of {type_name} (expected one of: {})", .expected.join(", "))]
    UnknownVariant {
        value: String,
        type_name: &'static str,
        expected: &'static [&'static str],
    },
}

/// Result type for enum conversions.
pub type Result<T> = std::result::Result<T, ParseEnumError>;
