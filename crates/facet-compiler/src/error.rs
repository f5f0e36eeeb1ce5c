//! Error types for query compilation.
//!
//! Compilation either yields a complete [`CompiledQuery`](crate::types::CompiledQuery)
//! or fails outright with one of these errors. There is no partial result.

// Error enum variant fields are self-documenting via their #[error(...)] messages
#![allow(missing_docs)]

use thiserror::Error;

use crate::collections::Collection;
use crate::schema::OptionShape;

/// The error type for all compiler operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    /// The option name is not part of the collection's schema.
    #[error("unknown search option '{option}' for {collection}")]
    UnknownOption {
        collection: Collection,
        option: String,
    },

    /// The supplied value cannot be coerced into the option's declared shape.
    #[error("invalid value for search option '{option}': expected {expected}, found {found}")]
    InvalidShape {
        option: String,
        expected: OptionShape,
        found: &'static str,
    },

    /// A date/time option could not be parsed.
    #[error("invalid date for search option '{option}': '{value}'")]
    InvalidDate { option: String, value: String },

    /// The compiler configuration is invalid.
    #[error("invalid compiler configuration: {message}")]
    Config { message: String },
}

impl CompileError {
    /// Returns the option name this error is attributed to, if any.
    pub fn option(&self) -> Option<&str> {
        match self {
            CompileError::UnknownOption { option, .. }
            | CompileError::InvalidShape { option, .. }
            | CompileError::InvalidDate { option, .. } => Some(option),
            CompileError::Config { .. } => None,
        }
    }
}

/// Result type alias for compiler operations.
pub type CompileResult<T> = Result<T, CompileError>;
