//! Error types for query attribute operations.

use thiserror::Error;

/// Errors that can occur while reading or writing query attributes.
#[derive(Debug, Clone, Error)]
pub enum QueryError {
    /// Attribute name is outside the provider's recognized set
    #[error(
        "unrecognized attribute '{name}' for the {provider} query\n  Suggestion: use one of the attribute names the provider declares as recognized"
    )]
    UnrecognizedAttribute {
        /// The attribute name that failed validation
        name: String,
        /// The provider whose query rejected the name
        provider: &'static str,
    },
}

impl QueryError {
    /// Creates an `UnrecognizedAttribute` error for a name outside the recognized set.
    #[must_use]
    pub fn unrecognized(provider: &'static str, name: &str) -> Self {
        Self::UnrecognizedAttribute {
            name: name.to_string(),
            provider,
        }
    }
}
