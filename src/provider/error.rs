//! Error types for provider fetch/parse/map operations.

use thiserror::Error;

use super::ResponseFormat;

/// Errors that can occur while fetching and parsing job listings.
#[derive(Debug, Clone, Error)]
pub enum ProviderError {
    /// HTTP client construction failed
    #[error(
        "HTTP client construction failed for the {provider} provider: {reason}\n  Suggestion: check TLS/network configuration on this host"
    )]
    Client {
        /// Provider whose client could not be built
        provider: &'static str,
        /// Builder failure detail
        reason: String,
    },

    /// Transport-level request failure
    #[error(
        "network request to '{url}' failed: {reason}\n  Suggestion: check connectivity and retry"
    )]
    Network {
        /// The request URL
        url: String,
        /// Transport failure detail
        reason: String,
    },

    /// The server answered with a non-success status code
    #[error(
        "request to '{url}' returned HTTP {status}\n  Suggestion: verify the query attributes and the provider endpoint"
    )]
    HttpStatus {
        /// The request URL
        url: String,
        /// HTTP status code returned
        status: u16,
    },

    /// Response body could not be parsed in the provider's declared format
    #[error(
        "could not parse {format} response from '{url}': {reason}\n  Suggestion: the provider may have changed its response format"
    )]
    Parse {
        /// The request URL
        url: String,
        /// The format the provider declared
        format: ResponseFormat,
        /// Parser failure detail
        reason: String,
    },
}

impl ProviderError {
    /// Creates a `Client` error for a failed HTTP client build.
    #[must_use]
    pub fn client(provider: &'static str, reason: &str) -> Self {
        Self::Client {
            provider,
            reason: reason.to_string(),
        }
    }

    /// Creates a `Network` error for a transport failure.
    #[must_use]
    pub fn network(url: &str, reason: &str) -> Self {
        Self::Network {
            url: url.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Creates an `HttpStatus` error for a non-success response.
    #[must_use]
    pub fn http_status(url: &str, status: u16) -> Self {
        Self::HttpStatus {
            url: url.to_string(),
            status,
        }
    }

    /// Creates a `Parse` error for a malformed response body.
    #[must_use]
    pub fn parse(url: &str, format: ResponseFormat, reason: &str) -> Self {
        Self::Parse {
            url: url.to_string(),
            format,
            reason: reason.to_string(),
        }
    }
}
