//! Normalized job listing model shared by all providers.
//!
//! - [`Job`] - one listing with normalized field names
//! - [`Collection`] - ordered listings from one provider response

mod collection;

pub use collection::Collection;

use serde::{Deserialize, Serialize};

/// One normalized job listing.
///
/// Built by a provider's mapping function from a single raw record, then
/// stamped with query context (location, keyword, source) by the fetch
/// pipeline. Treated as immutable once the pipeline hands it out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    /// Listing title as published by the source.
    pub title: String,
    /// Display name; providers without a distinct name reuse the title.
    pub name: String,
    /// Listing body text.
    pub description: String,
    /// Link to the listing.
    pub url: String,
    /// Search location when the query set one, otherwise whatever the record supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Hiring organization, when the source exposes one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    /// The search keyword that produced this listing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    /// Name of the provider that produced this listing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl Job {
    /// Creates a job with the given title, reusing it as the display name.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        let title = title.into();
        Self {
            name: title.clone(),
            title,
            ..Self::default()
        }
    }
}
