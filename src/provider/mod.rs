//! Job-board providers: fetch a query URL, parse the response, map listings.
//!
//! Each provider declares its response format and where listings live inside
//! the parsed response, plus a pure per-record mapping function. The shared
//! [`Provider::jobs`] pipeline does the rest:
//!
//! - [`Provider`] - async trait individual providers implement
//! - [`ResponseFormat`] - declared wire format (`xml` | `json`)
//! - [`RawRecord`] - uniform parsed record both formats lower into
//! - [`CraigslistProvider`] - RSS search on a per-location Craigslist host
//! - [`GovtProvider`] - usa.gov JSON jobs search
//!
//! # Example
//!
//! ```no_run
//! use jobclient::provider::{CraigslistProvider, Provider};
//! use jobclient::query::CraigslistQuery;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let query = CraigslistQuery::from_pairs([("location", "chicago"), ("query", "sales")])?;
//! let provider = CraigslistProvider::new(query)?;
//! let jobs = provider.jobs().await?;
//! println!("{} listings", jobs.len());
//! # Ok(())
//! # }
//! ```

mod craigslist;
mod error;
mod govt;
mod http;
mod response;

pub use craigslist::CraigslistProvider;
pub use error::ProviderError;
pub use govt::GovtProvider;
pub use response::{RawRecord, record_text};

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

use crate::job::Collection;
use crate::query::Query;

/// Wire format a provider declares for its responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseFormat {
    /// XML, including RSS/RDF feeds
    Xml,
    /// JSON
    Json,
}

impl std::fmt::Display for ResponseFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Xml => write!(f, "xml"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Trait that all job-board providers implement.
///
/// Providers declare their response shape and supply a pure mapping function;
/// the provided [`jobs`](Provider::jobs) method runs the shared
/// fetch/parse/map pipeline. Uses `async_trait` so providers can be held as
/// `Box<dyn Provider>` (Rust 2024 native async traits are not object-safe).
#[async_trait]
pub trait Provider: Send + Sync {
    /// Returns the provider's name (e.g. "craigslist"), stamped onto each job
    /// as its source.
    fn name(&self) -> &str;

    /// Returns the declared response format.
    fn format(&self) -> ResponseFormat;

    /// Returns the path to the listing array within a parsed response
    /// (dot-separated; empty addresses the document root).
    fn listings_path(&self) -> &str;

    /// Returns the default set of response fields the mapping function reads.
    fn response_fields(&self) -> &[&str];

    /// Returns the query this provider will fetch.
    fn query(&self) -> &dyn Query;

    /// Returns the HTTP client used for fetches.
    fn client(&self) -> &Client;

    /// Maps one raw record into a [`Job`](crate::job::Job).
    ///
    /// Pure and infallible: fields missing from the record map to empty or
    /// absent values, never an error.
    fn create_job(&self, record: &RawRecord) -> crate::job::Job;

    /// Returns the URL `jobs` will request. Defaults to the query's URL;
    /// overridable so tests can point a provider at a local server.
    fn request_url(&self) -> String {
        self.query().url()
    }

    /// Fetches, parses, and maps one page of listings.
    ///
    /// A missing listings path in an otherwise well-formed response yields an
    /// empty collection. Query validity is not enforced here; callers should
    /// check [`Query::is_valid`] before issuing a request.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::Network`] on transport failure,
    /// [`ProviderError::HttpStatus`] on a non-success response, and
    /// [`ProviderError::Parse`] on a malformed body.
    #[tracing::instrument(skip_all)]
    async fn jobs(&self) -> Result<Collection, ProviderError> {
        let url = self.request_url();
        debug!(provider = self.name(), url = %url, "Fetching job listings");

        let response = match self.client().get(&url).send().await {
            Ok(response) => response,
            Err(error) => {
                warn!(provider = self.name(), error = %error, "Job listing request failed");
                return Err(ProviderError::network(&url, &error.to_string()));
            }
        };

        let status = response.status();
        if !status.is_success() {
            warn!(
                provider = self.name(),
                status = status.as_u16(),
                "Job listing request returned error status"
            );
            return Err(ProviderError::http_status(&url, status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|error| ProviderError::network(&url, &error.to_string()))?;

        let records = match self.format() {
            ResponseFormat::Xml => response::xml_listings(&body, self.listings_path(), &url)?,
            ResponseFormat::Json => response::json_listings(&body, self.listings_path(), &url)?,
        };
        debug!(
            provider = self.name(),
            records = records.len(),
            "Parsed job listings"
        );

        let location = self.query().location();
        let keyword = self.query().keyword();

        let mut collection = Collection::with_capacity(records.len());
        for record in &records {
            let mut job = self.create_job(record);
            if let Some(location) = &location {
                job.location = Some(location.clone());
            }
            if job.query.is_none() {
                job.query = keyword.clone();
            }
            if job.source.is_none() {
                job.source = Some(self.name().to_string());
            }
            collection.push(job);
        }
        Ok(collection)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_response_format_display() {
        assert_eq!(ResponseFormat::Xml.to_string(), "xml");
        assert_eq!(ResponseFormat::Json.to_string(), "json");
    }

    #[test]
    fn test_provider_trait_is_object_safe() {
        fn assert_dyn(_provider: &dyn Provider) {}
        let query = crate::query::CraigslistQuery::new();
        let provider = CraigslistProvider::new(query).unwrap();
        assert_dyn(&provider);
    }
}
