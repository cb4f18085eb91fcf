//! Craigslist jobs provider - RSS/RDF search feed per location subdomain.

use async_trait::async_trait;
use reqwest::Client;

use crate::job::Job;
use crate::query::{CraigslistQuery, Query};

use super::http::build_provider_http_client;
use super::response::{RawRecord, record_text};
use super::{Provider, ProviderError, ResponseFormat};

const RESPONSE_FIELDS: [&str; 3] = ["title", "link", "description"];

/// Provider for the Craigslist jobs RSS search.
///
/// Listings arrive as RDF `<item>` elements with CDATA-wrapped `title`,
/// `link`, and `description` children. The feed carries no per-listing
/// location; a job's location comes from the query when set.
pub struct CraigslistProvider {
    query: CraigslistQuery,
    client: Client,
    base_url: Option<String>,
}

impl CraigslistProvider {
    /// Creates a provider fetching the query's own Craigslist host.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::Client`] if HTTP client construction fails.
    pub fn new(query: CraigslistQuery) -> Result<Self, ProviderError> {
        Ok(Self {
            query,
            client: build_provider_http_client("craigslist")?,
            base_url: None,
        })
    }

    /// Creates a provider with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::Client`] if HTTP client construction fails.
    pub fn with_base_url(
        query: CraigslistQuery,
        base_url: impl Into<String>,
    ) -> Result<Self, ProviderError> {
        Ok(Self {
            query,
            client: build_provider_http_client("craigslist")?,
            base_url: Some(base_url.into()),
        })
    }
}

impl std::fmt::Debug for CraigslistProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CraigslistProvider")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl Provider for CraigslistProvider {
    fn name(&self) -> &'static str {
        "craigslist"
    }

    fn format(&self) -> ResponseFormat {
        ResponseFormat::Xml
    }

    fn listings_path(&self) -> &'static str {
        "item"
    }

    fn response_fields(&self) -> &[&str] {
        &RESPONSE_FIELDS
    }

    fn query(&self) -> &dyn Query {
        &self.query
    }

    fn client(&self) -> &Client {
        &self.client
    }

    fn request_url(&self) -> String {
        match &self.base_url {
            Some(base) => {
                let query_string = self.query.attributes().query_string();
                if query_string.is_empty() {
                    base.clone()
                } else {
                    format!("{base}?{query_string}")
                }
            }
            None => self.query.url(),
        }
    }

    fn create_job(&self, record: &RawRecord) -> Job {
        Job {
            description: record_text(record, "description").unwrap_or_default(),
            url: record_text(record, "link").unwrap_or_default(),
            ..Job::new(record_text(record, "title").unwrap_or_default())
        }
    }
}
