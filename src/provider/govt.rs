//! United States government jobs provider - usa.gov JSON search API.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use crate::job::Job;
use crate::query::{GovtQuery, Query};

use super::http::build_provider_http_client;
use super::response::{RawRecord, record_text};
use super::{Provider, ProviderError, ResponseFormat};

const RESPONSE_FIELDS: [&str; 8] = [
    "position_title",
    "organization_name",
    "url",
    "locations",
    "minimum",
    "maximum",
    "start_date",
    "end_date",
];

/// Provider for the usa.gov jobs search API.
///
/// The response body is a bare JSON array of listing objects, so the listings
/// path is the empty string (document root).
pub struct GovtProvider {
    query: GovtQuery,
    client: Client,
    base_url: Option<String>,
}

impl GovtProvider {
    /// Creates a provider fetching the usa.gov endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::Client`] if HTTP client construction fails.
    pub fn new(query: GovtQuery) -> Result<Self, ProviderError> {
        Ok(Self {
            query,
            client: build_provider_http_client("govt")?,
            base_url: None,
        })
    }

    /// Creates a provider with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::Client`] if HTTP client construction fails.
    pub fn with_base_url(
        query: GovtQuery,
        base_url: impl Into<String>,
    ) -> Result<Self, ProviderError> {
        Ok(Self {
            query,
            client: build_provider_http_client("govt")?,
            base_url: Some(base_url.into()),
        })
    }

    fn first_location(record: &RawRecord) -> Option<String> {
        record
            .get("locations")
            .and_then(Value::as_array)
            .and_then(|locations| locations.first())
            .and_then(Value::as_str)
            .map(str::to_string)
    }
}

impl std::fmt::Debug for GovtProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GovtProvider")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl Provider for GovtProvider {
    fn name(&self) -> &'static str {
        "govt"
    }

    fn format(&self) -> ResponseFormat {
        ResponseFormat::Json
    }

    fn listings_path(&self) -> &'static str {
        ""
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
            url: record_text(record, "url").unwrap_or_default(),
            company: record_text(record, "organization_name"),
            location: Self::first_location(record),
            ..Job::new(record_text(record, "position_title").unwrap_or_default())
        }
    }
}
