//! Craigslist RSS job-search query.
//!
//! Craigslist serves search results per location subdomain, so `location` is
//! folded into the host rather than sent as a query parameter. The feed
//! format is fixed to RSS via a default.

use super::{Attributes, Query, QueryConfig, QueryError};

static CONFIG: QueryConfig = QueryConfig {
    provider: "craigslist",
    recognized: &[
        "location",
        "format",
        "query",
        "s",
        "searchNearby",
        "is_internship",
        "is_nonprofit",
        "is_telecommuting",
        "employment_type",
    ],
    required: &["format", "location"],
    defaults: &[("format", "rss")],
    folded: &["location"],
};

/// Query for the Craigslist jobs RSS search (`<location>.craigslist.org/search/jjj`).
///
/// Recognized attributes: `location` (a Craigslist city site code), `format`
/// (fixed to `rss` by default), `query` (the search keyword), `s` (starting
/// result offset, 100 per page), `searchNearby`, `is_internship`,
/// `is_nonprofit`, `is_telecommuting`, and `employment_type` (1 full time,
/// 2 part time, 3 contract, 4 employee's choice).
#[derive(Debug, Clone)]
pub struct CraigslistQuery {
    attributes: Attributes,
}

impl CraigslistQuery {
    /// Creates a query with the provider defaults applied (`format=rss`).
    #[must_use]
    pub fn new() -> Self {
        Self {
            attributes: Attributes::new(&CONFIG),
        }
    }

    /// Creates a query from defaults plus caller-supplied attribute pairs.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::UnrecognizedAttribute`] when any pair names an
    /// attribute outside the recognized set.
    pub fn from_pairs<'a>(
        pairs: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Result<Self, QueryError> {
        let mut query = Self::new();
        for (name, value) in pairs {
            query.set(name, value)?;
        }
        Ok(query)
    }

    /// Stores an attribute value.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::UnrecognizedAttribute`] for unknown names.
    pub fn set(&mut self, name: &str, value: impl Into<String>) -> Result<(), QueryError> {
        self.attributes.set(name, value)
    }

    /// Reads an attribute value.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::UnrecognizedAttribute`] for unknown names.
    pub fn get(&self, name: &str) -> Result<Option<&str>, QueryError> {
        self.attributes.get(name)
    }
}

impl Default for CraigslistQuery {
    fn default() -> Self {
        Self::new()
    }
}

impl Query for CraigslistQuery {
    fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    fn base_url(&self) -> String {
        let location = self.attributes.get("location").ok().flatten().unwrap_or("");
        format!("http://{location}.craigslist.org/search/jjj")
    }

    fn keyword(&self) -> Option<String> {
        self.attributes
            .get("query")
            .ok()
            .flatten()
            .map(str::to_string)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_when_location_not_set() {
        let query = CraigslistQuery::new();
        assert_eq!(query.base_url(), "http://.craigslist.org/search/jjj");
    }

    #[test]
    fn test_base_url_when_location_set() {
        let mut query = CraigslistQuery::new();
        query.set("location", "chicago").unwrap();
        assert_eq!(query.base_url(), "http://chicago.craigslist.org/search/jjj");
    }

    #[test]
    fn test_keyword_reads_query_attribute() {
        let mut query = CraigslistQuery::new();
        query.set("query", "sales").unwrap();
        assert_eq!(query.keyword().unwrap(), "sales");
    }

    #[test]
    fn test_invalid_until_required_attributes_present() {
        let mut query = CraigslistQuery::new();
        assert!(!query.is_valid(), "location is required and unset");
        query.set("location", "chicago").unwrap();
        assert!(query.is_valid(), "format defaults to rss, location now set");
    }

    #[test]
    fn test_default_format_visible_via_get() {
        let query = CraigslistQuery::new();
        assert_eq!(query.get("format").unwrap(), Some("rss"));
    }

    #[test]
    fn test_url_contains_set_attributes() {
        let mut query = CraigslistQuery::new();
        query.set("query", "driver").unwrap();
        assert!(query.url().contains("query=driver"));
    }

    #[test]
    fn test_url_excludes_location_from_query_string() {
        let mut query = CraigslistQuery::new();
        query.set("location", "chicago").unwrap();
        let url = query.url();
        assert!(url.starts_with("http://chicago.craigslist.org/search/jjj?"));
        assert!(!url.contains("location="));
    }

    #[test]
    fn test_set_and_get_unrecognized_attribute_error() {
        let mut query = CraigslistQuery::new();
        assert!(query.set("salary", "100k").is_err());
        assert!(query.get("salary").is_err());
    }

    #[test]
    fn test_from_pairs_applies_overrides_after_defaults() {
        let query = CraigslistQuery::from_pairs([
            ("query", "sales"),
            ("location", "chicago"),
            ("s", "100"),
        ])
        .unwrap();
        assert_eq!(query.get("format").unwrap(), Some("rss"));
        assert_eq!(query.get("query").unwrap(), Some("sales"));
        assert_eq!(query.get("s").unwrap(), Some("100"));
        assert!(query.is_valid());
    }

    #[test]
    fn test_from_pairs_rejects_unrecognized_pair() {
        let result = CraigslistQuery::from_pairs([("nope", "x")]);
        assert!(result.is_err());
    }
}
