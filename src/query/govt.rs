//! United States government jobs query (usa.gov JSON search endpoint).

use super::{Attributes, Query, QueryConfig, QueryError};

const DEFAULT_BASE_URL: &str = "https://api.usa.gov/jobs/search.json";

static CONFIG: QueryConfig = QueryConfig {
    provider: "govt",
    recognized: &[
        "query",
        "organization_ids",
        "hl",
        "size",
        "from",
        "tags",
        "lat_lon",
    ],
    required: &["query"],
    defaults: &[],
    folded: &[],
};

/// Query for the usa.gov jobs search API.
///
/// All attributes travel in the query string; the base URL is fixed.
#[derive(Debug, Clone)]
pub struct GovtQuery {
    attributes: Attributes,
}

impl GovtQuery {
    /// Creates an empty query.
    #[must_use]
    pub fn new() -> Self {
        Self {
            attributes: Attributes::new(&CONFIG),
        }
    }

    /// Creates a query from caller-supplied attribute pairs.
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

impl Default for GovtQuery {
    fn default() -> Self {
        Self::new()
    }
}

impl Query for GovtQuery {
    fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    fn base_url(&self) -> String {
        DEFAULT_BASE_URL.to_string()
    }

    fn keyword(&self) -> Option<String> {
        self.attributes
            .get("query")
            .ok()
            .flatten()
            .map(str::to_string)
    }
}
