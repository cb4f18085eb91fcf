//! Search query construction and validation for job-board providers.
//!
//! Each provider's query is an independent type implementing the [`Query`]
//! capability trait over a validated [`Attributes`] store:
//!
//! - [`QueryConfig`] - static per-provider attribute contract
//! - [`Attributes`] - validated name→value store with `Result`-returning access
//! - [`CraigslistQuery`] - RSS search against a per-location Craigslist host
//! - [`GovtQuery`] - JSON search against the usa.gov jobs endpoint
//!
//! # Example
//!
//! ```
//! use jobclient::query::{CraigslistQuery, Query};
//!
//! # fn example() -> Result<(), jobclient::query::QueryError> {
//! let mut query = CraigslistQuery::new();
//! query.set("location", "chicago")?;
//! query.set("query", "sales")?;
//! assert!(query.is_valid());
//! assert!(query.url().starts_with("http://chicago.craigslist.org/search/jjj?"));
//! # Ok(())
//! # }
//! ```

mod attributes;
mod craigslist;
mod error;
mod govt;

pub use attributes::{Attributes, QueryConfig};
pub use craigslist::CraigslistQuery;
pub use error::QueryError;
pub use govt::GovtQuery;

/// Capability interface every provider query implements.
///
/// Concrete queries supply the attribute store and the provider-specific
/// pieces (base URL, keyword attribute); URL assembly and validity checks are
/// provided on top of those.
pub trait Query: Send + Sync {
    /// Returns the validated attribute store.
    ///
    /// Mutation goes through the concrete query's `set`, which is where
    /// attribute-name validation lives.
    fn attributes(&self) -> &Attributes;

    /// Returns the base URL, interpolating any folded attributes into the path.
    fn base_url(&self) -> String;

    /// Returns the value of the attribute the provider treats as the primary
    /// search term.
    fn keyword(&self) -> Option<String>;

    /// Returns the static attribute contract.
    fn config(&self) -> &'static QueryConfig {
        self.attributes().config()
    }

    /// True iff every required attribute has a value.
    ///
    /// Advisory: the provider pipeline does not enforce this before issuing
    /// a request, so callers should check it themselves.
    fn is_valid(&self) -> bool {
        self.attributes().is_valid()
    }

    /// Full request URL: base URL plus the urlencoded query string.
    fn url(&self) -> String {
        let query_string = self.attributes().query_string();
        if query_string.is_empty() {
            self.base_url()
        } else {
            format!("{}?{query_string}", self.base_url())
        }
    }

    /// The query's `location` attribute, when the provider recognizes one.
    fn location(&self) -> Option<String> {
        self.attributes()
            .get("location")
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
    fn test_url_joins_base_and_query_string() {
        let mut query = CraigslistQuery::new();
        query.set("location", "chicago").unwrap();
        query.set("query", "driver").unwrap();
        assert_eq!(
            query.url(),
            "http://chicago.craigslist.org/search/jjj?format=rss&query=driver"
        );
    }

    #[test]
    fn test_location_none_for_provider_without_location_attribute() {
        let query = GovtQuery::new();
        assert_eq!(query.location(), None);
    }

    #[test]
    fn test_query_trait_is_object_safe() {
        let query: Box<dyn Query> = Box::new(CraigslistQuery::new());
        assert!(!query.is_valid());
    }
}
