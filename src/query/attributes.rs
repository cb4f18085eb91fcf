//! Validated attribute storage driven by a per-provider static configuration.
//!
//! Each provider declares its attribute contract once as a [`QueryConfig`]:
//! which names are recognized, which are required for a valid request, which
//! carry defaults, and which are folded into the base path instead of the
//! query string. [`Attributes`] enforces that contract on every `set`/`get`.

use super::QueryError;

/// Static attribute contract for one provider's query.
#[derive(Debug, Clone, Copy)]
pub struct QueryConfig {
    /// Provider name used in error messages (e.g. "craigslist").
    pub provider: &'static str,
    /// Every attribute name `set`/`get` accepts, in query-string order.
    pub recognized: &'static [&'static str],
    /// Subset of `recognized` that must be present for `is_valid`.
    pub required: &'static [&'static str],
    /// Values applied at construction, before caller overrides.
    pub defaults: &'static [(&'static str, &'static str)],
    /// Subset of `recognized` interpolated into the base path and therefore
    /// excluded from the query string.
    pub folded: &'static [&'static str],
}

/// Name→value store validated against a [`QueryConfig`].
///
/// Values are kept in recognized-declaration order so the generated query
/// string is deterministic.
#[derive(Debug, Clone)]
pub struct Attributes {
    config: &'static QueryConfig,
    values: Vec<Option<String>>,
}

impl Attributes {
    /// Creates an attribute store with the config's defaults applied.
    #[must_use]
    pub fn new(config: &'static QueryConfig) -> Self {
        let mut values = vec![None; config.recognized.len()];
        for (name, value) in config.defaults {
            if let Some(index) = config.recognized.iter().position(|r| r == name) {
                values[index] = Some((*value).to_string());
            }
        }
        Self { config, values }
    }

    /// Returns the config this store validates against.
    #[must_use]
    pub fn config(&self) -> &'static QueryConfig {
        self.config
    }

    fn index_of(&self, name: &str) -> Result<usize, QueryError> {
        self.config
            .recognized
            .iter()
            .position(|r| *r == name)
            .ok_or_else(|| QueryError::unrecognized(self.config.provider, name))
    }

    /// Stores a value, overwriting any prior value for the name.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::UnrecognizedAttribute`] for names outside the
    /// recognized set.
    pub fn set(&mut self, name: &str, value: impl Into<String>) -> Result<(), QueryError> {
        let index = self.index_of(name)?;
        self.values[index] = Some(value.into());
        Ok(())
    }

    /// Returns the stored value, or `None` when never set and no default applies.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::UnrecognizedAttribute`] for names outside the
    /// recognized set.
    pub fn get(&self, name: &str) -> Result<Option<&str>, QueryError> {
        let index = self.index_of(name)?;
        Ok(self.values[index].as_deref())
    }

    /// True iff every required attribute has a stored value.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.config.required.iter().all(|name| {
            self.config
                .recognized
                .iter()
                .position(|r| r == name)
                .is_some_and(|index| self.values[index].is_some())
        })
    }

    /// Urlencoded `name=value` pairs for all stored, non-folded attributes,
    /// in recognized-declaration order.
    #[must_use]
    pub fn query_string(&self) -> String {
        let mut pairs = Vec::new();
        for (index, name) in self.config.recognized.iter().enumerate() {
            if self.config.folded.contains(name) {
                continue;
            }
            if let Some(value) = &self.values[index] {
                pairs.push(format!(
                    "{}={}",
                    urlencoding::encode(name),
                    urlencoding::encode(value)
                ));
            }
        }
        pairs.join("&")
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    static TEST_CONFIG: QueryConfig = QueryConfig {
        provider: "test",
        recognized: &["city", "format", "keyword", "page"],
        required: &["format", "city"],
        defaults: &[("format", "rss")],
        folded: &["city"],
    };

    fn attributes() -> Attributes {
        Attributes::new(&TEST_CONFIG)
    }

    #[test]
    fn test_set_then_get_round_trips_all_recognized_names() {
        let mut attrs = attributes();
        for name in TEST_CONFIG.recognized {
            attrs.set(name, format!("value-{name}")).unwrap();
        }
        for name in TEST_CONFIG.recognized {
            assert_eq!(
                attrs.get(name).unwrap(),
                Some(format!("value-{name}").as_str())
            );
        }
    }

    #[test]
    fn test_set_unrecognized_name_errors() {
        let mut attrs = attributes();
        let err = attrs.set("bogus", "x").unwrap_err();
        assert!(matches!(err, QueryError::UnrecognizedAttribute { .. }));
    }

    #[test]
    fn test_get_unrecognized_name_errors() {
        let attrs = attributes();
        let err = attrs.get("bogus").unwrap_err();
        assert!(matches!(err, QueryError::UnrecognizedAttribute { .. }));
    }

    #[test]
    fn test_defaults_visible_before_any_set() {
        let attrs = attributes();
        assert_eq!(attrs.get("format").unwrap(), Some("rss"));
        assert_eq!(attrs.get("keyword").unwrap(), None);
    }

    #[test]
    fn test_set_overwrites_prior_value() {
        let mut attrs = attributes();
        attrs.set("keyword", "first").unwrap();
        attrs.set("keyword", "second").unwrap();
        assert_eq!(attrs.get("keyword").unwrap(), Some("second"));
    }

    #[test]
    fn test_is_valid_false_while_any_required_unset() {
        let mut attrs = attributes();
        assert!(!attrs.is_valid(), "city is required and unset");
        attrs.set("city", "chicago").unwrap();
        assert!(attrs.is_valid(), "format default + city set");
    }

    #[test]
    fn test_query_string_excludes_folded_and_unset() {
        let mut attrs = attributes();
        attrs.set("city", "chicago").unwrap();
        attrs.set("keyword", "sales rep").unwrap();
        let qs = attrs.query_string();
        assert_eq!(qs, "format=rss&keyword=sales%20rep");
    }

    #[test]
    fn test_query_string_empty_when_nothing_set() {
        static BARE_CONFIG: QueryConfig = QueryConfig {
            provider: "bare",
            recognized: &["keyword"],
            required: &[],
            defaults: &[],
            folded: &[],
        };
        let attrs = Attributes::new(&BARE_CONFIG);
        assert_eq!(attrs.query_string(), "");
    }

    #[test]
    fn test_query_string_preserves_declaration_order() {
        let mut attrs = attributes();
        attrs.set("page", "2").unwrap();
        attrs.set("keyword", "driver").unwrap();
        assert_eq!(attrs.query_string(), "format=rss&keyword=driver&page=2");
    }
}
