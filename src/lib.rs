//! Job-board API Client Library
//!
//! This library builds provider-specific search URLs, fetches job listings
//! over HTTP, and parses heterogeneous response formats (XML/RSS, JSON) into
//! a uniform in-memory listing model.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//! - [`query`] - Validated search parameters and URL construction per provider
//! - [`provider`] - Fetch/parse/map pipeline and concrete providers
//! - [`job`] - Normalized [`Job`] and [`Collection`] value model
//!
//! Callers needing parallel multi-provider fetches compose independent
//! [`Provider::jobs`] calls themselves.

// Clippy lints - strict for library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod job;
pub mod provider;
pub mod query;

// Re-export commonly used types
pub use job::{Collection, Job};
pub use provider::{
    CraigslistProvider, GovtProvider, Provider, ProviderError, RawRecord, ResponseFormat,
    record_text,
};
pub use query::{Attributes, CraigslistQuery, GovtQuery, Query, QueryConfig, QueryError};
