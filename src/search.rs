//! Remote catalog search boundary.
//!
//! Attribute search against a third-party catalog is an external capability:
//! the presentation layer queries it directly and the results never touch
//! the similarity engine. This module only pins down the boundary — query
//! and result shapes plus the resilience contract an implementation must
//! honor so callers cannot hang indefinitely. No implementation lives in
//! this crate.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Attribute filters for a remote catalog search.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchQuery {
    /// Free-text title query.
    pub title: Option<String>,
    /// Release year filter.
    pub year: Option<u16>,
    /// Genre filter.
    pub genre: Option<String>,
    /// Credited actor filter.
    pub actor: Option<String>,
    /// Minimum average rating filter.
    pub min_rating: Option<f32>,
}

/// One remote search result, as displayed by the presentation layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchHit {
    /// Display title.
    pub title: String,
    /// Poster image path, when the catalog provides one.
    pub poster_path: Option<String>,
    /// Release date string as reported by the catalog.
    pub release_date: Option<String>,
    /// Average rating as reported by the catalog.
    pub rating: Option<f32>,
    /// Truncated synopsis for display.
    pub overview: Option<String>,
}

/// Resilience contract for remote lookups.
///
/// The remote service is outside this crate's control; implementations must
/// bound every request with `timeout` and give up after `max_retries`
/// additional attempts rather than hanging the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct RetryPolicy {
    /// Per-request deadline.
    pub timeout: Duration,
    /// Retries after the first failed attempt.
    pub max_retries: u32,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            max_retries: 2,
        }
    }
}

/// Capability trait for the remote catalog, implemented outside this crate.
pub trait RemoteCatalog {
    /// Search the remote catalog with attribute filters.
    ///
    /// Implementations must honor their [`RetryPolicy`]; a failure after
    /// retries is an error result, never a hang.
    ///
    /// # Errors
    ///
    /// Returns an error when the remote lookup fails after retries.
    fn search(&self, query: &SearchQuery) -> Result<Vec<SearchHit>>;

    /// The resilience contract this implementation operates under.
    fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::default()
    }
}
