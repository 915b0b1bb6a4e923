//! Relay filter type.

use serde::{Deserialize, Serialize};

use super::{Kind, PublicKey, Timestamp};

/// A relay query filter.
///
/// Only the fields a search subscription uses are modelled. Every field is
/// optional and absent fields are omitted from the encoded JSON rather than
/// sent as `null`.
///
/// # Examples
///
/// ```
/// use quiver_search::types::{Filter, Kind};
///
/// let filter = Filter::new()
///     .with_kinds(vec![Kind::TEXT_NOTE])
///     .with_search("bitcoin")
///     .with_limit(20);
///
/// assert_eq!(filter.search.as_deref(), Some("bitcoin"));
/// assert!(!filter.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filter {
    /// Author public keys.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authors: Option<Vec<PublicKey>>,

    /// Event kinds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kinds: Option<Vec<Kind>>,

    /// Lower bound on `created_at`, inclusive.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub since: Option<Timestamp>,

    /// Upper bound on `created_at`, inclusive.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub until: Option<Timestamp>,

    /// Maximum number of events returned in the initial query.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,

    /// Full-text search query.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl Filter {
    /// Creates an empty filter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the author public keys.
    pub fn with_authors(mut self, authors: Vec<PublicKey>) -> Self {
        self.authors = Some(authors);
        self
    }

    /// Sets the event kinds.
    pub fn with_kinds(mut self, kinds: Vec<Kind>) -> Self {
        self.kinds = Some(kinds);
        self
    }

    /// Sets the lower time bound.
    pub fn with_since(mut self, since: Timestamp) -> Self {
        self.since = Some(since);
        self
    }

    /// Sets the upper time bound.
    pub fn with_until(mut self, until: Timestamp) -> Self {
        self.until = Some(until);
        self
    }

    /// Sets the result limit.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Sets the full-text search query.
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Returns `true` if no field is set.
    pub fn is_empty(&self) -> bool {
        self.authors.is_none()
            && self.kinds.is_none()
            && self.since.is_none()
            && self.until.is_none()
            && self.limit.is_none()
            && self.search.is_none()
    }
}
