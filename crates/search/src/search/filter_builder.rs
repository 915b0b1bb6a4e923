//! Search filter builder.
//!
//! Assembles a [`Filter`] carrying a full-text search query. The raw query
//! is copied verbatim; callers that want to inspect its extensions run
//! [`parse_search_query`](super::parse_search_query) separately.

use crate::types::{Filter, Kind, PublicKey, Timestamp};

/// Result limit applied when the caller does not choose one.
pub const DEFAULT_SEARCH_LIMIT: usize = 100;

/// Optional criteria combined with a search query.
///
/// The default sets `limit` to [`DEFAULT_SEARCH_LIMIT`] and leaves every
/// other field absent. Setting `limit` to `None` sends no limit at all.
///
/// # Examples
///
/// ```
/// use quiver_search::search::SearchFilterOptions;
/// use quiver_search::types::Kind;
///
/// let options = SearchFilterOptions::default().with_kinds(vec![Kind::TEXT_NOTE]);
/// assert_eq!(options.limit, Some(100));
///
/// let unlimited = SearchFilterOptions::default().without_limit();
/// assert_eq!(unlimited.limit, None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchFilterOptions {
    /// Event kinds to match.
    pub kinds: Option<Vec<Kind>>,
    /// Authors to match.
    pub authors: Option<Vec<PublicKey>>,
    /// Lower time bound.
    pub since: Option<Timestamp>,
    /// Upper time bound.
    pub until: Option<Timestamp>,
    /// Result limit.
    pub limit: Option<usize>,
}

impl Default for SearchFilterOptions {
    fn default() -> Self {
        Self {
            kinds: None,
            authors: None,
            since: None,
            until: None,
            limit: Some(DEFAULT_SEARCH_LIMIT),
        }
    }
}

impl SearchFilterOptions {
    /// Sets the event kinds.
    pub fn with_kinds(mut self, kinds: Vec<Kind>) -> Self {
        self.kinds = Some(kinds);
        self
    }

    /// Sets the authors.
    pub fn with_authors(mut self, authors: Vec<PublicKey>) -> Self {
        self.authors = Some(authors);
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

    /// Removes the result limit.
    pub fn without_limit(mut self) -> Self {
        self.limit = None;
        self
    }
}

/// Builds a search filter from a raw query and optional criteria.
///
/// Every option is copied as given. No validation happens here: kind
/// ranges, author lists and `since <= until` are left to the relay.
///
/// # Examples
///
/// ```
/// use quiver_search::search::{SearchFilterOptions, build_search_filter};
///
/// let filter = build_search_filter("x", SearchFilterOptions::default());
/// assert_eq!(filter.search.as_deref(), Some("x"));
/// assert_eq!(filter.limit, Some(100));
/// assert!(filter.kinds.is_none());
/// ```
pub fn build_search_filter(query: impl Into<String>, options: SearchFilterOptions) -> Filter {
    let SearchFilterOptions {
        kinds,
        authors,
        since,
        until,
        limit,
    } = options;

    Filter {
        authors,
        kinds,
        since,
        until,
        limit,
        search: Some(query.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let filter = build_search_filter("x", SearchFilterOptions::default());
        assert_eq!(filter.limit, Some(100));
        assert_eq!(filter.search.as_deref(), Some("x"));
        assert!(filter.authors.is_none());
        assert!(filter.kinds.is_none());
        assert!(filter.since.is_none());
        assert!(filter.until.is_none());
    }

    #[test]
    fn test_explicit_none_limit_is_absent() {
        let filter = build_search_filter("x", SearchFilterOptions::default().without_limit());
        assert_eq!(filter.limit, None);
    }

    #[test]
    fn test_query_is_not_parsed() {
        let filter = build_search_filter("nsfw:true cats", SearchFilterOptions::default());
        assert_eq!(filter.search.as_deref(), Some("nsfw:true cats"));
    }

    #[test]
    fn test_copies_options_verbatim() {
        let author = PublicKey::from_bytes([7; 32]);
        let options = SearchFilterOptions::default()
            .with_kinds(vec![Kind::TEXT_NOTE, Kind::new(65535)])
            .with_authors(vec![author])
            .with_since(Timestamp::from_secs(200))
            .with_until(Timestamp::from_secs(100))
            .with_limit(0);

        let filter = build_search_filter("", options);
        assert_eq!(filter.kinds, Some(vec![Kind::TEXT_NOTE, Kind::new(65535)]));
        assert_eq!(filter.authors, Some(vec![author]));
        // since > until is passed through unchecked
        assert_eq!(filter.since, Some(Timestamp::from_secs(200)));
        assert_eq!(filter.until, Some(Timestamp::from_secs(100)));
        assert_eq!(filter.limit, Some(0));
        assert_eq!(filter.search.as_deref(), Some(""));
    }

    #[test]
    fn test_deterministic() {
        let build = || {
            build_search_filter(
                "same",
                SearchFilterOptions::default().with_kinds(vec![Kind::REPOST]),
            )
        };
        assert_eq!(build(), build());
    }
}
