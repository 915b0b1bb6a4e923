//! Subscription request encoding.
//!
//! Renders search subscriptions into client-to-relay wire messages:
//!
//! ```text
//! ["REQ","<subscription id>",<filter>]
//! ["CLOSE","<subscription id>"]
//! ```
//!
//! The subscription ID is wrapped in plain quotes and is not escaped;
//! callers supply IDs free of `"` and `\`. Filter encoding failures never
//! reach the caller: the filter is replaced with `{}` and a warning is
//! logged.

use tracing::{debug, warn};

use super::json::to_sorted_json_string;
use crate::error::EncodeError;
use crate::search::{DEFAULT_SEARCH_LIMIT, SearchFilterOptions, build_search_filter};
use crate::types::{Filter, Kind, PublicKey};

/// Encoded filter substituted when encoding fails.
pub const EMPTY_FILTER: &str = "{}";

/// Encodes a filter into its wire text.
pub trait FilterEncoder {
    /// Encodes the filter.
    fn encode(&self, filter: &Filter) -> Result<String, EncodeError>;
}

/// Compact JSON with object keys in lexicographic order.
///
/// Two filters with the same content always encode to the same bytes.
#[derive(Debug, Clone, Copy, Default)]
pub struct SortedJsonEncoder;

impl FilterEncoder for SortedJsonEncoder {
    fn encode(&self, filter: &Filter) -> Result<String, EncodeError> {
        to_sorted_json_string(filter)
    }
}

impl<F> FilterEncoder for F
where
    F: Fn(&Filter) -> Result<String, EncodeError>,
{
    fn encode(&self, filter: &Filter) -> Result<String, EncodeError> {
        self(filter)
    }
}

/// Optional criteria for [`create_search_request`].
///
/// Narrower than [`SearchFilterOptions`]: a search request carries no time
/// bounds. The default limit is [`DEFAULT_SEARCH_LIMIT`]; `limit: None`
/// sends no limit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequestOptions {
    /// Event kinds to match.
    pub kinds: Option<Vec<Kind>>,
    /// Authors to match.
    pub authors: Option<Vec<PublicKey>>,
    /// Result limit.
    pub limit: Option<usize>,
}

impl Default for SearchRequestOptions {
    fn default() -> Self {
        Self {
            kinds: None,
            authors: None,
            limit: Some(DEFAULT_SEARCH_LIMIT),
        }
    }
}

impl SearchRequestOptions {
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

impl From<SearchRequestOptions> for SearchFilterOptions {
    fn from(options: SearchRequestOptions) -> Self {
        SearchFilterOptions {
            kinds: options.kinds,
            authors: options.authors,
            since: None,
            until: None,
            limit: options.limit,
        }
    }
}

/// Builds a search filter and renders it as a `REQ` message.
///
/// # Examples
///
/// ```
/// use quiver_search::message::{SearchRequestOptions, create_search_request};
///
/// let message = create_search_request("sub1", "hello", SearchRequestOptions::default());
/// assert_eq!(message, r#"["REQ","sub1",{"limit":100,"search":"hello"}]"#);
/// ```
pub fn create_search_request(
    subscription_id: impl AsRef<str>,
    query: &str,
    options: SearchRequestOptions,
) -> String {
    create_search_request_with(&SortedJsonEncoder, subscription_id, query, options)
}

/// Same as [`create_search_request`] with a caller-supplied encoder.
pub fn create_search_request_with<E>(
    encoder: &E,
    subscription_id: impl AsRef<str>,
    query: &str,
    options: SearchRequestOptions,
) -> String
where
    E: FilterEncoder + ?Sized,
{
    let filter = build_search_filter(query, options.into());
    encode_request(encoder, subscription_id.as_ref(), &filter)
}

/// Renders an arbitrary filter as a `REQ` message using `encoder`.
///
/// Falls back to `{}` for the filter if encoding fails.
pub fn encode_request<E>(encoder: &E, subscription_id: &str, filter: &Filter) -> String
where
    E: FilterEncoder + ?Sized,
{
    let encoded = match encoder.encode(filter) {
        Ok(encoded) => encoded,
        Err(e) => {
            warn!(
                subscription_id = %subscription_id,
                error = %e,
                "Filter encoding failed, sending empty filter"
            );
            EMPTY_FILTER.to_string()
        }
    };

    let message = format!("[\"REQ\",\"{}\",{}]", subscription_id, encoded);
    debug!(
        subscription_id = %subscription_id,
        bytes = message.len(),
        "Encoded search request"
    );
    message
}

/// Renders a `CLOSE` message for a subscription.
///
/// # Examples
///
/// ```
/// use quiver_search::message::create_close_request;
///
/// assert_eq!(create_close_request("sub1"), r#"["CLOSE","sub1"]"#);
/// ```
pub fn create_close_request(subscription_id: impl AsRef<str>) -> String {
    format!("[\"CLOSE\",\"{}\"]", subscription_id.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SubscriptionId;

    struct FailingEncoder;

    impl FilterEncoder for FailingEncoder {
        fn encode(&self, _filter: &Filter) -> Result<String, EncodeError> {
            Err(EncodeError::Custom("encoder unavailable".to_string()))
        }
    }

    #[test]
    fn test_default_request() {
        let message = create_search_request("sub1", "hello", SearchRequestOptions::default());
        assert_eq!(message, r#"["REQ","sub1",{"limit":100,"search":"hello"}]"#);
    }

    #[test]
    fn test_keys_sorted_with_all_fields() {
        let options = SearchRequestOptions::default()
            .with_kinds(vec![Kind::TEXT_NOTE])
            .with_authors(vec![PublicKey::from_bytes([0; 32])])
            .with_limit(5);
        let message = create_search_request("s", "q", options);
        assert_eq!(
            message,
            format!(
                r#"["REQ","s",{{"authors":["{}"],"kinds":[1],"limit":5,"search":"q"}}]"#,
                "00".repeat(32)
            )
        );
    }

    #[test]
    fn test_without_limit() {
        let message =
            create_search_request("s", "q", SearchRequestOptions::default().without_limit());
        assert_eq!(message, r#"["REQ","s",{"search":"q"}]"#);
    }

    #[test]
    fn test_failing_encoder_falls_back_to_empty_object() {
        let message = create_search_request_with(
            &FailingEncoder,
            "sub1",
            "hello",
            SearchRequestOptions::default(),
        );
        assert_eq!(message, r#"["REQ","sub1",{}]"#);
    }

    #[test]
    fn test_closure_encoder() {
        let encoder = |_: &Filter| -> Result<String, EncodeError> { Ok("{\"x\":1}".to_string()) };
        let message =
            create_search_request_with(&encoder, "a", "b", SearchRequestOptions::default());
        assert_eq!(message, r#"["REQ","a",{"x":1}]"#);
    }

    #[test]
    fn test_subscription_id_is_not_escaped() {
        let message = create_search_request("a\"b", "q", SearchRequestOptions::default());
        assert!(message.starts_with(r#"["REQ","a"b","#));
    }

    #[test]
    fn test_query_is_json_escaped() {
        let message = create_search_request("s", "say \"hi\"", SearchRequestOptions::default());
        assert_eq!(message, r#"["REQ","s",{"limit":100,"search":"say \"hi\""}]"#);
    }

    #[test]
    fn test_accepts_subscription_id_type() {
        let id = SubscriptionId::new("typed");
        let message = create_search_request(&id, "q", SearchRequestOptions::default());
        assert!(message.starts_with(r#"["REQ","typed","#));
        assert_eq!(create_close_request(&id), r#"["CLOSE","typed"]"#);
    }

    #[test]
    fn test_options_conversion_has_no_time_bounds() {
        let options: SearchFilterOptions = SearchRequestOptions::default().into();
        assert_eq!(options, SearchFilterOptions::default());
    }
}
