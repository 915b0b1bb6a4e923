//! Search query extension parser.
//!
//! Splits a raw search string on spaces and classifies each token as either
//! a recognized `key:value` extension or a plain search term.
//!
//! # Grammar
//!
//! ```text
//! query       := token (SPACE token)*
//! token       := extension | term
//! extension   := "include:spam" | "domain:" value | "language:" value
//!              | "sentiment:" ("negative"|"neutral"|"positive")
//!              | "nsfw:" value
//! value       := any run of non-space characters (may be empty)
//! term        := any token not matching the extension forms
//! ```

use serde::Serialize;
use tracing::debug;

use super::extensions::{SearchExtensions, Sentiment};

const INCLUDE_PREFIX: &str = "include:";
const DOMAIN_PREFIX: &str = "domain:";
const LANGUAGE_PREFIX: &str = "language:";
const SENTIMENT_PREFIX: &str = "sentiment:";
const NSFW_PREFIX: &str = "nsfw:";

/// A single classified query token.
///
/// Values borrow from the input and are the text after the prefix, which
/// may be empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryToken<'a> {
    /// `include:<value>`; only `spam` has an effect.
    Include(&'a str),
    /// `domain:<value>`.
    Domain(&'a str),
    /// `language:<value>`.
    Language(&'a str),
    /// `sentiment:<value>`; unknown values are ignored.
    Sentiment(&'a str),
    /// `nsfw:<value>`.
    Nsfw(&'a str),
    /// Anything else.
    Term(&'a str),
}

impl<'a> QueryToken<'a> {
    /// Classifies a token. Prefixes are checked in a fixed order and the
    /// first match wins.
    pub fn classify(token: &'a str) -> Self {
        if let Some(value) = token.strip_prefix(INCLUDE_PREFIX) {
            QueryToken::Include(value)
        } else if let Some(value) = token.strip_prefix(DOMAIN_PREFIX) {
            QueryToken::Domain(value)
        } else if let Some(value) = token.strip_prefix(LANGUAGE_PREFIX) {
            QueryToken::Language(value)
        } else if let Some(value) = token.strip_prefix(SENTIMENT_PREFIX) {
            QueryToken::Sentiment(value)
        } else if let Some(value) = token.strip_prefix(NSFW_PREFIX) {
            QueryToken::Nsfw(value)
        } else {
            QueryToken::Term(token)
        }
    }

    /// Returns `true` for plain search terms.
    pub fn is_term(&self) -> bool {
        matches!(self, QueryToken::Term(_))
    }
}

/// Iterates over the classified tokens of a query.
///
/// Splits strictly on `' '`; tabs and other whitespace stay inside tokens.
pub fn tokenize(query: &str) -> impl Iterator<Item = QueryToken<'_>> {
    query
        .split(' ')
        .filter(|part| !part.is_empty())
        .map(QueryToken::classify)
}

/// A search query split into its base terms and extensions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedSearchQuery {
    /// Plain search terms joined with single spaces, in original order.
    pub base_query: String,

    /// Recognized extensions.
    pub extensions: SearchExtensions,
}

impl ParsedSearchQuery {
    /// Recombines the base query and the rendered extensions.
    ///
    /// Parsing the result yields `self` again as long as no extension value
    /// contains a space.
    pub fn to_query_string(&self) -> String {
        let mut parts: Vec<String> = Vec::new();
        if !self.base_query.is_empty() {
            parts.push(self.base_query.clone());
        }
        parts.extend(self.extensions.tokens());
        parts.join(" ")
    }
}

/// Parses a raw search string into its base query and extensions.
///
/// This never fails: unknown `key:value` tokens stay in the base query,
/// unknown `include:` and `sentiment:` values are consumed and dropped, and
/// the last token for a given extension wins.
///
/// # Examples
///
/// ```
/// use quiver_search::search::{Sentiment, parse_search_query};
///
/// let parsed = parse_search_query("domain:example.com language:en sentiment:positive bitcoin talk");
/// assert_eq!(parsed.base_query, "bitcoin talk");
/// assert_eq!(parsed.extensions.domain.as_deref(), Some("example.com"));
/// assert_eq!(parsed.extensions.language.as_deref(), Some("en"));
/// assert_eq!(parsed.extensions.sentiment, Some(Sentiment::Positive));
/// assert_eq!(parsed.extensions.nsfw, None);
/// ```
pub fn parse_search_query(query: &str) -> ParsedSearchQuery {
    let mut extensions = SearchExtensions::default();
    let mut terms: Vec<&str> = Vec::new();

    for token in tokenize(query) {
        match token {
            QueryToken::Include(value) => {
                if value == "spam" {
                    extensions.include_spam = true;
                }
            }
            QueryToken::Domain(value) => extensions.domain = Some(value.to_string()),
            QueryToken::Language(value) => extensions.language = Some(value.to_string()),
            QueryToken::Sentiment(value) => {
                if let Some(sentiment) = Sentiment::parse(value) {
                    extensions.sentiment = Some(sentiment);
                }
            }
            QueryToken::Nsfw(value) => extensions.nsfw = Some(value == "true"),
            QueryToken::Term(term) => terms.push(term),
        }
    }

    let base_query = terms.join(" ");
    debug!(
        base_query = %base_query,
        extensions = %extensions,
        "Parsed search query"
    );

    ParsedSearchQuery {
        base_query,
        extensions,
    }
}
