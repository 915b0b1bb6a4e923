//! # quiver-search - NIP-50 search for Nostr clients
//!
//! This crate implements the client side of [NIP-50](https://github.com/nostr-protocol/nips/blob/master/50.md)
//! search: it understands the `key:value` extensions embedded in a search
//! string and produces the `REQ` subscription message that carries a search
//! filter to a relay.
//!
//! ## Components
//!
//! | Component | Entry point | Purpose |
//! |-----------|-------------|---------|
//! | Query extension parser | [`parse_search_query`] | split a query into base terms and [`SearchExtensions`] |
//! | Search filter builder | [`build_search_filter`] | build a [`Filter`] carrying the raw query |
//! | Search request encoder | [`create_search_request`] | render `["REQ","<id>",<filter>]` |
//!
//! All three are synchronous pure functions with no shared state. None of
//! them returns an error: unknown query tokens degrade to search terms, and
//! a filter that fails to encode is sent as `{}`.
//!
//! ## Supported extensions
//!
//! | Token | Effect |
//! |-------|--------|
//! | `include:spam` | include results a relay would filter as spam |
//! | `domain:<domain>` | restrict to authors with a NIP-05 on `<domain>` |
//! | `language:<code>` | restrict to a language |
//! | `sentiment:<negative\|neutral\|positive>` | restrict to a sentiment |
//! | `nsfw:<true\|false>` | include or exclude NSFW results |
//!
//! ## Quick Start
//!
//! ```
//! use quiver_search::{SearchRequestOptions, create_search_request, parse_search_query};
//! use quiver_search::types::Kind;
//!
//! let query = "language:en nsfw:false rust async";
//!
//! let parsed = parse_search_query(query);
//! assert_eq!(parsed.base_query, "rust async");
//! assert_eq!(parsed.extensions.nsfw, Some(false));
//!
//! let message = create_search_request(
//!     "search-1",
//!     query,
//!     SearchRequestOptions::default().with_kinds(vec![Kind::TEXT_NOTE]),
//! );
//! assert_eq!(
//!     message,
//!     r#"["REQ","search-1",{"kinds":[1],"limit":100,"search":"language:en nsfw:false rust async"}]"#
//! );
//! ```
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events (`debug` for parsed queries and
//! encoded requests, `warn` when a filter falls back to `{}`). Install a
//! subscriber in the binary to see them.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]

pub mod error;
pub mod message;
pub mod search;
pub mod types;

pub use error::{EncodeError, ProtocolError};
pub use message::{
    FilterEncoder, SearchRequestOptions, SortedJsonEncoder, create_close_request,
    create_search_request, create_search_request_with,
};
pub use search::{
    DEFAULT_SEARCH_LIMIT, ParsedSearchQuery, SearchExtensions, SearchFilterOptions, Sentiment,
    build_search_filter, parse_search_query,
};
pub use types::{Filter, Kind, PublicKey, SubscriptionId, Timestamp};
