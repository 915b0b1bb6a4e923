//! NIP-50 search support.
//!
//! - [`parse_search_query`] - split a query into base terms and [`SearchExtensions`]
//! - [`build_search_filter`] - build a [`Filter`](crate::types::Filter) carrying a query
//!
//! The two are independent: the builder always sends the raw query, and the
//! parser is a standalone utility for inspecting one.

mod extensions;
mod filter_builder;
mod parser;

pub use extensions::{SearchExtensions, Sentiment};
pub use filter_builder::{DEFAULT_SEARCH_LIMIT, SearchFilterOptions, build_search_filter};
pub use parser::{ParsedSearchQuery, QueryToken, parse_search_query, tokenize};
