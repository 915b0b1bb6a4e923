//! Client-to-relay message encoding.
//!
//! - [`create_search_request`] - build a search filter and render it as `REQ`
//! - [`create_close_request`] - render `CLOSE` for a subscription
//! - [`FilterEncoder`] - the seam between a filter and its wire text

mod json;
mod request;

pub use json::{to_sorted_json_string, to_sorted_json_value};
pub use request::{
    EMPTY_FILTER, FilterEncoder, SearchRequestOptions, SortedJsonEncoder, create_close_request,
    create_search_request, create_search_request_with, encode_request,
};
