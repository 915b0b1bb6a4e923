//! Protocol value types.
//!
//! - [`Filter`] - the relay filter a search subscription carries
//! - [`PublicKey`], [`Kind`], [`Timestamp`] - strongly typed filter fields
//! - [`SubscriptionId`] - the identifier attached to a `REQ` message
//!
//! # Examples
//!
//! ```
//! use quiver_search::types::{Filter, Kind, PublicKey, Timestamp};
//!
//! let author: PublicKey =
//!     "82341f882b6eabcd2ba7f1ef90aad961cf074af15b9ef44a09f9d2a8fbfbe6a2"
//!         .parse()
//!         .unwrap();
//!
//! let filter = Filter::new()
//!     .with_authors(vec![author])
//!     .with_kinds(vec![Kind::TEXT_NOTE])
//!     .with_since(Timestamp::from_secs(1_700_000_000))
//!     .with_search("lightning");
//! ```

mod filter;
mod kind;
mod public_key;
mod subscription_id;
mod timestamp;

pub use filter::Filter;
pub use kind::Kind;
pub use public_key::{PUBLIC_KEY_LEN, PublicKey};
pub use subscription_id::SubscriptionId;
pub use timestamp::Timestamp;
