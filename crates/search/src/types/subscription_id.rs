//! Subscription identifier type.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An opaque identifier a client attaches to a `REQ` subscription.
///
/// The request encoder quotes the identifier without escaping it, so
/// identifiers must not contain `"` or `\`. [`SubscriptionId::generate`]
/// always produces a safe value.
///
/// # Examples
///
/// ```
/// use quiver_search::types::SubscriptionId;
///
/// let id = SubscriptionId::new("search-1");
/// assert_eq!(id.as_str(), "search-1");
///
/// let generated = SubscriptionId::generate();
/// assert_eq!(generated.as_str().len(), 32);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubscriptionId(String);

impl SubscriptionId {
    /// Creates a subscription ID from the given string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generates a random subscription ID (hyphen-less UUID v4).
    pub fn generate() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    /// Returns the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if the ID can be quoted without escaping.
    pub fn is_quote_safe(&self) -> bool {
        !self.0.contains(['"', '\\'])
    }
}

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SubscriptionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SubscriptionId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for SubscriptionId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_is_unique_and_safe() {
        let a = SubscriptionId::generate();
        let b = SubscriptionId::generate();
        assert_ne!(a, b);
        assert!(a.is_quote_safe());
        assert!(a.as_str().chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_quote_safety() {
        assert!(SubscriptionId::new("sub1").is_quote_safe());
        assert!(!SubscriptionId::new("a\"b").is_quote_safe());
        assert!(!SubscriptionId::new("a\\b").is_quote_safe());
    }
}
