//! Event kind type.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ProtocolError;

/// A Nostr event kind.
///
/// Kinds are plain unsigned integers on the wire; the constants below name
/// the ones search clients ask for most often.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kind(u16);

impl Kind {
    /// User metadata (profile).
    pub const METADATA: Kind = Kind(0);
    /// Short text note.
    pub const TEXT_NOTE: Kind = Kind(1);
    /// Repost.
    pub const REPOST: Kind = Kind(6);
    /// Reaction.
    pub const REACTION: Kind = Kind(7);
    /// Long-form article.
    pub const LONG_FORM_TEXT_NOTE: Kind = Kind(30023);

    /// Creates a kind from its numeric value.
    pub const fn new(value: u16) -> Self {
        Self(value)
    }

    /// Returns the numeric value.
    pub const fn as_u16(&self) -> u16 {
        self.0
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Kind {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u16>()
            .map(Kind)
            .map_err(|_| ProtocolError::InvalidKind {
                value: s.to_string(),
            })
    }
}

impl From<u16> for Kind {
    fn from(value: u16) -> Self {
        Self(value)
    }
}

impl From<Kind> for u16 {
    fn from(kind: Kind) -> Self {
        kind.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_parse() {
        assert_eq!("1".parse::<Kind>().unwrap(), Kind::TEXT_NOTE);
        assert_eq!("30023".parse::<Kind>().unwrap(), Kind::LONG_FORM_TEXT_NOTE);
        assert!("-1".parse::<Kind>().is_err());
        assert!("70000".parse::<Kind>().is_err());
        assert!("note".parse::<Kind>().is_err());
    }

    #[test]
    fn test_kind_serializes_as_number() {
        assert_eq!(serde_json::to_string(&Kind::REACTION).unwrap(), "7");
        let kinds: Vec<Kind> = serde_json::from_str("[0,1]").unwrap();
        assert_eq!(kinds, vec![Kind::METADATA, Kind::TEXT_NOTE]);
    }
}
