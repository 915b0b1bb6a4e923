//! Author public key type.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ProtocolError;

/// Length of an x-only public key in bytes.
pub const PUBLIC_KEY_LEN: usize = 32;

/// A 32-byte x-only public key identifying an event author.
///
/// Public keys travel over the wire as 64 lowercase hex characters. Parsing
/// accepts either case; rendering always produces lowercase.
///
/// # Examples
///
/// ```
/// use quiver_search::types::PublicKey;
///
/// let hex = "82341f882b6eabcd2ba7f1ef90aad961cf074af15b9ef44a09f9d2a8fbfbe6a2";
/// let key: PublicKey = hex.parse().unwrap();
/// assert_eq!(key.to_hex(), hex);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PublicKey([u8; PUBLIC_KEY_LEN]);

impl PublicKey {
    /// Creates a public key from raw bytes.
    pub const fn from_bytes(bytes: [u8; PUBLIC_KEY_LEN]) -> Self {
        Self(bytes)
    }

    /// Parses a public key from its hex representation.
    pub fn from_hex(value: &str) -> Result<Self, ProtocolError> {
        if value.len() != PUBLIC_KEY_LEN * 2 {
            return Err(ProtocolError::InvalidPublicKey {
                value: value.to_string(),
                message: format!(
                    "expected {} hex characters, got {}",
                    PUBLIC_KEY_LEN * 2,
                    value.len()
                ),
            });
        }

        let mut bytes = [0u8; PUBLIC_KEY_LEN];
        hex::decode_to_slice(value, &mut bytes).map_err(|e| ProtocolError::InvalidPublicKey {
            value: value.to_string(),
            message: e.to_string(),
        })?;
        Ok(Self(bytes))
    }

    /// Returns the raw key bytes.
    pub fn as_bytes(&self) -> &[u8; PUBLIC_KEY_LEN] {
        &self.0
    }

    /// Returns the lowercase hex representation.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({})", self.to_hex())
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for PublicKey {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl From<[u8; PUBLIC_KEY_LEN]> for PublicKey {
    fn from(bytes: [u8; PUBLIC_KEY_LEN]) -> Self {
        Self(bytes)
    }
}

impl Serialize for PublicKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for PublicKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::from_hex(&value).map_err(serde::de::Error::custom)
    }
}
