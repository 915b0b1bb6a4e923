//! Unix timestamp type used for `since` / `until` bounds.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ProtocolError;

/// Seconds since the unix epoch.
///
/// # Examples
///
/// ```
/// use quiver_search::types::Timestamp;
///
/// let ts: Timestamp = "2024-01-15T10:30:00Z".parse().unwrap();
/// assert_eq!(ts.as_u64(), 1_705_314_600);
///
/// let ts: Timestamp = "1705314600".parse().unwrap();
/// assert_eq!(ts.to_rfc3339().as_deref(), Some("2024-01-15T10:30:00+00:00"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(u64);

impl Timestamp {
    /// Creates a timestamp from unix seconds.
    pub const fn from_secs(secs: u64) -> Self {
        Self(secs)
    }

    /// Returns the current time, truncated to whole seconds.
    pub fn now() -> Self {
        Self::from(Utc::now())
    }

    /// Returns the unix seconds.
    pub const fn as_u64(&self) -> u64 {
        self.0
    }

    /// Converts to a UTC date-time, if representable.
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        i64::try_from(self.0)
            .ok()
            .and_then(|secs| Utc.timestamp_opt(secs, 0).single())
    }

    /// Renders the timestamp as RFC 3339, if representable.
    pub fn to_rfc3339(&self) -> Option<String> {
        self.to_datetime().map(|dt| dt.to_rfc3339())
    }
}

impl From<DateTime<Utc>> for Timestamp {
    /// Times before the epoch clamp to zero.
    fn from(dt: DateTime<Utc>) -> Self {
        Self(u64::try_from(dt.timestamp()).unwrap_or(0))
    }
}

impl From<u64> for Timestamp {
    fn from(secs: u64) -> Self {
        Self(secs)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Timestamp {
    type Err = ProtocolError;

    /// Accepts decimal unix seconds or an RFC 3339 date-time.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) {
            return s
                .parse::<u64>()
                .map(Self)
                .map_err(|_| ProtocolError::InvalidTimestamp {
                    value: s.to_string(),
                });
        }

        let dt = DateTime::parse_from_rfc3339(s).map_err(|_| ProtocolError::InvalidTimestamp {
            value: s.to_string(),
        })?;
        let secs = u64::try_from(dt.timestamp()).map_err(|_| ProtocolError::InvalidTimestamp {
            value: s.to_string(),
        })?;
        Ok(Self(secs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_seconds() {
        assert_eq!("0".parse::<Timestamp>().unwrap(), Timestamp::from_secs(0));
        assert_eq!(
            " 1700000000 ".parse::<Timestamp>().unwrap().as_u64(),
            1_700_000_000
        );
    }

    #[test]
    fn test_parse_rfc3339_with_offset() {
        let ts: Timestamp = "2024-01-15T12:30:00+02:00".parse().unwrap();
        assert_eq!(ts.as_u64(), 1_705_314_600);
    }

    #[test]
    fn test_parse_rejects_garbage_and_pre_epoch() {
        assert!("yesterday".parse::<Timestamp>().is_err());
        assert!("".parse::<Timestamp>().is_err());
        assert!("1960-01-01T00:00:00Z".parse::<Timestamp>().is_err());
    }

    #[test]
    fn test_from_datetime_clamps_pre_epoch() {
        let dt = Utc.with_ymd_and_hms(1960, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(Timestamp::from(dt).as_u64(), 0);
    }

    #[test]
    fn test_now_is_after_2020() {
        assert!(Timestamp::now().as_u64() > 1_577_836_800);
    }

    #[test]
    fn test_serializes_as_number() {
        let ts = Timestamp::from_secs(42);
        assert_eq!(serde_json::to_string(&ts).unwrap(), "42");
    }
}
