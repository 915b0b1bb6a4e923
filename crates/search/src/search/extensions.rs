//! NIP-50 search extension types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Sentiment requested through the `sentiment:` extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    /// Negative sentiment.
    Negative,
    /// Neutral sentiment.
    Neutral,
    /// Positive sentiment.
    Positive,
}

impl Sentiment {
    /// Parses a sentiment literal, returning None for unknown values.
    ///
    /// Matching is exact: `Positive` is not recognized.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "negative" => Some(Sentiment::Negative),
            "neutral" => Some(Sentiment::Neutral),
            "positive" => Some(Sentiment::Positive),
            _ => None,
        }
    }

    /// Returns the wire literal.
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
            Sentiment::Positive => "positive",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sentiment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("unknown sentiment: {}", s))
    }
}

/// Structured modifiers extracted from a search query.
///
/// `Option` fields distinguish "not requested" from any concrete value, so
/// `nsfw: Some(false)` and `nsfw: None` encode differently.
///
/// `Display` renders the set extensions back into query tokens in a fixed
/// order (`include:spam`, `domain:`, `language:`, `sentiment:`, `nsfw:`).
///
/// # Examples
///
/// ```
/// use quiver_search::search::{SearchExtensions, Sentiment};
///
/// let extensions = SearchExtensions {
///     language: Some("en".to_string()),
///     sentiment: Some(Sentiment::Positive),
///     ..Default::default()
/// };
/// assert_eq!(extensions.to_string(), "language:en sentiment:positive");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchExtensions {
    /// Include results a relay would classify as spam.
    #[serde(default)]
    pub include_spam: bool,

    /// Restrict to authors with a NIP-05 identifier on this domain.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,

    /// Restrict to a language code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Restrict to a sentiment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<Sentiment>,

    /// Include (`true`) or exclude (`false`) NSFW results.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nsfw: Option<bool>,
}

impl SearchExtensions {
    /// Returns `true` if no extension is set.
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// Returns the extension tokens in canonical order.
    pub fn tokens(&self) -> Vec<String> {
        let mut tokens = Vec::new();
        if self.include_spam {
            tokens.push("include:spam".to_string());
        }
        if let Some(domain) = &self.domain {
            tokens.push(format!("domain:{}", domain));
        }
        if let Some(language) = &self.language {
            tokens.push(format!("language:{}", language));
        }
        if let Some(sentiment) = self.sentiment {
            tokens.push(format!("sentiment:{}", sentiment));
        }
        if let Some(nsfw) = self.nsfw {
            tokens.push(format!("nsfw:{}", nsfw));
        }
        tokens
    }
}

impl fmt::Display for SearchExtensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tokens().join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_sentiment_parse() {
        assert_eq!(Sentiment::parse("negative"), Some(Sentiment::Negative));
        assert_eq!(Sentiment::parse("neutral"), Some(Sentiment::Neutral));
        assert_eq!(Sentiment::parse("positive"), Some(Sentiment::Positive));
        assert_eq!(Sentiment::parse("Positive"), None);
        assert_eq!(Sentiment::parse("happy"), None);
        assert!("happy".parse::<Sentiment>().is_err());
    }

    #[test]
    fn test_default_is_empty() {
        let extensions = SearchExtensions::default();
        assert!(extensions.is_default());
        assert!(!extensions.include_spam);
        assert_eq!(extensions.to_string(), "");
    }

    #[test]
    fn test_display_canonical_order() {
        let extensions = SearchExtensions {
            include_spam: true,
            domain: Some("example.com".to_string()),
            language: Some("en".to_string()),
            sentiment: Some(Sentiment::Negative),
            nsfw: Some(false),
        };
        assert_eq!(
            extensions.to_string(),
            "include:spam domain:example.com language:en sentiment:negative nsfw:false"
        );
    }

    #[test]
    fn test_nsfw_false_is_not_default() {
        let extensions = SearchExtensions {
            nsfw: Some(false),
            ..Default::default()
        };
        assert!(!extensions.is_default());
    }

    #[test]
    fn test_serialize_camel_case() {
        let extensions = SearchExtensions {
            include_spam: true,
            sentiment: Some(Sentiment::Neutral),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&extensions).unwrap(),
            json!({"includeSpam": true, "sentiment": "neutral"})
        );
    }
}
