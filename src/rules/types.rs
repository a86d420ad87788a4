//! Rule-clause configuration types
//!
//! These are the serde-facing shapes a config layer deserializes before
//! building matchers. Empty code lists are legal; such a clause simply
//! never matches.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which endpoint of a connection a rule classifies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Classify the source endpoint (the accepted peer).
    #[serde(rename = "source")]
    Source,

    /// Classify the destination endpoint. The common clause form.
    #[default]
    #[serde(rename = "destination")]
    Destination,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Source => write!(f, "source"),
            Self::Destination => write!(f, "destination"),
        }
    }
}

/// Configuration for a geoip rule clause.
///
/// # Example
///
/// ```
/// use route_rules::rules::{Direction, GeoIpRuleConfig};
///
/// let config: GeoIpRuleConfig =
///     serde_json::from_str(r#"{"codes": ["US", "CA"]}"#).unwrap();
/// assert_eq!(config.direction, Direction::Destination);
/// assert_eq!(config.codes, vec!["US", "CA"]);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeoIpRuleConfig {
    /// Which endpoint to classify. Defaults to the destination.
    #[serde(default)]
    pub direction: Direction,

    /// Region codes to match, in display order. Case-insensitive for
    /// matching; duplicates collapse harmlessly.
    #[serde(default)]
    pub codes: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_default_and_display() {
        assert_eq!(Direction::default(), Direction::Destination);
        assert_eq!(Direction::Source.to_string(), "source");
        assert_eq!(Direction::Destination.to_string(), "destination");
    }

    #[test]
    fn test_config_deserialize() {
        let config: GeoIpRuleConfig =
            serde_json::from_str(r#"{"direction": "source", "codes": ["US", "CA"]}"#).unwrap();
        assert_eq!(config.direction, Direction::Source);
        assert_eq!(config.codes, vec!["US", "CA"]);
    }

    #[test]
    fn test_config_defaults() {
        let config: GeoIpRuleConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.direction, Direction::Destination);
        assert!(config.codes.is_empty());
    }

    #[test]
    fn test_config_round_trip() {
        let config = GeoIpRuleConfig {
            direction: Direction::Source,
            codes: vec!["jp".into(), "kr".into()],
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: GeoIpRuleConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.direction, Direction::Source);
        assert_eq!(back.codes, config.codes);
    }
}
