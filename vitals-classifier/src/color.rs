//! Display color tokens attached to classification buckets

use serde::{Deserialize, Serialize};

/// Closed set of colors a classification can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorToken {
    Green,
    LightGreen,
    Yellow,
    Orange,
    Red,
    DarkRed,
    Purple,
    Blue,
}

impl ColorToken {
    /// Token name as sent to the presentation layer
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorToken::Green => "green",
            ColorToken::LightGreen => "lightgreen",
            ColorToken::Yellow => "yellow",
            ColorToken::Orange => "orange",
            ColorToken::Red => "red",
            ColorToken::DarkRed => "darkred",
            ColorToken::Purple => "purple",
            ColorToken::Blue => "blue",
        }
    }

    /// Hex code used by the dashboard gauges and badges
    pub fn hex(&self) -> &'static str {
        match self {
            ColorToken::Green => "#22c55e",
            ColorToken::LightGreen => "#86efac",
            ColorToken::Yellow => "#eab308",
            ColorToken::Orange => "#f97316",
            ColorToken::Red => "#ef4444",
            ColorToken::DarkRed => "#991b1b",
            ColorToken::Purple => "#a855f7",
            ColorToken::Blue => "#3b82f6",
        }
    }

    /// Parse a token name (case insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "green" => Some(ColorToken::Green),
            "lightgreen" | "light_green" | "light-green" => Some(ColorToken::LightGreen),
            "yellow" => Some(ColorToken::Yellow),
            "orange" => Some(ColorToken::Orange),
            "red" => Some(ColorToken::Red),
            "darkred" | "dark_red" | "dark-red" => Some(ColorToken::DarkRed),
            "purple" => Some(ColorToken::Purple),
            "blue" => Some(ColorToken::Blue),
            _ => None,
        }
    }

    pub fn all_variants() -> &'static [ColorToken] {
        &[
            ColorToken::Green,
            ColorToken::LightGreen,
            ColorToken::Yellow,
            ColorToken::Orange,
            ColorToken::Red,
            ColorToken::DarkRed,
            ColorToken::Purple,
            ColorToken::Blue,
        ]
    }
}

impl std::fmt::Display for ColorToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_matches_as_str() {
        for color in ColorToken::all_variants() {
            assert_eq!(ColorToken::parse(color.as_str()), Some(*color));
        }
    }

    #[test]
    fn test_parse_aliases() {
        assert_eq!(ColorToken::parse("light_green"), Some(ColorToken::LightGreen));
        assert_eq!(ColorToken::parse("Dark-Red"), Some(ColorToken::DarkRed));
        assert_eq!(ColorToken::parse("GREEN"), Some(ColorToken::Green));
        assert_eq!(ColorToken::parse("teal"), None);
        assert_eq!(ColorToken::parse(""), None);
    }

    #[test]
    fn test_serde_uses_lowercase_tokens() {
        let json = serde_json::to_string(&ColorToken::LightGreen).unwrap();
        assert_eq!(json, "\"lightgreen\"");
        let parsed: ColorToken = serde_json::from_str("\"darkred\"").unwrap();
        assert_eq!(parsed, ColorToken::DarkRed);
    }

    #[test]
    fn test_hex_codes_are_distinct() {
        let mut seen = std::collections::HashSet::new();
        for color in ColorToken::all_variants() {
            assert!(color.hex().starts_with('#'));
            assert!(seen.insert(color.hex()), "duplicate hex for {:?}", color);
        }
    }
}
