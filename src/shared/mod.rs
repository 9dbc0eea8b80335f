//! Shared newtypes and utilities used across all domain modules.

pub mod fmt;
pub mod serde_util;
pub mod units;

pub use units::{from_base_units, parse_lossy, to_f64_lossy, BASE_UNIT_SCALE};

use serde::{Deserialize, Serialize};
use std::str::FromStr;

// ─── Period ──────────────────────────────────────────────────────────────────

/// Dashboard reporting window.
///
/// Selects both the upstream history interval and, when the history sources
/// are unavailable, which simulated bundle is shown instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Period {
    #[default]
    #[serde(rename = "24H")]
    Day,
    #[serde(rename = "7D")]
    Week,
    #[serde(rename = "30D")]
    Month,
}

impl Period {
    pub const ALL: [Period; 3] = [Period::Day, Period::Week, Period::Month];

    /// Label shown on the period selector.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Day => "24H",
            Self::Week => "7D",
            Self::Month => "30D",
        }
    }

    /// Midgard `interval` query value.
    pub fn interval(&self) -> &'static str {
        match self {
            Self::Day => "1d",
            Self::Week => "7d",
            Self::Month => "30d",
        }
    }

    /// Resolve a selector label. Anything unrecognized falls back to `24H`.
    pub fn from_label(label: &str) -> Self {
        label.parse().unwrap_or_default()
    }
}

impl FromStr for Period {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "24H" => Ok(Self::Day),
            "7D" => Ok(Self::Week),
            "30D" => Ok(Self::Month),
            other => Err(format!("unknown period: {}", other)),
        }
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ─── Provenance ──────────────────────────────────────────────────────────────

/// Whether a piece of period data came from Midgard or from the simulated
/// fallback bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provenance {
    Live,
    Simulated,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_intervals() {
        assert_eq!(Period::Day.interval(), "1d");
        assert_eq!(Period::Week.interval(), "7d");
        assert_eq!(Period::Month.interval(), "30d");
    }

    #[test]
    fn test_period_from_label() {
        assert_eq!(Period::from_label("7D"), Period::Week);
        assert_eq!(Period::from_label("30d"), Period::Month);
        assert_eq!(Period::from_label(" 24H "), Period::Day);
    }

    #[test]
    fn test_period_unknown_label_defaults_to_day() {
        assert_eq!(Period::from_label("1Y"), Period::Day);
        assert_eq!(Period::from_label(""), Period::Day);
        assert!("90D".parse::<Period>().is_err());
    }

    #[test]
    fn test_period_serde() {
        let json = serde_json::to_string(&Period::Week).unwrap();
        assert_eq!(json, "\"7D\"");
        let back: Period = serde_json::from_str("\"30D\"").unwrap();
        assert_eq!(back, Period::Month);
    }
}
