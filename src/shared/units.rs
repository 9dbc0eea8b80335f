//! Base-unit conversion.
//!
//! Midgard reports every amount as a numeric string in base units (1e8 per
//! display unit). Parsing is lossy by contract: anything that is not a number
//! becomes zero.

use rust_decimal::prelude::*;

/// Base units per display unit.
pub const BASE_UNIT_SCALE: u64 = 100_000_000;

/// Parse a numeric string into a `Decimal`, treating junk as zero.
///
/// Accepts plain decimals, scientific notation, and anything `f64` can parse
/// that still fits in a `Decimal`.
pub fn parse_lossy(raw: &str) -> Decimal {
    let raw = raw.trim();
    if raw.is_empty() {
        return Decimal::ZERO;
    }
    Decimal::from_str(raw)
        .or_else(|_| Decimal::from_scientific(raw))
        .ok()
        .or_else(|| raw.parse::<f64>().ok().and_then(Decimal::from_f64))
        .unwrap_or(Decimal::ZERO)
}

/// Convert a base-unit string to display units.
pub fn from_base_units(raw: &str) -> Decimal {
    parse_lossy(raw) / Decimal::from(BASE_UNIT_SCALE)
}

/// `Decimal` → `f64`, zero when unrepresentable.
pub fn to_f64_lossy(value: &Decimal) -> f64 {
    value.to_f64().unwrap_or(0.0)
}
