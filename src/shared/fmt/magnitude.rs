//! Abbreviated magnitudes (`$1.23B`) and per-transaction amounts.

use crate::shared::units::{from_base_units, parse_lossy, to_f64_lossy};

const BILLION: f64 = 1_000_000_000.0;
const MILLION: f64 = 1_000_000.0;
const THOUSAND: f64 = 1_000.0;

fn finite_or_zero(n: f64) -> f64 {
    if n.is_finite() {
        n
    } else {
        0.0
    }
}

/// Dollar value abbreviated to the largest of B/M/K that applies, two decimals.
pub fn format_magnitude(n: f64) -> String {
    let n = finite_or_zero(n);
    if n >= BILLION {
        format!("${:.2}B", n / BILLION)
    } else if n >= MILLION {
        format!("${:.2}M", n / MILLION)
    } else if n >= THOUSAND {
        format!("${:.2}K", n / THOUSAND)
    } else {
        format!("${:.2}", n)
    }
}

/// Base-unit volume string → abbreviated dollar value.
pub fn format_base_units_volume(raw: &str) -> String {
    format_magnitude(to_f64_lossy(&from_base_units(raw)))
}

/// Base-unit amount string → abbreviated amount without a currency sign.
///
/// Below one thousand, four decimals are kept since individual transfers are
/// often fractions of a unit.
pub fn format_amount(raw: &str) -> String {
    let n = finite_or_zero(to_f64_lossy(&from_base_units(raw)));
    if n >= MILLION {
        format!("{:.2}M", n / MILLION)
    } else if n >= THOUSAND {
        format!("{:.2}K", n / THOUSAND)
    } else {
        format!("{:.4}", n)
    }
}

/// Unit price in dollars with four decimals (`"$1.2345"`).
pub fn format_usd_price(raw: &str) -> String {
    format!("${:.4}", finite_or_zero(to_f64_lossy(&parse_lossy(raw))))
}
