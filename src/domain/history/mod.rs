//! History domain — per-interval swap volume and earnings for a period.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod wire;

use crate::shared::units::{from_base_units, parse_lossy};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One swap-history interval, oldest first in any series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawSample {
    pub timestamp_nanos: i64,
    pub total_volume_base_units: String,
    pub total_count: String,
}

/// One earnings-history interval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EarningsSample {
    pub timestamp_nanos: i64,
    pub total_earnings_base_units: String,
}

/// Totals over every sample of a period, in display units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodTotals {
    pub volume: Decimal,
    pub count: Decimal,
    pub avg_volume: Decimal,
    pub sample_count: usize,
}

impl PeriodTotals {
    /// `None` for an empty series: there is no average to report.
    pub fn from_samples(samples: &[RawSample]) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }
        let volume: Decimal = samples
            .iter()
            .map(|s| from_base_units(&s.total_volume_base_units))
            .sum();
        let count: Decimal = samples.iter().map(|s| parse_lossy(&s.total_count)).sum();
        Some(Self {
            volume,
            count,
            avg_volume: volume / Decimal::from(samples.len()),
            sample_count: samples.len(),
        })
    }
}

/// Summed earnings in display units.
pub fn total_earnings(samples: &[EarningsSample]) -> Decimal {
    samples
        .iter()
        .map(|s| from_base_units(&s.total_earnings_base_units))
        .sum()
}
