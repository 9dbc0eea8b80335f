//! Conversions from history wire types to samples.

use super::wire::{EarningsIntervalResponse, SwapIntervalResponse};
use super::{EarningsSample, RawSample};

const NANOS_PER_SEC: i64 = 1_000_000_000;

fn seconds_to_nanos(secs: i64) -> i64 {
    secs.saturating_mul(NANOS_PER_SEC)
}

impl From<SwapIntervalResponse> for RawSample {
    fn from(i: SwapIntervalResponse) -> Self {
        Self {
            timestamp_nanos: seconds_to_nanos(i.start_time),
            total_volume_base_units: i.total_volume,
            total_count: i.total_count,
        }
    }
}

impl From<EarningsIntervalResponse> for EarningsSample {
    fn from(i: EarningsIntervalResponse) -> Self {
        Self {
            timestamp_nanos: seconds_to_nanos(i.start_time),
            total_earnings_base_units: i.total_earnings,
        }
    }
}
