//! Conversion: StatsResponse → GlobalStats (TryFrom + validation).

use super::wire::StatsResponse;
use super::GlobalStats;
use crate::error::DashboardError;

impl TryFrom<StatsResponse> for GlobalStats {
    type Error = DashboardError;

    /// `swapVolume` and `swapCount` must be present; anything else missing
    /// is read as zero.
    fn try_from(source: StatsResponse) -> Result<Self, Self::Error> {
        let mut missing = Vec::new();
        let swap_volume = source.swap_volume.unwrap_or_else(|| {
            missing.push("swapVolume");
            String::new()
        });
        let swap_count = source.swap_count.unwrap_or_else(|| {
            missing.push("swapCount");
            String::new()
        });
        if !missing.is_empty() {
            return Err(DashboardError::Validation(format!(
                "stats response missing {}",
                missing.join(", ")
            )));
        }

        let zero = |v: Option<String>| v.unwrap_or_else(|| "0".to_string());

        Ok(GlobalStats {
            swap_volume,
            swap_count,
            swap_count_24h: zero(source.swap_count_24h),
            swap_count_30d: zero(source.swap_count_30d),
            daily_active_users: zero(source.daily_active_users),
            monthly_active_users: zero(source.monthly_active_users),
            add_liquidity_volume: zero(source.add_liquidity_volume),
            withdraw_volume: zero(source.withdraw_volume),
            add_liquidity_count: zero(source.add_liquidity_count),
            withdraw_count: zero(source.withdraw_count),
            rune_depth: zero(source.rune_depth),
            rune_price_usd: zero(source.rune_price_usd),
        })
    }
}
