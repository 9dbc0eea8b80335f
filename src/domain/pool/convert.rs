//! Conversion: PoolResponse → Pool (TryFrom + validation).

use super::wire::PoolResponse;
use super::{Pool, PoolStatus};
use crate::error::DashboardError;
use crate::shared::units::parse_lossy;

impl TryFrom<PoolResponse> for Pool {
    type Error = DashboardError;

    fn try_from(source: PoolResponse) -> Result<Self, Self::Error> {
        if source.asset.trim().is_empty() {
            return Err(DashboardError::Validation(
                "pool entry without an asset".to_string(),
            ));
        }
        Ok(Pool {
            asset: source.asset,
            asset_depth: parse_lossy(&source.asset_depth),
            rune_depth: parse_lossy(&source.rune_depth),
            volume_24h: parse_lossy(&source.volume_24h),
            pool_apy: parse_lossy(&source.pool_apy),
            status: source.status.parse().unwrap_or(PoolStatus::Unknown),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_pool_conversion() {
        let resp: PoolResponse = serde_json::from_str(
            r#"{
                "asset": "ETH.ETH",
                "assetDepth": "5000000000",
                "runeDepth": "300000000000",
                "volume24h": "12345",
                "poolAPY": "0.0812",
                "status": "available",
                "units": "ignored"
            }"#,
        )
        .unwrap();
        let pool = Pool::try_from(resp).unwrap();
        assert_eq!(pool.asset, "ETH.ETH");
        assert_eq!(pool.rune_depth_units(), Decimal::from(3000));
        assert_eq!(pool.pool_apy, Decimal::new(812, 4));
        assert_eq!(pool.status, PoolStatus::Available);
    }

    #[test]
    fn test_pool_missing_rune_depth_is_malformed() {
        let parsed = serde_json::from_str::<PoolResponse>(r#"{"asset": "ETH.ETH"}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_pool_blank_asset_rejected() {
        let resp: PoolResponse =
            serde_json::from_str(r#"{"asset": " ", "runeDepth": "1"}"#).unwrap();
        assert!(Pool::try_from(resp).is_err());
    }
}
