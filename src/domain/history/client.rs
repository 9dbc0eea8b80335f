//! History sub-client — swap and earnings series for a reporting period.

use crate::client::MidgardClient;
use crate::domain::history::wire::{EarningsHistoryResponse, SwapHistoryResponse};
use crate::domain::history::{EarningsSample, RawSample};
use crate::error::DashboardError;
use crate::network::HISTORY_COUNT;
use crate::shared::Period;

pub struct History<'a> {
    pub(crate) client: &'a MidgardClient,
}

impl<'a> History<'a> {
    fn url(&self, series: &str, period: Period) -> String {
        format!(
            "{}/v2/history/{}?interval={}&count={}",
            self.client.http.base_url(),
            series,
            period.interval(),
            HISTORY_COUNT
        )
    }

    /// Swap volume/count per interval, oldest first.
    pub async fn swaps(&self, period: Period) -> Result<Vec<RawSample>, DashboardError> {
        let resp: SwapHistoryResponse = self
            .client
            .http
            .get(&self.url("swaps", period), self.client.retry_policy())
            .await?;
        Ok(resp.intervals.into_iter().map(RawSample::from).collect())
    }

    /// Earnings per interval, oldest first.
    pub async fn earnings(&self, period: Period) -> Result<Vec<EarningsSample>, DashboardError> {
        let resp: EarningsHistoryResponse = self
            .client
            .http
            .get(&self.url("earnings", period), self.client.retry_policy())
            .await?;
        Ok(resp.intervals.into_iter().map(EarningsSample::from).collect())
    }
}
