//! Stats sub-client — global network statistics.

use crate::client::MidgardClient;
use crate::domain::stats::wire::StatsResponse;
use crate::domain::stats::GlobalStats;
use crate::error::DashboardError;

pub struct Stats<'a> {
    pub(crate) client: &'a MidgardClient,
}

impl<'a> Stats<'a> {
    pub async fn get(&self) -> Result<GlobalStats, DashboardError> {
        let url = format!("{}/v2/stats", self.client.http.base_url());
        let resp: StatsResponse = self
            .client
            .http
            .get(&url, self.client.retry_policy())
            .await?;
        GlobalStats::try_from(resp)
    }
}
