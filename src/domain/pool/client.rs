//! Pools sub-client — pool listing.

use crate::client::MidgardClient;
use crate::domain::pool::wire::PoolResponse;
use crate::domain::pool::{Pool, PoolStatus};
use crate::error::DashboardError;

pub struct Pools<'a> {
    pub(crate) client: &'a MidgardClient,
}

impl<'a> Pools<'a> {
    /// List pools, optionally filtered by status.
    ///
    /// A single malformed entry rejects the whole listing.
    pub async fn list(&self, status: Option<PoolStatus>) -> Result<Vec<Pool>, DashboardError> {
        let mut url = format!("{}/v2/pools", self.client.http.base_url());
        if let Some(s) = status {
            url = format!("{}?status={}", url, s.as_str());
        }
        let resp: Vec<PoolResponse> = self
            .client
            .http
            .get(&url, self.client.retry_policy())
            .await?;
        resp.into_iter().map(Pool::try_from).collect()
    }

    /// Pools currently open for trading; these back the TVL figure.
    pub async fn available(&self) -> Result<Vec<Pool>, DashboardError> {
        self.list(Some(PoolStatus::Available)).await
    }
}
