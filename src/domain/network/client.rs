//! Network sub-client — bond and reserve summary.

use crate::client::MidgardClient;
use crate::domain::network::wire::NetworkResponse;
use crate::domain::network::NetworkSummary;
use crate::error::DashboardError;

pub struct Network<'a> {
    pub(crate) client: &'a MidgardClient,
}

impl<'a> Network<'a> {
    pub async fn get(&self) -> Result<NetworkSummary, DashboardError> {
        let url = format!("{}/v2/network", self.client.http.base_url());
        let resp: NetworkResponse = self
            .client
            .http
            .get(&url, self.client.retry_policy())
            .await?;
        Ok(resp.into())
    }
}
