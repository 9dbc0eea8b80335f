//! Actions sub-client — paginated ledger actions.

use crate::client::MidgardClient;
use crate::domain::action::wire::{ActionResponse, ActionsResponse};
use crate::domain::action::ActionsQuery;
use crate::error::DashboardError;

pub struct Actions<'a> {
    pub(crate) client: &'a MidgardClient,
}

impl<'a> Actions<'a> {
    /// One page of actions, newest first, as Midgard returns them.
    pub async fn list(&self, query: &ActionsQuery) -> Result<Vec<ActionResponse>, DashboardError> {
        let url = format!(
            "{}/v2/actions?{}",
            self.client.http.base_url(),
            query.query_string()
        );
        let resp: ActionsResponse = self
            .client
            .http
            .get(&url, self.client.retry_policy())
            .await?;
        Ok(resp.actions)
    }
}
