use crate::client::AsanaClient;
use crate::types::{Id, Team};
use crate::Error;

use super::{ExtraParams, Filters, ORGANIZATIONS};

impl AsanaClient {
    /// List the teams in an organization.
    pub async fn organization_teams(
        &self,
        organization: Id,
        extra: &ExtraParams,
    ) -> Result<Vec<Team>, Error> {
        self.get(
            &format!("{ORGANIZATIONS}/{organization}/teams"),
            &Filters::from(extra),
        )
        .await
    }
}
