use crate::client::AsanaClient;
use crate::types::{Id, Workspace};
use crate::Error;

use super::{ExtraParams, Filters, WORKSPACES};

impl AsanaClient {
    /// Fetch a workspace by id.
    pub async fn workspace(&self, workspace: Id, extra: &ExtraParams) -> Result<Workspace, Error> {
        self.get(&format!("{WORKSPACES}/{workspace}"), &Filters::from(extra))
            .await
    }

    /// List the workspaces the credential can access.
    pub async fn workspaces(&self, extra: &ExtraParams) -> Result<Vec<Workspace>, Error> {
        self.get(WORKSPACES, &Filters::from(extra)).await
    }
}
