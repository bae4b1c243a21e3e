use crate::client::AsanaClient;
use crate::types::{Id, User};
use crate::Error;

use super::{ExtraParams, Filters, USERS, WORKSPACES};

impl AsanaClient {
    /// Fetch the user the credential belongs to.
    pub async fn me(&self, extra: &ExtraParams) -> Result<User, Error> {
        self.get(&format!("{USERS}/me"), &Filters::from(extra)).await
    }

    /// Fetch a user by id.
    pub async fn user(&self, user: Id, extra: &ExtraParams) -> Result<User, Error> {
        self.get(&format!("{USERS}/{user}"), &Filters::from(extra))
            .await
    }

    /// List every user visible to the credential.
    pub async fn users(&self, extra: &ExtraParams) -> Result<Vec<User>, Error> {
        self.get(USERS, &Filters::from(extra)).await
    }

    /// List the users in a workspace.
    pub async fn workspace_users(
        &self,
        workspace: Id,
        extra: &ExtraParams,
    ) -> Result<Vec<User>, Error> {
        self.get(
            &format!("{WORKSPACES}/{workspace}{USERS}"),
            &Filters::from(extra),
        )
        .await
    }
}
