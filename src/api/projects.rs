use crate::client::AsanaClient;
use crate::types::{Id, Project};
use crate::Error;

use super::{ExtraParams, Filters, PROJECTS};

impl AsanaClient {
    /// Fetch a project by id.
    pub async fn project(&self, project: Id, extra: &ExtraParams) -> Result<Project, Error> {
        self.get(&format!("{PROJECTS}/{project}"), &Filters::from(extra))
            .await
    }

    /// List the projects in a workspace.
    pub async fn projects(
        &self,
        workspace: Id,
        extra: &ExtraParams,
    ) -> Result<Vec<Project>, Error> {
        let filters = Filters::new()
            .with("workspace", workspace)
            .with_extra(extra);
        self.get(PROJECTS, &filters).await
    }
}
