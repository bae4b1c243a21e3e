use crate::client::AsanaClient;
use crate::types::{Id, Tag, Task};
use crate::Error;

use super::{ExtraParams, Filters, TAGS, TASKS, WORKSPACES};

impl AsanaClient {
    /// Fetch a tag by id.
    pub async fn tag(&self, tag: Id, extra: &ExtraParams) -> Result<Tag, Error> {
        self.get(&format!("{TAGS}/{tag}"), &Filters::from(extra)).await
    }

    /// List every tag visible to the credential.
    pub async fn tags(&self, extra: &ExtraParams) -> Result<Vec<Tag>, Error> {
        self.get(TAGS, &Filters::from(extra)).await
    }

    /// List the tags in a workspace.
    pub async fn workspace_tags(
        &self,
        workspace: Id,
        extra: &ExtraParams,
    ) -> Result<Vec<Tag>, Error> {
        self.get(
            &format!("{WORKSPACES}/{workspace}{TAGS}"),
            &Filters::from(extra),
        )
        .await
    }

    /// List the tags attached to a task.
    pub async fn task_tags(&self, task: Id, extra: &ExtraParams) -> Result<Vec<Tag>, Error> {
        self.get(&format!("{TASKS}/{task}{TAGS}"), &Filters::from(extra))
            .await
    }

    /// List the tasks carrying a tag.
    pub async fn tag_tasks(&self, tag: Id, extra: &ExtraParams) -> Result<Vec<Task>, Error> {
        self.get(&format!("{TAGS}/{tag}{TASKS}"), &Filters::from(extra))
            .await
    }
}
