use crate::client::AsanaClient;
use crate::types::{Id, Task};
use crate::Error;

use super::{ExtraParams, Filters, TASKS};

impl AsanaClient {
    /// Fetch a task by id.
    pub async fn task(&self, task: Id, extra: &ExtraParams) -> Result<Task, Error> {
        self.get(&format!("{TASKS}/{task}"), &Filters::from(extra))
            .await
    }

    /// List the tasks assigned to a user within a workspace.
    ///
    /// `include_archived` controls whether tasks in archived projects are returned.
    pub async fn assigned_tasks(
        &self,
        workspace: Id,
        assignee: Id,
        include_archived: bool,
        extra: &ExtraParams,
    ) -> Result<Vec<Task>, Error> {
        let filters = Filters::new()
            .with("assignee", assignee)
            .with("workspace", workspace)
            .with("include_archived", include_archived)
            .with_extra(extra);
        self.get(TASKS, &filters).await
    }

    /// List the tasks in a project.
    pub async fn project_tasks(
        &self,
        project: Id,
        include_archived: bool,
        extra: &ExtraParams,
    ) -> Result<Vec<Task>, Error> {
        let filters = Filters::new()
            .with("project", project)
            .with("include_archived", include_archived)
            .with_extra(extra);
        self.get(TASKS, &filters).await
    }

    /// List the direct subtasks of a task.
    pub async fn subtasks(&self, task: Id, extra: &ExtraParams) -> Result<Vec<Task>, Error> {
        self.get(&format!("{TASKS}/{task}/subtasks"), &Filters::from(extra))
            .await
    }
}
