//! Command-line access to the Asana API.
//!
//! # Usage
//!
//! Put a personal access token in a file, or set `ASANA_TOKEN`, and run:
//!
//! ```bash
//! asana --token-file ~/.asana.key workspaces
//! ASANA_TOKEN="your-personal-access-token" asana tasks --project 42 --fields name,completed
//! ```
//!
//! Results are printed to stdout as JSON. Set `RUST_LOG=asana_client=debug`
//! to trace requests on stderr.

use std::path::PathBuf;

use asana_client::{Connection, Credential, Error, ExtraParams, Id};
use clap::{ArgGroup, Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("ASANA_BUILD_INFO"),
    ")"
);

#[derive(Parser)]
#[command(name = "asana")]
#[command(about = "Query the Asana API", version = VERSION)]
struct Cli {
    /// File holding the API token. Falls back to ASANA_TOKEN when absent.
    #[arg(long, env = "ASANA_TOKEN_FILE", global = true)]
    token_file: Option<PathBuf>,

    /// Fields to include in the response (opt_fields)
    #[arg(long, value_delimiter = ',', global = true)]
    fields: Vec<String>,

    /// Nested objects to expand (opt_expand)
    #[arg(long, value_delimiter = ',', global = true)]
    expand: Vec<String>,

    /// Ask the API for pretty-printed output (opt_pretty)
    #[arg(long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show the authenticated user
    Me,
    /// List accessible workspaces
    Workspaces,
    /// List users, optionally within a workspace
    Users {
        #[arg(long)]
        workspace: Option<Id>,
    },
    /// List the projects in a workspace
    Projects { workspace: Id },
    /// List tasks in a project, or assigned to a user in a workspace
    #[command(group(ArgGroup::new("scope").required(true).args(["project", "workspace"])))]
    Tasks {
        #[arg(long)]
        project: Option<Id>,
        #[arg(long)]
        workspace: Option<Id>,
        /// Assignee within the workspace; defaults to the authenticated user
        #[arg(long, requires = "workspace", conflicts_with = "project")]
        assignee: Option<Id>,
        /// Include tasks from archived projects
        #[arg(long)]
        archived: bool,
    },
    /// List the subtasks of a task
    Subtasks { task: Id },
    /// List tags, optionally within a workspace or on a task
    Tags {
        #[arg(long, conflicts_with = "task")]
        workspace: Option<Id>,
        #[arg(long)]
        task: Option<Id>,
    },
    /// List the tasks carrying a tag
    TagTasks { tag: Id },
    /// List the teams in an organization
    Teams { organization: Id },
}

impl Cli {
    fn credential(&self) -> Result<Credential, Error> {
        match &self.token_file {
            Some(path) => Credential::from_file(path),
            None => Credential::from_env(),
        }
    }

    fn extra(&self) -> ExtraParams {
        ExtraParams {
            pretty: self.pretty,
            fields: self.fields.clone(),
            expand: self.expand.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let connection = Connection::open(cli.credential()?).await?;

    run(&cli, &connection).await?;

    Ok(())
}

async fn run(cli: &Cli, connection: &Connection) -> Result<(), Error> {
    let client = connection.client();
    let extra = cli.extra();

    match &cli.command {
        Command::Me => print(connection.current_user()),
        Command::Workspaces => print(&client.workspaces(&extra).await?),
        Command::Users { workspace } => match workspace {
            Some(workspace) => print(&client.workspace_users(*workspace, &extra).await?),
            None => print(&client.users(&extra).await?),
        },
        Command::Projects { workspace } => print(&client.projects(*workspace, &extra).await?),
        Command::Tasks {
            project,
            workspace,
            assignee,
            archived,
        } => match (project, workspace) {
            (Some(project), _) => print(&client.project_tasks(*project, *archived, &extra).await?),
            (None, Some(workspace)) => {
                let assignee = assignee.unwrap_or(connection.current_user().id);
                print(
                    &client
                        .assigned_tasks(*workspace, assignee, *archived, &extra)
                        .await?,
                )
            }
            // clap enforces the "scope" group.
            (None, None) => Ok(()),
        },
        Command::Subtasks { task } => print(&client.subtasks(*task, &extra).await?),
        Command::Tags { workspace, task } => match (workspace, task) {
            (Some(workspace), _) => print(&client.workspace_tags(*workspace, &extra).await?),
            (None, Some(task)) => print(&client.task_tags(*task, &extra).await?),
            (None, None) => print(&client.tags(&extra).await?),
        },
        Command::TagTasks { tag } => print(&client.tag_tasks(*tag, &extra).await?),
        Command::Teams { organization } => {
            print(&client.organization_teams(*organization, &extra).await?)
        }
    }
}

fn print<T: Serialize>(value: &T) -> Result<(), Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_extra_params() {
        let cli = Cli::parse_from([
            "asana",
            "tasks",
            "--project",
            "42",
            "--archived",
            "--fields",
            "name,completed",
            "--pretty",
        ]);

        assert_eq!(
            cli.extra(),
            ExtraParams::new().pretty().fields(["name", "completed"])
        );
        match cli.command {
            Command::Tasks {
                project, archived, ..
            } => {
                assert_eq!(project, Some(42));
                assert!(archived);
            }
            _ => panic!("Expected tasks command"),
        }
    }

    #[test]
    fn test_tasks_requires_scope() {
        let result = Cli::try_parse_from(["asana", "tasks", "--archived"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_assignee_requires_workspace() {
        let result = Cli::try_parse_from(["asana", "tasks", "--project", "1", "--assignee", "2"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_assignee_with_workspace() {
        let cli = Cli::parse_from(["asana", "tasks", "--workspace", "1", "--assignee", "2"]);
        match cli.command {
            Command::Tasks {
                project,
                workspace,
                assignee,
                ..
            } => {
                assert_eq!(project, None);
                assert_eq!(workspace, Some(1));
                assert_eq!(assignee, Some(2));
            }
            _ => panic!("Expected tasks command"),
        }
    }

    #[test]
    fn test_tags_scope_conflict() {
        let result = Cli::try_parse_from(["asana", "tags", "--workspace", "1", "--task", "2"]);
        assert!(result.is_err());
    }
}
