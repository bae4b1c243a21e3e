//! Asana API Client Library
//!
//! Typed accessors for Asana users, workspaces, projects, tasks, tags and
//! teams. Every call is a single authenticated GET whose `{ data, errors }`
//! envelope is unwrapped into a typed value or an [`Error`].
//!
//! # Example
//!
//! ```rust,no_run
//! use asana_client::{Connection, Credential, ExtraParams};
//!
//! # async fn example() -> Result<(), asana_client::Error> {
//! let connection = Connection::open(Credential::from_file("asana.key")?).await?;
//! println!("signed in as {}", connection.current_user().name);
//!
//! let extra = ExtraParams::new().fields(["name", "completed"]);
//! for workspace in connection.client().workspaces(&ExtraParams::default()).await? {
//!     let tasks = connection
//!         .client()
//!         .assigned_tasks(workspace.id, connection.current_user().id, false, &extra)
//!         .await?;
//!     println!("{}: {} tasks", workspace.name, tasks.len());
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod client;
pub mod connection;
pub mod credential;
pub mod error;
pub mod types;

// Re-export main types at crate root
pub use api::{ExtraParams, Filters};
pub use client::AsanaClient;
pub use connection::Connection;
pub use credential::Credential;
pub use error::Error;

// Re-export commonly used types
pub use types::{Envelope, Id, Project, Tag, Task, Team, User, Workspace};
