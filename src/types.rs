//! Response envelope and entity records.
//!
//! Entities carry typed fields for what the client cares about and keep every
//! other field from the response in a flattened `fields` map, so nothing the
//! API returned is dropped during decoding.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Map;

use crate::Error;

/// Numeric identifier for an Asana resource.
pub type Id = u64;

/// Globally unique string identifier for an Asana resource.
pub type Gid = String;

/// The `{ data, errors }` wrapper every Asana response uses.
///
/// If `errors` is non-empty, `data` must be treated as invalid.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    /// The payload: a single entity or a list of entities.
    pub data: Option<T>,
    /// Errors reported by the API, empty on success.
    #[serde(default)]
    pub errors: Vec<ApiError>,
}

/// A single error entry reported by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    /// The human-readable message.
    pub message: String,
}

impl<T> Envelope<T> {
    /// Join every reported error message with newlines, in order.
    ///
    /// Returns `None` when no errors were reported.
    pub fn error_message(&self) -> Option<String> {
        join_messages(&self.errors)
    }

    /// Unwrap the payload, failing if any error was reported or `data` is absent.
    pub fn into_data(self) -> Result<T, Error> {
        if let Some(message) = self.error_message() {
            return Err(Error::Api { message });
        }
        self.data
            .ok_or_else(|| Error::Parse(serde::de::Error::missing_field("data")))
    }
}

/// Join error messages with newlines, or `None` for an empty list.
pub(crate) fn join_messages(errors: &[ApiError]) -> Option<String> {
    if errors.is_empty() {
        return None;
    }
    let messages: Vec<&str> = errors.iter().map(|e| e.message.as_str()).collect();
    Some(messages.join("\n"))
}

/// An Asana user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Numeric identifier.
    #[serde(default)]
    pub id: Id,
    /// String identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gid: Option<Gid>,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Email address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Photo URLs keyed by size (e.g. `image_60x60`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<HashMap<String, String>>,
    /// Workspaces the user belongs to.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub workspaces: Vec<Workspace>,
    /// All other fields from the API response.
    #[serde(flatten)]
    pub fields: Map<String, serde_json::Value>,
}

/// An Asana workspace or organization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Workspace {
    #[serde(default)]
    pub id: Id,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gid: Option<Gid>,
    #[serde(default)]
    pub name: String,
    /// Whether the workspace is an organization.
    #[serde(default)]
    pub is_organization: bool,
    #[serde(flatten)]
    pub fields: Map<String, serde_json::Value>,
}

/// An Asana project.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(default)]
    pub id: Id,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gid: Option<Gid>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub archived: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_at: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub followers: Vec<User>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace: Option<Workspace>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team: Option<Team>,
    #[serde(flatten)]
    pub fields: Map<String, serde_json::Value>,
}

/// An Asana task.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Task {
    #[serde(default)]
    pub id: Id,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gid: Option<Gid>,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<User>,
    /// Scheduling status for the assignee (e.g. `today`, `upcoming`, `later`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default)]
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_on: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub followers: Vec<User>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub projects: Vec<Project>,
    /// The parent task, for subtasks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<Box<Task>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace: Option<Workspace>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,
    #[serde(flatten)]
    pub fields: Map<String, serde_json::Value>,
}

/// An Asana tag.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    #[serde(default)]
    pub id: Id,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gid: Option<Gid>,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub followers: Vec<User>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace: Option<Workspace>,
    #[serde(flatten)]
    pub fields: Map<String, serde_json::Value>,
}

/// An Asana team.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Team {
    #[serde(default)]
    pub id: Id,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gid: Option<Gid>,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The organization the team belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<Workspace>,
    #[serde(flatten)]
    pub fields: Map<String, serde_json::Value>,
}
