//! Endpoint façade: one typed method per Asana resource and action.
//!
//! Every method is a thin call into [`crate::AsanaClient::get`]: it composes the
//! path from fixed segments and numeric ids, merges any fixed filters with the
//! caller's [`ExtraParams`], and lets the executor unwrap the envelope.

mod params;
mod projects;
mod tags;
mod tasks;
mod teams;
mod users;
mod workspaces;


pub use params::{ExtraParams, Filters};

const USERS: &str = "/users";
const WORKSPACES: &str = "/workspaces";
const PROJECTS: &str = "/projects";
const TASKS: &str = "/tasks";
const TAGS: &str = "/tags";
const ORGANIZATIONS: &str = "/organizations";
