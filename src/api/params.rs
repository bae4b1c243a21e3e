//! Query parameters attached to API requests.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Optional output controls shared by every endpoint.
///
/// Maps onto Asana's `opt_pretty`, `opt_fields` and `opt_expand` query
/// parameters. Empty lists and a `false` pretty flag add nothing to the
/// request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtraParams {
    /// Ask the API to pretty-print its JSON output.
    #[serde(default, rename = "prettyPrint")]
    pub pretty: bool,
    /// Fields to include in the response, e.g. `["name", "assignee.name"]`.
    #[serde(default, rename = "requiredFields")]
    pub fields: Vec<String>,
    /// Nested objects to expand in full.
    #[serde(default, rename = "expandFields")]
    pub expand: Vec<String>,
}

impl ExtraParams {
    /// Empty parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request pretty-printed output.
    pub fn pretty(mut self) -> Self {
        self.pretty = true;
        self
    }

    /// Add a single field to `opt_fields`.
    pub fn field(mut self, field: impl Into<String>) -> Self {
        self.fields.push(field.into());
        self
    }

    /// Add several fields to `opt_fields`.
    pub fn fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields.extend(fields.into_iter().map(Into::into));
        self
    }

    /// Add nested objects to `opt_expand`.
    pub fn expand<I, S>(mut self, expand: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.expand.extend(expand.into_iter().map(Into::into));
        self
    }
}

/// Query-parameter mapping sent with a request.
///
/// Keys are kept sorted so the encoded query string is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Filters(BTreeMap<String, String>);

impl Filters {
    /// An empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter, replacing any previous value for `key`.
    pub fn with(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.insert(key, value);
        self
    }

    /// Add a parameter, replacing any previous value for `key`.
    pub fn insert(&mut self, key: impl Into<String>, value: impl ToString) {
        self.0.insert(key.into(), value.to_string());
    }

    /// Merge caller-supplied output controls into the mapping.
    pub fn with_extra(mut self, extra: &ExtraParams) -> Self {
        if extra.pretty {
            self.insert("opt_pretty", true);
        }
        if !extra.fields.is_empty() {
            self.insert("opt_fields", extra.fields.join(","));
        }
        if !extra.expand.is_empty() {
            self.insert("opt_expand", extra.expand.join(","));
        }
        self
    }

    /// Look up a parameter value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate parameters in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl From<&ExtraParams> for Filters {
    fn from(extra: &ExtraParams) -> Self {
        Filters::new().with_extra(extra)
    }
}
