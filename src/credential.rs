//! Credentials used to authenticate against the Asana API.

use std::fmt;
use std::path::Path;

use crate::Error;

const ENV_VAR: &str = "ASANA_TOKEN";

/// An Asana credential.
///
/// API keys are sent as the HTTP basic-auth username with an empty password.
/// OAuth tokens are accepted so callers can carry them around, but every
/// request made with one fails with [`Error::Unsupported`].
#[derive(Clone, PartialEq, Eq)]
pub enum Credential {
    /// A personal API key or access token used with basic auth.
    ApiKey(String),
    /// An OAuth access token.
    OAuth(String),
}

impl Credential {
    /// Create an API key credential.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingToken`] if the token is empty or only whitespace.
    pub fn api_key(token: &str) -> Result<Self, Error> {
        non_blank(token).map(|t| Credential::ApiKey(t.to_string()))
    }

    /// Create an OAuth credential.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingToken`] if the token is empty or only whitespace.
    pub fn oauth(token: &str) -> Result<Self, Error> {
        non_blank(token).map(|t| Credential::OAuth(t.to_string()))
    }

    /// Read an API key from a file, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read, or
    /// [`Error::MissingToken`] if it holds no token.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, Error> {
        let contents = std::fs::read_to_string(path)?;
        Self::api_key(contents.trim())
    }

    /// Read an API key from the `ASANA_TOKEN` environment variable.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingToken`] if the variable is unset or empty.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_env_var(ENV_VAR)
    }

    pub(crate) fn from_env_var(name: &str) -> Result<Self, Error> {
        let token = std::env::var(name).map_err(|_| Error::MissingToken)?;
        Self::api_key(&token)
    }

    /// The raw token string.
    pub fn token(&self) -> &str {
        match self {
            Credential::ApiKey(token) | Credential::OAuth(token) => token,
        }
    }
}

// Never print the token itself.
impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Credential::ApiKey(_) => f.write_str("ApiKey(***)"),
            Credential::OAuth(_) => f.write_str("OAuth(***)"),
        }
    }
}

fn non_blank(token: &str) -> Result<&str, Error> {
    let token = token.trim();
    if token.is_empty() {
        Err(Error::MissingToken)
    } else {
        Ok(token)
    }
}
