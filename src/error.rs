//! Error types for the Asana client.

use thiserror::Error;

/// Errors that can occur when using the Asana client.
#[derive(Debug, Error)]
pub enum Error {
    /// The credential is missing, empty, or only whitespace.
    #[error("Asana credential is missing or empty")]
    MissingToken,

    /// The credential file could not be read.
    #[error("failed to read credential: {0}")]
    Io(#[from] std::io::Error),

    /// An HTTP request failed before a response body was received.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Failed to parse a response from the API.
    #[error("failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),

    /// The API returned one or more errors.
    ///
    /// When several errors are reported, their messages are joined with
    /// newlines in the order the API returned them.
    #[error("API error: {message}")]
    Api {
        /// The error message from the API.
        message: String,
    },

    /// A resource was not found.
    #[error("resource not found: {0}")]
    NotFound(String),

    /// The requested operation is not available for this credential.
    #[error("unsupported: {0}")]
    Unsupported(&'static str),
}

impl Error {
    /// Build the error for a remote-reported failure, keyed on HTTP status.
    pub(crate) fn remote(status: reqwest::StatusCode, message: String) -> Self {
        if status == reqwest::StatusCode::NOT_FOUND {
            Error::NotFound(message)
        } else {
            Error::Api { message }
        }
    }
}
