//! HTTP client for the Asana API.

use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::api::Filters;
use crate::types::{join_messages, ApiError, Envelope};
use crate::{Credential, Error};

const BASE_URL: &str = "https://app.asana.com/api/1.0";

/// Client for interacting with the Asana API.
///
/// Cloning is cheap; clones share the underlying HTTP connection handle.
#[derive(Debug, Clone)]
pub struct AsanaClient {
    http: reqwest::Client,
    base_url: String,
    credential: Credential,
}

/// The status and full body of a response, before envelope decoding.
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The response body.
    pub body: String,
}

impl AsanaClient {
    /// Create a new client from the `ASANA_TOKEN` environment variable.
    ///
    /// # Errors
    ///
    /// Returns an error if `ASANA_TOKEN` is not set or is empty.
    pub fn from_env() -> Result<Self, Error> {
        Self::with_credential(Credential::from_env()?)
    }

    /// Create a new client with the given API key.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingToken`] if the key is blank, or an HTTP error if
    /// the underlying client cannot be initialized. No request is sent.
    pub fn new(token: &str) -> Result<Self, Error> {
        Self::with_credential(Credential::api_key(token)?)
    }

    /// Create a new client with an explicit credential.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingToken`] if the credential is blank, or an HTTP
    /// error if the underlying client cannot be initialized.
    pub fn with_credential(credential: Credential) -> Result<Self, Error> {
        if credential.token().trim().is_empty() {
            return Err(Error::MissingToken);
        }

        let http = reqwest::Client::builder().build().map_err(Error::Http)?;

        Ok(Self {
            http,
            base_url: BASE_URL.to_string(),
            credential,
        })
    }

    /// Returns the base URL for API requests.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Set a custom base URL (primarily for testing).
    #[doc(hidden)]
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// The credential attached to every request.
    pub fn credential(&self) -> &Credential {
        &self.credential
    }

    /// Replace the credential used for subsequent requests.
    ///
    /// A blank credential is accepted here but every later request fails with
    /// [`Error::MissingToken`] without being sent.
    pub fn set_credential(&mut self, credential: Credential) {
        self.credential = credential;
    }

    /// Build a request without sending it.
    ///
    /// The URL is the base URL followed by `path`. Non-empty `filters` are
    /// URL-encoded into the query string in key order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingToken`] for a blank API key,
    /// [`Error::Unsupported`] for OAuth credentials and [`Error::Http`] if
    /// the request cannot be constructed.
    pub fn build_request(
        &self,
        method: Method,
        path: &str,
        filters: &Filters,
    ) -> Result<reqwest::Request, Error> {
        let url = format!("{}{}", self.base_url, path);

        let mut builder = self.http.request(method, &url);
        if !filters.is_empty() {
            builder = builder.query(filters);
        }

        let builder = match &self.credential {
            Credential::ApiKey(token) if token.trim().is_empty() => {
                return Err(Error::MissingToken)
            }
            Credential::ApiKey(token) => builder.basic_auth(token, Some("")),
            Credential::OAuth(_) => return Err(Error::Unsupported("OAuth not implemented")),
        };

        builder.build().map_err(Error::Http)
    }

    /// Send a single request and read the whole response body.
    ///
    /// Any status code is returned as-is; only transport failures are errors.
    pub async fn send(
        &self,
        method: Method,
        path: &str,
        filters: &Filters,
    ) -> Result<RawResponse, Error> {
        let request = self.build_request(method, path, filters)?;

        debug!(
            method = %request.method(),
            path,
            filters = filters.len(),
            "sending Asana request"
        );

        let response = self.http.execute(request).await?;
        let status = response.status();
        let body = response.text().await?;

        debug!(status = status.as_u16(), bytes = body.len(), "received Asana response");

        Ok(RawResponse { status, body })
    }

    /// Make a GET request to the API and unwrap the response envelope.
    ///
    /// The `path` should be the API endpoint path without the base URL (e.g., "/users/me").
    /// `T` is either a single entity or a `Vec` of entities.
    pub async fn get<T>(&self, path: &str, filters: &Filters) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        let response = self.send(Method::GET, path, filters).await?;
        decode_response(response.status, &response.body)
    }
}

/// Decode a `{ data, errors }` envelope, converting reported errors.
pub(crate) fn decode_response<T>(status: StatusCode, body: &str) -> Result<T, Error>
where
    T: DeserializeOwned,
{
    let envelope: Envelope<T> = match serde_json::from_str(body) {
        Ok(envelope) => envelope,
        Err(e) => {
            // The data may not match T while the errors still parse.
            if let Some(message) = extract_error_message(body) {
                return Err(Error::remote(status, message));
            }
            if !status.is_success() {
                return Err(status_error(status));
            }
            return Err(Error::Parse(e));
        }
    };

    if let Some(message) = envelope.error_message() {
        return Err(Error::remote(status, message));
    }
    if !status.is_success() {
        return Err(status_error(status));
    }

    envelope.into_data()
}

/// Fallback error for a failed status without any reported messages.
fn status_error(status: StatusCode) -> Error {
    if status == StatusCode::NOT_FOUND {
        return Error::NotFound("resource not found".to_string());
    }
    Error::Api {
        message: format!(
            "HTTP {} {}",
            status.as_u16(),
            status.canonical_reason().unwrap_or("")
        ),
    }
}

/// Extract the joined error messages from an Asana error response.
fn extract_error_message(body: &str) -> Option<String> {
    #[derive(serde::Deserialize)]
    struct ErrorResponse {
        errors: Vec<ApiError>,
    }

    serde_json::from_str::<ErrorResponse>(body)
        .ok()
        .and_then(|r| join_messages(&r.errors))
}
