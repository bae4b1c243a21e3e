//! An authenticated session with a cached current user.

use tracing::info;

use crate::api::ExtraParams;
use crate::client::AsanaClient;
use crate::types::User;
use crate::{Credential, Error};

/// A client whose credential has been verified against the API.
///
/// Opening a connection fetches the current user once and keeps it. Holds no
/// network resources beyond the client's shared HTTP handle.
#[derive(Debug, Clone)]
pub struct Connection {
    client: AsanaClient,
    connected: bool,
    me: User,
}

impl Connection {
    /// Open a connection with the given credential.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::MissingToken`] for a blank credential without
    /// sending anything, or with any error from fetching the current user.
    pub async fn open(credential: Credential) -> Result<Self, Error> {
        let client = AsanaClient::with_credential(credential)?;
        Self::with_client(client).await
    }

    /// Open a connection over an existing client.
    pub async fn with_client(client: AsanaClient) -> Result<Self, Error> {
        let me = client.me(&ExtraParams::default()).await?;
        info!(user_id = me.id, user = %me.name, "connected to Asana");

        Ok(Self {
            client,
            connected: true,
            me,
        })
    }

    /// Whether the credential was verified against the API.
    ///
    /// Always true for a connection returned by [`Connection::open`] or
    /// [`Connection::with_client`]; a failed open returns an error instead.
    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// The user fetched when the connection was opened.
    pub fn current_user(&self) -> &User {
        &self.me
    }

    /// The client used for requests.
    pub fn client(&self) -> &AsanaClient {
        &self.client
    }

    /// Consume the connection and return its client.
    pub fn into_client(self) -> AsanaClient {
        self.client
    }
}
