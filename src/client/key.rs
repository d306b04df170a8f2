use std::fmt;
use std::time::Duration;

use reqwest::Method;

use super::error::{ApiFailure, SmsCenterError};
use super::http::{Connection, HttpSettings};
use crate::domain::{ApiKey, Password, Username};
use crate::transport;

const KEY_GET_ENDPOINT: &str = "key/get";
const KEY_RESET_ENDPOINT: &str = "key/reset";

#[derive(Debug, Clone, Default)]
/// Builder for [`KeyClient`].
pub struct KeyClientBuilder {
    pub(super) settings: HttpSettings,
}

impl KeyClientBuilder {
    /// Create a builder with the default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the API base URL (default `https://smscenter.gr/api/`).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.settings.base_url = base_url.into();
        self
    }

    /// Set the connect and read timeouts.
    pub fn timeout(mut self, connect: Duration, read: Duration) -> Self {
        self.settings.connect_timeout = connect;
        self.settings.read_timeout = read;
        self
    }

    /// How many times a transient HTTP status is retried (default `0`).
    pub fn max_retries(mut self, max_retries: u32) -> Self {
        self.settings.max_retries = max_retries;
        self
    }

    /// Base of the exponential backoff, in seconds.
    pub fn backoff_factor(mut self, backoff_factor: f64) -> Self {
        self.settings.backoff_factor = backoff_factor;
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.settings.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`KeyClient`]. Fails with [`SmsCenterError::Transport`] on a bad base URL.
    pub fn build(self) -> Result<KeyClient, SmsCenterError> {
        Ok(KeyClient {
            connection: self.settings.connect()?,
        })
    }
}

/// Unauthenticated client for the `key/get` and `key/reset` endpoints.
///
/// These endpoints take the account username and password instead of an API key.
/// Any failure reported by the gateway is a [`SmsCenterError::Credential`].
pub struct KeyClient {
    connection: Connection,
}

impl fmt::Debug for KeyClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyClient")
            .field("base_url", &self.connection.base_url().as_str())
            .field("closed", &self.connection.is_closed())
            .finish()
    }
}

impl KeyClient {
    /// Create a key client with the default settings.
    pub fn new() -> Result<Self, SmsCenterError> {
        KeyClientBuilder::new().build()
    }

    /// Start building a key client with custom settings.
    pub fn builder() -> KeyClientBuilder {
        KeyClientBuilder::new()
    }

    #[cfg(test)]
    pub(crate) fn from_connection(connection: Connection) -> Self {
        Self { connection }
    }

    /// Fetch the API key of the account.
    pub async fn get_key(
        &self,
        username: &Username,
        password: &Password,
    ) -> Result<ApiKey, SmsCenterError> {
        self.request_key(KEY_GET_ENDPOINT, username, password).await
    }

    /// Invalidate the current API key and return a new one.
    pub async fn reset_key(
        &self,
        username: &Username,
        password: &Password,
    ) -> Result<ApiKey, SmsCenterError> {
        self.request_key(KEY_RESET_ENDPOINT, username, password).await
    }

    /// Release the HTTP connection. Closing twice is a no-op.
    pub fn close(&self) {
        self.connection.close();
    }

    pub fn is_closed(&self) -> bool {
        self.connection.is_closed()
    }

    async fn request_key(
        &self,
        endpoint: &str,
        username: &Username,
        password: &Password,
    ) -> Result<ApiKey, SmsCenterError> {
        let mut params = transport::encode_key_params(username, password);
        params.push(("type".to_owned(), "json".to_owned()));

        let object = self.connection.fetch(Method::GET, endpoint, &params).await?;
        if let Some(failure) = transport::failure(&object) {
            tracing::debug!(endpoint, code = ?failure.code, "SMSCenter rejected credentials");
            return Err(SmsCenterError::Credential(failure));
        }

        let parsed = transport::decode_key_response(&object)
            .map_err(|err| SmsCenterError::Parse(Box::new(err)))?;
        let key = parsed.key.ok_or_else(|| {
            SmsCenterError::Credential(ApiFailure {
                message: Some("No API key in response".to_owned()),
                code: None,
                response: Some(object.clone()),
            })
        })?;
        ApiKey::new(key).map_err(SmsCenterError::from)
    }
}
