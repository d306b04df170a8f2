//! Client layer: owns the HTTP connection, adds authentication and detects credential errors.

mod error;
mod http;
mod key;

use std::fmt;
use std::time::Duration;

use reqwest::Method;

pub(crate) use error::FailureKind;
pub use error::{ApiFailure, SmsCenterError};
pub use http::BoxFuture;
use http::{Connection, HttpSettings};
pub use key::{KeyClient, KeyClientBuilder};

use crate::domain::{ApiKey, Password, Username};
use crate::manager::{
    ApiCall, BalanceManager, ContactManager, GroupManager, HistoryManager, HlrManager,
    MobileManager, PurchaseManager, SmsManager, StatusManager, TwoFactorManager, UserManager,
};
use crate::transport::{self, JsonObject};

const API_KEY_REQUIRED: &str = "API key is required";

fn require_api_key(api_key: impl Into<String>) -> Result<ApiKey, SmsCenterError> {
    ApiKey::new(api_key)
        .map_err(|_| SmsCenterError::Credential(ApiFailure::from_message(API_KEY_REQUIRED)))
}

#[derive(Debug, Clone)]
/// Builder for [`SmsCenterClient`].
///
/// Use this when you need to customize the base URL, timeouts, retries or user-agent.
pub struct SmsCenterClientBuilder {
    api_key: String,
    settings: HttpSettings,
}

impl SmsCenterClientBuilder {
    /// Create a builder with the default settings.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            settings: HttpSettings::default(),
        }
    }

    /// Override the API base URL (default `https://smscenter.gr/api/`).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.settings.base_url = base_url.into();
        self
    }

    /// Set the connect and read timeouts (default 5 s and 30 s).
    pub fn timeout(mut self, connect: Duration, read: Duration) -> Self {
        self.settings.connect_timeout = connect;
        self.settings.read_timeout = read;
        self
    }

    /// How many times a transient HTTP status (429, 500, 502, 503, 504) is retried.
    ///
    /// Defaults to `0`.
    pub fn max_retries(mut self, max_retries: u32) -> Self {
        self.settings.max_retries = max_retries;
        self
    }

    /// Base of the exponential backoff, in seconds. Retry `n` waits
    /// `backoff_factor * 2^(n - 1)` seconds, at most 120.
    pub fn backoff_factor(mut self, backoff_factor: f64) -> Self {
        self.settings.backoff_factor = backoff_factor;
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.settings.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`SmsCenterClient`].
    ///
    /// Fails with [`SmsCenterError::Credential`] when the API key is blank.
    pub fn build(self) -> Result<SmsCenterClient, SmsCenterError> {
        let api_key = require_api_key(self.api_key)?;
        Ok(SmsCenterClient {
            api_key,
            connection: self.settings.connect()?,
        })
    }
}

/// High-level SMSCenter client.
///
/// Every request is a `GET` against `https://smscenter.gr/api/<endpoint>` with
/// `type=json` and the API key added to the query. Resource operations live on
/// the managers returned by [`SmsCenterClient::sms`], [`SmsCenterClient::contacts`]
/// and friends.
///
/// The client owns a pooled HTTP connection. [`SmsCenterClient::close`] releases it
/// early; dropping the client releases it too.
pub struct SmsCenterClient {
    api_key: ApiKey,
    connection: Connection,
}

impl fmt::Debug for SmsCenterClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SmsCenterClient")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.connection.base_url().as_str())
            .field("closed", &self.connection.is_closed())
            .finish()
    }
}

impl SmsCenterClient {
    /// Create a client with the default settings.
    ///
    /// Fails with [`SmsCenterError::Credential`] when the API key is blank.
    pub fn new(api_key: impl Into<String>) -> Result<Self, SmsCenterError> {
        SmsCenterClientBuilder::new(api_key).build()
    }

    /// Start building a client with custom settings.
    pub fn builder(api_key: impl Into<String>) -> SmsCenterClientBuilder {
        SmsCenterClientBuilder::new(api_key)
    }

    /// Look up the API key for `username`/`password` and build a client with it.
    ///
    /// Uses the default settings. See [`SmsCenterClient::from_credentials_with`].
    pub async fn from_credentials(
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, SmsCenterError> {
        Self::from_credentials_with(KeyClient::builder(), username, password).await
    }

    /// Look up the API key with the settings of `builder` (base URL, timeouts,
    /// retries, user-agent), then build a client that shares those settings.
    pub async fn from_credentials_with(
        builder: KeyClientBuilder,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, SmsCenterError> {
        let username = Username::new(username)?;
        let password = Password::new(password)?;

        let settings = builder.settings.clone();
        let key_client = builder.build()?;
        let api_key = key_client.get_key(&username, &password).await;
        key_client.close();

        SmsCenterClientBuilder {
            api_key: api_key?.as_str().to_owned(),
            settings,
        }
        .build()
    }

    /// Reset the API key for `username`/`password` and return the new key.
    ///
    /// Clients built with the old key stop working.
    pub async fn reset_api_key(
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<ApiKey, SmsCenterError> {
        Self::reset_api_key_with(KeyClient::builder(), username, password).await
    }

    /// [`SmsCenterClient::reset_api_key`] with the settings of `builder`.
    pub async fn reset_api_key_with(
        builder: KeyClientBuilder,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<ApiKey, SmsCenterError> {
        let username = Username::new(username)?;
        let password = Password::new(password)?;

        let key_client = builder.build()?;
        let api_key = key_client.reset_key(&username, &password).await;
        key_client.close();
        api_key
    }

    #[cfg(test)]
    pub(crate) fn from_connection(api_key: &str, connection: Connection) -> Self {
        Self {
            api_key: ApiKey::new(api_key).unwrap(),
            connection,
        }
    }

    /// Send a raw request and return the decoded JSON object.
    ///
    /// Adds `type=json` (unless `params` already carry a `type`) and the API key.
    /// A response with `status == "0"` and `error == "101"` fails with
    /// [`SmsCenterError::Credential`]; any other `status` is left to the caller.
    pub async fn fetch(
        &self,
        method: Method,
        endpoint: &str,
        mut params: Vec<(String, String)>,
    ) -> Result<JsonObject, SmsCenterError> {
        if !params.iter().any(|(key, _)| key == "type") {
            params.push(("type".to_owned(), "json".to_owned()));
        }
        params.push((ApiKey::FIELD.to_owned(), self.api_key.as_str().to_owned()));

        let object = self.connection.fetch(method, endpoint, &params).await?;
        if let Some(failure) = transport::failure(&object) {
            if transport::is_invalid_key(&failure) {
                tracing::debug!(endpoint, "SMSCenter rejected the API key");
                return Err(SmsCenterError::Credential(failure));
            }
        }
        Ok(object)
    }

    /// Release the HTTP connection. Later calls fail with [`SmsCenterError::Closed`].
    ///
    /// Closing twice is a no-op.
    pub fn close(&self) {
        self.connection.close();
    }

    /// Whether [`SmsCenterClient::close`] has been called.
    pub fn is_closed(&self) -> bool {
        self.connection.is_closed()
    }

    /// Account balance (`me/balance`).
    pub fn balance(&self) -> BalanceManager<'_> {
        BalanceManager::new(self)
    }

    /// Mobile number validation (`mobile/check`).
    pub fn mobile(&self) -> MobileManager<'_> {
        MobileManager::new(self)
    }

    /// Single and bulk SMS sending and cancellation.
    pub fn sms(&self) -> SmsManager<'_> {
        SmsManager::new(self)
    }

    /// Address book contacts (`contact/*`).
    pub fn contacts(&self) -> ContactManager<'_> {
        ContactManager::new(self)
    }

    /// Contact groups and their members (`group/*`).
    pub fn groups(&self) -> GroupManager<'_> {
        GroupManager::new(self)
    }

    /// Sent message history (`history/*`).
    pub fn history(&self) -> HistoryManager<'_> {
        HistoryManager::new(self)
    }

    /// Delivery reports and per-message status.
    pub fn status(&self) -> StatusManager<'_> {
        StatusManager::new(self)
    }

    /// Credit purchase history (`purchase/list`).
    pub fn purchases(&self) -> PurchaseManager<'_> {
        PurchaseManager::new(self)
    }

    /// HLR lookups (`hlr/lookup`).
    pub fn hlr(&self) -> HlrManager<'_> {
        HlrManager::new(self)
    }

    /// One-time verification codes (`2fa/*`).
    pub fn two_factor(&self) -> TwoFactorManager<'_> {
        TwoFactorManager::new(self)
    }

    /// Sub-accounts and their comments (`user/*`).
    pub fn users(&self) -> UserManager<'_> {
        UserManager::new(self)
    }
}

impl ApiCall for SmsCenterClient {
    fn call<'a>(
        &'a self,
        method: Method,
        endpoint: &'a str,
        params: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<JsonObject, SmsCenterError>> {
        Box::pin(self.fetch(method, endpoint, params))
    }
}
