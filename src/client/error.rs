use std::error::Error as StdError;
use std::fmt;

use crate::domain::ValidationError;
use crate::transport::JsonObject;

#[derive(Debug, Clone, PartialEq, Default)]
/// Failure reported by SMSCenter in the response body (`status == "0"`).
pub struct ApiFailure {
    /// Human-readable `remarks` text, if the gateway sent one.
    pub message: Option<String>,
    /// The `error` code, compared as text.
    pub code: Option<String>,
    /// The complete decoded response object.
    pub response: Option<JsonObject>,
}

impl ApiFailure {
    /// A failure raised locally, without a gateway response.
    pub fn from_message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            code: None,
            response: None,
        }
    }
}

impl fmt::Display for ApiFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.code, &self.message) {
            (Some(code), Some(message)) => write!(f, "[{code}] {message}"),
            (Some(code), None) => write!(f, "[{code}]"),
            (None, Some(message)) => f.write_str(message),
            (None, None) => f.write_str("unknown error"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`SmsCenterClient`](crate::SmsCenterClient) and its managers.
///
/// Gateway-reported failures are split by resource domain; all of them carry an
/// [`ApiFailure`]. HTTP, parse and validation failures have their own variants.
pub enum SmsCenterError {
    /// Missing, invalid or expired API key, or rejected username/password.
    #[error("credential error: {0}")]
    Credential(ApiFailure),

    #[error("SMS error: {0}")]
    Sms(ApiFailure),

    #[error("contact error: {0}")]
    Contact(ApiFailure),

    #[error("mobile error: {0}")]
    Mobile(ApiFailure),

    #[error("group error: {0}")]
    Group(ApiFailure),

    #[error("HLR error: {0}")]
    Hlr(ApiFailure),

    #[error("two-factor error: {0}")]
    TwoFactor(ApiFailure),

    #[error("user error: {0}")]
    User(ApiFailure),

    #[error("user comment error: {0}")]
    UserComment(ApiFailure),

    /// Failure from an endpoint without a dedicated error kind.
    #[error("API error: {0}")]
    Api(ApiFailure),

    /// One of the domain constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// Non-successful HTTP status code, after retries were exhausted.
    #[error("unexpected HTTP status: {status}")]
    HttpStatus { status: u16, body: Option<String> },

    /// Response body could not be parsed as the expected format.
    #[error("parse error: {0}")]
    Parse(#[source] Box<dyn StdError + Send + Sync>),

    /// The client was closed and can no longer send requests.
    #[error("client is closed")]
    Closed,
}

impl SmsCenterError {
    /// The gateway failure, for variants that carry one.
    pub fn api_failure(&self) -> Option<&ApiFailure> {
        match self {
            Self::Credential(failure)
            | Self::Sms(failure)
            | Self::Contact(failure)
            | Self::Mobile(failure)
            | Self::Group(failure)
            | Self::Hlr(failure)
            | Self::TwoFactor(failure)
            | Self::User(failure)
            | Self::UserComment(failure)
            | Self::Api(failure) => Some(failure),
            _ => None,
        }
    }
}

/// Selects the error variant a manager raises for a gateway failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FailureKind {
    Credential,
    Sms,
    Contact,
    Mobile,
    Group,
    Hlr,
    TwoFactor,
    User,
    UserComment,
    Api,
}

impl FailureKind {
    pub(crate) fn into_error(self, failure: ApiFailure) -> SmsCenterError {
        match self {
            Self::Credential => SmsCenterError::Credential(failure),
            Self::Sms => SmsCenterError::Sms(failure),
            Self::Contact => SmsCenterError::Contact(failure),
            Self::Mobile => SmsCenterError::Mobile(failure),
            Self::Group => SmsCenterError::Group(failure),
            Self::Hlr => SmsCenterError::Hlr(failure),
            Self::TwoFactor => SmsCenterError::TwoFactor(failure),
            Self::User => SmsCenterError::User(failure),
            Self::UserComment => SmsCenterError::UserComment(failure),
            Self::Api => SmsCenterError::Api(failure),
        }
    }
}
