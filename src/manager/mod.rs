//! Resource managers: one facade per API domain, borrowing the client.

mod balance;
mod contact;
mod group;
mod history;
mod hlr;
mod mobile;
mod purchase;
mod sms;
mod status;
mod two_factor;
mod user;

use reqwest::Method;

pub use balance::BalanceManager;
pub use contact::ContactManager;
pub use group::GroupManager;
pub use history::HistoryManager;
pub use hlr::HlrManager;
pub use mobile::MobileManager;
pub use purchase::PurchaseManager;
pub use sms::SmsManager;
pub use status::StatusManager;
pub use two_factor::TwoFactorManager;
pub use user::UserManager;

use crate::client::{BoxFuture, FailureKind, SmsCenterError};
use crate::transport::{self, JsonObject, TransportError};

/// The single operation managers need from a client.
///
/// [`SmsCenterClient`](crate::SmsCenterClient) implements it by delegating to
/// [`SmsCenterClient::fetch`](crate::SmsCenterClient::fetch).
pub trait ApiCall: Send + Sync {
    fn call<'a>(
        &'a self,
        method: Method,
        endpoint: &'a str,
        params: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<JsonObject, SmsCenterError>>;
}

/// `GET endpoint`, then map a `status == "0"` response to `kind` and decode the rest.
async fn request<T>(
    api: &dyn ApiCall,
    endpoint: &str,
    params: Vec<(String, String)>,
    kind: FailureKind,
    decode: fn(&JsonObject) -> Result<T, TransportError>,
) -> Result<T, SmsCenterError> {
    let object = api.call(Method::GET, endpoint, params).await?;
    if let Some(failure) = transport::failure(&object) {
        tracing::debug!(endpoint, code = ?failure.code, "SMSCenter reported a failure");
        return Err(kind.into_error(failure));
    }
    decode(&object).map_err(|err| SmsCenterError::Parse(Box::new(err)))
}
