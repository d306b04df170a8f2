use super::{ApiCall, request};
use crate::client::{FailureKind, SmsCenterError};
use crate::domain::BalanceResponse;
use crate::transport;

/// Account balance (`me/balance`).
pub struct BalanceManager<'a> {
    api: &'a dyn ApiCall,
}

impl<'a> BalanceManager<'a> {
    /// Wrap any [`ApiCall`], usually an [`crate::SmsCenterClient`].
    pub fn new(api: &'a dyn ApiCall) -> Self {
        Self { api }
    }

    /// Remaining balance of the account.
    pub async fn check(&self) -> Result<BalanceResponse, SmsCenterError> {
        request(
            self.api,
            "me/balance",
            Vec::new(),
            FailureKind::Api,
            transport::decode_balance_response,
        )
        .await
    }
}
