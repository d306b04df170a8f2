use super::{ApiCall, request};
use crate::client::{FailureKind, SmsCenterError};
use crate::domain::PurchaseListResponse;
use crate::transport;

/// Credit purchase history (`purchase/list`).
pub struct PurchaseManager<'a> {
    api: &'a dyn ApiCall,
}

impl<'a> PurchaseManager<'a> {
    /// Wrap any [`ApiCall`], usually an [`crate::SmsCenterClient`].
    pub fn new(api: &'a dyn ApiCall) -> Self {
        Self { api }
    }

    /// Credit purchases made on the account.
    pub async fn list(&self) -> Result<PurchaseListResponse, SmsCenterError> {
        request(
            self.api,
            "purchase/list",
            Vec::new(),
            FailureKind::Api,
            transport::decode_purchase_list_response,
        )
        .await
    }
}
