use super::{ApiCall, request};
use crate::client::{FailureKind, SmsCenterError};
use crate::domain::{Mobile, MobileCheckResponse};
use crate::transport;

/// Number validation and pricing (`mobile/check`).
pub struct MobileManager<'a> {
    api: &'a dyn ApiCall,
}

impl<'a> MobileManager<'a> {
    /// Wrap any [`ApiCall`], usually an [`crate::SmsCenterClient`].
    pub fn new(api: &'a dyn ApiCall) -> Self {
        Self { api }
    }

    /// Country, network and per-message cost for `mobile`.
    ///
    /// Errors:
    /// - [`SmsCenterError::Mobile`] when SMSCenter rejects the number.
    pub async fn check(&self, mobile: &Mobile) -> Result<MobileCheckResponse, SmsCenterError> {
        request(
            self.api,
            "mobile/check",
            transport::encode_mobile_params(mobile),
            FailureKind::Mobile,
            transport::decode_mobile_check_response,
        )
        .await
    }
}
