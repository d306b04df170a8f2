use super::{ApiCall, request};
use crate::client::{FailureKind, SmsCenterError};
use crate::domain::{DeliveryReportsResponse, SmsId, SmsStatusResponse};
use crate::transport;

/// Delivery reports (`status/*`).
pub struct StatusManager<'a> {
    api: &'a dyn ApiCall,
}

impl<'a> StatusManager<'a> {
    /// Wrap any [`ApiCall`], usually an [`crate::SmsCenterClient`].
    pub fn new(api: &'a dyn ApiCall) -> Self {
        Self { api }
    }

    /// Pending delivery reports, oldest first.
    pub async fn get(&self) -> Result<DeliveryReportsResponse, SmsCenterError> {
        request(
            self.api,
            "status/get",
            Vec::new(),
            FailureKind::Api,
            transport::decode_delivery_reports_response,
        )
        .await
    }

    /// Delivery report of one message.
    pub async fn sms(&self, sms_id: &SmsId) -> Result<SmsStatusResponse, SmsCenterError> {
        request(
            self.api,
            "status/sms",
            transport::encode_sms_status_params(sms_id),
            FailureKind::Api,
            transport::decode_sms_status_response,
        )
        .await
    }
}
