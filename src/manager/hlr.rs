use super::{ApiCall, request};
use crate::client::{FailureKind, SmsCenterError};
use crate::domain::{HlrLookupResponse, Mobile};
use crate::transport;

/// Home Location Register lookups (`hlr/lookup`).
pub struct HlrManager<'a> {
    api: &'a dyn ApiCall,
}

impl<'a> HlrManager<'a> {
    /// Wrap any [`ApiCall`], usually an [`crate::SmsCenterClient`].
    pub fn new(api: &'a dyn ApiCall) -> Self {
        Self { api }
    }

    /// Query the live network status of `mobile`.
    pub async fn lookup(&self, mobile: &Mobile) -> Result<HlrLookupResponse, SmsCenterError> {
        request(
            self.api,
            "hlr/lookup",
            transport::encode_mobile_params(mobile),
            FailureKind::Hlr,
            transport::decode_hlr_lookup_response,
        )
        .await
    }
}
