use super::{ApiCall, request};
use crate::client::{FailureKind, SmsCenterError};
use crate::domain::{
    AuthId, Mobile, TwoFactorCheckResponse, TwoFactorOptions, TwoFactorSendResponse,
    ValidationError,
};
use crate::transport;

/// One-time verification codes (`2fa/*`).
pub struct TwoFactorManager<'a> {
    api: &'a dyn ApiCall,
}

impl<'a> TwoFactorManager<'a> {
    /// Wrap any [`ApiCall`], usually an [`crate::SmsCenterClient`].
    pub fn new(api: &'a dyn ApiCall) -> Self {
        Self { api }
    }

    /// Send a code to `to`. Keep the returned `auth_id` for [`TwoFactorManager::check`].
    pub async fn send(
        &self,
        to: &Mobile,
        options: &TwoFactorOptions,
    ) -> Result<TwoFactorSendResponse, SmsCenterError> {
        request(
            self.api,
            "2fa/send",
            transport::encode_two_factor_send_params(to, options),
            FailureKind::TwoFactor,
            transport::decode_two_factor_send_response,
        )
        .await
    }

    /// Verify the code the user typed in.
    pub async fn check(
        &self,
        auth_id: &AuthId,
        code: &str,
    ) -> Result<TwoFactorCheckResponse, SmsCenterError> {
        let code = code.trim();
        if code.is_empty() {
            return Err(ValidationError::Empty { field: "code" }.into());
        }
        request(
            self.api,
            "2fa/check",
            transport::encode_two_factor_check_params(auth_id, code),
            FailureKind::TwoFactor,
            transport::decode_two_factor_check_response,
        )
        .await
    }
}
