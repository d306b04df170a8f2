use super::{ApiCall, request};
use crate::client::{FailureKind, SmsCenterError};
use crate::domain::{BulkSms, BulkSmsResponse, CancelSmsResponse, SendSms, SendSmsResponse, SmsId};
use crate::transport;

/// Sending and cancelling messages (`sms/*`).
pub struct SmsManager<'a> {
    api: &'a dyn ApiCall,
}

impl<'a> SmsManager<'a> {
    /// Wrap any [`ApiCall`], usually an [`crate::SmsCenterClient`].
    pub fn new(api: &'a dyn ApiCall) -> Self {
        Self { api }
    }

    /// Send one message.
    ///
    /// Errors:
    /// - [`SmsCenterError::Sms`] when SMSCenter refuses the message,
    /// - [`SmsCenterError::Credential`] for an invalid API key.
    pub async fn send(&self, message: &SendSms) -> Result<SendSmsResponse, SmsCenterError> {
        request(
            self.api,
            "sms/send",
            transport::encode_send_sms_params(message),
            FailureKind::Sms,
            transport::decode_send_sms_response,
        )
        .await
    }

    /// Send the same message to several recipients in one call.
    pub async fn bulk(&self, messages: &BulkSms) -> Result<BulkSmsResponse, SmsCenterError> {
        request(
            self.api,
            "sms/bulk",
            transport::encode_bulk_sms_params(messages),
            FailureKind::Sms,
            transport::decode_bulk_sms_response,
        )
        .await
    }

    /// Cancel a scheduled message.
    pub async fn cancel(&self, sms_id: &SmsId) -> Result<CancelSmsResponse, SmsCenterError> {
        request(
            self.api,
            "sms/cancel",
            transport::encode_cancel_sms_params(sms_id),
            FailureKind::Sms,
            transport::decode_cancel_sms_response,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use chrono::{FixedOffset, TimeZone};
    use serde_json::json;

    use super::super::testing::{FakeApi, error_response, pairs};
    use super::*;
    use crate::domain::{BulkOptions, MessageText, Mobile, SendOptions, SenderId, Timestamp};

    fn message(options: SendOptions) -> SendSms {
        SendSms::new(
            Mobile::new("6912345678").unwrap(),
            MessageText::new("Test message").unwrap(),
            SenderId::new("SMSCenter").unwrap(),
            options,
        )
    }

    #[tokio::test]
    async fn send_posts_message_and_returns_id() {
        let api = FakeApi::returning(json!({
            "status": "1",
            "remarks": "Success",
            "error": "0",
            "id": "987",
            "cost": "1",
            "balance": "99.00"
        }));

        let response = SmsManager::new(&api)
            .send(&message(SendOptions::default()))
            .await
            .unwrap();
        assert_eq!(response.id.as_deref(), Some("987"));
        assert_eq!(response.balance.as_deref(), Some("99.00"));

        let (endpoint, params) = api.last_call();
        assert_eq!(endpoint, "sms/send");
        assert_eq!(
            params,
            pairs(&[
                ("to", "6912345678"),
                ("text", "Test message"),
                ("from", "SMSCenter"),
            ])
        );
    }

    #[tokio::test]
    async fn send_normalizes_flags_and_aware_timestamp() {
        let api = FakeApi::returning(json!({"status": "1", "id": "1"}));
        let at = FixedOffset::east_opt(2 * 3600)
            .unwrap()
            .with_ymd_and_hms(2024, 1, 1, 2, 0, 0)
            .unwrap();

        SmsManager::new(&api)
            .send(&message(SendOptions {
                ucs: Some(true),
                flash: Some(false),
                timestamp: Some(Timestamp::from(at)),
                callback: None,
            }))
            .await
            .unwrap();

        let (_, params) = api.last_call();
        assert!(params.contains(&("ucs".to_owned(), "true".to_owned())));
        assert!(params.contains(&("flash".to_owned(), "false".to_owned())));
        assert!(params.contains(&("timestamp".to_owned(), "1704067200".to_owned())));
    }

    #[tokio::test]
    async fn send_failure_is_sms_error() {
        let api = FakeApi::returning(error_response("123", "error message"));
        let err = SmsManager::new(&api)
            .send(&message(SendOptions::default()))
            .await
            .unwrap_err();
        match err {
            SmsCenterError::Sms(failure) => {
                assert_eq!(failure.code.as_deref(), Some("123"));
                assert_eq!(failure.message.as_deref(), Some("error message"));
                assert!(failure.response.is_some());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn bulk_joins_recipients() {
        let api = FakeApi::returning(json!({"status": "1", "id": ["11", "12"]}));
        let messages = BulkSms::new(
            vec![
                Mobile::new("306912345678").unwrap(),
                Mobile::new("306912345679").unwrap(),
            ],
            MessageText::new("Bulk test").unwrap(),
            SenderId::new("SMSCenter").unwrap(),
            BulkOptions {
                flash: Some(true),
                ..Default::default()
            },
        )
        .unwrap();

        let response = SmsManager::new(&api).bulk(&messages).await.unwrap();
        assert_eq!(response.ids, vec!["11", "12"]);

        let (endpoint, params) = api.last_call();
        assert_eq!(endpoint, "sms/bulk");
        assert_eq!(
            params,
            pairs(&[
                ("to", "306912345678,306912345679"),
                ("text", "Bulk test"),
                ("from", "SMSCenter"),
                ("flash", "true"),
            ])
        );
    }

    #[tokio::test]
    async fn cancel_sends_sms_id() {
        let api = FakeApi::returning(json!({"status": "1", "smsId": "123"}));
        let response = SmsManager::new(&api)
            .cancel(&SmsId::new("123").unwrap())
            .await
            .unwrap();
        assert_eq!(response.sms_id.as_deref(), Some("123"));

        let (endpoint, params) = api.last_call();
        assert_eq!(endpoint, "sms/cancel");
        assert_eq!(params, pairs(&[("smsId", "123")]));
    }

    #[tokio::test]
    async fn cancel_failure_is_sms_error() {
        let api = FakeApi::returning(error_response("31", "Cannot cancel"));
        let err = SmsManager::new(&api)
            .cancel(&SmsId::new("123").unwrap())
            .await
            .unwrap_err();
        assert!(matches!(err, SmsCenterError::Sms(_)));
    }
}
