use serde::Deserialize;

use super::wire::{JsonObject, TransportError, WireText, decode, flag, text};
use crate::domain::{
    AuthId, CallbackUrl, MessageText, Mobile, SenderId, TwoFactorCheckResponse, TwoFactorOptions,
    TwoFactorSendResponse,
};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TwoFactorSendJsonResponse {
    #[serde(default)]
    remarks: Option<String>,
    #[serde(default)]
    auth_id: Option<WireText>,
    #[serde(default)]
    auth_status: Option<WireText>,
}

#[derive(Debug, Clone, Deserialize)]
struct TwoFactorCheckJsonResponse {
    #[serde(default)]
    remarks: Option<String>,
    #[serde(default)]
    auth: Option<WireText>,
}

pub fn encode_two_factor_send_params(
    to: &Mobile,
    options: &TwoFactorOptions,
) -> Vec<(String, String)> {
    let mut params = vec![("to".to_owned(), to.raw().to_owned())];
    if let Some(text) = options.text.as_ref() {
        params.push((MessageText::FIELD.to_owned(), text.as_str().to_owned()));
    }
    if let Some(sender) = options.sender.as_ref() {
        params.push((SenderId::FIELD.to_owned(), sender.as_str().to_owned()));
    }
    if let Some(wait) = options.wait {
        params.push(("wait".to_owned(), wait.to_string()));
    }
    if let Some(callback) = options.callback.as_ref() {
        params.push((CallbackUrl::FIELD.to_owned(), callback.as_str().to_owned()));
    }
    if let Some(ucs) = options.ucs {
        params.push(("ucs".to_owned(), flag(ucs)));
    }
    params
}

pub fn encode_two_factor_check_params(auth_id: &AuthId, code: &str) -> Vec<(String, String)> {
    vec![
        (AuthId::FIELD.to_owned(), auth_id.as_str().to_owned()),
        ("code".to_owned(), code.to_owned()),
    ]
}

pub fn decode_two_factor_send_response(
    object: &JsonObject,
) -> Result<TwoFactorSendResponse, TransportError> {
    let parsed: TwoFactorSendJsonResponse = decode(object)?;
    Ok(TwoFactorSendResponse {
        remarks: parsed.remarks,
        auth_id: text(parsed.auth_id),
        auth_status: text(parsed.auth_status),
    })
}

pub fn decode_two_factor_check_response(
    object: &JsonObject,
) -> Result<TwoFactorCheckResponse, TransportError> {
    let parsed: TwoFactorCheckJsonResponse = decode(object)?;
    Ok(TwoFactorCheckResponse {
        remarks: parsed.remarks,
        auth: text(parsed.auth),
    })
}
