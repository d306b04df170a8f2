use serde::Deserialize;

use super::wire::{
    JsonObject, TransportError, WireList, WireText, decode, flag, lenient_list, text,
};
use crate::domain::{
    BulkSms, BulkSmsResponse, BulkSmsResult, CallbackUrl, CancelSmsResponse, MessageText,
    Mobile, SendSms, SendSmsResponse, SenderId, SmsId, Timestamp,
};

#[derive(Debug, Clone, Deserialize)]
struct SendSmsJsonResponse {
    #[serde(default)]
    remarks: Option<String>,
    #[serde(default)]
    id: Option<WireText>,
    #[serde(default)]
    cost: Option<WireText>,
    #[serde(default)]
    balance: Option<WireText>,
    #[serde(default)]
    mcc: Option<WireText>,
    #[serde(default)]
    mnc: Option<WireText>,
}

#[derive(Debug, Clone, Deserialize)]
struct BulkSmsJsonResponse {
    #[serde(default)]
    remarks: Option<String>,
    #[serde(default)]
    id: Option<WireList>,
    #[serde(default, deserialize_with = "lenient_list")]
    sms: Vec<BulkSmsJsonResult>,
    #[serde(default)]
    balance: Option<WireText>,
    #[serde(default)]
    cost: Option<WireText>,
    #[serde(default)]
    accepted: Option<WireText>,
    #[serde(default)]
    rejected: Option<WireText>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BulkSmsJsonResult {
    #[serde(default)]
    id: Option<WireText>,
    #[serde(default)]
    sms_id: Option<WireText>,
    #[serde(default)]
    msisdn: Option<WireText>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CancelSmsJsonResponse {
    #[serde(default)]
    remarks: Option<String>,
    #[serde(default)]
    sms_id: Option<WireText>,
}

fn push_message(
    params: &mut Vec<(String, String)>,
    to: String,
    text: &MessageText,
    sender: &SenderId,
) {
    params.push(("to".to_owned(), to));
    params.push((MessageText::FIELD.to_owned(), text.as_str().to_owned()));
    params.push((SenderId::FIELD.to_owned(), sender.as_str().to_owned()));
}

fn push_delivery(
    params: &mut Vec<(String, String)>,
    ucs: Option<bool>,
    flash: Option<bool>,
    timestamp: Option<Timestamp>,
) {
    if let Some(ucs) = ucs {
        params.push(("ucs".to_owned(), flag(ucs)));
    }
    if let Some(flash) = flash {
        params.push(("flash".to_owned(), flag(flash)));
    }
    if let Some(timestamp) = timestamp {
        params.push((Timestamp::FIELD.to_owned(), timestamp.to_epoch().to_string()));
    }
}

pub fn encode_send_sms_params(request: &SendSms) -> Vec<(String, String)> {
    let mut params = Vec::new();
    push_message(
        &mut params,
        request.to().raw().to_owned(),
        request.text(),
        request.sender(),
    );

    let options = request.options();
    push_delivery(&mut params, options.ucs, options.flash, options.timestamp);
    if let Some(callback) = options.callback.as_ref() {
        params.push((CallbackUrl::FIELD.to_owned(), callback.as_str().to_owned()));
    }
    params
}

pub fn encode_bulk_sms_params(request: &BulkSms) -> Vec<(String, String)> {
    let to = request
        .recipients()
        .iter()
        .map(Mobile::raw)
        .collect::<Vec<_>>()
        .join(",");

    let mut params = Vec::new();
    push_message(&mut params, to, request.text(), request.sender());

    let options = request.options();
    push_delivery(&mut params, options.ucs, options.flash, options.timestamp);
    params
}

pub fn encode_cancel_sms_params(sms_id: &SmsId) -> Vec<(String, String)> {
    vec![(SmsId::FIELD.to_owned(), sms_id.as_str().to_owned())]
}

pub fn decode_send_sms_response(object: &JsonObject) -> Result<SendSmsResponse, TransportError> {
    let parsed: SendSmsJsonResponse = decode(object)?;
    Ok(SendSmsResponse {
        remarks: parsed.remarks,
        id: text(parsed.id),
        cost: text(parsed.cost),
        balance: text(parsed.balance),
        mcc: text(parsed.mcc),
        mnc: text(parsed.mnc),
    })
}

pub fn decode_bulk_sms_response(object: &JsonObject) -> Result<BulkSmsResponse, TransportError> {
    let parsed: BulkSmsJsonResponse = decode(object)?;
    Ok(BulkSmsResponse {
        remarks: parsed.remarks,
        ids: parsed.id.map(WireList::into_strings).unwrap_or_default(),
        sms: parsed
            .sms
            .into_iter()
            .map(|item| BulkSmsResult {
                id: text(item.id),
                sms_id: text(item.sms_id),
                msisdn: text(item.msisdn),
            })
            .collect(),
        balance: text(parsed.balance),
        cost: text(parsed.cost),
        accepted: text(parsed.accepted),
        rejected: text(parsed.rejected),
    })
}

pub fn decode_cancel_sms_response(
    object: &JsonObject,
) -> Result<CancelSmsResponse, TransportError> {
    let parsed: CancelSmsJsonResponse = decode(object)?;
    Ok(CancelSmsResponse {
        remarks: parsed.remarks,
        sms_id: text(parsed.sms_id),
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::domain::{BulkOptions, CallbackUrl, SendOptions};

    fn pairs(params: &[(&str, &str)]) -> Vec<(String, String)> {
        params
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect()
    }

    fn object(value: serde_json::Value) -> JsonObject {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn encode_send_drops_absent_options() {
        let request = SendSms::new(
            Mobile::new("6912345678").unwrap(),
            MessageText::new("Test message").unwrap(),
            SenderId::new("SMSCenter").unwrap(),
            SendOptions::default(),
        );

        assert_eq!(
            encode_send_sms_params(&request),
            pairs(&[
                ("to", "6912345678"),
                ("text", "Test message"),
                ("from", "SMSCenter"),
            ])
        );
    }

    #[test]
    fn encode_send_serializes_flags_timestamp_and_callback() {
        let request = SendSms::new(
            Mobile::new("6912345678").unwrap(),
            MessageText::new("Test message").unwrap(),
            SenderId::new("SMSCenter").unwrap(),
            SendOptions {
                ucs: Some(true),
                flash: Some(false),
                timestamp: Some(Timestamp::from(1_700_000_000)),
                callback: Some(CallbackUrl::new("https://example.com/dlr").unwrap()),
            },
        );

        assert_eq!(
            encode_send_sms_params(&request),
            pairs(&[
                ("to", "6912345678"),
                ("text", "Test message"),
                ("from", "SMSCenter"),
                ("ucs", "true"),
                ("flash", "false"),
                ("timestamp", "1700000000"),
                ("callback", "https://example.com/dlr"),
            ])
        );
    }

    #[test]
    fn encode_bulk_joins_recipients_with_commas() {
        let request = BulkSms::new(
            vec![Mobile::new("A").unwrap(), Mobile::new("B").unwrap()],
            MessageText::new("Bulk test").unwrap(),
            SenderId::new("SMSCenter").unwrap(),
            BulkOptions::default(),
        )
        .unwrap();

        let params = encode_bulk_sms_params(&request);
        assert_eq!(params[0], ("to".to_owned(), "A,B".to_owned()));
        assert_eq!(params.len(), 3);
    }

    #[test]
    fn decode_send_accepts_numeric_fields() {
        let parsed = decode_send_sms_response(&object(json!({
            "status": "1",
            "remarks": "Success",
            "error": "0",
            "id": 987,
            "cost": "1",
            "balance": 41.5,
            "mcc": "202",
            "mnc": "05"
        })))
        .unwrap();

        assert_eq!(parsed.remarks.as_deref(), Some("Success"));
        assert_eq!(parsed.id.as_deref(), Some("987"));
        assert_eq!(parsed.balance.as_deref(), Some("41.5"));
        assert_eq!(parsed.mnc.as_deref(), Some("05"));
    }

    #[test]
    fn decode_bulk_collects_ids_and_rows() {
        let parsed = decode_bulk_sms_response(&object(json!({
            "status": "1",
            "id": ["11", "12"],
            "sms": [
                {"id": "11", "smsId": "11", "msisdn": "306912345678"},
                {"id": "12", "smsId": 12, "msisdn": "306912345679"}
            ],
            "accepted": "2",
            "rejected": "0"
        })))
        .unwrap();

        assert_eq!(parsed.ids, vec!["11", "12"]);
        assert_eq!(parsed.sms.len(), 2);
        assert_eq!(parsed.sms[1].sms_id.as_deref(), Some("12"));
        assert_eq!(parsed.accepted.as_deref(), Some("2"));
    }

    #[test]
    fn decode_cancel_reads_sms_id() {
        let parsed = decode_cancel_sms_response(&object(json!({
            "status": "1",
            "remarks": "Success",
            "smsId": "123"
        })))
        .unwrap();
        assert_eq!(parsed.sms_id.as_deref(), Some("123"));
    }
}
