use serde::Deserialize;

use super::wire::{JsonObject, TransportError, WireText, decode, lenient_list, text};
use crate::domain::{
    BalanceResponse, KeyResponse, Password, Purchase, PurchaseListResponse, StatusOnlyResponse,
    Username,
};

#[derive(Debug, Clone, Deserialize)]
struct StatusOnlyJsonResponse {
    #[serde(default)]
    remarks: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct BalanceJsonResponse {
    #[serde(default)]
    remarks: Option<String>,
    #[serde(default)]
    balance: Option<WireText>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PurchaseJson {
    #[serde(default)]
    purchase_id: Option<WireText>,
    #[serde(default)]
    timestamp: Option<WireText>,
    #[serde(default)]
    cost: Option<WireText>,
    #[serde(default)]
    sms: Option<WireText>,
}

#[derive(Debug, Clone, Deserialize)]
struct PurchaseListJsonResponse {
    #[serde(default)]
    remarks: Option<String>,
    #[serde(default)]
    total: Option<WireText>,
    #[serde(default, deserialize_with = "lenient_list")]
    purchases: Vec<PurchaseJson>,
}

#[derive(Debug, Clone, Deserialize)]
struct KeyJsonResponse {
    #[serde(default)]
    remarks: Option<String>,
    #[serde(default)]
    key: Option<WireText>,
}

/// Credentials for the unauthenticated `key/*` endpoints.
pub fn encode_key_params(username: &Username, password: &Password) -> Vec<(String, String)> {
    vec![
        (Username::FIELD.to_owned(), username.as_str().to_owned()),
        (Password::FIELD.to_owned(), password.as_str().to_owned()),
    ]
}

pub fn decode_status_only_response(
    object: &JsonObject,
) -> Result<StatusOnlyResponse, TransportError> {
    let parsed: StatusOnlyJsonResponse = decode(object)?;
    Ok(StatusOnlyResponse {
        remarks: parsed.remarks,
    })
}

pub fn decode_balance_response(object: &JsonObject) -> Result<BalanceResponse, TransportError> {
    let parsed: BalanceJsonResponse = decode(object)?;
    Ok(BalanceResponse {
        remarks: parsed.remarks,
        balance: text(parsed.balance),
    })
}

pub fn decode_purchase_list_response(
    object: &JsonObject,
) -> Result<PurchaseListResponse, TransportError> {
    let parsed: PurchaseListJsonResponse = decode(object)?;
    Ok(PurchaseListResponse {
        remarks: parsed.remarks,
        total: text(parsed.total),
        purchases: parsed
            .purchases
            .into_iter()
            .map(|item| Purchase {
                purchase_id: text(item.purchase_id),
                timestamp: text(item.timestamp),
                cost: text(item.cost),
                sms: text(item.sms),
            })
            .collect(),
    })
}

/// Blank keys are reported as absent.
pub fn decode_key_response(object: &JsonObject) -> Result<KeyResponse, TransportError> {
    let parsed: KeyJsonResponse = decode(object)?;
    Ok(KeyResponse {
        remarks: parsed.remarks,
        key: text(parsed.key).filter(|it| !it.trim().is_empty()),
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn balance_keeps_decimal_text() {
        let object = json!({"status": "1", "remarks": "Success", "error": "0", "balance": "100.00"});
        let parsed = decode_balance_response(object.as_object().unwrap()).unwrap();
        assert_eq!(parsed.balance.as_deref(), Some("100.00"));
        assert_eq!(parsed.remarks.as_deref(), Some("Success"));
    }

    #[test]
    fn balance_accepts_numbers() {
        let object = json!({"status": "1", "balance": 12});
        let parsed = decode_balance_response(object.as_object().unwrap()).unwrap();
        assert_eq!(parsed.balance.as_deref(), Some("12"));
    }

    #[test]
    fn purchases_are_listed_in_order() {
        let object = json!({
            "status": "1",
            "total": "2",
            "purchases": [
                {"purchaseId": "1", "timestamp": "1700000000", "cost": "10.00", "sms": "500"},
                {"purchaseId": 2, "timestamp": 1700000100, "cost": "20.00", "sms": "1000"}
            ]
        });
        let parsed = decode_purchase_list_response(object.as_object().unwrap()).unwrap();
        assert_eq!(parsed.purchases.len(), 2);
        assert_eq!(parsed.purchases[1].purchase_id.as_deref(), Some("2"));
        assert_eq!(parsed.purchases[1].timestamp.as_deref(), Some("1700000100"));
    }

    #[test]
    fn key_params_carry_credentials() {
        let params = encode_key_params(
            &Username::new("user").unwrap(),
            &Password::new("secret").unwrap(),
        );
        assert_eq!(
            params,
            vec![
                ("username".to_owned(), "user".to_owned()),
                ("password".to_owned(), "secret".to_owned()),
            ]
        );
    }

    #[test]
    fn blank_key_is_absent() {
        let object = json!({"status": "1", "key": "  "});
        assert_eq!(decode_key_response(object.as_object().unwrap()).unwrap().key, None);

        let object = json!({"status": "1", "key": "abc123"});
        assert_eq!(
            decode_key_response(object.as_object().unwrap())
                .unwrap()
                .key
                .as_deref(),
            Some("abc123")
        );
    }
}
