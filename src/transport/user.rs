use serde::Deserialize;

use super::wire::{
    JsonObject, TransportError, WireText, decode, indexed_rows, lenient_list, text,
};
use crate::domain::{
    CommentId, Email, Password, SubAccount, UserBalance, UserComment, UserCommentListResponse,
    UserCommentResponse, UserId, UserListResponse, UserResponse,
};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UserBalanceJson {
    #[serde(default)]
    user_id: Option<WireText>,
    #[serde(default)]
    balance: Option<WireText>,
}

#[derive(Debug, Clone, Deserialize)]
struct UserJsonResponse {
    #[serde(default)]
    remarks: Option<String>,
    #[serde(default)]
    user: Option<UserBalanceJson>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SubAccountJson {
    #[serde(default)]
    user_id: Option<WireText>,
    #[serde(default)]
    username: Option<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    balance: Option<WireText>,
    #[serde(default)]
    mobile: Option<WireText>,
    #[serde(default)]
    key: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct ListEnvelopeJson {
    #[serde(default)]
    remarks: Option<String>,
    #[serde(default)]
    total: Option<WireText>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CommentRefJson {
    #[serde(default)]
    comment_id: Option<WireText>,
}

#[derive(Debug, Clone, Deserialize)]
struct UserCommentJsonResponse {
    #[serde(default)]
    remarks: Option<String>,
    #[serde(default)]
    comment: Option<CommentRefJson>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UserCommentJson {
    #[serde(default)]
    comment_id: Option<WireText>,
    #[serde(default)]
    comment: Option<String>,
    #[serde(default)]
    timestamp: Option<WireText>,
}

#[derive(Debug, Clone, Deserialize)]
struct UserCommentListJsonResponse {
    #[serde(default)]
    remarks: Option<String>,
    #[serde(default)]
    total: Option<WireText>,
    #[serde(default, deserialize_with = "lenient_list")]
    comments: Vec<UserCommentJson>,
}

pub fn encode_add_user_params(email: &Email, password: &Password) -> Vec<(String, String)> {
    vec![
        (Email::FIELD.to_owned(), email.as_str().to_owned()),
        (Password::FIELD.to_owned(), password.as_str().to_owned()),
    ]
}

pub fn encode_topup_params(user_id: &UserId, sms: u32, cost: &str) -> Vec<(String, String)> {
    vec![
        (UserId::FIELD.to_owned(), user_id.as_str().to_owned()),
        ("sms".to_owned(), sms.to_string()),
        ("cost".to_owned(), cost.to_owned()),
    ]
}

pub fn encode_user_id_params(user_id: &UserId) -> Vec<(String, String)> {
    vec![(UserId::FIELD.to_owned(), user_id.as_str().to_owned())]
}

pub fn encode_add_comment_params(user_id: &UserId, comment: &str) -> Vec<(String, String)> {
    vec![
        (UserId::FIELD.to_owned(), user_id.as_str().to_owned()),
        ("comment".to_owned(), comment.to_owned()),
    ]
}

pub fn encode_comment_id_params(comment_id: &CommentId) -> Vec<(String, String)> {
    vec![(CommentId::FIELD.to_owned(), comment_id.as_str().to_owned())]
}

pub fn decode_user_response(object: &JsonObject) -> Result<UserResponse, TransportError> {
    let parsed: UserJsonResponse = decode(object)?;
    Ok(UserResponse {
        remarks: parsed.remarks,
        user: parsed.user.map(|user| UserBalance {
            user_id: text(user.user_id),
            balance: text(user.balance),
        }),
    })
}

/// Sub-accounts come back as an indexed map.
pub fn decode_user_list_response(object: &JsonObject) -> Result<UserListResponse, TransportError> {
    let envelope: ListEnvelopeJson = decode(object)?;
    let rows: Vec<SubAccountJson> = indexed_rows(object)?;
    Ok(UserListResponse {
        remarks: envelope.remarks,
        total: text(envelope.total),
        users: rows
            .into_iter()
            .map(|row| SubAccount {
                user_id: text(row.user_id),
                username: row.username,
                email: row.email,
                balance: text(row.balance),
                mobile: text(row.mobile),
                key: row.key,
            })
            .collect(),
    })
}

pub fn decode_user_comment_response(
    object: &JsonObject,
) -> Result<UserCommentResponse, TransportError> {
    let parsed: UserCommentJsonResponse = decode(object)?;
    Ok(UserCommentResponse {
        remarks: parsed.remarks,
        comment_id: parsed.comment.and_then(|it| text(it.comment_id)),
    })
}

pub fn decode_user_comment_list_response(
    object: &JsonObject,
) -> Result<UserCommentListResponse, TransportError> {
    let parsed: UserCommentListJsonResponse = decode(object)?;
    Ok(UserCommentListResponse {
        remarks: parsed.remarks,
        total: text(parsed.total),
        comments: parsed
            .comments
            .into_iter()
            .map(|row| UserComment {
                comment_id: text(row.comment_id),
                comment: row.comment,
                timestamp: text(row.timestamp),
            })
            .collect(),
    })
}
