use serde::Deserialize;

use super::contact::ContactJson;
use super::wire::{JsonObject, TransportError, WireText, decode, lenient_list, text};
use crate::domain::{
    Contact, ContactGroupId, ContactId, DeleteContact, GroupContactLinkResponse,
    GroupDetailResponse, GroupId, GroupListResponse, GroupName, GroupResponse, GroupSummary,
};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GroupRefJson {
    #[serde(default)]
    group_id: Option<WireText>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GroupJsonResponse {
    #[serde(default)]
    remarks: Option<String>,
    #[serde(default)]
    group: Option<GroupRefJson>,
    /// `group/add` may return the id at the top level instead.
    #[serde(default)]
    group_id: Option<WireText>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GroupSummaryJson {
    #[serde(default)]
    group_id: Option<WireText>,
    #[serde(default)]
    name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct GroupListJsonResponse {
    #[serde(default)]
    remarks: Option<String>,
    #[serde(default)]
    total: Option<WireText>,
    #[serde(default, deserialize_with = "lenient_list")]
    groups: Vec<GroupSummaryJson>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct GroupDetailJson {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    total: Option<WireText>,
    #[serde(default, deserialize_with = "lenient_list")]
    contacts: Vec<ContactJson>,
}

#[derive(Debug, Clone, Deserialize)]
struct GroupDetailJsonResponse {
    #[serde(default)]
    remarks: Option<String>,
    #[serde(default)]
    total: Option<WireText>,
    #[serde(default)]
    group: Option<GroupDetailJson>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ContactLinkJson {
    #[serde(default)]
    contact_group_id: Option<WireText>,
}

#[derive(Debug, Clone, Deserialize)]
struct LinkHolderJson {
    #[serde(default)]
    contact: Option<ContactLinkJson>,
}

#[derive(Debug, Clone, Deserialize)]
struct GroupContactLinkJsonResponse {
    #[serde(default)]
    remarks: Option<String>,
    #[serde(default)]
    group: Option<LinkHolderJson>,
}

pub fn encode_group_name_params(name: &GroupName) -> Vec<(String, String)> {
    vec![(GroupName::FIELD.to_owned(), name.as_str().to_owned())]
}

pub fn encode_group_id_params(group_id: &GroupId) -> Vec<(String, String)> {
    vec![(GroupId::FIELD.to_owned(), group_id.as_str().to_owned())]
}

pub fn encode_group_contact_params(
    group_id: &GroupId,
    contact_id: &ContactId,
) -> Vec<(String, String)> {
    vec![
        (GroupId::FIELD.to_owned(), group_id.as_str().to_owned()),
        (ContactId::FIELD.to_owned(), contact_id.as_str().to_owned()),
    ]
}

pub fn encode_delete_contact_params(target: &DeleteContact) -> Vec<(String, String)> {
    match target {
        DeleteContact::Link(link) => {
            vec![(ContactGroupId::FIELD.to_owned(), link.as_str().to_owned())]
        }
        DeleteContact::Pair {
            group_id,
            contact_id,
        } => encode_group_contact_params(group_id, contact_id),
    }
}

pub fn decode_group_response(object: &JsonObject) -> Result<GroupResponse, TransportError> {
    let parsed: GroupJsonResponse = decode(object)?;
    let group_id = parsed
        .group
        .and_then(|it| it.group_id)
        .or(parsed.group_id);
    Ok(GroupResponse {
        remarks: parsed.remarks,
        group_id: text(group_id),
    })
}

pub fn decode_group_list_response(
    object: &JsonObject,
) -> Result<GroupListResponse, TransportError> {
    let parsed: GroupListJsonResponse = decode(object)?;
    Ok(GroupListResponse {
        remarks: parsed.remarks,
        total: text(parsed.total),
        groups: parsed
            .groups
            .into_iter()
            .map(|group| GroupSummary {
                group_id: text(group.group_id),
                name: group.name,
            })
            .collect(),
    })
}

pub fn decode_group_detail_response(
    object: &JsonObject,
) -> Result<GroupDetailResponse, TransportError> {
    let parsed: GroupDetailJsonResponse = decode(object)?;
    let group = parsed.group.unwrap_or_default();
    Ok(GroupDetailResponse {
        remarks: parsed.remarks,
        name: group.name,
        total: text(group.total.or(parsed.total)),
        contacts: group.contacts.into_iter().map(Contact::from).collect(),
    })
}

pub fn decode_group_contact_link_response(
    object: &JsonObject,
) -> Result<GroupContactLinkResponse, TransportError> {
    let parsed: GroupContactLinkJsonResponse = decode(object)?;
    Ok(GroupContactLinkResponse {
        remarks: parsed.remarks,
        contact_group_id: parsed
            .group
            .and_then(|it| it.contact)
            .and_then(|it| text(it.contact_group_id)),
    })
}
