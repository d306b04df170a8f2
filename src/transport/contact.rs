use serde::Deserialize;

use super::wire::{JsonObject, TransportError, WireText, decode, lenient_list, text};
use crate::domain::{
    Contact, ContactDetailResponse, ContactFields, ContactId, ContactListResponse,
    ContactSavedResponse, Mobile, ValidationError,
};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct ContactJson {
    #[serde(default)]
    contact_id: Option<WireText>,
    #[serde(default)]
    mobile: Option<WireText>,
    #[serde(default, rename = "smscost")]
    sms_cost: Option<WireText>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    surname: Option<String>,
    #[serde(default)]
    vname: Option<String>,
    #[serde(default)]
    birthday: Option<String>,
    #[serde(default)]
    nameday: Option<String>,
    #[serde(default)]
    custom1: Option<String>,
    #[serde(default)]
    custom2: Option<String>,
}

impl From<ContactJson> for Contact {
    fn from(value: ContactJson) -> Self {
        Self {
            contact_id: text(value.contact_id),
            mobile: text(value.mobile),
            sms_cost: text(value.sms_cost),
            name: value.name,
            surname: value.surname,
            vname: value.vname,
            birthday: value.birthday,
            nameday: value.nameday,
            custom1: value.custom1,
            custom2: value.custom2,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ContactRefJson {
    #[serde(default)]
    contact_id: Option<WireText>,
}

#[derive(Debug, Clone, Deserialize)]
struct ContactSavedJsonResponse {
    #[serde(default)]
    remarks: Option<String>,
    #[serde(default)]
    contact: Option<ContactRefJson>,
}

#[derive(Debug, Clone, Deserialize)]
struct ContactListJsonResponse {
    #[serde(default)]
    remarks: Option<String>,
    #[serde(default)]
    total: Option<WireText>,
    #[serde(default, deserialize_with = "lenient_list")]
    contacts: Vec<ContactJson>,
}

#[derive(Debug, Clone, Deserialize)]
struct ContactDetailJsonResponse {
    #[serde(default)]
    remarks: Option<String>,
    #[serde(default)]
    contact: Option<ContactJson>,
}

fn push_fields(
    params: &mut Vec<(String, String)>,
    fields: &ContactFields,
) -> Result<(), ValidationError> {
    let text_fields = [
        ("name", &fields.name),
        ("surname", &fields.surname),
        ("full_name", &fields.full_name),
        ("vname", &fields.vname),
        ("vusername", &fields.vusername),
    ];
    for (key, value) in text_fields {
        if let Some(value) = value {
            params.push((key.to_owned(), value.clone()));
        }
    }

    if let Some(birthday) = fields.birthday.as_ref() {
        params.push(("birthday".to_owned(), birthday.normalize()?.to_param()));
    }
    if let Some(nameday) = fields.nameday.as_ref() {
        params.push(("nameday".to_owned(), nameday.normalize()?.to_param()));
    }

    for (key, value) in [("custom1", &fields.custom1), ("custom2", &fields.custom2)] {
        if let Some(value) = value {
            params.push((key.to_owned(), value.clone()));
        }
    }
    Ok(())
}

/// Fails when a date field is not a valid `YYYY-MM-DD` value.
pub fn encode_add_contact_params(
    mobile: &Mobile,
    fields: &ContactFields,
) -> Result<Vec<(String, String)>, ValidationError> {
    let mut params = vec![(Mobile::FIELD.to_owned(), mobile.raw().to_owned())];
    push_fields(&mut params, fields)?;
    Ok(params)
}

/// Fails when a date field is not a valid `YYYY-MM-DD` value.
pub fn encode_update_contact_params(
    contact_id: &ContactId,
    mobile: Option<&Mobile>,
    fields: &ContactFields,
) -> Result<Vec<(String, String)>, ValidationError> {
    let mut params = vec![(ContactId::FIELD.to_owned(), contact_id.as_str().to_owned())];
    if let Some(mobile) = mobile {
        params.push((Mobile::FIELD.to_owned(), mobile.raw().to_owned()));
    }
    push_fields(&mut params, fields)?;
    Ok(params)
}

pub fn encode_contact_id_params(contact_id: &ContactId) -> Vec<(String, String)> {
    vec![(ContactId::FIELD.to_owned(), contact_id.as_str().to_owned())]
}

pub fn decode_contact_saved_response(
    object: &JsonObject,
) -> Result<ContactSavedResponse, TransportError> {
    let parsed: ContactSavedJsonResponse = decode(object)?;
    Ok(ContactSavedResponse {
        remarks: parsed.remarks,
        contact_id: parsed.contact.and_then(|it| text(it.contact_id)),
    })
}

pub fn decode_contact_list_response(
    object: &JsonObject,
) -> Result<ContactListResponse, TransportError> {
    let parsed: ContactListJsonResponse = decode(object)?;
    Ok(ContactListResponse {
        remarks: parsed.remarks,
        total: text(parsed.total),
        contacts: parsed.contacts.into_iter().map(Contact::from).collect(),
    })
}

pub fn decode_contact_detail_response(
    object: &JsonObject,
) -> Result<ContactDetailResponse, TransportError> {
    let parsed: ContactDetailJsonResponse = decode(object)?;
    Ok(ContactDetailResponse {
        remarks: parsed.remarks,
        contact: parsed.contact.map(Contact::from),
    })
}
