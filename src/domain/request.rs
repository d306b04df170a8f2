use chrono::NaiveDate;

use crate::domain::date::{ContactDate, Timestamp};
use crate::domain::validation::ValidationError;
use crate::domain::value::{
    CallbackUrl, ContactGroupId, ContactId, GroupId, MessageText, Mobile, SenderId,
};

#[derive(Debug, Clone, Default)]
pub struct SendOptions {
    /// Send as unicode (`ucs`).
    pub ucs: Option<bool>,
    pub flash: Option<bool>,
    /// Schedule for later; only scheduled messages can be cancelled.
    pub timestamp: Option<Timestamp>,
    pub callback: Option<CallbackUrl>,
}

#[derive(Debug, Clone)]
pub struct SendSms {
    to: Mobile,
    text: MessageText,
    sender: SenderId,
    options: SendOptions,
}

impl SendSms {
    pub fn new(to: Mobile, text: MessageText, sender: SenderId, options: SendOptions) -> Self {
        Self {
            to,
            text,
            sender,
            options,
        }
    }

    pub fn to(&self) -> &Mobile {
        &self.to
    }

    pub fn text(&self) -> &MessageText {
        &self.text
    }

    pub fn sender(&self) -> &SenderId {
        &self.sender
    }

    pub fn options(&self) -> &SendOptions {
        &self.options
    }
}

#[derive(Debug, Clone, Default)]
pub struct BulkOptions {
    pub ucs: Option<bool>,
    pub flash: Option<bool>,
    pub timestamp: Option<Timestamp>,
}

#[derive(Debug, Clone)]
pub struct BulkSms {
    recipients: Vec<Mobile>,
    text: MessageText,
    sender: SenderId,
    options: BulkOptions,
}

impl BulkSms {
    pub fn new(
        recipients: Vec<Mobile>,
        text: MessageText,
        sender: SenderId,
        options: BulkOptions,
    ) -> Result<Self, ValidationError> {
        if recipients.is_empty() {
            return Err(ValidationError::Empty { field: "to" });
        }
        Ok(Self {
            recipients,
            text,
            sender,
            options,
        })
    }

    pub fn recipients(&self) -> &[Mobile] {
        &self.recipients
    }

    pub fn text(&self) -> &MessageText {
        &self.text
    }

    pub fn sender(&self) -> &SenderId {
        &self.sender
    }

    pub fn options(&self) -> &BulkOptions {
        &self.options
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A date supplied either as a structured value or as text.
///
/// Text is only checked when the request is sent, so a malformed value fails the call
/// before anything reaches the network.
pub enum DateLike {
    Date(NaiveDate),
    Text(String),
}

impl DateLike {
    pub fn normalize(&self) -> Result<ContactDate, ValidationError> {
        match self {
            Self::Date(date) => Ok(ContactDate::from(*date)),
            Self::Text(text) => ContactDate::parse(text),
        }
    }
}

impl From<NaiveDate> for DateLike {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}

impl From<ContactDate> for DateLike {
    fn from(value: ContactDate) -> Self {
        Self::Date(value.date())
    }
}

impl From<&str> for DateLike {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for DateLike {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

#[derive(Debug, Clone, Default)]
/// Optional contact attributes for `contact/add` and `contact/update`.
pub struct ContactFields {
    pub name: Option<String>,
    pub surname: Option<String>,
    pub full_name: Option<String>,
    /// First name in vocative, for personalised messages.
    pub vname: Option<String>,
    /// Last name in vocative.
    pub vusername: Option<String>,
    pub birthday: Option<DateLike>,
    pub nameday: Option<DateLike>,
    pub custom1: Option<String>,
    pub custom2: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Target of `group/deleteContact`: either the link id or the group/contact pair.
pub enum DeleteContact {
    Link(ContactGroupId),
    Pair {
        group_id: GroupId,
        contact_id: ContactId,
    },
}

impl DeleteContact {
    const CONFLICT: &'static str =
        "Either contact_group_id or both group_id and contact_id must be provided.";

    /// Build from loosely supplied ids.
    ///
    /// Exactly one form is accepted: `contact_group_id` alone, or both `group_id` and
    /// `contact_id`. Neither, both, or a partial pair is rejected.
    pub fn from_parts(
        group_id: Option<GroupId>,
        contact_id: Option<ContactId>,
        contact_group_id: Option<ContactGroupId>,
    ) -> Result<Self, ValidationError> {
        match (group_id, contact_id, contact_group_id) {
            (None, None, Some(link)) => Ok(Self::Link(link)),
            (Some(group_id), Some(contact_id), None) => Ok(Self::Pair {
                group_id,
                contact_id,
            }),
            _ => Err(ValidationError::ConflictingParameters {
                message: Self::CONFLICT,
            }),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct TwoFactorOptions {
    /// Message template; `%%code%%` is replaced by the gateway.
    pub text: Option<MessageText>,
    pub sender: Option<SenderId>,
    /// Seconds to wait for the delivery report. `0` returns immediately.
    pub wait: Option<u32>,
    pub callback: Option<CallbackUrl>,
    pub ucs: Option<bool>,
}
