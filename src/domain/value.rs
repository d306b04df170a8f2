use std::sync::LazyLock;

use phonenumber::country;
use regex::Regex;

use crate::domain::validation::ValidationError;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?)+$")
        .expect("email pattern compiles")
});

fn trimmed_non_empty(value: String, field: &'static str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty { field });
    }
    Ok(trimmed.to_owned())
}

/// Declares a string identifier that is trimmed and must not be empty.
macro_rules! identifier {
    ($(#[$meta:meta])* $name:ident => $field:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(String);

        impl $name {
            #[doc = concat!("Query parameter name used by SMSCenter (`", $field, "`).")]
            pub const FIELD: &'static str = $field;

            #[doc = concat!("Create a validated [`", stringify!($name), "`].")]
            pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
                trimmed_non_empty(value.into(), Self::FIELD).map(Self)
            }

            /// Borrow the validated value.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }
    };
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// SMSCenter API key (`key`).
///
/// Invariant: non-empty after trimming.
pub struct ApiKey(String);

impl ApiKey {
    /// Query parameter name used by SMSCenter (`key`).
    pub const FIELD: &'static str = "key";

    /// Create a validated [`ApiKey`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        trimmed_non_empty(value.into(), Self::FIELD).map(Self)
    }

    /// Borrow the validated key.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// SMSCenter account password.
///
/// Invariant: must not be empty (whitespace is preserved and allowed).
pub struct Password(String);

impl Password {
    /// Query parameter name used by SMSCenter (`password`).
    pub const FIELD: &'static str = "password";

    /// Create a validated [`Password`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the password as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

identifier! {
    /// SMSCenter account username.
    Username => "username"
}

identifier! {
    /// Sender name or number shown to the recipient (`from`).
    SenderId => "from"
}

identifier! {
    /// Message id returned by `sms/send`.
    SmsId => "smsId"
}

identifier! {
    ContactId => "contactId"
}

identifier! {
    GroupId => "groupId"
}

identifier! {
    /// Id of a single contact-in-group link, returned by `group/addContact`.
    ContactGroupId => "contactGroupId"
}

identifier! {
    GroupName => "name"
}

identifier! {
    /// Sub-account id.
    UserId => "userId"
}

identifier! {
    CommentId => "commentId"
}

identifier! {
    /// Two-factor session id returned by `2fa/send`.
    AuthId => "authId"
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// SMS message text (`text`).
///
/// Invariant: non-empty after trimming. The original value (including whitespace) is preserved.
pub struct MessageText(String);

impl MessageText {
    /// Query parameter name used by SMSCenter (`text`).
    pub const FIELD: &'static str = "text";

    /// Create validated message text.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the message text as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Mobile number as sent to SMSCenter.
///
/// Invariant: non-empty after trimming. [`Mobile::new`] sends the value as given;
/// [`Mobile::parse`] normalizes it to international digits first.
pub struct Mobile(String);

impl Mobile {
    /// Query parameter name used by SMSCenter (`mobile`).
    pub const FIELD: &'static str = "mobile";

    /// Create a validated (non-empty) mobile number.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        trimmed_non_empty(value.into(), Self::FIELD).map(Self)
    }

    /// Parse `input` as a phone number and keep its international digits.
    ///
    /// `+30 691 234 5678` and, with `Some(country::Id::GR)`, `691 234 5678` both
    /// become `306912345678`.
    pub fn parse(
        default_region: Option<country::Id>,
        input: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        PhoneNumber::parse(default_region, input).map(Self::from)
    }

    /// Raw (trimmed) value as sent to SMSCenter.
    pub fn raw(&self) -> &str {
        &self.0
    }
}

impl From<PhoneNumber> for Mobile {
    /// SMSCenter expects the international form without the leading `+`.
    fn from(value: PhoneNumber) -> Self {
        let digits = value.e164.trim_start_matches('+').to_owned();
        Self(digits)
    }
}

#[derive(Debug, Clone)]
/// Parsed phone number with an E.164 representation.
///
/// Equality is based on the E.164 form.
pub struct PhoneNumber {
    raw: String,
    e164: String,
}

impl PhoneNumber {
    /// Parse and normalize a phone number into E.164.
    ///
    /// `default_region` is used when the input does not contain an explicit country prefix,
    /// e.g. `Some(country::Id::GR)` for national Greek numbers.
    pub fn parse(
        default_region: Option<country::Id>,
        input: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let input = input.into();
        let raw = input.trim().to_owned();
        if raw.is_empty() {
            return Err(ValidationError::Empty {
                field: Mobile::FIELD,
            });
        }

        let parsed = phonenumber::parse(default_region, &raw)
            .map_err(|_| ValidationError::InvalidPhoneNumber { input: raw.clone() })?;

        let e164 = phonenumber::format(&parsed)
            .mode(phonenumber::Mode::E164)
            .to_string();

        Ok(Self { raw, e164 })
    }

    /// Raw input after trimming.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Normalized E.164 representation.
    pub fn e164(&self) -> &str {
        &self.e164
    }
}

impl PartialEq for PhoneNumber {
    fn eq(&self, other: &Self) -> bool {
        self.e164 == other.e164
    }
}

impl Eq for PhoneNumber {}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Sub-account email address (`email`).
pub struct Email(String);

impl Email {
    /// Query parameter name used by SMSCenter (`email`).
    pub const FIELD: &'static str = "email";

    /// Create a validated [`Email`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        if !EMAIL_PATTERN.is_match(trimmed) {
            return Err(ValidationError::InvalidEmail {
                input: trimmed.to_owned(),
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Delivery-report URL (`callback`).
///
/// Invariant: an absolute `http` or `https` URL.
pub struct CallbackUrl(String);

impl CallbackUrl {
    /// Query parameter name used by SMSCenter (`callback`).
    pub const FIELD: &'static str = "callback";

    /// Create a validated [`CallbackUrl`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = trimmed_non_empty(value.into(), Self::FIELD)?;
        let parsed = url::Url::parse(&value)
            .map_err(|_| ValidationError::InvalidCallbackUrl {
                input: value.clone(),
            })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ValidationError::InvalidCallbackUrl { input: value });
        }
        Ok(Self(value))
    }

    /// Borrow the URL as provided (trimmed).
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
