//! Typed Rust client for the SMSCenter HTTP API.
//!
//! The crate is split into a domain layer of strong types, a transport layer for
//! wire-format quirks, a client that owns the HTTP connection, and one manager per
//! API resource (SMS, contacts, groups, HLR, two-factor codes, sub-accounts, ...).
//!
//! ```rust,no_run
//! use smscenter::{MessageText, Mobile, SendOptions, SendSms, SenderId, SmsCenterClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), smscenter::SmsCenterError> {
//!     let client = SmsCenterClient::new("...")?;
//!     let request = SendSms::new(
//!         Mobile::new("306912345678")?,
//!         MessageText::new("hello")?,
//!         SenderId::new("SMSCenter")?,
//!         SendOptions::default(),
//!     );
//!     let _resp = client.sms().send(&request).await?;
//!     client.close();
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
pub mod manager;
mod transport;

pub use client::{
    ApiFailure, KeyClient, KeyClientBuilder, SmsCenterClient, SmsCenterClientBuilder,
    SmsCenterError,
};
pub use domain::{
    ApiKey, AuthId, BulkOptions, BulkSms, CallbackUrl, CommentId, ContactDate, ContactFields,
    ContactGroupId, ContactId, DateLike, DeleteContact, Email, GroupId, GroupName, MessageText,
    Mobile, Password, PhoneNumber, SendOptions, SendSms, SenderId, SmsId, Timestamp,
    TwoFactorOptions, UserId, Username, ValidationError,
};
pub use manager::ApiCall;
pub use phonenumber::country;
pub use transport::JsonObject;
