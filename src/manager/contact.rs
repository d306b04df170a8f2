use super::{ApiCall, request};
use crate::client::{FailureKind, SmsCenterError};
use crate::domain::{
    ContactDetailResponse, ContactFields, ContactId, ContactListResponse, ContactSavedResponse,
    Mobile, StatusOnlyResponse,
};
use crate::transport;

/// Address book (`contact/*`).
///
/// `birthday` and `nameday` are checked locally: anything that is not a valid
/// `YYYY-MM-DD` date fails with [`SmsCenterError::Validation`] before a request is sent.
pub struct ContactManager<'a> {
    api: &'a dyn ApiCall,
}

impl<'a> ContactManager<'a> {
    /// Wrap any [`ApiCall`], usually an [`crate::SmsCenterClient`].
    pub fn new(api: &'a dyn ApiCall) -> Self {
        Self { api }
    }

    /// Add a contact for `mobile` with the optional `fields`.
    pub async fn add(
        &self,
        mobile: &Mobile,
        fields: &ContactFields,
    ) -> Result<ContactSavedResponse, SmsCenterError> {
        let params = transport::encode_add_contact_params(mobile, fields)?;
        request(
            self.api,
            "contact/add",
            params,
            FailureKind::Contact,
            transport::decode_contact_saved_response,
        )
        .await
    }

    /// All contacts of the account.
    pub async fn list(&self) -> Result<ContactListResponse, SmsCenterError> {
        request(
            self.api,
            "contact/list",
            Vec::new(),
            FailureKind::Contact,
            transport::decode_contact_list_response,
        )
        .await
    }

    /// One contact by id.
    pub async fn get(&self, contact_id: &ContactId) -> Result<ContactDetailResponse, SmsCenterError> {
        request(
            self.api,
            "contact/get",
            transport::encode_contact_id_params(contact_id),
            FailureKind::Contact,
            transport::decode_contact_detail_response,
        )
        .await
    }

    /// Update an existing contact. Only the fields that are set are sent.
    pub async fn update(
        &self,
        contact_id: &ContactId,
        mobile: Option<&Mobile>,
        fields: &ContactFields,
    ) -> Result<ContactSavedResponse, SmsCenterError> {
        let params = transport::encode_update_contact_params(contact_id, mobile, fields)?;
        request(
            self.api,
            "contact/update",
            params,
            FailureKind::Contact,
            transport::decode_contact_saved_response,
        )
        .await
    }

    /// Delete a contact.
    pub async fn delete(&self, contact_id: &ContactId) -> Result<StatusOnlyResponse, SmsCenterError> {
        request(
            self.api,
            "contact/delete",
            transport::encode_contact_id_params(contact_id),
            FailureKind::Contact,
            transport::decode_status_only_response,
        )
        .await
    }
}
