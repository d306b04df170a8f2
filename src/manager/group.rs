use super::{ApiCall, request};
use crate::client::{FailureKind, SmsCenterError};
use crate::domain::{
    ContactId, DeleteContact, GroupContactLinkResponse, GroupDetailResponse, GroupId,
    GroupListResponse, GroupName, GroupResponse, StatusOnlyResponse,
};
use crate::transport;

/// Contact groups (`group/*`).
pub struct GroupManager<'a> {
    api: &'a dyn ApiCall,
}

impl<'a> GroupManager<'a> {
    /// Wrap any [`ApiCall`], usually an [`crate::SmsCenterClient`].
    pub fn new(api: &'a dyn ApiCall) -> Self {
        Self { api }
    }

    /// Create a group named `name`.
    pub async fn add(&self, name: &GroupName) -> Result<GroupResponse, SmsCenterError> {
        request(
            self.api,
            "group/add",
            transport::encode_group_name_params(name),
            FailureKind::Group,
            transport::decode_group_response,
        )
        .await
    }

    /// Delete a group.
    pub async fn delete(&self, group_id: &GroupId) -> Result<StatusOnlyResponse, SmsCenterError> {
        request(
            self.api,
            "group/delete",
            transport::encode_group_id_params(group_id),
            FailureKind::Group,
            transport::decode_status_only_response,
        )
        .await
    }

    /// All groups with their member counts.
    pub async fn list(&self) -> Result<GroupListResponse, SmsCenterError> {
        request(
            self.api,
            "group/list",
            Vec::new(),
            FailureKind::Group,
            transport::decode_group_list_response,
        )
        .await
    }

    /// Group name and member contacts.
    pub async fn get(&self, group_id: &GroupId) -> Result<GroupDetailResponse, SmsCenterError> {
        request(
            self.api,
            "group/get",
            transport::encode_group_id_params(group_id),
            FailureKind::Group,
            transport::decode_group_detail_response,
        )
        .await
    }

    /// Link a contact to a group. The response carries the link id that
    /// [`DeleteContact::Link`] accepts.
    pub async fn add_contact(
        &self,
        group_id: &GroupId,
        contact_id: &ContactId,
    ) -> Result<GroupContactLinkResponse, SmsCenterError> {
        request(
            self.api,
            "group/addContact",
            transport::encode_group_contact_params(group_id, contact_id),
            FailureKind::Group,
            transport::decode_group_contact_link_response,
        )
        .await
    }

    /// Remove a contact from a group, either by link id or by group and contact id.
    ///
    /// Use [`DeleteContact::from_parts`] to build the target from optional ids; it
    /// rejects ambiguous or incomplete combinations locally.
    pub async fn delete_contact(
        &self,
        target: &DeleteContact,
    ) -> Result<StatusOnlyResponse, SmsCenterError> {
        request(
            self.api,
            "group/deleteContact",
            transport::encode_delete_contact_params(target),
            FailureKind::Group,
            transport::decode_status_only_response,
        )
        .await
    }

    /// Remove every contact from the group.
    pub async fn delete_all_contacts(
        &self,
        group_id: &GroupId,
    ) -> Result<StatusOnlyResponse, SmsCenterError> {
        request(
            self.api,
            "group/deleteAllContacts",
            transport::encode_group_id_params(group_id),
            FailureKind::Group,
            transport::decode_status_only_response,
        )
        .await
    }
}
