use super::{ApiCall, request};
use crate::client::{FailureKind, SmsCenterError};
use crate::domain::{GroupHistoryResponse, SingleHistoryResponse};
use crate::transport;

/// Sent message history (`history/*`).
pub struct HistoryManager<'a> {
    api: &'a dyn ApiCall,
}

impl<'a> HistoryManager<'a> {
    /// Wrap any [`ApiCall`], usually an [`crate::SmsCenterClient`].
    pub fn new(api: &'a dyn ApiCall) -> Self {
        Self { api }
    }

    /// Bulk sends, each with its individual messages.
    pub async fn group_list(&self) -> Result<GroupHistoryResponse, SmsCenterError> {
        request(
            self.api,
            "history/group/list",
            Vec::new(),
            FailureKind::Api,
            transport::decode_group_history_response,
        )
        .await
    }

    /// Individually sent messages.
    pub async fn single_list(&self) -> Result<SingleHistoryResponse, SmsCenterError> {
        request(
            self.api,
            "history/single/list",
            Vec::new(),
            FailureKind::Api,
            transport::decode_single_history_response,
        )
        .await
    }
}
