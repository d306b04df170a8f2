use super::{ApiCall, request};
use crate::client::{FailureKind, SmsCenterError};
use crate::domain::{
    CommentId, Email, Password, StatusOnlyResponse, UserCommentListResponse, UserCommentResponse,
    UserId, UserListResponse, UserResponse, ValidationError,
};
use crate::transport;

/// Sub-accounts and their comments (`user/*`).
pub struct UserManager<'a> {
    api: &'a dyn ApiCall,
}

impl<'a> UserManager<'a> {
    /// Wrap any [`ApiCall`], usually an [`crate::SmsCenterClient`].
    pub fn new(api: &'a dyn ApiCall) -> Self {
        Self { api }
    }

    /// Create a sub-account. The email is validated when [`Email`] is built.
    pub async fn add(
        &self,
        email: &Email,
        password: &Password,
    ) -> Result<UserResponse, SmsCenterError> {
        request(
            self.api,
            "user/add",
            transport::encode_add_user_params(email, password),
            FailureKind::User,
            transport::decode_user_response,
        )
        .await
    }

    /// All sub-accounts.
    pub async fn list(&self) -> Result<UserListResponse, SmsCenterError> {
        request(
            self.api,
            "user/list",
            Vec::new(),
            FailureKind::User,
            transport::decode_user_list_response,
        )
        .await
    }

    /// Move `sms` credits costing `cost` to the sub-account.
    pub async fn topup(
        &self,
        user_id: &UserId,
        sms: u32,
        cost: &str,
    ) -> Result<UserResponse, SmsCenterError> {
        let cost = cost.trim();
        if cost.is_empty() {
            return Err(ValidationError::Empty { field: "cost" }.into());
        }
        request(
            self.api,
            "user/topup",
            transport::encode_topup_params(user_id, sms, cost),
            FailureKind::User,
            transport::decode_user_response,
        )
        .await
    }

    /// Attach a comment to a sub-account.
    pub async fn add_comment(
        &self,
        user_id: &UserId,
        comment: &str,
    ) -> Result<UserCommentResponse, SmsCenterError> {
        if comment.trim().is_empty() {
            return Err(ValidationError::Empty { field: "comment" }.into());
        }
        request(
            self.api,
            "user/comment/add",
            transport::encode_add_comment_params(user_id, comment),
            FailureKind::UserComment,
            transport::decode_user_comment_response,
        )
        .await
    }

    /// Delete a sub-account comment.
    pub async fn delete_comment(
        &self,
        comment_id: &CommentId,
    ) -> Result<StatusOnlyResponse, SmsCenterError> {
        request(
            self.api,
            "user/comment/delete",
            transport::encode_comment_id_params(comment_id),
            FailureKind::Api,
            transport::decode_status_only_response,
        )
        .await
    }

    /// Comments attached to a sub-account.
    pub async fn comments(
        &self,
        user_id: &UserId,
    ) -> Result<UserCommentListResponse, SmsCenterError> {
        request(
            self.api,
            "user/comment/list",
            transport::encode_user_id_params(user_id),
            FailureKind::Api,
            transport::decode_user_comment_list_response,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::super::testing::{FakeApi, error_response, pairs};
    use super::*;

    #[tokio::test]
    async fn add_sends_email_and_password() {
        let api = FakeApi::returning(json!({
            "status": "1",
            "remarks": "Success",
            "user": {"userId": "7", "balance": 0}
        }));

        let response = UserManager::new(&api)
            .add(
                &Email::new("sub@example.com").unwrap(),
                &Password::new("secret").unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.user.and_then(|it| it.user_id).as_deref(), Some("7"));

        let (endpoint, params) = api.last_call();
        assert_eq!(endpoint, "user/add");
        assert_eq!(
            params,
            pairs(&[("email", "sub@example.com"), ("password", "secret")])
        );
    }

    #[test]
    fn invalid_email_fails_before_any_request() {
        let err = Email::new("invalid-email").map_err(SmsCenterError::from).unwrap_err();
        match err {
            SmsCenterError::Validation(ValidationError::InvalidEmail { input }) => {
                assert_eq!(input, "invalid-email");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn add_failure_is_user_error() {
        let api = FakeApi::returning(error_response("80", "Email already exists"));
        let err = UserManager::new(&api)
            .add(
                &Email::new("sub@example.com").unwrap(),
                &Password::new("secret").unwrap(),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, SmsCenterError::User(_)));
    }

    #[tokio::test]
    async fn list_reads_indexed_sub_accounts() {
        let api = FakeApi::returning(json!({
            "status": "1",
            "total": "1",
            "0": {"userId": "7", "username": "sub", "balance": "10"}
        }));
        let response = UserManager::new(&api).list().await.unwrap();
        assert_eq!(response.users[0].username.as_deref(), Some("sub"));
        assert_eq!(api.last_call().0, "user/list");
    }

    #[tokio::test]
    async fn topup_sends_amounts() {
        let api = FakeApi::returning(json!({"status": "1", "user": {"userId": "7", "balance": 100}}));
        UserManager::new(&api)
            .topup(&UserId::new("7").unwrap(), 100, "5.00")
            .await
            .unwrap();

        let (endpoint, params) = api.last_call();
        assert_eq!(endpoint, "user/topup");
        assert_eq!(
            params,
            pairs(&[("userId", "7"), ("sms", "100"), ("cost", "5.00")])
        );
    }

    #[tokio::test]
    async fn comment_failures_use_their_own_kinds() {
        let api = FakeApi::returning(error_response("90", "Comment rejected"));
        let err = UserManager::new(&api)
            .add_comment(&UserId::new("7").unwrap(), "VIP customer")
            .await
            .unwrap_err();
        assert!(matches!(err, SmsCenterError::UserComment(_)));
        assert_eq!(
            api.last_call().1,
            pairs(&[("userId", "7"), ("comment", "VIP customer")])
        );

        let api = FakeApi::returning(error_response("91", "No such comment"));
        let err = UserManager::new(&api)
            .delete_comment(&CommentId::new("3").unwrap())
            .await
            .unwrap_err();
        assert!(matches!(err, SmsCenterError::Api(_)));
        assert_eq!(api.last_call().0, "user/comment/delete");
    }

    #[tokio::test]
    async fn comments_lists_by_user() {
        let api = FakeApi::returning(json!({
            "status": "1",
            "total": "1",
            "comments": [{"commentId": "3", "comment": "VIP", "timestamp": "1700000000"}]
        }));
        let response = UserManager::new(&api)
            .comments(&UserId::new("7").unwrap())
            .await
            .unwrap();
        assert_eq!(response.comments[0].comment_id.as_deref(), Some("3"));
        assert_eq!(
            api.last_call(),
            ("user/comment/list".to_owned(), pairs(&[("userId", "7")]))
        );
    }
}
