//! Domain layer: strong types with validation and invariants (no I/O).

mod date;
mod request;
mod response;
mod validation;
mod value;

pub use date::{ContactDate, Timestamp};
pub use request::{
    BulkOptions, BulkSms, ContactFields, DateLike, DeleteContact, SendOptions, SendSms,
    TwoFactorOptions,
};
pub use response::{
    BalanceResponse, BulkSmsResponse, BulkSmsResult, CancelSmsResponse, Contact,
    ContactDetailResponse, ContactListResponse, ContactSavedResponse, DeliveryReport,
    DeliveryReportsResponse, GroupContactLinkResponse, GroupDetailResponse,
    GroupHistoryResponse, GroupListResponse, GroupResponse, GroupSummary, HistoryGroup,
    HistorySms, HlrLookupResponse, KeyResponse, MobileCheckResponse, MobileInfo, Purchase,
    PurchaseListResponse, SendSmsResponse, SingleHistoryResponse, SmsStatusResponse,
    StatusOnlyResponse, SubAccount, TwoFactorCheckResponse, TwoFactorSendResponse,
    UserBalance, UserComment, UserCommentListResponse, UserCommentResponse, UserListResponse,
    UserResponse,
};
pub use validation::ValidationError;
pub use value::{
    ApiKey, AuthId, CallbackUrl, CommentId, ContactGroupId, ContactId, Email, GroupId,
    GroupName, MessageText, Mobile, Password, PhoneNumber, SenderId, SmsId, UserId, Username,
};
