//! Typed views of successful SMSCenter responses.
//!
//! Every field the gateway may omit is an `Option`. Numeric values that the gateway
//! sends either as JSON numbers or strings are kept as text.

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Response carrying only the status envelope.
pub struct StatusOnlyResponse {
    pub remarks: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalanceResponse {
    pub remarks: Option<String>,
    pub balance: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MobileCheckResponse {
    pub remarks: Option<String>,
    pub mobile: Option<MobileInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MobileInfo {
    pub cost: Option<String>,
    pub country: Option<String>,
    pub country_code: Option<String>,
    pub gsm_code: Option<String>,
    pub mcc: Option<String>,
    pub mnc: Option<String>,
    pub msisdn: Option<String>,
    pub national: Option<String>,
    pub number: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendSmsResponse {
    pub remarks: Option<String>,
    pub id: Option<String>,
    pub cost: Option<String>,
    pub balance: Option<String>,
    pub mcc: Option<String>,
    pub mnc: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulkSmsResponse {
    pub remarks: Option<String>,
    pub ids: Vec<String>,
    pub sms: Vec<BulkSmsResult>,
    pub balance: Option<String>,
    pub cost: Option<String>,
    pub accepted: Option<String>,
    pub rejected: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulkSmsResult {
    pub id: Option<String>,
    pub sms_id: Option<String>,
    pub msisdn: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CancelSmsResponse {
    pub remarks: Option<String>,
    pub sms_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Response of `contact/add` and `contact/update`.
pub struct ContactSavedResponse {
    pub remarks: Option<String>,
    pub contact_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Contact {
    pub contact_id: Option<String>,
    pub mobile: Option<String>,
    pub sms_cost: Option<String>,
    pub name: Option<String>,
    pub surname: Option<String>,
    pub vname: Option<String>,
    pub birthday: Option<String>,
    pub nameday: Option<String>,
    pub custom1: Option<String>,
    pub custom2: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactListResponse {
    pub remarks: Option<String>,
    pub total: Option<String>,
    pub contacts: Vec<Contact>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactDetailResponse {
    pub remarks: Option<String>,
    pub contact: Option<Contact>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Response of `group/add` and `group/delete`.
pub struct GroupResponse {
    pub remarks: Option<String>,
    pub group_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupSummary {
    pub group_id: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupListResponse {
    pub remarks: Option<String>,
    pub total: Option<String>,
    pub groups: Vec<GroupSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupDetailResponse {
    pub remarks: Option<String>,
    pub name: Option<String>,
    pub total: Option<String>,
    pub contacts: Vec<Contact>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupContactLinkResponse {
    pub remarks: Option<String>,
    pub contact_group_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HistorySms {
    pub sms_id: Option<String>,
    pub sender: Option<String>,
    pub flash: Option<String>,
    pub unicode: Option<String>,
    pub to: Option<String>,
    pub text: Option<String>,
    pub timestamp: Option<String>,
    pub status: Option<String>,
    pub cost: Option<String>,
    pub ttd: Option<String>,
    pub contact_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SingleHistoryResponse {
    pub remarks: Option<String>,
    pub total: Option<String>,
    pub sms: Vec<HistorySms>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryGroup {
    pub group_id: Option<String>,
    pub sender: Option<String>,
    pub flash: Option<String>,
    pub unicode: Option<String>,
    pub timestamp: Option<String>,
    pub text: Option<String>,
    pub total: Option<String>,
    pub cost: Option<String>,
    pub sms: Vec<HistorySms>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupHistoryResponse {
    pub remarks: Option<String>,
    pub total: Option<String>,
    pub groups: Vec<HistoryGroup>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryReport {
    pub id: Option<String>,
    pub sms_id: Option<String>,
    /// Gateway status letter, e.g. `d` (delivered), `s` (sent), `f` (failed).
    pub status: Option<String>,
    pub cost: Option<String>,
    pub ttd: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryReportsResponse {
    pub remarks: Option<String>,
    pub total: Option<String>,
    pub reports: Vec<DeliveryReport>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmsStatusResponse {
    pub remarks: Option<String>,
    pub report: Option<DeliveryReport>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Purchase {
    pub purchase_id: Option<String>,
    pub timestamp: Option<String>,
    pub cost: Option<String>,
    pub sms: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurchaseListResponse {
    pub remarks: Option<String>,
    pub total: Option<String>,
    pub purchases: Vec<Purchase>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HlrLookupResponse {
    pub remarks: Option<String>,
    pub result: Option<String>,
    pub description: Option<String>,
    pub mcc: Option<String>,
    pub mnc: Option<String>,
    pub network: Option<String>,
    pub country: Option<String>,
    pub country_code: Option<String>,
    pub ported: Option<String>,
    pub cctld: Option<String>,
    pub mcc_initial: Option<String>,
    pub mnc_initial: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TwoFactorSendResponse {
    pub remarks: Option<String>,
    pub auth_id: Option<String>,
    pub auth_status: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TwoFactorCheckResponse {
    pub remarks: Option<String>,
    pub auth: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserBalance {
    pub user_id: Option<String>,
    pub balance: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Response of `user/add` and `user/topup`.
pub struct UserResponse {
    pub remarks: Option<String>,
    pub user: Option<UserBalance>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubAccount {
    pub user_id: Option<String>,
    pub username: Option<String>,
    pub email: Option<String>,
    pub balance: Option<String>,
    pub mobile: Option<String>,
    /// Sub-account API key; `None` until one is issued.
    pub key: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserListResponse {
    pub remarks: Option<String>,
    pub total: Option<String>,
    pub users: Vec<SubAccount>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserCommentResponse {
    pub remarks: Option<String>,
    pub comment_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserComment {
    pub comment_id: Option<String>,
    pub comment: Option<String>,
    pub timestamp: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserCommentListResponse {
    pub remarks: Option<String>,
    pub total: Option<String>,
    pub comments: Vec<UserComment>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyResponse {
    pub remarks: Option<String>,
    pub key: Option<String>,
}
