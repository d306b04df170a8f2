//! Transport layer: wire-format details (query encoding, JSON decoding).

mod account;
mod contact;
mod group;
mod lookup;
mod reports;
mod sms;
mod two_factor;
mod user;
mod wire;

pub use account::{
    decode_balance_response, decode_key_response, decode_purchase_list_response,
    decode_status_only_response, encode_key_params,
};
pub use contact::{
    decode_contact_detail_response, decode_contact_list_response, decode_contact_saved_response,
    encode_add_contact_params, encode_contact_id_params, encode_update_contact_params,
};
pub use group::{
    decode_group_contact_link_response, decode_group_detail_response, decode_group_list_response,
    decode_group_response, encode_delete_contact_params, encode_group_contact_params,
    encode_group_id_params, encode_group_name_params,
};
pub use lookup::{decode_hlr_lookup_response, decode_mobile_check_response, encode_mobile_params};
pub use reports::{
    decode_delivery_reports_response, decode_group_history_response,
    decode_single_history_response, decode_sms_status_response, encode_sms_status_params,
};
pub use sms::{
    decode_bulk_sms_response, decode_cancel_sms_response, decode_send_sms_response,
    encode_bulk_sms_params, encode_cancel_sms_params, encode_send_sms_params,
};
pub use two_factor::{
    decode_two_factor_check_response, decode_two_factor_send_response,
    encode_two_factor_check_params, encode_two_factor_send_params,
};
pub use user::{
    decode_user_comment_list_response, decode_user_comment_response, decode_user_list_response,
    decode_user_response, encode_add_comment_params, encode_add_user_params,
    encode_comment_id_params, encode_topup_params, encode_user_id_params,
};
pub use wire::{JsonObject, TransportError, failure, is_invalid_key, parse_object};
