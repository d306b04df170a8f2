use serde::Deserialize;

use super::wire::{JsonObject, TransportError, WireText, decode, text};
use crate::domain::{HlrLookupResponse, Mobile, MobileCheckResponse, MobileInfo};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MobileInfoJson {
    #[serde(default)]
    cost: Option<WireText>,
    #[serde(default)]
    country: Option<WireText>,
    #[serde(default)]
    country_code: Option<WireText>,
    #[serde(default)]
    gsm_code: Option<WireText>,
    #[serde(default)]
    mcc: Option<WireText>,
    #[serde(default)]
    mnc: Option<WireText>,
    #[serde(default)]
    msisdn: Option<WireText>,
    #[serde(default)]
    national: Option<WireText>,
    #[serde(default)]
    number: Option<WireText>,
}

#[derive(Debug, Clone, Deserialize)]
struct MobileCheckJsonResponse {
    #[serde(default)]
    remarks: Option<String>,
    #[serde(default)]
    mobile: Option<MobileInfoJson>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct HlrLookupJsonResponse {
    #[serde(default)]
    remarks: Option<String>,
    #[serde(default)]
    result: Option<WireText>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    mcc: Option<WireText>,
    #[serde(default)]
    mnc: Option<WireText>,
    #[serde(default)]
    network: Option<WireText>,
    #[serde(default)]
    country: Option<WireText>,
    #[serde(default)]
    country_code: Option<WireText>,
    #[serde(default)]
    ported: Option<WireText>,
    #[serde(default)]
    cctld: Option<WireText>,
    #[serde(default)]
    mcc_initial: Option<WireText>,
    #[serde(default)]
    mnc_initial: Option<WireText>,
}

pub fn encode_mobile_params(mobile: &Mobile) -> Vec<(String, String)> {
    vec![(Mobile::FIELD.to_owned(), mobile.raw().to_owned())]
}

pub fn decode_mobile_check_response(
    object: &JsonObject,
) -> Result<MobileCheckResponse, TransportError> {
    let parsed: MobileCheckJsonResponse = decode(object)?;
    Ok(MobileCheckResponse {
        remarks: parsed.remarks,
        mobile: parsed.mobile.map(|info| MobileInfo {
            cost: text(info.cost),
            country: text(info.country),
            country_code: text(info.country_code),
            gsm_code: text(info.gsm_code),
            mcc: text(info.mcc),
            mnc: text(info.mnc),
            msisdn: text(info.msisdn),
            national: text(info.national),
            number: text(info.number),
        }),
    })
}

pub fn decode_hlr_lookup_response(
    object: &JsonObject,
) -> Result<HlrLookupResponse, TransportError> {
    let parsed: HlrLookupJsonResponse = decode(object)?;
    Ok(HlrLookupResponse {
        remarks: parsed.remarks,
        result: text(parsed.result),
        description: parsed.description,
        mcc: text(parsed.mcc),
        mnc: text(parsed.mnc),
        network: text(parsed.network),
        country: text(parsed.country),
        country_code: text(parsed.country_code),
        ported: text(parsed.ported),
        cctld: text(parsed.cctld),
        mcc_initial: text(parsed.mcc_initial),
        mnc_initial: text(parsed.mnc_initial),
    })
}
