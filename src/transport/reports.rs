use serde::Deserialize;

use super::wire::{
    JsonObject, TransportError, WireText, decode, indexed_rows, lenient_list, text,
};
use crate::domain::{
    DeliveryReport, DeliveryReportsResponse, GroupHistoryResponse, HistoryGroup, HistorySms,
    SingleHistoryResponse, SmsId, SmsStatusResponse,
};

#[derive(Debug, Clone, Deserialize)]
struct EnvelopeJson {
    #[serde(default)]
    remarks: Option<String>,
    #[serde(default)]
    total: Option<WireText>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DeliveryReportJson {
    #[serde(default)]
    id: Option<WireText>,
    #[serde(default)]
    sms_id: Option<WireText>,
    #[serde(default)]
    status: Option<WireText>,
    #[serde(default)]
    cost: Option<WireText>,
    #[serde(default)]
    ttd: Option<WireText>,
}

impl From<DeliveryReportJson> for DeliveryReport {
    fn from(value: DeliveryReportJson) -> Self {
        Self {
            id: text(value.id),
            sms_id: text(value.sms_id),
            status: text(value.status),
            cost: text(value.cost),
            ttd: text(value.ttd),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct SmsStatusJsonResponse {
    #[serde(default)]
    remarks: Option<String>,
    #[serde(default)]
    sms: Option<DeliveryReportJson>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct HistorySmsJson {
    #[serde(default)]
    sms_id: Option<WireText>,
    #[serde(default)]
    sender: Option<WireText>,
    #[serde(default)]
    flash: Option<WireText>,
    #[serde(default)]
    unicode: Option<WireText>,
    #[serde(default)]
    to: Option<WireText>,
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    timestamp: Option<WireText>,
    #[serde(default)]
    status: Option<WireText>,
    #[serde(default)]
    cost: Option<WireText>,
    #[serde(default)]
    ttd: Option<WireText>,
    #[serde(default)]
    contact_id: Option<WireText>,
}

impl From<HistorySmsJson> for HistorySms {
    fn from(value: HistorySmsJson) -> Self {
        Self {
            sms_id: text(value.sms_id),
            sender: text(value.sender),
            flash: text(value.flash),
            unicode: text(value.unicode),
            to: text(value.to),
            text: value.text,
            timestamp: text(value.timestamp),
            status: text(value.status),
            cost: text(value.cost),
            ttd: text(value.ttd),
            contact_id: text(value.contact_id),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct SingleHistoryJsonResponse {
    #[serde(default)]
    remarks: Option<String>,
    #[serde(default)]
    total: Option<WireText>,
    #[serde(default, deserialize_with = "lenient_list")]
    sms: Vec<HistorySmsJson>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct HistoryGroupJson {
    #[serde(default)]
    group_id: Option<WireText>,
    #[serde(default)]
    sender: Option<WireText>,
    #[serde(default)]
    flash: Option<WireText>,
    #[serde(default)]
    unicode: Option<WireText>,
    #[serde(default)]
    timestamp: Option<WireText>,
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    total: Option<WireText>,
    #[serde(default)]
    cost: Option<WireText>,
    #[serde(default, deserialize_with = "lenient_list")]
    sms: Vec<HistorySmsJson>,
}

pub fn encode_sms_status_params(sms_id: &SmsId) -> Vec<(String, String)> {
    vec![(SmsId::FIELD.to_owned(), sms_id.as_str().to_owned())]
}

pub fn decode_delivery_reports_response(
    object: &JsonObject,
) -> Result<DeliveryReportsResponse, TransportError> {
    let envelope: EnvelopeJson = decode(object)?;
    let rows: Vec<DeliveryReportJson> = indexed_rows(object)?;
    Ok(DeliveryReportsResponse {
        remarks: envelope.remarks,
        total: text(envelope.total),
        reports: rows.into_iter().map(DeliveryReport::from).collect(),
    })
}

/// The report comes under `sms`; older responses only carry it under index `"0"`.
pub fn decode_sms_status_response(
    object: &JsonObject,
) -> Result<SmsStatusResponse, TransportError> {
    let parsed: SmsStatusJsonResponse = decode(object)?;
    let report = match parsed.sms {
        Some(report) => Some(report),
        None => indexed_rows::<DeliveryReportJson>(object)?.into_iter().next(),
    };
    Ok(SmsStatusResponse {
        remarks: parsed.remarks,
        report: report.map(DeliveryReport::from),
    })
}

pub fn decode_single_history_response(
    object: &JsonObject,
) -> Result<SingleHistoryResponse, TransportError> {
    let parsed: SingleHistoryJsonResponse = decode(object)?;
    Ok(SingleHistoryResponse {
        remarks: parsed.remarks,
        total: text(parsed.total),
        sms: parsed.sms.into_iter().map(HistorySms::from).collect(),
    })
}

pub fn decode_group_history_response(
    object: &JsonObject,
) -> Result<GroupHistoryResponse, TransportError> {
    let envelope: EnvelopeJson = decode(object)?;
    let rows: Vec<HistoryGroupJson> = indexed_rows(object)?;
    Ok(GroupHistoryResponse {
        remarks: envelope.remarks,
        total: text(envelope.total),
        groups: rows
            .into_iter()
            .map(|group| HistoryGroup {
                group_id: text(group.group_id),
                sender: text(group.sender),
                flash: text(group.flash),
                unicode: text(group.unicode),
                timestamp: text(group.timestamp),
                text: group.text,
                total: text(group.total),
                cost: text(group.cost),
                sms: group.sms.into_iter().map(HistorySms::from).collect(),
            })
            .collect(),
    })
}
