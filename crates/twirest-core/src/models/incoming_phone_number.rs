//! Incoming phone number resource

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use super::capabilities::CapabilitiesWire;
use crate::page::{ListItem, ListResponse};
use crate::text;

/// A phone number owned by the account
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "IncomingPhoneNumberWire", into = "IncomingPhoneNumberWire")]
pub struct IncomingPhoneNumberResponse {
    pub sid: String,
    pub account_sid: String,
    pub friendly_name: String,
    pub phone_number: String,
    pub voice_url: String,
    pub voice_method: String,
    pub voice_fallback_url: String,
    pub voice_fallback_method: String,
    pub status_callback: String,
    pub status_callback_method: String,
    pub voice_caller_id_lookup: String,
    pub voice_application_sid: String,
    pub date_created: String,
    pub date_updated: String,
    pub sms_url: String,
    pub sms_method: String,
    pub sms_fallback_url: String,
    pub sms_fallback_method: String,
    pub sms_application_sid: String,

    /// From `Capabilities/Voice`
    pub voice: String,
    /// From `Capabilities/SMS`
    pub sms: String,
    /// From `Capabilities/MMS`
    pub mms: String,
    /// From `Capabilities/Fax`
    pub fax: String,

    pub beta: String,
    pub api_version: String,
    pub uri: String,
}

/// Paginated list of incoming phone numbers
pub type IncomingPhoneNumbersResponse = ListResponse<IncomingPhoneNumberResponse>;

impl ListItem for IncomingPhoneNumberResponse {
    const ELEMENT: &'static str = "IncomingPhoneNumber";
}

impl IncomingPhoneNumberResponse {
    pub fn voice_enabled(&self) -> bool {
        text::parse_flag(&self.voice).unwrap_or(false)
    }

    pub fn sms_enabled(&self) -> bool {
        text::parse_flag(&self.sms).unwrap_or(false)
    }

    pub fn mms_enabled(&self) -> bool {
        text::parse_flag(&self.mms).unwrap_or(false)
    }

    pub fn fax_enabled(&self) -> bool {
        text::parse_flag(&self.fax).unwrap_or(false)
    }

    pub fn caller_id_lookup(&self) -> Option<bool> {
        text::parse_flag(&self.voice_caller_id_lookup)
    }

    pub fn date_created_at(&self) -> Option<DateTime<FixedOffset>> {
        text::parse_date(&self.date_created)
    }

    pub fn date_updated_at(&self) -> Option<DateTime<FixedOffset>> {
        text::parse_date(&self.date_updated)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename = "IncomingPhoneNumber", rename_all = "PascalCase", default)]
struct IncomingPhoneNumberWire {
    sid: String,
    account_sid: String,
    friendly_name: String,
    phone_number: String,
    voice_url: String,
    voice_method: String,
    voice_fallback_url: String,
    voice_fallback_method: String,
    status_callback: String,
    status_callback_method: String,
    voice_caller_id_lookup: String,
    voice_application_sid: String,
    date_created: String,
    date_updated: String,
    sms_url: String,
    sms_method: String,
    sms_fallback_url: String,
    sms_fallback_method: String,
    sms_application_sid: String,
    capabilities: CapabilitiesWire,
    beta: String,
    api_version: String,
    uri: String,
}

impl From<IncomingPhoneNumberWire> for IncomingPhoneNumberResponse {
    fn from(wire: IncomingPhoneNumberWire) -> Self {
        let caps = wire.capabilities;
        Self {
            sid: wire.sid,
            account_sid: wire.account_sid,
            friendly_name: wire.friendly_name,
            phone_number: wire.phone_number,
            voice_url: wire.voice_url,
            voice_method: wire.voice_method,
            voice_fallback_url: wire.voice_fallback_url,
            voice_fallback_method: wire.voice_fallback_method,
            status_callback: wire.status_callback,
            status_callback_method: wire.status_callback_method,
            voice_caller_id_lookup: wire.voice_caller_id_lookup,
            voice_application_sid: wire.voice_application_sid,
            date_created: wire.date_created,
            date_updated: wire.date_updated,
            sms_url: wire.sms_url,
            sms_method: wire.sms_method,
            sms_fallback_url: wire.sms_fallback_url,
            sms_fallback_method: wire.sms_fallback_method,
            sms_application_sid: wire.sms_application_sid,
            voice: caps.voice,
            sms: caps.sms,
            mms: caps.mms,
            fax: caps.fax,
            beta: wire.beta,
            api_version: wire.api_version,
            uri: wire.uri,
        }
    }
}

impl From<IncomingPhoneNumberResponse> for IncomingPhoneNumberWire {
    fn from(number: IncomingPhoneNumberResponse) -> Self {
        Self {
            capabilities: CapabilitiesWire::new(
                &number.voice,
                &number.sms,
                &number.mms,
                &number.fax,
            ),
            sid: number.sid,
            account_sid: number.account_sid,
            friendly_name: number.friendly_name,
            phone_number: number.phone_number,
            voice_url: number.voice_url,
            voice_method: number.voice_method,
            voice_fallback_url: number.voice_fallback_url,
            voice_fallback_method: number.voice_fallback_method,
            status_callback: number.status_callback,
            status_callback_method: number.status_callback_method,
            voice_caller_id_lookup: number.voice_caller_id_lookup,
            voice_application_sid: number.voice_application_sid,
            date_created: number.date_created,
            date_updated: number.date_updated,
            sms_url: number.sms_url,
            sms_method: number.sms_method,
            sms_fallback_url: number.sms_fallback_url,
            sms_fallback_method: number.sms_fallback_method,
            sms_application_sid: number.sms_application_sid,
            beta: number.beta,
            api_version: number.api_version,
            uri: number.uri,
        }
    }
}
