//! Outgoing caller id resource and its validation request

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::page::{ListItem, ListResponse};
use crate::text;

/// Verified caller id record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "OutgoingCallerId", rename_all = "PascalCase", default)]
pub struct OutgoingCallerIdResponse {
    pub sid: String,
    pub date_created: String,
    pub date_updated: String,
    pub friendly_name: String,
    pub account_sid: String,
    pub phone_number: String,
    pub uri: String,
}

/// Paginated list of outgoing caller ids
pub type OutgoingCallerIdsResponse = ListResponse<OutgoingCallerIdResponse>;

impl ListItem for OutgoingCallerIdResponse {
    const ELEMENT: &'static str = "OutgoingCallerId";
}

impl OutgoingCallerIdResponse {
    pub fn date_created_at(&self) -> Option<DateTime<FixedOffset>> {
        text::parse_date(&self.date_created)
    }
}

/// Response to adding an outgoing caller id
///
/// The validation code must be entered on the verification call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "ValidationRequest", rename_all = "PascalCase", default)]
pub struct ValidationRequestResponse {
    pub account_sid: String,
    pub phone_number: String,
    pub friendly_name: String,
    pub validation_code: String,
    pub call_sid: String,
}
