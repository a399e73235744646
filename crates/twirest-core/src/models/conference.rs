//! Conference and participant resources

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::page::{ListItem, ListResponse};
use crate::text;

/// Conference record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "Conference", rename_all = "PascalCase", default)]
pub struct ConferenceResponse {
    pub sid: String,
    pub account_sid: String,
    pub friendly_name: String,

    /// `init`, `in-progress` or `completed`
    pub status: String,

    pub date_created: String,
    pub date_updated: String,
    pub uri: String,

    #[serde(
        rename = "SubResourceUris",
        alias = "SubresourceUris",
        skip_serializing_if = "Option::is_none"
    )]
    pub subresource_uris: Option<ConferenceSubresourceUris>,
}

/// Discovery links of a conference
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ConferenceSubresourceUris {
    pub participants: String,
}

/// Paginated list of conferences
pub type ConferencesResponse = ListResponse<ConferenceResponse>;

impl ListItem for ConferenceResponse {
    const ELEMENT: &'static str = "Conference";
}

impl ConferenceResponse {
    pub fn date_created_at(&self) -> Option<DateTime<FixedOffset>> {
        text::parse_date(&self.date_created)
    }

    pub fn date_updated_at(&self) -> Option<DateTime<FixedOffset>> {
        text::parse_date(&self.date_updated)
    }

    pub fn is_in_progress(&self) -> bool {
        self.status == "in-progress"
    }
}

/// Conference participant record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "Participant", rename_all = "PascalCase", default)]
pub struct ParticipantResponse {
    pub conference_sid: String,
    pub account_sid: String,
    pub call_sid: String,
    pub muted: String,
    pub end_conference_on_exit: String,
    pub start_conference_on_enter: String,
    pub date_created: String,
    pub date_updated: String,
    pub uri: String,
}

/// Paginated list of participants
pub type ParticipantsResponse = ListResponse<ParticipantResponse>;

impl ListItem for ParticipantResponse {
    const ELEMENT: &'static str = "Participant";
}

impl ParticipantResponse {
    pub fn is_muted(&self) -> Option<bool> {
        text::parse_flag(&self.muted)
    }

    pub fn ends_conference_on_exit(&self) -> Option<bool> {
        text::parse_flag(&self.end_conference_on_exit)
    }

    pub fn starts_conference_on_enter(&self) -> Option<bool> {
        text::parse_flag(&self.start_conference_on_enter)
    }

    pub fn date_created_at(&self) -> Option<DateTime<FixedOffset>> {
        text::parse_date(&self.date_created)
    }
}
