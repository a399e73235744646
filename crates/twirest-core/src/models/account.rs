//! Account resource

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::page::{ListItem, ListResponse};
use crate::text;

/// Account record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "Account", rename_all = "PascalCase", default)]
pub struct AccountResponse {
    pub sid: String,
    pub date_created: String,
    pub date_updated: String,
    pub friendly_name: String,

    /// `Full` or `Trial`
    #[serde(rename = "Type")]
    pub account_type: String,

    /// `active`, `suspended` or `closed`
    pub status: String,

    pub auth_token: String,
    pub uri: String,
    pub owner_account_sid: String,

    #[serde(
        rename = "SubResourceUris",
        alias = "SubresourceUris",
        skip_serializing_if = "Option::is_none"
    )]
    pub subresource_uris: Option<AccountSubresourceUris>,
}

/// Discovery links of an account
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AccountSubresourceUris {
    pub available_phone_numbers: String,
    pub calls: String,
    pub conferences: String,
    pub incoming_phone_numbers: String,
    pub notifications: String,
    pub outgoing_caller_ids: String,
    pub recordings: String,
    pub transcriptions: String,

    #[serde(rename = "SMSMessages")]
    pub sms_messages: String,
}

/// Paginated list of accounts
pub type AccountsResponse = ListResponse<AccountResponse>;

impl ListItem for AccountResponse {
    const ELEMENT: &'static str = "Account";
}

impl AccountResponse {
    pub fn date_created_at(&self) -> Option<DateTime<FixedOffset>> {
        text::parse_date(&self.date_created)
    }

    pub fn date_updated_at(&self) -> Option<DateTime<FixedOffset>> {
        text::parse_date(&self.date_updated)
    }

    /// Check if the account is active
    pub fn is_active(&self) -> bool {
        self.status.eq_ignore_ascii_case("active")
    }

    /// Check if this is a subaccount of another account
    pub fn is_subaccount(&self) -> bool {
        !self.owner_account_sid.is_empty() && self.owner_account_sid != self.sid
    }
}
