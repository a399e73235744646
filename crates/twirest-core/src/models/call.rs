//! Call resource
//!
//! A call record mirrors the API's text for every field, including
//! timestamps, the duration and the price. Typed readings are available
//! through the accessor methods.

use chrono::{DateTime, FixedOffset};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::page::{ListItem, ListResponse};
use crate::text;

/// Call record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "Call", rename_all = "PascalCase", default)]
pub struct CallResponse {
    pub sid: String,

    /// Sid of the call that created this leg, if any
    pub parent_call_sid: String,

    pub date_created: String,
    pub date_updated: String,
    pub account_sid: String,
    pub to: String,
    pub from: String,
    pub phone_number_sid: String,

    /// `queued`, `ringing`, `in-progress`, `completed`, `failed`, `busy`,
    /// `no-answer` or `canceled`
    pub status: String,

    pub start_time: String,
    pub end_time: String,

    /// Length of the call in seconds
    pub duration: String,

    pub price: String,
    pub price_unit: String,
    pub direction: String,
    pub answered_by: String,
    pub forwarded_from: String,
    pub caller_name: String,
    pub uri: String,

    #[serde(
        rename = "SubResourceUris",
        alias = "SubresourceUris",
        skip_serializing_if = "Option::is_none"
    )]
    pub subresource_uris: Option<CallSubresourceUris>,
}

/// Discovery links of a call
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CallSubresourceUris {
    pub notifications: String,
    pub recordings: String,
}

/// Paginated list of calls
pub type CallsResponse = ListResponse<CallResponse>;

impl ListItem for CallResponse {
    const ELEMENT: &'static str = "Call";
}

impl CallResponse {
    pub fn date_created_at(&self) -> Option<DateTime<FixedOffset>> {
        text::parse_date(&self.date_created)
    }

    pub fn date_updated_at(&self) -> Option<DateTime<FixedOffset>> {
        text::parse_date(&self.date_updated)
    }

    pub fn start_time_at(&self) -> Option<DateTime<FixedOffset>> {
        text::parse_date(&self.start_time)
    }

    pub fn end_time_at(&self) -> Option<DateTime<FixedOffset>> {
        text::parse_date(&self.end_time)
    }

    pub fn duration_secs(&self) -> Option<u32> {
        text::parse_u32(&self.duration)
    }

    /// Price of the call; negative for charges
    pub fn price_amount(&self) -> Option<Decimal> {
        text::parse_decimal(&self.price)
    }

    /// Check if the call has reached a final status
    pub fn is_finished(&self) -> bool {
        matches!(
            self.status.as_str(),
            "completed" | "failed" | "busy" | "no-answer" | "canceled"
        )
    }

    /// Check if this is an outbound call (`outbound-api` or `outbound-dial`)
    pub fn is_outbound(&self) -> bool {
        self.direction.starts_with("outbound")
    }

    /// Check if this is an inbound call
    pub fn is_inbound(&self) -> bool {
        self.direction == "inbound"
    }

    /// Get duration for display as `mm:ss`
    pub fn display_duration(&self) -> Option<String> {
        self.duration_secs()
            .map(|secs| format!("{:02}:{:02}", secs / 60, secs % 60))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;
    use rust_decimal_macros::dec;

    fn completed_call() -> CallResponse {
        CallResponse {
            sid: "CA42ed11f93dc08b952027ffbc406d0868".to_string(),
            status: "completed".to_string(),
            start_time: "Tue, 10 Aug 2010 08:02:17 +0000".to_string(),
            end_time: "Tue, 10 Aug 2010 08:02:31 +0000".to_string(),
            duration: "125".to_string(),
            price: "-0.03000".to_string(),
            direction: "outbound-api".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_typed_accessors() {
        let call = completed_call();
        assert_eq!(call.duration_secs(), Some(125));
        assert_eq!(call.price_amount(), Some(dec!(-0.03)));
        assert_eq!(call.start_time_at().unwrap().second(), 17);
        assert_eq!(call.display_duration().as_deref(), Some("02:05"));
    }

    #[test]
    fn test_raw_text_untouched() {
        let call = completed_call();
        assert_eq!(call.price, "-0.03000");
        assert_eq!(call.duration, "125");
    }

    #[test]
    fn test_missing_values() {
        let call = CallResponse::default();
        assert!(call.duration_secs().is_none());
        assert!(call.price_amount().is_none());
        assert!(call.end_time_at().is_none());
        assert!(call.display_duration().is_none());
    }

    #[test]
    fn test_direction_and_status() {
        let mut call = completed_call();
        assert!(call.is_finished());
        assert!(call.is_outbound());
        assert!(!call.is_inbound());

        call.status = "in-progress".to_string();
        call.direction = "inbound".to_string();
        assert!(!call.is_finished());
        assert!(call.is_inbound());
    }
}
