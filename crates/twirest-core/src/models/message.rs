//! Message resource

use chrono::{DateTime, FixedOffset};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::page::{ListItem, ListResponse};
use crate::text;

/// SMS/MMS message record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "Message", rename_all = "PascalCase", default)]
pub struct MessageResponse {
    pub sid: String,
    pub date_created: String,
    pub date_updated: String,
    pub date_sent: String,
    pub account_sid: String,
    pub to: String,
    pub from: String,
    pub body: String,
    pub num_segments: String,
    pub status: String,
    pub direction: String,
    pub price: String,
    pub price_unit: String,
    pub api_version: String,
    pub uri: String,
}

/// Paginated list of messages
pub type MessagesResponse = ListResponse<MessageResponse>;

impl ListItem for MessageResponse {
    const ELEMENT: &'static str = "Message";
}

impl MessageResponse {
    pub fn date_created_at(&self) -> Option<DateTime<FixedOffset>> {
        text::parse_date(&self.date_created)
    }

    pub fn date_sent_at(&self) -> Option<DateTime<FixedOffset>> {
        text::parse_date(&self.date_sent)
    }

    pub fn segments(&self) -> Option<u32> {
        text::parse_u32(&self.num_segments)
    }

    pub fn price_amount(&self) -> Option<Decimal> {
        text::parse_decimal(&self.price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_message_accessors() {
        let message = MessageResponse {
            num_segments: "2".to_string(),
            price: "-0.00750".to_string(),
            date_sent: "Mon, 16 Aug 2010 03:45:01 +0000".to_string(),
            ..Default::default()
        };
        assert_eq!(message.segments(), Some(2));
        assert_eq!(message.price_amount(), Some(dec!(-0.0075)));
        assert!(message.date_sent_at().is_some());
        assert!(message.date_created_at().is_none());
    }

    #[test]
    fn test_queued_message_has_no_price() {
        let message = MessageResponse {
            status: "queued".to_string(),
            ..Default::default()
        };
        assert!(message.price_amount().is_none());
    }
}
