//! Notification resource (debugger log entries)

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::page::{ListItem, ListResponse};
use crate::text;

/// Notification record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "Notification", rename_all = "PascalCase", default)]
pub struct NotificationResponse {
    pub sid: String,
    pub date_created: String,
    pub date_updated: String,
    pub account_sid: String,
    pub call_sid: String,
    pub api_version: String,

    /// `0` for errors, `1` for warnings
    pub log: String,

    pub error_code: String,
    pub more_info: String,
    pub message_text: String,
    pub message_date: String,
    pub request_url: String,
    pub request_method: String,
    pub uri: String,

    // Only present when a single notification is read.
    pub request_variables: String,
    pub response_headers: String,
    pub response_body: String,
}

/// Paginated list of notifications
pub type NotificationsResponse = ListResponse<NotificationResponse>;

impl ListItem for NotificationResponse {
    const ELEMENT: &'static str = "Notification";
}

impl NotificationResponse {
    pub fn is_error(&self) -> bool {
        self.log == "0"
    }

    pub fn is_warning(&self) -> bool {
        self.log == "1"
    }

    pub fn message_date_at(&self) -> Option<DateTime<FixedOffset>> {
        text::parse_date(&self.message_date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level() {
        let mut notification = NotificationResponse {
            log: "0".to_string(),
            ..Default::default()
        };
        assert!(notification.is_error());
        assert!(!notification.is_warning());

        notification.log = "1".to_string();
        assert!(notification.is_warning());
    }
}
