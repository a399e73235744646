//! Queue and queue member resources

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::page::{ListItem, ListResponse};
use crate::text;

/// Call queue record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "Queue", rename_all = "PascalCase", default)]
pub struct QueueResponse {
    pub sid: String,
    pub friendly_name: String,
    pub current_size: String,
    pub max_size: String,

    /// Average wait in seconds
    pub average_wait_time: String,

    pub date_created: String,
    pub date_updated: String,
    pub uri: String,
}

/// Paginated list of queues
pub type QueuesResponse = ListResponse<QueueResponse>;

impl ListItem for QueueResponse {
    const ELEMENT: &'static str = "Queue";
}

impl QueueResponse {
    pub fn current_size_count(&self) -> Option<u32> {
        text::parse_u32(&self.current_size)
    }

    pub fn max_size_count(&self) -> Option<u32> {
        text::parse_u32(&self.max_size)
    }

    pub fn average_wait_secs(&self) -> Option<u32> {
        text::parse_u32(&self.average_wait_time)
    }

    /// Check if the queue has reached its size limit
    pub fn is_full(&self) -> bool {
        match (self.current_size_count(), self.max_size_count()) {
            (Some(current), Some(max)) => current >= max,
            _ => false,
        }
    }

    pub fn date_created_at(&self) -> Option<DateTime<FixedOffset>> {
        text::parse_date(&self.date_created)
    }
}

/// A call waiting in a queue
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "QueueMember", rename_all = "PascalCase", default)]
pub struct QueueMemberResponse {
    pub call_sid: String,
    pub date_enqueued: String,
    pub wait_time: String,

    /// 1-based position in the queue
    pub position: String,
}

/// Paginated list of queue members
pub type QueueMembersResponse = ListResponse<QueueMemberResponse>;

impl ListItem for QueueMemberResponse {
    const ELEMENT: &'static str = "QueueMember";
}

impl QueueMemberResponse {
    pub fn date_enqueued_at(&self) -> Option<DateTime<FixedOffset>> {
        text::parse_date(&self.date_enqueued)
    }

    pub fn wait_secs(&self) -> Option<u32> {
        text::parse_u32(&self.wait_time)
    }

    pub fn queue_position(&self) -> Option<u32> {
        text::parse_u32(&self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_full() {
        let mut queue = QueueResponse {
            current_size: "100".to_string(),
            max_size: "100".to_string(),
            ..Default::default()
        };
        assert!(queue.is_full());

        queue.current_size = "3".to_string();
        assert!(!queue.is_full());

        queue.max_size = String::new();
        assert!(!queue.is_full());
    }

    #[test]
    fn test_member_accessors() {
        let member = QueueMemberResponse {
            wait_time: "143".to_string(),
            position: "1".to_string(),
            date_enqueued: "Mon, 17 Dec 2012 22:10:34 +0000".to_string(),
            ..Default::default()
        };
        assert_eq!(member.wait_secs(), Some(143));
        assert_eq!(member.queue_position(), Some(1));
        assert!(member.date_enqueued_at().is_some());
    }
}
