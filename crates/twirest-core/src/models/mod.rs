//! Resource records of the API
//!
//! Every field mirrors the API's text as-is (timestamps, durations, prices
//! and flags included). Absent elements leave fields empty.

pub mod account;
pub mod available_phone_number;
mod capabilities;
pub mod call;
pub mod conference;
pub mod incoming_phone_number;
pub mod message;
pub mod notification;
pub mod outgoing_caller_id;
pub mod queue;
pub mod recording;
pub mod usage_record;

pub use account::{AccountResponse, AccountSubresourceUris, AccountsResponse};
pub use available_phone_number::{AvailablePhoneNumber, AvailablePhoneNumbersResponse};
pub use call::{CallResponse, CallSubresourceUris, CallsResponse};
pub use conference::{
    ConferenceResponse, ConferenceSubresourceUris, ConferencesResponse, ParticipantResponse,
    ParticipantsResponse,
};
pub use incoming_phone_number::{IncomingPhoneNumberResponse, IncomingPhoneNumbersResponse};
pub use message::{MessageResponse, MessagesResponse};
pub use notification::{NotificationResponse, NotificationsResponse};
pub use outgoing_caller_id::{
    OutgoingCallerIdResponse, OutgoingCallerIdsResponse, ValidationRequestResponse,
};
pub use queue::{QueueMemberResponse, QueueMembersResponse, QueueResponse, QueuesResponse};
pub use recording::{RecordingAudio, RecordingResponse, RecordingsResponse};
pub use usage_record::{UsageRecordResponse, UsageRecordSubresourceUris, UsageRecordsResponse};
