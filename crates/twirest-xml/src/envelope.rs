//! Wire shape of the `<TwilioResponse>` document
//!
//! On the wire every resource is an optional child of the root element.
//! Decoding reads them all as options and keeps the first one present;
//! encoding writes exactly the one the body holds.

use serde::ser::{Error as _, SerializeStruct};
use serde::{Deserialize, Serialize, Serializer};
use tracing::warn;
use twirest_core::models::*;
use twirest_core::{ExceptionResponse, ResponseBody};

pub(crate) const ROOT_ELEMENT: &str = "TwilioResponse";

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct EnvelopeWire {
    #[serde(rename = "Accounts")]
    accounts: Option<AccountsResponse>,
    #[serde(rename = "Account")]
    account: Option<AccountResponse>,
    #[serde(rename = "AvailablePhoneNumbers")]
    available_phone_numbers: Option<AvailablePhoneNumbersResponse>,
    #[serde(rename = "Calls")]
    calls: Option<CallsResponse>,
    #[serde(rename = "Call")]
    call: Option<CallResponse>,
    #[serde(rename = "Conferences")]
    conferences: Option<ConferencesResponse>,
    #[serde(rename = "Conference")]
    conference: Option<ConferenceResponse>,
    #[serde(rename = "RestException")]
    exception: Option<ExceptionResponse>,
    #[serde(rename = "IncomingPhoneNumbers")]
    incoming_phone_numbers: Option<IncomingPhoneNumbersResponse>,
    #[serde(rename = "IncomingPhoneNumber")]
    incoming_phone_number: Option<IncomingPhoneNumberResponse>,
    #[serde(rename = "Messages")]
    messages: Option<MessagesResponse>,
    #[serde(rename = "Message")]
    message: Option<MessageResponse>,
    #[serde(rename = "Notifications")]
    notifications: Option<NotificationsResponse>,
    #[serde(rename = "Notification")]
    notification: Option<NotificationResponse>,
    #[serde(rename = "OutgoingCallerIds")]
    outgoing_caller_ids: Option<OutgoingCallerIdsResponse>,
    #[serde(rename = "OutgoingCallerId")]
    outgoing_caller_id: Option<OutgoingCallerIdResponse>,
    #[serde(rename = "Participants")]
    participants: Option<ParticipantsResponse>,
    #[serde(rename = "Participant")]
    participant: Option<ParticipantResponse>,
    #[serde(rename = "Recordings")]
    recordings: Option<RecordingsResponse>,
    #[serde(rename = "Recording")]
    recording: Option<RecordingResponse>,
    #[serde(rename = "Queues")]
    queues: Option<QueuesResponse>,
    #[serde(rename = "Queue")]
    queue: Option<QueueResponse>,
    #[serde(rename = "QueueMembers")]
    queue_members: Option<QueueMembersResponse>,
    #[serde(rename = "QueueMember")]
    queue_member: Option<QueueMemberResponse>,
    #[serde(rename = "UsageRecords")]
    usage_records: Option<UsageRecordsResponse>,
    #[serde(rename = "ValidationRequest")]
    validation_request: Option<ValidationRequestResponse>,
}

impl EnvelopeWire {
    /// Collapse the optional children into a single body
    pub(crate) fn into_body(self) -> ResponseBody {
        let candidates = [
            self.accounts.map(ResponseBody::Accounts),
            self.account.map(ResponseBody::Account),
            self.available_phone_numbers
                .map(ResponseBody::AvailablePhoneNumbers),
            self.calls.map(ResponseBody::Calls),
            self.call.map(ResponseBody::Call),
            self.conferences.map(ResponseBody::Conferences),
            self.conference.map(ResponseBody::Conference),
            self.exception.map(ResponseBody::Exception),
            self.incoming_phone_numbers
                .map(ResponseBody::IncomingPhoneNumbers),
            self.incoming_phone_number
                .map(ResponseBody::IncomingPhoneNumber),
            self.messages.map(ResponseBody::Messages),
            self.message.map(ResponseBody::Message),
            self.notifications.map(ResponseBody::Notifications),
            self.notification.map(ResponseBody::Notification),
            self.outgoing_caller_ids.map(ResponseBody::OutgoingCallerIds),
            self.outgoing_caller_id.map(ResponseBody::OutgoingCallerId),
            self.participants.map(ResponseBody::Participants),
            self.participant.map(ResponseBody::Participant),
            self.recordings.map(ResponseBody::Recordings),
            self.recording.map(ResponseBody::Recording),
            self.queues.map(ResponseBody::Queues),
            self.queue.map(ResponseBody::Queue),
            self.queue_members.map(ResponseBody::QueueMembers),
            self.queue_member.map(ResponseBody::QueueMember),
            self.usage_records.map(ResponseBody::UsageRecords),
            self.validation_request.map(ResponseBody::ValidationRequest),
        ];

        let mut present = candidates.into_iter().flatten();
        let Some(body) = present.next() else {
            return ResponseBody::Empty;
        };

        let ignored: Vec<String> = present
            .filter_map(|extra| extra.kind())
            .map(|kind| kind.to_string())
            .collect();
        if !ignored.is_empty() {
            warn!(
                kept = ?body.kind(),
                ignored = ?ignored,
                "Response carried more than one resource element"
            );
        }

        body
    }
}

/// Borrowing serializer for a body inside `<TwilioResponse>`
pub(crate) struct EnvelopeRef<'a>(pub(crate) &'a ResponseBody);

impl Serialize for EnvelopeRef<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let len = usize::from(!self.0.is_empty());
        let mut state = serializer.serialize_struct(ROOT_ELEMENT, len)?;
        match self.0 {
            ResponseBody::Empty => {}
            ResponseBody::Accounts(v) => state.serialize_field("Accounts", v)?,
            ResponseBody::Account(v) => state.serialize_field("Account", v)?,
            ResponseBody::AvailablePhoneNumbers(v) => {
                state.serialize_field("AvailablePhoneNumbers", v)?
            }
            ResponseBody::Calls(v) => state.serialize_field("Calls", v)?,
            ResponseBody::Call(v) => state.serialize_field("Call", v)?,
            ResponseBody::Conferences(v) => state.serialize_field("Conferences", v)?,
            ResponseBody::Conference(v) => state.serialize_field("Conference", v)?,
            ResponseBody::Exception(v) => state.serialize_field("RestException", v)?,
            ResponseBody::IncomingPhoneNumbers(v) => {
                state.serialize_field("IncomingPhoneNumbers", v)?
            }
            ResponseBody::IncomingPhoneNumber(v) => {
                state.serialize_field("IncomingPhoneNumber", v)?
            }
            ResponseBody::Messages(v) => state.serialize_field("Messages", v)?,
            ResponseBody::Message(v) => state.serialize_field("Message", v)?,
            ResponseBody::Notifications(v) => state.serialize_field("Notifications", v)?,
            ResponseBody::Notification(v) => state.serialize_field("Notification", v)?,
            ResponseBody::OutgoingCallerIds(v) => {
                state.serialize_field("OutgoingCallerIds", v)?
            }
            ResponseBody::OutgoingCallerId(v) => state.serialize_field("OutgoingCallerId", v)?,
            ResponseBody::Participants(v) => state.serialize_field("Participants", v)?,
            ResponseBody::Participant(v) => state.serialize_field("Participant", v)?,
            ResponseBody::Recordings(v) => state.serialize_field("Recordings", v)?,
            ResponseBody::Recording(v) => state.serialize_field("Recording", v)?,
            ResponseBody::Queues(v) => state.serialize_field("Queues", v)?,
            ResponseBody::Queue(v) => state.serialize_field("Queue", v)?,
            ResponseBody::QueueMembers(v) => state.serialize_field("QueueMembers", v)?,
            ResponseBody::QueueMember(v) => state.serialize_field("QueueMember", v)?,
            ResponseBody::UsageRecords(v) => state.serialize_field("UsageRecords", v)?,
            ResponseBody::ValidationRequest(v) => {
                state.serialize_field("ValidationRequest", v)?
            }
            ResponseBody::RecordingAudio(_) => {
                return Err(S::Error::custom("recording audio is not XML"));
            }
        }
        state.end()
    }
}
