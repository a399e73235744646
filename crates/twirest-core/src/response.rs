//! Response envelope
//!
//! One [`TwilioResponse`] represents the result of any API operation: a
//! transport status plus at most one body. The body is a tagged union so
//! "which resource came back" is answered by matching, and two resources
//! can never be populated at once.

use std::fmt;

use crate::exception::ExceptionResponse;
use crate::models::*;
use crate::status::ResponseStatus;

/// Parsed body of a response
#[derive(Debug, Default)]
pub enum ResponseBody {
    /// No body, or a body without a recognized resource element
    #[default]
    Empty,
    Accounts(AccountsResponse),
    Account(AccountResponse),
    AvailablePhoneNumbers(AvailablePhoneNumbersResponse),
    Calls(CallsResponse),
    Call(CallResponse),
    Conferences(ConferencesResponse),
    Conference(ConferenceResponse),
    /// `<RestException>` payload
    Exception(ExceptionResponse),
    IncomingPhoneNumbers(IncomingPhoneNumbersResponse),
    IncomingPhoneNumber(IncomingPhoneNumberResponse),
    Messages(MessagesResponse),
    Message(MessageResponse),
    Notifications(NotificationsResponse),
    Notification(NotificationResponse),
    OutgoingCallerIds(OutgoingCallerIdsResponse),
    OutgoingCallerId(OutgoingCallerIdResponse),
    Participants(ParticipantsResponse),
    Participant(ParticipantResponse),
    Recordings(RecordingsResponse),
    Recording(RecordingResponse),
    Queues(QueuesResponse),
    Queue(QueueResponse),
    QueueMembers(QueueMembersResponse),
    QueueMember(QueueMemberResponse),
    UsageRecords(UsageRecordsResponse),
    ValidationRequest(ValidationRequestResponse),
    /// Binary recording payload (not XML)
    RecordingAudio(RecordingAudio),
}

/// Discriminant of a non-empty [`ResponseBody`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Accounts,
    Account,
    AvailablePhoneNumbers,
    Calls,
    Call,
    Conferences,
    Conference,
    Exception,
    IncomingPhoneNumbers,
    IncomingPhoneNumber,
    Messages,
    Message,
    Notifications,
    Notification,
    OutgoingCallerIds,
    OutgoingCallerId,
    Participants,
    Participant,
    Recordings,
    Recording,
    Queues,
    Queue,
    QueueMembers,
    QueueMember,
    UsageRecords,
    ValidationRequest,
    RecordingAudio,
}

impl ResourceKind {
    /// Kinds carried as XML, in the order a decoder checks them
    pub const XML_KINDS: [ResourceKind; 26] = [
        ResourceKind::Accounts,
        ResourceKind::Account,
        ResourceKind::AvailablePhoneNumbers,
        ResourceKind::Calls,
        ResourceKind::Call,
        ResourceKind::Conferences,
        ResourceKind::Conference,
        ResourceKind::Exception,
        ResourceKind::IncomingPhoneNumbers,
        ResourceKind::IncomingPhoneNumber,
        ResourceKind::Messages,
        ResourceKind::Message,
        ResourceKind::Notifications,
        ResourceKind::Notification,
        ResourceKind::OutgoingCallerIds,
        ResourceKind::OutgoingCallerId,
        ResourceKind::Participants,
        ResourceKind::Participant,
        ResourceKind::Recordings,
        ResourceKind::Recording,
        ResourceKind::Queues,
        ResourceKind::Queue,
        ResourceKind::QueueMembers,
        ResourceKind::QueueMember,
        ResourceKind::UsageRecords,
        ResourceKind::ValidationRequest,
    ];

    /// Top-level XML element selecting this kind, `None` for binary audio
    pub fn element_name(&self) -> Option<&'static str> {
        let name = match self {
            ResourceKind::Accounts => "Accounts",
            ResourceKind::Account => "Account",
            ResourceKind::AvailablePhoneNumbers => "AvailablePhoneNumbers",
            ResourceKind::Calls => "Calls",
            ResourceKind::Call => "Call",
            ResourceKind::Conferences => "Conferences",
            ResourceKind::Conference => "Conference",
            ResourceKind::Exception => "RestException",
            ResourceKind::IncomingPhoneNumbers => "IncomingPhoneNumbers",
            ResourceKind::IncomingPhoneNumber => "IncomingPhoneNumber",
            ResourceKind::Messages => "Messages",
            ResourceKind::Message => "Message",
            ResourceKind::Notifications => "Notifications",
            ResourceKind::Notification => "Notification",
            ResourceKind::OutgoingCallerIds => "OutgoingCallerIds",
            ResourceKind::OutgoingCallerId => "OutgoingCallerId",
            ResourceKind::Participants => "Participants",
            ResourceKind::Participant => "Participant",
            ResourceKind::Recordings => "Recordings",
            ResourceKind::Recording => "Recording",
            ResourceKind::Queues => "Queues",
            ResourceKind::Queue => "Queue",
            ResourceKind::QueueMembers => "QueueMembers",
            ResourceKind::QueueMember => "QueueMember",
            ResourceKind::UsageRecords => "UsageRecords",
            ResourceKind::ValidationRequest => "ValidationRequest",
            ResourceKind::RecordingAudio => return None,
        };
        Some(name)
    }

    /// Look up a kind by its top-level XML element name
    pub fn from_element_name(name: &str) -> Option<Self> {
        Self::XML_KINDS
            .into_iter()
            .find(|kind| kind.element_name() == Some(name))
    }

    /// Check if this kind is a paginated list
    pub fn is_list(&self) -> bool {
        matches!(
            self,
            ResourceKind::Accounts
                | ResourceKind::AvailablePhoneNumbers
                | ResourceKind::Calls
                | ResourceKind::Conferences
                | ResourceKind::IncomingPhoneNumbers
                | ResourceKind::Messages
                | ResourceKind::Notifications
                | ResourceKind::OutgoingCallerIds
                | ResourceKind::Participants
                | ResourceKind::Recordings
                | ResourceKind::Queues
                | ResourceKind::QueueMembers
                | ResourceKind::UsageRecords
        )
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.element_name() {
            Some(name) => f.write_str(name),
            None => f.write_str("RecordingAudio"),
        }
    }
}

impl ResponseBody {
    /// Which resource this body holds, `None` when empty
    pub fn kind(&self) -> Option<ResourceKind> {
        let kind = match self {
            ResponseBody::Empty => return None,
            ResponseBody::Accounts(_) => ResourceKind::Accounts,
            ResponseBody::Account(_) => ResourceKind::Account,
            ResponseBody::AvailablePhoneNumbers(_) => ResourceKind::AvailablePhoneNumbers,
            ResponseBody::Calls(_) => ResourceKind::Calls,
            ResponseBody::Call(_) => ResourceKind::Call,
            ResponseBody::Conferences(_) => ResourceKind::Conferences,
            ResponseBody::Conference(_) => ResourceKind::Conference,
            ResponseBody::Exception(_) => ResourceKind::Exception,
            ResponseBody::IncomingPhoneNumbers(_) => ResourceKind::IncomingPhoneNumbers,
            ResponseBody::IncomingPhoneNumber(_) => ResourceKind::IncomingPhoneNumber,
            ResponseBody::Messages(_) => ResourceKind::Messages,
            ResponseBody::Message(_) => ResourceKind::Message,
            ResponseBody::Notifications(_) => ResourceKind::Notifications,
            ResponseBody::Notification(_) => ResourceKind::Notification,
            ResponseBody::OutgoingCallerIds(_) => ResourceKind::OutgoingCallerIds,
            ResponseBody::OutgoingCallerId(_) => ResourceKind::OutgoingCallerId,
            ResponseBody::Participants(_) => ResourceKind::Participants,
            ResponseBody::Participant(_) => ResourceKind::Participant,
            ResponseBody::Recordings(_) => ResourceKind::Recordings,
            ResponseBody::Recording(_) => ResourceKind::Recording,
            ResponseBody::Queues(_) => ResourceKind::Queues,
            ResponseBody::Queue(_) => ResourceKind::Queue,
            ResponseBody::QueueMembers(_) => ResourceKind::QueueMembers,
            ResponseBody::QueueMember(_) => ResourceKind::QueueMember,
            ResponseBody::UsageRecords(_) => ResourceKind::UsageRecords,
            ResponseBody::ValidationRequest(_) => ResourceKind::ValidationRequest,
            ResponseBody::RecordingAudio(_) => ResourceKind::RecordingAudio,
        };
        Some(kind)
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, ResponseBody::Empty)
    }
}

macro_rules! impl_from_resource {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(
            impl From<$ty> for ResponseBody {
                fn from(value: $ty) -> Self {
                    ResponseBody::$variant(value)
                }
            }
        )*
    };
}

impl_from_resource!(
    Accounts(AccountsResponse),
    Account(AccountResponse),
    AvailablePhoneNumbers(AvailablePhoneNumbersResponse),
    Calls(CallsResponse),
    Call(CallResponse),
    Conferences(ConferencesResponse),
    Conference(ConferenceResponse),
    Exception(ExceptionResponse),
    IncomingPhoneNumbers(IncomingPhoneNumbersResponse),
    IncomingPhoneNumber(IncomingPhoneNumberResponse),
    Messages(MessagesResponse),
    Message(MessageResponse),
    Notifications(NotificationsResponse),
    Notification(NotificationResponse),
    OutgoingCallerIds(OutgoingCallerIdsResponse),
    OutgoingCallerId(OutgoingCallerIdResponse),
    Participants(ParticipantsResponse),
    Participant(ParticipantResponse),
    Recordings(RecordingsResponse),
    Recording(RecordingResponse),
    Queues(QueuesResponse),
    Queue(QueueResponse),
    QueueMembers(QueueMembersResponse),
    QueueMember(QueueMemberResponse),
    UsageRecords(UsageRecordsResponse),
    ValidationRequest(ValidationRequestResponse),
    RecordingAudio(RecordingAudio),
);

/// Holds one possible resource depending on the request, plus the status
#[derive(Debug, Default)]
pub struct TwilioResponse {
    pub body: ResponseBody,
    pub status: ResponseStatus,
}

impl TwilioResponse {
    pub fn new(body: impl Into<ResponseBody>, status: ResponseStatus) -> Self {
        Self {
            body: body.into(),
            status,
        }
    }

    /// A response carrying only a transport status
    pub fn empty(status: ResponseStatus) -> Self {
        Self {
            body: ResponseBody::Empty,
            status,
        }
    }

    /// Check if the request succeeded at the transport level
    pub fn is_ok(&self) -> bool {
        self.status.is_ok()
    }

    pub fn kind(&self) -> Option<ResourceKind> {
        self.body.kind()
    }

    /// True when no resource element was returned
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// The RestException payload, if the API returned one
    pub fn exception(&self) -> Option<&ExceptionResponse> {
        match &self.body {
            ResponseBody::Exception(err) => Some(err),
            _ => None,
        }
    }

    pub fn into_body(self) -> ResponseBody {
        self.body
    }
}
