//! twirest core library
//!
//! Typed shapes of the Twilio 2010-04-01 XML REST API responses:
//!
//! - The response envelope ([`TwilioResponse`]) with a tagged body
//! - Transport status classification ([`ResponseStatus`])
//! - The RestException payload and its status normalization
//! - Resource records and their paginated lists
//! - Library error type and configuration

pub mod config;
pub mod error;
pub mod exception;
pub mod models;
pub mod page;
pub mod response;
pub mod status;
pub mod text;

pub use config::{DecoderConfig, TwirestConfig};
pub use error::TwirestError;
pub use exception::ExceptionResponse;
pub use page::{ListItem, ListResponse, Page};
pub use response::{ResourceKind, ResponseBody, TwilioResponse};
pub use status::ResponseStatus;

/// Result type alias using TwirestError
pub type TwirestResult<T> = Result<T, TwirestError>;
