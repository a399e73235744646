//! XML codec for twirest
//!
//! Maps `<TwilioResponse>` documents onto [`twirest_core::TwilioResponse`]
//! and back, using quick-xml's serde support.
//!
//! ```rust,ignore
//! use twirest_core::{DecoderConfig, ResponseBody, ResponseStatus};
//!
//! let response = twirest_xml::decode_response(
//!     ResponseStatus::from_http(200),
//!     &xml,
//!     &DecoderConfig::default(),
//! )?;
//! if let ResponseBody::Call(call) = &response.body {
//!     println!("{} is {}", call.sid, call.status);
//! }
//! ```

mod decode;
mod encode;
mod envelope;
mod text;

pub use decode::{decode_body, decode_response, decode_response_bytes};
pub use encode::encode_body;
