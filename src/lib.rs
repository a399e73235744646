//! twirest
//!
//! Typed responses for the Twilio 2010-04-01 XML REST API. The record types
//! and envelope live in `twirest-core`, the XML codec in `twirest-xml`; this
//! crate re-exports both and adds the glue for reading `reqwest` responses.
//!
//! ```rust,ignore
//! let config = twirest::TwirestConfig::load()?;
//! let resp = client.get(url).basic_auth(sid, Some(token)).send().await?;
//! let response = twirest::read_response(resp, &config.decoder).await?;
//!
//! match response.body {
//!     ResponseBody::Calls(calls) if response.is_ok() => {
//!         for call in &calls {
//!             println!("{} {}", call.sid, call.status);
//!         }
//!     }
//!     ResponseBody::Exception(err) => eprintln!("API error {}: {}", err.code, err),
//!     _ => {}
//! }
//! ```

mod transport;

pub use transport::{read_recording_audio, read_response};

pub use twirest_core::models;
pub use twirest_core::{
    exception::reason_phrase, DecoderConfig, ExceptionResponse, ListItem, ListResponse, Page,
    ResourceKind, ResponseBody, ResponseStatus, TwilioResponse, TwirestConfig, TwirestError,
    TwirestResult,
};
pub use twirest_xml::{decode_body, decode_response, decode_response_bytes, encode_body};
