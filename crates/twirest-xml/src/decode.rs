//! Decoding of XML response bodies into the envelope

use tracing::{debug, instrument, warn};
use twirest_core::{
    DecoderConfig, ResponseBody, ResponseStatus, TwilioResponse, TwirestError, TwirestResult,
};

use crate::envelope::EnvelopeWire;
use crate::text;

/// Decode an XML document into a response body
///
/// The root element (normally `<TwilioResponse>`) is not checked; its first
/// recognized child selects the body. A document without one is `Empty`.
/// Text values are kept exactly as sent, surrounding whitespace included.
pub fn decode_body(xml: &str) -> TwirestResult<ResponseBody> {
    let xml = text::protect_leaf_text(xml).map_err(|e| TwirestError::Decode(e.to_string()))?;
    let wire: EnvelopeWire =
        quick_xml::de::from_str(&xml).map_err(|e| TwirestError::Decode(e.to_string()))?;
    Ok(wire.into_body())
}

/// Decode a complete response from its status and XML body
///
/// A `RestException` body is normalized (when enabled) and its code is
/// copied into `status.twilio`.
#[instrument(skip(xml, config), fields(http = status.http, bytes = xml.len()))]
pub fn decode_response(
    status: ResponseStatus,
    xml: &str,
    config: &DecoderConfig,
) -> TwirestResult<TwilioResponse> {
    if xml.len() > config.max_body_bytes {
        warn!(limit = config.max_body_bytes, "Response body over limit");
        return Err(TwirestError::BodyTooLarge {
            limit: config.max_body_bytes,
            actual: xml.len(),
        });
    }

    if xml.trim().is_empty() {
        debug!("Empty response body");
        return Ok(TwilioResponse::empty(status));
    }

    debug!(body = config.preview(xml), "Decoding response body");

    let mut status = status;
    let mut body = decode_body(xml).map_err(|e| {
        warn!(error = %e, code = e.error_code(), "Failed to decode response body");
        e
    })?;

    if let ResponseBody::Exception(err) = &mut body {
        if config.normalize_exceptions {
            err.normalize_status();
        }
        status.twilio = err.code;
        debug!(code = err.code, message = %err.message, "API returned an exception");
    }

    debug!(kind = ?body.kind(), ok = status.is_ok(), "Decoded response");
    Ok(TwilioResponse { body, status })
}

/// Like [`decode_response`] for a raw byte body
pub fn decode_response_bytes(
    status: ResponseStatus,
    body: &[u8],
    config: &DecoderConfig,
) -> TwirestResult<TwilioResponse> {
    if body.len() > config.max_body_bytes {
        return Err(TwirestError::BodyTooLarge {
            limit: config.max_body_bytes,
            actual: body.len(),
        });
    }
    let xml = std::str::from_utf8(body).map_err(|e| TwirestError::Decode(e.to_string()))?;
    decode_response(status, xml, config)
}
