//! Encoding of response bodies back into the API's XML dialect

use twirest_core::{ResponseBody, TwirestError, TwirestResult};

use crate::envelope::EnvelopeRef;

/// Encode a body as a `<TwilioResponse>` document
///
/// Text fields are written verbatim, so decoding the output yields the
/// same values. Recording audio is binary and cannot be encoded.
pub fn encode_body(body: &ResponseBody) -> TwirestResult<String> {
    if matches!(body, ResponseBody::RecordingAudio(_)) {
        return Err(TwirestError::UnsupportedBody(
            "recording audio has no XML form",
        ));
    }
    quick_xml::se::to_string(&EnvelopeRef(body)).map_err(|e| TwirestError::Encode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use twirest_core::models::{CallResponse, RecordingAudio};

    #[test]
    fn test_encode_empty() {
        let xml = encode_body(&ResponseBody::Empty).unwrap();
        assert_eq!(xml, "<TwilioResponse/>");
    }

    #[test]
    fn test_encode_call() {
        let body = ResponseBody::Call(CallResponse {
            sid: "CA1".to_string(),
            ..Default::default()
        });
        let xml = encode_body(&body).unwrap();
        assert!(xml.starts_with("<TwilioResponse><Call><Sid>CA1</Sid>"));
        assert!(xml.ends_with("</Call></TwilioResponse>"));
    }

    #[test]
    fn test_encode_audio_rejected() {
        let body = ResponseBody::RecordingAudio(RecordingAudio::new(Cursor::new(Vec::new())));
        let err = encode_body(&body).unwrap_err();
        assert_eq!(err.error_code(), "unsupported_body");
    }
}
