//! Reading API responses off a `reqwest` response
//!
//! Request building and authentication stay with the caller; these
//! functions only turn what came back into a [`TwilioResponse`].

use std::io;

use futures::TryStreamExt;
use reqwest::header::CONTENT_TYPE;
use tokio_util::io::StreamReader;
use tracing::{debug, instrument, warn};
use twirest_core::models::RecordingAudio;
use twirest_core::{DecoderConfig, ResponseStatus, TwilioResponse, TwirestError, TwirestResult};

/// Read and decode an XML response
///
/// The body is buffered in full (bounded by `max_body_bytes`). A blank body
/// yields an `Empty` response carrying the status.
#[instrument(skip(response, config), fields(http = response.status().as_u16()))]
pub async fn read_response(
    response: reqwest::Response,
    config: &DecoderConfig,
) -> TwirestResult<TwilioResponse> {
    let status = ResponseStatus::from(response.status());
    check_content_length(&response, config)?;

    let body = response.bytes().await.map_err(|e| {
        warn!(error = %e, "Failed to read response body");
        TwirestError::Transport(e.to_string())
    })?;
    debug!(bytes = body.len(), "Read response body");

    twirest_xml::decode_response_bytes(status, &body, config)
}

/// Read a recording media response
///
/// On a success status the body is handed back unbuffered as
/// [`RecordingAudio`], tagged with the response content type. Any other
/// status is decoded like [`read_response`] so the exception is available.
#[instrument(skip(response, config), fields(http = response.status().as_u16()))]
pub async fn read_recording_audio(
    response: reqwest::Response,
    config: &DecoderConfig,
) -> TwirestResult<TwilioResponse> {
    let status = ResponseStatus::from(response.status());
    if !status.is_ok() {
        debug!("Recording request failed, decoding error body");
        return read_response(response, config).await;
    }

    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);

    let stream = response
        .bytes_stream()
        .map_err(io::Error::other);
    let mut audio = RecordingAudio::new(StreamReader::new(Box::pin(stream)));
    if let Some(content_type) = content_type {
        audio = audio.with_content_type(content_type);
    }

    debug!(content_type = ?audio.content_type(), "Streaming recording audio");
    Ok(TwilioResponse::new(audio, status))
}

fn check_content_length(response: &reqwest::Response, config: &DecoderConfig) -> TwirestResult<()> {
    match response.content_length() {
        Some(len) if len > config.max_body_bytes as u64 => {
            warn!(limit = config.max_body_bytes, len, "Declared body length over limit");
            Err(TwirestError::BodyTooLarge {
                limit: config.max_body_bytes,
                actual: usize::try_from(len).unwrap_or(usize::MAX),
            })
        }
        _ => Ok(()),
    }
}
