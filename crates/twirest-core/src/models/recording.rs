//! Recording resource and recording audio payloads

use chrono::{DateTime, FixedOffset};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::io::{AsyncRead, AsyncReadExt, ReadBuf};
use tracing::debug;

use crate::page::{ListItem, ListResponse};
use crate::text;

/// Recording metadata record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "Recording", rename_all = "PascalCase", default)]
pub struct RecordingResponse {
    pub sid: String,
    pub account_sid: String,
    pub call_sid: String,

    /// Length of the recording in seconds
    pub duration: String,

    pub date_created: String,
    pub api_version: String,
    pub date_updated: String,
    pub status: String,
    pub source: String,
    pub channels: String,
    pub price: String,
    pub price_unit: String,
    pub uri: String,
}

/// Paginated list of recordings
pub type RecordingsResponse = ListResponse<RecordingResponse>;

impl ListItem for RecordingResponse {
    const ELEMENT: &'static str = "Recording";
}

impl RecordingResponse {
    pub fn duration_secs(&self) -> Option<u32> {
        text::parse_u32(&self.duration)
    }

    pub fn channel_count(&self) -> Option<u32> {
        text::parse_u32(&self.channels)
    }

    pub fn price_amount(&self) -> Option<Decimal> {
        text::parse_decimal(&self.price)
    }

    pub fn date_created_at(&self) -> Option<DateTime<FixedOffset>> {
        text::parse_date(&self.date_created)
    }
}

/// Binary audio of a recording, as a stream
///
/// The stream is owned by whoever holds this value. The envelope never
/// closes it; the caller either takes the reader out with
/// [`RecordingAudio::into_reader`], drains it with
/// [`RecordingAudio::read_to_end`], or releases it with
/// [`RecordingAudio::close`].
pub struct RecordingAudio {
    content_type: Option<String>,
    reader: Pin<Box<dyn AsyncRead + Send>>,
}

impl RecordingAudio {
    pub fn new<R>(reader: R) -> Self
    where
        R: AsyncRead + Send + 'static,
    {
        Self {
            content_type: None,
            reader: Box::pin(reader),
        }
    }

    /// Attach the MIME type reported by the transport (e.g. `audio/x-wav`)
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    /// Take ownership of the underlying stream
    pub fn into_reader(self) -> Pin<Box<dyn AsyncRead + Send>> {
        self.reader
    }

    /// Read the remaining audio into memory and release the stream
    pub async fn read_to_end(mut self) -> io::Result<Vec<u8>> {
        let mut data = Vec::new();
        self.reader.read_to_end(&mut data).await?;
        debug!(bytes = data.len(), "Recording audio drained");
        Ok(data)
    }

    /// Release the stream without reading it
    pub fn close(self) {
        debug!(content_type = ?self.content_type, "Recording audio closed");
        drop(self.reader);
    }
}

impl AsyncRead for RecordingAudio {
    fn poll_read(
        mut self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        buf: &mut ReadBuf<'_>,
    ) -> Poll<io::Result<()>> {
        self.reader.as_mut().poll_read(cx, buf)
    }
}

impl fmt::Debug for RecordingAudio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordingAudio")
            .field("content_type", &self.content_type)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::io::Cursor;

    #[test]
    fn test_recording_accessors() {
        let recording = RecordingResponse {
            duration: "6".to_string(),
            channels: "1".to_string(),
            price: "-0.00250".to_string(),
            ..Default::default()
        };
        assert_eq!(recording.duration_secs(), Some(6));
        assert_eq!(recording.channel_count(), Some(1));
        assert_eq!(recording.price_amount(), Some(dec!(-0.0025)));
    }

    #[tokio::test]
    async fn test_audio_read_to_end() {
        let audio = RecordingAudio::new(Cursor::new(b"RIFF....WAVE".to_vec()))
            .with_content_type("audio/x-wav");
        assert_eq!(audio.content_type(), Some("audio/x-wav"));

        let data = audio.read_to_end().await.unwrap();
        assert_eq!(data, b"RIFF....WAVE");
    }

    #[tokio::test]
    async fn test_audio_reads_incrementally() {
        let mut audio = RecordingAudio::new(Cursor::new(vec![1u8, 2, 3, 4]));
        let mut first = [0u8; 2];
        audio.read_exact(&mut first).await.unwrap();
        assert_eq!(first, [1, 2]);

        let rest = audio.read_to_end().await.unwrap();
        assert_eq!(rest, vec![3, 4]);
    }

    #[test]
    fn test_audio_debug_hides_stream() {
        let audio = RecordingAudio::new(Cursor::new(Vec::new()));
        assert_eq!(
            format!("{:?}", audio),
            "RecordingAudio { content_type: None, .. }"
        );
        audio.close();
    }
}
