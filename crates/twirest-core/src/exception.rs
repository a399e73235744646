//! RestException payload returned by the API when a request fails

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// What will be returned if there's an issue with a request
///
/// Decoded from the `<RestException>` element. `status` initially holds the
/// numeric HTTP status as text; [`ExceptionResponse::normalize_status`]
/// turns it into the reason phrase and records the number in `status_code`.
#[derive(Error, Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[error("{message} ({more_info})")]
#[serde(rename = "RestException", rename_all = "PascalCase", default)]
pub struct ExceptionResponse {
    /// API-specific error code (e.g. 20404)
    #[serde(deserialize_with = "crate::text::number_or_zero")]
    pub code: i32,

    pub detail: String,

    /// Human readable message
    pub message: String,

    /// Documentation URL for the error code
    pub more_info: String,

    pub status: String,

    /// Numeric status, set by normalization only
    #[serde(skip)]
    pub status_code: i64,
}

impl ExceptionResponse {
    /// Replace a positive numeric `status` with its reason phrase
    ///
    /// Non-numeric, zero and negative values are left untouched, so applying
    /// this twice is the same as applying it once. A positive code without a
    /// known phrase normalizes to an empty string.
    pub fn normalize_status(&mut self) {
        match self.status.parse::<i64>() {
            Ok(code) if code > 0 => {
                self.status = reason_phrase(code).to_string();
                self.status_code = code;
            }
            _ => {}
        }
    }

    /// Builder-style variant of [`ExceptionResponse::normalize_status`]
    pub fn normalized(mut self) -> Self {
        self.normalize_status();
        self
    }
}

/// Canonical reason phrase for an HTTP status code, empty if unknown
pub fn reason_phrase(code: i64) -> &'static str {
    u16::try_from(code)
        .ok()
        .and_then(|code| http::StatusCode::from_u16(code).ok())
        .and_then(|status| status.canonical_reason())
        .unwrap_or("")
}
