//! Transport status of a response

use serde::{Deserialize, Serialize};

/// HTTP status codes treated as success
///
/// This list is closed: a 2xx code outside it (e.g. 227) is a failure.
pub const SUCCESS_CODES: [i32; 10] = [200, 201, 202, 203, 204, 205, 206, 207, 208, 226];

/// Status of the request and of the API
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResponseStatus {
    /// Transport (HTTP) status code
    pub http: i32,

    /// API error code, set from a RestException body; 0 otherwise
    pub twilio: i32,
}

impl ResponseStatus {
    pub fn new(http: i32, twilio: i32) -> Self {
        Self { http, twilio }
    }

    pub fn from_http(http: i32) -> Self {
        Self { http, twilio: 0 }
    }

    /// Check if the transport status is one of the success codes
    pub fn is_ok(&self) -> bool {
        SUCCESS_CODES.contains(&self.http)
    }
}

impl From<http::StatusCode> for ResponseStatus {
    fn from(status: http::StatusCode) -> Self {
        Self::from_http(i32::from(status.as_u16()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_boundaries() {
        assert!(ResponseStatus::from_http(200).is_ok());
        assert!(ResponseStatus::from_http(226).is_ok());
        assert!(!ResponseStatus::from_http(227).is_ok());
        assert!(!ResponseStatus::from_http(100).is_ok());
        assert!(!ResponseStatus::from_http(304).is_ok());
        assert!(!ResponseStatus::from_http(500).is_ok());
    }

    #[test]
    fn test_degenerate_codes() {
        assert!(!ResponseStatus::default().is_ok());
        assert!(!ResponseStatus::from_http(-200).is_ok());
        assert!(!ResponseStatus::from_http(209).is_ok());
    }

    #[test]
    fn test_twilio_code_ignored() {
        assert!(ResponseStatus::new(201, 20404).is_ok());
        assert!(!ResponseStatus::new(404, 0).is_ok());
    }

    #[test]
    fn test_success_codes_table_agrees() {
        for code in SUCCESS_CODES {
            assert!(ResponseStatus::from_http(code).is_ok(), "{code}");
        }
    }

    #[test]
    fn test_from_status_code() {
        let status = ResponseStatus::from(http::StatusCode::NO_CONTENT);
        assert_eq!(status.http, 204);
        assert_eq!(status.twilio, 0);
        assert!(status.is_ok());
    }
}
