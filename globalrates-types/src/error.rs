//! Error surface of the Global Exchange Rates API.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error payload the service attaches to failed requests.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub message: String,
    /// Service-specific error code.
    pub error_code: i32,
}

/// An error returned by the Global Exchange Rates API.
///
/// Produced whenever the service answers with a status code of 400 or
/// above. `error_code` and `message` are populated only when the error
/// body parses as [`ErrorResponse`]; otherwise they stay at their
/// defaults and only the status code is meaningful.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiError {
    /// HTTP status code of the failed request.
    pub status_code: u16,
    /// Error code returned by the API, if available.
    pub error_code: i32,
    /// Error message returned by the API, if available.
    pub message: String,
}

impl ApiError {
    /// Builds the error for a failed request, folding in whatever
    /// diagnostic fields the body supplies. An unparseable body is not
    /// itself an error; the result then carries the status code alone.
    pub fn from_response(status_code: u16, body: &str) -> Self {
        let mut err = ApiError {
            status_code,
            ..ApiError::default()
        };
        if let Ok(resp) = serde_json::from_str::<ErrorResponse>(body) {
            err.error_code = resp.error_code;
            err.message = resp.message;
        }
        err
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.message.is_empty() {
            write!(f, "API request failed with status code {}", self.status_code)
        } else {
            write!(
                f,
                "API request failed with status code {}: {} (error code: {})",
                self.status_code, self.message, self.error_code
            )
        }
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_diagnostic_fields_from_the_body() {
        let err = ApiError::from_response(404, r#"{"message":"not found","errorCode":7}"#);
        assert_eq!(err.status_code, 404);
        assert_eq!(err.error_code, 7);
        assert_eq!(err.message, "not found");
    }

    #[test]
    fn unparseable_body_leaves_defaults() {
        let err = ApiError::from_response(502, "Bad Gateway");
        assert_eq!(err.status_code, 502);
        assert_eq!(err.error_code, 0);
        assert_eq!(err.message, "");
    }

    #[test]
    fn partial_body_fills_what_it_can() {
        let err = ApiError::from_response(400, r#"{"message":"bad request"}"#);
        assert_eq!(err.error_code, 0);
        assert_eq!(err.message, "bad request");
    }

    #[test]
    fn display_with_message() {
        let err = ApiError::from_response(404, r#"{"message":"not found","errorCode":7}"#);
        assert_eq!(
            err.to_string(),
            "API request failed with status code 404: not found (error code: 7)"
        );
    }

    #[test]
    fn display_without_message() {
        let err = ApiError::from_response(500, "");
        assert_eq!(err.to_string(), "API request failed with status code 500");
    }
}
