//! API client error types
//!
//! Only failures below the JSON layer are errors here. A backend reply
//! carrying a `message` is a normal [`ApiResponse::Failure`](super::ApiResponse).

use thiserror::Error;

/// Errors that can occur when talking to the journal API
#[derive(Error, Debug)]
pub enum ApiClientError {
    /// Configured base URL is not an absolute http(s) URL
    #[error("Invalid API base URL {url}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// Request could not be sent or the body could not be read
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Body was not JSON, or not the shape its discriminator promised
    #[error("Malformed response (status {status}): {reason}")]
    Decode { status: u16, reason: String },
}

/// Result type alias for API calls
pub type ApiClientResult<T> = Result<T, ApiClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ApiClientError::Decode {
            status: 502,
            reason: "expected value at line 1 column 1".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Malformed response (status 502): expected value at line 1 column 1"
        );
    }
}
