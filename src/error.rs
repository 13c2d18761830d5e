//! Unified error types.

use thiserror::Error;

/// Top-level error.
#[derive(Error, Debug)]
pub enum SwapError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// HTTP-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Server error {status}: {body}")]
    ServerError { status: u16, body: String },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request {status}: {body}")]
    BadRequest { status: u16, body: String },

    #[error("Invalid payload: {0}")]
    InvalidPayload(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_display() {
        let err = HttpError::ServerError {
            status: 503,
            body: "unavailable".into(),
        };
        assert_eq!(err.to_string(), "Server error 503: unavailable");
    }

    #[test]
    fn test_swap_error_from_http() {
        let err: SwapError = HttpError::NotFound("/prices.json".into()).into();
        assert!(matches!(err, SwapError::Http(HttpError::NotFound(_))));
        assert_eq!(err.to_string(), "HTTP error: Not found: /prices.json");
    }

    #[test]
    fn test_swap_error_from_serde() {
        let serde_err = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        let err: SwapError = serde_err.into();
        assert!(err.to_string().starts_with("Serialization error:"));
    }
}
