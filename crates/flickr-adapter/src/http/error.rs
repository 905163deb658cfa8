/*
[INPUT]:  Error sources (transport, HTTP status, body decoding, Flickr envelope, config)
[OUTPUT]: Structured error type classifying each failure kind
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use thiserror::Error;

/// Main error type for the Flickr adapter
#[derive(Error, Debug)]
pub enum FlickrError {
    /// The request could not be completed at the HTTP level
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status outside the Flickr envelope
    #[error("HTTP status {status} from {endpoint}")]
    Status { status: u16, endpoint: String },

    /// Response body did not decode into the expected shape
    #[error("Failed to decode response: {0}")]
    Parse(#[from] serde_json::Error),

    /// Flickr answered with `stat` other than `ok`
    #[error("Flickr error code {code}: {message}")]
    Api { code: String, message: String },

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl FlickrError {
    /// The call never produced a response body
    pub fn is_transport(&self) -> bool {
        matches!(self, FlickrError::Http(_) | FlickrError::Status { .. })
    }

    /// A body arrived but could not be decoded
    pub fn is_parse(&self) -> bool {
        matches!(self, FlickrError::Parse(_))
    }

    /// Flickr error code, for API-level failures only
    pub fn api_code(&self) -> Option<&str> {
        match self {
            FlickrError::Api { code, .. } => Some(code.as_str()),
            _ => None,
        }
    }

    /// Create an API error from the envelope's code and message
    pub fn api_error(code: impl Into<String>, message: impl Into<String>) -> Self {
        FlickrError::Api {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// Result type alias for Flickr operations
pub type Result<T> = std::result::Result<T, FlickrError>;
