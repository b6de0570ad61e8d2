use reqwest::StatusCode;
use serde_json::Value as JsonValue;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("API responded with {status}: {body}")]
    Api { status: StatusCode, body: JsonValue },

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),
}

impl Error {
    /// The `error` (or `message`) string the backend put in a failed response body.
    pub fn server_message(&self) -> Option<String> {
        let Error::Api { body, .. } = self else {
            return None;
        };
        ["error", "message"]
            .iter()
            .find_map(|key| body.get(key).and_then(JsonValue::as_str))
            .or_else(|| body.as_str())
            .filter(|msg| !msg.trim().is_empty())
            .map(str::to_string)
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Api { status, .. } => Some(*status),
            Error::Reqwest(err) => err.status(),
            _ => None,
        }
    }
}
