use reelscript_core::error::ScriptError;
use reqwest::StatusCode;

/// Every failure mode the OpenAI client can hit.
#[derive(Debug, thiserror::Error)]
pub enum OpenAiError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("couldn’t (de)serialise body: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("OpenAI returned non-success status {status}: {body}")]
    Api { status: StatusCode, body: String },

    #[error("OpenAI format error: {0}")]
    Format(String),

    #[error("invalid API key header: {0}")]
    InvalidApiKey(#[from] reqwest::header::InvalidHeaderValue),
}

impl From<OpenAiError> for ScriptError {
    fn from(value: OpenAiError) -> Self {
        ScriptError::Upstream(Box::new(value))
    }
}
