//! Unified error type exposed by **`reelscript-core`**.
//!
//! Backend crates convert their internal errors into [`ScriptError::Upstream`]
//! before bubbling them up to the session. Every variant is scoped to a single
//! generation attempt; none of them is meant to abort the process.

use thiserror::Error;

/// Convenient alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, ScriptError>;

#[derive(Debug, Error)]
pub enum ScriptError {
    /// An input lies outside its declared domain and no safe clamp exists
    /// (blank idea text, NaN temperature, missing credentials, ...).
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// A closed option set (tone, language, platform) received a value it
    /// does not know.
    #[error("unknown {kind} `{value}`")]
    UnknownOption { kind: &'static str, value: String },

    /// The generation backend failed or was unreachable.
    #[error("generation request failed: {0}")]
    Upstream(Box<dyn std::error::Error + Send + Sync + 'static>),

    /// An assembled message list does not follow the
    /// `system, (user, assistant)*, user` layout.
    #[error("malformed message sequence: {0}")]
    MessageOrder(String),

    /// Failure while serialising or deserialising JSON payloads.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ScriptError {
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    pub fn unknown_option(kind: &'static str, value: impl Into<String>) -> Self {
        Self::UnknownOption {
            kind,
            value: value.into(),
        }
    }

    /// `true` when the failure happened on the far side of the provider
    /// boundary, i.e. retrying with the same configuration may succeed.
    pub fn is_upstream(&self) -> bool {
        matches!(self, Self::Upstream(_))
    }
}
