//! Generic message and role types used by every reelscript crate.
//!
//! They mirror the three roles chat-completion APIs agree on. Backends
//! convert them into their own wire structs via a plain `From`.
use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// A single chat message, independent of any provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenericMessage {
    pub role: GenericRole,
    pub content: String,
}

impl GenericMessage {
    /// Constructor mirroring the field order used by common HTTP APIs.
    ///
    /// ```rust
    /// use reelscript_core::generic::{GenericMessage, GenericRole};
    ///
    /// let sys = GenericMessage::new(GenericRole::System, "You write video scripts.");
    /// assert_eq!(sys.role.to_string(), "system");
    /// ```
    pub fn new(role: GenericRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(GenericRole::System, content)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(GenericRole::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(GenericRole::Assistant, content)
    }
}

/// Chat roles a script request may contain.
///
/// The `Display` implementation renders the canonical lowercase name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenericRole {
    /// Global behaviour and style guidelines. Exactly one, always first.
    System,
    /// Requests, including synthesized reference requests.
    User,
    /// Model output, including replayed reference scripts.
    Assistant,
}

impl Display for GenericRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenericRole::System => write!(f, "system"),
            GenericRole::User => write!(f, "user"),
            GenericRole::Assistant => write!(f, "assistant"),
        }
    }
}

/// Token accounting reported by a backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenericUsageReport {
    pub prompt_tokens: u64,
    pub completion_tokens: u64,
    pub total_tokens: u64,
}

/// What a successful generation hands back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationOutput {
    pub text: String,
    pub usage: GenericUsageReport,
}
