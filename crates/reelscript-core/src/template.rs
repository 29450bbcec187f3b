//! Converting prompt fragments into chat messages.
//!
//! Fragments (a static instruction, a set of history references, ...)
//! implement [`IntoPrompt`] and are lined up by
//! `reelscript_prompt::chain::PromptChain`.
//!
//! ```rust
//! use reelscript_core::template::IntoPrompt;
//! use reelscript_core::generic::GenericMessage;
//!
//! let messages = GenericMessage::user("Write about bread.").into_prompt();
//! assert_eq!(messages.len(), 1);
//! ```

/// Converts a value into a series of chat messages.
///
/// The `Message` type is associated so back-ends with a richer message
/// struct can reuse the chaining machinery without dynamic dispatch.
pub trait IntoPrompt {
    /// Chat message representation emitted by the fragment.
    type Message: Send + Sync + 'static;

    /// Consume `self` and return **all** messages in the desired order.
    fn into_prompt(self) -> Vec<Self::Message>;
}

/// A single [`crate::generic::GenericMessage`] is a fragment of its own.
impl IntoPrompt for crate::generic::GenericMessage {
    type Message = crate::generic::GenericMessage;

    fn into_prompt(self) -> Vec<Self::Message> {
        vec![self]
    }
}

/// Pre-built message lists pass through unchanged.
impl IntoPrompt for Vec<crate::generic::GenericMessage> {
    type Message = crate::generic::GenericMessage;

    fn into_prompt(self) -> Vec<Self::Message> {
        self
    }
}
