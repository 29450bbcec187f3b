//! Ordered assembly of a script request out of [`IntoPrompt`] fragments.
//!
//! ```text
//! ┌──────────────────────┐  IntoPrompt   ┌─────────────────────┐
//! │ system instruction   │ ─────────────►│ system              │
//! ├──────────────────────┤               ├─────────────────────┤
//! │ reference selection  │ ─────────────►│ (user, assistant)*  │
//! ├──────────────────────┤               ├─────────────────────┤
//! │ new script request   │ ─────────────►│ user                │
//! └──────────────────────┘               └─────────────────────┘
//! ```
//!
//! [`PromptChain::build`] checks the resulting layout: exactly one system
//! message first, alternating user/assistant reference pairs, exactly one
//! trailing user message.
//!
//! ```rust
//! use reelscript_prompt::chain::PromptChain;
//! use reelscript_core::generic::GenericMessage;
//!
//! let messages = PromptChain::new()
//!     .with(GenericMessage::system("You write video scripts."))
//!     .with(GenericMessage::user("A story about bread."))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(messages.len(), 2);
//! ```
use reelscript_core::{
    error::{Result, ScriptError},
    generic::{GenericMessage, GenericRole},
    template::IntoPrompt,
};

/// Accumulates messages produced by [`IntoPrompt`] implementors.
///
/// The `Vec` is private so the only way out is the validating
/// [`Self::build`].
#[derive(Debug, Default)]
pub struct PromptChain(Vec<GenericMessage>);

impl PromptChain {
    /// Create an empty chain.
    pub fn new() -> Self {
        Self(vec![])
    }

    /// Append the messages produced by `fragment`.
    pub fn with(mut self, fragment: impl IntoPrompt<Message = GenericMessage>) -> Self {
        self.0.append(&mut fragment.into_prompt());
        self
    }

    /// Consume the chain and return the messages if their layout is valid.
    ///
    /// # Errors
    ///
    /// * [`ScriptError::MessageOrder`] – the layout is not
    ///   `system, (user, assistant)*, user`.
    pub fn build(self) -> Result<Vec<GenericMessage>> {
        validate_order(&self.0)?;
        Ok(self.0)
    }
}

fn validate_order(messages: &[GenericMessage]) -> Result<()> {
    let Some((first, rest)) = messages.split_first() else {
        return Err(ScriptError::MessageOrder("no messages".into()));
    };
    if first.role != GenericRole::System {
        return Err(ScriptError::MessageOrder(format!(
            "first message must be system, found {}",
            first.role
        )));
    }
    let Some((last, references)) = rest.split_last() else {
        return Err(ScriptError::MessageOrder(
            "missing trailing user message".into(),
        ));
    };
    if last.role != GenericRole::User {
        return Err(ScriptError::MessageOrder(format!(
            "last message must be user, found {}",
            last.role
        )));
    }
    if references.len() % 2 != 0 {
        return Err(ScriptError::MessageOrder(
            "reference messages must come in user/assistant pairs".into(),
        ));
    }
    for (idx, pair) in references.chunks(2).enumerate() {
        if pair[0].role != GenericRole::User || pair[1].role != GenericRole::Assistant {
            return Err(ScriptError::MessageOrder(format!(
                "reference pair {} is {}/{}, expected user/assistant",
                idx + 1,
                pair[0].role,
                pair[1].role
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn references_sit_between_system_and_request() {
        let messages = PromptChain::new()
            .with(GenericMessage::system("sys"))
            .with(vec![
                GenericMessage::user("(Example) Script idea: a"),
                GenericMessage::assistant("script a"),
            ])
            .with(GenericMessage::user("new"))
            .build()
            .unwrap();

        let roles: Vec<_> = messages.iter().map(|m| m.role).collect();
        assert_eq!(
            roles,
            [
                GenericRole::System,
                GenericRole::User,
                GenericRole::Assistant,
                GenericRole::User
            ]
        );
    }

    #[test]
    fn missing_system_message_is_rejected() {
        let err = PromptChain::new()
            .with(GenericMessage::user("new"))
            .build()
            .unwrap_err();
        assert!(matches!(err, ScriptError::MessageOrder(_)));
    }

    #[test]
    fn dangling_reference_is_rejected() {
        let err = PromptChain::new()
            .with(GenericMessage::system("sys"))
            .with(GenericMessage::user("orphan reference"))
            .with(GenericMessage::user("new"))
            .build()
            .unwrap_err();
        assert!(matches!(err, ScriptError::MessageOrder(_)));
    }

    #[test]
    fn swapped_pair_is_rejected() {
        let err = PromptChain::new()
            .with(GenericMessage::system("sys"))
            .with(GenericMessage::assistant("script"))
            .with(GenericMessage::user("idea"))
            .with(GenericMessage::user("new"))
            .build()
            .unwrap_err();
        assert!(matches!(err, ScriptError::MessageOrder(_)));
    }

    #[test]
    fn empty_chain_is_rejected() {
        assert!(PromptChain::new().build().is_err());
    }
}
