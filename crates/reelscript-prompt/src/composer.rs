//! Turns a [`GenerationConfig`] into the system/user message pair.
//!
//! The system message is the custom instruction if one was given and holds
//! more than whitespace; in every other case the composer's
//! [`SystemTemplate`] is rendered. A blank override never reaches the wire.
//!
//! ```rust
//! use reelscript_core::config::GenerationConfig;
//! use reelscript_prompt::composer::PromptComposer;
//!
//! let config = GenerationConfig::builder("A story about a tiny bakery.")
//!     .keywords(["bread"])
//!     .build()
//!     .unwrap();
//! let prompt = PromptComposer::studio().compose(&config);
//!
//! assert!(prompt.user.contains("A story about a tiny bakery."));
//! assert!(prompt.user.contains("Keywords: bread"));
//! ```
use reelscript_core::{
    config::{GenerationConfig, OutputLength},
    error::Result,
    generic::GenericMessage,
    template::IntoPrompt,
};
use tracing::{debug, warn};

use crate::{
    chain::PromptChain,
    templates::{SystemTemplate, UserField, UserTemplate},
};

/// The two strings a script request is built around.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedPrompt {
    pub system: String,
    pub user: String,
}

impl ComposedPrompt {
    pub fn system_message(&self) -> GenericMessage {
        GenericMessage::system(self.system.clone())
    }

    pub fn user_message(&self) -> GenericMessage {
        GenericMessage::user(self.user.clone())
    }
}

/// Stateless composer configured with one system and one user template.
#[derive(Debug, Clone, Default)]
pub struct PromptComposer {
    system: SystemTemplate,
    user: UserTemplate,
}

impl PromptComposer {
    pub fn new(system: SystemTemplate, user: UserTemplate) -> Self {
        Self { system, user }
    }

    /// Generic system instruction with the rich user message.
    pub fn studio() -> Self {
        Self::new(SystemTemplate::generic(), UserTemplate::rich())
    }

    /// Language/tone-parameterized system instruction with the minimal user
    /// message.
    ///
    /// The minimal message has no length directive, so a
    /// [`OutputLength::SpokenDuration`] has no effect with this preset. Use a
    /// token budget, or add [`UserField::LengthDirective`] to the template.
    pub fn localized() -> Self {
        Self::new(SystemTemplate::localized(), UserTemplate::minimal())
    }

    pub fn system_template(&self) -> &SystemTemplate {
        &self.system
    }

    pub fn user_template(&self) -> &UserTemplate {
        &self.user
    }

    /// Whether the requested output length reaches the backend at all.
    ///
    /// A token budget always travels as a request parameter. A spoken
    /// duration only exists as a directive in the user message.
    pub fn conveys_output_length(&self, config: &GenerationConfig) -> bool {
        match config.output_length() {
            OutputLength::TokenBudget(_) => true,
            OutputLength::SpokenDuration(_) => self.user.includes(UserField::LengthDirective),
        }
    }

    pub fn compose(&self, config: &GenerationConfig) -> ComposedPrompt {
        if !self.conveys_output_length(config) {
            warn!(
                output_length = %config.output_length(),
                "user template has no length directive, spoken duration is ignored"
            );
        }
        ComposedPrompt {
            system: self.system_instruction(config),
            user: self.user.render(config),
        }
    }

    fn system_instruction(&self, config: &GenerationConfig) -> String {
        match config.custom_instruction() {
            Some(custom) if !custom.trim().is_empty() => custom.to_owned(),
            Some(_) => {
                debug!("custom instruction is blank, using the default template");
                self.system.render(config)
            }
            None => self.system.render(config),
        }
    }

    /// Full ordered message list: system, `references`, new request.
    ///
    /// # Errors
    ///
    /// * [`reelscript_core::error::ScriptError::MessageOrder`] – `references`
    ///   is not a sequence of user/assistant pairs.
    pub fn messages(
        &self,
        config: &GenerationConfig,
        references: impl IntoPrompt<Message = GenericMessage>,
    ) -> Result<Vec<GenericMessage>> {
        let prompt = self.compose(config);
        PromptChain::new()
            .with(prompt.system_message())
            .with(references)
            .with(prompt.user_message())
            .build()
    }
}

#[cfg(test)]
mod tests {
    use reelscript_core::{
        generic::GenericRole,
        options::{Language, Tone},
    };

    use super::*;

    const IDEA: &str = "A story about starting a small business with no budget.";

    fn scenario() -> GenerationConfig {
        GenerationConfig::builder(IDEA)
            .keywords(["entrepreneurship", "motivation", "social media growth"])
            .tone(Tone::Casual)
            .language(Language::English)
            .model("tunable-family-x")
            .temperature(0.8)
            .output_length(OutputLength::TokenBudget(700))
            .build()
            .unwrap()
    }

    #[test]
    fn scenario_user_message_carries_idea_and_joined_keywords() {
        for composer in [PromptComposer::studio(), PromptComposer::localized()] {
            let prompt = composer.compose(&scenario());
            assert!(!prompt.system.trim().is_empty());
            assert!(prompt.user.contains(IDEA));
            assert!(
                prompt
                    .user
                    .contains("entrepreneurship, motivation, social media growth")
            );
        }
    }

    #[test]
    fn empty_keywords_render_none_token() {
        let config = GenerationConfig::builder(IDEA).build().unwrap();
        let prompt = PromptComposer::studio().compose(&config);
        assert!(prompt.user.contains("Keywords: None"));
        assert!(!prompt.user.contains("Keywords: \n"));
    }

    #[test]
    fn custom_instruction_is_used_verbatim() {
        let custom = "  Write like a pirate.\n";
        let config = GenerationConfig::builder(IDEA)
            .custom_instruction(custom)
            .build()
            .unwrap();
        assert_eq!(PromptComposer::studio().compose(&config).system, custom);
    }

    #[test]
    fn blank_custom_instruction_falls_back_to_template() {
        let config = GenerationConfig::builder(IDEA)
            .custom_instruction(" \n ")
            .language(Language::German)
            .build()
            .unwrap();
        let system = PromptComposer::localized().compose(&config).system;
        assert!(system.contains("video script in German."));
    }

    #[test]
    fn localized_preset_only_conveys_token_budgets() {
        let spoken = GenerationConfig::builder(IDEA)
            .output_length(OutputLength::SpokenDuration(90))
            .build()
            .unwrap();

        assert!(!PromptComposer::localized().conveys_output_length(&spoken));
        assert!(!PromptComposer::localized().compose(&spoken).user.contains("90 seconds"));
        assert!(PromptComposer::localized().conveys_output_length(&scenario()));
        assert!(PromptComposer::studio().conveys_output_length(&spoken));
        assert!(PromptComposer::studio().compose(&spoken).user.contains("90 seconds"));
    }

    #[test]
    fn length_directive_restores_spoken_duration() {
        let spoken = GenerationConfig::builder(IDEA)
            .output_length(OutputLength::SpokenDuration(90))
            .build()
            .unwrap();
        let composer = PromptComposer::new(
            SystemTemplate::localized(),
            UserTemplate::minimal().with_field(UserField::LengthDirective),
        );
        assert!(composer.conveys_output_length(&spoken));
    }

    #[test]
    fn compose_is_pure() {
        let composer = PromptComposer::studio();
        assert_eq!(composer.compose(&scenario()), composer.compose(&scenario()));
    }

    #[test]
    fn messages_wrap_references_between_system_and_request() {
        let references = vec![
            GenericMessage::user("(Example) Script idea: old"),
            GenericMessage::assistant("old script"),
        ];
        let messages = PromptComposer::studio()
            .messages(&scenario(), references)
            .unwrap();

        assert_eq!(messages.len(), 4);
        assert_eq!(messages[0].role, GenericRole::System);
        assert_eq!(messages[2].content, "old script");
        assert!(messages[3].content.contains(IDEA));
    }
}
