use std::{future::Future, pin::Pin};

use crate::{
    error::Result,
    generic::{GenerationOutput, GenericMessage, GenericRole},
    model::Model,
    parameters::ParameterSet,
};

/// A **backend** turns a script request into a network call to a concrete
/// provider and parses the reply.
///
/// One method, one round-trip, no streaming. The method returns a
/// [`Pin<Box<dyn Future>>`] so the trait stays object-safe without pulling
/// in `async_trait`.
pub trait ScriptGenerationProvider: Send + Sync {
    /// Submit `request` and wait for the generated text.
    ///
    /// Implementations must map every transport or API failure onto
    /// [`crate::error::ScriptError::Upstream`].
    fn generate<'p>(
        &'p self,
        request: GenerationRequest,
    ) -> Pin<Box<dyn Future<Output = Result<GenerationOutput>> + Send + 'p>>;
}

/// Everything a backend needs for one call.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub model: Model,
    pub messages: Vec<GenericMessage>,
    pub parameters: ParameterSet,
}

impl GenerationRequest {
    pub fn new(model: Model, messages: Vec<GenericMessage>, parameters: ParameterSet) -> Self {
        Self {
            model,
            messages,
            parameters,
        }
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    pub fn messages(&self) -> &[GenericMessage] {
        &self.messages
    }

    /// Content of the leading system message, if any.
    pub fn system_message(&self) -> Option<&str> {
        self.messages
            .first()
            .filter(|message| message.role == GenericRole::System)
            .map(|message| message.content.as_str())
    }

    /// Content of the trailing user message, if any.
    pub fn user_message(&self) -> Option<&str> {
        self.messages
            .last()
            .filter(|message| message.role == GenericRole::User)
            .map(|message| message.content.as_str())
    }
}
