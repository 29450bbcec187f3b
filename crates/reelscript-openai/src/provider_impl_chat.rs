use std::{future::Future, pin::Pin, sync::Arc};

use reelscript_core::{
    error::Result,
    generic::GenerationOutput,
    provider::{GenerationRequest, ScriptGenerationProvider},
};
use tracing::{debug, warn};

use crate::{
    OpenAiAdapter,
    api_v1::{ChatCompletionRequest, ChatCompletionResponse, FinishReason},
    error::OpenAiError,
};

impl ScriptGenerationProvider for OpenAiAdapter {
    fn generate<'p>(
        &'p self,
        request: GenerationRequest,
    ) -> Pin<Box<dyn Future<Output = Result<GenerationOutput>> + Send + 'p>> {
        let client = Arc::clone(&self.client);

        Box::pin(async move {
            let request = ChatCompletionRequest::from(request);
            let response = client.chat_completion(request).await?;
            Ok(into_output(response)?)
        })
    }
}

fn into_output(
    mut response: ChatCompletionResponse,
) -> std::result::Result<GenerationOutput, OpenAiError> {
    let usage = response.usage.into();

    if response.choices.is_empty() {
        return Err(OpenAiError::Format("response has no choices".into()));
    }
    let first_choice = response.choices.swap_remove(0);

    match first_choice.finish_reason {
        Some(FinishReason::Length) => {
            warn!(model = %response.model, "script was cut off by the output length limit");
        }
        Some(FinishReason::ContentFilter) => {
            return Err(OpenAiError::Format(
                "response was withheld by the content filter".into(),
            ));
        }
        _ => {}
    }

    let message = first_choice.message;
    match message.content.filter(|text| !text.trim().is_empty()) {
        Some(text) => {
            debug!(model = %response.model, "chat completion succeeded");
            Ok(GenerationOutput { text, usage })
        }
        None => Err(OpenAiError::Format(match message.refusal {
            Some(refusal) => format!("model refused: {refusal}"),
            None => "response has no content".into(),
        })),
    }
}
