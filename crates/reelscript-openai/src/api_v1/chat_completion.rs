use reelscript_core::{
    generic::{GenericMessage, GenericRole},
    parameters::ParameterSet,
    provider::GenerationRequest,
};
use serde::{Deserialize, Serialize};

use super::common::Usage;

/// Body of `POST /chat/completions`.
///
/// Sampling and length settings are not modelled as fields: the
/// family-specific [`ParameterSet`] is flattened into the body as-is, so
/// `max_tokens` and `max_completion_tokens` never appear together.
#[derive(Debug, Serialize, Clone)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatCompletionMessage>,
    #[serde(flatten)]
    pub parameters: ParameterSet,
}

impl ChatCompletionRequest {
    pub fn new(model: impl Into<String>, messages: Vec<ChatCompletionMessage>) -> Self {
        Self {
            model: model.into(),
            messages,
            parameters: ParameterSet::new(),
        }
    }

    pub fn with_parameters(mut self, parameters: ParameterSet) -> Self {
        self.parameters = parameters;
        self
    }
}

impl From<GenerationRequest> for ChatCompletionRequest {
    fn from(value: GenerationRequest) -> Self {
        Self::new(
            value.model.id(),
            value.messages.into_iter().map(Into::into).collect(),
        )
        .with_parameters(value.parameters)
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MessageRole {
    System,
    User,
    Assistant,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ChatCompletionMessage {
    pub role: MessageRole,
    pub content: String,
}

impl From<GenericRole> for MessageRole {
    fn from(value: GenericRole) -> Self {
        match value {
            GenericRole::System => MessageRole::System,
            GenericRole::User => MessageRole::User,
            GenericRole::Assistant => MessageRole::Assistant,
        }
    }
}

impl From<GenericMessage> for ChatCompletionMessage {
    fn from(value: GenericMessage) -> Self {
        Self {
            role: value.role.into(),
            content: value.content,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ChatCompletionMessageForResponse {
    pub role: MessageRole,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub refusal: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletionChoice {
    pub index: i64,
    pub message: ChatCompletionMessageForResponse,
    pub finish_reason: Option<FinishReason>,
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    pub id: Option<String>,
    pub object: String,
    pub created: i64,
    pub model: String,
    pub choices: Vec<ChatCompletionChoice>,
    #[serde(default)]
    pub usage: Usage,
    pub system_fingerprint: Option<String>,
}

#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FinishReason {
    Stop,
    Length,
    ContentFilter,
    ToolCalls,
    FunctionCall,
}

#[cfg(test)]
mod tests {
    use reelscript_core::{
        config::OutputLength,
        model::{Model, OpenAiModel},
        parameters::ParameterAdapter,
    };
    use serde_json::json;

    use super::*;

    fn request_for(model: Model, output_length: OutputLength) -> GenerationRequest {
        let parameters = ParameterAdapter::default().adapt(&model, 0.8, output_length);
        GenerationRequest::new(
            model,
            vec![GenericMessage::system("sys"), GenericMessage::user("idea")],
            parameters,
        )
    }

    #[test]
    fn tunable_request_flattens_max_tokens() {
        let request: ChatCompletionRequest =
            request_for(Model::from("tunable-family-x"), OutputLength::TokenBudget(700)).into();

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "model": "tunable-family-x",
                "messages": [
                    { "role": "system", "content": "sys" },
                    { "role": "user", "content": "idea" }
                ],
                "temperature": 0.8,
                "max_tokens": 700
            })
        );
    }

    #[test]
    fn fixed_request_uses_completion_token_key() {
        let request: ChatCompletionRequest =
            request_for(OpenAiModel::Gpt5.into(), OutputLength::TokenBudget(900)).into();
        let body = serde_json::to_value(&request).unwrap();

        assert_eq!(body["model"], "gpt-5");
        assert_eq!(body["temperature"], 1.0);
        assert_eq!(body["max_completion_tokens"], 900);
        assert!(body.get("max_tokens").is_none());
    }

    #[test]
    fn spoken_duration_sends_no_length_key() {
        let request: ChatCompletionRequest =
            request_for(OpenAiModel::Gpt4oMini.into(), OutputLength::SpokenDuration(60)).into();
        let body = serde_json::to_value(&request).unwrap();

        assert!(body.get("max_tokens").is_none());
        assert!(body.get("max_completion_tokens").is_none());
    }

    #[test]
    fn response_parses_content_and_usage() {
        let raw = json!({
            "id": "chatcmpl-1",
            "object": "chat.completion",
            "created": 1_700_000_000,
            "model": "gpt-4o-mini",
            "choices": [{
                "index": 0,
                "message": { "role": "assistant", "content": "Hey there!" },
                "finish_reason": "stop"
            }],
            "usage": { "prompt_tokens": 12, "completion_tokens": 3, "total_tokens": 15 },
            "system_fingerprint": null
        });

        let response: ChatCompletionResponse = serde_json::from_value(raw).unwrap();
        assert_eq!(response.choices.len(), 1);
        assert_eq!(response.choices[0].message.content.as_deref(), Some("Hey there!"));
        assert_eq!(response.choices[0].finish_reason, Some(FinishReason::Stop));
        assert_eq!(response.usage.total_tokens, 15);
    }
}
