use reqwest::{
    Client as HttpClient,
    header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue},
};
use std::time::Duration;
use tracing::{debug, warn};

use crate::{
    api_v1::{ChatCompletionRequest, ChatCompletionResponse},
    error::OpenAiError,
};

pub(crate) const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub(crate) const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Minimal HTTP client for OpenAI’s *chat/completions* endpoint.
///
/// * Non-streaming only (one request ▶ one response), no retries.
/// * Shares a single `reqwest::Client`, so cloning `OpenAiClient` is cheap.
#[derive(Clone)]
pub struct OpenAiClient {
    api_key: String,
    http: HttpClient,
    base: String,
}

impl OpenAiClient {
    /// Build a default `reqwest` client with the given timeout.
    pub fn new(
        api_key: impl Into<String>,
        base_url: Option<String>,
        timeout: Duration,
    ) -> Result<Self, OpenAiError> {
        let http = HttpClient::builder().timeout(timeout).build()?;
        Ok(Self::with_http(api_key, http, base_url))
    }

    /// Build with a custom `reqwest::Client` in case the caller needs proxy
    /// settings, custom TLS, etc.
    pub fn with_http(
        api_key: impl Into<String>,
        http: HttpClient,
        base_url: Option<String>,
    ) -> Self {
        let base = base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_owned());
        Self {
            api_key: api_key.into(),
            http,
            base: base.trim_end_matches('/').to_owned(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base
    }

    fn headers(&self) -> Result<HeaderMap, OpenAiError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", self.api_key))?,
        );
        Ok(headers)
    }

    /// Perform a **non-streaming** chat completion.
    pub async fn chat_completion(
        &self,
        request: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, OpenAiError> {
        let url = format!("{}/chat/completions", self.base);
        debug!(%url, model = %request.model, "sending chat completion");

        let resp = self
            .http
            .post(url)
            .headers(self.headers()?)
            .json(&request)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            warn!(%status, "chat completion rejected");
            return Err(OpenAiError::Api { status, body });
        }

        let bytes = resp.bytes().await?;
        let parsed: ChatCompletionResponse = serde_json::from_slice(&bytes)?;
        Ok(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_defaults_and_trims_trailing_slash() {
        let default = OpenAiClient::with_http("sk-test", HttpClient::new(), None);
        assert_eq!(default.base_url(), DEFAULT_BASE_URL);

        let custom = OpenAiClient::with_http(
            "sk-test",
            HttpClient::new(),
            Some("http://localhost:8080/v1/".into()),
        );
        assert_eq!(custom.base_url(), "http://localhost:8080/v1");
    }

    #[test]
    fn api_key_with_newline_is_rejected() {
        let client = OpenAiClient::with_http("sk-\nbroken", HttpClient::new(), None);
        assert!(matches!(client.headers(), Err(OpenAiError::InvalidApiKey(_))));
    }
}
