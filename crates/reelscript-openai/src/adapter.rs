use std::{env, sync::Arc, time::Duration};

use reelscript_core::error::{Result, ScriptError};

use crate::client::{DEFAULT_TIMEOUT, OpenAiClient};

pub const API_KEY_ENV: &str = "OPENAI_API_KEY";
pub const BASE_URL_ENV: &str = "OPENAI_BASE_URL";

/// Wires the HTTP client [`OpenAiClient`] into a value that implements
/// [`reelscript_core::provider::ScriptGenerationProvider`].
///
/// All user-facing functionality sits on the generic
/// [`reelscript_core::ScriptClient`] once the adapter is plugged in.
pub struct OpenAiAdapter {
    pub(crate) client: Arc<OpenAiClient>,
}

/// Builder for [`OpenAiAdapter`].
///
/// ```rust,no_run
/// use reelscript_openai::OpenAiAdapterBuilder;
///
/// let backend = OpenAiAdapterBuilder::new_from_env()
///     .build()
///     .expect("OPENAI_API_KEY must be set");
/// ```
#[derive(Debug, Default)]
pub struct OpenAiAdapterBuilder {
    pub(crate) api_key: Option<String>,
    pub(crate) base_url: Option<String>,
    pub(crate) timeout: Option<Duration>,
}

impl OpenAiAdapterBuilder {
    /// Create an *empty* builder. Remember to supply an API key manually.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load `OPENAI_API_KEY` and, if present, `OPENAI_BASE_URL`.
    ///
    /// Never panics. Missing keys only surface during [`Self::build`].
    pub fn new_from_env() -> Self {
        Self {
            api_key: non_empty_env(API_KEY_ENV),
            base_url: non_empty_env(BASE_URL_ENV),
            timeout: None,
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Point the adapter at an OpenAI-compatible server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Finalise the builder and return a ready-to-use adapter.
    ///
    /// # Errors
    ///
    /// * [`ScriptError::Configuration`] – if the API key is missing.
    /// * [`ScriptError::Upstream`] – if the HTTP client cannot be built.
    pub fn build(self) -> Result<OpenAiAdapter> {
        let api_key = self.api_key.ok_or_else(|| {
            ScriptError::configuration(format!("missing env variable: `{API_KEY_ENV}`"))
        })?;

        let client = OpenAiClient::new(
            api_key,
            self.base_url,
            self.timeout.unwrap_or(DEFAULT_TIMEOUT),
        )?;

        Ok(OpenAiAdapter {
            client: Arc::new(client),
        })
    }
}

fn non_empty_env(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}
