//! The immutable [`GenerationConfig`] a single script request is built from.
//!
//! Construction goes through [`GenerationConfigBuilder`], which clamps the
//! numeric settings into their valid ranges and rejects inputs that have no
//! safe default.
//!
//! ```rust
//! use reelscript_core::config::{GenerationConfig, OutputLength};
//! use reelscript_core::options::Tone;
//!
//! let config = GenerationConfig::builder("A motivational video about failure.")
//!     .keywords(["resilience", "success"])
//!     .tone(Tone::Inspirational)
//!     .temperature(1.7)
//!     .output_length(OutputLength::SpokenDuration(600))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.temperature(), 1.0);
//! assert_eq!(config.output_length(), OutputLength::SpokenDuration(180));
//! ```
use std::{fmt::Display, ops::RangeInclusive};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    error::{Result, ScriptError},
    model::Model,
    options::{Language, Platform, Tone},
};

pub const TEMPERATURE_RANGE: RangeInclusive<f64> = 0.0..=1.0;
pub const TOKEN_BUDGET_RANGE: RangeInclusive<u32> = 16..=4096;
pub const SPOKEN_SECONDS_RANGE: RangeInclusive<u32> = 20..=180;

pub const DEFAULT_TEMPERATURE: f64 = 0.7;
pub const DEFAULT_SPOKEN_SECONDS: u32 = 60;

/// How long the generated script should be.
///
/// The two controls are alternatives: a token budget is forwarded to the
/// backend as a request parameter, a spoken duration only shows up as a
/// directive inside the user message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputLength {
    TokenBudget(u32),
    SpokenDuration(u32),
}

impl OutputLength {
    /// Clamp the value into the valid range of its kind.
    pub fn clamped(self) -> Self {
        match self {
            OutputLength::TokenBudget(tokens) => OutputLength::TokenBudget(clamp_range(
                tokens,
                &TOKEN_BUDGET_RANGE,
            )),
            OutputLength::SpokenDuration(seconds) => {
                OutputLength::SpokenDuration(clamp_range(seconds, &SPOKEN_SECONDS_RANGE))
            }
        }
    }

    /// The token budget, if this is a token-budget control.
    pub fn token_budget(self) -> Option<u32> {
        match self {
            OutputLength::TokenBudget(tokens) => Some(tokens),
            OutputLength::SpokenDuration(_) => None,
        }
    }
}

impl Default for OutputLength {
    fn default() -> Self {
        OutputLength::SpokenDuration(DEFAULT_SPOKEN_SECONDS)
    }
}

impl Display for OutputLength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputLength::TokenBudget(tokens) => write!(f, "{tokens} tokens"),
            OutputLength::SpokenDuration(seconds) => write!(f, "{seconds} seconds"),
        }
    }
}

fn clamp_range(value: u32, range: &RangeInclusive<u32>) -> u32 {
    value.clamp(*range.start(), *range.end())
}

/// Clamp a temperature into [`TEMPERATURE_RANGE`]. NaN maps to
/// [`DEFAULT_TEMPERATURE`].
pub fn clamp_temperature(temperature: f64) -> f64 {
    if temperature.is_nan() {
        return DEFAULT_TEMPERATURE;
    }
    temperature.clamp(*TEMPERATURE_RANGE.start(), *TEMPERATURE_RANGE.end())
}

/// Split comma-separated harness input into keywords.
///
/// ```rust
/// use reelscript_core::config::parse_keywords;
/// assert_eq!(parse_keywords("resilience, success,,  persistence"),
///            vec!["resilience", "success", "persistence"]);
/// ```
pub fn parse_keywords(input: &str) -> Vec<String> {
    normalize_keywords(input.split(','))
}

fn normalize_keywords<I, S>(keywords: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out: Vec<String> = vec![];
    for keyword in keywords {
        let keyword = keyword.as_ref().trim();
        if !keyword.is_empty() && !out.iter().any(|known| known == keyword) {
            out.push(keyword.to_owned());
        }
    }
    out
}

/// Everything one generation request is configured with.
///
/// Serialize-only: every instance goes through
/// [`GenerationConfigBuilder::build`].
///
/// ```compile_fail
/// use reelscript_core::config::GenerationConfig;
/// let _: GenerationConfig = serde_json::from_str(r#"{"idea": ""}"#).unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationConfig {
    idea: String,
    keywords: Vec<String>,
    tone: Tone,
    language: Language,
    platform: Option<Platform>,
    output_length: OutputLength,
    temperature: f64,
    model: Model,
    custom_instruction: Option<String>,
}

impl GenerationConfig {
    pub fn builder(idea: impl Into<String>) -> GenerationConfigBuilder {
        GenerationConfigBuilder::new(idea)
    }

    pub fn idea(&self) -> &str {
        &self.idea
    }

    /// Ordered, de-duplicated keywords. May be empty.
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn tone(&self) -> Tone {
        self.tone
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn platform(&self) -> Option<Platform> {
        self.platform
    }

    pub fn output_length(&self) -> OutputLength {
        self.output_length
    }

    /// Always within [`TEMPERATURE_RANGE`].
    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    /// `None` when no override was given, `Some` (possibly blank) otherwise.
    pub fn custom_instruction(&self) -> Option<&str> {
        self.custom_instruction.as_deref()
    }
}

#[derive(Debug, Clone)]
pub struct GenerationConfigBuilder {
    idea: String,
    keywords: Vec<String>,
    tone: Tone,
    language: Language,
    platform: Option<Platform>,
    output_length: OutputLength,
    temperature: f64,
    model: Model,
    custom_instruction: Option<String>,
}

impl GenerationConfigBuilder {
    pub fn new(idea: impl Into<String>) -> Self {
        Self {
            idea: idea.into(),
            keywords: vec![],
            tone: Tone::default(),
            language: Language::default(),
            platform: None,
            output_length: OutputLength::default(),
            temperature: DEFAULT_TEMPERATURE,
            model: Model::default(),
            custom_instruction: None,
        }
    }

    pub fn keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.keywords = normalize_keywords(keywords);
        self
    }

    pub fn tone(mut self, tone: Tone) -> Self {
        self.tone = tone;
        self
    }

    pub fn language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    pub fn platform(mut self, platform: impl Into<Option<Platform>>) -> Self {
        self.platform = platform.into();
        self
    }

    pub fn output_length(mut self, output_length: OutputLength) -> Self {
        self.output_length = output_length;
        self
    }

    pub fn temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn model(mut self, model: impl Into<Model>) -> Self {
        self.model = model.into();
        self
    }

    pub fn custom_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.custom_instruction = Some(instruction.into());
        self
    }

    /// Validate and clamp.
    ///
    /// # Errors
    ///
    /// * [`ScriptError::Configuration`] – blank idea text or a NaN temperature.
    pub fn build(self) -> Result<GenerationConfig> {
        if self.idea.trim().is_empty() {
            return Err(ScriptError::configuration("script idea must not be empty"));
        }
        if self.temperature.is_nan() {
            return Err(ScriptError::configuration("temperature must be a number"));
        }

        let temperature = clamp_temperature(self.temperature);
        if temperature != self.temperature {
            debug!(
                requested = self.temperature,
                clamped = temperature,
                "temperature clamped"
            );
        }
        let output_length = self.output_length.clamped();
        if output_length != self.output_length {
            debug!(
                requested = %self.output_length,
                clamped = %output_length,
                "output length clamped"
            );
        }

        Ok(GenerationConfig {
            idea: self.idea,
            keywords: self.keywords,
            tone: self.tone,
            language: self.language,
            platform: self.platform,
            output_length,
            temperature,
            model: self.model,
            custom_instruction: self.custom_instruction,
        })
    }
}
