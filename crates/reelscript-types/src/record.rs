//! One completed generation, frozen at append time.
use std::fmt::Display;

use chrono::{DateTime, Utc};
use reelscript_core::{
    config::GenerationConfig, generic::GenerationOutput, parameters::ParameterSet,
};
use serde::{Deserialize, Serialize};

/// Strictly increasing identifier of a record within one session, starting
/// at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SequenceNumber(u64);

impl SequenceNumber {
    pub const FIRST: SequenceNumber = SequenceNumber(1);

    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn get(self) -> u64 {
        self.0
    }

    pub(crate) fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl From<u64> for SequenceNumber {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl Display for SequenceNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A successful generation that has not been numbered yet.
///
/// `temperature` is the value the backend actually sampled with. It starts
/// out as the configured one and is overridden with
/// [`GenerationOutcome::with_sent_parameters`] once the request is known.
#[derive(Debug, Clone)]
pub struct GenerationOutcome {
    pub config: GenerationConfig,
    pub temperature: f64,
    pub script: String,
    pub total_tokens: u64,
}

impl GenerationOutcome {
    pub fn new(config: GenerationConfig, output: GenerationOutput) -> Self {
        Self {
            temperature: config.temperature(),
            config,
            script: output.text,
            total_tokens: output.usage.total_tokens,
        }
    }

    /// Take the temperature from the parameters that went on the wire.
    pub fn with_sent_parameters(mut self, parameters: &ParameterSet) -> Self {
        if let Some(temperature) = parameters.temperature() {
            self.temperature = temperature;
        }
        self
    }
}

/// Immutable history entry. Only [`crate::history::ReferenceHistoryStore`]
/// creates these.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationRecord {
    sequence: SequenceNumber,
    created_at: DateTime<Utc>,
    config: GenerationConfig,
    temperature: f64,
    script: String,
    total_tokens: u64,
}

impl GenerationRecord {
    pub(crate) fn new(sequence: SequenceNumber, outcome: GenerationOutcome) -> Self {
        Self {
            sequence,
            created_at: Utc::now(),
            config: outcome.config,
            temperature: outcome.temperature,
            script: outcome.script,
            total_tokens: outcome.total_tokens,
        }
    }

    pub fn sequence(&self) -> SequenceNumber {
        self.sequence
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    pub fn idea(&self) -> &str {
        self.config.idea()
    }

    /// Temperature the script was sampled at, which differs from
    /// `config().temperature()` for fixed-sampling models.
    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    pub fn script(&self) -> &str {
        &self.script
    }

    pub fn total_tokens(&self) -> u64 {
        self.total_tokens
    }
}

#[cfg(test)]
mod tests {
    use reelscript_core::{
        config::GenerationConfig,
        generic::{GenerationOutput, GenericUsageReport},
        options::Platform,
    };

    use super::*;

    #[test]
    fn record_exports_as_json() {
        let config = GenerationConfig::builder("Street food tour")
            .platform(Platform::YouTube)
            .model("gpt-5-mini")
            .build()
            .unwrap();
        let outcome = GenerationOutcome::new(
            config,
            GenerationOutput {
                text: "Let's eat.".into(),
                usage: GenericUsageReport {
                    prompt_tokens: 5,
                    completion_tokens: 6,
                    total_tokens: 11,
                },
            },
        );
        let record = GenerationRecord::new(SequenceNumber::new(4), outcome);

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["sequence"], 4);
        assert_eq!(json["script"], "Let's eat.");
        assert_eq!(json["total_tokens"], 11);
        assert_eq!(json["config"]["platform"], "YouTube");
        assert_eq!(json["config"]["model"], "gpt-5-mini");
        assert_eq!(json["temperature"], 0.7);
        assert!(json["created_at"].is_string());
    }

    #[test]
    fn sent_temperature_replaces_configured_one() {
        let config = GenerationConfig::builder("Street food tour")
            .model("gpt-5")
            .temperature(0.1)
            .build()
            .unwrap();
        let mut sent = ParameterSet::new();
        sent.insert("temperature", 1.0);

        let outcome = GenerationOutcome::new(
            config,
            GenerationOutput {
                text: "Let's eat.".into(),
                usage: GenericUsageReport::default(),
            },
        )
        .with_sent_parameters(&sent);
        let record = GenerationRecord::new(SequenceNumber::FIRST, outcome);

        assert_eq!(record.temperature(), 1.0);
        assert_eq!(record.config().temperature(), 0.1);
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["temperature"], 1.0);
    }

    #[test]
    fn missing_sent_temperature_keeps_configured_one() {
        let config = GenerationConfig::builder("Street food tour")
            .temperature(0.4)
            .build()
            .unwrap();
        let outcome = GenerationOutcome::new(
            config,
            GenerationOutput {
                text: "Let's eat.".into(),
                usage: GenericUsageReport::default(),
            },
        )
        .with_sent_parameters(&ParameterSet::new());
        assert_eq!(outcome.temperature, 0.4);
    }
}
