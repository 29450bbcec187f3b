//! Model-family aware request parameters.
//!
//! Different model families accept different, sometimes mutually exclusive
//! parameters for the same setting. [`ParameterAdapter`] isolates that so
//! the rest of the workspace stays family-agnostic:
//!
//! | family                         | `temperature`   | output length key       |
//! |--------------------------------|-----------------|-------------------------|
//! | [`ModelFamily::FixedSampling`] | always `1.0`    | `max_completion_tokens` |
//! | [`ModelFamily::TunableSampling`] | clamped input | `max_tokens`            |
//!
//! A [`OutputLength::SpokenDuration`] control never produces a length key;
//! it is carried by the user message instead.
use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use crate::{
    config::{OutputLength, clamp_temperature},
    model::{FamilyResolution, FamilyTable, Model, ModelFamily},
};

pub const TEMPERATURE: &str = "temperature";
pub const MAX_TOKENS: &str = "max_tokens";
pub const MAX_COMPLETION_TOKENS: &str = "max_completion_tokens";

/// Temperature the fixed-sampling family is pinned to.
pub const FIXED_TEMPERATURE: f64 = 1.0;

/// Parameter name to value, in a stable order. Backends flatten it into
/// their request body.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ParameterSet(BTreeMap<String, Value>);

impl ParameterSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn temperature(&self) -> Option<f64> {
        self.get(TEMPERATURE).and_then(Value::as_f64)
    }

    /// The emitted output-length key and its value, whichever family emitted it.
    pub fn output_length(&self) -> Option<(&str, u64)> {
        [MAX_TOKENS, MAX_COMPLETION_TOKENS]
            .into_iter()
            .find_map(|key| self.get(key).and_then(Value::as_u64).map(|v| (key, v)))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Maps `(model, temperature, output length)` to a [`ParameterSet`].
#[derive(Debug, Clone, Default)]
pub struct ParameterAdapter {
    families: FamilyTable,
}

impl ParameterAdapter {
    pub fn new(families: FamilyTable) -> Self {
        Self { families }
    }

    pub fn families(&self) -> &FamilyTable {
        &self.families
    }

    /// Family lookup, exposed so a harness can grey out the temperature
    /// control for fixed-sampling models.
    pub fn resolve(&self, model: &Model) -> FamilyResolution {
        self.families.resolve(model)
    }

    /// Build the parameter set for one request. Deterministic.
    pub fn adapt(
        &self,
        model: &Model,
        temperature: f64,
        output_length: OutputLength,
    ) -> ParameterSet {
        let family = self.resolve(model).family;
        let mut parameters = ParameterSet::new();

        let (temperature, length_key) = match family {
            ModelFamily::FixedSampling => (FIXED_TEMPERATURE, MAX_COMPLETION_TOKENS),
            ModelFamily::TunableSampling => (clamp_temperature(temperature), MAX_TOKENS),
        };
        parameters.insert(TEMPERATURE, temperature);

        if let Some(tokens) = output_length.clamped().token_budget() {
            parameters.insert(length_key, tokens);
        }

        parameters
    }
}
