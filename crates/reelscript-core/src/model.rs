//! Model identifiers and the model-family partition.
//!
//! Applications pick an [`OpenAiModel`] variant instead of typing literal
//! strings such as `"gpt-4o-mini"`. Anything the enum does not cover travels
//! as [`Model::Custom`], which keeps self-hosted or freshly released models
//! usable without a code change.
//!
//! Backends disagree on which request parameters a model accepts. The
//! [`FamilyTable`] sorts identifiers into a [`ModelFamily`] once per request
//! so the rest of the workspace never branches on model names.
//!
//! # Adding more models
//!
//! 1. Add the variant to [`OpenAiModel`] and its identifier to
//!    [`OpenAiModel::id`].
//! 2. If it belongs to a new prefix, register the prefix in
//!    [`FamilyTable::default`] (or at runtime with
//!    [`FamilyTable::with_prefix`]).
//!
//! ```rust
//! use reelscript_core::model::{FamilyTable, Model, ModelFamily, OpenAiModel};
//!
//! let table = FamilyTable::default();
//! assert_eq!(table.resolve(&Model::from(OpenAiModel::Gpt5Mini)).family,
//!            ModelFamily::FixedSampling);
//! ```
use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Universal identifier for an LLM model.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum Model {
    /// Built-in OpenAI models.
    OpenAi(OpenAiModel),
    /// Any model name not covered by a dedicated enum.
    Custom(String),
}

impl Model {
    /// The identifier sent on the wire.
    pub fn id(&self) -> &str {
        match self {
            Model::OpenAi(model) => model.id(),
            Model::Custom(custom) => custom,
        }
    }
}

impl Default for Model {
    fn default() -> Self {
        Model::OpenAi(OpenAiModel::Gpt4oMini)
    }
}

impl Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// Never fails: names outside [`OpenAiModel::ALL`] become [`Model::Custom`].
impl FromStr for Model {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Ok(OpenAiModel::ALL
            .iter()
            .copied()
            .find(|model| model.id() == s)
            .map(Model::OpenAi)
            .unwrap_or_else(|| Model::Custom(s.to_owned())))
    }
}

impl From<String> for Model {
    fn from(value: String) -> Self {
        match value.parse() {
            Ok(model) => model,
            Err(never) => match never {},
        }
    }
}

impl From<&str> for Model {
    fn from(value: &str) -> Self {
        Model::from(value.to_owned())
    }
}

impl From<Model> for String {
    fn from(value: Model) -> Self {
        value.id().to_owned()
    }
}

impl From<OpenAiModel> for Model {
    fn from(val: OpenAiModel) -> Self {
        Model::OpenAi(val)
    }
}

/// Models a harness offers in its picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpenAiModel {
    Gpt5,
    Gpt5Mini,
    Gpt5Nano,
    Gpt4_1,
    Gpt4_1Mini,
    Gpt4_1Nano,
    Gpt4o,
    Gpt4oMini,
}

impl OpenAiModel {
    pub const ALL: [OpenAiModel; 8] = [
        OpenAiModel::Gpt5,
        OpenAiModel::Gpt5Mini,
        OpenAiModel::Gpt5Nano,
        OpenAiModel::Gpt4_1,
        OpenAiModel::Gpt4_1Mini,
        OpenAiModel::Gpt4_1Nano,
        OpenAiModel::Gpt4o,
        OpenAiModel::Gpt4oMini,
    ];

    pub fn id(self) -> &'static str {
        match self {
            OpenAiModel::Gpt5 => "gpt-5",
            OpenAiModel::Gpt5Mini => "gpt-5-mini",
            OpenAiModel::Gpt5Nano => "gpt-5-nano",
            OpenAiModel::Gpt4_1 => "gpt-4.1",
            OpenAiModel::Gpt4_1Mini => "gpt-4.1-mini",
            OpenAiModel::Gpt4_1Nano => "gpt-4.1-nano",
            OpenAiModel::Gpt4o => "gpt-4o",
            OpenAiModel::Gpt4oMini => "gpt-4o-mini",
        }
    }
}

/// Partition of models sharing the same accepted sampling/length parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelFamily {
    /// Temperature is pinned to `1.0`; output length is `max_completion_tokens`.
    FixedSampling,
    /// Temperature is caller-controlled; output length is `max_tokens`.
    TunableSampling,
}

impl ModelFamily {
    /// Whether a harness should offer a temperature control at all.
    pub fn temperature_is_tunable(self) -> bool {
        matches!(self, ModelFamily::TunableSampling)
    }
}

/// Outcome of a family lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FamilyResolution {
    pub family: ModelFamily,
    /// `false` when no prefix matched and the tunable family was assumed.
    pub recognized: bool,
}

/// Prefix table mapping model identifiers to their [`ModelFamily`].
///
/// The longest matching prefix wins, so `"gpt-4o-mini"` can be special-cased
/// without disturbing `"gpt-4o"`.
#[derive(Debug, Clone)]
pub struct FamilyTable {
    prefixes: Vec<(String, ModelFamily)>,
}

impl Default for FamilyTable {
    fn default() -> Self {
        Self::empty()
            .with_prefix("gpt-5", ModelFamily::FixedSampling)
            .with_prefix("o1", ModelFamily::FixedSampling)
            .with_prefix("o3", ModelFamily::FixedSampling)
            .with_prefix("o4", ModelFamily::FixedSampling)
            .with_prefix("gpt-4.1", ModelFamily::TunableSampling)
            .with_prefix("gpt-4o", ModelFamily::TunableSampling)
    }
}

impl FamilyTable {
    /// A table that recognizes nothing; every model falls back to the
    /// tunable family.
    pub fn empty() -> Self {
        Self { prefixes: vec![] }
    }

    /// Register (or re-assign) `prefix`.
    pub fn with_prefix(mut self, prefix: impl Into<String>, family: ModelFamily) -> Self {
        let prefix = prefix.into();
        self.prefixes.retain(|(known, _)| *known != prefix);
        self.prefixes.push((prefix, family));
        self
    }

    /// Resolve `model` to its family. Unknown identifiers fail open into
    /// [`ModelFamily::TunableSampling`].
    pub fn resolve(&self, model: &Model) -> FamilyResolution {
        let id = model.id();
        let matched = self
            .prefixes
            .iter()
            .filter(|(prefix, _)| id.starts_with(prefix.as_str()))
            .max_by_key(|(prefix, _)| prefix.len());

        match matched {
            Some((_, family)) => FamilyResolution {
                family: *family,
                recognized: true,
            },
            None => {
                warn!(model = id, "unrecognized model family, assuming tunable sampling");
                FamilyResolution {
                    family: ModelFamily::TunableSampling,
                    recognized: false,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_names_parse_into_enum_variants() {
        assert_eq!(
            "gpt-4.1-nano".parse::<Model>().unwrap(),
            Model::OpenAi(OpenAiModel::Gpt4_1Nano)
        );
        assert_eq!(
            Model::from("my-local-llama"),
            Model::Custom("my-local-llama".into())
        );
    }

    #[test]
    fn every_gpt5_variant_is_fixed_sampling() {
        let table = FamilyTable::default();
        for model in [
            OpenAiModel::Gpt5,
            OpenAiModel::Gpt5Mini,
            OpenAiModel::Gpt5Nano,
        ] {
            let resolution = table.resolve(&model.into());
            assert_eq!(resolution.family, ModelFamily::FixedSampling);
            assert!(resolution.recognized);
        }
    }

    #[test]
    fn unknown_model_fails_open() {
        let resolution = FamilyTable::default().resolve(&Model::from("tunable-family-x"));
        assert_eq!(resolution.family, ModelFamily::TunableSampling);
        assert!(!resolution.recognized);
    }

    #[test]
    fn longest_prefix_wins() {
        let table = FamilyTable::default().with_prefix("gpt-4o-mini", ModelFamily::FixedSampling);
        assert_eq!(
            table.resolve(&OpenAiModel::Gpt4oMini.into()).family,
            ModelFamily::FixedSampling
        );
        assert_eq!(
            table.resolve(&OpenAiModel::Gpt4o.into()).family,
            ModelFamily::TunableSampling
        );
    }

    #[test]
    fn model_serializes_as_plain_identifier() {
        let json = serde_json::to_string(&Model::from(OpenAiModel::Gpt5Nano)).unwrap();
        assert_eq!(json, "\"gpt-5-nano\"");
        let back: Model = serde_json::from_str("\"custom-x\"").unwrap();
        assert_eq!(back, Model::Custom("custom-x".into()));
    }
}
