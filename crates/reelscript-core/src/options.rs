//! Closed option sets a harness collects from its user.
//!
//! Each enum renders under its canonical display name (`"casual"`,
//! `"English"`, `"YouTube"`, ...) and parses case-insensitively from the
//! same names. Unknown names surface as [`ScriptError::UnknownOption`].

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::ScriptError;

macro_rules! closed_option {
    ($(#[$meta:meta])* $name:ident, $kind:literal, { $($variant:ident => $label:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ScriptError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let needle = s.trim();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|option| option.as_str().eq_ignore_ascii_case(needle))
                    .ok_or_else(|| ScriptError::unknown_option($kind, needle))
            }
        }

        impl TryFrom<String> for $name {
            type Error = ScriptError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                value.parse()
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.as_str().to_owned()
            }
        }
    };
}

closed_option!(
    /// Tone of voice the script is written in.
    Tone, "tone", {
        Casual => "casual",
        Professional => "professional",
        Humorous => "humorous",
        Inspirational => "inspirational",
        Dramatic => "dramatic",
    }
);

closed_option!(
    /// Language the script is written in.
    Language, "language", {
        English => "English",
        Ukrainian => "Ukrainian",
        Spanish => "Spanish",
        French => "French",
        German => "German",
        Italian => "Italian",
        Portuguese => "Portuguese",
    }
);

closed_option!(
    /// Publishing platform. "No platform" is `Option::<Platform>::None`.
    Platform, "platform", {
        Instagram => "Instagram",
        YouTube => "YouTube",
        TikTok => "TikTok",
    }
);

impl Default for Tone {
    fn default() -> Self {
        Tone::Casual
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::English
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parsing_ignores_case_and_padding() {
        assert_eq!(" Humorous ".parse::<Tone>().unwrap(), Tone::Humorous);
        assert_eq!("ukrainian".parse::<Language>().unwrap(), Language::Ukrainian);
        assert_eq!("youtube".parse::<Platform>().unwrap(), Platform::YouTube);
    }

    #[test]
    fn unknown_values_are_reported_with_their_kind() {
        let err = "sarcastic".parse::<Tone>().unwrap_err();
        assert!(matches!(
            err,
            ScriptError::UnknownOption { kind: "tone", ref value } if value == "sarcastic"
        ));
    }

    #[test]
    fn closed_sets_have_expected_sizes() {
        assert_eq!(Tone::ALL.len(), 5);
        assert_eq!(Language::ALL.len(), 7);
        assert_eq!(Platform::ALL.len(), 3);
    }

    #[test]
    fn serde_uses_display_names() {
        assert_eq!(serde_json::to_string(&Platform::TikTok).unwrap(), "\"TikTok\"");
        assert!(serde_json::from_str::<Language>("\"Klingon\"").is_err());
    }
}
