//! System and user message templates.
//!
//! Both the system instruction and the shape of the user message are
//! configuration: a composer is built from one [`SystemTemplate`] and one
//! [`UserTemplate`], and the presets below cover the two layouts the studio
//! ships with.
use std::borrow::Cow;

use reelscript_core::{
    config::{GenerationConfig, OutputLength},
    options::Platform,
};

use crate::builder::PromptBuilder;

/// Literal rendered for an empty keyword list or a missing platform.
pub const NONE_TOKEN: &str = "None";

/// Separator between keywords in the user message.
pub const KEYWORD_DELIMITER: &str = ", ";

const LANGUAGE_PLACEHOLDER: &str = "{language}";
const TONE_PLACEHOLDER: &str = "{tone}";
const PLATFORM_PLACEHOLDER: &str = "{platform}";

const GENERIC_INSTRUCTION: &str = "\
You are an AI assistant specialized in creating video scripts for content creators.

Task:
- Generate a complete, polished video script that reveals the topic provided by the user.
- Write the script in the language provided by the user.
- If keywords are provided, integrate them seamlessly and naturally into the script.
- Keep the tone of voice provided by the user throughout the script.
- If the script is long enough, split it into meaningful paragraphs.

Requirements:
1. The script must be concise, fluid and designed for spoken delivery in a short-form video. Do not divide it into scenes; the output is one continuous narrative.
2. Capture attention quickly, keep viewers engaged and end with a clear, impactful closing line.
3. Output only the final script text, without explanations, notes or formatting beyond the natural flow of the script.
4. Match the length of the text to the speech duration requested by the user.
5. If a target platform is provided (YouTube Shorts, TikTok, Instagram Reels), adapt the script to it and its audience.
";

const LOCALIZED_INSTRUCTION: &str = "\
You are an assistant for generating engaging video scripts.

Requirements:
1. Generate a complete video script in {language}.
2. Use a {tone} tone of voice.
3. If keywords are provided, make sure they are naturally included.
4. The script should be concise, engaging, and ready to be spoken in a video.
5. Return only the script text, no explanations.
";

/// Default system instruction, optionally parameterized by `{language}`,
/// `{tone}` and `{platform}` placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemTemplate {
    text: Cow<'static, str>,
}

impl SystemTemplate {
    /// A custom template. Placeholders are optional.
    pub fn new(text: impl Into<Cow<'static, str>>) -> Self {
        Self { text: text.into() }
    }

    /// Placeholder-free instruction; language and tone travel in the user
    /// message.
    pub fn generic() -> Self {
        Self::new(GENERIC_INSTRUCTION)
    }

    /// Instruction with language and tone substituted in.
    pub fn localized() -> Self {
        Self::new(LOCALIZED_INSTRUCTION)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn has_placeholders(&self) -> bool {
        [LANGUAGE_PLACEHOLDER, TONE_PLACEHOLDER, PLATFORM_PLACEHOLDER]
            .iter()
            .any(|placeholder| self.text.contains(placeholder))
    }

    pub fn render(&self, config: &GenerationConfig) -> String {
        if !self.has_placeholders() {
            return self.text.to_string();
        }
        self.text
            .replace(LANGUAGE_PLACEHOLDER, config.language().as_str())
            .replace(TONE_PLACEHOLDER, config.tone().as_str())
            .replace(PLATFORM_PLACEHOLDER, platform_label(config.platform()))
    }
}

impl Default for SystemTemplate {
    fn default() -> Self {
        Self::generic()
    }
}

/// Optional user-message fields, listed in rendering order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserField {
    Language,
    Tone,
    LengthDirective,
}

impl UserField {
    pub const ALL: [UserField; 3] = [
        UserField::Language,
        UserField::Tone,
        UserField::LengthDirective,
    ];
}

/// Which fields the user message carries.
///
/// Idea, keywords and platform are always present, in that order. The
/// optional [`UserField`]s follow in their canonical order no matter the
/// order they were enabled in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserTemplate {
    fields: Vec<UserField>,
}

impl UserTemplate {
    /// Only idea, keywords and platform.
    pub fn minimal() -> Self {
        Self { fields: vec![] }
    }

    /// Every field.
    pub fn rich() -> Self {
        Self {
            fields: UserField::ALL.to_vec(),
        }
    }

    pub fn with_field(mut self, field: UserField) -> Self {
        if !self.fields.contains(&field) {
            self.fields.push(field);
        }
        self
    }

    pub fn without_field(mut self, field: UserField) -> Self {
        self.fields.retain(|known| *known != field);
        self
    }

    pub fn includes(&self, field: UserField) -> bool {
        self.fields.contains(&field)
    }

    pub fn render(&self, config: &GenerationConfig) -> String {
        let keywords = if config.keywords().is_empty() {
            NONE_TOKEN.to_owned()
        } else {
            config.keywords().join(KEYWORD_DELIMITER)
        };

        let mut builder = PromptBuilder::new()
            .add_field("User script idea", config.idea())
            .add_blank_line()
            .add_field("Keywords", keywords)
            .add_blank_line()
            .add_field("Target platform", platform_label(config.platform()));

        for field in UserField::ALL.into_iter().filter(|f| self.includes(*f)) {
            builder = builder.add_blank_line();
            builder = match field {
                UserField::Language => builder.add_field("Language", config.language()),
                UserField::Tone => builder.add_field("Tone of voice", config.tone()),
                UserField::LengthDirective => match config.output_length() {
                    OutputLength::SpokenDuration(seconds) => {
                        builder.add_field("Speech duration", format!("{seconds} seconds"))
                    }
                    OutputLength::TokenBudget(tokens) => {
                        builder.add_field("Maximum length", format!("{tokens} tokens"))
                    }
                },
            };
        }

        builder.finalize()
    }
}

impl Default for UserTemplate {
    fn default() -> Self {
        Self::rich()
    }
}

fn platform_label(platform: Option<Platform>) -> &'static str {
    platform.map(Platform::as_str).unwrap_or(NONE_TOKEN)
}
