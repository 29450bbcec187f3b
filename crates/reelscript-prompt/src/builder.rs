//! Builder-style helper for assembling prompt and report text.
//!
//! Every method consumes and returns `self`, so fragments read top to
//! bottom:
//!
//! ```rust
//! use reelscript_prompt::builder::PromptBuilder;
//!
//! let text = PromptBuilder::new()
//!     .add_section_h3("Script 1")
//!     .add_key_value("Tone of voice", "casual")
//!     .add_delimiter()
//!     .finalize();
//!
//! assert_eq!(text, "### Script 1\n**Tone of voice:** casual\n---\n");
//! ```
//!
//! The builder performs no smart formatting: newlines and whitespace are
//! emitted exactly as requested.

use std::fmt::Display;

/// Fluent helper owning a growing `String` buffer.
#[derive(Debug, Default)]
pub struct PromptBuilder {
    buffer: String,
}

impl PromptBuilder {
    /// Create a fresh, empty builder.
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
        }
    }

    fn push_line(mut self, line: impl Display) -> Self {
        self.buffer.push_str(&line.to_string());
        self.buffer.push('\n');
        self
    }

    /// Add a level-3 (`###`) heading.
    pub fn add_section_h3(self, line: impl Display) -> Self {
        self.push_line(format_args!("### {line}"))
    }

    /// Add a plain line of text and a trailing newline.
    pub fn add_line(self, line: impl Display) -> Self {
        self.push_line(line)
    }

    /// Add a plain `Key: Value` line, the shape request fields are sent in.
    pub fn add_field(self, key: impl Display, value: impl Display) -> Self {
        self.push_line(format_args!("{key}: {value}"))
    }

    /// Add a markdown key–value pair with a bold key: `**Key:** Value`.
    pub fn add_key_value(self, key: impl Display, value: impl Display) -> Self {
        self.push_line(format_args!("**{key}:** {value}"))
    }

    /// Insert a single blank line.
    pub fn add_blank_line(mut self) -> Self {
        self.buffer.push('\n');
        self
    }

    /// Insert a "---" delimiter.
    pub fn add_delimiter(self) -> Self {
        self.add_line("---")
    }

    /// Retrieve the accumulated text and consume the builder.
    pub fn finalize(self) -> String {
        self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_and_key_values_differ_only_in_markup() {
        let text = PromptBuilder::new()
            .add_field("Language", "English")
            .add_key_value("Language", "English")
            .finalize();
        assert_eq!(text, "Language: English\n**Language:** English\n");
    }

    #[test]
    fn heading_delimiter_and_blank_lines() {
        let text = PromptBuilder::new()
            .add_section_h3("Script 1")
            .add_blank_line()
            .add_delimiter()
            .finalize();
        assert_eq!(text, "### Script 1\n\n---\n");
    }
}
