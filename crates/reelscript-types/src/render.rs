//! Markdown rendering of the session history, newest entry first.
//!
//! ```markdown
//! ### Script 2
//! **Model:** gpt-4o-mini
//! **Language:** English
//! ...
//! ---
//! ```
use reelscript_prompt::builder::PromptBuilder;

use crate::{history::ReferenceHistoryStore, record::GenerationRecord};

pub fn render_record(record: &GenerationRecord) -> String {
    append_record(PromptBuilder::new(), record).finalize()
}

pub fn render_history(store: &ReferenceHistoryStore) -> String {
    store
        .iter_newest_first()
        .fold(PromptBuilder::new(), append_record)
        .finalize()
}

fn append_record(builder: PromptBuilder, record: &GenerationRecord) -> PromptBuilder {
    let config = record.config();
    builder
        .add_section_h3(format!("Script {}", record.sequence()))
        .add_key_value("Model", config.model())
        .add_key_value("Language", config.language())
        .add_key_value("Tone of voice", config.tone())
        .add_key_value("Keywords", config.keywords().join(", "))
        .add_key_value("Input Idea", config.idea())
        .add_key_value("Temperature", record.temperature())
        .add_key_value("Output length", config.output_length())
        .add_line("**Generated Script:**")
        .add_blank_line()
        .add_line(record.script())
        .add_key_value("Total Tokens Used", record.total_tokens())
        .add_delimiter()
}

#[cfg(test)]
mod tests {
    use reelscript_core::{
        config::{GenerationConfig, OutputLength},
        generic::{GenerationOutput, GenericUsageReport},
        options::Tone,
    };

    use super::*;
    use crate::record::GenerationOutcome;

    fn store() -> ReferenceHistoryStore {
        let mut store = ReferenceHistoryStore::new();
        for (idea, script) in [("first idea", "first script"), ("second idea", "second script")] {
            let config = GenerationConfig::builder(idea)
                .keywords(["a", "b"])
                .tone(Tone::Humorous)
                .output_length(OutputLength::TokenBudget(300))
                .temperature(0.25)
                .build()
                .unwrap();
            store.append(GenerationOutcome::new(
                config,
                GenerationOutput {
                    text: script.into(),
                    usage: GenericUsageReport {
                        prompt_tokens: 1,
                        completion_tokens: 41,
                        total_tokens: 42,
                    },
                },
            ));
        }
        store
    }

    #[test]
    fn history_is_rendered_newest_first() {
        let text = render_history(&store());
        let second = text.find("### Script 2").unwrap();
        let first = text.find("### Script 1").unwrap();
        assert!(second < first);
    }

    #[test]
    fn record_lists_every_display_field() {
        let store = store();
        let text = render_record(store.last().unwrap());
        for expected in [
            "**Model:** gpt-4o-mini",
            "**Language:** English",
            "**Tone of voice:** humorous",
            "**Keywords:** a, b",
            "**Input Idea:** second idea",
            "**Temperature:** 0.25",
            "**Output length:** 300 tokens",
            "second script",
            "**Total Tokens Used:** 42",
        ] {
            assert!(text.contains(expected), "missing {expected:?} in {text}");
        }
    }

    #[test]
    fn empty_history_renders_nothing() {
        assert_eq!(render_history(&ReferenceHistoryStore::new()), "");
    }
}
