//! Append-only, per-session log of generation records.
//!
//! The store is owned by exactly one session. It has no internal locking;
//! concurrent sessions each hold their own store.
//!
//! ```rust
//! use reelscript_core::{config::GenerationConfig, generic::{GenerationOutput, GenericUsageReport}};
//! use reelscript_types::{history::ReferenceHistoryStore, record::GenerationOutcome};
//!
//! let mut store = ReferenceHistoryStore::new();
//! let config = GenerationConfig::builder("Morning routines").build().unwrap();
//! let output = GenerationOutput { text: "Rise and shine.".into(), usage: GenericUsageReport::default() };
//!
//! let seq = store.append(GenerationOutcome::new(config, output));
//! assert_eq!(seq.get(), 1);
//! assert_eq!(store.get(seq).unwrap().script(), "Rise and shine.");
//! ```
use reelscript_core::generic::GenericMessage;
use tracing::debug;

use crate::record::{GenerationOutcome, GenerationRecord, SequenceNumber};

/// Prefix of the synthesized user message of a reference pair.
pub const REFERENCE_LABEL: &str = "(Example) Script idea:";

/// Idea characters shown in a reference picker label.
const OPTION_PREVIEW_CHARS: usize = 40;

#[derive(Debug)]
pub struct ReferenceHistoryStore {
    records: Vec<GenerationRecord>,
    next_sequence: SequenceNumber,
}

impl Default for ReferenceHistoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ReferenceHistoryStore {
    pub fn new() -> Self {
        Self {
            records: vec![],
            next_sequence: SequenceNumber::FIRST,
        }
    }

    /// Number `outcome` and store it. The only mutator.
    pub fn append(&mut self, outcome: GenerationOutcome) -> SequenceNumber {
        let sequence = self.next_sequence;
        self.next_sequence = sequence.next();
        self.records.push(GenerationRecord::new(sequence, outcome));
        debug!(%sequence, "generation record appended");
        sequence
    }

    /// [`Self::append`], handing back the stored record instead of its
    /// number.
    pub fn append_and_get(&mut self, outcome: GenerationOutcome) -> &GenerationRecord {
        self.append(outcome);
        let newest = self.records.len() - 1;
        &self.records[newest]
    }

    pub fn get(&self, sequence: SequenceNumber) -> Option<&GenerationRecord> {
        self.records
            .binary_search_by_key(&sequence, GenerationRecord::sequence)
            .ok()
            .map(|idx| &self.records[idx])
    }

    /// One user/assistant pair per requested number, in the order given.
    /// Unknown numbers are skipped; duplicates are kept.
    pub fn build_reference_messages(&self, selected: &[SequenceNumber]) -> Vec<GenericMessage> {
        selected
            .iter()
            .filter_map(|sequence| {
                let record = self.get(*sequence);
                if record.is_none() {
                    debug!(%sequence, "skipping unknown reference");
                }
                record
            })
            .flat_map(|record| {
                [
                    GenericMessage::user(format!("{REFERENCE_LABEL} {}", record.idea())),
                    GenericMessage::assistant(record.script()),
                ]
            })
            .collect()
    }

    /// `(sequence, label)` pairs for a reference multi-select, oldest first.
    pub fn reference_options(&self) -> Vec<(SequenceNumber, String)> {
        self.records
            .iter()
            .map(|record| {
                let preview: String = record.idea().chars().take(OPTION_PREVIEW_CHARS).collect();
                (
                    record.sequence(),
                    format!("Script {}: {preview}...", record.sequence()),
                )
            })
            .collect()
    }

    /// Chronological order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &GenerationRecord> {
        self.records.iter()
    }

    pub fn iter_newest_first(&self) -> impl Iterator<Item = &GenerationRecord> {
        self.records.iter().rev()
    }

    pub fn last(&self) -> Option<&GenerationRecord> {
        self.records.last()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use reelscript_core::{
        config::GenerationConfig,
        generic::{GenerationOutput, GenericRole, GenericUsageReport},
    };

    use super::*;

    fn outcome(idea: &str, script: &str) -> GenerationOutcome {
        GenerationOutcome::new(
            GenerationConfig::builder(idea).build().unwrap(),
            GenerationOutput {
                text: script.into(),
                usage: GenericUsageReport {
                    prompt_tokens: 10,
                    completion_tokens: 20,
                    total_tokens: 30,
                },
            },
        )
    }

    fn store_with_two() -> ReferenceHistoryStore {
        let mut store = ReferenceHistoryStore::new();
        store.append(outcome("idea one", "script one"));
        store.append(outcome("idea two", "script two"));
        store
    }

    fn seqs(values: &[u64]) -> Vec<SequenceNumber> {
        values.iter().copied().map(SequenceNumber::from).collect()
    }

    #[test]
    fn sequence_numbers_start_at_one_and_increase() {
        let mut store = ReferenceHistoryStore::new();
        let numbers: Vec<u64> = (0..3)
            .map(|i| store.append(outcome(&format!("idea {i}"), "s")).get())
            .collect();
        assert_eq!(numbers, [1, 2, 3]);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn records_keep_token_usage_and_config() {
        let store = store_with_two();
        let record = store.get(SequenceNumber::new(2)).unwrap();
        assert_eq!(record.total_tokens(), 30);
        assert_eq!(record.idea(), "idea two");
        assert_eq!(record.config().idea(), "idea two");
    }

    #[test]
    fn append_and_get_returns_the_new_record() {
        let mut store = store_with_two();
        let record = store.append_and_get(outcome("idea three", "script three"));
        assert_eq!(record.sequence().get(), 3);
        assert_eq!(record.script(), "script three");
    }

    #[test]
    fn get_unknown_number_is_none() {
        let store = store_with_two();
        assert!(store.get(SequenceNumber::new(0)).is_none());
        assert!(store.get(SequenceNumber::new(3)).is_none());
    }

    #[test]
    fn references_follow_requested_order() {
        let messages = store_with_two().build_reference_messages(&seqs(&[2, 1]));

        let layout: Vec<(GenericRole, &str)> = messages
            .iter()
            .map(|m| (m.role, m.content.as_str()))
            .collect();
        assert_eq!(
            layout,
            [
                (GenericRole::User, "(Example) Script idea: idea two"),
                (GenericRole::Assistant, "script two"),
                (GenericRole::User, "(Example) Script idea: idea one"),
                (GenericRole::Assistant, "script one"),
            ]
        );
    }

    #[test]
    fn unknown_references_are_skipped() {
        let store = store_with_two();
        assert!(store.build_reference_messages(&seqs(&[99])).is_empty());
        assert_eq!(store.build_reference_messages(&seqs(&[99, 1])).len(), 2);
    }

    #[test]
    fn duplicate_references_are_repeated() {
        let messages = store_with_two().build_reference_messages(&seqs(&[1, 1]));
        assert_eq!(messages.len(), 4);
        assert_eq!(messages[1], messages[3]);
    }

    #[test]
    fn reference_options_truncate_long_ideas() {
        let mut store = ReferenceHistoryStore::new();
        store.append(outcome(&"x".repeat(100), "s"));
        let options = store.reference_options();
        assert_eq!(options.len(), 1);
        assert_eq!(options[0].0, SequenceNumber::FIRST);
        assert_eq!(options[0].1, format!("Script 1: {}...", "x".repeat(40)));
    }

    #[test]
    fn newest_first_iteration_reverses_order() {
        let store = store_with_two();
        let order: Vec<u64> = store.iter_newest_first().map(|r| r.sequence().get()).collect();
        assert_eq!(order, [2, 1]);
        assert_eq!(store.last().unwrap().sequence().get(), 2);
    }
}
