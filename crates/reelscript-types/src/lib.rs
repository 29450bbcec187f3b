//! Session-scoped data of **reelscript**: numbered generation records, the
//! append-only [`history::ReferenceHistoryStore`], the reference fragment
//! that replays records as few-shot examples, and markdown rendering of the
//! history for display.
pub mod fragments;
pub mod history;
pub mod record;
pub mod render;

pub use history::ReferenceHistoryStore;
pub use record::{GenerationOutcome, GenerationRecord, SequenceNumber};
