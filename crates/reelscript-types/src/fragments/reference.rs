//! Prompt fragment replaying selected history records as few-shot style
//! references.
//!
//! ```rust
//! use reelscript_types::{fragments::ReferenceSelection, history::ReferenceHistoryStore};
//! use reelscript_core::template::IntoPrompt;
//!
//! let store = ReferenceHistoryStore::new();
//! let messages = ReferenceSelection::new(&store, &[]).into_prompt();
//! assert!(messages.is_empty());
//! ```
use reelscript_core::{generic::GenericMessage, template::IntoPrompt};

use crate::{history::ReferenceHistoryStore, record::SequenceNumber};

/// Borrowed view of a store plus the records the user picked.
#[derive(Debug, Clone, Copy)]
pub struct ReferenceSelection<'a> {
    store: &'a ReferenceHistoryStore,
    selected: &'a [SequenceNumber],
}

impl<'a> ReferenceSelection<'a> {
    pub fn new(store: &'a ReferenceHistoryStore, selected: &'a [SequenceNumber]) -> Self {
        Self { store, selected }
    }
}

impl IntoPrompt for ReferenceSelection<'_> {
    type Message = GenericMessage;

    fn into_prompt(self) -> Vec<Self::Message> {
        self.store.build_reference_messages(self.selected)
    }
}
