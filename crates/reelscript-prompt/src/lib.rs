//! Prompt assembly for **reelscript**.
//!
//! * [`builder::PromptBuilder`] – fluent text/markdown builder.
//! * [`chain::PromptChain`] – lines up fragments and validates message order.
//! * [`templates`] – configurable system and user message templates.
//! * [`composer::PromptComposer`] – config in, system/user message pair out.
pub mod builder;
pub mod chain;
pub mod composer;
pub mod templates;

pub use composer::{ComposedPrompt, PromptComposer};
