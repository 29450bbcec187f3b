//! OpenAI chat/completions backend for **reelscript**.
//!
//! [`OpenAiAdapter`] implements
//! [`ScriptGenerationProvider`](reelscript_core::provider::ScriptGenerationProvider);
//! the family-specific parameter set produced by the core adapter is
//! flattened into the request body unchanged.
mod adapter;
mod provider_impl_chat;

pub use adapter::{API_KEY_ENV, BASE_URL_ENV, OpenAiAdapter, OpenAiAdapterBuilder};
pub mod api_v1;
mod client;
pub mod error;
