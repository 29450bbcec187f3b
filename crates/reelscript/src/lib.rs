//! # `reelscript` – the umbrella crate
//!
//! One import for the whole workspace:
//!
//! | Crate                   | What it provides                                                            |
//! |-------------------------|-----------------------------------------------------------------------------|
//! | **`reelscript-core`**   | errors, messages, models + families, options, `GenerationConfig`, `ParameterAdapter`, provider trait |
//! | **`reelscript-prompt`** | `PromptBuilder`, `PromptChain`, templates, `PromptComposer`                  |
//! | **`reelscript-types`**  | `GenerationRecord`, `ReferenceHistoryStore`, reference fragment, rendering  |
//! | **`reelscript-openai`** | OpenAI chat/completions backend *(feature `openai`, on by default)*         |
//!
//! plus [`ScriptSession`], which runs the generate flow for one user.
//!
//! ## Quick example
//!
//! ```rust,no_run
//! use reelscript::{
//!     ScriptSession,
//!     config::{GenerationConfig, OutputLength},
//!     options::Tone,
//! };
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let backend = reelscript::openai::OpenAiAdapterBuilder::new_from_env().build()?;
//!     let mut session = ScriptSession::new(backend);
//!
//!     let config = GenerationConfig::builder("A story about starting a small business with no budget.")
//!         .keywords(["entrepreneurship", "motivation"])
//!         .tone(Tone::Casual)
//!         .output_length(OutputLength::TokenBudget(700))
//!         .build()?;
//!
//!     let record = session.generate(config, &[]).await?;
//!     println!("{}", record.script());
//!     Ok(())
//! }
//! ```
#![doc(html_root_url = "https://docs.rs/reelscript/latest")]

mod session;

pub use reelscript_core::*;
pub use reelscript_prompt as prompt;
pub use reelscript_types as types;
pub use session::ScriptSession;

#[cfg(feature = "openai")]
pub use reelscript_openai as openai;
