mod generate;

pub use generate::{GenerationRequest, ScriptGenerationProvider};
