//! Provider-agnostic building blocks of **reelscript**: the error type,
//! generic chat messages, model identifiers and their families, the option
//! sets a harness collects, the immutable [`config::GenerationConfig`], the
//! [`parameters::ParameterAdapter`] and the provider trait every backend
//! implements.
pub mod client;
pub mod config;
pub mod error;
pub mod generic;
pub mod model;
pub mod options;
pub mod parameters;
pub mod provider;
pub mod template;

pub use client::ScriptClient;
