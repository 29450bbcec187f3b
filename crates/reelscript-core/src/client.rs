//! Generic, lightweight client that forwards script requests to a single
//! concrete [`ScriptGenerationProvider`].
//!
//! The client is generic over the backend type `B`, so no dynamic dispatch
//! shows up in user code and any backend crate (e.g. `reelscript-openai`)
//! works out of the box.
//!
//! ```rust
//! use std::{future::Future, pin::Pin};
//! use reelscript_core::{
//!     ScriptClient,
//!     error::Result,
//!     generic::{GenerationOutput, GenericUsageReport},
//!     provider::{GenerationRequest, ScriptGenerationProvider},
//! };
//!
//! struct Echo;
//!
//! impl ScriptGenerationProvider for Echo {
//!     fn generate<'p>(
//!         &'p self,
//!         request: GenerationRequest,
//!     ) -> Pin<Box<dyn Future<Output = Result<GenerationOutput>> + Send + 'p>> {
//!         Box::pin(async move {
//!             Ok(GenerationOutput {
//!                 text: request.user_message().unwrap_or_default().to_owned(),
//!                 usage: GenericUsageReport::default(),
//!             })
//!         })
//!     }
//! }
//!
//! let client = ScriptClient::new(Echo);
//! # let _ = client;
//! ```
use std::{future::Future, pin::Pin, sync::Arc};

use tracing::debug;

use crate::{
    error::Result,
    generic::GenerationOutput,
    provider::{GenerationRequest, ScriptGenerationProvider},
};

/// A client bound to a single provider.
///
/// Cloning is cheap: the backend sits behind an `Arc` and is shared.
#[derive(Debug)]
pub struct ScriptClient<B> {
    backend: Arc<B>,
}

impl<B> Clone for ScriptClient<B> {
    fn clone(&self) -> Self {
        Self {
            backend: Arc::clone(&self.backend),
        }
    }
}

impl<B> ScriptClient<B>
where
    B: ScriptGenerationProvider,
{
    /// Create a new client that delegates all calls to `backend`.
    pub fn new(backend: B) -> Self {
        Self {
            backend: Arc::new(backend),
        }
    }

    /// Access the underlying backend (e.g. to tweak provider-specific settings).
    pub fn backend(&self) -> &B {
        &self.backend
    }
}

impl<B: ScriptGenerationProvider> ScriptGenerationProvider for ScriptClient<B> {
    fn generate<'p>(
        &'p self,
        request: GenerationRequest,
    ) -> Pin<Box<dyn Future<Output = Result<GenerationOutput>> + Send + 'p>> {
        let backend = Arc::clone(&self.backend);
        Box::pin(async move {
            debug!(
                model = %request.model,
                messages = request.messages.len(),
                "dispatching generation request"
            );
            backend.generate(request).await
        })
    }
}
