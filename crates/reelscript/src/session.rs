//! One user session: composer, parameter adapter, reference history and a
//! client, wired into the generate flow.
//!
//! ```text
//! config ─► PromptComposer ─┐
//! history ─► references ────┼─► GenerationRequest ─► provider ─► history.append
//! model ──► ParameterAdapter┘
//! ```
//!
//! [`ScriptSession::generate`] takes `&mut self`, so a session handles one
//! request at a time. Independent users get independent sessions; only the
//! backend is shared.
use reelscript_core::{
    ScriptClient,
    config::GenerationConfig,
    error::Result,
    model::Model,
    parameters::ParameterAdapter,
    provider::{GenerationRequest, ScriptGenerationProvider},
};
use reelscript_prompt::PromptComposer;
use reelscript_types::{
    GenerationOutcome, GenerationRecord, ReferenceHistoryStore, SequenceNumber,
    fragments::ReferenceSelection, render,
};
use tracing::{info, warn};

pub struct ScriptSession<B> {
    client: ScriptClient<B>,
    composer: PromptComposer,
    adapter: ParameterAdapter,
    history: ReferenceHistoryStore,
}

impl<B> ScriptSession<B>
where
    B: ScriptGenerationProvider,
{
    /// A session with the studio composer and the default family table.
    pub fn new(backend: B) -> Self {
        Self::with_client(ScriptClient::new(backend))
    }

    /// Share one client (and its connection pool) between sessions.
    pub fn with_client(client: ScriptClient<B>) -> Self {
        Self {
            client,
            composer: PromptComposer::studio(),
            adapter: ParameterAdapter::default(),
            history: ReferenceHistoryStore::new(),
        }
    }

    pub fn with_composer(mut self, composer: PromptComposer) -> Self {
        self.composer = composer;
        self
    }

    pub fn with_adapter(mut self, adapter: ParameterAdapter) -> Self {
        self.adapter = adapter;
        self
    }

    pub fn client(&self) -> &ScriptClient<B> {
        &self.client
    }

    pub fn composer(&self) -> &PromptComposer {
        &self.composer
    }

    pub fn adapter(&self) -> &ParameterAdapter {
        &self.adapter
    }

    pub fn history(&self) -> &ReferenceHistoryStore {
        &self.history
    }

    /// Whether the harness should offer a temperature control for `model`.
    pub fn temperature_is_tunable(&self, model: &Model) -> bool {
        self.adapter.resolve(model).family.temperature_is_tunable()
    }

    /// Build the request `generate` would send, without sending it.
    ///
    /// `references` are sequence numbers of earlier records to replay as
    /// style examples; pass an empty slice when the reference toggle is off.
    pub fn prepare(
        &self,
        config: &GenerationConfig,
        references: &[SequenceNumber],
    ) -> Result<GenerationRequest> {
        let messages = self
            .composer
            .messages(config, ReferenceSelection::new(&self.history, references))?;
        let parameters =
            self.adapter
                .adapt(config.model(), config.temperature(), config.output_length());

        Ok(GenerationRequest::new(
            config.model().clone(),
            messages,
            parameters,
        ))
    }

    /// Compose, send, and record one script.
    ///
    /// The history is only touched after the backend reported success; on
    /// failure the error is returned and the session stays usable.
    pub async fn generate(
        &mut self,
        config: GenerationConfig,
        references: &[SequenceNumber],
    ) -> Result<&GenerationRecord> {
        let request = self.prepare(&config, references)?;
        let sent_parameters = request.parameters.clone();
        info!(
            model = %config.model(),
            references = references.len(),
            "generating script"
        );

        let output = match self.client.generate(request).await {
            Ok(output) => output,
            Err(err) => {
                warn!(error = %err, "script generation failed, history unchanged");
                return Err(err);
            }
        };

        let outcome = GenerationOutcome::new(config, output).with_sent_parameters(&sent_parameters);
        let record = self.history.append_and_get(outcome);
        info!(
            sequence = %record.sequence(),
            total_tokens = record.total_tokens(),
            "script generated"
        );
        Ok(record)
    }

    /// Markdown of every record, newest first.
    pub fn render_history(&self) -> String {
        render::render_history(&self.history)
    }
}
