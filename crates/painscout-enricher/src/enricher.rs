//! Per-record enrichment over one scan's batch.

use std::time::Duration;

use painscout_core::{Annotation, EnrichedSignal, RawSignal};

use crate::error::EnricherError;
use crate::gemini::GeminiClient;
use crate::mock::MockClassifier;
use crate::pacing::{FixedIntervalPacer, Pacer};
use crate::prompt::{build_context, classification_prompt, parse_annotation};
use crate::types::{EnrichMode, EnricherConfig};

enum Backend {
    Live(GeminiClient),
    Mock(MockClassifier),
}

/// Attaches annotations to raw signals, one record at a time.
///
/// The mode is chosen at construction and never changes. Live calls are
/// gated by a [`Pacer`]; mock classification is never paced.
pub struct SignalEnricher {
    backend: Backend,
    pacer: Box<dyn Pacer>,
}

impl SignalEnricher {
    /// Live when `config` carries a key and mock mode is not forced,
    /// mock otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`EnricherError::Http`] if the HTTP client cannot be built.
    pub fn new(config: &EnricherConfig) -> Result<Self, EnricherError> {
        let backend = match config.live_api_key() {
            Some(key) => Backend::Live(GeminiClient::new(config, key)?),
            None => Backend::Mock(MockClassifier::new()),
        };

        Ok(Self {
            backend,
            pacer: Box::new(FixedIntervalPacer::new(Duration::from_millis(
                config.classify_interval_ms,
            ))),
        })
    }

    /// Mock-mode enricher around an explicit classifier.
    #[must_use]
    pub fn mock(classifier: MockClassifier) -> Self {
        Self {
            backend: Backend::Mock(classifier),
            pacer: Box::new(FixedIntervalPacer::default()),
        }
    }

    /// Replace the pacing policy for live calls.
    #[must_use]
    pub fn with_pacer(mut self, pacer: impl Pacer + 'static) -> Self {
        self.pacer = Box::new(pacer);
        self
    }

    #[must_use]
    pub fn mode(&self) -> EnrichMode {
        match self.backend {
            Backend::Live(_) => EnrichMode::Live,
            Backend::Mock(_) => EnrichMode::Mock,
        }
    }

    /// Map each raw signal to an enriched one, preserving order and length.
    ///
    /// Records whose context is too short, whose classification fails, or for
    /// which the classifier reports no pain point come back unannotated.
    pub async fn enrich(&mut self, signals: Vec<RawSignal>) -> Vec<EnrichedSignal> {
        if signals.is_empty() {
            return Vec::new();
        }

        let mode = self.mode();
        let total = signals.len();
        let mut annotated = 0usize;
        let mut skipped = 0usize;
        let mut failed = 0usize;

        tracing::info!(mode = %mode, count = total, "starting enrichment");

        let mut enriched = Vec::with_capacity(total);
        for signal in signals {
            let Some(context) = build_context(&signal) else {
                skipped += 1;
                tracing::debug!(id = %signal.id, "context too short; not classified");
                enriched.push(EnrichedSignal::unannotated(signal));
                continue;
            };

            let annotation = match &mut self.backend {
                Backend::Mock(classifier) => Some(classifier.classify(&context)),
                Backend::Live(client) => {
                    self.pacer.ready().await;
                    match classify_live(client, &context).await {
                        Ok(annotation) => annotation,
                        Err(e) => {
                            failed += 1;
                            tracing::warn!(
                                id = %signal.id,
                                error = %e,
                                "classification failed; leaving record unannotated"
                            );
                            None
                        }
                    }
                }
            };

            match annotation {
                Some(annotation) => {
                    annotated += 1;
                    enriched.push(EnrichedSignal { signal, annotation });
                }
                None => enriched.push(EnrichedSignal {
                    signal,
                    annotation: Annotation::default(),
                }),
            }
        }

        tracing::info!(
            mode = %mode,
            total,
            annotated,
            skipped,
            failed,
            "enrichment complete"
        );
        enriched
    }
}

async fn classify_live(
    client: &GeminiClient,
    context: &str,
) -> Result<Option<Annotation>, EnricherError> {
    let reply = client.generate(&classification_prompt(context)).await?;
    parse_annotation(&reply)
}
