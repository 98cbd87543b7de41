use std::{fmt, sync::Arc, time::Duration};

use tokio::sync::Semaphore;

use crate::{
    config::Config,
    errors::{AppError, AppResult},
    models::domain::{ContentKind, ContentKindTag, ModelSettings, RawGenerationParams},
    services::{
        completion_client::CompletionClient,
        prompt_builder::build_prompt,
        sanitizer::sanitize,
        schema_validator::{validate, ItemValidationPolicy},
        unwrapper::unwrap_completion,
    },
};

/// Pipeline position of a single request, used for tracing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationStage {
    Sanitizing,
    PromptBuilt,
    Calling,
    Unwrapping,
    Validating,
    Responded,
}

impl fmt::Display for GenerationStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerationStage::Sanitizing => write!(f, "sanitizing"),
            GenerationStage::PromptBuilt => write!(f, "prompt_built"),
            GenerationStage::Calling => write!(f, "calling"),
            GenerationStage::Unwrapping => write!(f, "unwrapping"),
            GenerationStage::Validating => write!(f, "validating"),
            GenerationStage::Responded => write!(f, "responded"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct GenerationSettings {
    pub flashcards: ModelSettings,
    pub quiz: ModelSettings,
    pub upstream_timeout: Duration,
    pub max_concurrent_upstream: usize,
    pub item_validation: ItemValidationPolicy,
}

impl GenerationSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            flashcards: config.model_settings(ContentKindTag::Flashcards),
            quiz: config.model_settings(ContentKindTag::Quiz),
            upstream_timeout: config.upstream_timeout(),
            max_concurrent_upstream: config.max_concurrent_upstream,
            item_validation: config.item_validation,
        }
    }

    fn model_settings<K: ContentKind>(&self) -> &ModelSettings {
        match K::TAG {
            ContentKindTag::Flashcards => &self.flashcards,
            ContentKindTag::Quiz => &self.quiz,
        }
    }
}

/// Runs sanitize → prompt → completion → unwrap → validate for one request.
/// Any failing stage ends the request; nothing is retried.
pub struct GenerationService {
    client: Arc<dyn CompletionClient>,
    settings: GenerationSettings,
    upstream_gate: Semaphore,
}

impl GenerationService {
    pub fn new(client: Arc<dyn CompletionClient>, settings: GenerationSettings) -> Self {
        let upstream_gate = Semaphore::new(settings.max_concurrent_upstream);
        Self {
            client,
            settings,
            upstream_gate,
        }
    }

    pub fn available_upstream_slots(&self) -> usize {
        self.upstream_gate.available_permits()
    }

    /// `request_id` only tags log lines so they can be matched to the
    /// `x-request-id` response header.
    pub async fn generate<K: ContentKind>(
        &self,
        params: RawGenerationParams,
        request_id: &str,
    ) -> AppResult<Vec<K::Item>> {
        let result = self.run_pipeline::<K>(params, request_id).await;

        match &result {
            Ok(items) => log::info!(
                "[{}] Generated {} {} items",
                request_id,
                items.len(),
                K::TAG
            ),
            Err(e) => log::error!(
                "[{}] {} generation failed [{}]: {:?}",
                request_id,
                K::TAG,
                e.error_code(),
                e
            ),
        }
        trace_stage::<K>(request_id, GenerationStage::Responded);

        result
    }

    async fn run_pipeline<K: ContentKind>(
        &self,
        params: RawGenerationParams,
        request_id: &str,
    ) -> AppResult<Vec<K::Item>> {
        trace_stage::<K>(request_id, GenerationStage::Sanitizing);
        let request = sanitize(&params, K::BOUNDS)?;

        let prompt = build_prompt::<K>(&request);
        trace_stage::<K>(request_id, GenerationStage::PromptBuilt);
        log::info!(
            "[{}] Requesting {} {} items for topic {:?}",
            request_id,
            request.item_count,
            K::TAG,
            request.topic
        );

        trace_stage::<K>(request_id, GenerationStage::Calling);
        let raw = {
            let _permit = self
                .upstream_gate
                .acquire()
                .await
                .map_err(|_| AppError::UpstreamUnavailable("upstream gate closed".to_string()))?;

            tokio::time::timeout(
                self.settings.upstream_timeout,
                self.client.complete(&prompt, self.settings.model_settings::<K>()),
            )
            .await
            .map_err(|_| {
                AppError::UpstreamUnavailable(format!(
                    "no response within {}s",
                    self.settings.upstream_timeout.as_secs_f32()
                ))
            })??
        };

        trace_stage::<K>(request_id, GenerationStage::Unwrapping);
        let cleaned = unwrap_completion(raw.as_str());

        trace_stage::<K>(request_id, GenerationStage::Validating);
        validate::<K>(&cleaned, self.settings.item_validation).inspect_err(|e| {
            if matches!(e, AppError::MalformedOutput(_) | AppError::SchemaMismatch(_)) {
                log::warn!(
                    "[{}] Rejected {} completion text: {}",
                    request_id,
                    K::TAG,
                    cleaned
                );
            }
        })
    }
}

fn trace_stage<K: ContentKind>(request_id: &str, stage: GenerationStage) {
    log::debug!("[{}] {} generation -> {}", request_id, K::TAG, stage);
}
