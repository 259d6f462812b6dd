//! Content generator — the pipeline's entry point.
//!
//! Sequences prompt composition, the generation call, JSON extraction, and
//! schema normalization. The first failing stage swaps in the deterministic
//! fallback, so both operations always return usable content and never an
//! error.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::error::GenerationError;
use crate::llm::{ChatMessage, CompletionRequest, LlmConfig, LlmProvider, create_provider};

use super::extract::extract_json_object;
use super::fallback;
use super::model::{OnboardingContent, RequestParams, ScoreSummary};
use super::normalize::{normalize_banter, normalize_content};
use super::prompts;

/// Knobs for the generation calls.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Sampling temperature for both operations.
    pub temperature: f32,
    /// Token budget for the onboarding call (a full 5-question quiz).
    pub quiz_max_tokens: u32,
    /// Token budget for the final banter call (1-2 sentences).
    pub banter_max_tokens: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            temperature: 0.8,
            quiz_max_tokens: 1200,
            banter_max_tokens: 160,
        }
    }
}

/// Generates personalized onboarding content, with deterministic fallback.
///
/// Stateless across calls; safe to share behind an `Arc` and call
/// concurrently.
pub struct ContentGenerator {
    llm: Option<Arc<dyn LlmProvider>>,
    config: GeneratorConfig,
}

impl ContentGenerator {
    /// Create a generator. `None` for the provider means no credential is
    /// configured: every call then serves fallback content without touching
    /// the network.
    pub fn new(llm: Option<Arc<dyn LlmProvider>>, config: GeneratorConfig) -> Self {
        Self { llm, config }
    }

    /// Build a generator from the environment.
    pub fn from_env() -> Self {
        let llm = LlmConfig::from_env().and_then(|config| match create_provider(&config) {
            Ok(provider) => Some(provider),
            Err(e) => {
                warn!(error = %e, "Failed to create generation provider; running offline");
                None
            }
        });
        if llm.is_none() {
            debug!("No generation provider configured; serving offline content");
        }
        Self::new(llm, GeneratorConfig::default())
    }

    /// Whether a generation provider is configured.
    pub fn is_online(&self) -> bool {
        self.llm.is_some()
    }

    /// Generate personalized onboarding content.
    ///
    /// Never fails: any unavailable, failed, unparsable, or schema-invalid
    /// outcome is replaced by `fallback::onboarding` for the same
    /// parameters.
    pub async fn generate_onboarding_content(&self, params: &RequestParams) -> OnboardingContent {
        let raw = match self
            .complete(
                prompts::onboarding_system_prompt(),
                prompts::onboarding_user_prompt(params),
                self.config.quiz_max_tokens,
            )
            .await
        {
            Ok(text) => text,
            Err(GenerationError::Unavailable) => {
                debug!("Generation unavailable; serving fallback onboarding content");
                return fallback::onboarding(params);
            }
            Err(e) => {
                warn!(error = %e, "Generation call failed; serving fallback onboarding content");
                return fallback::onboarding(params);
            }
        };

        let Some(candidate) = extract_json_object(&raw) else {
            warn!("No JSON object in generation response; serving fallback onboarding content");
            return fallback::onboarding(params);
        };

        match normalize_content(&candidate, params) {
            Some(content) => {
                info!(tribe = %params.tribe, "Serving generated onboarding content");
                content
            }
            None => {
                warn!("Generation response failed schema validation; serving fallback onboarding content");
                fallback::onboarding(params)
            }
        }
    }

    /// Generate the post-quiz result message.
    ///
    /// Never fails: any failure or blank answer is replaced by the
    /// tier-based fallback message for the same summary.
    pub async fn generate_final_banter(&self, summary: &ScoreSummary) -> String {
        let raw = match self
            .complete(
                prompts::banter_system_prompt(),
                prompts::banter_user_prompt(summary),
                self.config.banter_max_tokens,
            )
            .await
        {
            Ok(text) => text,
            Err(GenerationError::Unavailable) => {
                debug!("Generation unavailable; serving fallback final banter");
                return fallback::final_banter(summary);
            }
            Err(e) => {
                warn!(error = %e, "Generation call failed; serving fallback final banter");
                return fallback::final_banter(summary);
            }
        };

        match normalize_banter(&raw) {
            Some(banter) => banter,
            None => {
                warn!("Blank final banter from generation; serving fallback");
                fallback::final_banter(summary)
            }
        }
    }

    /// One generation attempt, no retries: the fallback is free, so a second
    /// round-trip buys latency and nothing else.
    async fn complete(
        &self,
        system: String,
        user: String,
        max_tokens: u32,
    ) -> Result<String, GenerationError> {
        let Some(ref llm) = self.llm else {
            return Err(GenerationError::Unavailable);
        };

        let request = CompletionRequest::new(vec![
            ChatMessage::system(system),
            ChatMessage::user(user),
        ])
        .with_temperature(self.config.temperature)
        .with_max_tokens(max_tokens);

        let response = llm.complete(request).await?;
        debug!(
            model = llm.model_name(),
            input_tokens = response.input_tokens,
            output_tokens = response.output_tokens,
            "Generation call complete"
        );
        Ok(response.content)
    }
}
