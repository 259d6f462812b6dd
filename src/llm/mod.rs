//! Text generation integration.
//!
//! A single OpenAI-compatible backend over reqwest. The `LlmProvider` trait
//! is the seam that keeps the content pipeline testable with in-process
//! mocks.

mod openai;
pub mod provider;

pub use openai::OpenAiProvider;
pub use provider::{ChatMessage, CompletionRequest, CompletionResponse, LlmProvider};

use std::sync::Arc;

use secrecy::SecretString;

use crate::error::GenerationError;

/// Model used when `SETTLEIN_MODEL` is not set.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Endpoint used when `SETTLEIN_API_BASE` is not set.
pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";

/// Configuration for creating a generation provider.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub api_key: SecretString,
    pub model: String,
    pub base_url: String,
}

impl LlmConfig {
    /// Read provider configuration from the environment.
    ///
    /// Returns `None` when `OPENAI_API_KEY` is absent or blank. That is a
    /// normal condition, not an error: the pipeline then runs offline and
    /// serves fallback content.
    pub fn from_env() -> Option<Self> {
        let api_key = std::env::var("OPENAI_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty())?;

        Some(Self {
            api_key: SecretString::from(api_key),
            model: std::env::var("SETTLEIN_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            base_url: std::env::var("SETTLEIN_API_BASE")
                .unwrap_or_else(|_| DEFAULT_API_BASE.to_string()),
        })
    }
}

/// Create a generation provider from configuration.
pub fn create_provider(config: &LlmConfig) -> Result<Arc<dyn LlmProvider>, GenerationError> {
    let provider = OpenAiProvider::new(config)?;
    tracing::info!(model = %config.model, "Using OpenAI-compatible generation endpoint");
    Ok(Arc::new(provider))
}
