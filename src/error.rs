//! Error types for the content pipeline.

/// Failures of a single generation attempt.
///
/// None of these escape the pipeline: the orchestrator absorbs every variant
/// and substitutes deterministic fallback content. They exist so the failure
/// stages stay distinguishable in logs and tests.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    /// No credential configured. A normal condition, not a fault.
    #[error("no generation credential configured")]
    Unavailable,

    /// Network, HTTP, or response decoding failure, including timeouts and
    /// non-2xx statuses.
    #[error("generation request failed: {reason}")]
    Transport { reason: String },

    /// The call succeeded but carried no text.
    #[error("generation service returned an empty response")]
    EmptyResponse,
}
