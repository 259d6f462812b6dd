//! Adaptive onboarding content pipeline.
//!
//! Personalizes first-run banter, a badge name, and a 5-question quiz by
//! calling a text generation service, treating the service output as
//! untrusted. Every failure point (no credential, transport error,
//! unextractable or schema-invalid JSON) swaps in deterministic local
//! content, so callers always receive a schema-valid result and never an
//! error.

pub mod extract;
pub mod fallback;
pub mod generator;
pub mod model;
pub mod normalize;
pub mod prompts;

pub use generator::{ContentGenerator, GeneratorConfig};
pub use model::{OnboardingContent, PerformanceTier, QuizQuestion, RequestParams, ScoreSummary};
