//! Onboarding content data model.
//!
//! Everything here is transient and call-scoped. Values serialize with the
//! app's camelCase field names (`initialBanter`, `correctIndex`, ...).

use serde::{Deserialize, Serialize};

/// Parameters collected from the new resident before content generation.
///
/// The calling UI trims and validates these; the pipeline itself never
/// rejects them, it just degrades to fallback content built from whatever
/// values are given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestParams {
    pub user_name: String,
    pub tribe: String,
    pub interest: String,
}

/// A single quiz question.
///
/// Only ever constructed with exactly 4 non-empty options and an in-range
/// answer index. A question that fails any of those checks is discarded by
/// the normalizer, never coerced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub correct_index: usize,
}

/// Personalized first-run content: banter, a badge name, and exactly 5 quiz
/// questions. A result with fewer valid questions is never produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingContent {
    pub initial_banter: String,
    pub badge_name: String,
    pub quiz: Vec<QuizQuestion>,
}

/// Quiz outcome handed back by the UI once the user finishes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreSummary {
    pub user_name: String,
    pub tribe: String,
    pub interest: String,
    pub score: u32,
    pub total: u32,
}

/// Performance band selecting a final banter template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PerformanceTier {
    Perfect,
    Good,
    NeedsWork,
}

impl PerformanceTier {
    /// `Perfect` on a full score, `Good` from `ceil(total * 0.6)` up,
    /// `NeedsWork` below that.
    pub fn from_score(score: u32, total: u32) -> Self {
        // Widened so a caller-supplied total near u32::MAX cannot overflow.
        if total > 0 && score >= total {
            Self::Perfect
        } else if u64::from(score) >= (u64::from(total) * 3).div_ceil(5) {
            Self::Good
        } else {
            Self::NeedsWork
        }
    }
}
