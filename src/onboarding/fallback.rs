//! Deterministic offline content.
//!
//! Pure functions of the request parameters: no network, no randomness, no
//! failure path. Every generation failure lands here, so the output has to
//! satisfy the same schema the service is asked for, including the full
//! 5-question quiz.

use super::model::{
    OnboardingContent, PerformanceTier, QuizQuestion, RequestParams, ScoreSummary,
};
#[cfg(test)]
use super::normalize::QUIZ_LEN;

/// Full offline onboarding content for the given parameters.
pub fn onboarding(params: &RequestParams) -> OnboardingContent {
    OnboardingContent {
        initial_banter: banter(params),
        badge_name: badge_name(params),
        quiz: quiz(params),
    }
}

/// Offline opening banter. Also substituted when a service response has a
/// good quiz but missing or blank banter.
pub fn banter(params: &RequestParams) -> String {
    format!(
        "Welcome in! The {tribe} crew always has room for someone who loves {interest}. Let's see what you know.",
        tribe = params.tribe,
        interest = params.interest,
    )
}

/// Offline badge name, 2-4 words by convention.
pub fn badge_name(params: &RequestParams) -> String {
    format!("Rising {} Star", params.tribe)
}

/// Offline quiz: exactly 5 questions, 4 options each, themed on the user's
/// interest and on settling into a new city.
fn quiz(params: &RequestParams) -> Vec<QuizQuestion> {
    let tribe = &params.tribe;
    let interest = &params.interest;

    vec![
        QuizQuestion {
            question: format!(
                "You just moved in. What's the easiest way to meet the {tribe} crowd?"
            ),
            options: vec![
                "Wait for them to find you".to_string(),
                format!("Join a local {tribe} meetup"),
                "Keep your headphones in".to_string(),
                "Move to another city".to_string(),
            ],
            correct_index: 1,
        },
        QuizQuestion {
            question: format!(
                "A neighbour mentions they're also into {interest}. What's the friendliest move?"
            ),
            options: vec![
                "Change the subject".to_string(),
                "Pretend you've never heard of it".to_string(),
                format!("Swap favourite {interest} moments"),
                "Walk away slowly".to_string(),
            ],
            correct_index: 2,
        },
        QuizQuestion {
            question: "Which of these makes settling into a new city easier?".to_string(),
            options: vec![
                "Learning the local transport".to_string(),
                "Never leaving the flat".to_string(),
                "Ignoring your neighbours".to_string(),
                "Skipping every event".to_string(),
            ],
            correct_index: 0,
        },
        QuizQuestion {
            question: format!("Your {tribe} group plans a weekend meetup. What do you bring?"),
            options: vec![
                "A list of complaints".to_string(),
                "Nothing, and arrive late".to_string(),
                "Somebody else's plans".to_string(),
                format!("Snacks and {interest} stories"),
            ],
            correct_index: 3,
        },
        QuizQuestion {
            question: format!(
                "What's the quickest way to feel at home in the {tribe} community?"
            ),
            options: vec![
                "Show up and say hello".to_string(),
                "Wait to be discovered".to_string(),
                "Only talk online".to_string(),
                "Avoid all introductions".to_string(),
            ],
            correct_index: 0,
        },
    ]
}

/// Offline result message, selected by performance tier.
pub fn final_banter(summary: &ScoreSummary) -> String {
    let name = &summary.user_name;
    let tribe = &summary.tribe;
    let interest = &summary.interest;
    let (score, total) = (summary.score, summary.total);

    match PerformanceTier::from_score(score, total) {
        PerformanceTier::Perfect => format!(
            "Perfect score, {name}! {score}/{total}. The {tribe} crew just found its {interest} champion."
        ),
        PerformanceTier::Good => format!(
            "Nice one, {name}! {score}/{total} is a strong start. Keep talking {interest} and the {tribe} crew will feel like home in no time."
        ),
        PerformanceTier::NeedsWork => format!(
            "Good effort, {name}! {score}/{total} just means more {interest} chats with the {tribe} crew ahead of you."
        ),
    }
}
