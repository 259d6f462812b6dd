//! Validates untrusted service output into the strict content schema.
//!
//! "Parse, don't trust": the outcome is an explicit `Some`/`None`, never an
//! exception and never a partially repaired quiz.

use serde::Deserialize;
use serde_json::Value;

use super::fallback;
use super::model::{OnboardingContent, QuizQuestion, RequestParams};

/// Number of questions a valid quiz must have. Fewer survivors than this
/// rejects the whole response; a shorter quiz is never returned.
pub const QUIZ_LEN: usize = 5;

const OPTION_COUNT: usize = 4;

/// Loosely-typed shape of the service response.
///
/// Quiz elements stay untyped so one malformed question drops that question
/// alone, not the whole array. Banter and badge name stay untyped too: a
/// wrong-typed value there behaves like a missing one and gets the fallback
/// substitute, instead of invalidating an otherwise good quiz.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawContent {
    #[serde(default)]
    initial_banter: Value,
    #[serde(default)]
    badge_name: Value,
    quiz: Vec<Value>,
}

/// Coerce a candidate JSON substring into `OnboardingContent`.
///
/// The quiz is all-or-nothing: elements are validated independently, the
/// kept list is truncated to 5, and fewer than 5 survivors invalidates the
/// entire response. Banter and badge name are softer: when missing, blank,
/// or not a string, the fallback value for the same request parameters is
/// substituted, so a partially-good response still benefits from whatever
/// personalization it carried.
pub fn normalize_content(candidate: &str, params: &RequestParams) -> Option<OnboardingContent> {
    let raw: RawContent = serde_json::from_str(candidate).ok()?;

    let quiz: Vec<QuizQuestion> = raw
        .quiz
        .iter()
        .filter_map(valid_question)
        .take(QUIZ_LEN)
        .collect();
    if quiz.len() < QUIZ_LEN {
        return None;
    }

    let initial_banter =
        nonempty(raw.initial_banter.as_str()).unwrap_or_else(|| fallback::banter(params));
    let badge_name =
        nonempty(raw.badge_name.as_str()).unwrap_or_else(|| fallback::badge_name(params));

    Some(OnboardingContent {
        initial_banter,
        badge_name,
        quiz,
    })
}

/// Normalization for the final banter stage: the answer is plain text, so
/// trimmed non-empty is the whole contract.
pub fn normalize_banter(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Validate one quiz element: non-empty question, exactly 4 non-empty
/// string options, integer answer index in range. Anything else discards
/// the element.
fn valid_question(value: &Value) -> Option<QuizQuestion> {
    let question = value.get("question")?.as_str()?.trim();
    if question.is_empty() {
        return None;
    }

    let raw_options = value.get("options")?.as_array()?;
    if raw_options.len() != OPTION_COUNT {
        return None;
    }
    let mut options = Vec::with_capacity(OPTION_COUNT);
    for raw_option in raw_options {
        let option = raw_option.as_str()?.trim();
        if option.is_empty() {
            return None;
        }
        options.push(option.to_string());
    }

    // as_i64 rejects floats and strings outright.
    let correct_index = value.get("correctIndex")?.as_i64()?;
    if !(0..4).contains(&correct_index) {
        return None;
    }

    Some(QuizQuestion {
        question: question.to_string(),
        options,
        correct_index: correct_index as usize,
    })
}

fn nonempty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> RequestParams {
        RequestParams {
            user_name: "Alex".to_string(),
            tribe: "Football".to_string(),
            interest: "Arsenal".to_string(),
        }
    }

    fn question_value(index: usize) -> Value {
        serde_json::json!({
            "question": format!("Question {index}?"),
            "options": ["a", "b", "c", "d"],
            "correctIndex": index % 4
        })
    }

    fn content_with_quiz(quiz: Vec<Value>) -> String {
        serde_json::json!({
            "initialBanter": "Welcome!",
            "badgeName": "Gunners Elite",
            "quiz": quiz
        })
        .to_string()
    }

    #[test]
    fn valid_response_passes_through() {
        let candidate = content_with_quiz((0..5).map(question_value).collect());
        let content = normalize_content(&candidate, &params()).unwrap();
        assert_eq!(content.initial_banter, "Welcome!");
        assert_eq!(content.badge_name, "Gunners Elite");
        assert_eq!(content.quiz.len(), 5);
        assert_eq!(content.quiz[0].question, "Question 0?");
    }

    #[test]
    fn unparsable_candidate_is_invalid() {
        assert!(normalize_content("not json at all", &params()).is_none());
        assert!(normalize_content("{\"quiz\": [", &params()).is_none());
    }

    #[test]
    fn quiz_must_be_an_array() {
        let candidate = r#"{"initialBanter": "hi", "badgeName": "x", "quiz": "five"}"#;
        assert!(normalize_content(candidate, &params()).is_none());
    }

    #[test]
    fn missing_quiz_is_invalid() {
        let candidate = r#"{"initialBanter": "hi", "badgeName": "x"}"#;
        assert!(normalize_content(candidate, &params()).is_none());
    }

    #[test]
    fn four_valid_questions_invalidate_the_whole_response() {
        let candidate = content_with_quiz((0..4).map(question_value).collect());
        assert!(normalize_content(&candidate, &params()).is_none());
    }

    #[test]
    fn bad_sixth_question_does_not_save_a_short_quiz() {
        let mut quiz: Vec<Value> = (0..4).map(question_value).collect();
        quiz.push(serde_json::json!({"question": "", "options": ["a", "b", "c", "d"], "correctIndex": 0}));
        let candidate = content_with_quiz(quiz);
        assert!(normalize_content(&candidate, &params()).is_none());
    }

    #[test]
    fn one_bad_question_among_six_still_yields_five() {
        let mut quiz: Vec<Value> = (0..5).map(question_value).collect();
        quiz.insert(
            2,
            serde_json::json!({"question": "Broken?", "options": ["a", "b"], "correctIndex": 0}),
        );
        let candidate = content_with_quiz(quiz);
        let content = normalize_content(&candidate, &params()).unwrap();
        assert_eq!(content.quiz.len(), 5);
        assert!(content.quiz.iter().all(|q| q.options.len() == 4));
    }

    #[test]
    fn extra_valid_questions_are_truncated_to_five() {
        let candidate = content_with_quiz((0..7).map(question_value).collect());
        let content = normalize_content(&candidate, &params()).unwrap();
        assert_eq!(content.quiz.len(), 5);
        assert_eq!(content.quiz[4].question, "Question 4?");
    }

    #[test]
    fn wrong_option_count_discards_the_question() {
        let mut quiz: Vec<Value> = (0..4).map(question_value).collect();
        quiz.push(serde_json::json!({
            "question": "Too many?",
            "options": ["a", "b", "c", "d", "e"],
            "correctIndex": 0
        }));
        assert!(normalize_content(&content_with_quiz(quiz), &params()).is_none());
    }

    #[test]
    fn blank_option_discards_the_question() {
        let mut quiz: Vec<Value> = (0..4).map(question_value).collect();
        quiz.push(serde_json::json!({
            "question": "Blank option?",
            "options": ["a", "  ", "c", "d"],
            "correctIndex": 0
        }));
        assert!(normalize_content(&content_with_quiz(quiz), &params()).is_none());
    }

    #[test]
    fn non_integer_correct_index_discards_the_question() {
        for bad in [
            serde_json::json!(1.5),
            serde_json::json!("2"),
            serde_json::json!(null),
        ] {
            let mut quiz: Vec<Value> = (0..4).map(question_value).collect();
            quiz.push(serde_json::json!({
                "question": "Bad index?",
                "options": ["a", "b", "c", "d"],
                "correctIndex": bad
            }));
            assert!(normalize_content(&content_with_quiz(quiz), &params()).is_none());
        }
    }

    #[test]
    fn out_of_range_correct_index_discards_the_question() {
        for bad in [-1i64, 4, 10] {
            let mut quiz: Vec<Value> = (0..4).map(question_value).collect();
            quiz.push(serde_json::json!({
                "question": "Out of range?",
                "options": ["a", "b", "c", "d"],
                "correctIndex": bad
            }));
            assert!(normalize_content(&content_with_quiz(quiz), &params()).is_none());
        }
    }

    #[test]
    fn missing_banter_falls_back_but_keeps_the_quiz() {
        let candidate = serde_json::json!({
            "badgeName": "Gunners Elite",
            "quiz": (0..5).map(question_value).collect::<Vec<_>>()
        })
        .to_string();
        let content = normalize_content(&candidate, &params()).unwrap();
        assert_eq!(content.initial_banter, fallback::banter(&params()));
        assert_eq!(content.badge_name, "Gunners Elite");
        assert_eq!(content.quiz.len(), 5);
    }

    #[test]
    fn wrong_typed_banter_falls_back_but_keeps_the_quiz() {
        let candidate = serde_json::json!({
            "initialBanter": 123,
            "badgeName": "Gunners Elite",
            "quiz": (0..5).map(question_value).collect::<Vec<_>>()
        })
        .to_string();
        let content = normalize_content(&candidate, &params()).unwrap();
        assert_eq!(content.initial_banter, fallback::banter(&params()));
        assert_eq!(content.badge_name, "Gunners Elite");
        assert_eq!(content.quiz.len(), 5);
    }

    #[test]
    fn wrong_typed_badge_name_falls_back_but_keeps_the_quiz() {
        let candidate = serde_json::json!({
            "initialBanter": "Welcome!",
            "badgeName": ["not", "a", "string"],
            "quiz": (0..5).map(question_value).collect::<Vec<_>>()
        })
        .to_string();
        let content = normalize_content(&candidate, &params()).unwrap();
        assert_eq!(content.badge_name, fallback::badge_name(&params()));
        assert_eq!(content.initial_banter, "Welcome!");
        assert_eq!(content.quiz.len(), 5);
    }

    #[test]
    fn blank_badge_name_falls_back() {
        let candidate = serde_json::json!({
            "initialBanter": "Welcome!",
            "badgeName": "   ",
            "quiz": (0..5).map(question_value).collect::<Vec<_>>()
        })
        .to_string();
        let content = normalize_content(&candidate, &params()).unwrap();
        assert_eq!(content.badge_name, fallback::badge_name(&params()));
        assert_eq!(content.initial_banter, "Welcome!");
    }

    #[test]
    fn banter_normalization_trims_and_rejects_blank() {
        assert_eq!(
            normalize_banter("  Nice one, Alex!  "),
            Some("Nice one, Alex!".to_string())
        );
        assert!(normalize_banter("").is_none());
        assert!(normalize_banter("   \n\t").is_none());
    }
}
