//! Prompt construction for the generation service.
//!
//! Pure functions of the typed request parameters. The system prompts carry
//! the output-format contract; the user prompts carry the personalization.

use super::model::{RequestParams, ScoreSummary};

/// System instruction for the onboarding content call: JSON only, exact
/// shape, exactly 5 questions.
pub fn onboarding_system_prompt() -> String {
    "You are the onboarding writer for an app that helps people settle into a new city.\n\
     Given a new resident's name, their interest group, and a personal interest, produce\n\
     a short welcome and a trivia quiz for them.\n\n\
     Respond with ONLY a JSON object. No prose, no markdown fences, no commentary.\n\
     Shape:\n\
     {\"initialBanter\": \"...\", \"badgeName\": \"...\", \"quiz\": [{\"question\": \"...\", \
     \"options\": [\"...\", \"...\", \"...\", \"...\"], \"correctIndex\": 0}]}\n\n\
     Rules:\n\
     - \"quiz\" has exactly 5 questions\n\
     - every question has exactly 4 options and a correctIndex between 0 and 3\n\
     - questions mix the resident's personal interest with their group and with\n\
       settling into a new city\n\
     - \"initialBanter\" is 1-2 warm, playful sentences\n\
     - \"badgeName\" is a fun title of 2-4 words\n\
     - keep everything concise and family-friendly"
        .to_string()
}

/// User prompt for the onboarding content call.
pub fn onboarding_user_prompt(params: &RequestParams) -> String {
    format!(
        "New resident: {name}\n\
         Interest group: {tribe}\n\
         Personal interest: {interest}\n\n\
         Write their onboarding content.",
        name = params.user_name,
        tribe = params.tribe,
        interest = params.interest,
    )
}

/// System instruction for the final banter call: plain text only.
pub fn banter_system_prompt() -> String {
    "You write short, warm quiz result messages for an app that helps people settle\n\
     into a new city. Respond with plain text only: 1-2 sentences, no JSON, no\n\
     markdown, no surrounding quotes. Be encouraging and family-friendly."
        .to_string()
}

/// User prompt for the final banter call.
pub fn banter_user_prompt(summary: &ScoreSummary) -> String {
    format!(
        "{name} from the {tribe} group (personal interest: {interest}) just finished\n\
         the welcome quiz and scored {score} out of {total}. Write their result message.",
        name = summary.user_name,
        tribe = summary.tribe,
        interest = summary.interest,
        score = summary.score,
        total = summary.total,
    )
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

    #[test]
    fn onboarding_system_prompt_pins_the_contract() {
        let prompt = onboarding_system_prompt();
        assert!(prompt.contains("ONLY a JSON object"));
        assert!(prompt.contains("initialBanter"));
        assert!(prompt.contains("badgeName"));
        assert!(prompt.contains("correctIndex"));
        assert!(prompt.contains("exactly 5 questions"));
        assert!(prompt.contains("between 0 and 3"));
        assert!(prompt.contains("family-friendly"));
    }

    #[test]
    fn onboarding_user_prompt_carries_all_params() {
        let prompt = onboarding_user_prompt(&params());
        assert!(prompt.contains("Alex"));
        assert!(prompt.contains("Football"));
        assert!(prompt.contains("Arsenal"));
    }

    #[test]
    fn banter_system_prompt_forbids_structure() {
        let prompt = banter_system_prompt();
        assert!(prompt.contains("plain text only"));
        assert!(prompt.contains("no JSON"));
    }

    #[test]
    fn banter_user_prompt_carries_score() {
        let summary = ScoreSummary {
            user_name: "Alex".to_string(),
            tribe: "Football".to_string(),
            interest: "Arsenal".to_string(),
            score: 3,
            total: 5,
        };
        let prompt = banter_user_prompt(&summary);
        assert!(prompt.contains("Alex"));
        assert!(prompt.contains("3 out of 5"));
    }
}
