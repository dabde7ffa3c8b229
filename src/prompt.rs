use log::info;

pub const DEFAULT_PERSONA: &str = "Role: You are a knowledgeable travel guide and planner. \
Your task is to help clients plan their trips to any location worldwide. \
When engaging with clients, ask them for more details if the information they provide is insufficient for planning the itinerary. \
Gather essential details such as their travel dates, preferred destinations, interests (e.g., culture, adventure, relaxation), \
budget, and any special requests. Your responses should be friendly, informative, and proactive in guiding them through the planning process.";

/// Builds the flat prompt sent upstream and the history extended with the
/// new user turn. The caller's history is copied, never mutated.
pub fn build_prompt(user_input: &str, persona: &str, history: &[String]) -> (String, Vec<String>) {
    let mut conversation_history = history.to_vec();
    conversation_history.push(format!("User: {}", user_input));

    let prompt = format!("{}\n{}\nAssistant:", persona, conversation_history.join("\n"));
    info!("Generated prompt: {}", prompt);

    (prompt, conversation_history)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_frames_user_input() {
        let (prompt, _) = build_prompt("Plan a trip to Tokyo", DEFAULT_PERSONA, &[]);
        assert!(prompt.starts_with(DEFAULT_PERSONA));
        assert!(prompt.contains("\nUser: Plan a trip to Tokyo"));
        assert!(prompt.ends_with("\nAssistant:"));
    }

    #[test]
    fn prompt_ends_with_cue_for_empty_input() {
        let (prompt, history) = build_prompt("", "Be helpful.", &[]);
        assert!(prompt.ends_with("User: \nAssistant:"));
        assert_eq!(history, vec!["User: ".to_string()]);
    }

    #[test]
    fn history_is_copied_and_extended() {
        let prior = vec![
            "User: Hi".to_string(),
            "Assistant: Hello! Where would you like to go?".to_string(),
        ];
        let (prompt, updated) = build_prompt("Somewhere warm", "persona", &prior);

        assert_eq!(updated.len(), prior.len() + 1);
        assert_eq!(&updated[..prior.len()], &prior[..]);
        assert_eq!(updated.last().unwrap(), "User: Somewhere warm");
        // Caller's sequence stays untouched.
        assert_eq!(prior.len(), 2);
        assert!(prompt.contains("User: Hi\nAssistant: Hello! Where would you like to go?\nUser: Somewhere warm"));
    }
}
