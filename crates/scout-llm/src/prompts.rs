//! Prompt text for question generation and follow-up chat.
//!
//! The question prompt asks for one header line per technology followed by
//! numbered questions, which is the shape `scout_extract::extract` handles
//! best. Models drift from it often enough that extraction stays heuristic.

use std::fmt::Write;

use scout_core::entities::{CandidateProfile, ConversationTurn};
use scout_core::questions::QuestionSet;

/// System message for question generation.
pub const QUESTIONS_SYSTEM: &str = "You are a technical screening assistant for a recruiting team. \
Always answer with each technology name on its own line followed by numbered questions.";

/// System message for follow-up chat.
pub const FOLLOWUP_SYSTEM: &str = "You are the recruiting team's technical screening assistant. \
You help candidates with the screening: rephrasing questions, explaining the concepts behind them, \
sketching what a strong answer covers, and answering questions about the process. \
Stay on technical screening topics.";

const FORMAT_EXAMPLE: &str = "\
Python:
1. When would you choose a tuple over a list, and why?
2. How does the GIL affect CPU-bound threads?
3. Write a generator that yields a sliding window over a sequence.

Django:
1. Walk through what happens between a request arriving and a response leaving.
2. How would you add token authentication to a REST API?";

/// Prompt asking for `min_q`–`max_q` questions for each of `techs`.
#[must_use]
pub fn questions_prompt(
    techs: &[String],
    candidate: Option<&CandidateProfile>,
    min_q: usize,
    max_q: usize,
) -> String {
    let mut prompt = String::new();
    let _ = writeln!(
        prompt,
        "Write {min_q} to {max_q} technical screening questions for each technology below."
    );
    if let Some(candidate) = candidate {
        let _ = writeln!(
            prompt,
            "Candidate: {} | Experience: {}, Desired: {}",
            candidate.name, candidate.years, candidate.desired
        );
    }
    let _ = writeln!(prompt, "Technologies: {}", techs.join(", "));
    prompt.push_str(
        "\nFormat:\n\
         Put each technology name on its own line, then its questions numbered 1., 2., 3. …\n\
         \nGuidelines:\n\
         - Order each technology's questions from basic to advanced.\n\
         - Ask only technical questions, no HR or salary topics.\n\
         - Keep every question to one or two sentences.\n\
         - For libraries and frameworks include a hands-on coding question and a design question.\n\
         \nExample:\n",
    );
    prompt.push_str(FORMAT_EXAMPLE);
    prompt.push('\n');
    prompt
}

/// Prompt for answering `message` in the context of the screening so far.
///
/// Only the last `window` turns of `conversation` are included.
#[must_use]
pub fn followup_prompt(
    message: &str,
    conversation: &[ConversationTurn],
    questions: &QuestionSet,
    window: usize,
) -> String {
    let start = conversation.len().saturating_sub(window);
    let mut history = String::new();
    for turn in &conversation[start..] {
        let _ = writeln!(history, "{}: {}", turn.role.label(), turn.text);
    }

    let mut generated = String::new();
    for (tech, list) in questions {
        let _ = writeln!(generated, "\n{tech} questions:");
        for (i, question) in list.iter().enumerate() {
            let _ = writeln!(generated, "  {}. {question}", i + 1);
        }
    }

    format!(
        "You are helping a candidate through a technical screening.\n\
         \nConversation so far:\n{history}\
         \nScreening questions:{generated}\
         \nCandidate's message: \"{message}\"\n\
         \nHow to reply:\n\
         - Rephrase a question more clearly when asked.\n\
         - Explain the underlying concept or suggest a deeper follow-up when asked to dig in.\n\
         - Outline a brief example answer when asked for one.\n\
         - Suggest concrete improvements when asked to change a question.\n\
         - Do not drift away from the screening.\n\
         - Answer in two or three sentences.\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn techs() -> Vec<String> {
        vec!["Rust".into(), "Tokio".into()]
    }

    #[test]
    fn questions_prompt_lists_technologies_and_range() {
        let prompt = questions_prompt(&techs(), None, 3, 5);
        assert!(prompt.contains("Write 3 to 5 technical screening questions"));
        assert!(prompt.contains("Technologies: Rust, Tokio"));
        assert!(!prompt.contains("Candidate:"));
        assert!(prompt.contains("Python:\n1. When would you choose"));
    }

    #[test]
    fn questions_prompt_includes_candidate_summary() {
        let candidate = CandidateProfile {
            name: "Ferris".into(),
            years: 4,
            desired: "Backend Engineer".into(),
            ..Default::default()
        };
        let prompt = questions_prompt(&techs(), Some(&candidate), 3, 5);
        assert!(prompt.contains("Candidate: Ferris | Experience: 4, Desired: Backend Engineer"));
    }

    #[test]
    fn followup_prompt_windows_history() {
        let conversation: Vec<ConversationTurn> = (0..8)
            .map(|i| {
                if i % 2 == 0 {
                    ConversationTurn::user(format!("u{i}"))
                } else {
                    ConversationTurn::assistant(format!("a{i}"))
                }
            })
            .collect();
        let prompt = followup_prompt("rephrase 1", &conversation, &QuestionSet::new(), 6);

        assert!(!prompt.contains("User: u0"));
        assert!(!prompt.contains("Assistant: a1"));
        assert!(prompt.contains("User: u2\n"));
        assert!(prompt.contains("Assistant: a7\n"));
        assert!(prompt.contains("Candidate's message: \"rephrase 1\""));
    }

    #[test]
    fn followup_prompt_numbers_questions_per_technology() {
        let mut questions = QuestionSet::new();
        questions.insert(
            "Rust".into(),
            vec!["What is a lifetime?".into(), "What is Send?".into()],
        );
        let prompt = followup_prompt("hi", &[], &questions, 6);
        assert!(prompt.contains("\nRust questions:\n  1. What is a lifetime?\n  2. What is Send?\n"));
    }
}
