//! Per-candidate screening session.
//!
//! A session owns everything one candidate produces: the captured profile,
//! the generated questions and the chat transcript. It moves through a
//! single linear flow:
//!
//! ```text
//! intake → questions generated → chat … → finished
//! ```

use crate::entities::{CandidateProfile, ConversationTurn};
use crate::errors::CoreError;
use crate::questions::QuestionSet;

/// Substrings that end the conversation when found in a user message.
pub const END_KEYWORDS: &[&str] = &[
    "exit",
    "quit",
    "bye",
    "end",
    "stop",
    "bye bye",
    "thank you",
    "thanks",
    "done",
];

/// Assistant turn recorded once questions have been generated.
pub const QUESTIONS_GENERATED_NOTE: &str = "Generated technical questions for the candidate.";

/// Assistant turn recorded when the candidate ends the conversation.
pub const FAREWELL_NOTE: &str = "Conversation ended. Thank you.";

/// Whether a user message asks to end the conversation.
///
/// Matching is case-insensitive substring containment against the trimmed
/// message, so "ok bye" and "THANKS!" both end the session. This also means
/// words that merely contain a keyword ("backend", "weekend") end it.
#[must_use]
pub fn is_end_conversation(message: &str) -> bool {
    let text = message.trim().to_lowercase();
    END_KEYWORDS.iter().any(|keyword| text.contains(keyword))
}

#[derive(Debug, Clone)]
pub struct ScreeningSession {
    candidate: CandidateProfile,
    questions: QuestionSet,
    conversation: Vec<ConversationTurn>,
    finished: bool,
}

impl ScreeningSession {
    /// Start a session for a captured profile.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] if the profile lacks a name, email or
    /// tech stack.
    pub fn new(candidate: CandidateProfile) -> Result<Self, CoreError> {
        let candidate = candidate.trimmed();
        candidate.validate()?;
        Ok(Self {
            candidate,
            questions: QuestionSet::new(),
            conversation: Vec::new(),
            finished: false,
        })
    }

    #[must_use]
    pub const fn candidate(&self) -> &CandidateProfile {
        &self.candidate
    }

    #[must_use]
    pub const fn questions(&self) -> &QuestionSet {
        &self.questions
    }

    #[must_use]
    pub fn conversation(&self) -> &[ConversationTurn] {
        &self.conversation
    }

    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.finished
    }

    /// Store the generated questions and note it in the transcript.
    pub fn set_questions(&mut self, questions: QuestionSet) {
        self.questions = questions;
        self.conversation
            .push(ConversationTurn::assistant(QUESTIONS_GENERATED_NOTE));
    }

    /// Append a user message.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::SessionFinished`] once the session has ended.
    pub fn push_user(&mut self, text: impl Into<String>) -> Result<(), CoreError> {
        self.ensure_open()?;
        self.conversation.push(ConversationTurn::user(text));
        Ok(())
    }

    /// Append an assistant reply.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::SessionFinished`] once the session has ended.
    pub fn push_assistant(&mut self, text: impl Into<String>) -> Result<(), CoreError> {
        self.ensure_open()?;
        self.conversation.push(ConversationTurn::assistant(text));
        Ok(())
    }

    /// The last `n` turns, oldest first.
    #[must_use]
    pub fn recent(&self, n: usize) -> &[ConversationTurn] {
        let start = self.conversation.len().saturating_sub(n);
        &self.conversation[start..]
    }

    /// Record the closing exchange and mark the session finished.
    ///
    /// Returns the profile and questions to persist.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::SessionFinished`] if called twice.
    pub fn finish(
        &mut self,
        closing_message: impl Into<String>,
    ) -> Result<(&CandidateProfile, &QuestionSet), CoreError> {
        self.ensure_open()?;
        self.conversation.push(ConversationTurn::user(closing_message));
        self.conversation
            .push(ConversationTurn::assistant(FAREWELL_NOTE));
        self.finished = true;
        Ok((&self.candidate, &self.questions))
    }

    const fn ensure_open(&self) -> Result<(), CoreError> {
        if self.finished {
            Err(CoreError::SessionFinished)
        } else {
            Ok(())
        }
    }
}
