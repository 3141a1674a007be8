use scout_core::entities::{CandidateProfile, ConversationTurn};
use scout_core::questions::{QuestionBounds, QuestionSet};
use scout_extract::{extract, upstream_fallback};

use crate::client::{ChatMessage, ChatModel, ChatRequest};
use crate::error::LlmError;
use crate::prompts::{FOLLOWUP_SYSTEM, QUESTIONS_SYSTEM, followup_prompt, questions_prompt};

const QUESTIONS_TEMPERATURE: f32 = 0.2;
const QUESTIONS_MAX_TOKENS: u32 = 800;
const FOLLOWUP_TEMPERATURE: f32 = 0.3;
const FOLLOWUP_MAX_TOKENS: u32 = 600;

/// Ask `model` for screening questions and extract them.
///
/// Never fails. If the model call errors, the error is logged and every
/// technology gets the fixed fallback set instead.
pub async fn generate_questions<M: ChatModel>(
    model: &M,
    techs: &[String],
    candidate: Option<&CandidateProfile>,
    bounds: QuestionBounds,
) -> QuestionSet {
    let request = ChatRequest {
        messages: vec![
            ChatMessage::system(QUESTIONS_SYSTEM),
            ChatMessage::user(questions_prompt(
                techs,
                candidate,
                bounds.min(),
                bounds.max(),
            )),
        ],
        temperature: QUESTIONS_TEMPERATURE,
        max_tokens: QUESTIONS_MAX_TOKENS,
    };

    match model.complete(&request).await {
        Ok(raw) => extract(&raw, techs, bounds),
        Err(error) => {
            tracing::warn!(%error, "question generation failed, using fallback questions");
            upstream_fallback(techs, bounds)
        }
    }
}

/// Answer a candidate's follow-up message.
///
/// `conversation` should already contain `message` as its last turn; only the
/// last `window` turns are sent.
///
/// # Errors
///
/// Returns the model's [`LlmError`] unchanged.
pub async fn answer_followup<M: ChatModel>(
    model: &M,
    message: &str,
    conversation: &[ConversationTurn],
    questions: &QuestionSet,
    window: usize,
) -> Result<String, LlmError> {
    let request = ChatRequest {
        messages: vec![
            ChatMessage::system(FOLLOWUP_SYSTEM),
            ChatMessage::user(followup_prompt(message, conversation, questions, window)),
        ],
        temperature: FOLLOWUP_TEMPERATURE,
        max_tokens: FOLLOWUP_MAX_TOKENS,
    };
    model.complete(&request).await
}
