use scout_core::questions::QuestionBounds;

use crate::fallback::filler_questions;

/// Clamp a question list into `bounds`.
///
/// Short lists are padded with filler questions for `tech` in their fixed
/// order, only as many as needed; long lists are truncated. If more fillers
/// are needed than there are templates, the templates repeat from the start,
/// so the result always reaches the minimum. Applying this twice yields the
/// same list.
#[must_use]
pub fn normalize(tech: &str, mut questions: Vec<String>, bounds: QuestionBounds) -> Vec<String> {
    if questions.len() < bounds.min() {
        let needed = bounds.min() - questions.len();
        let fillers = filler_questions(tech);
        questions.extend(fillers.iter().cycle().take(needed).cloned());
    }
    questions.truncate(bounds.max());
    questions
}
