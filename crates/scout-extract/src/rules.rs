//! Line classification rules used by the extractor.
//!
//! Each rule is a small pure function over one trimmed line so tests can
//! target them independently of the scan.

/// Enumeration markers stripped from the start of a question, tried in order.
///
/// Only the first match is removed. `10.` never shadows `1.` because a line
/// starting with `10.` does not start with `1.`.
pub const ENUMERATION_MARKERS: &[&str] = &[
    "1.", "2.", "3.", "4.", "5.", "6.", "7.", "8.", "9.", "10.", //
    "1)", "2)", "3)", "4)", "5)", "6)", "7)", "8)", "9)", "10)", //
    "-", "*", "•", "Q:", "Question:",
];

/// Leading characters that mark a bullet.
const BULLETS: &[char] = &['-', '*', '•'];

/// Lines longer than this are treated as questions even without a marker.
pub const LIKELY_QUESTION_CHARS: usize = 15;

/// Cleaned questions must be longer than this to be kept.
pub const MIN_QUESTION_CHARS: usize = 10;

/// Lines considered by the global fallback must be longer than this.
pub const FALLBACK_LINE_CHARS: usize = 20;

/// Why a line was accepted as a question candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionCue {
    /// Starts with a digit (`1.`, `2)`, `3 -` …).
    Numbered,
    /// Starts with `-`, `*` or `•`.
    Bulleted,
    /// Starts with `Q` or `q` (`Q:`, `Question:`, `q1`).
    Prefixed,
    /// Carries no marker but is long enough to be content.
    Long,
}

fn starts_with_digit(line: &str) -> bool {
    line.chars().next().is_some_and(|c| c.is_ascii_digit())
}

/// Index of the technology a header line introduces, if any.
///
/// A header contains a technology name case-insensitively and does not start
/// with a digit. The first name in `lowered_techs` order wins, so with
/// `["Java", "JavaScript"]` a `JavaScript:` line is claimed by `Java`.
/// Blank names never match.
#[must_use]
pub fn header_index(line: &str, lowered_techs: &[String]) -> Option<usize> {
    if line.is_empty() || starts_with_digit(line) {
        return None;
    }
    let lowered = line.to_lowercase();
    lowered_techs
        .iter()
        .position(|tech| !tech.is_empty() && lowered.contains(tech.as_str()))
}

/// Classify a non-header line as a question candidate.
#[must_use]
pub fn question_cue(line: &str) -> Option<QuestionCue> {
    let first = line.chars().next()?;
    if first.is_ascii_digit() {
        Some(QuestionCue::Numbered)
    } else if BULLETS.contains(&first) {
        Some(QuestionCue::Bulleted)
    } else if first == 'Q' || first == 'q' {
        Some(QuestionCue::Prefixed)
    } else if line.chars().count() > LIKELY_QUESTION_CHARS {
        Some(QuestionCue::Long)
    } else {
        None
    }
}

/// Remove the first matching enumeration marker and surrounding whitespace.
#[must_use]
pub fn strip_marker(line: &str) -> &str {
    ENUMERATION_MARKERS
        .iter()
        .find_map(|marker| line.strip_prefix(marker))
        .unwrap_or(line)
        .trim()
}

/// Whether a cleaned question carries enough text to keep.
#[must_use]
pub fn is_substantial(question: &str) -> bool {
    question.chars().count() > MIN_QUESTION_CHARS
}

/// Whether a raw line qualifies for the global `?` fallback.
#[must_use]
pub fn is_fallback_candidate(line: &str) -> bool {
    line.chars().count() > FALLBACK_LINE_CHARS && line.contains('?')
}
