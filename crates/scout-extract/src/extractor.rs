use scout_core::questions::{QuestionBounds, QuestionSet};

use crate::fallback::distribute;
use crate::normalize::normalize;
use crate::rules::{header_index, is_fallback_candidate, is_substantial, question_cue, strip_marker};

/// Outcome of the header pass for one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineKind<'a> {
    /// Introduces the section of the technology at this index.
    Header(usize),
    Body(&'a str),
}

/// Extract a technology → questions mapping from raw model output.
///
/// The result holds exactly the names in `techs`, in that order, each list
/// normalized into `bounds`. Extraction never fails: whatever the text lacks
/// is made up by the global `?` fallback and filler questions. A name listed
/// twice keeps its first position and collects questions from both slots.
#[must_use]
pub fn extract(raw: &str, techs: &[String], bounds: QuestionBounds) -> QuestionSet {
    let lines: Vec<&str> = raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    let lowered: Vec<String> = techs.iter().map(|tech| tech.to_lowercase()).collect();

    let classified = classify(&lines, &lowered);
    let mut collected = collect(&classified, techs.len());

    if collected.iter().all(Vec::is_empty) {
        let candidates: Vec<String> = lines
            .iter()
            .filter(|line| is_fallback_candidate(line))
            .map(|line| (*line).to_string())
            .collect();
        if !candidates.is_empty() {
            tracing::debug!(
                lines = candidates.len(),
                "no sectioned questions found, distributing '?' lines"
            );
            collected = distribute(&candidates, techs.len());
        }
    }

    let mut merged = QuestionSet::with_capacity(techs.len());
    for (tech, questions) in techs.iter().zip(collected) {
        merged.entry(tech.clone()).or_default().extend(questions);
    }

    merged
        .into_iter()
        .map(|(tech, questions)| {
            let found = questions.len();
            let questions = normalize(&tech, questions, bounds);
            if found < bounds.min() {
                tracing::debug!(%tech, found, "padded with filler questions");
            }
            (tech, questions)
        })
        .collect()
}

/// First pass: mark header lines.
fn classify<'a>(lines: &[&'a str], lowered_techs: &[String]) -> Vec<LineKind<'a>> {
    lines
        .iter()
        .map(|line| match header_index(line, lowered_techs) {
            Some(index) => {
                tracing::debug!(line, index, "technology section detected");
                LineKind::Header(index)
            }
            None => LineKind::Body(line),
        })
        .collect()
}

/// Second pass: collect questions under the current technology.
fn collect(classified: &[LineKind<'_>], tech_count: usize) -> Vec<Vec<String>> {
    let mut lists = vec![Vec::new(); tech_count];
    let mut current: Option<usize> = None;

    for kind in classified {
        match *kind {
            LineKind::Header(index) => current = Some(index),
            LineKind::Body(line) => {
                let Some(index) = current else { continue };
                if question_cue(line).is_none() {
                    continue;
                }
                let question = strip_marker(line);
                if is_substantial(question) {
                    lists[index].push(question.to_string());
                }
            }
        }
    }

    lists
}
