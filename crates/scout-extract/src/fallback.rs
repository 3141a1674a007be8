//! Template questions used when extraction falls short or the model is
//! unreachable.

use scout_core::questions::{QuestionBounds, QuestionSet};

/// Number of templates in the upstream-failure set.
const UPSTREAM_TEMPLATE_COUNT: usize = 3;

/// Filler questions appended to a short list, in order.
#[must_use]
pub fn filler_questions(tech: &str) -> [String; 5] {
    [
        format!("What are the key features and advantages of {tech}?"),
        format!("Describe your experience working with {tech} in professional projects."),
        format!("What are common challenges developers face with {tech} and how do you solve them?"),
        format!("How does {tech} compare to similar technologies you've used?"),
        format!("What best practices do you follow when developing with {tech}?"),
    ]
}

fn upstream_templates(tech: &str) -> [String; UPSTREAM_TEMPLATE_COUNT] {
    [
        format!("Explain the core concepts of {tech} and its main use cases."),
        format!("What are some best practices when working with {tech}?"),
        format!("Describe a challenging problem you've solved using {tech}."),
    ]
}

/// Questions to use when the question-generation call failed outright.
///
/// Every technology gets exactly `min(bounds.max(), 3)` questions; no parsing
/// or filler padding is involved.
#[must_use]
pub fn upstream_fallback(techs: &[String], bounds: QuestionBounds) -> QuestionSet {
    let count = bounds.max().min(UPSTREAM_TEMPLATE_COUNT);
    techs
        .iter()
        .map(|tech| {
            let questions = upstream_templates(tech).into_iter().take(count).collect();
            (tech.clone(), questions)
        })
        .collect()
}

/// Spread `lines` evenly over `slots` buckets, in order.
///
/// Each bucket gets `lines.len() / slots` lines; the last bucket also takes the
/// remainder. With fewer lines than slots, everything lands in the last one.
pub(crate) fn distribute<T: Clone>(lines: &[T], slots: usize) -> Vec<Vec<T>> {
    if slots == 0 {
        return Vec::new();
    }
    let per_slot = lines.len() / slots;
    (0..slots)
        .map(|slot| {
            let start = slot * per_slot;
            let end = if slot + 1 < slots {
                start + per_slot
            } else {
                lines.len()
            };
            lines[start..end].to_vec()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn techs(names: &[&str]) -> Vec<String> {
        names.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn upstream_fallback_uses_three_templates() {
        let set = upstream_fallback(&techs(&["Go", "Rust"]), QuestionBounds::default());
        assert_eq!(set.len(), 2);
        assert_eq!(
            set["Go"],
            [
                "Explain the core concepts of Go and its main use cases.",
                "What are some best practices when working with Go?",
                "Describe a challenging problem you've solved using Go.",
            ]
        );
    }

    #[test]
    fn upstream_fallback_respects_small_max() {
        let bounds = QuestionBounds::new(1, 2).unwrap();
        let set = upstream_fallback(&techs(&["Go"]), bounds);
        assert_eq!(set["Go"].len(), 2);
    }

    #[test]
    fn upstream_fallback_is_not_padded_to_min() {
        let bounds = QuestionBounds::new(4, 8).unwrap();
        let set = upstream_fallback(&techs(&["Go"]), bounds);
        assert_eq!(set["Go"].len(), 3);
    }

    #[test]
    fn distribute_gives_remainder_to_last() {
        let buckets = distribute(&[1, 2, 3, 4, 5, 6, 7], 3);
        assert_eq!(buckets, vec![vec![1, 2], vec![3, 4], vec![5, 6, 7]]);
    }

    #[test]
    fn distribute_with_fewer_lines_than_slots() {
        let buckets = distribute(&["a", "b"], 3);
        assert_eq!(buckets, vec![vec![], vec![], vec!["a", "b"]]);
    }

    #[test]
    fn distribute_with_no_slots() {
        assert!(distribute(&[1, 2], 0).is_empty());
    }

    #[test]
    fn filler_order_is_fixed() {
        let fillers = filler_questions("SQL");
        assert!(fillers[0].starts_with("What are the key features"));
        assert!(fillers[4].starts_with("What best practices"));
    }
}
