//! Behavioural tests for question extraction over realistic model output.

use pretty_assertions::assert_eq;
use rstest::rstest;
use scout_core::questions::QuestionBounds;
use scout_extract::fallback::filler_questions;
use scout_extract::{extract, normalize};

fn techs(names: &[&str]) -> Vec<String> {
    names.iter().map(ToString::to_string).collect()
}

const NUMBERED_SECTIONS: &str = "Python:\n1. What is a list?\n2. What is a tuple?\n3. Explain decorators.\nDjango:\n1. Explain MVC.\n2. Explain ORM.\n3. Explain middleware.\n4. Explain auth.";

#[test]
fn numbered_sections_are_split_per_technology() {
    let set = extract(
        NUMBERED_SECTIONS,
        &techs(&["Python", "Django"]),
        QuestionBounds::default(),
    );

    assert_eq!(
        set["Python"],
        ["What is a list?", "What is a tuple?", "Explain decorators."]
    );
    assert_eq!(
        set["Django"],
        [
            "Explain MVC.",
            "Explain ORM.",
            "Explain middleware.",
            "Explain auth."
        ]
    );
}

#[test]
fn markdown_model_output() {
    let raw = r"
Sure! Here are the screening questions.

**Rust**
1) What problem does the borrow checker solve?
2) When would you reach for `Rc<RefCell<T>>`?
- How do you structure error types across crates?

**PostgreSQL**
Q: How does MVCC avoid read locks?
Question: When is a partial index worth it?
* Explain the difference between VACUUM and VACUUM FULL.
";
    let set = extract(raw, &techs(&["Rust", "PostgreSQL"]), QuestionBounds::default());

    assert_eq!(
        set["Rust"],
        [
            "What problem does the borrow checker solve?",
            "When would you reach for `Rc<RefCell<T>>`?",
            "How do you structure error types across crates?",
        ]
    );
    assert_eq!(
        set["PostgreSQL"],
        [
            "How does MVCC avoid read locks?",
            "When is a partial index worth it?",
            "Explain the difference between VACUUM and VACUUM FULL.",
        ]
    );
}

#[rstest]
#[case("")]
#[case("   \n\n  ")]
#[case("ok")]
#[case("Nothing useful here at all, sorry.")]
fn unrecognizable_text_yields_only_fillers(#[case] raw: &str) {
    let set = extract(raw, &techs(&["Rust", "Go"]), QuestionBounds::default());
    for (tech, questions) in &set {
        let expected: Vec<String> = filler_questions(tech).into_iter().take(3).collect();
        assert_eq!(questions, &expected, "tech {tech}");
    }
}

#[test]
fn global_fallback_spreads_question_lines() {
    let raw = "\
Here is what I came up with for you today:
What is the difference between a process and a thread?
How does virtual memory map pages to frames?
Why would a mutex be preferred over a spinlock?
How do you diagnose a deadlock in production?
What happens during a context switch on x86?";
    let set = extract(
        raw,
        &techs(&["Linux", "Networking"]),
        QuestionBounds::new(1, 5).unwrap(),
    );

    assert_eq!(
        set["Linux"],
        [
            "What is the difference between a process and a thread?",
            "How does virtual memory map pages to frames?",
        ]
    );
    assert_eq!(
        set["Networking"],
        [
            "Why would a mutex be preferred over a spinlock?",
            "How do you diagnose a deadlock in production?",
            "What happens during a context switch on x86?",
        ]
    );
}

#[test]
fn duplicate_names_merge_their_fallback_slots() {
    let raw = "\
Would you explain how ownership moves work?
When does the borrow checker reject a closure?
Why are trait objects not always object safe?";
    let set = extract(raw, &techs(&["Rust", "Rust"]), QuestionBounds::default());

    assert_eq!(set.len(), 1);
    assert_eq!(
        set["Rust"],
        [
            "Would you explain how ownership moves work?",
            "When does the borrow checker reject a closure?",
            "Why are trait objects not always object safe?",
        ]
    );
}

#[test]
fn global_fallback_is_skipped_when_any_section_matched() {
    let raw = "Go:\n1. How do channels synchronize goroutines?\nWhy would anyone pick Rust over Go today?";
    let set = extract(raw, &techs(&["Go", "Rust"]), QuestionBounds::new(0, 5).unwrap());
    // The last line names both technologies, so it is a header for Go.
    assert_eq!(set["Go"], ["How do channels synchronize goroutines?"]);
    assert!(set["Rust"].is_empty());
}

#[test]
fn substring_names_claim_each_others_headers() {
    let raw = "JavaScript:\n1. What is the event loop?\n2. Explain closures in depth.\nJava:\n1. What does the JVM JIT do?";
    let set = extract(
        raw,
        &techs(&["Java", "JavaScript"]),
        QuestionBounds::new(0, 5).unwrap(),
    );

    // "Java" is listed first and is a substring of "JavaScript", so it owns
    // both sections. This is the accepted heuristic behaviour.
    assert_eq!(
        set["Java"],
        [
            "What is the event loop?",
            "Explain closures in depth.",
            "What does the JVM JIT do?",
        ]
    );
    assert!(set["JavaScript"].is_empty());
}

#[test]
fn output_follows_request_order_not_text_order() {
    let raw = "Django:\n1. Explain signals and receivers.\nPython:\n1. Explain the GIL and its impact.";
    let set = extract(raw, &techs(&["Python", "Django"]), QuestionBounds::default());
    let keys: Vec<&str> = set.keys().map(String::as_str).collect();
    assert_eq!(keys, ["Python", "Django"]);
}

#[rstest]
#[case(NUMBERED_SECTIONS, 3, 5)]
#[case(NUMBERED_SECTIONS, 1, 2)]
#[case(NUMBERED_SECTIONS, 4, 4)]
#[case("", 3, 5)]
#[case("", 0, 1)]
#[case("Python\n1. a\n2. b\nWhy do Python generators pause on yield?", 2, 3)]
fn every_requested_tech_is_within_bounds(
    #[case] raw: &str,
    #[case] min: usize,
    #[case] max: usize,
) {
    let requested = techs(&["Python", "Django", "Redis"]);
    let bounds = QuestionBounds::new(min, max).unwrap();
    let set = extract(raw, &requested, bounds);

    let keys: Vec<&String> = set.keys().collect();
    assert_eq!(keys, requested.iter().collect::<Vec<_>>());
    for (tech, questions) in &set {
        assert!(
            bounds.contains(questions.len()),
            "{tech} has {} questions, outside [{min}, {max}]",
            questions.len()
        );
        assert_eq!(&normalize(tech, questions.clone(), bounds), questions);
    }
}
