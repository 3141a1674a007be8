use std::fmt::Write;

use chrono::{DateTime, SecondsFormat, Utc};
use scout_core::entities::{CandidateProfile, SubmissionRecord};
use scout_core::questions::QuestionSet;
use serde::Serialize;

use crate::cli::OutputFormat;

/// Human-readable rendering used by `--format text`.
pub trait TextView {
    fn to_text(&self) -> String;
}

/// Render a response to a string in the requested format.
pub fn render<T: Serialize + TextView>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Text => Ok(value.to_text()),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a response in the requested format.
pub fn output<T: Serialize + TextView>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

impl TextView for QuestionSet {
    fn to_text(&self) -> String {
        let mut text = String::new();
        for (tech, questions) in self {
            if !text.is_empty() {
                text.push('\n');
            }
            text.push_str(tech);
            text.push('\n');
            for (i, question) in questions.iter().enumerate() {
                let _ = writeln!(text, "  {}. {question}", i + 1);
            }
        }
        text.trim_end().to_string()
    }
}

impl TextView for CandidateProfile {
    fn to_text(&self) -> String {
        let years = self.years.to_string();
        [
            ("Name", self.name.as_str()),
            ("Email", self.email.as_str()),
            ("Phone", self.phone.as_str()),
            ("Years", years.as_str()),
            ("Desired", self.desired.as_str()),
            ("Location", self.location.as_str()),
            ("Tech stack", self.techstack.as_str()),
        ]
        .iter()
        .map(|(label, value)| format!("{label:<11}{value}"))
        .collect::<Vec<_>>()
        .join("\n")
    }
}

impl TextView for SubmissionRecord {
    fn to_text(&self) -> String {
        format!(
            "Submitted  {}\n{}\n\n{}",
            timestamp(self.ts),
            self.candidate.to_text(),
            self.questions.to_text()
        )
    }
}

impl TextView for serde_json::Value {
    fn to_text(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| self.to_string())
    }
}

/// A generated key.
#[derive(Debug, Serialize)]
pub struct KeyView {
    pub key: String,
}

impl TextView for KeyView {
    fn to_text(&self) -> String {
        self.key.clone()
    }
}

/// Where a submission was written and whether it can be read back.
#[derive(Debug, Serialize)]
pub struct SavedView {
    pub path: String,
    pub ts: DateTime<Utc>,
    pub recoverable: bool,
}

impl TextView for SavedView {
    fn to_text(&self) -> String {
        let mut text = format!("Submission saved to {}", self.path);
        if !self.recoverable {
            text.push_str(
                "\nwarning: no ENCRYPTION_KEY configured; this file was sealed with a one-off key and cannot be decrypted",
            );
        }
        text
    }
}

fn timestamp(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Secs, true)
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    use super::*;

    fn questions() -> QuestionSet {
        let mut set = QuestionSet::new();
        set.insert("Rust".into(), vec!["What is a borrow?".into(), "What is Pin?".into()]);
        set.insert("Go".into(), vec!["What is a goroutine?".into()]);
        set
    }

    #[test]
    fn questions_render_numbered_per_technology() {
        assert_eq!(
            questions().to_text(),
            "Rust\n  1. What is a borrow?\n  2. What is Pin?\n\nGo\n  1. What is a goroutine?"
        );
    }

    #[test]
    fn json_and_raw_keep_technology_order() {
        let raw = render(&questions(), OutputFormat::Raw).unwrap();
        assert!(raw.find("Rust").unwrap() < raw.find("Go").unwrap());
        assert!(!raw.contains('\n'));

        let pretty = render(&questions(), OutputFormat::Json).unwrap();
        assert!(pretty.contains('\n'));
    }

    #[test]
    fn record_text_leads_with_timestamp() {
        let record = SubmissionRecord::new(
            CandidateProfile {
                name: "Ada".into(),
                years: 3,
                ..Default::default()
            },
            questions(),
            Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
        );
        let text = record.to_text();
        assert!(text.starts_with("Submitted  2024-05-01T12:00:00Z\n"));
        assert!(text.contains("Name       Ada"));
        assert!(text.contains("Years      3"));
        assert!(text.ends_with("  1. What is a goroutine?"));
    }

    #[test]
    fn unrecoverable_save_warns() {
        let view = SavedView {
            path: "submissions/submission_20240501T120000.enc".into(),
            ts: Utc::now(),
            recoverable: false,
        };
        assert!(view.to_text().contains("cannot be decrypted"));

        let view = SavedView {
            recoverable: true,
            ..view
        };
        assert_eq!(
            view.to_text(),
            "Submission saved to submissions/submission_20240501T120000.enc"
        );
    }
}
