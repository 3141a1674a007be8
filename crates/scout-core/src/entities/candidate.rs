use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;
use crate::techstack::parse_techstack;

/// Profile captured from the intake form. Immutable once the session starts.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CandidateProfile {
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Years of professional experience.
    pub years: u32,
    /// Desired position(s), free text.
    pub desired: String,
    pub location: String,
    /// Comma or semicolon separated technologies.
    pub techstack: String,
}

impl CandidateProfile {
    /// Trim every free-text field.
    #[must_use]
    pub fn trimmed(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            years: self.years,
            desired: self.desired.trim().to_string(),
            location: self.location.trim().to_string(),
            techstack: self.techstack.trim().to_string(),
        }
    }

    /// Check the minimum a screening needs: name, email and a tech stack.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] naming the first missing field.
    pub fn validate(&self) -> Result<(), CoreError> {
        for (field, value) in [
            ("name", &self.name),
            ("email", &self.email),
            ("techstack", &self.techstack),
        ] {
            if value.trim().is_empty() {
                return Err(CoreError::Validation(format!("{field} is required")));
            }
        }
        if parse_techstack(&self.techstack).is_empty() {
            return Err(CoreError::Validation(
                "techstack must name at least one technology".into(),
            ));
        }
        Ok(())
    }

    /// Declared technologies, in the order the candidate listed them.
    #[must_use]
    pub fn technologies(&self) -> Vec<String> {
        parse_techstack(&self.techstack)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> CandidateProfile {
        CandidateProfile {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            techstack: "Rust; Go".into(),
            ..Default::default()
        }
    }

    #[test]
    fn valid_profile_passes() {
        assert!(profile().validate().is_ok());
    }

    #[test]
    fn missing_email_is_reported() {
        let candidate = CandidateProfile {
            email: "  ".into(),
            ..profile()
        };
        let err = candidate.validate().expect_err("should fail");
        assert_eq!(err.to_string(), "Validation error: email is required");
    }

    #[test]
    fn separator_only_stack_is_rejected() {
        let candidate = CandidateProfile {
            techstack: ",;".into(),
            ..profile()
        };
        assert!(candidate.validate().is_err());
    }

    #[test]
    fn trimmed_strips_whitespace() {
        let candidate = CandidateProfile {
            name: "  Ada Lovelace ".into(),
            location: "\tLondon\n".into(),
            ..profile()
        }
        .trimmed();
        assert_eq!(candidate.name, "Ada Lovelace");
        assert_eq!(candidate.location, "London");
    }

    #[test]
    fn technologies_come_from_stack() {
        assert_eq!(profile().technologies(), ["Rust", "Go"]);
    }
}
