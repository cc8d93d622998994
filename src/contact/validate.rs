use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use super::ContactSubmission;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern should compile")
});

/// The form fields that must be present before a submission is accepted.
///
/// Ordered by position in the form so the first failure maps to the first
/// input the user should be sent back to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    ProjectType,
    Subject,
    Message,
}

impl Field {
    pub fn all() -> Vec<Field> {
        vec![
            Field::Name,
            Field::Email,
            Field::ProjectType,
            Field::Subject,
            Field::Message,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::ProjectType => "Project Type",
            Field::Subject => "Subject",
            Field::Message => "Project Details",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{} is required", .0.label())]
    MissingRequiredField(Field),
    #[error("Please enter a valid email address")]
    InvalidEmailFormat,
}

impl ValidationError {
    /// The input the UI should focus so the user can correct the rejection.
    pub fn field(&self) -> Field {
        match self {
            ValidationError::MissingRequiredField(field) => *field,
            ValidationError::InvalidEmailFormat => Field::Email,
        }
    }
}

/// Checks required-field presence and email syntax.
///
/// Pure and synchronous; calling it repeatedly on the same submission always
/// returns the same result.
pub fn validate(submission: &ContactSubmission) -> Result<(), ValidationError> {
    if submission.name.trim().is_empty() {
        return Err(ValidationError::MissingRequiredField(Field::Name));
    }
    if submission.email.trim().is_empty() {
        return Err(ValidationError::MissingRequiredField(Field::Email));
    }
    if submission.project_type.is_none() {
        return Err(ValidationError::MissingRequiredField(Field::ProjectType));
    }
    if submission.subject.trim().is_empty() {
        return Err(ValidationError::MissingRequiredField(Field::Subject));
    }
    if submission.message.trim().is_empty() {
        return Err(ValidationError::MissingRequiredField(Field::Message));
    }
    if !EMAIL_RE.is_match(&submission.email) {
        return Err(ValidationError::InvalidEmailFormat);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::ProjectType;

    fn minimal_valid() -> ContactSubmission {
        ContactSubmission {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            subject: "Hello".to_string(),
            message: "Hi there".to_string(),
            project_type: Some(ProjectType::Consultation),
            ..Default::default()
        }
    }

    #[test]
    fn test_minimal_valid_submission_passes() {
        assert_eq!(validate(&minimal_valid()), Ok(()));
    }

    #[test]
    fn test_each_required_field_is_enforced() {
        let mut missing_name = minimal_valid();
        missing_name.name = "   ".to_string();
        assert_eq!(
            validate(&missing_name),
            Err(ValidationError::MissingRequiredField(Field::Name))
        );

        let mut missing_email = minimal_valid();
        missing_email.email = String::new();
        assert_eq!(
            validate(&missing_email),
            Err(ValidationError::MissingRequiredField(Field::Email))
        );

        let mut missing_type = minimal_valid();
        missing_type.project_type = None;
        assert_eq!(
            validate(&missing_type),
            Err(ValidationError::MissingRequiredField(Field::ProjectType))
        );

        let mut missing_subject = minimal_valid();
        missing_subject.subject = String::new();
        assert_eq!(
            validate(&missing_subject),
            Err(ValidationError::MissingRequiredField(Field::Subject))
        );

        let mut missing_message = minimal_valid();
        missing_message.message = "\n\t".to_string();
        assert_eq!(
            validate(&missing_message),
            Err(ValidationError::MissingRequiredField(Field::Message))
        );
    }

    #[test]
    fn test_optional_fields_may_be_empty() {
        let submission = minimal_valid();
        assert!(submission.company.is_empty());
        assert!(submission.budget.is_none());
        assert!(submission.timeline.is_none());
        assert_eq!(validate(&submission), Ok(()));
    }

    #[test]
    fn test_malformed_emails_are_rejected() {
        for bad in [
            "not-an-email",
            "no-domain@",
            "@no-local.com",
            "missing.dot@domain",
            "spaces in@local.com",
            "jane@doma in.com",
        ] {
            let mut submission = minimal_valid();
            submission.email = bad.to_string();
            assert_eq!(
                validate(&submission),
                Err(ValidationError::InvalidEmailFormat),
                "expected {bad:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_validate_is_idempotent() {
        let submission = minimal_valid();
        let first = validate(&submission);
        for _ in 0..3 {
            assert_eq!(validate(&submission), first);
        }
    }

    #[test]
    fn test_rejection_identifies_focus_target() {
        let mut submission = minimal_valid();
        submission.email = "not-an-email".to_string();
        let err = validate(&submission).expect_err("malformed email should be rejected");
        assert_eq!(err.field(), Field::Email);

        submission = minimal_valid();
        submission.project_type = None;
        let err = validate(&submission).expect_err("missing project type should be rejected");
        assert_eq!(err.field(), Field::ProjectType);
    }
}
