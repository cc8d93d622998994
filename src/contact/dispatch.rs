use chrono::{DateTime, Utc};

use super::{compose, validate, ContactSubmission, MailMessage, ValidationError};

pub const CONTACT_EMAIL: &str = "apdontmailme@gmail.com";
pub const CONTACT_PHONE: &str = "+91 8356933902";

/// Boundary to the host environment's mail handler.
///
/// Opening the composed URI is fire-and-forget: there is no callback telling
/// us whether a mail client exists, opened, or sent anything. The dispatcher
/// treats an issued handoff as success. Tests inject a recording fake.
pub trait MailHandoff {
    fn open(&self, uri: &str);
}

/// Builds the `mailto:` URI the handoff collaborator navigates to.
pub fn mailto_uri(recipient: &str, message: &MailMessage) -> String {
    format!(
        "mailto:{recipient}?subject={}&body={}",
        urlencoding::encode(&message.subject),
        urlencoding::encode(&message.body)
    )
}

/// Orchestrates a submit attempt: validate, compose, hand off, reset.
///
/// All transitions are synchronous within the submit event. A rejection is
/// terminal for the attempt (the user corrects and resubmits); there is no
/// retry logic because local validation is the only observable failure mode.
pub struct Dispatcher<H> {
    handoff: H,
    submissions: u32,
}

impl<H: MailHandoff> Dispatcher<H> {
    pub fn new(handoff: H) -> Self {
        Self {
            handoff,
            submissions: 0,
        }
    }

    /// Count of accepted submissions since the dispatcher was created.
    pub fn submissions(&self) -> u32 {
        self.submissions
    }

    /// Runs one submit attempt against the current form state.
    ///
    /// On rejection the form is left untouched so the user can correct it.
    /// On acceptance the mail handoff is issued, the counter is incremented
    /// by exactly one, and the form is cleared back to empty. The composed
    /// message is returned for the success notification.
    pub fn submit(
        &mut self,
        form: &mut ContactSubmission,
        now: DateTime<Utc>,
    ) -> Result<MailMessage, ValidationError> {
        validate(form)?;
        let message = compose(form, now);
        self.handoff.open(&mailto_uri(CONTACT_EMAIL, &message));
        self.submissions += 1;
        form.reset();
        Ok(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::{Field, ProjectType};
    use chrono::TimeZone;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct RecordingHandoff {
        opened: Rc<RefCell<Vec<String>>>,
    }

    impl MailHandoff for RecordingHandoff {
        fn open(&self, uri: &str) {
            self.opened.borrow_mut().push(uri.to_string());
        }
    }

    fn dispatcher_with_log() -> (Dispatcher<RecordingHandoff>, Rc<RefCell<Vec<String>>>) {
        let opened = Rc::new(RefCell::new(Vec::new()));
        let dispatcher = Dispatcher::new(RecordingHandoff {
            opened: opened.clone(),
        });
        (dispatcher, opened)
    }

    fn valid_form() -> ContactSubmission {
        ContactSubmission {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            subject: "Hello".to_string(),
            message: "Hi there".to_string(),
            project_type: Some(ProjectType::Consultation),
            ..Default::default()
        }
    }

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 14, 9, 0, 0)
            .single()
            .expect("timestamp should be unambiguous")
    }

    #[test]
    fn test_successful_dispatch_clears_form_and_counts_once() {
        let (mut dispatcher, opened) = dispatcher_with_log();
        let mut form = valid_form();

        let message = dispatcher
            .submit(&mut form, fixed_now())
            .expect("valid form should dispatch");

        assert!(form.is_empty());
        assert_eq!(dispatcher.submissions(), 1);
        assert_eq!(opened.borrow().len(), 1);
        assert!(message.body.contains("Jane Doe"));
    }

    #[test]
    fn test_rejected_dispatch_leaves_form_and_counter_alone() {
        let (mut dispatcher, opened) = dispatcher_with_log();
        let mut form = valid_form();
        form.email = "not-an-email".to_string();
        let before = form.clone();

        let err = dispatcher
            .submit(&mut form, fixed_now())
            .expect_err("malformed email should be rejected");

        assert_eq!(err, ValidationError::InvalidEmailFormat);
        assert_eq!(form, before);
        assert_eq!(dispatcher.submissions(), 0);
        assert!(opened.borrow().is_empty());
    }

    #[test]
    fn test_missing_field_reports_focus_target() {
        let (mut dispatcher, _) = dispatcher_with_log();
        let mut form = valid_form();
        form.subject = String::new();

        let err = dispatcher
            .submit(&mut form, fixed_now())
            .expect_err("missing subject should be rejected");
        assert_eq!(err, ValidationError::MissingRequiredField(Field::Subject));
    }

    #[test]
    fn test_mailto_uri_targets_fixed_recipient_and_encodes() {
        let (mut dispatcher, opened) = dispatcher_with_log();
        let mut form = valid_form();

        dispatcher
            .submit(&mut form, fixed_now())
            .expect("valid form should dispatch");

        let opened = opened.borrow();
        let uri = opened.first().expect("one handoff should be issued");
        assert!(uri.starts_with("mailto:apdontmailme@gmail.com?subject="));
        assert!(uri.contains("&body="));
        // Spaces and newlines never survive unescaped in the URI.
        assert!(!uri.contains(' '));
        assert!(!uri.contains('\n'));
        assert!(uri.contains("%20"));
    }

    #[test]
    fn test_each_accepted_submission_counts_exactly_once() {
        let (mut dispatcher, opened) = dispatcher_with_log();
        for n in 1..=3 {
            let mut form = valid_form();
            dispatcher
                .submit(&mut form, fixed_now())
                .expect("valid form should dispatch");
            assert_eq!(dispatcher.submissions(), n);
        }
        assert_eq!(opened.borrow().len(), 3);
    }
}
