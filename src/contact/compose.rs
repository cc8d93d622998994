use std::sync::LazyLock;

use chrono::{DateTime, FixedOffset, Utc};

use super::ContactSubmission;

/// Fixed display zone for the submission timestamp (IST, UTC+05:30).
static IST: LazyLock<FixedOffset> =
    LazyLock::new(|| FixedOffset::east_opt(5 * 3600 + 30 * 60).expect("IST offset is in range"));

const NOT_SPECIFIED: &str = "Not specified";
const HEAVY_RULE: &str =
    "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";
const THIN_RULE: &str =
    "─────────────────────────────────────────────────────────────────────────────";

/// The composed mail payload handed to the visitor's email client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailMessage {
    pub subject: String,
    pub body: String,
}

/// Renders the professional email template from a submission and a timestamp.
///
/// Pure function of its inputs: the same submission and the same timestamp
/// produce byte-identical output. Optional fields render as a literal
/// placeholder so the recipient can tell "left blank" from "lost in transit".
pub fn compose(submission: &ContactSubmission, now: DateTime<Utc>) -> MailMessage {
    let project_type = submission
        .project_type
        .map(|p| p.as_str())
        .unwrap_or(NOT_SPECIFIED);
    let company = or_placeholder(&submission.company, NOT_SPECIFIED);
    let budget = submission
        .budget
        .map(|b| b.as_str())
        .unwrap_or(NOT_SPECIFIED);
    let timeline = submission
        .timeline
        .map(|t| t.as_str())
        .unwrap_or(NOT_SPECIFIED);
    let timeline_expectation = submission
        .timeline
        .map(|t| t.as_str())
        .unwrap_or("Flexible");
    let budget_expectation = submission
        .budget
        .map(|b| b.as_str())
        .unwrap_or("To be discussed");
    let submitted = now.with_timezone(&*IST).format("%B %-d, %Y at %I:%M %p");

    let subject = format!(
        "🚀 Portfolio Inquiry: {} | {}",
        submission.subject, project_type
    );

    let body = format!(
        "Hello Aayush,

You have received a new inquiry through your Raleskip portfolio website.

CONTACT DETAILS:
{HEAVY_RULE}
👤 Name: {name}
📧 Email: {email}
🏢 Company: {company}
🎯 Project Type: {project_type}

PROJECT DETAILS:
{HEAVY_RULE}
📝 Subject: {subject_line}
💰 Budget Range: {budget}
⏰ Timeline: {timeline}

MESSAGE:
{HEAVY_RULE}
{message}

SUBMISSION INFO:
{HEAVY_RULE}
📅 Submitted: {submitted} IST
🌐 Source: Raleskip Portfolio Website
🔗 Referrer: Portfolio Contact Form

{THIN_RULE}
💡 QUICK ACTIONS:
• Reply directly to {email}
• Review project type: {project_type}
• Expected timeline: {timeline_expectation}
• Budget expectation: {budget_expectation}

Best regards,
Raleskip Portfolio System ✨",
        name = submission.name,
        email = submission.email,
        subject_line = submission.subject,
        message = submission.message,
    );

    MailMessage { subject, body }
}

fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.trim().is_empty() {
        placeholder
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::{BudgetRange, ProjectType, Timeline};
    use chrono::TimeZone;

    fn minimal_submission() -> ContactSubmission {
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
    fn test_compose_is_deterministic() {
        let submission = minimal_submission();
        let now = fixed_now();
        let first = compose(&submission, now);
        let second = compose(&submission, now);
        assert_eq!(first, second);
    }

    #[test]
    fn test_subject_embeds_subject_and_project_type() {
        let msg = compose(&minimal_submission(), fixed_now());
        assert_eq!(msg.subject, "🚀 Portfolio Inquiry: Hello | Consultation");
    }

    #[test]
    fn test_body_round_trips_every_field() {
        let submission = ContactSubmission {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            company: "Acme Corp".to_string(),
            subject: "Launch plan".to_string(),
            message: "We need a product launch strategy.".to_string(),
            project_type: Some(ProjectType::ProductMarketing),
            budget: Some(BudgetRange::From15kTo50k),
            timeline: Some(Timeline::TwoToThreeMonths),
        };
        let msg = compose(&submission, fixed_now());
        assert!(msg.body.contains("Jane Doe"));
        assert!(msg.body.contains("jane@example.com"));
        assert!(msg.body.contains("Acme Corp"));
        assert!(msg.body.contains("Launch plan"));
        assert!(msg.body.contains("We need a product launch strategy."));
        assert!(msg.body.contains("Product Marketing"));
        assert!(msg.body.contains("$15,000 - $50,000"));
        assert!(msg.body.contains("2-3 months"));
    }

    #[test]
    fn test_optional_fields_render_placeholder() {
        let msg = compose(&minimal_submission(), fixed_now());
        assert!(msg.body.contains("🏢 Company: Not specified"));
        assert!(msg.body.contains("💰 Budget Range: Not specified"));
        assert!(msg.body.contains("⏰ Timeline: Not specified"));
        // The quick-action hints fall back to softer wording instead.
        assert!(msg.body.contains("• Expected timeline: Flexible"));
        assert!(msg.body.contains("• Budget expectation: To be discussed"));
    }

    #[test]
    fn test_timestamp_is_rendered_in_ist() {
        // 09:00 UTC is 14:30 IST.
        let msg = compose(&minimal_submission(), fixed_now());
        assert!(msg.body.contains("📅 Submitted: June 14, 2025 at 02:30 PM IST"));
    }

    #[test]
    fn test_body_boilerplate_sections_present() {
        let msg = compose(&minimal_submission(), fixed_now());
        assert!(msg.body.starts_with("Hello Aayush,"));
        assert!(msg.body.contains("CONTACT DETAILS:"));
        assert!(msg.body.contains("PROJECT DETAILS:"));
        assert!(msg.body.contains("MESSAGE:"));
        assert!(msg.body.contains("SUBMISSION INFO:"));
        assert!(msg.body.contains("💡 QUICK ACTIONS:"));
        assert!(msg.body.ends_with("Raleskip Portfolio System ✨"));
    }
}
