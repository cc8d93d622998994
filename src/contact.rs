mod clipboard;
mod compose;
mod dispatch;
mod validate;

pub use clipboard::{copy_to_clipboard, ClipboardWriter};
pub use compose::{compose, MailMessage};
pub use dispatch::{mailto_uri, Dispatcher, MailHandoff, CONTACT_EMAIL, CONTACT_PHONE};
pub use validate::{validate, Field, ValidationError};

use serde::{Deserialize, Serialize};

/// Live, mutable record of the contact form's current input values.
///
/// Created empty when the contact section mounts, mutated field-by-field on
/// user input, read once at submit time, and reset to empty after a
/// successful handoff to the visitor's mail client.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub company: String,
    pub subject: String,
    pub message: String,
    pub project_type: Option<ProjectType>,
    pub budget: Option<BudgetRange>,
    pub timeline: Option<Timeline>,
}

impl ContactSubmission {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectType {
    #[serde(rename = "AI & Technology Solutions")]
    AiTechnology,
    #[serde(rename = "Digital Marketing Strategy")]
    DigitalMarketing,
    #[serde(rename = "Brand Development")]
    BrandDevelopment,
    #[serde(rename = "Product Marketing")]
    ProductMarketing,
    #[serde(rename = "Healthcare Marketing")]
    HealthcareMarketing,
    #[serde(rename = "UI/UX Design")]
    UiUxDesign,
    #[serde(rename = "Growth Hacking")]
    GrowthHacking,
    #[serde(rename = "Consultation")]
    Consultation,
    #[serde(rename = "Other")]
    Other,
}

impl ProjectType {
    pub fn all() -> Vec<ProjectType> {
        vec![
            ProjectType::AiTechnology,
            ProjectType::DigitalMarketing,
            ProjectType::BrandDevelopment,
            ProjectType::ProductMarketing,
            ProjectType::HealthcareMarketing,
            ProjectType::UiUxDesign,
            ProjectType::GrowthHacking,
            ProjectType::Consultation,
            ProjectType::Other,
        ]
    }

    /// Wire value, as it appears in the composed mail body.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectType::AiTechnology => "AI & Technology Solutions",
            ProjectType::DigitalMarketing => "Digital Marketing Strategy",
            ProjectType::BrandDevelopment => "Brand Development",
            ProjectType::ProductMarketing => "Product Marketing",
            ProjectType::HealthcareMarketing => "Healthcare Marketing",
            ProjectType::UiUxDesign => "UI/UX Design",
            ProjectType::GrowthHacking => "Growth Hacking",
            ProjectType::Consultation => "Consultation",
            ProjectType::Other => "Other",
        }
    }

    /// Display label for the select dropdown.
    pub fn label(&self) -> &'static str {
        match self {
            ProjectType::AiTechnology => "🤖 AI & Technology Solutions",
            ProjectType::DigitalMarketing => "📈 Digital Marketing Strategy",
            ProjectType::BrandDevelopment => "🎨 Brand Development & Creative",
            ProjectType::ProductMarketing => "🚀 Product Marketing & Launch",
            ProjectType::HealthcareMarketing => "🏥 Healthcare Marketing",
            ProjectType::UiUxDesign => "✨ UI/UX Design & Experience",
            ProjectType::GrowthHacking => "📊 Growth Hacking & Analytics",
            ProjectType::Consultation => "💬 Strategic Consultation",
            ProjectType::Other => "🔧 Custom Solution",
        }
    }

    pub fn from_str(s: &str) -> Option<ProjectType> {
        Self::all().into_iter().find(|p| p.as_str() == s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BudgetRange {
    #[serde(rename = "Under $5,000")]
    Under5k,
    #[serde(rename = "$5,000 - $15,000")]
    From5kTo15k,
    #[serde(rename = "$15,000 - $50,000")]
    From15kTo50k,
    #[serde(rename = "$50,000+")]
    Above50k,
    #[serde(rename = "Let's Discuss")]
    LetsDiscuss,
}

impl BudgetRange {
    pub fn all() -> Vec<BudgetRange> {
        vec![
            BudgetRange::Under5k,
            BudgetRange::From5kTo15k,
            BudgetRange::From15kTo50k,
            BudgetRange::Above50k,
            BudgetRange::LetsDiscuss,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetRange::Under5k => "Under $5,000",
            BudgetRange::From5kTo15k => "$5,000 - $15,000",
            BudgetRange::From15kTo50k => "$15,000 - $50,000",
            BudgetRange::Above50k => "$50,000+",
            BudgetRange::LetsDiscuss => "Let's Discuss",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BudgetRange::Under5k => "💰 Under $5,000",
            BudgetRange::From5kTo15k => "💳 $5,000 - $15,000",
            BudgetRange::From15kTo50k => "💎 $15,000 - $50,000",
            BudgetRange::Above50k => "🏆 $50,000+",
            BudgetRange::LetsDiscuss => "🤝 Let's Discuss",
        }
    }

    pub fn from_str(s: &str) -> Option<BudgetRange> {
        Self::all().into_iter().find(|b| b.as_str() == s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Timeline {
    #[serde(rename = "ASAP")]
    Asap,
    #[serde(rename = "1-2 weeks")]
    OneToTwoWeeks,
    #[serde(rename = "1 month")]
    OneMonth,
    #[serde(rename = "2-3 months")]
    TwoToThreeMonths,
    #[serde(rename = "3+ months")]
    ThreePlusMonths,
    #[serde(rename = "Flexible")]
    Flexible,
}

impl Timeline {
    pub fn all() -> Vec<Timeline> {
        vec![
            Timeline::Asap,
            Timeline::OneToTwoWeeks,
            Timeline::OneMonth,
            Timeline::TwoToThreeMonths,
            Timeline::ThreePlusMonths,
            Timeline::Flexible,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Timeline::Asap => "ASAP",
            Timeline::OneToTwoWeeks => "1-2 weeks",
            Timeline::OneMonth => "1 month",
            Timeline::TwoToThreeMonths => "2-3 months",
            Timeline::ThreePlusMonths => "3+ months",
            Timeline::Flexible => "Flexible",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Timeline::Asap => "⚡ ASAP (Rush Project)",
            Timeline::OneToTwoWeeks => "🏃 1-2 weeks",
            Timeline::OneMonth => "📅 1 month",
            Timeline::TwoToThreeMonths => "🗓️ 2-3 months",
            Timeline::ThreePlusMonths => "📈 3+ months",
            Timeline::Flexible => "🤷 Flexible",
        }
    }

    pub fn from_str(s: &str) -> Option<Timeline> {
        Self::all().into_iter().find(|t| t.as_str() == s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_enums_round_trip_wire_values() {
        for p in ProjectType::all() {
            assert_eq!(ProjectType::from_str(p.as_str()), Some(p));
        }
        for b in BudgetRange::all() {
            assert_eq!(BudgetRange::from_str(b.as_str()), Some(b));
        }
        for t in Timeline::all() {
            assert_eq!(Timeline::from_str(t.as_str()), Some(t));
        }
    }

    #[test]
    fn test_unknown_selection_is_rejected() {
        assert_eq!(ProjectType::from_str("Skywriting"), None);
        assert_eq!(BudgetRange::from_str(""), None);
        assert_eq!(Timeline::from_str("eventually"), None);
    }

    #[test]
    fn test_submission_serde_uses_wire_values() {
        let submission = ContactSubmission {
            name: "Jane Doe".to_string(),
            project_type: Some(ProjectType::Consultation),
            budget: Some(BudgetRange::LetsDiscuss),
            ..Default::default()
        };
        let json = serde_json::to_string(&submission).expect("submission should serialize");
        assert!(json.contains("\"Consultation\""));
        assert!(json.contains("Let's Discuss"));
        let back: ContactSubmission =
            serde_json::from_str(&json).expect("submission should deserialize");
        assert_eq!(back, submission);
    }

    #[test]
    fn test_reset_returns_to_empty() {
        let mut submission = ContactSubmission {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            timeline: Some(Timeline::Flexible),
            ..Default::default()
        };
        assert!(!submission.is_empty());
        submission.reset();
        assert!(submission.is_empty());
    }
}
