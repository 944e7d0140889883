// Contact Form
// Accepts any input and always acknowledges it; nothing is sent or stored

use serde::{Deserialize, Serialize};
use tracing::info;

/// Field names in display order.
pub const FIELDS: [(&str, &str, bool); 3] = [
    ("name", "Name", false),
    ("email", "Email", false),
    ("message", "Message", true),
];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactSubmission {
    pub fn field(&self, index: usize) -> &str {
        match index {
            0 => &self.name,
            1 => &self.email,
            _ => &self.message,
        }
    }

    pub fn field_mut(&mut self, index: usize) -> &mut String {
        match index {
            0 => &mut self.name,
            1 => &mut self.email,
            _ => &mut self.message,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactFormState {
    #[default]
    Idle,
    Submitted,
}

/// Accept a submission. There is no validation and no failure path.
pub fn submit(submission: &ContactSubmission) -> ContactFormState {
    info!(
        name_len = submission.name.len(),
        email_len = submission.email.len(),
        message_len = submission.message.len(),
        "contact form submitted"
    );
    ContactFormState::Submitted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_submission_is_acknowledged() {
        assert_eq!(
            submit(&ContactSubmission::default()),
            ContactFormState::Submitted
        );
    }

    #[test]
    fn test_any_submission_is_acknowledged() {
        let submission = ContactSubmission {
            name: "Ada".to_string(),
            email: "not-an-email".to_string(),
            message: "x".repeat(10_000),
        };
        assert_eq!(submit(&submission), ContactFormState::Submitted);
    }

    #[test]
    fn test_field_accessors_follow_display_order() {
        let mut submission = ContactSubmission::default();
        submission.field_mut(0).push_str("Ada");
        submission.field_mut(1).push_str("ada@example.org");
        submission.field_mut(2).push_str("Hello");

        for (i, (name, _, _)) in FIELDS.iter().enumerate() {
            let expected = match *name {
                "name" => "Ada",
                "email" => "ada@example.org",
                _ => "Hello",
            };
            assert_eq!(submission.field(i), expected);
        }
    }

    #[test]
    fn test_missing_form_fields_default_to_empty() {
        let submission: ContactSubmission = serde_json::from_str(r#"{"name": "Ada"}"#).unwrap();
        assert_eq!(submission.email, "");
        assert_eq!(submission.message, "");
    }
}
