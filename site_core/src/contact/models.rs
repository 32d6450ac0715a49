//! Contact form payloads and submission status

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Wire keys expected by the destination spreadsheet, in column order.
pub const PAYLOAD_KEYS: [&str; 5] = ["Name", "Email", "Service", "Message", "Date"];

const DATE_FORMAT: &str = "%m/%d/%Y, %I:%M:%S %p";

/// One user interaction with the contact form. Created on submit, sent
/// once, discarded after the request settles.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ContactForm {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[validate(email(message = "Email must be a valid address"))]
    pub email: String,

    #[serde(default)]
    pub service: String,

    #[validate(length(min = 1, message = "Message is required"))]
    pub message: String,
}

impl ContactForm {
    /// The form-encoded payload, with the submission timestamp appended
    /// under the fixed `Date` key.
    pub fn into_payload(self, stamped_at: DateTime<Local>) -> Vec<(&'static str, String)> {
        vec![
            ("Name", self.name),
            ("Email", self.email),
            ("Service", self.service),
            ("Message", self.message),
            ("Date", stamped_at.format(DATE_FORMAT).to_string()),
        ]
    }
}

/// Per-form submission status. No error state exists: delivery outcome is
/// unobservable, so failures collapse into `Success`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    Idle,
    Submitting,
    Success,
}

impl SubmissionStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            SubmissionStatus::Idle => "idle",
            SubmissionStatus::Submitting => "submitting",
            SubmissionStatus::Success => "success",
        }
    }
}
