use std::sync::LazyLock;

use log::debug;
use regex::Regex;

use crate::record::{UNKNOWN_DATE, UNKNOWN_EMAIL, UNKNOWN_NAME, UNKNOWN_PHONE};

static FIRST_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"First Name: (.+)").expect("valid first name pattern"));
static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Email: (.+)").expect("valid email pattern"));
static PHONE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Phone: (.+)").expect("valid phone pattern"));
static EVENT_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Event Date: (.+)").expect("valid event date pattern"));

/// Labeled fields of a website contact-form submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactFormCandidate {
    pub first_name: String,
    pub email: String,
    pub phone: String,
    pub event_date: String,
}

/// True when the subject contains one of the configured subject substrings
pub fn is_contact_form_subject<S: AsRef<str>>(subject: &str, contact_form_subjects: &[S]) -> bool {
    contact_form_subjects
        .iter()
        .any(|form_subject| subject.contains(form_subject.as_ref()))
}

/// Reads the labeled fields; each one is optional and falls back to its sentinel
pub fn extract_contact_form(body: &str) -> ContactFormCandidate {
    let candidate = ContactFormCandidate {
        first_name: capture_field(&FIRST_NAME, body).unwrap_or_else(|| UNKNOWN_NAME.to_string()),
        email: capture_field(&EMAIL, body).unwrap_or_else(|| UNKNOWN_EMAIL.to_string()),
        phone: capture_field(&PHONE, body).unwrap_or_else(|| UNKNOWN_PHONE.to_string()),
        event_date: capture_field(&EVENT_DATE, body).unwrap_or_else(|| UNKNOWN_DATE.to_string()),
    };
    debug!(
        "Contact form found: name={}, email={}, phone={}, event date={}",
        candidate.first_name, candidate.email, candidate.phone, candidate.event_date
    );
    candidate
}

/// Value after the label, up to the end of its line
fn capture_field(pattern: &Regex, body: &str) -> Option<String> {
    pattern
        .captures(body)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
}
