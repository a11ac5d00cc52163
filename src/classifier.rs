use log::debug;

use crate::contact_form::{extract_contact_form, is_contact_form_subject, ContactFormCandidate};
use crate::email::DecodedMessage;
use crate::etransfer::{extract_etransfer, ETransferCandidate};
use crate::error::SkipReason;
use crate::record::{ExtractedRecord, ZERO_AMOUNT};

/// Message template recognized in a decoded message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Candidate {
    ETransfer(ETransferCandidate),
    ContactForm(ContactFormCandidate),
}

/// Tries the e-Transfer body first, then the contact-form subject; first match wins
pub fn classify<S: AsRef<str>>(decoded: &DecodedMessage, contact_form_subjects: &[S]) -> Option<Candidate> {
    if let Some(transfer) = extract_etransfer(&decoded.body) {
        return Some(Candidate::ETransfer(transfer));
    }
    if is_contact_form_subject(&decoded.subject, contact_form_subjects) {
        return Some(Candidate::ContactForm(extract_contact_form(&decoded.body)));
    }
    debug!("No template matched subject {:?}", decoded.subject);
    None
}

impl Candidate {
    /// e-Transfers take the customer email from Reply-To, contact forms from their Email field
    pub fn into_record(self, reply_to_address: &str) -> ExtractedRecord {
        match self {
            Candidate::ETransfer(transfer) => ExtractedRecord {
                customer_name: transfer.customer_name,
                customer_email: reply_to_address.to_string(),
                date: transfer.date,
                amount: transfer.amount,
            },
            Candidate::ContactForm(form) => ExtractedRecord {
                customer_name: form.first_name,
                customer_email: form.email,
                date: form.event_date,
                amount: ZERO_AMOUNT.to_string(),
            },
        }
    }
}

/// Classification of a decoded message into a record, or the reason it is skipped
pub fn extract_record<S: AsRef<str>>(
    decoded: &DecodedMessage,
    contact_form_subjects: &[S],
) -> Result<ExtractedRecord, SkipReason> {
    if decoded.subject.is_empty() {
        return Err(SkipReason::MissingSubject);
    }
    if decoded.body.is_empty() {
        return Err(SkipReason::EmptyBody);
    }
    classify(decoded, contact_form_subjects)
        .map(|candidate| candidate.into_record(&decoded.reply_to_address))
        .ok_or_else(|| SkipReason::UnmatchedTemplate(decoded.subject.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{UNKNOWN_DATE, UNKNOWN_NAME};

    const SUBJECTS: [&str; 1] = ["[Your Website] Contact Form Submission"];

    fn message(subject: &str, body: &str) -> DecodedMessage {
        DecodedMessage {
            subject: subject.to_string(),
            reply_to_address: "payer@example.com".to_string(),
            body: body.to_string(),
        }
    }

    #[test]
    fn test_etransfer_record_uses_reply_to() {
        let decoded = message(
            "Payment Notification",
            "$123.45 from John Smith and it has been automatically deposited.\nDeposited on March 5, 2024",
        );
        let record = extract_record(&decoded, &SUBJECTS).unwrap();

        assert_eq!(record.customer_name, "John Smith");
        assert_eq!(record.customer_email, "payer@example.com");
        assert_eq!(record.amount, "123.45");
        assert_eq!(record.date, "March 5, 2024");
    }

    #[test]
    fn test_contact_form_record_uses_email_field() {
        let decoded = message(
            "New: [Your Website] Contact Form Submission",
            "First Name: Jane\nEmail: jane@example.com\nEvent Date: April 1, 2024",
        );
        let record = extract_record(&decoded, &SUBJECTS).unwrap();

        assert_eq!(record.customer_name, "Jane");
        assert_eq!(record.customer_email, "jane@example.com");
        assert_eq!(record.date, "April 1, 2024");
        assert_eq!(record.amount, "0.00");
    }

    #[test]
    fn test_etransfer_wins_over_contact_form() {
        let decoded = message(
            "[Your Website] Contact Form Submission",
            "First Name: Jane\nJane sent you $20.00 and it has been automatically deposited",
        );

        match classify(&decoded, &SUBJECTS) {
            Some(Candidate::ETransfer(transfer)) => {
                assert_eq!(transfer.amount, "20.00");
                assert_eq!(transfer.customer_name, UNKNOWN_NAME);
                assert_eq!(transfer.date, UNKNOWN_DATE);
            }
            other => panic!("expected e-Transfer, got {:?}", other),
        }
    }

    #[test]
    fn test_skip_reasons() {
        assert_eq!(
            extract_record(&message("", "body"), &SUBJECTS),
            Err(SkipReason::MissingSubject)
        );
        assert_eq!(
            extract_record(&message("Hello", ""), &SUBJECTS),
            Err(SkipReason::EmptyBody)
        );
        assert_eq!(
            extract_record(&message("Weekly newsletter", "Nothing to see"), &SUBJECTS),
            Err(SkipReason::UnmatchedTemplate("Weekly newsletter".to_string()))
        );
    }
}
