/// Website contact-form submission recognition
pub mod extractor;

pub use extractor::{extract_contact_form, is_contact_form_subject, ContactFormCandidate};
