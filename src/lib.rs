// Library exports for mbox-customers
// This allows the binary and the integration tests to use the modules

pub mod config;
pub mod error;
pub mod record;
pub mod email;
pub mod mailbox;
pub mod classifier;
pub mod normalizer;
pub mod pipeline;
pub mod csv_export;

// Interac e-Transfer notifications
pub mod etransfer;

// Website contact-form submissions
pub mod contact_form;

pub use pipeline::{extract_from_mbox, Extraction, ExtractionPipeline};
