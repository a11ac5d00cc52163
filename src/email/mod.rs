pub mod common;
pub mod decoder;

// Re-export commonly used items
pub use common::{MessageOutcome, ProcessingResult};
pub use decoder::{decode, DecodedMessage, PartBody, RawMessage, RawPart};
