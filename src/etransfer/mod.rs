/// Interac e-Transfer notification recognition
pub mod extractor;

pub use extractor::{extract_etransfer, ETransferCandidate};
