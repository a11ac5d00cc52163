use std::io::BufRead;
use std::path::Path;

use log::{debug, error, info};

use crate::classifier::extract_record;
use crate::email::{decode, MessageOutcome, ProcessingResult, RawMessage};
use crate::error::{ExtractError, MessageError};
use crate::mailbox::{MailboxReader, MboxEntry};
use crate::normalizer::{normalize, Deduplicator};
use crate::record::NormalizedRecord;

/// Single pass over an archive: decode, classify, normalize, dedupe
pub struct ExtractionPipeline {
    contact_form_subjects: Vec<String>,
    dedup: Deduplicator,
    records: Vec<NormalizedRecord>,
    outcomes: Vec<MessageOutcome>,
    result: ProcessingResult,
}

/// Everything a finished run produced
#[derive(Debug, Clone)]
pub struct Extraction {
    pub records: Vec<NormalizedRecord>,
    pub outcomes: Vec<MessageOutcome>,
    pub result: ProcessingResult,
}

impl ExtractionPipeline {
    pub fn new(contact_form_subjects: Vec<String>) -> Self {
        ExtractionPipeline {
            contact_form_subjects,
            dedup: Deduplicator::new(),
            records: Vec::new(),
            outcomes: Vec::new(),
            result: ProcessingResult::new(),
        }
    }

    pub fn process_message<M: RawMessage + ?Sized>(&mut self, message: &M) -> MessageOutcome {
        let decoded = decode(message);

        let outcome = match extract_record(&decoded, &self.contact_form_subjects) {
            Ok(extracted) => {
                let record = normalize(extracted);
                if self.dedup.admit(&record) {
                    debug!("Record added: {:?}", record);
                    self.records.push(record);
                    MessageOutcome::Added
                } else {
                    debug!("Duplicate record dropped: {:?}", record);
                    MessageOutcome::Duplicate
                }
            }
            Err(reason) => {
                info!("Skipping message: {}", reason);
                MessageOutcome::Skipped(reason)
            }
        };
        self.push_outcome(outcome)
    }

    /// Parses one mailbox entry then processes it
    pub fn process_entry(&mut self, entry: &MboxEntry) -> MessageOutcome {
        match entry.parse() {
            Ok(message) => self.process_message(&message),
            Err(err) => self.record_failure(err),
        }
    }

    pub fn record_failure(&mut self, err: MessageError) -> MessageOutcome {
        error!("Error processing message: {}", err);
        self.push_outcome(MessageOutcome::Failed(err))
    }

    fn push_outcome(&mut self, outcome: MessageOutcome) -> MessageOutcome {
        self.result.record(&outcome);
        self.outcomes.push(outcome.clone());
        outcome
    }

    pub fn run<I>(mut self, entries: I) -> Extraction
    where
        I: IntoIterator<Item = Result<MboxEntry, MessageError>>,
    {
        for entry in entries {
            match entry {
                Ok(entry) => {
                    self.process_entry(&entry);
                }
                Err(err) => {
                    self.record_failure(err);
                }
            }
        }
        self.finish()
    }

    pub fn finish(self) -> Extraction {
        info!(
            "Processing completed: {} messages read, {} records kept, {} duplicates, {} skipped, {} failed",
            self.result.messages_seen,
            self.result.records_added,
            self.result.duplicates,
            self.result.messages_skipped,
            self.result.messages_failed
        );
        Extraction {
            records: self.records,
            outcomes: self.outcomes,
            result: self.result,
        }
    }
}

/// Runs the pipeline over an mbox file
pub fn extract_from_mbox<P: AsRef<Path>>(
    path: P,
    contact_form_subjects: &[String],
) -> Result<Extraction, ExtractError> {
    let reader = MailboxReader::open(path)?;
    Ok(ExtractionPipeline::new(contact_form_subjects.to_vec()).run(reader))
}

/// Runs the pipeline over mbox content from any buffered reader
pub fn extract_from_reader<R: BufRead>(reader: R, contact_form_subjects: &[String]) -> Extraction {
    ExtractionPipeline::new(contact_form_subjects.to_vec()).run(MailboxReader::new(reader))
}
