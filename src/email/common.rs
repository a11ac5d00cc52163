/// Common structures for per-message bookkeeping
use crate::error::{MessageError, SkipReason};

/// What happened to one message of the archive
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageOutcome {
    Added,
    Duplicate,
    Skipped(SkipReason),
    Failed(MessageError),
}

/// Counters for a whole run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessingResult {
    pub messages_seen: usize,
    pub records_added: usize,
    pub duplicates: usize,
    pub messages_skipped: usize,
    pub messages_failed: usize,
}

impl ProcessingResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, outcome: &MessageOutcome) {
        self.messages_seen += 1;
        match outcome {
            MessageOutcome::Added => self.records_added += 1,
            MessageOutcome::Duplicate => self.duplicates += 1,
            MessageOutcome::Skipped(_) => self.messages_skipped += 1,
            MessageOutcome::Failed(_) => self.messages_failed += 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_counts_each_outcome() {
        let mut result = ProcessingResult::new();
        result.record(&MessageOutcome::Added);
        result.record(&MessageOutcome::Duplicate);
        result.record(&MessageOutcome::Skipped(SkipReason::EmptyBody));
        result.record(&MessageOutcome::Failed(MessageError::Unparseable(3)));
        result.record(&MessageOutcome::Added);

        assert_eq!(result.messages_seen, 5);
        assert_eq!(result.records_added, 2);
        assert_eq!(result.duplicates, 1);
        assert_eq!(result.messages_skipped, 1);
        assert_eq!(result.messages_failed, 1);
    }
}
