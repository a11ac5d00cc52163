use std::path::PathBuf;

/// Errors that abort a whole extraction run
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("Unable to open mailbox {path}: {source}")]
    MailboxOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unable to write CSV file {path}: {source}")]
    CsvWrite {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Why a message produced no record
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SkipReason {
    #[error("Missing subject")]
    MissingSubject,

    #[error("Empty email body")]
    EmptyBody,

    #[error("Subject does not match pattern - {0}")]
    UnmatchedTemplate(String),
}

/// Failure confined to a single message of the archive
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MessageError {
    #[error("malformed mailbox entry #{0}")]
    MalformedEntry(usize),

    #[error("unable to parse MIME structure of message #{0}")]
    Unparseable(usize),
}
