use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use log::{debug, info};
use mail_parser::mailbox::mbox::MessageIterator;
use mail_parser::{Message, MessageParser};

use crate::error::{ExtractError, MessageError};

/// One message of an mbox archive, still in raw RFC 5322 form
#[derive(Debug, Clone)]
pub struct MboxEntry {
    pub index: usize,
    pub contents: Vec<u8>,
}

impl MboxEntry {
    pub fn parse(&self) -> Result<Message<'_>, MessageError> {
        MessageParser::default()
            .parse(&self.contents)
            .ok_or(MessageError::Unparseable(self.index))
    }
}

/// Messages of an mbox archive in file order
pub struct MailboxReader<R: BufRead> {
    messages: MessageIterator<R>,
    next_index: usize,
}

impl MailboxReader<BufReader<File>> {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, ExtractError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| ExtractError::MailboxOpen {
            path: PathBuf::from(path),
            source,
        })?;
        info!("Reading mailbox {}", path.display());
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> MailboxReader<R> {
    pub fn new(reader: R) -> Self {
        MailboxReader {
            messages: MessageIterator::new(reader),
            next_index: 0,
        }
    }
}

impl<R: BufRead> Iterator for MailboxReader<R> {
    type Item = Result<MboxEntry, MessageError>;

    fn next(&mut self) -> Option<Self::Item> {
        let raw = self.messages.next()?;
        let index = self.next_index;
        self.next_index += 1;

        Some(match raw {
            Ok(message) => {
                debug!("Mailbox entry #{}: {} bytes", index, message.contents().len());
                Ok(MboxEntry {
                    index,
                    contents: message.contents().to_vec(),
                })
            }
            Err(_) => Err(MessageError::MalformedEntry(index)),
        })
    }
}
