use std::io::Write;
use std::path::{Path, PathBuf};

use csv::{QuoteStyle, Terminator, WriterBuilder};
use log::info;

use crate::error::ExtractError;
use crate::record::NormalizedRecord;

pub const CSV_HEADER: [&str; 4] = ["Date", "Customer Name", "Customer Email", "Amount Received"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    Written { path: PathBuf, rows: usize },
    NoData,
}

/// Writes the records as CSV; nothing is created when there is no record
pub fn write_records<P: AsRef<Path>>(
    path: P,
    records: &[NormalizedRecord],
) -> Result<ExportOutcome, ExtractError> {
    let path = path.as_ref();
    if records.is_empty() {
        return Ok(ExportOutcome::NoData);
    }

    let file = std::fs::File::create(path).map_err(|source| ExtractError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    write_to(file, records).map_err(|source| ExtractError::CsvWrite {
        path: path.to_path_buf(),
        source,
    })?;

    info!("{} row(s) written to {}", records.len(), path.display());
    Ok(ExportOutcome::Written {
        path: path.to_path_buf(),
        rows: records.len(),
    })
}

/// Header row then one row per record, CRLF terminated
pub fn write_to<W: Write>(writer: W, records: &[NormalizedRecord]) -> Result<(), csv::Error> {
    let mut csv_writer = WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::CRLF)
        .from_writer(writer);

    csv_writer.write_record(CSV_HEADER)?;
    for record in records {
        csv_writer.serialize(record.to_row())?;
    }
    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, email: &str, date: &str, amount: &str) -> NormalizedRecord {
        NormalizedRecord {
            customer_name: name.to_string(),
            customer_email: email.to_string(),
            date: date.to_string(),
            amount: amount.to_string(),
        }
    }

    #[test]
    fn test_header_and_column_order() {
        let mut out = Vec::new();
        write_to(&mut out, &[record("John Smith", "john@example.com", "05/03/2024", "123.45")]).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Date,Customer Name,Customer Email,Amount Received\r\n\
             05/03/2024,John Smith,john@example.com,123.45\r\n"
        );
    }

    #[test]
    fn test_fields_with_commas_are_quoted() {
        let mut out = Vec::new();
        write_to(&mut out, &[record("Doe, Jane", "Unknown Email", "Unknown Date", "0.00")]).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with("Unknown Date,\"Doe, Jane\",Unknown Email,0.00\r\n"));
    }

    #[test]
    fn test_no_records_creates_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");

        assert_eq!(write_records(&path, &[]).unwrap(), ExportOutcome::NoData);
        assert!(!path.exists());
    }
}
