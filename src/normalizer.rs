use std::collections::HashSet;
use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::record::{DedupKey, ExtractedRecord, NormalizedRecord};

static LONG_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z]+)\s+([0-9]{1,2}),\s+([0-9]{4})$").expect("valid long date pattern")
});

const MONTHS: [&str; 12] = [
    "january", "february", "march", "april", "may", "june",
    "july", "august", "september", "october", "november", "december",
];

/// "March 5, 2024" -> "05/03/2024"; anything else is returned unchanged
pub fn normalize_date(date: &str) -> String {
    parse_long_date(date)
        .map(|d| d.format("%d/%m/%Y").to_string())
        .unwrap_or_else(|| date.to_string())
}

/// Full English month name, day with or without leading zero, four-digit year from 0001.
/// Separators may be any run of whitespace.
fn parse_long_date(date: &str) -> Option<NaiveDate> {
    let caps = LONG_DATE.captures(date)?;
    let month_name = caps[1].to_ascii_lowercase();
    let month = MONTHS.iter().position(|m| *m == month_name)? as u32 + 1;
    let day: u32 = caps[2].parse().ok()?;
    let year = caps[3].parse::<i32>().ok().filter(|y| *y > 0)?;
    NaiveDate::from_ymd_opt(year, month, day)
}

pub fn normalize(record: ExtractedRecord) -> NormalizedRecord {
    NormalizedRecord {
        date: normalize_date(&record.date),
        customer_name: record.customer_name,
        customer_email: record.customer_email,
        amount: record.amount,
    }
}

/// Keeps the first occurrence of each (name, email, date, amount)
#[derive(Debug, Default)]
pub struct Deduplicator {
    seen: HashSet<DedupKey>,
}

impl Deduplicator {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when the record was not seen before
    pub fn admit(&mut self, record: &NormalizedRecord) -> bool {
        self.seen.insert(record.dedup_key())
    }
}

/// Ordered unique records, first occurrence wins
pub fn dedupe<I>(records: I) -> Vec<NormalizedRecord>
where
    I: IntoIterator<Item = NormalizedRecord>,
{
    let mut dedup = Deduplicator::new();
    records.into_iter().filter(|r| dedup.admit(r)).collect()
}
