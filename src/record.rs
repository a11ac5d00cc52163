use serde::Serialize;

pub const UNKNOWN_NAME: &str = "Unknown Name";
pub const UNKNOWN_EMAIL: &str = crate::email::decoder::UNKNOWN_EMAIL;
pub const UNKNOWN_PHONE: &str = "Unknown Phone";
pub const UNKNOWN_DATE: &str = "Unknown Date";
pub const ZERO_AMOUNT: &str = "0.00";

/// Record as extracted from one message, date still free-form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedRecord {
    pub customer_name: String,
    pub customer_email: String,
    pub date: String,
    pub amount: String,
}

/// Record whose date is `DD/MM/YYYY` when it could be parsed
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedRecord {
    pub customer_name: String,
    pub customer_email: String,
    pub date: String,
    pub amount: String,
}

/// (name, email, normalized date, amount)
pub type DedupKey = (String, String, String, String);

impl NormalizedRecord {
    pub fn dedup_key(&self) -> DedupKey {
        (
            self.customer_name.clone(),
            self.customer_email.clone(),
            self.date.clone(),
            self.amount.clone(),
        )
    }

    pub fn to_row(&self) -> OutputRow<'_> {
        OutputRow {
            date: &self.date,
            customer_name: &self.customer_name,
            customer_email: &self.customer_email,
            amount_received: &self.amount,
        }
    }
}

/// One CSV row; field order is the column order
#[derive(Debug, Serialize)]
pub struct OutputRow<'a> {
    #[serde(rename = "Date")]
    pub date: &'a str,
    #[serde(rename = "Customer Name")]
    pub customer_name: &'a str,
    #[serde(rename = "Customer Email")]
    pub customer_email: &'a str,
    #[serde(rename = "Amount Received")]
    pub amount_received: &'a str,
}
