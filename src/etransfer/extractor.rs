use std::sync::LazyLock;

use log::debug;
use regex::Regex;

use crate::record::{UNKNOWN_DATE, UNKNOWN_NAME, ZERO_AMOUNT};

/// "sent you $X ... has been automatically deposited" or "$X from NAME"
static TRANSFER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(?:sent you \$([0-9,]+\.\d{2}) .+? has been automatically deposited|\$([0-9,]+\.\d{2}) from ([\w\s]+))",
    )
    .expect("valid e-Transfer pattern")
});

static DATE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:sent you \$[0-9,]+\.\d{2} .+? on (\w+ \d{1,2}, \d{4}))|\b(\w+ \d{1,2}, \d{4})\b")
        .expect("valid e-Transfer date pattern")
});

static DATE_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\w+ \d{1,2}, \d{4}").expect("valid date shape"));

static DEPOSITED_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s+and it has been automatically deposited$").expect("valid suffix pattern")
});

/// Fields of an Interac e-Transfer notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ETransferCandidate {
    pub customer_name: String,
    pub amount: String,
    pub date: String,
}

/// Recognizes an e-Transfer notification body.
///
/// Expected formats:
/// - "John Smith sent you $1,234.56 (CAD) and it has been automatically deposited"
/// - "You've received $50.00 from Jane Doe and it has been automatically deposited"
pub fn extract_etransfer(body: &str) -> Option<ETransferCandidate> {
    let caps = TRANSFER_PATTERN.captures(body)?;

    let amount = caps
        .get(1)
        .or_else(|| caps.get(2))
        .map(|m| m.as_str().replace(',', ""))
        .unwrap_or_else(|| ZERO_AMOUNT.to_string());

    let customer_name = caps
        .get(3)
        .map(|m| DEPOSITED_SUFFIX.replace(m.as_str().trim(), "").into_owned())
        .unwrap_or_else(|| UNKNOWN_NAME.to_string());

    let date = extract_date(body);
    debug!(
        "e-Transfer found: amount={}, name={}, date={}",
        amount, customer_name, date
    );

    Some(ETransferCandidate {
        customer_name,
        amount,
        date,
    })
}

/// First "Month D, YYYY" in the body, preferring the one after "sent you $X ... on"
fn extract_date(body: &str) -> String {
    DATE_PATTERN
        .captures(body)
        .and_then(|caps| caps.get(1).or_else(|| caps.get(2)))
        .and_then(|m| DATE_SHAPE.find(m.as_str()))
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| UNKNOWN_DATE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sent_you_form() {
        let body = "Hi,\nJohn Smith sent you $1,123.45 (CAD) and it has been automatically deposited on March 5, 2024.\n";
        let candidate = extract_etransfer(body).unwrap();

        assert_eq!(candidate.amount, "1123.45");
        assert_eq!(candidate.customer_name, UNKNOWN_NAME);
        assert_eq!(candidate.date, "March 5, 2024");
    }

    #[test]
    fn test_from_name_form() {
        let body = "You received $250.00 from Jane Doe and it has been automatically deposited.\nDate: April 12, 2024";
        let candidate = extract_etransfer(body).unwrap();

        assert_eq!(candidate.amount, "250.00");
        assert_eq!(candidate.customer_name, "Jane Doe");
        assert_eq!(candidate.date, "April 12, 2024");
    }

    #[test]
    fn test_case_insensitive_amount() {
        let body = "JOHN SENT YOU $75.00 AND IT HAS BEEN AUTOMATICALLY DEPOSITED";
        let candidate = extract_etransfer(body).unwrap();
        assert_eq!(candidate.amount, "75.00");
        assert_eq!(candidate.date, UNKNOWN_DATE);
    }

    #[test]
    fn test_date_pattern_is_case_sensitive_on_sent_you() {
        // the "on DATE" alternative needs lower-case "sent you", the bare date still matches
        let body = "Sent You $10.00 today and it has been automatically deposited on May 1, 2024";
        let candidate = extract_etransfer(body).unwrap();
        assert_eq!(candidate.date, "May 1, 2024");
    }

    #[test]
    fn test_not_an_etransfer() {
        assert_eq!(extract_etransfer("Thanks for your order of $12.50."), None);
        assert_eq!(extract_etransfer("First Name: Jane\nEmail: jane@example.com"), None);
        assert_eq!(extract_etransfer(""), None);
    }

    #[test]
    fn test_name_stops_at_punctuation() {
        let body = "$40.00 from Robert Brown. Message: thanks!";
        let candidate = extract_etransfer(body).unwrap();
        assert_eq!(candidate.customer_name, "Robert Brown");
        assert_eq!(candidate.amount, "40.00");
    }
}
