use std::borrow::Cow;

use log::debug;
use mail_parser::{Address, HeaderValue, Message, MimeHeaders, PartType};

pub const UNKNOWN_EMAIL: &str = "Unknown Email";

/// Body of a leaf MIME part
#[derive(Debug, Clone)]
pub enum PartBody<'a> {
    /// Text already converted from its declared charset
    Text(Cow<'a, str>),
    /// Transfer-decoded bytes still in their declared charset
    Bytes(Cow<'a, [u8]>),
}

#[derive(Debug, Clone)]
pub struct RawPart<'a> {
    /// Lower-cased `type/subtype`
    pub mime_type: String,
    pub charset: Option<String>,
    pub body: PartBody<'a>,
}

/// A message as supplied by the archive reader
pub trait RawMessage {
    /// Header value with encoded words resolved, looked up case-insensitively
    fn header(&self, name: &str) -> Option<String>;

    fn is_multipart(&self) -> bool;

    /// Leaf parts in document order
    fn parts(&self) -> Vec<RawPart<'_>>;
}

/// Plain-text view of a message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedMessage {
    pub subject: String,
    pub reply_to_address: String,
    pub body: String,
}

pub fn decode<M: RawMessage + ?Sized>(message: &M) -> DecodedMessage {
    let subject = message
        .header("Subject")
        .map(|s| s.trim().to_string())
        .unwrap_or_default();

    let reply_to_address = message
        .header("Reply-To")
        .and_then(|value| parse_address(&value))
        .map(|addr| clean_address(&addr))
        .filter(|addr| !addr.is_empty())
        .unwrap_or_else(|| UNKNOWN_EMAIL.to_string());

    let body = extract_body(message);
    debug!(
        "Decoded message: subject={:?}, reply-to={}, body length={}",
        subject,
        reply_to_address,
        body.len()
    );

    DecodedMessage {
        subject,
        reply_to_address,
        body,
    }
}

/// Multipart: first text/plain part. Single part: the sole payload, whatever its type.
fn extract_body<M: RawMessage + ?Sized>(message: &M) -> String {
    let parts = message.parts();
    let part = if message.is_multipart() {
        parts.iter().find(|p| p.mime_type == "text/plain")
    } else {
        parts.first()
    };
    part.map(decode_part).unwrap_or_default()
}

fn decode_part(part: &RawPart<'_>) -> String {
    match &part.body {
        PartBody::Text(text) => text.to_string(),
        PartBody::Bytes(bytes) => decode_bytes(bytes, part.charset.as_deref()),
    }
}

/// Decodes bytes in the given charset; unknown charsets fall back to lossy UTF-8
pub fn decode_bytes(bytes: &[u8], charset: Option<&str>) -> String {
    let charset = charset.map(|c| c.trim().to_ascii_lowercase());
    match charset.as_deref() {
        Some("iso-8859-1" | "iso8859-1" | "latin1" | "latin-1" | "l1") => {
            bytes.iter().map(|&b| b as char).collect()
        }
        _ => String::from_utf8_lossy(bytes).into_owned(),
    }
}

/// Address portion of a `Display Name <address>` pair
pub fn parse_address(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Some(start) = value.rfind('<') {
        let rest = &value[start + 1..];
        let inner = rest.find('>').map_or(rest, |end| &rest[..end]).trim();
        return if inner.is_empty() {
            None
        } else {
            Some(inner.to_string())
        };
    }

    let tokens: Vec<&str> = value.split_whitespace().collect();
    if let Some(token) = tokens.iter().rev().find(|t| t.contains('@')) {
        return Some(token.trim_matches(|c| c == '"' || c == ',').to_string());
    }
    match tokens.as_slice() {
        [single] => Some(single.to_string()),
        _ => None,
    }
}

/// Strips `mailto:`, `<` and `>` wrappers from the front of an address
fn clean_address(address: &str) -> String {
    let mut rest = address.trim();
    loop {
        if let Some(stripped) = rest.strip_prefix("mailto:") {
            rest = stripped;
        } else if let Some(stripped) = rest.strip_prefix(['<', '>']) {
            rest = stripped;
        } else {
            break;
        }
    }
    rest.trim_end_matches('>').trim().to_string()
}

impl RawMessage for Message<'_> {
    fn header(&self, name: &str) -> Option<String> {
        let header = self
            .parts
            .first()?
            .headers
            .iter()
            .find(|h| h.name().eq_ignore_ascii_case(name))?;

        match header.value() {
            HeaderValue::Text(text) => Some(text.to_string()),
            HeaderValue::TextList(list) => Some(list.join(", ")),
            HeaderValue::Address(address) => render_address(address),
            _ => None,
        }
    }

    fn is_multipart(&self) -> bool {
        matches!(
            self.parts.first().map(|p| &p.body),
            Some(PartType::Multipart(_))
        )
    }

    fn parts(&self) -> Vec<RawPart<'_>> {
        let mut leaves = Vec::new();
        push_leaf_parts(self, &mut leaves);
        leaves
    }
}

/// Leaf parts in document order, descending into attached messages
fn push_leaf_parts<'a>(message: &'a Message<'_>, leaves: &mut Vec<RawPart<'a>>) {
    for part in &message.parts {
        let body = match &part.body {
            PartType::Multipart(_) => continue,
            PartType::Message(inner) => {
                push_leaf_parts(inner, leaves);
                continue;
            }
            PartType::Text(text) | PartType::Html(text) => {
                PartBody::Text(Cow::Borrowed(text.as_ref()))
            }
            PartType::Binary(bytes) | PartType::InlineBinary(bytes) => {
                PartBody::Bytes(Cow::Borrowed(bytes.as_ref()))
            }
        };
        let (mime_type, charset) = match part.content_type() {
            Some(ct) => (
                format!("{}/{}", ct.ctype(), ct.subtype().unwrap_or("plain")).to_ascii_lowercase(),
                ct.attribute("charset").map(|c| c.to_string()),
            ),
            None => ("text/plain".to_string(), None),
        };
        leaves.push(RawPart {
            mime_type,
            charset,
            body,
        });
    }
}

fn render_address(address: &Address<'_>) -> Option<String> {
    let addr = address.first()?;
    match (addr.name.as_deref(), addr.address.as_deref()) {
        (Some(name), Some(email)) => Some(format!("{} <{}>", name, email)),
        (None, Some(email)) => Some(email.to_string()),
        _ => None,
    }
}
