//! Email record normalization
//!
//! Converts wire records to domain models.

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};

use super::api::EmailRecord;
use crate::models::{Message, MessageId};

/// Naive layouts the server emits (Python `isoformat()` and friends)
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Normalize a wire record to a Message
///
/// Never fails: null strings become empty and a bad timestamp becomes
/// the `MIN_UTC` sentinel, so one odd record cannot sink a whole listing.
pub fn normalize_record(record: EmailRecord) -> Message {
    Message::builder(MessageId::new(record.id))
        .sender(record.sender.unwrap_or_default())
        .recipient(record.recipient.unwrap_or_default())
        .subject(record.subject.unwrap_or_default())
        .body(record.body.unwrap_or_default())
        .received_at(parse_received(record.received.as_deref()))
        .spam(record.is_spam, record.spam_score)
        .build()
}

/// Parse a `received` field, falling back to `DateTime::<Utc>::MIN_UTC`
///
/// Values without an offset are read as UTC.
pub fn parse_received(value: Option<&str>) -> DateTime<Utc> {
    let Some(raw) = value.map(str::trim).filter(|s| !s.is_empty()) else {
        return DateTime::<Utc>::MIN_UTC;
    };

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.with_timezone(&Utc);
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return naive.and_utc();
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

/// Format a timestamp the way the API expects it on create
pub fn format_received(received_at: &DateTime<Utc>) -> String {
    received_at.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}
