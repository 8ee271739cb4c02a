//! Plain-text rendering of messages for the terminal

use mailstore::Message;

const SENDER_WIDTH: usize = 28;
const SUBJECT_WIDTH: usize = 60;

/// Received date in UTC, or "-" when the server sent none
pub fn format_date(message: &Message) -> String {
    if message.has_timestamp() {
        message.received_at.format("%Y-%m-%d %H:%M").to_string()
    } else {
        "-".to_string()
    }
}

/// One listing line: spam marker, id, date, sender, subject
pub fn format_row(message: &Message) -> String {
    let marker = if message.is_spam { '!' } else { ' ' };
    format!(
        "{} {:>5}  {:<16}  {:<width$}  {}",
        marker,
        message.id.as_i64(),
        format_date(message),
        truncate(&message.sender, SENDER_WIDTH),
        truncate(&message.subject, SUBJECT_WIDTH),
        width = SENDER_WIDTH,
    )
}

/// Full view of one message
pub fn format_detail(message: &Message) -> String {
    let verdict = if message.is_spam { "spam" } else { "not spam" };
    format!(
        "From:    {}\nTo:      {}\nDate:    {}\nSubject: {}\nVerdict: {} (score {:.2})\n\n{}",
        message.sender,
        message.recipient,
        format_date(message),
        message.subject,
        verdict,
        message.spam_score,
        message.body,
    )
}

/// Shorten `s` to at most `max` characters, marking the cut with "..."
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let keep = max.saturating_sub(3);
    let mut out: String = s.chars().take(keep).collect();
    out.push_str("...");
    out
}
