//! Message model representing one classified email

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Server-assigned identifier for a message
///
/// Zero means the server has not assigned an id yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct MessageId(pub i64);

impl MessageId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }

    /// Whether the server has assigned this id
    pub fn is_assigned(&self) -> bool {
        self.0 != 0
    }
}

impl From<i64> for MessageId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for MessageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single email message with its spam classification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Server-assigned ID
    pub id: MessageId,
    /// Sender's email address
    pub sender: String,
    /// Recipient's email address
    pub recipient: String,
    /// Subject line
    pub subject: String,
    /// Message body
    pub body: String,
    /// When the message was received; `DateTime::<Utc>::MIN_UTC` if unknown
    pub received_at: DateTime<Utc>,
    /// Spam flag as classified by the server
    pub is_spam: bool,
    /// Classifier confidence as reported by the server
    pub spam_score: f64,
}

impl Message {
    /// Create a new message builder
    pub fn builder(id: MessageId) -> MessageBuilder {
        MessageBuilder::new(id)
    }

    /// Whether the message carries a real timestamp rather than the sentinel
    pub fn has_timestamp(&self) -> bool {
        self.received_at != DateTime::<Utc>::MIN_UTC
    }
}

/// Builder for creating Message instances
pub struct MessageBuilder {
    id: MessageId,
    draft: DraftBuilder,
}

impl MessageBuilder {
    fn new(id: MessageId) -> Self {
        Self {
            id,
            draft: DraftBuilder::new(String::new(), String::new()),
        }
    }

    pub fn sender(mut self, sender: impl Into<String>) -> Self {
        self.draft.sender = sender.into();
        self
    }

    pub fn recipient(mut self, recipient: impl Into<String>) -> Self {
        self.draft.recipient = recipient.into();
        self
    }

    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.draft = self.draft.subject(subject);
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.draft = self.draft.body(body);
        self
    }

    pub fn received_at(mut self, received_at: DateTime<Utc>) -> Self {
        self.draft = self.draft.received_at(received_at);
        self
    }

    pub fn spam(mut self, is_spam: bool, spam_score: f64) -> Self {
        self.draft = self.draft.spam(is_spam, spam_score);
        self
    }

    pub fn build(self) -> Message {
        let draft = self.draft.build();
        Message {
            id: self.id,
            sender: draft.sender,
            recipient: draft.recipient,
            subject: draft.subject,
            body: draft.body,
            received_at: draft.received_at,
            is_spam: draft.is_spam,
            spam_score: draft.spam_score,
        }
    }
}

/// A message that has not been created on the server yet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Draft {
    pub sender: String,
    pub recipient: String,
    pub subject: String,
    pub body: String,
    pub received_at: DateTime<Utc>,
    pub is_spam: bool,
    pub spam_score: f64,
}

impl Draft {
    /// Start a draft from sender to recipient
    pub fn builder(sender: impl Into<String>, recipient: impl Into<String>) -> DraftBuilder {
        DraftBuilder::new(sender.into(), recipient.into())
    }
}

/// Builder for creating Draft instances
pub struct DraftBuilder {
    sender: String,
    recipient: String,
    subject: String,
    body: String,
    received_at: Option<DateTime<Utc>>,
    is_spam: bool,
    spam_score: f64,
}

impl DraftBuilder {
    fn new(sender: String, recipient: String) -> Self {
        Self {
            sender,
            recipient,
            subject: String::new(),
            body: String::new(),
            received_at: None,
            is_spam: false,
            spam_score: 0.0,
        }
    }

    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = subject.into();
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn received_at(mut self, received_at: DateTime<Utc>) -> Self {
        self.received_at = Some(received_at);
        self
    }

    pub fn spam(mut self, is_spam: bool, spam_score: f64) -> Self {
        self.is_spam = is_spam;
        self.spam_score = spam_score;
        self
    }

    pub fn build(self) -> Draft {
        Draft {
            sender: self.sender,
            recipient: self.recipient,
            subject: self.subject,
            body: self.body,
            received_at: self.received_at.unwrap_or_else(Utc::now),
            is_spam: self.is_spam,
            spam_score: self.spam_score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_message_id_assignment() {
        assert!(!MessageId::default().is_assigned());
        assert!(MessageId::new(7).is_assigned());
        assert_eq!(MessageId::from(7).to_string(), "7");
    }

    #[test]
    fn test_builder_sets_fields() {
        let ts = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let msg = Message::builder(MessageId::new(3))
            .sender("a@x.com")
            .recipient("me@example.com")
            .subject("Hi")
            .received_at(ts)
            .spam(true, 0.93)
            .build();

        assert_eq!(msg.id, MessageId::new(3));
        assert_eq!(msg.sender, "a@x.com");
        assert_eq!(msg.body, "");
        assert_eq!(msg.received_at, ts);
        assert!(msg.is_spam);
        assert!(msg.has_timestamp());
    }

    #[test]
    fn test_sentinel_timestamp() {
        let msg = Message::builder(MessageId::new(1))
            .received_at(DateTime::<Utc>::MIN_UTC)
            .build();
        assert!(!msg.has_timestamp());
    }

    #[test]
    fn test_draft_defaults() {
        let before = Utc::now();
        let draft = Draft::builder("me@example.com", "b@y.com").build();
        assert_eq!(draft.subject, "");
        assert!(!draft.is_spam);
        assert_eq!(draft.spam_score, 0.0);
        assert!(draft.received_at >= before);
    }
}
