//! Email API integration
//!
//! This module provides:
//! - The `EmailApi` seam the store talks through
//! - An HTTP client for the `/emails` collection
//! - Record normalization to domain models

mod client;
mod normalize;
mod traits;

pub use client::HttpEmailApi;
pub use normalize::{format_received, normalize_record, parse_received};
pub use traits::EmailApi;

/// Email API wire types
pub mod api {
    use serde::{Deserialize, Serialize};

    use crate::models::Draft;

    /// One message as returned by `GET /emails` and `POST /emails`
    ///
    /// Every field is optional on the wire; missing or null values fall
    /// back to their defaults.
    #[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
    pub struct EmailRecord {
        #[serde(default)]
        pub id: i64,
        #[serde(default)]
        pub sender: Option<String>,
        #[serde(default)]
        pub recipient: Option<String>,
        #[serde(default)]
        pub subject: Option<String>,
        #[serde(default)]
        pub body: Option<String>,
        /// ISO-8601-like timestamp, empty, or null
        #[serde(default)]
        pub received: Option<String>,
        #[serde(default)]
        pub is_spam: bool,
        #[serde(default)]
        pub spam_score: f64,
    }

    /// Request body for `POST /emails`
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct NewEmailRecord {
        pub sender: String,
        pub recipient: String,
        pub subject: String,
        pub body: String,
        /// Canonical RFC 3339 UTC timestamp
        pub received: String,
        pub is_spam: bool,
        pub spam_score: f64,
    }

    impl From<&Draft> for NewEmailRecord {
        fn from(draft: &Draft) -> Self {
            Self {
                sender: draft.sender.clone(),
                recipient: draft.recipient.clone(),
                subject: draft.subject.clone(),
                body: draft.body.clone(),
                received: super::format_received(&draft.received_at),
                is_spam: draft.is_spam,
                spam_score: draft.spam_score,
            }
        }
    }
}
