//! Email API trait definition

use super::api::{EmailRecord, NewEmailRecord};
use crate::error::Result;

/// Trait for the remote email collection
///
/// Abstracts over the transport so the store can run against the HTTP
/// client in production and a scripted fake in tests. Calls are
/// synchronous; the store moves them onto the blocking pool.
pub trait EmailApi: Send + Sync {
    /// Fetch every stored email (`GET /emails`)
    fn list_emails(&self) -> Result<Vec<EmailRecord>>;

    /// Store a new email and return the created record (`POST /emails`)
    fn create_email(&self, record: &NewEmailRecord) -> Result<EmailRecord>;
}
