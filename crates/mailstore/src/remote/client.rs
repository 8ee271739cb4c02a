//! Email API HTTP client
//!
//! Provides the `/emails` collection calls over HTTP.
//! Uses synchronous HTTP (ureq) to be executor-agnostic.

use log::debug;
use ureq::Agent;
use url::Url;

use super::EmailApi;
use super::api::{EmailRecord, NewEmailRecord};
use crate::error::Result;

/// HTTP client for the email collection endpoint
///
/// The agent is supplied by the host and kept for the client's lifetime;
/// the client never shuts it down.
pub struct HttpEmailApi {
    agent: Agent,
    base_url: Url,
}

impl HttpEmailApi {
    /// Collection path, resolved against the origin of the base URL
    const EMAILS_PATH: &'static str = "/emails";

    /// Create a client with a default agent
    pub fn new(base_url: Url) -> Self {
        Self::with_agent(Agent::new_with_defaults(), base_url)
    }

    /// Create a client that shares an existing agent
    pub fn with_agent(agent: Agent, base_url: Url) -> Self {
        Self { agent, base_url }
    }

    /// The base address requests are resolved against
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn emails_url(&self) -> Result<Url> {
        Ok(self.base_url.join(Self::EMAILS_PATH)?)
    }
}

impl EmailApi for HttpEmailApi {
    fn list_emails(&self) -> Result<Vec<EmailRecord>> {
        let url = self.emails_url()?;
        debug!("GET {}", url);

        let mut response = self.agent.get(url.as_str()).call()?;
        let body = response.body_mut().read_to_string()?;
        let records: Vec<EmailRecord> = serde_json::from_str(&body)?;

        Ok(records)
    }

    fn create_email(&self, record: &NewEmailRecord) -> Result<EmailRecord> {
        let url = self.emails_url()?;
        debug!("POST {}", url);

        let mut response = self.agent.post(url.as_str()).send_json(record)?;
        let body = response.body_mut().read_to_string()?;
        let created: EmailRecord = serde_json::from_str(&body)?;

        Ok(created)
    }
}
