//! Shared test doubles for the store integration tests

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc::Receiver;
use std::sync::{Arc, Mutex};

use mailstore::{EmailApi, EmailRecord, Message, NewEmailRecord, StoreError};

/// One scripted answer to `list_emails`
enum ListReply {
    Ready(mailstore::Result<Vec<EmailRecord>>),
    /// Blocks the calling thread until the gate receives a value
    Gated(Receiver<()>, mailstore::Result<Vec<EmailRecord>>),
}

/// Api double that replays scripted responses in order
///
/// An exhausted script answers with a transport error.
#[derive(Default)]
pub struct ScriptedApi {
    lists: Mutex<VecDeque<ListReply>>,
    creates: Mutex<VecDeque<mailstore::Result<EmailRecord>>>,
    list_calls: AtomicUsize,
    posted: Mutex<Vec<NewEmailRecord>>,
    echo_creates: bool,
}

impl ScriptedApi {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// An api whose creates echo the posted record with sequential ids
    pub fn echoing() -> Arc<Self> {
        Arc::new(Self {
            echo_creates: true,
            ..Default::default()
        })
    }

    pub fn push_list(&self, reply: mailstore::Result<Vec<EmailRecord>>) {
        self.lists.lock().unwrap().push_back(ListReply::Ready(reply));
    }

    pub fn push_gated_list(&self, gate: Receiver<()>, reply: mailstore::Result<Vec<EmailRecord>>) {
        self.lists
            .lock()
            .unwrap()
            .push_back(ListReply::Gated(gate, reply));
    }

    pub fn push_create(&self, reply: mailstore::Result<EmailRecord>) {
        self.creates.lock().unwrap().push_back(reply);
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn posted(&self) -> Vec<NewEmailRecord> {
        self.posted.lock().unwrap().clone()
    }
}

impl EmailApi for ScriptedApi {
    fn list_emails(&self) -> mailstore::Result<Vec<EmailRecord>> {
        let reply = {
            let mut lists = self.lists.lock().unwrap();
            let reply = lists.pop_front();
            self.list_calls.fetch_add(1, Ordering::SeqCst);
            reply
        };

        match reply {
            Some(ListReply::Ready(reply)) => reply,
            Some(ListReply::Gated(gate, reply)) => {
                let _ = gate.recv();
                reply
            }
            None => Err(StoreError::Transport("no scripted listing".to_string())),
        }
    }

    fn create_email(&self, record: &NewEmailRecord) -> mailstore::Result<EmailRecord> {
        let id = {
            let mut posted = self.posted.lock().unwrap();
            posted.push(record.clone());
            posted.len() as i64 + 100
        };

        if self.echo_creates {
            return Ok(EmailRecord {
                id,
                sender: Some(record.sender.clone()),
                recipient: Some(record.recipient.clone()),
                subject: Some(record.subject.clone()),
                body: Some(record.body.clone()),
                received: Some(record.received.clone()),
                is_spam: record.is_spam,
                spam_score: record.spam_score,
            });
        }

        self.creates
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(StoreError::Transport("no scripted create".to_string())))
    }
}

/// Build a wire record
pub fn record(id: i64, sender: &str, received: &str, is_spam: bool) -> EmailRecord {
    EmailRecord {
        id,
        sender: Some(sender.to_string()),
        recipient: Some("me@example.com".to_string()),
        subject: Some(format!("Subject {}", id)),
        body: Some(format!("Body {}", id)),
        received: Some(received.to_string()),
        is_spam,
        spam_score: if is_spam { 0.97 } else { 0.03 },
    }
}

pub fn ids(messages: &[Message]) -> Vec<i64> {
    messages.iter().map(|m| m.id.as_i64()).collect()
}
