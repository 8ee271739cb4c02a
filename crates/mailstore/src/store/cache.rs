//! In-memory message cache
//!
//! The stored order is not meaningful; every read sorts by
//! `received_at` descending.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::models::{Message, MessageId};

/// Unordered collection of cached messages
///
/// Uses a Vec protected by an RwLock for thread-safe access.
#[derive(Default)]
pub struct MessageCache {
    messages: RwLock<Vec<Message>>,
}

impl MessageCache {
    /// Create a new empty cache
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<Message>> {
        self.messages.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Message>> {
        self.messages.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Replace the whole cache with a fresh listing
    pub fn replace_all(&self, messages: Vec<Message>) {
        *self.write() = messages;
    }

    /// Add a newly created message
    ///
    /// An entry with the same assigned id is replaced so ids stay unique.
    pub fn insert(&self, message: Message) {
        let mut messages = self.write();
        if message.id.is_assigned() {
            messages.retain(|m| m.id != message.id);
        }
        messages.push(message);
    }

    /// Remove one cached message, returning whether anything was removed
    ///
    /// Assigned ids are unique and match by id. Unassigned ids can repeat,
    /// so only the first entry equal to `message` is removed.
    pub fn remove(&self, message: &Message) -> bool {
        let mut messages = self.write();
        let position = if message.id.is_assigned() {
            messages.iter().position(|m| m.id == message.id)
        } else {
            messages.iter().position(|m| m == message)
        };
        match position {
            Some(index) => {
                messages.remove(index);
                true
            }
            None => false,
        }
    }

    /// Get a message by id
    pub fn get(&self, id: MessageId) -> Option<Message> {
        self.read().iter().find(|m| m.id == id).cloned()
    }

    /// Messages matching `filter`, newest first
    ///
    /// The sort is stable, so equal timestamps keep insertion order.
    pub fn list_where<F>(&self, filter: F) -> Vec<Message>
    where
        F: Fn(&Message) -> bool,
    {
        let mut result: Vec<Message> = self.read().iter().filter(|&m| filter(m)).cloned().collect();
        result.sort_by(|a, b| b.received_at.cmp(&a.received_at));
        result
    }

    /// Count messages matching `filter`
    pub fn count_where<F>(&self, filter: F) -> usize
    where
        F: Fn(&Message) -> bool,
    {
        self.read().iter().filter(|&m| filter(m)).count()
    }

    /// Total number of cached messages
    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }
}
