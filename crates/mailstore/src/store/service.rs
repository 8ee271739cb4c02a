//! MessageStore service
//!
//! Wraps the message cache with network loads, creates, local deletes,
//! and change notifications for the UI layer.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use log::{debug, info, warn};
use tokio::sync::broadcast;
use tokio::task::JoinHandle;

use super::{MessageCache, StoreEvents};
use crate::error::Result;
use crate::models::{Draft, Folder, Message, MessageId};
use crate::remote::api::NewEmailRecord;
use crate::remote::{EmailApi, normalize_record};

/// Bookkeeping for overlapping loads
#[derive(Debug, Default)]
struct LoadState {
    /// Loads that have started and not yet finished
    in_flight: usize,
    /// Generation handed to the most recently started load
    latest: u64,
    /// Generation whose listing is currently in the cache
    committed: u64,
}

/// Marks a load finished when dropped, even if the load future is dropped early
struct LoadGuard<'a> {
    store: &'a MessageStore,
}

impl Drop for LoadGuard<'_> {
    fn drop(&mut self) {
        self.store.finish_load();
    }
}

/// Client-side cache of classified email backed by the email API
///
/// Reads are served from memory; `load`/`reload` replace the cache with a
/// fresh listing, `create` posts and appends, `delete` only touches the
/// local cache. Network failures are logged and swallowed so the UI keeps
/// working with whatever it already has; use the `try_*` variants to see
/// the error.
pub struct MessageStore {
    api: Arc<dyn EmailApi>,
    local_address: String,
    cache: MessageCache,
    events: StoreEvents,
    loads: Mutex<LoadState>,
    initial_load: Mutex<Option<JoinHandle<()>>>,
}

impl MessageStore {
    /// Create an empty store without starting a load
    pub fn new(api: Arc<dyn EmailApi>, local_address: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            api,
            local_address: local_address.into(),
            cache: MessageCache::new(),
            events: StoreEvents::new(),
            loads: Mutex::new(LoadState::default()),
            initial_load: Mutex::new(None),
        })
    }

    /// Create a store and start the initial load in the background
    ///
    /// Must be called from within a Tokio runtime. Await [`ready`](Self::ready)
    /// to wait for the initial load.
    pub fn spawn(api: Arc<dyn EmailApi>, local_address: impl Into<String>) -> Arc<Self> {
        let store = Self::new(api, local_address);
        store.initialize();
        store
    }

    /// Start a fire-and-forget load; failures leave the cache empty
    fn initialize(self: &Arc<Self>) {
        let store = Arc::clone(self);
        let handle = tokio::spawn(async move { store.load().await });
        *lock(&self.initial_load) = Some(handle);
    }

    /// Wait for the initial load started by [`spawn`](Self::spawn)
    ///
    /// Returns immediately if there is none or it was already awaited.
    pub async fn ready(&self) {
        let handle = lock(&self.initial_load).take();
        if let Some(handle) = handle
            && let Err(e) = handle.await
        {
            warn!("Initial message load task failed: {}", e);
        }
    }

    /// The address the sent folder matches on
    pub fn local_address(&self) -> &str {
        &self.local_address
    }

    // === Loading ===

    /// Fetch the full listing and replace the cache
    ///
    /// On failure the cache is left as it was. Emits `loading changed`
    /// on entry and on exit, unless another load is already running.
    pub async fn load(&self) {
        if let Err(e) = self.try_reload().await {
            warn!("Failed to load messages: {}", e);
        }
    }

    /// Awaitable refresh; same as [`load`](Self::load)
    pub async fn reload(&self) {
        self.load().await
    }

    /// Refresh and report the outcome
    ///
    /// Returns the number of messages loaded, or `None` if a newer load
    /// already replaced the cache while this one was in flight. A newer
    /// load that fails does not block this one from committing.
    pub async fn try_reload(&self) -> Result<Option<usize>> {
        let (generation, _guard) = self.begin_load();

        let api = Arc::clone(&self.api);
        let records = tokio::task::spawn_blocking(move || api.list_emails()).await??;

        let messages: Vec<Message> = records.into_iter().map(normalize_record).collect();
        let count = messages.len();

        if !self.commit_load(generation, messages) {
            debug!("Discarding stale listing from load #{}", generation);
            return Ok(None);
        }

        info!("Loaded {} messages", count);
        self.events.data_changed();
        Ok(Some(count))
    }

    /// Whether any load is in flight
    pub fn is_loading(&self) -> bool {
        lock(&self.loads).in_flight > 0
    }

    /// Emits `loading changed(true)` only when no other load was running
    fn begin_load(&self) -> (u64, LoadGuard<'_>) {
        let (generation, started) = {
            let mut loads = lock(&self.loads);
            loads.in_flight += 1;
            loads.latest += 1;
            (loads.latest, loads.in_flight == 1)
        };
        if started {
            self.events.loading_changed(true);
        }
        (generation, LoadGuard { store: self })
    }

    /// Emits `loading changed(false)` only when the last load exits
    fn finish_load(&self) {
        let finished = {
            let mut loads = lock(&self.loads);
            loads.in_flight = loads.in_flight.saturating_sub(1);
            loads.in_flight == 0
        };
        if finished {
            self.events.loading_changed(false);
        }
    }

    /// Replace the cache unless a newer load already committed
    fn commit_load(&self, generation: u64, messages: Vec<Message>) -> bool {
        let mut loads = lock(&self.loads);
        if generation <= loads.committed {
            return false;
        }
        loads.committed = generation;
        self.cache.replace_all(messages);
        true
    }

    // === Mutations ===

    /// Post a draft and append the created message
    ///
    /// Returns `None` on any failure, leaving the cache unchanged.
    pub async fn create(&self, draft: &Draft) -> Option<Message> {
        match self.try_create(draft).await {
            Ok(message) => Some(message),
            Err(e) => {
                warn!("Failed to create message: {}", e);
                None
            }
        }
    }

    /// Post a draft and report the outcome
    pub async fn try_create(&self, draft: &Draft) -> Result<Message> {
        let record = NewEmailRecord::from(draft);
        let api = Arc::clone(&self.api);
        let created = tokio::task::spawn_blocking(move || api.create_email(&record)).await??;

        let message = normalize_record(created);
        info!("Created message {}", message.id);

        self.cache.insert(message.clone());
        self.events.data_changed();
        Ok(message)
    }

    /// Remove a message from the local cache
    ///
    /// Local only: the server copy is untouched and comes back on the next
    /// reload. Returns whether the message was cached.
    pub fn delete(&self, message: &Message) -> bool {
        let removed = self.cache.remove(message);
        if !removed {
            debug!("Delete of uncached message {}", message.id);
        }
        self.events.data_changed();
        removed
    }

    // === Queries ===

    /// Look up a cached message by id
    pub fn get(&self, id: MessageId) -> Option<Message> {
        self.cache.get(id)
    }

    /// All cached messages, newest first
    pub fn list(&self) -> Vec<Message> {
        self.list_folder(Folder::All)
    }

    /// Messages not flagged as spam, newest first
    pub fn list_inbox(&self) -> Vec<Message> {
        self.list_folder(Folder::Inbox)
    }

    /// Messages sent from the local address, newest first
    pub fn list_sent(&self) -> Vec<Message> {
        self.list_folder(Folder::Sent)
    }

    /// Messages flagged as spam, newest first
    pub fn list_spam(&self) -> Vec<Message> {
        self.list_folder(Folder::Spam)
    }

    pub fn list_folder(&self, folder: Folder) -> Vec<Message> {
        self.cache.list_where(|m| folder.matches(m, &self.local_address))
    }

    pub fn count_folder(&self, folder: Folder) -> usize {
        self.cache.count_where(|m| folder.matches(m, &self.local_address))
    }

    pub fn spam_count(&self) -> usize {
        self.count_folder(Folder::Spam)
    }

    pub fn inbox_count(&self) -> usize {
        self.count_folder(Folder::Inbox)
    }

    // === Notifications ===

    /// Fires after every cache mutation
    pub fn subscribe_data(&self) -> broadcast::Receiver<()> {
        self.events.subscribe_data()
    }

    /// Fires with the new loading flag on every load entry and exit
    pub fn subscribe_loading(&self) -> broadcast::Receiver<bool> {
        self.events.subscribe_loading()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
