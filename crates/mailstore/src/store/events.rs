//! Change notifications for store observers

use tokio::sync::broadcast;

/// Buffered events per subscriber before it starts lagging
const EVENT_CAPACITY: usize = 64;

/// The two independent notification channels a store publishes
///
/// Observers re-query the store after `data changed`; `loading changed`
/// carries the new loading flag. Sending with no subscribers is a no-op.
pub struct StoreEvents {
    data: broadcast::Sender<()>,
    loading: broadcast::Sender<bool>,
}

impl StoreEvents {
    pub fn new() -> Self {
        let (data, _) = broadcast::channel(EVENT_CAPACITY);
        let (loading, _) = broadcast::channel(EVENT_CAPACITY);
        Self { data, loading }
    }

    pub fn subscribe_data(&self) -> broadcast::Receiver<()> {
        self.data.subscribe()
    }

    pub fn subscribe_loading(&self) -> broadcast::Receiver<bool> {
        self.loading.subscribe()
    }

    pub(crate) fn data_changed(&self) {
        let _ = self.data.send(());
    }

    pub(crate) fn loading_changed(&self, is_loading: bool) {
        let _ = self.loading.send(is_loading);
    }
}

impl Default for StoreEvents {
    fn default() -> Self {
        Self::new()
    }
}
