//! Client-side message store
//!
//! The cache holds the last fetched listing plus local creates and
//! deletes; the service wraps it with network loads and change events.

mod cache;
mod events;
mod service;

pub use cache::MessageCache;
pub use events::StoreEvents;
pub use service::MessageStore;
