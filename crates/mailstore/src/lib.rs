//! Mailstore crate - Client-side data access for classified email
//!
//! This crate provides the layer a mail UI sits on:
//! - Domain models (Message, Draft, Folder)
//! - Email API client and record normalization
//! - An in-memory cache with folder views (all, inbox, sent, spam)
//! - `MessageStore`, which loads, creates, and deletes messages and
//!   notifies observers when data or loading state changes
//!
//! Spam classification is done by the server; this crate only reads the
//! flag and score it reports.

pub mod config;
pub mod error;
pub mod models;
pub mod remote;
pub mod store;

pub use crate::config::Settings;
pub use error::{Result, StoreError};
pub use models::{DEFAULT_LOCAL_ADDRESS, Draft, Folder, Message, MessageId, UnknownFolderError};
pub use remote::api::{EmailRecord, NewEmailRecord};
pub use remote::{EmailApi, HttpEmailApi, format_received, normalize_record, parse_received};
pub use store::{MessageCache, MessageStore, StoreEvents};
