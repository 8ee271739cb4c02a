//! Domain models for mail entities

mod folder;
mod message;

pub use folder::{DEFAULT_LOCAL_ADDRESS, Folder, UnknownFolderError};
pub use message::{Draft, DraftBuilder, Message, MessageBuilder, MessageId};
