//! Folder views over the message cache

use std::fmt;
use std::str::FromStr;

use super::Message;

/// Address the local user sends from, used by the sent folder
pub const DEFAULT_LOCAL_ADDRESS: &str = "me@example.com";

/// One of the filtered views a UI can show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Folder {
    All,
    Inbox,
    Sent,
    Spam,
}

impl Folder {
    /// All folders in sidebar order
    pub const ALL: [Folder; 4] = [Folder::Inbox, Folder::Sent, Folder::Spam, Folder::All];

    pub fn as_str(&self) -> &'static str {
        match self {
            Folder::All => "all",
            Folder::Inbox => "inbox",
            Folder::Sent => "sent",
            Folder::Spam => "spam",
        }
    }

    /// Whether `message` belongs in this folder
    ///
    /// Sent is matched on the exact sender address; inbox and spam
    /// partition the cache by the server's spam flag.
    pub fn matches(&self, message: &Message, local_address: &str) -> bool {
        match self {
            Folder::All => true,
            Folder::Inbox => !message.is_spam,
            Folder::Sent => message.sender == local_address,
            Folder::Spam => message.is_spam,
        }
    }
}

impl fmt::Display for Folder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown folder name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown folder: {0}")]
pub struct UnknownFolderError(pub String);

impl FromStr for Folder {
    type Err = UnknownFolderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Folder::All),
            "inbox" => Ok(Folder::Inbox),
            "sent" => Ok(Folder::Sent),
            "spam" | "junk" => Ok(Folder::Spam),
            _ => Err(UnknownFolderError(s.to_string())),
        }
    }
}
