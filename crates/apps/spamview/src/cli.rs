//! Command-line surface of the host

use clap::{Parser, Subcommand};
use mailstore::Folder;

/// Origin used when no API base URL is configured
pub const DEFAULT_ORIGIN: &str = "http://localhost:5000";

#[derive(Debug, Parser)]
#[command(name = "spamview", version, about = "View spam-classified email from the email API")]
pub struct Cli {
    /// API base URL; overrides SPAMVIEW_API_BASE_URL and settings.json
    #[arg(long, global = true)]
    pub api_base_url: Option<String>,

    /// Origin used when no API base URL is configured
    #[arg(long, global = true, default_value = DEFAULT_ORIGIN)]
    pub origin: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List messages in a folder (inbox, sent, spam, all)
    List {
        #[arg(default_value = "inbox")]
        folder: Folder,
    },
    /// Show one message in full
    Show { id: i64 },
    /// Print message counts per folder
    Counts,
    /// Create a message from the local address
    Send {
        #[arg(long)]
        to: String,
        #[arg(long, default_value = "")]
        subject: String,
        #[arg(long, default_value = "")]
        body: String,
        /// Mark the message as spam
        #[arg(long)]
        spam: bool,
        #[arg(long, default_value_t = 0.0)]
        spam_score: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_defaults_to_inbox() {
        let cli = Cli::try_parse_from(["spamview", "list"]).unwrap();
        assert!(matches!(cli.command, Command::List { folder: Folder::Inbox }));
        assert_eq!(cli.origin, DEFAULT_ORIGIN);
        assert_eq!(cli.api_base_url, None);
    }

    #[test]
    fn test_list_parses_folder() {
        let cli = Cli::try_parse_from(["spamview", "list", "spam"]).unwrap();
        assert!(matches!(cli.command, Command::List { folder: Folder::Spam }));
        assert!(Cli::try_parse_from(["spamview", "list", "drafts"]).is_err());
    }

    #[test]
    fn test_global_base_url() {
        let cli =
            Cli::try_parse_from(["spamview", "counts", "--api-base-url", "http://api:5000"]).unwrap();
        assert_eq!(cli.api_base_url.as_deref(), Some("http://api:5000"));
    }

    #[test]
    fn test_send_arguments() {
        let cli = Cli::try_parse_from([
            "spamview", "send", "--to", "b@y.com", "--subject", "Hi", "--spam", "--spam-score", "0.8",
        ])
        .unwrap();

        match cli.command {
            Command::Send {
                to,
                subject,
                body,
                spam,
                spam_score,
            } => {
                assert_eq!(to, "b@y.com");
                assert_eq!(subject, "Hi");
                assert_eq!(body, "");
                assert!(spam);
                assert_eq!(spam_score, 0.8);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
