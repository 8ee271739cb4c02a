//! spamview - A terminal viewer for spam-classified email
//!
//! This is the host for the message store: it resolves the API base
//! address, builds the store, and prints folder listings.

use std::sync::Arc;

use anyhow::{Context, Result, bail};
use clap::Parser;
use log::{error, info, warn};
use mailstore::{Draft, Folder, HttpEmailApi, MessageId, MessageStore, Settings};

mod cli;
mod render;

use cli::{Cli, Command};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    // Bootstrap config directory
    if let Err(e) = config::init() {
        error!("Failed to initialize config directory: {}", e);
    }

    let cli = Cli::parse();

    let mut settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            warn!("Failed to load settings: {:#}", e);
            if let Some(path) = Settings::default_settings_path() {
                warn!(
                    "Fix or remove the settings file at {}, or set SPAMVIEW_API_BASE_URL and SPAMVIEW_LOCAL_ADDRESS",
                    path.display()
                );
            }
            Settings::default()
        }
    };
    if let Some(url) = cli.api_base_url.clone() {
        settings.api_base_url = Some(url);
    }
    let base_url = settings.base_url(&cli.origin)?;
    info!("Using email API at {}", base_url);

    let store = MessageStore::spawn(
        Arc::new(HttpEmailApi::new(base_url)),
        settings.local_address.clone(),
    );
    store.ready().await;

    run(&store, cli.command).await
}

async fn run(store: &MessageStore, command: Command) -> Result<()> {
    match command {
        Command::List { folder } => {
            let messages = store.list_folder(folder);
            println!("{} ({})", folder, messages.len());
            for message in &messages {
                println!("{}", render::format_row(message));
            }
        }
        Command::Show { id } => {
            let Some(message) = store.get(MessageId::new(id)) else {
                bail!("No message with id {}", id);
            };
            println!("{}", render::format_detail(&message));
        }
        Command::Counts => {
            for folder in Folder::ALL {
                println!("{:<6} {}", folder, store.count_folder(folder));
            }
        }
        Command::Send {
            to,
            subject,
            body,
            spam,
            spam_score,
        } => {
            let draft = Draft::builder(store.local_address(), to)
                .subject(subject)
                .body(body)
                .spam(spam, spam_score)
                .build();
            let created = store
                .try_create(&draft)
                .await
                .context("Failed to create message")?;
            println!("{}", render::format_row(&created));
        }
    }

    Ok(())
}
