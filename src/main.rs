mod cli;
mod config;
mod error;
mod logging;
mod practicum;
mod status;
mod telegram;
mod watcher;

use std::time::Duration;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use tracing::{debug, error, info};

use cli::Cli;
use config::BotConfig;
use practicum::PracticumClient;
use telegram::TelegramClient;
use watcher::Watcher;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = BotConfig::load(&cli.config)?;
    logging::init(config.log_file.as_ref(), cli.verbose)?;
    debug!("logging configured, log file: {}", config.log_file);

    let telegram = TelegramClient::with_base_url(
        config.telegram_token.clone(),
        config.chat_id.clone(),
        config.telegram_base_url.clone(),
    );

    // An invalid bot credential is fatal: the notification channel is the
    // whole point of the process, and it is also the only way to report
    // later failures. No chat message is attempted here.
    let profile = match telegram.get_me().await {
        Ok(profile) => profile,
        Err(e) => {
            error!("bot startup failed, token rejected: {e}");
            return Err(e).context("Telegram bot could not be initialized");
        }
    };
    debug!(
        "bot authorized as @{} (id {})",
        profile.username.as_deref().unwrap_or("?"),
        profile.id
    );

    let practicum = PracticumClient::with_base_url(
        config.practicum_token.clone(),
        config.practicum_base_url.clone(),
    );

    // Start from "now": verdicts produced while the process was down are
    // skipped on purpose, there is no persisted cursor.
    let cursor = Utc::now().timestamp();
    info!(
        cursor,
        poll_interval_secs = config.poll_interval_secs,
        "homework watcher started"
    );

    let mut watcher = Watcher::new(
        practicum,
        telegram,
        cursor,
        Duration::from_secs(config.poll_interval_secs),
        Duration::from_secs(config.retry_delay_secs),
    );
    watcher.run().await;

    Ok(())
}
