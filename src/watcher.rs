use std::time::Duration;

use tokio::time::sleep;
use tracing::{debug, error, info, warn};

use crate::error::BotError;
use crate::practicum::ReviewSource;
use crate::status::compose_notification;
use crate::telegram::MessageSender;

/// Drives the fetch → classify → notify cycle forever.
///
/// Owns the cursor and both API clients; nothing here is global state.
/// The cursor only advances when a whole cycle succeeds, so a failed
/// cycle re-reads the same window on the next attempt.
pub struct Watcher<S, N> {
    source: S,
    notifier: N,
    cursor: i64,
    poll_interval: Duration,
    retry_delay: Duration,
}

/// What a successful cycle did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    /// A verdict was found and the notification was delivered.
    Notified,
    /// The batch was empty; only the cursor moved.
    Empty,
}

impl<S: ReviewSource, N: MessageSender> Watcher<S, N> {
    pub fn new(
        source: S,
        notifier: N,
        cursor: i64,
        poll_interval: Duration,
        retry_delay: Duration,
    ) -> Self {
        Self {
            source,
            notifier,
            cursor,
            poll_interval,
            retry_delay,
        }
    }

    /// Current cursor position (UNIX timestamp).
    pub fn cursor(&self) -> i64 {
        self.cursor
    }

    /// One fetch → classify → notify pass.
    ///
    /// Only the first record of the batch is consumed; the API reports
    /// most-recent-first. The cursor moves to the server timestamp after
    /// everything else succeeded, including delivery.
    pub async fn run_cycle(&mut self) -> Result<CycleOutcome, BotError> {
        let batch = self.source.fetch(self.cursor).await?;

        let outcome = match batch.homeworks.first() {
            Some(homework) => {
                let message = compose_notification(homework)?;
                self.notifier.send_message(&message).await?;
                info!("notification delivered: {message:?}");
                CycleOutcome::Notified
            }
            None => {
                debug!(cursor = self.cursor, "no new verdicts");
                CycleOutcome::Empty
            }
        };

        self.cursor = batch.current_date;
        Ok(outcome)
    }

    /// Poll forever. Never returns; the process is killed by the
    /// supervisor, there is no clean-shutdown path.
    pub async fn run(&mut self) {
        loop {
            let delay = match self.run_cycle().await {
                Ok(_) => self.poll_interval,
                Err(e) => {
                    error!("cycle failed: {e}");
                    self.report_failure(&e).await;
                    self.retry_delay
                }
            };
            sleep(delay).await;
        }
    }

    /// Best-effort chat report of a failed cycle. A failure of this send
    /// is only logged, so the loop always reaches its sleep.
    async fn report_failure(&self, error: &BotError) {
        let message = format!("Бот упал с ошибкой: {error}");
        if let Err(send_err) = self.notifier.send_message(&message).await {
            warn!("could not report the failure to the chat: {send_err}");
        }
    }
}
