use thiserror::Error;

use crate::practicum::FetchError;
use crate::status::StatusError;
use crate::telegram::TelegramError;

/// Everything that can go wrong inside one poll cycle.
///
/// None of these are fatal: the watcher reports them to the chat
/// (best effort), logs them, and retries after the short delay.
#[derive(Debug, Error)]
pub enum BotError {
    #[error("fetching homework statuses failed: {0}")]
    Fetch(#[from] FetchError),

    #[error("classifying a homework record failed: {0}")]
    Status(#[from] StatusError),

    #[error("delivering a notification failed: {0}")]
    Delivery(#[from] TelegramError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_wraps_with_context() {
        let err = BotError::from(StatusError::Unknown("draft".into()));
        assert_eq!(
            err.to_string(),
            "classifying a homework record failed: unknown homework status \"draft\""
        );
    }

    #[test]
    fn fetch_error_wraps_with_context() {
        let err = BotError::from(FetchError::Rejected {
            status: 503,
            message: "maintenance".into(),
        });
        assert!(
            err.to_string()
                .starts_with("fetching homework statuses failed:")
        );
        assert!(err.to_string().contains("503"));
    }
}
