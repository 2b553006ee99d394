//! Ошибки доставки через Telegram Bot API.

use thiserror::Error;

/// Ошибки одного вызова Bot API.
#[derive(Debug, Error)]
pub enum TelegramError {
    /// Сетевой сбой до получения ответа от Bot API.
    #[error("Telegram API unreachable: {0}")]
    Network(#[from] reqwest::Error),

    /// Bot API ответил отказом (`ok: false` или не-2xx статус).
    #[error("Telegram API refused the request: {description}")]
    Api { description: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_display() {
        let err = TelegramError::Api {
            description: "Unauthorized".into(),
        };
        assert_eq!(
            err.to_string(),
            "Telegram API refused the request: Unauthorized"
        );
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TelegramError>();
    }
}
