//! Ошибки клиента API Практикума.
//!
//! [`FetchError`] разделяет два класса отказа: сеть недоступна
//! ([`Unavailable`](FetchError::Unavailable)) и сервис ответил, но отказал
//! ([`Rejected`](FetchError::Rejected)). Display выводится через `thiserror`.

use thiserror::Error;

/// Ошибки одного запроса статусов домашних работ.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Сетевой сбой до получения ответа (DNS, соединение, таймаут),
    /// а также невалидный JSON в теле — для вызывающего кода это один
    /// и тот же класс «сервис недоступен».
    #[error("homework API unreachable: {0}")]
    Unavailable(#[from] reqwest::Error),

    /// Сервис ответил не-2xx статусом (просроченный токен, 5xx и т.п.).
    #[error("homework API rejected the request (status {status}): {message}")]
    Rejected { status: u16, message: String },
}
