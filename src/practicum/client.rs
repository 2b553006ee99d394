use std::time::Duration;

use reqwest::Client;

use super::error::FetchError;
use super::types::HomeworkBatch;

const API_URL: &str = "https://praktikum.yandex.ru";
const STATUSES_PATH: &str = "/api/user_api/homework_statuses/";

/// Source of review batches, keyed by a `from_date` cursor.
///
/// The watcher is generic over this so tests can drive it without a server.
pub trait ReviewSource {
    async fn fetch(&self, from_date: i64) -> Result<HomeworkBatch, FetchError>;
}

pub struct PracticumClient {
    token: String,
    client: Client,
    base_url: String,
}

impl PracticumClient {
    pub fn new(token: String) -> Self {
        Self::with_base_url(token, API_URL.to_string())
    }

    /// Create a client pointing at a custom base URL (useful for testing).
    pub fn with_base_url(token: String, base_url: String) -> Self {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(30))
            .build()
            .expect("failed to build HTTP client");
        Self {
            token,
            client,
            base_url,
        }
    }
}

impl ReviewSource for PracticumClient {
    /// One GET against the homework-statuses endpoint. No internal retry;
    /// the poll loop decides when to try again.
    async fn fetch(&self, from_date: i64) -> Result<HomeworkBatch, FetchError> {
        let url = format!("{}{}", self.base_url, STATUSES_PATH);
        let response = self
            .client
            .get(&url)
            .header("Authorization", format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(FetchError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        // A malformed body surfaces as Unavailable via the reqwest error.
        let batch = response.json::<HomeworkBatch>().await?;
        Ok(batch)
    }
}
