use std::time::Duration;

use reqwest::Client;

use super::error::TelegramError;
use super::types::{ApiResponse, BotProfile, SendMessageRequest};

const API_URL: &str = "https://api.telegram.org";

/// Delivery channel for notification text.
///
/// The watcher only needs `send_message`; the concrete client adds `get_me`
/// for the startup credential check.
pub trait MessageSender {
    async fn send_message(&self, text: &str) -> Result<(), TelegramError>;
}

pub struct TelegramClient {
    token: String,
    chat_id: String,
    client: Client,
    base_url: String,
}

impl TelegramClient {
    pub fn new(token: String, chat_id: String) -> Self {
        Self::with_base_url(token, chat_id, API_URL.to_string())
    }

    /// Create a client pointing at a custom base URL (useful for testing).
    pub fn with_base_url(token: String, chat_id: String, base_url: String) -> Self {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(30))
            .build()
            .expect("failed to build HTTP client");
        Self {
            token,
            chat_id,
            client,
            base_url,
        }
    }

    fn method_url(&self, method: &str) -> String {
        format!("{}/bot{}/{}", self.base_url, self.token, method)
    }

    /// Validate the bot token against `getMe`. Called once at startup; a
    /// failure here means the notification channel cannot be brought up at
    /// all and the process must not enter the poll loop.
    pub async fn get_me(&self) -> Result<BotProfile, TelegramError> {
        let response = self.client.get(self.method_url("getMe")).send().await?;
        let status = response.status();
        let body = response.json::<ApiResponse<BotProfile>>().await;

        match body {
            Ok(envelope) if envelope.ok => envelope.result.ok_or(TelegramError::Api {
                description: "getMe returned ok without a result".to_string(),
            }),
            Ok(envelope) => Err(TelegramError::Api {
                description: envelope
                    .description
                    .unwrap_or_else(|| format!("status {status}")),
            }),
            Err(e) => Err(TelegramError::Network(e)),
        }
    }
}

impl MessageSender for TelegramClient {
    /// Fire-and-forget send to the preconfigured chat. No delivery
    /// confirmation is polled afterwards.
    async fn send_message(&self, text: &str) -> Result<(), TelegramError> {
        let req = SendMessageRequest {
            chat_id: &self.chat_id,
            text,
        };
        let response = self
            .client
            .post(self.method_url("sendMessage"))
            .json(&req)
            .send()
            .await?;

        let status = response.status();
        let envelope = response
            .json::<ApiResponse<serde_json::Value>>()
            .await
            .map_err(TelegramError::Network)?;

        if !envelope.ok {
            return Err(TelegramError::Api {
                description: envelope
                    .description
                    .unwrap_or_else(|| format!("status {status}")),
            });
        }
        Ok(())
    }
}
