//! Конфигурация бота: TOML-файл для настроек, окружение для секретов.
//!
//! Struct [`BotConfig`] читает необязательный `homework-bot.toml` с
//! интервалами, адресами API и путём лог-файла; отсутствующие значения
//! получают дефолты. Токены и идентификатор чата приходят только из
//! переменных окружения `PRAKTIKUM_TOKEN`, `TELEGRAM_TOKEN`,
//! `TELEGRAM_CHAT_ID` и в файл не попадают.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Конфигурация верхнего уровня.
#[derive(Debug, Clone, Deserialize)]
pub struct BotConfig {
    /// Токен API Практикума (только из окружения).
    #[serde(skip)]
    pub practicum_token: String,

    /// Токен Telegram-бота (только из окружения).
    #[serde(skip)]
    pub telegram_token: String,

    /// Чат-получатель уведомлений (только из окружения).
    #[serde(skip)]
    pub chat_id: String,

    /// Пауза после успешного цикла, в секундах.
    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,

    /// Пауза после неудачного цикла, в секундах.
    #[serde(default = "default_retry_delay_secs")]
    pub retry_delay_secs: u64,

    /// Базовый адрес API Практикума.
    #[serde(default = "default_practicum_base_url")]
    pub practicum_base_url: String,

    /// Базовый адрес Telegram Bot API.
    #[serde(default = "default_telegram_base_url")]
    pub telegram_base_url: String,

    /// Путь лог-файла (append-only, дублирует консольный вывод).
    #[serde(default = "default_log_file")]
    pub log_file: String,
}

// Пауза после успеха: 5 минут.
fn default_poll_interval_secs() -> u64 {
    300
}

// Пауза после ошибки: 5 секунд.
fn default_retry_delay_secs() -> u64 {
    5
}

fn default_practicum_base_url() -> String {
    "https://praktikum.yandex.ru".to_string()
}

fn default_telegram_base_url() -> String {
    "https://api.telegram.org".to_string()
}

fn default_log_file() -> String {
    "homework_bot_log.log".to_string()
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            practicum_token: String::new(),
            telegram_token: String::new(),
            chat_id: String::new(),
            poll_interval_secs: default_poll_interval_secs(),
            retry_delay_secs: default_retry_delay_secs(),
            practicum_base_url: default_practicum_base_url(),
            telegram_base_url: default_telegram_base_url(),
            log_file: default_log_file(),
        }
    }
}

impl BotConfig {
    /// Читает файл настроек (если есть) и обязательные секреты из окружения.
    pub fn load(path: &Path) -> Result<Self> {
        let mut config = if path.exists() {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            toml::from_str::<BotConfig>(&contents)
                .with_context(|| format!("failed to parse {}", path.display()))?
        } else {
            Self::default()
        };

        config.practicum_token = required_env("PRAKTIKUM_TOKEN")?;
        config.telegram_token = required_env("TELEGRAM_TOKEN")?;
        config.chat_id = required_env("TELEGRAM_CHAT_ID")?;

        Ok(config)
    }
}

fn required_env(name: &'static str) -> Result<String> {
    std::env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .with_context(|| format!("{name} environment variable is required"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let config = BotConfig::default();
        assert_eq!(config.poll_interval_secs, 300);
        assert_eq!(config.retry_delay_secs, 5);
        assert_eq!(config.practicum_base_url, "https://praktikum.yandex.ru");
        assert_eq!(config.telegram_base_url, "https://api.telegram.org");
        assert_eq!(config.log_file, "homework_bot_log.log");
        assert!(config.practicum_token.is_empty());
    }

    #[test]
    fn deserialize_partial_toml() {
        let toml_str = r#"
            poll_interval_secs = 60
            log_file = "/var/log/homework-bot.log"
        "#;
        let config: BotConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.poll_interval_secs, 60);
        assert_eq!(config.log_file, "/var/log/homework-bot.log");
        assert_eq!(config.retry_delay_secs, 5);
        assert_eq!(config.telegram_base_url, "https://api.telegram.org");
    }

    #[test]
    fn tokens_are_never_read_from_toml() {
        // Секреты в файле игнорируются, даже если кто-то их туда положил.
        let toml_str = r#"
            practicum_token = "leaked"
            telegram_token = "leaked"
            chat_id = "leaked"
        "#;
        let config: BotConfig = toml::from_str(toml_str).unwrap();
        assert!(config.practicum_token.is_empty());
        assert!(config.telegram_token.is_empty());
        assert!(config.chat_id.is_empty());
    }
}
