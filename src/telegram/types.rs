//! Типы запросов и ответов Telegram Bot API.
//!
//! Покрыт минимум, который потребляет бот: конверт ответа с флагом `ok`,
//! тело `sendMessage` и профиль бота из `getMe`.

use serde::{Deserialize, Serialize};

/// Тело запроса метода `sendMessage`.
#[derive(Debug, Clone, Serialize)]
pub struct SendMessageRequest<'a> {
    /// Идентификатор чата-получателя (число или @username в виде строки).
    pub chat_id: &'a str,
    /// Текст уведомления.
    pub text: &'a str,
}

/// Стандартный конверт ответа Bot API.
///
/// При `ok: false` поле `description` содержит текст ошибки, `result`
/// отсутствует.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    pub ok: bool,
    pub result: Option<T>,
    pub description: Option<String>,
}

/// Профиль бота из `getMe`; используется только при проверке токена на старте.
#[derive(Debug, Clone, Deserialize)]
pub struct BotProfile {
    pub id: i64,
    pub username: Option<String>,
}
