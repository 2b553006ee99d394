//! Типы данных ответа API домашних работ Практикума.
//!
//! Структуры повторяют JSON эндпоинта `homework_statuses`. Поля записи
//! домашней работы объявлены как `Option`, чтобы неполная запись доходила
//! до классификатора статуса, а не падала на этапе десериализации.

use serde::{Deserialize, Serialize};

/// Одна запись о домашней работе из ленты ревью.
///
/// Оба поля опциональны: API не гарантирует их наличие, и отсутствие
/// поля — ошибка классификации, а не ошибка запроса.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Homework {
    /// Название работы, подставляется в текст уведомления.
    pub homework_name: Option<String>,
    /// Сырой статус ревью ("approved", "reviewing", "rejected").
    pub status: Option<String>,
}

/// Ответ эндпоинта `homework_statuses`.
///
/// Список работ упорядочен от самой свежей к старой (предположение
/// об API, источником не подтверждено) — потребляется только первый элемент.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HomeworkBatch {
    /// Работы, проверенные после запрошенной отметки времени.
    pub homeworks: Vec<Homework>,
    /// Серверная отметка времени; становится курсором следующего опроса.
    pub current_date: i64,
}
