//! Классификатор статуса ревью — из сырой записи в текст уведомления.
//!
//! Чистая функция без побочных эффектов. Статус вне известного набора —
//! ошибка, а не «по умолчанию зачтено»: молчаливый дефолт прятал бы
//! опечатки и новые статусы API.

use thiserror::Error;

use crate::practicum::Homework;

/// Запись не превратилась в уведомление.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StatusError {
    /// В записи нет обязательного поля.
    #[error("homework record is missing the `{0}` field")]
    MissingField(&'static str),

    /// Статус вне известного набора {rejected, reviewing, approved}.
    #[error("unknown homework status {0:?}")]
    Unknown(String),
}

/// Вердикт ревьюера, распознанный из поля `status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Rejected,
    Reviewing,
    Approved,
}

impl Verdict {
    fn from_status(status: &str) -> Option<Self> {
        match status {
            "rejected" => Some(Verdict::Rejected),
            "reviewing" => Some(Verdict::Reviewing),
            "approved" => Some(Verdict::Approved),
            _ => None,
        }
    }

    /// Текст вердикта, дословно как в уведомлениях Практикума.
    pub fn text(self) -> &'static str {
        match self {
            Verdict::Rejected => "К сожалению, в работе нашлись ошибки.",
            Verdict::Reviewing => "Работа взята в ревью.",
            Verdict::Approved => "Ревьюеру всё понравилось, работа зачтена!",
        }
    }
}

/// Собирает текст уведомления из записи о домашней работе.
pub fn compose_notification(homework: &Homework) -> Result<String, StatusError> {
    let name = homework
        .homework_name
        .as_deref()
        .ok_or(StatusError::MissingField("homework_name"))?;
    let status = homework
        .status
        .as_deref()
        .ok_or(StatusError::MissingField("status"))?;
    let verdict =
        Verdict::from_status(status).ok_or_else(|| StatusError::Unknown(status.to_string()))?;

    Ok(format!(
        "У вас проверили работу \"{name}\"!\n\n{}",
        verdict.text()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn homework(name: Option<&str>, status: Option<&str>) -> Homework {
        Homework {
            homework_name: name.map(str::to_string),
            status: status.map(str::to_string),
        }
    }

    #[test]
    fn approved_notification() {
        let msg = compose_notification(&homework(Some("Task1"), Some("approved"))).unwrap();
        assert_eq!(
            msg,
            "У вас проверили работу \"Task1\"!\n\nРевьюеру всё понравилось, работа зачтена!"
        );
    }

    #[test]
    fn rejected_notification() {
        let msg = compose_notification(&homework(Some("hw05"), Some("rejected"))).unwrap();
        assert!(msg.contains("hw05"));
        assert!(msg.contains("К сожалению, в работе нашлись ошибки."));
        assert!(!msg.contains("зачтена"));
    }

    #[test]
    fn reviewing_notification() {
        let msg = compose_notification(&homework(Some("hw06"), Some("reviewing"))).unwrap();
        assert!(msg.contains("Работа взята в ревью."));
        assert!(!msg.contains("ошибки"));
    }

    #[test]
    fn missing_name_is_malformed() {
        let err = compose_notification(&homework(None, Some("approved"))).unwrap_err();
        assert_eq!(err, StatusError::MissingField("homework_name"));
    }

    #[test]
    fn missing_status_is_malformed() {
        let err = compose_notification(&homework(Some("Task1"), None)).unwrap_err();
        assert_eq!(err, StatusError::MissingField("status"));
    }

    #[test]
    fn unknown_status_is_an_error_not_approved() {
        let err = compose_notification(&homework(Some("Task1"), Some("unknown_value"))).unwrap_err();
        assert_eq!(err, StatusError::Unknown("unknown_value".into()));
    }

    #[test]
    fn status_matching_is_exact() {
        // Case and whitespace variants are not silently accepted.
        assert!(compose_notification(&homework(Some("t"), Some("Approved"))).is_err());
        assert!(compose_notification(&homework(Some("t"), Some(" approved"))).is_err());
    }
}
