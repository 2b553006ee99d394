//! Интерфейс командной строки на базе clap.
//!
//! Подкоманд нет: процесс делает ровно одну вещь. Флаги только служебные —
//! путь к файлу настроек и уровень логирования.

use std::path::PathBuf;

use clap::Parser;

/// Бот-уведомитель о статусе ревью домашних работ Практикума.
#[derive(Debug, Parser)]
#[command(name = "homework-bot", version, about)]
pub struct Cli {
    /// Путь к файлу настроек (необязательному).
    #[arg(long, default_value = "homework-bot.toml")]
    pub config: PathBuf,

    /// Подробный вывод (уровень debug вместо info).
    #[arg(long, short, default_value_t = false)]
    pub verbose: bool,
}
