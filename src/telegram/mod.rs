pub mod client;
pub mod error;
pub mod types;

pub use client::{MessageSender, TelegramClient};
pub use error::TelegramError;
