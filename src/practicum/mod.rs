pub mod client;
pub mod error;
pub mod types;

pub use client::{PracticumClient, ReviewSource};
pub use error::FetchError;
pub use types::{Homework, HomeworkBatch};
