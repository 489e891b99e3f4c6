// src/models/mod.rs

//! Domain models for the homework bot.

mod config;
mod homework;
mod status;

pub use config::{ApiConfig, Config, Credentials, LoggingConfig, PollingConfig, TelegramConfig};
pub use homework::{HomeworkBatch, HomeworkEntry};
pub use status::HomeworkStatus;
