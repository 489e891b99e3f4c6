// src/error.rs

//! Unified error handling for the homework bot.

use std::fmt;

use thiserror::Error;

/// Result type alias for bot operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// The status endpoint answered with a non-success HTTP code
    #[error("Эндпоинт {endpoint} недоступен. Код ответа API: {status}")]
    EndpointUnavailable { endpoint: String, status: u16 },

    /// Network-level failure (connection refused, timeout, DNS)
    #[error("Ошибка запроса к API: {0}")]
    Transport(#[from] reqwest::Error),

    /// Payload is missing the `homeworks` key or has the wrong shape
    #[error("Некорректный ответ API: {0}")]
    MalformedResponse(String),

    /// A homework entry lacks `status` or `homework_name`
    #[error("Неопределённый статус: {0}")]
    UndefinedStatus(String),

    /// A homework entry carries a status outside the known set
    #[error("Неизвестный статус работы: {0}")]
    UnknownStatusValue(String),

    /// The chat channel refused or failed to deliver a message
    #[error("Сообщение в Telegram не отправлено: {0}")]
    NotificationDelivery(String),

    /// Required environment variables are absent
    #[error("Отсутствуют обязательные переменные окружения: {}", .0.join(", "))]
    MissingConfiguration(Vec<String>),

    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// URL parsing failed
    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    /// Configuration value out of range
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Create an endpoint-unavailable error.
    pub fn endpoint_unavailable(endpoint: impl Into<String>, status: u16) -> Self {
        Self::EndpointUnavailable {
            endpoint: endpoint.into(),
            status,
        }
    }

    /// Create a malformed-response error.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedResponse(message.into())
    }

    /// Create an undefined-status error.
    pub fn undefined_status(message: impl Into<String>) -> Self {
        Self::UndefinedStatus(message.into())
    }

    /// Create a notification delivery error.
    pub fn delivery(message: impl fmt::Display) -> Self {
        Self::NotificationDelivery(message.to_string())
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}
