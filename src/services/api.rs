// src/services/api.rs

//! Review status API client.
//!
//! Issues the incremental `from_date` query and classifies failures.
//! Retrying is left to the polling loop.

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::AUTHORIZATION;
use serde_json::Value;

use crate::error::{AppError, Result};

/// Source of homework status payloads.
#[async_trait]
pub trait StatusApi: Send + Sync {
    /// Fetch every status change since `from_date` (unix seconds).
    async fn fetch(&self, from_date: i64) -> Result<Value>;
}

/// HTTP client for the Practicum homework statuses endpoint.
pub struct PracticumClient {
    client: Client,
    endpoint: String,
    token: String,
}

impl PracticumClient {
    pub fn new(client: Client, endpoint: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            token: token.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl StatusApi for PracticumClient {
    async fn fetch(&self, from_date: i64) -> Result<Value> {
        log::debug!("Requesting {} from_date={}", self.endpoint, from_date);

        let response = self
            .client
            .get(&self.endpoint)
            .header(AUTHORIZATION, format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .send()
            .await
            .map_err(|e| {
                log::error!("Ошибка запроса к API: {}", e);
                AppError::Transport(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let error = AppError::endpoint_unavailable(&self.endpoint, status.as_u16());
            log::error!("{}", error);
            return Err(error);
        }

        let body = response.text().await.map_err(|e| {
            log::error!("Ошибка чтения ответа API: {}", e);
            AppError::Transport(e)
        })?;
        serde_json::from_str(&body).map_err(|e| {
            let error = AppError::malformed(format!("тело ответа не является JSON: {e}"));
            log::error!("{}", error);
            error
        })
    }
}
