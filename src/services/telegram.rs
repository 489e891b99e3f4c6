// src/services/telegram.rs

//! Chat delivery over the Telegram Bot API.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Outbound messaging channel.
#[async_trait]
pub trait ChatChannel: Send + Sync {
    /// Send a plain text message to `chat_id`.
    async fn send_message(&self, chat_id: &str, text: &str) -> Result<()>;
}

/// `sendMessage` request body.
#[derive(Debug, Serialize)]
struct SendMessage<'a> {
    chat_id: &'a str,
    text: &'a str,
}

/// Envelope of every Bot API reply.
#[derive(Debug, Deserialize)]
struct BotReply {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
}

/// Telegram bot bound to a single token.
pub struct TelegramChannel {
    client: Client,
    api_base: String,
    token: String,
}

impl TelegramChannel {
    pub fn new(client: Client, api_base: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            client,
            api_base: api_base.into().trim_end_matches('/').to_string(),
            token: token.into(),
        }
    }

    fn method_url(&self, method: &str) -> String {
        format!("{}/bot{}/{}", self.api_base, self.token, method)
    }
}

#[async_trait]
impl ChatChannel for TelegramChannel {
    async fn send_message(&self, chat_id: &str, text: &str) -> Result<()> {
        let response = self
            .client
            .post(self.method_url("sendMessage"))
            .json(&SendMessage { chat_id, text })
            .send()
            .await
            .map_err(|e| AppError::delivery(e.without_url()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AppError::delivery(e.without_url()))?;
        let reply: Option<BotReply> = serde_json::from_str(&body).ok();

        match reply {
            Some(BotReply { ok: true, .. }) if status.is_success() => Ok(()),
            Some(BotReply {
                description: Some(description),
                ..
            }) => Err(AppError::delivery(format!("{status}: {description}"))),
            _ => Err(AppError::delivery(format!("unexpected reply ({status})"))),
        }
    }
}
