// src/services/notifier.rs

//! Failure-isolating wrapper around a [`ChatChannel`].

use crate::services::ChatChannel;

/// Sends notifications to one fixed chat. Delivery failures are logged and
/// never returned to the caller.
pub struct Notifier {
    channel: Box<dyn ChatChannel>,
    chat_id: String,
}

impl Notifier {
    pub fn new(channel: Box<dyn ChatChannel>, chat_id: impl Into<String>) -> Self {
        Self {
            channel,
            chat_id: chat_id.into(),
        }
    }

    /// Deliver `message`; returns whether delivery succeeded.
    pub async fn notify(&self, message: &str) -> bool {
        match self.channel.send_message(&self.chat_id, message).await {
            Ok(()) => {
                log::info!("Отправлено сообщение в Telegram: {}", message);
                true
            }
            Err(e) => {
                log::error!("{}", e);
                false
            }
        }
    }
}
