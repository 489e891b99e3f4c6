// src/services/mod.rs

//! External collaborators: the review API and the chat channel.

pub mod api;
pub mod notifier;
pub mod telegram;

pub use api::{PracticumClient, StatusApi};
pub use notifier::Notifier;
pub use telegram::{ChatChannel, TelegramChannel};
