// src/pipeline/startup.rs

//! Startup gate: configuration and credentials are checked before any
//! collaborator is built or the loop is entered.

use crate::error::Result;
use crate::models::{Config, Credentials};
use crate::pipeline::PollingLoop;
use crate::services::{ChatChannel, Notifier, PracticumClient, StatusApi, TelegramChannel};
use crate::utils::http;

/// The loop's external collaborators.
pub struct Collaborators {
    pub api: Box<dyn StatusApi>,
    pub channel: Box<dyn ChatChannel>,
}

impl Collaborators {
    /// HTTP-backed review API and Telegram channel sharing one client.
    pub fn http(config: &Config, credentials: &Credentials) -> Result<Self> {
        let client = http::create_client(&config.api)?;
        let api = PracticumClient::new(
            client.clone(),
            &config.api.endpoint,
            &credentials.api_token,
        );
        let channel =
            TelegramChannel::new(client, &config.telegram.api_base, &credentials.bot_token);
        Ok(Self {
            api: Box::new(api),
            channel: Box::new(channel),
        })
    }
}

/// Validate `config` and read credentials through `lookup`.
pub fn check<L>(config: &Config, lookup: L) -> Result<Credentials>
where
    L: Fn(&str) -> Option<String>,
{
    config.validate()?;
    Credentials::from_lookup(lookup).inspect_err(|e| log::error!("CRITICAL: {}", e))
}

/// Build the polling loop. `connect` runs only once configuration and
/// credentials are complete.
pub fn startup<L, C>(config: &Config, lookup: L, connect: C) -> Result<PollingLoop>
where
    L: Fn(&str) -> Option<String>,
    C: FnOnce(&Credentials) -> Result<Collaborators>,
{
    let credentials = check(config, lookup)?;
    let Collaborators { api, channel } = connect(&credentials)?;
    let notifier = Notifier::new(channel, &credentials.chat_id);
    PollingLoop::new(api, notifier, &config.polling)
}
