//! Application configuration structures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::models::HomeworkStatus;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Review API settings
    #[serde(default)]
    pub api: ApiConfig,

    /// Chat delivery settings
    #[serde(default)]
    pub telegram: TelegramConfig,

    /// Poll interval and initial state
    #[serde(default)]
    pub polling: PollingConfig,

    /// Log sink settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        url::Url::parse(&self.api.endpoint)?;
        url::Url::parse(&self.telegram.api_base)?;
        if self.api.user_agent.trim().is_empty() {
            return Err(AppError::config("api.user_agent is empty"));
        }
        if self.api.timeout_secs == 0 {
            return Err(AppError::config("api.timeout_secs must be > 0"));
        }
        if self.polling.retry_secs == 0 {
            return Err(AppError::config("polling.retry_secs must be > 0"));
        }
        self.polling.initial_status.parse::<HomeworkStatus>()?;
        Ok(())
    }
}

/// Review API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Homework statuses endpoint
    #[serde(default = "defaults::endpoint")]
    pub endpoint: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,

    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: defaults::endpoint(),
            timeout_secs: defaults::timeout(),
            user_agent: defaults::user_agent(),
        }
    }
}

/// Telegram Bot API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelegramConfig {
    /// Base URL of the Bot API
    #[serde(default = "defaults::telegram_api_base")]
    pub api_base: String,
}

impl Default for TelegramConfig {
    fn default() -> Self {
        Self {
            api_base: defaults::telegram_api_base(),
        }
    }
}

/// Polling loop settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PollingConfig {
    /// Pause between cycles in seconds
    #[serde(default = "defaults::retry_secs")]
    pub retry_secs: u64,

    /// Status assumed before the first poll
    #[serde(default = "defaults::initial_status")]
    pub initial_status: String,
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            retry_secs: defaults::retry_secs(),
            initial_status: defaults::initial_status(),
        }
    }
}

/// Log output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default level filter when RUST_LOG is unset
    #[serde(default = "defaults::log_level")]
    pub level: String,

    /// Log file, truncated on start. Empty disables the file sink.
    #[serde(default = "defaults::log_file")]
    pub file: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: defaults::log_level(),
            file: defaults::log_file(),
        }
    }
}

/// Secrets read from the environment.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// OAuth token for the review API
    pub api_token: String,
    /// Telegram bot token
    pub bot_token: String,
    /// Destination chat
    pub chat_id: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_token", &"***")
            .field("bot_token", &"***")
            .field("chat_id", &self.chat_id)
            .finish()
    }
}

/// Variable names, primary first, then the legacy fallback.
const API_TOKEN_VARS: [&str; 2] = ["API_TOKEN", "PRACTICUM_TOKEN"];
const BOT_TOKEN_VARS: [&str; 2] = ["BOT_TOKEN", "TELEGRAM_TOKEN"];
const CHAT_ID_VARS: [&str; 2] = ["CHAT_ID", "TELEGRAM_CHAT_ID"];

impl Credentials {
    /// Read credentials from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read credentials through an arbitrary lookup. Every missing value is
    /// logged before the combined error is returned.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |names: &[&str]| {
            names
                .iter()
                .filter_map(|name| lookup(*name))
                .find(|value| !value.trim().is_empty())
        };

        let api_token = read(&API_TOKEN_VARS[..]);
        let bot_token = read(&BOT_TOKEN_VARS[..]);
        let chat_id = read(&CHAT_ID_VARS[..]);

        match (api_token, bot_token, chat_id) {
            (Some(api_token), Some(bot_token), Some(chat_id)) => Ok(Self {
                api_token,
                bot_token,
                chat_id,
            }),
            (api_token, bot_token, chat_id) => {
                let missing: Vec<String> = [
                    (api_token.is_none(), API_TOKEN_VARS[0]),
                    (bot_token.is_none(), BOT_TOKEN_VARS[0]),
                    (chat_id.is_none(), CHAT_ID_VARS[0]),
                ]
                .into_iter()
                .filter(|(absent, _)| *absent)
                .map(|(_, name)| name.to_string())
                .collect();

                for name in &missing {
                    log::error!(
                        "CRITICAL: Программа остановлена, т.к. отсутствует обязательная переменная: {}",
                        name
                    );
                }
                Err(AppError::MissingConfiguration(missing))
            }
        }
    }
}

mod defaults {
    pub fn endpoint() -> String {
        "https://practicum.yandex.ru/api/user_api/homework_statuses/".into()
    }
    pub fn timeout() -> u64 {
        30
    }
    pub fn user_agent() -> String {
        "Mozilla/5.0 (compatible; homework-bot/0.1)".into()
    }
    pub fn telegram_api_base() -> String {
        "https://api.telegram.org".into()
    }
    pub fn retry_secs() -> u64 {
        600
    }
    pub fn initial_status() -> String {
        "reviewing".into()
    }
    pub fn log_level() -> String {
        "debug".into()
    }
    pub fn log_file() -> String {
        "program.log".into()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::io::Write;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn validate_default_config_ok() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.polling.retry_secs, 600);
        assert_eq!(config.polling.initial_status, "reviewing");
    }

    #[test]
    fn validate_rejects_zero_retry() {
        let mut config = Config::default();
        config.polling.retry_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_bad_endpoint_and_status() {
        let mut config = Config::default();
        config.api.endpoint = "not a url".to_string();
        assert!(matches!(config.validate(), Err(AppError::Url(_))));

        let mut config = Config::default();
        config.polling.initial_status = "pending".to_string();
        assert!(matches!(
            config.validate(),
            Err(AppError::UnknownStatusValue(_))
        ));
    }

    #[test]
    fn load_partial_toml_fills_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[polling]\nretry_secs = 30\n\n[logging]\nfile = \"\"").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.polling.retry_secs, 30);
        assert_eq!(config.polling.initial_status, "reviewing");
        assert!(config.logging.file.is_empty());
        assert_eq!(config.api.endpoint, defaults::endpoint());
    }

    #[test]
    fn load_rejects_malformed_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[polling\nretry_secs = ").unwrap();
        assert!(matches!(Config::load(file.path()), Err(AppError::Toml(_))));
    }

    #[test]
    fn credentials_all_present() {
        let creds = Credentials::from_lookup(lookup(&[
            ("API_TOKEN", "a"),
            ("BOT_TOKEN", "b"),
            ("CHAT_ID", "42"),
        ]))
        .unwrap();
        assert_eq!(creds.api_token, "a");
        assert_eq!(creds.bot_token, "b");
        assert_eq!(creds.chat_id, "42");
    }

    #[test]
    fn credentials_legacy_names_accepted() {
        let creds = Credentials::from_lookup(lookup(&[
            ("PRACTICUM_TOKEN", "a"),
            ("TELEGRAM_TOKEN", "b"),
            ("TELEGRAM_CHAT_ID", "42"),
        ]))
        .unwrap();
        assert_eq!(creds.api_token, "a");
    }

    #[test]
    fn credentials_report_every_missing_value() {
        let err = Credentials::from_lookup(lookup(&[("BOT_TOKEN", "b"), ("CHAT_ID", "  ")]))
            .unwrap_err();
        match err {
            AppError::MissingConfiguration(missing) => {
                assert_eq!(missing, vec!["API_TOKEN".to_string(), "CHAT_ID".to_string()]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn credentials_debug_hides_tokens() {
        let creds = Credentials {
            api_token: "secret-api".into(),
            bot_token: "secret-bot".into(),
            chat_id: "42".into(),
        };
        let shown = format!("{:?}", creds);
        assert!(!shown.contains("secret"));
        assert!(shown.contains("42"));
    }
}
