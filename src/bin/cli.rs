//! Homework bot CLI
//!
//! Long-running entry point. Secrets come from the environment (or `.env`),
//! everything else from an optional TOML file.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use homework_bot::{
    error::Result,
    logging,
    models::Config,
    pipeline::{
        CycleOutcome,
        startup::{self, Collaborators},
    },
};

/// Homework review status notifier
#[derive(Parser, Debug)]
#[command(
    name = "homework-bot",
    version,
    about = "Reports homework review status changes to Telegram"
)]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, default_value = "homework_bot.toml")]
    config: PathBuf,

    /// Path to a dotenv file with API_TOKEN, BOT_TOKEN and CHAT_ID
    #[arg(long, default_value = ".env")]
    env_file: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Copy)]
enum Command {
    /// Poll forever (default)
    Run,
    /// Run a single cycle and exit
    Once,
    /// Validate configuration and credentials without network access
    Check,
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = dotenvy::from_path(&cli.env_file) {
        if !e.not_found() {
            eprintln!("Failed to read {}: {}", cli.env_file.display(), e);
        }
    }

    let config = load_config(&cli.config);
    let level = if cli.verbose {
        "debug"
    } else {
        config.logging.level.as_str()
    };
    let log_file = (!config.logging.file.is_empty()).then(|| Path::new(&config.logging.file));
    if let Err(e) = logging::init(level, log_file) {
        eprintln!("{}", e);
        return ExitCode::FAILURE;
    }

    match run(cli.command.unwrap_or(Command::Run), config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

/// Load the config file, keeping defaults when it does not exist or is
/// invalid. Runs before the logger exists, so problems go to stderr.
fn load_config(path: &Path) -> Config {
    if !path.exists() {
        return Config::default();
    }
    Config::load(path).unwrap_or_else(|e| {
        eprintln!(
            "Config load failed from {}: {}. Using defaults.",
            path.display(),
            e
        );
        Config::default()
    })
}

fn env_lookup(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

async fn run(command: Command, config: Config) -> Result<()> {
    if let Command::Check = command {
        let credentials = startup::check(&config, env_lookup)?;
        log::info!("Endpoint: {}", config.api.endpoint);
        log::info!("Chat: {}", credentials.chat_id);
        log::info!("Interval: {}s", config.polling.retry_secs);
        log::info!("Configuration OK");
        return Ok(());
    }

    let mut poller = startup::startup(&config, env_lookup, |credentials| {
        Collaborators::http(&config, credentials)
    })?;

    match command {
        Command::Once => match poller.run_cycle().await {
            CycleOutcome::Failed { error, .. } => Err(error),
            outcome => {
                log::info!("Cycle finished: {:?}", outcome);
                Ok(())
            }
        },
        _ => {
            poller.run().await;
            Ok(())
        }
    }
}
