// src/logging.rs

//! Log output setup.
//!
//! Lines look like `2026-01-31 12:00:00,123 - INFO - message` and go to
//! stderr and, when configured, to a log file truncated on start.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use chrono::Local;
use env_logger::{Builder, Env, Target};
use log::{Level, LevelFilter};

use crate::error::{AppError, Result};

/// Parse a level name, falling back to `Info` for unknown input.
pub fn level_filter(name: &str) -> LevelFilter {
    name.trim().parse().unwrap_or(LevelFilter::Info)
}

/// Format a log line with timestamp and level.
pub fn format_line(level: Level, message: &str) -> String {
    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S,%3f");
    format!("{} - {} - {}", timestamp, level, message)
}

/// Writer duplicating output to stderr and a file.
struct Tee {
    file: File,
}

impl Write for Tee {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        io::stderr().write_all(buf)?;
        self.file.write_all(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stderr().flush()?;
        self.file.flush()
    }
}

/// Install the global logger. `RUST_LOG` overrides `level`.
pub fn init(level: &str, file: Option<&Path>) -> Result<()> {
    let default_level = level_filter(level).to_string().to_lowercase();
    let mut builder = Builder::from_env(Env::default().default_filter_or(default_level));
    builder.format(|buf, record| {
        writeln!(
            buf,
            "{}",
            format_line(record.level(), &record.args().to_string())
        )
    });

    if let Some(path) = file {
        let file = File::create(path)?;
        builder.target(Target::Pipe(Box::new(Tee { file })));
    }

    builder
        .try_init()
        .map_err(|e| AppError::config(format!("logger already initialised: {e}")))
}
