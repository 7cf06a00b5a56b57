//! Logging using simplelog
//!
//! Logs go to stderr unless `log_file` is configured, so stdout stays free for
//! state output.

use anyhow::{Context, Result};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

/// Level from RUST_LOG, Info when unset or unknown
fn level_from_env() -> LevelFilter {
    std::env::var("RUST_LOG")
        .map(|v| parse_level(&v))
        .unwrap_or(LevelFilter::Info)
}

fn parse_level(value: &str) -> LevelFilter {
    match value.to_lowercase().as_str() {
        "off" => LevelFilter::Off,
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => LevelFilter::Info,
    }
}

/// Initialize logging to `log_file`, or stderr when `None`
pub fn init(log_file: Option<&str>) -> Result<()> {
    let level = level_from_env();

    // Configure simplelog with timestamps
    let config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_time_offset_to_local()
        .unwrap_or_else(|c| c) // Fallback if local time offset fails
        .build();

    match log_file {
        Some(path) => {
            let file =
                File::create(path).with_context(|| format!("Failed to create log file {}", path))?;
            WriteLogger::init(level, config, file).context("Failed to initialize logger")?;
        }
        None => {
            WriteLogger::init(level, config, std::io::stderr())
                .context("Failed to initialize logger")?;
        }
    }

    Ok(())
}
