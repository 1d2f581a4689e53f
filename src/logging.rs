use crate::config::Config;
use anyhow::{Context, Result};
use tracing_appender::rolling;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

pub enum LogOutput {
    /// Append to `todo-widget.log` in the configured log directory. Used while
    /// the TUI owns the terminal.
    File,
    Stderr,
}

fn env_filter(config: &Config) -> Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(&config.log_level)
            .with_context(|| format!("Invalid log_level '{}'", config.log_level)),
    }
}

/// Installs the global tracing subscriber. `RUST_LOG` overrides the configured level.
pub fn init_tracing(config: &Config, output: LogOutput) -> Result<()> {
    let filter = env_filter(config)?;

    match output {
        LogOutput::File => {
            let log_dir = config.resolved_log_dir()?;
            std::fs::create_dir_all(&log_dir)
                .with_context(|| format!("Failed to create log directory: {}", log_dir.display()))?;

            let file_appender = rolling::never(&log_dir, "todo-widget.log");

            tracing_subscriber::registry()
                .with(
                    fmt::Layer::new()
                        .with_writer(file_appender)
                        .with_ansi(false)
                        .with_file(true)
                        .with_line_number(true),
                )
                .with(filter)
                .try_init()
                .context("Failed to set global tracing subscriber")?;

            tracing::debug!(
                path = %log_dir.join("todo-widget.log").display(),
                "Tracing initialized with file output"
            );
        }
        LogOutput::Stderr => {
            tracing_subscriber::registry()
                .with(fmt::Layer::new().with_writer(std::io::stderr).with_target(false))
                .with(filter)
                .try_init()
                .context("Failed to set global tracing subscriber")?;
        }
    }
    Ok(())
}
