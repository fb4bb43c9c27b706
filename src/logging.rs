use std::{fs::OpenOptions, path::PathBuf, sync::Mutex};

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;

/// Environment variable holding the log filter, e.g. `weatherflow=debug`.
pub const LOG_ENV: &str = "WEATHERFLOW_LOG";
const DEFAULT_FILTER: &str = "warn";

/// Where log lines go. The dashboard owns the terminal, so interactive runs
/// never log to stdout or stderr.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
    Discard,
}

impl LogTarget {
    #[must_use]
    pub fn for_cli(cli: &Cli) -> Self {
        match (&cli.log_file, cli.one_shot) {
            (Some(path), _) => Self::File(path.clone()),
            (None, true) => Self::Stderr,
            (None, false) => Self::Discard,
        }
    }
}

pub fn init(target: &LogTarget) -> Result<()> {
    let builder = tracing_subscriber::fmt().with_env_filter(env_filter());
    match target {
        LogTarget::Discard => {}
        LogTarget::Stderr => {
            let _ = builder.with_writer(std::io::stderr).try_init();
        }
        LogTarget::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("failed to open log file {}", path.display()))?;
            let _ = builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init();
        }
    }
    Ok(())
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}
