//! Logging setup and filesystem locations

use anyhow::{anyhow, Result};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Where log output goes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// Append to [`log_file_path`]; used while the form owns the terminal
    File,
    Stderr,
}

/// Directory for application data
pub fn data_dir() -> PathBuf {
    use directories::ProjectDirs;

    if let Some(proj_dirs) = ProjectDirs::from("com", "buzz-generator", "buzz-generator") {
        proj_dirs.data_dir().to_path_buf()
    } else {
        PathBuf::from(".buzz-generator")
    }
}

/// Path to the log file
pub fn log_file_path() -> PathBuf {
    data_dir().join("buzz-generator.log")
}

fn env_filter(level: Option<&str>) -> Result<EnvFilter> {
    match level {
        Some(level) => EnvFilter::try_new(level)
            .map_err(|e| anyhow!("invalid log filter '{}': {}", level, e)),
        None => Ok(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))),
    }
}

/// Install the global tracing subscriber
pub fn init_logging(level: Option<&str>, target: LogTarget) -> Result<()> {
    let filter = env_filter(level)?;

    match target {
        LogTarget::File => {
            let path = log_file_path();
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(std::sync::Mutex::new(file))
                .try_init()
                .map_err(|e| anyhow!(e))?;
        }
        LogTarget::Stderr => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .try_init()
                .map_err(|e| anyhow!(e))?;
        }
    }

    Ok(())
}
