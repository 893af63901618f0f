//! Structured logging bootstrap using `tracing`.

use std::{fs::File, path::Path, sync::Mutex};

use anyhow::{Context, Result};
use chrono::Local;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install a global subscriber writing to stderr and, when `log_dir` is set,
/// to `mining_log_<timestamp>.log` inside it.
pub fn init_tracing(debug: bool, log_dir: Option<&Path>) -> Result<()> {
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }

    let default_level = if debug { "debug" } else { "info" };
    let env_filter = if debug {
        EnvFilter::try_new(default_level)?
    } else {
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(default_level))?
    };

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .with_level(true)
        .with_line_number(true)
        .with_file(true)
        .with_thread_ids(false)
        .with_thread_names(false);

    let file_layer = match log_dir {
        Some(dir) => {
            let path = dir.join(format!(
                "mining_log_{}.log",
                Local::now().format("%Y%m%d_%H%M%S")
            ));
            let file = File::create(&path)
                .with_context(|| format!("creating log file {}", path.display()))?;
            Some(
                fmt::layer()
                    .with_writer(Mutex::new(file))
                    .with_ansi(false)
                    .with_timer(fmt::time::UtcTime::rfc_3339())
                    .with_target(true),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    let debug_enabled = debug;
    tracing::debug!(debug_enabled, "tracing initialised");
    Ok(())
}
