use crate::config::Config;
use anyhow::{Context, Result};
use std::fs;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global subscriber. `UC_LOG` overrides `logging.level`.
///
/// Interactive sessions log to a file so the screen stays clean; the
/// returned guard must be held until exit to flush it.
pub fn init_logging(config: &Config, interactive: bool) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_env("UC_LOG")
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    if interactive {
        let path = config.log_file();
        let dir = path
            .parent()
            .map(|p| p.to_path_buf())
            .unwrap_or_else(|| ".".into());
        let file_name = path
            .file_name()
            .map(|f| f.to_os_string())
            .unwrap_or_else(|| "uc.log".into());
        fs::create_dir_all(&dir)
            .with_context(|| format!("failed to create log directory {}", dir.display()))?;

        let appender = tracing_appender::rolling::never(&dir, file_name);
        let (non_blocking, guard) = tracing_appender::non_blocking(appender);
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_ansi(false).with_writer(non_blocking))
            .try_init()
            .context("failed to install log subscriber")?;
        info!(file = %path.display(), "logging initialized");
        Ok(Some(guard))
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init()
            .context("failed to install log subscriber")?;
        Ok(None)
    }
}
