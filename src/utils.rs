/// Utility functions used throughout the application

use std::path::PathBuf;

/// Get platform-specific debug log path
pub fn get_debug_log_path() -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push("filedeck-debug.log");
    path
}

/// Send tracing output to the debug log file.
///
/// The terminal belongs to the TUI, so nothing may be written to stdout or
/// stderr while it runs. `RUST_LOG` overrides the default filter.
pub fn init_debug_logging() -> anyhow::Result<PathBuf> {
    use tracing_subscriber::EnvFilter;

    let path = get_debug_log_path();
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("filedeck=debug")),
        )
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install logger: {}", e))?;

    Ok(path)
}
