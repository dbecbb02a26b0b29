use std::{fs::OpenOptions, io, path::Path, sync::Mutex};
use tracing_subscriber::EnvFilter;

/// Env var holding a tracing filter directive, e.g. `comptree=debug`
pub const LOG_ENV: &str = "COMPTREE_LOG";

fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default))
}

/// Log to stderr. Used when the output is a plain report.
pub fn init_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(env_filter("comptree=warn"))
        .with_target(false)
        .try_init();
}

/// Log to a file, truncating it. The browser owns the terminal, so this is its only log sink.
pub fn init_file(path: &Path) -> io::Result<()> {
    let log_file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)?;

    let _ = tracing_subscriber::fmt()
        .with_writer(Mutex::new(log_file))
        .with_ansi(false)
        .with_env_filter(env_filter("comptree=info"))
        .with_target(true)
        .with_line_number(true)
        .try_init();

    tracing::info!("Log file: {}", path.display());
    Ok(())
}
