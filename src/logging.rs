use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter directive used when `RUST_LOG` is not set
pub fn default_directive(verbose: bool) -> String {
    let level = if verbose { "debug" } else { "info" };
    format!("vidql={}", level)
}

/// Split a log file path into the directory and file name prefix the rolling
/// appender wants. A bare file name logs into the current directory.
pub fn log_file_parts(log_path: &Path) -> (PathBuf, OsString) {
    let dir = match log_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let file_name = log_path
        .file_name()
        .map(OsStr::to_os_string)
        .unwrap_or_else(|| OsString::from("vidql.log"));
    (dir, file_name)
}

/// Initialize the logging system
///
/// # Arguments
/// * `verbose` - Enable verbose (DEBUG) logging
/// * `log_file` - Optional path to log file. If None, logs only to stderr
pub fn init(verbose: bool, log_file: Option<PathBuf>) {
    // RUST_LOG wins over the verbose flag
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    // Human-readable output on stderr, stdout stays clean for JSON responses
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer);

    let Some(log_path) = log_file else {
        let _ = subscriber.try_init();
        return;
    };

    let (dir, file_name) = log_file_parts(&log_path);
    let _ = std::fs::create_dir_all(&dir);

    // One file per day, JSON lines without colors
    let file_layer = fmt::layer()
        .with_writer(tracing_appender::rolling::daily(dir, file_name))
        .with_ansi(false)
        .json();

    // A subscriber may already be installed (tests call init repeatedly)
    let _ = subscriber.with(file_layer).try_init();
}
