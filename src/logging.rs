//! Logging initialization.
//!
//! Console logging goes to stderr; a plain-text mirror of every event is
//! appended to a timestamped file under `logs/`. Both layers switch to the
//! JSON formatter when `MEDIA_LIBRARIAN_LOG_JSON` is set.
//!
//! Environment variables:
//! - `MEDIA_LIBRARIAN_LOG_LEVEL`: log level (default: info)
//! - `MEDIA_LIBRARIAN_LOG_JSON`: structured JSON output (1/true/yes/on)

use std::fs::File;
use std::sync::Mutex;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry};

const LOG_LEVEL_ENV: &str = "MEDIA_LIBRARIAN_LOG_LEVEL";
const LOG_JSON_ENV: &str = "MEDIA_LIBRARIAN_LOG_JSON";
const LOG_DIR: &str = "logs";

/// Initialize the logging system.
pub fn init(verbose: bool, no_color: bool) {
    let level = if verbose {
        "debug".to_string()
    } else {
        std::env::var(LOG_LEVEL_ENV).unwrap_or_else(|_| "info".to_string())
    };
    let filter = EnvFilter::new(format!("media_librarian={level}"));

    let json = env_flag(LOG_JSON_ENV);

    let console: Box<dyn Layer<Registry> + Send + Sync> = if json {
        fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .boxed()
    } else {
        fmt::layer()
            .with_target(false)
            .without_time()
            .with_ansi(!no_color)
            .with_writer(std::io::stderr)
            .boxed()
    };

    let mut layers = vec![console];
    if let Some(file) = open_log_file() {
        let file_layer: Box<dyn Layer<Registry> + Send + Sync> = if json {
            fmt::layer().json().with_writer(Mutex::new(file)).boxed()
        } else {
            fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .boxed()
        };
        layers.push(file_layer);
    }

    tracing_subscriber::registry().with(layers).with(filter).init();
}

/// Open a timestamped log file under the log directory.
///
/// Logging stays console-only if the directory or file cannot be created.
fn open_log_file() -> Option<File> {
    std::fs::create_dir_all(LOG_DIR).ok()?;
    let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    let path = format!("{LOG_DIR}/media-librarian_{timestamp}.log");
    File::create(path).ok()
}

/// Interpret an environment variable as a boolean flag.
fn env_flag(name: &str) -> bool {
    std::env::var(name)
        .map(|v| matches!(v.trim().to_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(false)
}
