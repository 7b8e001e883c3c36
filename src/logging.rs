//! Logging initialization: console plus an append-mode log file.
//!
//! Constructed once at startup and scoped to the program lifetime. Progress
//! lines never pass through here; they are rendered straight to the console
//! by the download invoker.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use crate::error::Result;

/// Timestamp format shared by both log targets.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Install the global subscriber: a console layer and an ANSI-free file
/// layer writing to `log_file` in append mode.
pub fn init(log_file: &Path, debug: bool) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)?;

    // Session separator so consecutive runs are readable in the shared file.
    writeln!(
        file,
        "=== session started {} ===",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    )?;

    let level = if debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let console_layer = fmt::layer()
        .with_target(false)
        .with_timer(ChronoLocal::new(TIMESTAMP_FORMAT.to_string()));

    let file_layer = fmt::layer()
        .with_target(false)
        .with_ansi(false)
        .with_timer(ChronoLocal::new(TIMESTAMP_FORMAT.to_string()))
        .with_writer(Arc::new(file));

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(file_layer)
        .init();

    Ok(())
}
