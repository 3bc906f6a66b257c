//! Logging Infrastructure
//!
//! stdout always; a daily rolling file as well when a log directory is given.

use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const LOG_FILE_PREFIX: &str = "pos-server.log";

/// Filter used when `RUST_LOG` is not set
pub fn default_filter(level: &str) -> String {
    format!("pos_server={level},tower_http={level}")
}

/// Initialize the global subscriber
///
/// `json` switches stdout to one JSON object per line. The returned guard
/// flushes the file writer on drop; keep it alive for the lifetime of the
/// process.
pub fn init_logger(
    level: &str,
    json: bool,
    log_dir: Option<&str>,
) -> std::io::Result<Option<WorkerGuard>> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter(level)));

    let (text_layer, json_layer) = if json {
        (None, Some(fmt::layer().json().with_target(true)))
    } else {
        (
            Some(
                fmt::layer()
                    .with_target(true)
                    .with_file(false)
                    .with_line_number(false),
            ),
            None,
        )
    };

    let (file_layer, guard) = match log_dir {
        Some(dir) => {
            let dir = Path::new(dir);
            std::fs::create_dir_all(dir)?;
            let (writer, guard) = tracing_appender::non_blocking(rolling::daily(dir, LOG_FILE_PREFIX));
            let layer = fmt::layer()
                .with_ansi(false)
                .with_target(true)
                .with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(text_layer)
        .with(json_layer)
        .with(file_layer)
        .init();

    Ok(guard)
}
