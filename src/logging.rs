// src/logging.rs

use std::env;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initializes stdout and daily-rolling file logging.
///
/// * `RUST_LOG` sets the filter (default `info`).
/// * `LOG_DIR` sets the directory for `quiz.log` files (default `logs`).
///
/// The returned guard flushes the file writer when dropped, so `main` must hold it.
pub fn init_tracing() -> WorkerGuard {
    let rust_log = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    let log_dir = env::var("LOG_DIR").unwrap_or_else(|_| "logs".to_string());

    let file_appender = tracing_appender::rolling::daily(&log_dir, "quiz.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_new(&rust_log).unwrap_or_else(|_| EnvFilter::new("info"));
    let stdout_layer = fmt::layer().with_writer(std::io::stdout).with_target(false);
    let file_layer = fmt::layer().with_writer(non_blocking).with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_layer)
        .with(file_layer)
        .init();

    guard
}
