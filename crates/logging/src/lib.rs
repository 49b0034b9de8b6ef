//! Logging initialization for the mibscope tools.
//!
//! Two modes:
//! - CLI mode: human-readable logs to STDERR, keeping STDOUT clean for
//!   JSON command output.
//! - Service mode: rolling file in the given directory, for embedding
//!   the engine in a long-running process.
//!
//! Service logs roll over at 5 MB; rotated files are compressed and at
//! most 10 are kept.

use anyhow::Result;
use file_rotate::{ContentLimit, FileRotate, compression::Compression, suffix::AppendCount};
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

const ROTATED_FILES: usize = 10;
const MAX_FILE_BYTES: usize = 5 * 1024 * 1024;

pub enum LogMode {
    Cli,
    Service { log_dir: PathBuf },
}

/// Keeps the non-blocking file writer alive for the process lifetime.
pub struct LoggingGuard {
    _guard: WorkerGuard,
}

pub fn init(mode: LogMode, verbose: bool) -> Result<Option<LoggingGuard>> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    match mode {
        LogMode::Cli => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .with_target(false)
                .init();
            Ok(None)
        }
        LogMode::Service { log_dir } => {
            let writer = FileRotate::new(
                log_dir.join("mibscope.log"),
                AppendCount::new(ROTATED_FILES),
                ContentLimit::Bytes(MAX_FILE_BYTES),
                Compression::OnRotate(1),
                None,
            );
            let (non_blocking, guard) = tracing_appender::non_blocking(writer);

            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(non_blocking)
                .with_ansi(false)
                .init();

            Ok(Some(LoggingGuard { _guard: guard }))
        }
    }
}
