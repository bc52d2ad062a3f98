//! src/logging.rs
//! ============================================================================
//! # Logger: file-only tracing setup
//!
//! Events go to a daily rolling file; nothing is written to the terminal since
//! the UI owns the alternate screen.

use std::{
    fs,
    sync::atomic::{AtomicUsize, Ordering},
};

use tracing::Metadata;
use tracing_appender::{
    non_blocking::WorkerGuard,
    rolling::{self, RollingFileAppender},
};
use tracing_subscriber::{
    EnvFilter,
    filter::Directive,
    fmt::{
        self, FmtContext,
        format::{FormatEvent, FormatFields, Writer},
    },
    prelude::*,
};

use crate::config::LoggingConfig;

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("Failed to create log directory: {0}")]
    DirectoryCreationFailed(#[from] std::io::Error),

    #[error("Invalid log level directive '{0}'")]
    InvalidLevel(String),

    #[error("Logger already initialized")]
    AlreadyInitialized,
}

pub struct Logger;

impl Logger {
    /// Call **once** near the start of `main`. Keep the guard alive until exit
    /// so buffered lines are flushed.
    pub fn init_tracing(config: &LoggingConfig) -> Result<WorkerGuard, LoggingError> {
        fs::create_dir_all(&config.dir)?;

        // daily rolling file appender → <dir>/fstrad.YYYY-MM-DD
        let file: RollingFileAppender = rolling::daily(&config.dir, "fstrad");
        let (writer, guard) = tracing_appender::non_blocking(file);

        let directive: Directive = config
            .level
            .parse()
            .map_err(|_| LoggingError::InvalidLevel(config.level.clone()))?;
        let filter = EnvFilter::builder()
            .with_default_directive(directive)
            .from_env_lossy();

        let file_layer = fmt::layer()
            .event_format(SeqFileMod)
            .with_writer(writer)
            .with_ansi(false)
            .with_filter(filter);

        tracing_subscriber::registry()
            .with(file_layer)
            .try_init()
            .map_err(|_| LoggingError::AlreadyInitialized)?;

        Ok(guard)
    }
}

static SEQ: AtomicUsize = AtomicUsize::new(1);

/// Custom formatter: `[SEQ] LEVEL [file:line mod::path] message`
struct SeqFileMod;

impl<S, N> FormatEvent<S, N> for SeqFileMod
where
    S: tracing::Subscriber + for<'lookup> tracing_subscriber::registry::LookupSpan<'lookup>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut w: Writer<'_>,
        ev: &tracing::Event<'_>,
    ) -> std::fmt::Result {
        // monotonically‑increasing sequence number
        let seq: usize = SEQ.fetch_add(1, Ordering::Relaxed);

        let meta: &'static Metadata<'static> = ev.metadata();
        write!(
            w,
            "{seq:06} {:5} [{}:{} {}] ",
            meta.level(),
            meta.file().unwrap_or("??"),
            meta.line().unwrap_or(0),
            meta.module_path().unwrap_or("???"),
        )?;

        ctx.field_format().format_fields(w.by_ref(), ev)?;
        writeln!(w)
    }
}

