//! Logging and tracing configuration
//!
//! This module provides centralized logging configuration for the allocator.

use std::io;
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_appender::{non_blocking, non_blocking::WorkerGuard, rolling};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Registry,
};

/// Error returned when the subscriber cannot be installed
pub type LoggingError = Box<dyn std::error::Error + Send + Sync>;

/// How console events are formatted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines
    Pretty,
    /// One JSON object per event
    Json,
}

/// Daily rolling log file location
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogFile {
    /// Directory the files are written to
    pub directory: PathBuf,
    /// File name prefix; the date is appended by the appender
    pub prefix: String,
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Most verbose level recorded for this crate
    pub level: Level,
    /// Console event format
    pub format: LogFormat,
    /// Optional JSON file output next to the console
    pub file: Option<LogFile>,
    /// Emit an event when each instrumented span closes
    pub span_events: bool,
    /// Colour console output
    pub ansi: bool,
    /// Filter directive overriding `level` and `RUST_LOG`
    pub filter: Option<String>,
}

/// Keeps background log writers alive; drop it to flush file output
#[derive(Debug, Default)]
pub struct LoggingGuard {
    _guards: Vec<WorkerGuard>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            format: LogFormat::Pretty,
            file: None,
            span_events: false,
            ansi: true,
            filter: None,
        }
    }
}

impl LoggingConfig {
    /// Create a new logging configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Pick a level from the command line switches
    ///
    /// `debug` wins over `verbose`; with neither only warnings are shown.
    pub fn from_flags(verbose: bool, debug: bool) -> Self {
        match (debug, verbose) {
            (true, _) => Self::new().with_level(Level::DEBUG).with_span_events(),
            (false, true) => Self::new().with_level(Level::INFO).with_span_events(),
            (false, false) => Self::new().with_level(Level::WARN),
        }
    }

    /// Set the log level
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Format console events as JSON
    pub fn with_json_format(mut self) -> Self {
        self.format = LogFormat::Json;
        self
    }

    /// Also write JSON events to `<directory>/<prefix>.<date>`
    pub fn with_file_logging(
        mut self,
        directory: impl Into<PathBuf>,
        prefix: impl Into<String>,
    ) -> Self {
        self.file = Some(LogFile { directory: directory.into(), prefix: prefix.into() });
        self
    }

    /// Enable span close events
    pub fn with_span_events(mut self) -> Self {
        self.span_events = true;
        self
    }

    /// Disable ANSI colors
    pub fn without_ansi(mut self) -> Self {
        self.ansi = false;
        self
    }

    /// Use an explicit filter directive such as `room_block_allocator=trace`
    pub fn with_filter(mut self, directive: impl Into<String>) -> Self {
        self.filter = Some(directive.into());
        self
    }

    fn fmt_span(&self) -> FmtSpan {
        if self.span_events {
            FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        }
    }

    fn env_filter(&self) -> Result<EnvFilter, LoggingError> {
        if let Some(directive) = &self.filter {
            return Ok(EnvFilter::try_new(directive)?);
        }
        let crate_name = env!("CARGO_PKG_NAME").replace('-', "_");
        Ok(EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("{}={}", crate_name, self.level))))
    }

    /// Install the global tracing subscriber
    ///
    /// Console output goes to stderr so stdout stays free for booking results.
    pub fn init(self) -> Result<LoggingGuard, LoggingError> {
        let registry = Registry::default().with(self.env_filter()?);
        let mut guard = LoggingGuard::default();

        let file_layer = self.file.as_ref().map(|file| {
            let (writer, worker) = non_blocking(rolling::daily(&file.directory, &file.prefix));
            guard._guards.push(worker);
            fmt::layer().json().with_writer(writer).with_span_events(self.fmt_span())
        });

        match self.format {
            LogFormat::Json => {
                let console =
                    fmt::layer().json().with_writer(io::stderr).with_span_events(self.fmt_span());
                registry.with(file_layer).with(console).try_init()?;
            }
            LogFormat::Pretty => {
                let console = fmt::layer()
                    .with_writer(io::stderr)
                    .with_ansi(self.ansi)
                    .with_span_events(self.fmt_span());
                registry.with(file_layer).with(console).try_init()?;
            }
        }

        info!(level = %self.level, format = ?self.format, "Logging initialized");
        Ok(guard)
    }
}

/// Macro for creating structured log events with booking context
#[macro_export]
macro_rules! booking_event {
    ($level:ident, $message:expr, $($key:ident = $value:expr),* $(,)?) => {
        tracing::$level!(
            component = "booking",
            $($key = $value,)*
            "{}", $message
        );
    };
    ($level:ident, $message:expr) => {
        tracing::$level!(
            component = "booking",
            "{}", $message
        );
    };
}
