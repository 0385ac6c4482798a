//! Logging initialisation for processes embedding the precalc engine
//!
//! Installs a global `tracing` subscriber: an `EnvFilter` behind a reload
//! layer (so the level can change at runtime) and a console layer printing
//! `timestamp [LEVEL] message`, or JSON lines when requested.

use std::sync::{Mutex, OnceLock};

use thiserror::Error;
use tracing::Level;
use tracing_subscriber::{
    fmt::{self, format::Writer, FmtContext, FormatEvent, FormatFields},
    layer::SubscriberExt,
    registry::LookupSpan,
    reload,
    util::SubscriberInitExt,
    EnvFilter, Layer,
};

#[derive(Debug, Error)]
pub enum LogError {
    #[error("Logging already initialized")]
    AlreadyInitialized,

    #[error("Logging not initialized with reload support")]
    NotInitialized,

    #[error("Invalid log filter '{filter}': {reason}")]
    InvalidFilter { filter: String, reason: String },

    #[error("Failed to reload log filter: {0}")]
    Reload(String),
}

/// Custom format for log level with brackets: `[INFO]`, `[WARN]`, etc.
fn format_level(level: &Level) -> &'static str {
    match *level {
        Level::TRACE => "[TRACE]",
        Level::DEBUG => "[DEBUG]",
        Level::INFO => "[INFO]",
        Level::WARN => "[WARN]",
        Level::ERROR => "[ERROR]",
    }
}

/// Event formatter that outputs: `timestamp [LEVEL] message fields`
///
/// Example output: `2025-12-02T00:50:44.809123Z [INFO] Calculated formula="1+1" result=2`
pub struct BracketedLevelFormat;

impl<S, N> FormatEvent<S, N> for BracketedLevelFormat
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &tracing::Event<'_>,
    ) -> std::fmt::Result {
        let now = chrono::Utc::now();
        write!(writer, "{} ", now.format("%Y-%m-%dT%H:%M:%S%.6fZ"))?;

        let level = *event.metadata().level();
        if writer.has_ansi_escapes() {
            let color = match level {
                Level::TRACE => "\x1b[35m", // magenta
                Level::DEBUG => "\x1b[34m", // blue
                Level::INFO => "\x1b[32m",  // green
                Level::WARN => "\x1b[33m",  // yellow
                Level::ERROR => "\x1b[31m", // red
            };
            write!(writer, "{}{}\x1b[0m ", color, format_level(&level))?;
        } else {
            write!(writer, "{} ", format_level(&level))?;
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

type EnvFilterReloadHandle = reload::Handle<EnvFilter, tracing_subscriber::Registry>;
static LOG_FILTER_HANDLE: OnceLock<EnvFilterReloadHandle> = OnceLock::new();
static CURRENT_LOG_LEVEL: OnceLock<Mutex<String>> = OnceLock::new();

/// Logger configuration
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Filter used when `RUST_LOG` is unset, e.g. `info` or `info,precalc_engine=debug`
    pub level: String,
    /// JSON lines instead of the bracketed text format
    pub enable_json: bool,
    /// Colour the level tag
    pub ansi: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            enable_json: false,
            ansi: true,
        }
    }
}

/// Install the global subscriber
///
/// `RUST_LOG` wins over `config.level` when set. A second call returns
/// [`LogError::AlreadyInitialized`].
pub fn init_with_config(config: LogConfig) -> Result<(), LogError> {
    if LOG_FILTER_HANDLE.get().is_some() {
        return Err(LogError::AlreadyInitialized);
    }

    let filter_str = std::env::var("RUST_LOG")
        .ok()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| config.level.clone());
    let env_filter = parse_filter(&filter_str)?;

    let (reload_filter, reload_handle) = reload::Layer::new(env_filter);
    let registry = tracing_subscriber::registry().with(reload_filter);

    let console_layer = if config.enable_json {
        fmt::layer()
            .json()
            .with_level(true)
            .with_target(true)
            .boxed()
    } else {
        fmt::layer()
            .with_ansi(config.ansi)
            .event_format(BracketedLevelFormat)
            .boxed()
    };

    registry
        .with(console_layer)
        .try_init()
        .map_err(|_| LogError::AlreadyInitialized)?;

    let _ = LOG_FILTER_HANDLE.set(reload_handle);
    let _ = CURRENT_LOG_LEVEL.set(Mutex::new(filter_str.clone()));

    tracing::debug!("Logging initialized with filter '{}'", filter_str);
    Ok(())
}

/// Initialise with the default config and the given level
pub fn init(level: &str) -> Result<(), LogError> {
    init_with_config(LogConfig {
        level: level.to_string(),
        ..Default::default()
    })
}

/// Dynamically set log filter level at runtime
///
/// Accepts a level (`debug`) or a full filter directive (`info,precalc_engine=trace`).
pub fn set_log_level(level: &str) -> Result<(), LogError> {
    let handle = LOG_FILTER_HANDLE.get().ok_or(LogError::NotInitialized)?;
    let new_filter = parse_filter(level)?;

    handle
        .reload(new_filter)
        .map_err(|e| LogError::Reload(e.to_string()))?;

    if let Some(current) = CURRENT_LOG_LEVEL.get() {
        if let Ok(mut guard) = current.lock() {
            *guard = level.to_string();
        }
    }

    tracing::info!("Log level changed to: {}", level);
    Ok(())
}

/// Current log filter string, `unknown` before initialisation
pub fn get_log_level() -> String {
    CURRENT_LOG_LEVEL
        .get()
        .and_then(|m| m.lock().ok())
        .map(|guard| guard.clone())
        .unwrap_or_else(|| "unknown".to_string())
}

fn parse_filter(filter: &str) -> Result<EnvFilter, LogError> {
    EnvFilter::try_new(filter).map_err(|e| LogError::InvalidFilter {
        filter: filter.to_string(),
        reason: e.to_string(),
    })
}
