//! Tracing setup for the browser
//!
//! Formats events with `tracing-subscriber` and forwards each finished line
//! to the matching `console.*` method so levels survive devtools filtering.

use std::io;

use tracing::{Level, Metadata};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;
use wasm_bindgen::JsValue;

use crate::config::AppConfig;
use crate::error::{Result, UiError};

/// Install the global subscriber
///
/// # Errors
/// Returns `UiError::Logging` if the filter directive is invalid or a
/// subscriber is already installed.
pub fn init(config: &AppConfig) -> Result<()> {
    let filter = parse_filter(&config.log_filter)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .without_time()
        .with_writer(ConsoleMakeWriter)
        .try_init()
        .map_err(|e| UiError::Logging(e.to_string()))?;

    tracing::debug!(filter = %config.log_filter, "tracing initialized");
    Ok(())
}

/// Parse an `EnvFilter` directive
///
/// # Errors
/// Returns `UiError::Logging` when the directive does not parse.
pub fn parse_filter(directive: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(directive).map_err(|e| UiError::Logging(format!("{directive}: {e}")))
}

/// Browser console method an event is written to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleMethod {
    Error,
    Warn,
    Info,
    Log,
    Debug,
}

impl ConsoleMethod {
    /// `console.debug` is hidden by default in most browsers, so only
    /// TRACE goes there.
    #[must_use]
    pub fn for_level(level: Level) -> Self {
        if level == Level::ERROR {
            Self::Error
        } else if level == Level::WARN {
            Self::Warn
        } else if level == Level::INFO {
            Self::Info
        } else if level == Level::DEBUG {
            Self::Log
        } else {
            Self::Debug
        }
    }

    fn emit(self, line: &str) {
        let value = JsValue::from_str(line);
        match self {
            Self::Error => web_sys::console::error_1(&value),
            Self::Warn => web_sys::console::warn_1(&value),
            Self::Info => web_sys::console::info_1(&value),
            Self::Log => web_sys::console::log_1(&value),
            Self::Debug => web_sys::console::debug_1(&value),
        }
    }
}

/// `MakeWriter` producing one [`ConsoleWriter`] per event
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(ConsoleMethod::Log)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(ConsoleMethod::for_level(*meta.level()))
    }
}

/// Buffers one formatted event and flushes it to the console on drop
#[derive(Debug)]
pub struct ConsoleWriter {
    method: ConsoleMethod,
    buffer: Vec<u8>,
}

impl ConsoleWriter {
    const fn new(method: ConsoleMethod) -> Self {
        Self {
            method,
            buffer: Vec::new(),
        }
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        if self.buffer.is_empty() {
            return;
        }
        let line = String::from_utf8_lossy(&self.buffer);
        self.method.emit(line.trim_end());
    }
}
