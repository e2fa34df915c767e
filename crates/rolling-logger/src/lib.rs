//! Rolling Logger
//!
//! A `tracing` layer that keeps the most recent log lines in a circular
//! buffer and mirrors every line to the browser console when running
//! as WebAssembly.

use std::collections::VecDeque;
use std::fmt::{self, Write as _};
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

/// Default number of lines kept in memory
pub const DEFAULT_CAPACITY: usize = 500;

/// Logger settings
#[derive(Debug, Clone)]
pub struct LoggerConfig {
    /// Maximum level that is recorded
    pub level: LevelFilter,
    /// Number of lines kept before the oldest is dropped
    pub capacity: usize,
    /// Mirror lines to the browser console
    pub console: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: LevelFilter::DEBUG,
            capacity: DEFAULT_CAPACITY,
            console: true,
        }
    }
}

/// One formatted log record
#[derive(Debug, Clone, PartialEq)]
pub struct LogLine {
    pub timestamp: DateTime<Utc>,
    pub level: Level,
    pub target: String,
    pub message: String,
}

impl fmt::Display for LogLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:>5} {}: {}",
            self.timestamp.format("%H:%M:%S%.3f"),
            self.level,
            self.target,
            self.message
        )
    }
}

/// Circular buffer of recent lines, shared between the layer and readers
#[derive(Debug, Clone)]
pub struct RollingBuffer {
    lines: Arc<Mutex<VecDeque<LogLine>>>,
    capacity: usize,
}

impl RollingBuffer {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            lines: Arc::new(Mutex::new(VecDeque::with_capacity(capacity))),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Append a line, evicting the oldest one when full
    pub fn push(&self, line: LogLine) {
        let Ok(mut lines) = self.lines.lock() else {
            return;
        };
        while lines.len() >= self.capacity {
            lines.pop_front();
        }
        lines.push_back(line);
    }

    /// Copy of the buffered lines, oldest first
    pub fn snapshot(&self) -> Vec<LogLine> {
        self.lines
            .lock()
            .map(|lines| lines.iter().cloned().collect())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.lines.lock().map(|lines| lines.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.clear();
        }
    }
}

/// Collects the `message` field and renders the rest as `key=value`
#[derive(Default)]
struct LineVisitor {
    message: String,
    fields: String,
}

impl Visit for LineVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            let _ = write!(self.fields, " {}={}", field.name(), value);
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(self.message, "{:?}", value);
        } else {
            let _ = write!(self.fields, " {}={:?}", field.name(), value);
        }
    }
}

/// Layer writing every event into a [`RollingBuffer`]
pub struct RollingLayer {
    buffer: RollingBuffer,
    console: bool,
}

impl RollingLayer {
    pub fn new(buffer: RollingBuffer) -> Self {
        Self { buffer, console: true }
    }

    /// Enable or disable the console mirror
    pub fn with_console(mut self, console: bool) -> Self {
        self.console = console;
        self
    }
}

impl<S: Subscriber> Layer<S> for RollingLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = LineVisitor::default();
        event.record(&mut visitor);

        let meta = event.metadata();
        let line = LogLine {
            timestamp: Utc::now(),
            level: *meta.level(),
            target: meta.target().to_string(),
            message: visitor.message + &visitor.fields,
        };

        if self.console {
            console_sink(&line);
        }
        self.buffer.push(line);
    }
}

#[cfg(target_arch = "wasm32")]
fn console_sink(line: &LogLine) {
    use web_sys::console;

    let text = wasm_bindgen::JsValue::from_str(&line.to_string());
    match line.level {
        Level::ERROR => console::error_1(&text),
        Level::WARN => console::warn_1(&text),
        Level::INFO => console::info_1(&text),
        _ => console::debug_1(&text),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn console_sink(_line: &LogLine) {}

/// Install the rolling layer as the global subscriber.
///
/// Returns the buffer handle. Calling this twice keeps the first
/// subscriber; the second buffer then stays empty.
pub fn init(config: LoggerConfig) -> RollingBuffer {
    let buffer = RollingBuffer::new(config.capacity);
    let layer = RollingLayer::new(buffer.clone())
        .with_console(config.console)
        .with_filter(config.level);
    let _ = tracing_subscriber::registry().with(layer).try_init();
    buffer
}

/// Parse a level name such as `"info"`; unknown names give `None`
pub fn parse_level(name: &str) -> Option<LevelFilter> {
    name.trim().parse::<LevelFilter>().ok()
}
