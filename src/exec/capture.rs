//! Captured console output
//!
//! Log entries written by executed code through the substitute `console`.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Console method that produced an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogLevel {
    Log,
    Error,
    Warn,
    Info,
}

impl LogLevel {
    /// Method name on the console object, also the output line's class
    pub fn name(&self) -> &'static str {
        match self {
            LogLevel::Log => "log",
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
        }
    }

    pub const ALL: [LogLevel; 4] = [LogLevel::Log, LogLevel::Error, LogLevel::Warn, LogLevel::Info];
}

/// One captured argument, already converted to display text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogValue {
    /// Primitive or function, as `String(value)`
    Scalar(String),
    /// Object serialized as indented JSON
    Structured(String),
    /// Object that could not be serialized (cycles, throwing `toJSON`)
    Opaque(String),
}

impl LogValue {
    pub fn text(&self) -> &str {
        match self {
            LogValue::Scalar(s) | LogValue::Structured(s) | LogValue::Opaque(s) => s,
        }
    }
}

impl fmt::Display for LogValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// A single console call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub level: LogLevel,
    pub values: Vec<LogValue>,
}

impl LogEntry {
    pub fn new(level: LogLevel, values: Vec<LogValue>) -> Self {
        Self { level, values }
    }

    /// Entry with a single scalar message
    pub fn message(level: LogLevel, text: impl Into<String>) -> Self {
        Self::new(level, vec![LogValue::Scalar(text.into())])
    }
}

/// Values joined with single spaces, as shown in the output panel
impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(value.text())?;
        }
        Ok(())
    }
}

/// Shared sink the console methods append to.
///
/// Cloned into each native console function of one run; dropped with it.
#[derive(Debug, Clone, Default)]
pub struct CaptureLog {
    entries: Rc<RefCell<Vec<LogEntry>>>,
}

impl CaptureLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, entry: LogEntry) {
        self.entries.borrow_mut().push(entry);
    }

    /// Empty the accumulated entries in place (`console.clear()`)
    pub fn clear(&self) {
        self.entries.borrow_mut().clear();
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    /// Take the entries out, leaving the log empty
    pub fn take(&self) -> Vec<LogEntry> {
        std::mem::take(&mut *self.entries.borrow_mut())
    }
}
