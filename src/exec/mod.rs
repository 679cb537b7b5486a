//! Code execution with captured console output
//!
//! Runs a block in the embedded engine with a substitute `console` passed
//! in as a parameter. This captures output and nothing more: scripts run
//! with full access to the engine, without time or memory limits.
//! Every fault ends up as a log entry; `execute` itself cannot fail.

mod capture;
mod engine;

use std::borrow::Cow;

pub use capture::{CaptureLog, LogEntry, LogLevel, LogValue};

use crate::strip::strip_annotations;
use crate::syntax::registry::{self, Registry};

/// Synthesized when a run neither logged nor failed
pub const NO_OUTPUT_MESSAGE: &str = "✓ Code executed successfully (no output)";

/// Execute `source` as `alias` using the process-wide registry
pub fn execute(source: &str, alias: &str) -> Vec<LogEntry> {
    execute_with(registry::global(), source, alias)
}

/// Execute `source` as `alias`, resolving the language in `registry`
pub fn execute_with(registry: &Registry, source: &str, alias: &str) -> Vec<LogEntry> {
    let Some(lang) = registry.resolve(alias).filter(|lang| lang.runnable) else {
        tracing::debug!(alias, "execution requested for a non-runnable language");
        return vec![LogEntry::message(
            LogLevel::Error,
            format!("Language '{alias}' cannot be run"),
        )];
    };

    let source = if lang.strip_types {
        Cow::Owned(strip_annotations(source))
    } else {
        Cow::Borrowed(source)
    };

    let log = CaptureLog::new();
    let outcome = engine::run(&source, &log);
    let mut entries = log.take();

    match outcome {
        Ok(()) if entries.is_empty() => {
            entries.push(LogEntry::message(LogLevel::Info, NO_OUTPUT_MESSAGE));
        }
        Ok(()) => {}
        Err(message) => {
            tracing::debug!(language = %lang.name, %message, "executed code raised");
            entries.push(LogEntry::message(LogLevel::Error, message));
        }
    }

    tracing::debug!(language = %lang.name, entries = entries.len(), "executed code block");
    entries
}
