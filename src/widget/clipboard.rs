//! Copy-to-clipboard collaborator
//!
//! The widget only needs "write this text"; hosts supply the platform
//! clipboard. A failed write is logged and leaves the button label alone.

use std::time::{Duration, Instant};

use crate::error::Result;

pub const COPY_LABEL: &str = "Copy";
pub const COPIED_LABEL: &str = "Copied!";

/// Destination for copied code
pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<()>;
}

/// "Copied!" feedback shown for a while after a successful copy
#[derive(Debug, Clone)]
pub struct CopyFeedback {
    duration: Duration,
    copied_until: Option<Instant>,
}

impl CopyFeedback {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            copied_until: None,
        }
    }

    /// Copy `text`, returning whether the write succeeded
    pub fn copy(&mut self, clipboard: &mut dyn Clipboard, text: &str, now: Instant) -> bool {
        match clipboard.write_text(text) {
            Ok(()) => {
                self.copied_until = Some(now + self.duration);
                true
            }
            Err(err) => {
                tracing::warn!(%err, "failed to copy code block");
                false
            }
        }
    }

    /// Button label at `now`
    pub fn label(&self, now: Instant) -> &'static str {
        match self.copied_until {
            Some(until) if now < until => COPIED_LABEL,
            _ => COPY_LABEL,
        }
    }
}
