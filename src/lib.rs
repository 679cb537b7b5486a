//! codeblock - embeddable code blocks
//!
//! Regex-table syntax highlighting for a fixed set of languages, a
//! type-annotation stripper, in-process JavaScript execution with captured
//! console output, and a headless editor widget tying them together for a
//! host rich-text editor.

pub mod config;
pub mod error;
pub mod exec;
pub mod fence;
pub mod strip;
pub mod syntax;
pub mod widget;

pub use config::Config;
pub use error::{Error, Result};
pub use exec::execute;
pub use fence::Fence;
pub use strip::strip_annotations;
pub use syntax::{highlight, is_runnable, is_supported, resolve, tokenize};
pub use widget::EditorWidget;
