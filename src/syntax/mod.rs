//! Syntax highlighting module
//!
//! This module provides the language registry and the highlighter:
//! - Declarative per-language rule tables and word sets
//! - Anchored, first-match-wins tokenization
//! - HTML markup (class contract) and ANSI rendering

mod builtin;
pub mod custom;
mod highlight;
mod language;
pub mod registry;
mod rules;
mod style;
mod tokens;

pub use highlight::{escape_html, highlight, render_ansi, render_html, tokenize, Token};
pub use language::LanguageDefinition;
pub use registry::{is_runnable, is_supported, resolve, Registry};
pub use rules::TokenRule;
pub use style::{Color, Style};
pub use tokens::{TokenClass, TokenKind};
