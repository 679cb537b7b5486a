//! Error types for codeblock
//!
//! Only setup paths (registry construction, config and language files,
//! clipboard collaborators) can fail. Highlighting and execution contain
//! their own faults and never return these.

use thiserror::Error;

/// Result type alias for codeblock operations
pub type Result<T> = std::result::Result<T, Error>;

/// Codeblock error types
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid pattern for {kind} rule: {source}")]
    Pattern {
        kind: &'static str,
        #[source]
        source: Box<regex_automata::meta::BuildError>,
    },

    #[error("Alias '{alias}' is claimed by both {first} and {second}")]
    DuplicateAlias {
        alias: String,
        first: String,
        second: String,
    },

    #[error("Unknown token kind: {0}")]
    UnknownTokenKind(String),

    #[error("Malformed language file: {0}")]
    LanguageFile(#[from] toml::de::Error),

    #[error("Language registry is already initialised")]
    RegistryInstalled,

    #[error("Clipboard unavailable: {0}")]
    Clipboard(String),
}
