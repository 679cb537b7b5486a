//! User-defined languages loaded from TOML
//!
//! ```toml
//! [[language]]
//! name = "Lua"
//! aliases = ["lua"]
//! keywords = ["local", "function", "end"]
//! builtins = ["print"]
//!
//! [[language.rule]]
//! kind = "comment"
//! pattern = "--[^\\n]*"
//!
//! [[language.rule]]
//! kind = "word"
//! pattern = "[a-zA-Z_][a-zA-Z0-9_]*"
//! ```
//!
//! Unlike the built-in tables, a bad pattern or unknown kind name here is an
//! error.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use super::language::LanguageDefinition;
use super::rules::TokenRule;
use super::tokens::TokenKind;
use crate::error::{Error, Result};

#[derive(Debug, Deserialize)]
struct LanguageFile {
    #[serde(default)]
    language: Vec<LanguageEntry>,
}

#[derive(Debug, Deserialize)]
struct LanguageEntry {
    name: String,
    aliases: Vec<String>,
    #[serde(default)]
    runnable: bool,
    #[serde(default)]
    keywords: Vec<String>,
    #[serde(default)]
    builtins: Vec<String>,
    #[serde(default)]
    rule: Vec<RuleEntry>,
}

#[derive(Debug, Deserialize)]
struct RuleEntry {
    kind: String,
    pattern: String,
}

impl LanguageEntry {
    fn into_definition(self) -> Result<LanguageDefinition> {
        let rules = self
            .rule
            .iter()
            .map(|entry| {
                let kind = TokenKind::from_name(&entry.kind)
                    .ok_or_else(|| Error::UnknownTokenKind(entry.kind.clone()))?;
                TokenRule::new(kind, &entry.pattern)
            })
            .collect::<Result<Vec<_>>>()?;

        let mut lang = LanguageDefinition::new(&self.name).with_rules(rules);
        lang.aliases = self.aliases;
        lang.runnable = self.runnable;
        lang.keywords.extend(self.keywords);
        lang.builtins.extend(self.builtins);
        Ok(lang)
    }
}

/// Parse language definitions from TOML text
pub fn load_str(contents: &str) -> Result<Vec<LanguageDefinition>> {
    let file: LanguageFile = toml::from_str(contents)?;
    file.language
        .into_iter()
        .map(LanguageEntry::into_definition)
        .collect()
}

/// Read and parse a TOML language file
pub fn load_file(path: &Path) -> Result<Vec<LanguageDefinition>> {
    let contents = fs::read_to_string(path)?;
    load_str(&contents)
}
