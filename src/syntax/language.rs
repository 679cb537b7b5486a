//! Language definitions for syntax highlighting
//!
//! A `LanguageDefinition` is plain data: its aliases, an ordered list of
//! token rules, and the keyword/builtin sets used to classify words.

use std::collections::HashSet;

use super::rules::TokenRule;

/// A complete language definition for syntax highlighting
#[derive(Debug, Clone)]
pub struct LanguageDefinition {
    /// Display name (e.g., "JavaScript")
    pub name: String,
    /// Case-insensitive identifiers; the first one is the primary alias
    pub aliases: Vec<String>,
    /// Whether blocks in this language can be executed
    pub runnable: bool,
    /// Whether type annotations are stripped before execution
    pub strip_types: bool,
    /// Token rules, tried in this order
    pub rules: Vec<TokenRule>,
    /// Words classified as keywords
    pub keywords: HashSet<String>,
    /// Words classified as builtins
    pub builtins: HashSet<String>,
}

impl LanguageDefinition {
    /// Create a new empty language definition
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            aliases: Vec::new(),
            runnable: false,
            strip_types: false,
            rules: Vec::new(),
            keywords: HashSet::new(),
            builtins: HashSet::new(),
        }
    }

    /// Builder: add aliases
    pub fn with_aliases(mut self, aliases: &[&str]) -> Self {
        self.aliases.extend(aliases.iter().map(|a| a.to_string()));
        self
    }

    /// Builder: mark as runnable
    pub fn runnable(mut self) -> Self {
        self.runnable = true;
        self
    }

    /// Builder: strip type annotations before running
    pub fn stripping_types(mut self) -> Self {
        self.strip_types = true;
        self
    }

    /// Builder: set the ordered rule list
    pub fn with_rules(mut self, rules: Vec<TokenRule>) -> Self {
        self.rules = rules;
        self
    }

    /// Builder: add keywords
    pub fn with_keywords(mut self, words: &[&str]) -> Self {
        self.keywords.extend(words.iter().map(|w| w.to_string()));
        self
    }

    /// Builder: add builtins
    pub fn with_builtins(mut self, words: &[&str]) -> Self {
        self.builtins.extend(words.iter().map(|w| w.to_string()));
        self
    }

    /// The alias used as the selector value for this language
    pub fn primary_alias(&self) -> &str {
        self.aliases.first().map(|s| s.as_str()).unwrap_or_default()
    }

    /// Check whether `alias` names this language (case-insensitive)
    pub fn has_alias(&self, alias: &str) -> bool {
        self.aliases.iter().any(|a| a.eq_ignore_ascii_case(alias))
    }

    /// Keyword membership: exact spelling first, then lowercased
    pub fn is_keyword(&self, word: &str) -> bool {
        set_contains(&self.keywords, word)
    }

    /// Builtin membership: exact spelling first, then lowercased
    pub fn is_builtin(&self, word: &str) -> bool {
        set_contains(&self.builtins, word)
    }
}

fn set_contains(set: &HashSet<String>, word: &str) -> bool {
    set.contains(word) || set.contains(&word.to_lowercase())
}
