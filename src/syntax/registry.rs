//! Language registry
//!
//! Maps case-insensitive aliases to language definitions. The alias map is
//! built once; lookups are a lowercase plus a hash probe. A process-wide
//! registry is available through [`global`] and can be replaced exactly once,
//! before first use, with [`install`].

use std::collections::HashMap;
use std::sync::OnceLock;

use super::builtin;
use super::language::LanguageDefinition;
use crate::error::{Error, Result};

static GLOBAL: OnceLock<Registry> = OnceLock::new();

/// Immutable alias → language table
#[derive(Debug, Clone)]
pub struct Registry {
    /// Definitions in declaration order
    languages: Vec<LanguageDefinition>,
    /// Lowercased alias to index into `languages`
    alias_map: HashMap<String, usize>,
}

impl Registry {
    /// Registry with the built-in languages
    pub fn builtin() -> Self {
        // Built-in aliases are disjoint; a collision here is a table bug.
        match Self::with_languages(builtin::all_languages()) {
            Ok(registry) => registry,
            Err(err) => {
                tracing::error!(%err, "built-in language table is inconsistent");
                Self {
                    languages: Vec::new(),
                    alias_map: HashMap::new(),
                }
            }
        }
    }

    /// Build a registry from definitions, rejecting duplicate aliases
    pub fn with_languages(languages: Vec<LanguageDefinition>) -> Result<Self> {
        let mut alias_map = HashMap::new();
        for (idx, lang) in languages.iter().enumerate() {
            for alias in &lang.aliases {
                let key = alias.to_lowercase();
                if let Some(&prev) = alias_map.get(&key) {
                    let prev: &LanguageDefinition = &languages[prev];
                    return Err(Error::DuplicateAlias {
                        alias: key,
                        first: prev.name.clone(),
                        second: lang.name.clone(),
                    });
                }
                alias_map.insert(key, idx);
            }
        }
        Ok(Self {
            languages,
            alias_map,
        })
    }

    /// Built-ins followed by `extra`, rejecting alias collisions
    pub fn builtin_with(extra: Vec<LanguageDefinition>) -> Result<Self> {
        let mut languages = builtin::all_languages();
        languages.extend(extra);
        Self::with_languages(languages)
    }

    /// Look up a language by alias (case-insensitive)
    pub fn resolve(&self, alias: &str) -> Option<&LanguageDefinition> {
        if alias.is_empty() {
            return None;
        }
        self.alias_map
            .get(&alias.to_lowercase())
            .map(|&idx| &self.languages[idx])
    }

    /// Check if a language is supported for highlighting
    pub fn is_supported(&self, alias: &str) -> bool {
        self.resolve(alias).is_some()
    }

    /// Check if blocks in this language can be executed
    pub fn is_runnable(&self, alias: &str) -> bool {
        self.resolve(alias).is_some_and(|lang| lang.runnable)
    }

    /// All definitions, in declaration order
    pub fn languages(&self) -> &[LanguageDefinition] {
        &self.languages
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::builtin()
    }
}

/// The process-wide registry, built from the built-ins on first use
pub fn global() -> &'static Registry {
    GLOBAL.get_or_init(Registry::builtin)
}

/// Install the process-wide registry.
///
/// Fails if [`global`] or `install` already ran.
pub fn install(registry: Registry) -> Result<()> {
    GLOBAL.set(registry).map_err(|_| Error::RegistryInstalled)
}

/// Resolve an alias in the process-wide registry
pub fn resolve(alias: &str) -> Option<&'static LanguageDefinition> {
    global().resolve(alias)
}

/// Check support in the process-wide registry
pub fn is_supported(alias: &str) -> bool {
    global().is_supported(alias)
}

/// Check runnability in the process-wide registry
pub fn is_runnable(alias: &str) -> bool {
    global().is_runnable(alias)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_case_insensitive() {
        let registry = Registry::builtin();
        let lower = registry.resolve("js").map(|l| l.name.as_str());
        let upper = registry.resolve("JS").map(|l| l.name.as_str());
        assert_eq!(lower, Some("JavaScript"));
        assert_eq!(lower, upper);
        assert_eq!(
            registry.resolve("Python3").map(|l| l.name.as_str()),
            Some("Python")
        );
    }

    #[test]
    fn test_unresolved() {
        let registry = Registry::builtin();
        assert!(registry.resolve("").is_none());
        assert!(registry.resolve("cobol").is_none());
        assert!(!registry.is_supported("cobol"));
        assert!(!registry.is_runnable("cobol"));
    }

    #[test]
    fn test_runnable() {
        let registry = Registry::builtin();
        assert!(registry.is_runnable("js"));
        assert!(registry.is_runnable("TypeScript"));
        assert!(!registry.is_runnable("py"));
        assert!(registry.is_supported("py"));
    }

    #[test]
    fn test_every_alias_resolves_to_its_language() {
        let registry = Registry::builtin();
        assert_eq!(registry.languages().len(), 9);
        for lang in registry.languages() {
            for alias in &lang.aliases {
                let found = registry.resolve(alias).map(|l| l.name.as_str());
                assert_eq!(found, Some(lang.name.as_str()));
            }
        }
    }

    #[test]
    fn test_duplicate_alias_rejected() {
        let extra = LanguageDefinition::new("Other").with_aliases(&["JS"]);
        let err = Registry::builtin_with(vec![extra]).unwrap_err();
        match err {
            Error::DuplicateAlias { alias, first, second } => {
                assert_eq!(alias, "js");
                assert_eq!(first, "JavaScript");
                assert_eq!(second, "Other");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_builtin_with_extra() {
        let extra = LanguageDefinition::new("Lua").with_aliases(&["lua"]);
        let registry = Registry::builtin_with(vec![extra]).unwrap();
        assert_eq!(registry.languages().len(), 10);
        assert!(registry.is_supported("LUA"));
    }

    #[test]
    fn test_global_is_builtin() {
        assert!(is_supported("json"));
        assert!(is_runnable("javascript"));
        assert!(resolve("nope").is_none());
        // Once the global has been used it can no longer be replaced
        assert!(matches!(
            install(Registry::builtin()),
            Err(Error::RegistryInstalled)
        ));
    }
}
