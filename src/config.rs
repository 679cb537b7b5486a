//! Configuration file support
//!
//! Loads settings from ~/.codeblock.conf (or %USERPROFILE%\.codeblock.conf on Windows)
//!
//! Format: simple key=value pairs, one per line
//! Lines starting with # are comments
//!
//! Example:
//! ```text
//! # codeblock configuration
//! debounce-ms = 500
//! copied-feedback-ms = 2000
//! min-height = 80
//! line-height = 21
//! height-padding = 24
//! languages-file = /home/me/.codeblock-languages.toml
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Configuration settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Quiet period before the persistence callback fires
    pub debounce: Duration,
    /// How long the copy button reads "Copied!"
    pub copied_feedback: Duration,
    /// Minimum editor height in pixels
    pub min_height: u32,
    /// Pixels per line of code
    pub line_height: u32,
    /// Extra pixels added to the line-based height
    pub height_padding: u32,
    /// Optional TOML file with extra language definitions
    pub languages_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(500),
            copied_feedback: Duration::from_millis(2000),
            min_height: 80,
            line_height: 21,
            height_padding: 24,
            languages_file: None,
        }
    }
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(windows)]
        {
            std::env::var("USERPROFILE")
                .ok()
                .map(|home| PathBuf::from(home).join(".codeblock.conf"))
        }

        #[cfg(not(windows))]
        {
            std::env::var("HOME")
                .ok()
                .map(|home| PathBuf::from(home).join(".codeblock.conf"))
        }
    }

    /// Load configuration from file
    pub fn load() -> Self {
        let mut config = Config::default();

        if let Some(path) = Self::config_path() {
            if let Ok(contents) = fs::read_to_string(&path) {
                tracing::debug!(path = %path.display(), "loading configuration");
                config.apply(&Self::parse(&contents));
            }
        }

        config
    }

    /// Parse config file contents into key-value pairs
    fn parse(contents: &str) -> HashMap<String, String> {
        let mut settings = HashMap::new();

        for line in contents.lines() {
            let line = line.trim();

            // Skip empty lines and comments
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some((key, value)) = line.split_once('=') {
                let key = key.trim().to_lowercase();
                let value = value.trim().to_string();
                settings.insert(key, value);
            }
        }

        settings
    }

    /// Apply settings from parsed config
    fn apply(&mut self, settings: &HashMap<String, String>) {
        if let Some(ms) = parse_u64(settings, "debounce-ms") {
            self.debounce = Duration::from_millis(ms.max(50)); // Minimum 50ms
        }

        if let Some(ms) = parse_u64(settings, "copied-feedback-ms") {
            self.copied_feedback = Duration::from_millis(ms);
        }

        if let Some(px) = parse_u32(settings, "min-height") {
            self.min_height = px;
        }

        if let Some(px) = parse_u32(settings, "line-height") {
            self.line_height = px.max(1);
        }

        if let Some(px) = parse_u32(settings, "height-padding") {
            self.height_padding = px;
        }

        if let Some(path) = settings.get("languages-file").filter(|p| !p.is_empty()) {
            self.languages_file = Some(PathBuf::from(path));
        }
    }

    /// Initial editor height for a body of `line_count` lines
    pub fn initial_height(&self, line_count: usize) -> u32 {
        let lines = u32::try_from(line_count).unwrap_or(u32::MAX);
        lines
            .saturating_mul(self.line_height)
            .saturating_add(self.height_padding)
            .max(self.min_height)
    }
}

fn parse_u64(settings: &HashMap<String, String>, key: &str) -> Option<u64> {
    let value = settings.get(key)?;
    match value.parse() {
        Ok(n) => Some(n),
        Err(_) => {
            tracing::warn!(key, value = %value, "ignoring non-numeric setting");
            None
        }
    }
}

fn parse_u32(settings: &HashMap<String, String>, key: &str) -> Option<u32> {
    parse_u64(settings, key).and_then(|n| u32::try_from(n).ok())
}
