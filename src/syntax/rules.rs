//! Token rules for syntax highlighting
//!
//! A rule pairs a token kind with a pattern that is only ever matched
//! anchored at the scanner's cursor. Rules are tried in declaration order
//! and the first non-empty match wins.

use regex_automata::meta::Regex;
use regex_automata::{Anchored, Input};

use super::tokens::TokenKind;
use crate::error::{Error, Result};

/// A single anchored pattern rule
#[derive(Debug, Clone)]
pub struct TokenRule {
    /// Token kind to assign to matches
    pub kind: TokenKind,
    /// Compiled pattern
    pattern: Regex,
}

impl TokenRule {
    /// Compile a new rule
    pub fn new(kind: TokenKind, pattern: &str) -> Result<Self> {
        let pattern = Regex::new(pattern).map_err(|source| Error::Pattern {
            kind: kind.name(),
            source: Box::new(source),
        })?;
        Ok(Self { kind, pattern })
    }

    /// Match beginning exactly at `pos`, returning the end offset.
    ///
    /// The search sees the whole text, so `\b` and `(?m)^` look at the
    /// characters before `pos`. Empty matches count as no match.
    pub fn match_at(&self, text: &str, pos: usize) -> Option<usize> {
        if pos >= text.len() {
            return None;
        }
        let input = Input::new(text).range(pos..).anchored(Anchored::Yes);
        self.pattern
            .find(input)
            .map(|m| m.end())
            .filter(|&end| end > pos)
    }
}

/// Compile a declarative rule table.
///
/// A pattern that fails to compile is logged and skipped so one bad entry
/// cannot take a whole built-in language down.
pub fn compile_table(language: &str, table: &[(TokenKind, &str)]) -> Vec<TokenRule> {
    table
        .iter()
        .filter_map(|&(kind, pattern)| match TokenRule::new(kind, pattern) {
            Ok(rule) => Some(rule),
            Err(err) => {
                tracing::error!(language, %err, "skipping token rule");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_is_anchored() {
        let rule = TokenRule::new(TokenKind::Number, r"[0-9]+").unwrap();
        assert_eq!(rule.match_at("abc 123 def", 4), Some(7));
        assert_eq!(rule.match_at("abc 123 def", 5), Some(7));
        // A match further along must not be accepted
        assert_eq!(rule.match_at("abc 123 def", 0), None);
        assert_eq!(rule.match_at("abc 123 def", 3), None);
    }

    #[test]
    fn test_empty_match_fails() {
        let rule = TokenRule::new(TokenKind::Whitespace, r"\s*").unwrap();
        assert_eq!(rule.match_at("abc", 0), None);
        assert_eq!(rule.match_at("  abc", 0), Some(2));
    }

    #[test]
    fn test_out_of_range() {
        let rule = TokenRule::new(TokenKind::Word, r"[a-z]+").unwrap();
        assert_eq!(rule.match_at("abc", 3), None);
        assert_eq!(rule.match_at("", 0), None);
    }

    #[test]
    fn test_word_boundary_sees_left_context() {
        let rule = TokenRule::new(TokenKind::Number, r"\b[0-9]+\b").unwrap();
        assert_eq!(rule.match_at("x 42", 2), Some(4));
        assert_eq!(rule.match_at("x42", 1), None);
    }

    #[test]
    fn test_multiline_caret_needs_line_start() {
        let rule = TokenRule::new(TokenKind::Heading, r"(?m)^#{1,6}\s+.+$").unwrap();
        assert_eq!(rule.match_at("# Title", 0), Some(7));
        assert_eq!(rule.match_at("text\n## Sub\nmore", 5), Some(11));
        assert_eq!(rule.match_at("a # b", 2), None);
    }

    #[test]
    fn test_invalid_pattern() {
        let err = TokenRule::new(TokenKind::String, r"(unclosed").unwrap_err();
        assert!(matches!(err, Error::Pattern { kind: "string", .. }));
    }

    #[test]
    fn test_compile_table_skips_bad_rules() {
        let rules = compile_table(
            "Test",
            &[
                (TokenKind::Comment, r"#[^\n]*"),
                (TokenKind::String, r"(oops"),
                (TokenKind::Whitespace, r"\s+"),
            ],
        );
        assert_eq!(rules.len(), 2);
        assert_eq!(rules[0].kind, TokenKind::Comment);
        assert_eq!(rules[1].kind, TokenKind::Whitespace);
    }
}
