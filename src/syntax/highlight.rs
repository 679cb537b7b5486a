//! Tokenizer and highlighter
//!
//! Scans left to right. At each offset every rule is tried anchored at that
//! offset in declared order, and the first non-empty match becomes a token.
//! Where nothing matches, one character is emitted as-is, so a scan of `n`
//! characters yields at most `n` tokens.

use std::fmt::Write as _;

use super::language::LanguageDefinition;
use super::registry::{self, Registry};
use super::tokens::{TokenClass, TokenKind};

/// A token produced by one highlight pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    /// Rule kind, or `None` for an unmatched single character
    pub kind: Option<TokenKind>,
    /// Matched text
    pub text: &'a str,
    /// Presentation class, if any
    pub class: Option<TokenClass>,
}

impl<'a> Token<'a> {
    fn plain(text: &'a str) -> Self {
        Self {
            kind: None,
            text,
            class: None,
        }
    }
}

/// Escape `&`, `<` and `>` for embedding in markup
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    push_escaped(&mut out, text);
    out
}

fn push_escaped(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
}

/// Split `text` into tokens using `lang`'s rule table
pub fn tokenize<'a>(text: &'a str, lang: &LanguageDefinition) -> Vec<Token<'a>> {
    let mut tokens = Vec::new();
    let mut pos = 0;

    while pos < text.len() {
        let matched = lang
            .rules
            .iter()
            .find_map(|rule| rule.match_at(text, pos).map(|end| (rule.kind, end)));

        match matched {
            Some((kind, end)) => {
                let word = &text[pos..end];
                let class = match kind {
                    TokenKind::Word => classify_word(lang, word, &text[end..]),
                    _ => kind.class(),
                };
                tokens.push(Token {
                    kind: Some(kind),
                    text: word,
                    class,
                });
                pos = end;
            }
            None => {
                // No rule here: emit one character and move on
                let len = text[pos..].chars().next().map_or(1, char::len_utf8);
                tokens.push(Token::plain(&text[pos..pos + len]));
                pos += len;
            }
        }
    }

    tokens
}

/// Keyword beats builtin beats function call
fn classify_word(lang: &LanguageDefinition, word: &str, rest: &str) -> Option<TokenClass> {
    if lang.is_keyword(word) {
        Some(TokenClass::Keyword)
    } else if lang.is_builtin(word) {
        Some(TokenClass::Builtin)
    } else if rest.starts_with('(') {
        Some(TokenClass::Function)
    } else {
        None
    }
}

/// Render tokens as escaped markup with `<span class=..>` wrappers
pub fn render_html(tokens: &[Token<'_>]) -> String {
    let mut out = String::new();
    for token in tokens {
        match token.class {
            Some(class) => {
                let _ = write!(out, "<span class=\"{}\">", class.css_class());
                push_escaped(&mut out, token.text);
                out.push_str("</span>");
            }
            None => push_escaped(&mut out, token.text),
        }
    }
    out
}

/// Render tokens with terminal colors
pub fn render_ansi(tokens: &[Token<'_>]) -> String {
    let mut out = String::new();
    for token in tokens {
        match token.class {
            Some(class) => {
                let _ = write!(out, "{}", class.default_style().paint(token.text));
            }
            None => out.push_str(token.text),
        }
    }
    out
}

impl Registry {
    /// Highlight `text` as markup. Unknown aliases and languages without
    /// rules fall back to the escaped text.
    pub fn highlight(&self, text: &str, alias: &str) -> String {
        match self.resolve(alias) {
            Some(lang) if !lang.rules.is_empty() => render_html(&tokenize(text, lang)),
            _ => {
                tracing::debug!(alias, "no highlighter for alias, escaping verbatim");
                escape_html(text)
            }
        }
    }
}

/// Highlight with the process-wide registry
pub fn highlight(text: &str, alias: &str) -> String {
    registry::global().highlight(text, alias)
}
