//! Markdown language definition

use crate::syntax::language::LanguageDefinition;
use crate::syntax::rules::compile_table;
use crate::syntax::tokens::TokenKind;

const RULES: &[(TokenKind, &str)] = &[
    // Headings only at the start of a line
    (TokenKind::Heading, r"(?mR)^#{1,6}\s+.+$"),
    (TokenKind::Code, r"`[^`\n]+`"),
    (TokenKind::Bold, r"\*\*[^*]+\*\*"),
    (TokenKind::Italic, r"\*[^*]+\*"),
    (TokenKind::Link, r"\[[^\]]+\]\([^)]+\)"),
    (TokenKind::Whitespace, r"\s+"),
];

/// Create Markdown language definition
pub fn markdown_language() -> LanguageDefinition {
    LanguageDefinition::new("Markdown")
        .with_aliases(&["md", "markdown"])
        .with_rules(compile_table("Markdown", RULES))
}
