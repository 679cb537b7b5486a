//! HTML language definition

use crate::syntax::language::LanguageDefinition;
use crate::syntax::rules::compile_table;
use crate::syntax::tokens::TokenKind;

const RULES: &[(TokenKind, &str)] = &[
    (TokenKind::Comment, r"<!--[\s\S]*?-->"),
    (TokenKind::Tag, r"</?[a-zA-Z][a-zA-Z0-9-]*(?:\s+[^>]*)?/?>"),
    (TokenKind::String, r#""[^"]*"|'[^']*'"#),
    (TokenKind::Whitespace, r"\s+"),
];

/// Create HTML language definition
pub fn html_language() -> LanguageDefinition {
    LanguageDefinition::new("HTML")
        .with_aliases(&["html", "htm"])
        .with_rules(compile_table("HTML", RULES))
}
