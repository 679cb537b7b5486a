//! CSS language definition
//!
//! CSS has no word rule, so its keyword set never classifies anything;
//! identifiers are matched as selectors instead.

use crate::syntax::language::LanguageDefinition;
use crate::syntax::rules::compile_table;
use crate::syntax::tokens::TokenKind;

const RULES: &[(TokenKind, &str)] = &[
    (TokenKind::Comment, r"/\*[\s\S]*?\*/"),
    (TokenKind::String, r#""(?:[^"\\]|\\.)*"|'(?:[^'\\]|\\.)*'"#),
    (TokenKind::Number, r"(?-u:\b)[0-9]+\.?[0-9]*(?:px|em|rem|%|vh|vw|deg|s|ms)?(?-u:\b)"),
    (TokenKind::Selector, r"[.#]?[a-zA-Z_-][a-zA-Z0-9_-]*"),
    (TokenKind::Operator, r"[:;{}(),>+~*]"),
    (TokenKind::Whitespace, r"\s+"),
];

/// Create CSS language definition
pub fn css_language() -> LanguageDefinition {
    LanguageDefinition::new("CSS")
        .with_aliases(&["css"])
        .with_keywords(&["important", "inherit", "initial", "unset", "revert"])
        .with_rules(compile_table("CSS", RULES))
}
