//! JSON language definition

use crate::syntax::language::LanguageDefinition;
use crate::syntax::rules::compile_table;
use crate::syntax::tokens::TokenKind;

const RULES: &[(TokenKind, &str)] = &[
    (TokenKind::String, r#""(?:[^"\\]|\\.)*""#),
    (TokenKind::Number, r"-?(?-u:\b)[0-9]+\.?[0-9]*(?:e[+-]?[0-9]+)?(?-u:\b)"),
    (TokenKind::Keyword, r"(?-u:\b)(?:true|false|null)(?-u:\b)"),
    (TokenKind::Punctuation, r"[{}\[\]:,]"),
    (TokenKind::Whitespace, r"\s+"),
];

/// Create JSON language definition
pub fn json_language() -> LanguageDefinition {
    LanguageDefinition::new("JSON")
        .with_aliases(&["json"])
        .with_keywords(&["true", "false", "null"])
        .with_rules(compile_table("JSON", RULES))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_rules_compile() {
        let json = json_language();
        assert_eq!(json.rules.len(), RULES.len());
        assert_eq!(json.rules[1].match_at("-12.5e3,", 0), Some(7));
        assert_eq!(json.rules[2].match_at("nullish", 0), None);
    }
}
