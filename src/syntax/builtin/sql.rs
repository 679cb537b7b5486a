//! SQL language definition
//!
//! Keywords are stored lowercase; classification falls back to the
//! lowercased word, so `SELECT` and `select` both match.

use crate::syntax::language::LanguageDefinition;
use crate::syntax::rules::compile_table;
use crate::syntax::tokens::TokenKind;

const RULES: &[(TokenKind, &str)] = &[
    (TokenKind::Comment, r"--[^\n]*"),
    (TokenKind::Comment, r"/\*[\s\S]*?\*/"),
    (TokenKind::String, r#"'(?:[^'\\]|\\.)*'|"(?:[^"\\]|\\.)*""#),
    (TokenKind::Number, r"(?-u:\b)[0-9]+\.?[0-9]*(?-u:\b)"),
    (TokenKind::Word, r"[a-zA-Z_][a-zA-Z0-9_]*"),
    (TokenKind::Operator, r"[=<>!+\-*/%]"),
    (TokenKind::Punctuation, r"[();,.*]"),
    (TokenKind::Whitespace, r"\s+"),
];

const KEYWORDS: &[&str] = &[
    "select", "from", "where", "and", "or", "not", "in", "like", "between",
    "is", "null", "as", "join", "inner", "left", "right", "outer", "on",
    "group", "by", "having", "order", "asc", "desc", "limit", "offset",
    "insert", "into", "values", "update", "set", "delete", "create",
    "table", "drop", "alter", "add", "column", "index", "primary", "key",
    "foreign", "references", "unique", "default", "constraint", "distinct",
    "union", "all", "case", "when", "then", "else", "end", "exists", "true", "false",
];

const BUILTINS: &[&str] = &[
    "count", "sum", "avg", "min", "max", "coalesce", "nullif", "cast",
    "convert", "concat", "substring", "length", "upper", "lower", "trim",
    "now", "date", "time", "timestamp", "int", "varchar", "text", "boolean",
];

/// Create SQL language definition
pub fn sql_language() -> LanguageDefinition {
    LanguageDefinition::new("SQL")
        .with_aliases(&["sql"])
        .with_keywords(KEYWORDS)
        .with_builtins(BUILTINS)
        .with_rules(compile_table("SQL", RULES))
}
