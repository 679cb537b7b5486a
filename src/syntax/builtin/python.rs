//! Python language definition

use crate::syntax::language::LanguageDefinition;
use crate::syntax::rules::compile_table;
use crate::syntax::tokens::TokenKind;

const RULES: &[(TokenKind, &str)] = &[
    (TokenKind::Comment, r"#[^\n]*"),
    // Triple-quoted strings before the single-line forms
    (TokenKind::String, r#""""[\s\S]*?""""#),
    (TokenKind::String, r"'''[\s\S]*?'''"),
    (TokenKind::String, r#"f?"(?:[^"\\]|\\.)*""#),
    (TokenKind::String, r"f?'(?:[^'\\]|\\.)*'"),
    (
        TokenKind::Number,
        r"(?-u:\b)(?:0x[0-9a-fA-F]+|0b[01]+|0o[0-7]+|[0-9]+\.?[0-9]*(?:e[+-]?[0-9]+)?j?)(?-u:\b)",
    ),
    (TokenKind::Operator, r"[+\-*/%=<>!&|^~@:]+"),
    (TokenKind::Word, r"[a-zA-Z_][a-zA-Z0-9_]*"),
    (TokenKind::Punctuation, r"[{}()\[\];,.]"),
    (TokenKind::Whitespace, r"\s+"),
];

const KEYWORDS: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await",
    "break", "class", "continue", "def", "del", "elif", "else", "except",
    "finally", "for", "from", "global", "if", "import", "in", "is",
    "lambda", "nonlocal", "not", "or", "pass", "raise", "return", "try",
    "while", "with", "yield",
];

const BUILTINS: &[&str] = &[
    "abs", "all", "any", "bin", "bool", "bytes", "callable", "chr",
    "classmethod", "compile", "complex", "dict", "dir", "divmod",
    "enumerate", "eval", "exec", "filter", "float", "format", "frozenset",
    "getattr", "globals", "hasattr", "hash", "help", "hex", "id", "input",
    "int", "isinstance", "issubclass", "iter", "len", "list", "locals",
    "map", "max", "min", "next", "object", "oct", "open", "ord", "pow",
    "print", "property", "range", "repr", "reversed", "round", "set",
    "setattr", "slice", "sorted", "staticmethod", "str", "sum", "super",
    "tuple", "type", "vars", "zip", "self",
];

/// Create Python language definition
pub fn python_language() -> LanguageDefinition {
    LanguageDefinition::new("Python")
        .with_aliases(&["py", "python", "python3"])
        .with_keywords(KEYWORDS)
        .with_builtins(BUILTINS)
        .with_rules(compile_table("Python", RULES))
}
