//! JavaScript and TypeScript language definitions
//!
//! Both share the C-like rule table. TypeScript swaps the final
//! punctuation rule for one that also accepts angle brackets.

use crate::syntax::language::LanguageDefinition;
use crate::syntax::rules::compile_table;
use crate::syntax::tokens::TokenKind;

/// Rules shared by the C-like languages, in match order.
///
/// The regex-literal rule sits before the operator rule, so `a / b / c`
/// reads as a regex literal. Keep the order as is.
pub const C_LIKE_RULES: &[(TokenKind, &str)] = &[
    (TokenKind::Comment, r"//[^\n]*"),
    (TokenKind::Comment, r"/\*[\s\S]*?\*/"),
    (TokenKind::String, r#""(?:[^"\\]|\\.)*""#),
    (TokenKind::String, r"'(?:[^'\\]|\\.)*'"),
    (TokenKind::String, r"`(?:[^`\\]|\\.)*`"),
    (TokenKind::Regex, r"/(?:[^\\/\n*]|\\.)(?:[^\\/\n]|\\.)*/[gimsuy]*"),
    (
        TokenKind::Number,
        r"(?-u:\b)(?:0x[0-9a-fA-F]+|0b[01]+|0o[0-7]+|[0-9]+\.?[0-9]*(?:e[+-]?[0-9]+)?)(?-u:\b)",
    ),
    (TokenKind::Operator, r"[+\-*/%=<>!&|^~?:]+|\.{3}"),
    (TokenKind::Word, r"[a-zA-Z_$][a-zA-Z0-9_$]*"),
    (TokenKind::Punctuation, r"[{}()\[\];,.]"),
    (TokenKind::Whitespace, r"\s+"),
];

const TS_TAIL_RULES: &[(TokenKind, &str)] = &[
    (TokenKind::Punctuation, r"[{}()\[\];,.<>]"),
    (TokenKind::Whitespace, r"\s+"),
];

const JS_KEYWORDS: &[&str] = &[
    "async", "await", "break", "case", "catch", "class", "const", "continue",
    "debugger", "default", "delete", "do", "else", "export", "extends", "finally",
    "for", "function", "if", "import", "in", "instanceof", "let", "new", "of",
    "return", "static", "super", "switch", "this", "throw", "try", "typeof",
    "var", "void", "while", "with", "yield", "true", "false", "null", "undefined",
];

const JS_BUILTINS: &[&str] = &[
    "console", "window", "document", "Array", "Object", "String", "Number",
    "Boolean", "Function", "Symbol", "Map", "Set", "WeakMap", "WeakSet",
    "Promise", "Proxy", "Reflect", "JSON", "Math", "Date", "RegExp", "Error",
    "TypeError", "SyntaxError", "ReferenceError", "parseInt", "parseFloat",
    "isNaN", "isFinite", "encodeURI", "decodeURI", "setTimeout", "setInterval",
    "clearTimeout", "clearInterval", "fetch", "URL", "URLSearchParams",
    "TextEncoder", "TextDecoder", "Blob", "File", "FileReader", "FormData",
    "XMLHttpRequest", "WebSocket", "localStorage", "sessionStorage",
    "Uint8Array", "Int8Array", "Uint16Array", "Int16Array", "Uint32Array",
    "Int32Array", "Float32Array", "Float64Array", "ArrayBuffer", "DataView",
];

const TS_KEYWORDS: &[&str] = &[
    "type", "interface", "enum", "namespace", "module", "declare", "abstract",
    "implements", "private", "protected", "public", "readonly", "as", "is",
    "keyof", "infer", "never", "unknown", "any",
];

const TS_BUILTINS: &[&str] = &[
    "Partial", "Required", "Readonly", "Record", "Pick", "Omit", "Exclude",
    "Extract", "NonNullable", "Parameters", "ReturnType", "InstanceType",
];

/// Create JavaScript language definition
pub fn javascript_language() -> LanguageDefinition {
    LanguageDefinition::new("JavaScript")
        .with_aliases(&["js", "javascript"])
        .runnable()
        .with_keywords(JS_KEYWORDS)
        .with_builtins(JS_BUILTINS)
        .with_rules(compile_table("JavaScript", C_LIKE_RULES))
}

/// Create TypeScript language definition
pub fn typescript_language() -> LanguageDefinition {
    let head = &C_LIKE_RULES[..C_LIKE_RULES.len() - 2];
    let table: Vec<_> = head.iter().chain(TS_TAIL_RULES).copied().collect();

    LanguageDefinition::new("TypeScript")
        .with_aliases(&["ts", "typescript"])
        .runnable()
        .stripping_types()
        .with_keywords(JS_KEYWORDS)
        .with_keywords(TS_KEYWORDS)
        .with_builtins(JS_BUILTINS)
        .with_builtins(TS_BUILTINS)
        .with_rules(compile_table("TypeScript", &table))
}
