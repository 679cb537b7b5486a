//! Shell language definition

use crate::syntax::language::LanguageDefinition;
use crate::syntax::rules::compile_table;
use crate::syntax::tokens::TokenKind;

const RULES: &[(TokenKind, &str)] = &[
    (TokenKind::Comment, r"#[^\n]*"),
    (TokenKind::String, r#""(?:[^"\\]|\\.)*"|'[^']*'"#),
    (TokenKind::Variable, r"\$(?:[a-zA-Z_][a-zA-Z0-9_]*|\{[^}]+\})"),
    (TokenKind::Number, r"(?-u:\b)[0-9]+(?-u:\b)"),
    (TokenKind::Word, r"[a-zA-Z_][a-zA-Z0-9_-]*"),
    (TokenKind::Operator, r"[|&;<>()]"),
    (TokenKind::Whitespace, r"\s+"),
];

const KEYWORDS: &[&str] = &[
    "if", "then", "else", "elif", "fi", "case", "esac", "for", "while",
    "do", "done", "in", "function", "return", "exit", "export", "local",
    "readonly", "shift", "until", "select",
];

const BUILTINS: &[&str] = &[
    "echo", "cd", "pwd", "ls", "cat", "grep", "sed", "awk", "find",
    "mkdir", "rm", "cp", "mv", "chmod", "chown", "curl", "wget",
    "source", "alias", "unalias", "set", "unset", "test",
];

/// Create Shell language definition
pub fn shell_language() -> LanguageDefinition {
    LanguageDefinition::new("Shell")
        .with_aliases(&["sh", "bash", "zsh", "shell"])
        .with_keywords(KEYWORDS)
        .with_builtins(BUILTINS)
        .with_rules(compile_table("Shell", RULES))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variables() {
        let sh = shell_language();
        assert_eq!(sh.rules.len(), RULES.len());
        assert_eq!(sh.rules[2].match_at("$HOME/bin", 0), Some(5));
        assert_eq!(sh.rules[2].match_at("${PATH}:x", 0), Some(7));
        assert_eq!(sh.rules[2].match_at("$1", 0), None);
    }
}
