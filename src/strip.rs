//! TypeScript type-annotation stripping
//!
//! A textual, non-parsing pass that removes enough TypeScript syntax for
//! simple snippets to run as JavaScript. It is lossy: colons in object
//! literals or ternaries can be mis-stripped, and generics it does not
//! recognise are left alone. Good enough for a demo run, not a compiler.

use std::sync::OnceLock;

use regex::Regex;

struct Patterns {
    /// `: Type` up to (not including) one of `, ) ] = ;`
    annotation: Option<Regex>,
    /// `as Type`
    cast: Option<Regex>,
    /// `<Type>` right before a call's `(`
    type_args: Option<Regex>,
    /// Whole `interface`/`type` lines
    declaration: Option<Regex>,
}

fn patterns() -> &'static Patterns {
    static PATTERNS: OnceLock<Patterns> = OnceLock::new();
    PATTERNS.get_or_init(|| Patterns {
        annotation: compile(r":\s*[A-Za-z<>\[\]|&,\s]+([,)\]=;])"),
        cast: compile(r"(?-u:\b)as\s+[A-Za-z<>\[\]|&]+"),
        type_args: compile(r"<[A-Za-z<>\[\]|&,\s]+>(\()"),
        declaration: compile(r"(?mR)^(?:interface|type)\s+.*$"),
    })
}

// A pattern that fails to compile disables its pass
fn compile(pattern: &str) -> Option<Regex> {
    Regex::new(pattern)
        .map_err(|err| tracing::error!(pattern, %err, "invalid strip pattern"))
        .ok()
}

fn replace(pattern: &Option<Regex>, text: String, with: &str) -> String {
    match pattern {
        Some(re) => re.replace_all(&text, with).into_owned(),
        None => text,
    }
}

/// Remove type annotations, casts, explicit call type arguments and
/// `interface`/`type` declaration lines
pub fn strip_annotations(source: &str) -> String {
    let p = patterns();
    let text = replace(&p.annotation, source.to_string(), "$1");
    let text = replace(&p.cast, text, "");
    let text = replace(&p.type_args, text, "$1");
    replace(&p.declaration, text, "")
}
