//! Token kinds and classes for syntax highlighting
//!
//! A `TokenKind` is what a rule matched; a `TokenClass` is how the
//! highlighter decided to present it. The class table is the external CSS
//! contract: consumers style the `ce-*` names, not the kinds.

use super::style::{Color, Style};

/// Semantic kind attached to a token rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Line and block comments
    Comment,
    /// Quoted string literals
    String,
    /// Numeric literals
    Number,
    /// Regular-expression literals (`/ab+c/g`)
    Regex,
    /// Operator runs
    Operator,
    /// Literal keywords matched directly by a rule (JSON `true`)
    Keyword,
    /// Identifiers, classified further against keyword/builtin sets
    Word,
    /// Brackets, separators
    Punctuation,
    /// Spaces, tabs, newlines
    Whitespace,
    /// Markup tags
    Tag,
    /// CSS selectors and property names
    Selector,
    /// Markdown headings
    Heading,
    /// Markdown inline code
    Code,
    /// Markdown bold
    Bold,
    /// Markdown italic
    Italic,
    /// Markdown links
    Link,
    /// Shell variables
    Variable,
}

impl TokenKind {
    /// The class a token of this kind gets before word classification.
    ///
    /// `Word`, `Punctuation` and `Whitespace` are emitted unwrapped.
    pub fn class(&self) -> Option<TokenClass> {
        match self {
            TokenKind::Comment => Some(TokenClass::Comment),
            TokenKind::String => Some(TokenClass::String),
            TokenKind::Number => Some(TokenClass::Number),
            TokenKind::Regex => Some(TokenClass::Regex),
            TokenKind::Operator => Some(TokenClass::Operator),
            TokenKind::Keyword => Some(TokenClass::Keyword),
            TokenKind::Tag => Some(TokenClass::Tag),
            TokenKind::Selector => Some(TokenClass::Selector),
            TokenKind::Heading => Some(TokenClass::Heading),
            TokenKind::Code => Some(TokenClass::Code),
            TokenKind::Bold => Some(TokenClass::Bold),
            TokenKind::Italic => Some(TokenClass::Italic),
            TokenKind::Link => Some(TokenClass::Link),
            TokenKind::Variable => Some(TokenClass::Variable),
            TokenKind::Word | TokenKind::Punctuation | TokenKind::Whitespace => None,
        }
    }

    /// Get the lowercase name used in language files
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Comment => "comment",
            TokenKind::String => "string",
            TokenKind::Number => "number",
            TokenKind::Regex => "regex",
            TokenKind::Operator => "operator",
            TokenKind::Keyword => "keyword",
            TokenKind::Word => "word",
            TokenKind::Punctuation => "punctuation",
            TokenKind::Whitespace => "whitespace",
            TokenKind::Tag => "tag",
            TokenKind::Selector => "selector",
            TokenKind::Heading => "heading",
            TokenKind::Code => "code",
            TokenKind::Bold => "bold",
            TokenKind::Italic => "italic",
            TokenKind::Link => "link",
            TokenKind::Variable => "variable",
        }
    }

    /// Parse a token kind from its name (for TOML loading)
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "comment" => Some(TokenKind::Comment),
            "string" => Some(TokenKind::String),
            "number" => Some(TokenKind::Number),
            "regex" => Some(TokenKind::Regex),
            "operator" => Some(TokenKind::Operator),
            "keyword" => Some(TokenKind::Keyword),
            "word" => Some(TokenKind::Word),
            "punctuation" => Some(TokenKind::Punctuation),
            "whitespace" => Some(TokenKind::Whitespace),
            "tag" => Some(TokenKind::Tag),
            "selector" => Some(TokenKind::Selector),
            "heading" => Some(TokenKind::Heading),
            "code" => Some(TokenKind::Code),
            "bold" => Some(TokenKind::Bold),
            "italic" => Some(TokenKind::Italic),
            "link" => Some(TokenKind::Link),
            "variable" => Some(TokenKind::Variable),
            _ => None,
        }
    }
}

/// Presentation class of an emitted token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenClass {
    Comment,
    String,
    Number,
    Regex,
    Operator,
    Keyword,
    /// Word found in the language's builtin set
    Builtin,
    /// Word immediately followed by `(`
    Function,
    Tag,
    Selector,
    Heading,
    Code,
    Bold,
    Italic,
    Link,
    Variable,
}

impl TokenClass {
    /// The fixed CSS class name for this token class
    pub fn css_class(&self) -> &'static str {
        match self {
            TokenClass::Comment => "ce-comment",
            TokenClass::String => "ce-string",
            TokenClass::Number => "ce-number",
            TokenClass::Regex => "ce-regex",
            TokenClass::Operator => "ce-operator",
            TokenClass::Keyword => "ce-keyword",
            TokenClass::Builtin => "ce-builtin",
            TokenClass::Function => "ce-function",
            TokenClass::Tag => "ce-tag",
            TokenClass::Selector => "ce-selector",
            TokenClass::Heading => "ce-heading",
            TokenClass::Code => "ce-code",
            TokenClass::Bold => "ce-bold",
            TokenClass::Italic => "ce-italic",
            TokenClass::Link => "ce-link",
            TokenClass::Variable => "ce-variable",
        }
    }

    /// Terminal style used by the ANSI renderer
    pub fn default_style(&self) -> Style {
        match self {
            TokenClass::Comment => Style::fg(Color::BrightBlack).with_italic(),
            TokenClass::String => Style::fg(Color::Green),
            TokenClass::Number => Style::fg(Color::Cyan),
            TokenClass::Regex => Style::fg(Color::BrightRed),
            TokenClass::Operator => Style::fg(Color::BrightWhite),
            TokenClass::Keyword => Style::fg(Color::Magenta).with_bold(),
            TokenClass::Builtin => Style::fg(Color::Yellow),
            TokenClass::Function => Style::fg(Color::Blue),
            TokenClass::Tag => Style::fg(Color::Red),
            TokenClass::Selector => Style::fg(Color::BrightBlue),
            TokenClass::Heading => Style::fg(Color::BrightMagenta).with_bold(),
            TokenClass::Code => Style::fg(Color::BrightCyan),
            TokenClass::Bold => Style::default().with_bold(),
            TokenClass::Italic => Style::default().with_italic(),
            TokenClass::Link => Style::fg(Color::Blue).with_underline(),
            TokenClass::Variable => Style::fg(Color::BrightYellow),
        }
    }
}
