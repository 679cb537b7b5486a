//! Built-in language definitions
//!
//! This module provides syntax highlighting definitions for the
//! languages a code block can be fenced with out of the box.

mod css;
mod html;
mod javascript;
mod json;
mod markdown;
mod python;
mod shell;
mod sql;

use super::language::LanguageDefinition;

/// Get all built-in language definitions, in selector order
pub fn all_languages() -> Vec<LanguageDefinition> {
    vec![
        javascript::javascript_language(),
        javascript::typescript_language(),
        python::python_language(),
        html::html_language(),
        css::css_language(),
        json::json_language(),
        markdown::markdown_language(),
        shell::shell_language(),
        sql::sql_language(),
    ]
}
