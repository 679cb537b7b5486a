//! Terminal styles for highlighted output
//!
//! The HTML renderer only needs class names; these styles back the ANSI
//! renderer used when a block is previewed in a terminal.

use crossterm::style::{Attribute, Color as TermColor, ContentStyle, StyledContent};

/// Terminal colors (ANSI 16-color palette for compatibility)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    #[default]
    Default,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    BrightBlack,
    BrightRed,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

impl Color {
    fn to_term(self) -> Option<TermColor> {
        match self {
            Color::Default => None,
            Color::Red => Some(TermColor::DarkRed),
            Color::Green => Some(TermColor::DarkGreen),
            Color::Yellow => Some(TermColor::DarkYellow),
            Color::Blue => Some(TermColor::DarkBlue),
            Color::Magenta => Some(TermColor::DarkMagenta),
            Color::Cyan => Some(TermColor::DarkCyan),
            Color::BrightBlack => Some(TermColor::DarkGrey),
            Color::BrightRed => Some(TermColor::Red),
            Color::BrightYellow => Some(TermColor::Yellow),
            Color::BrightBlue => Some(TermColor::Blue),
            Color::BrightMagenta => Some(TermColor::Magenta),
            Color::BrightCyan => Some(TermColor::Cyan),
            Color::BrightWhite => Some(TermColor::White),
        }
    }
}

/// Text style attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    /// Foreground color
    pub fg: Color,
    /// Bold text
    pub bold: bool,
    /// Italic text
    pub italic: bool,
    /// Underlined text
    pub underline: bool,
}

impl Style {
    /// Create a style with just foreground color
    pub fn fg(color: Color) -> Self {
        Self {
            fg: color,
            ..Default::default()
        }
    }

    /// Builder: set bold
    pub fn with_bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Builder: set italic
    pub fn with_italic(mut self) -> Self {
        self.italic = true;
        self
    }

    /// Builder: set underline
    pub fn with_underline(mut self) -> Self {
        self.underline = true;
        self
    }

    /// Check if this is the default (no styling)
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// Convert to a crossterm content style
    pub fn to_content_style(self) -> ContentStyle {
        let mut style = ContentStyle::new();
        style.foreground_color = self.fg.to_term();
        if self.bold {
            style.attributes.set(Attribute::Bold);
        }
        if self.italic {
            style.attributes.set(Attribute::Italic);
        }
        if self.underline {
            style.attributes.set(Attribute::Underlined);
        }
        style
    }

    /// Wrap text so it prints with this style
    pub fn paint<'a>(self, text: &'a str) -> StyledContent<&'a str> {
        self.to_content_style().apply(text)
    }
}
