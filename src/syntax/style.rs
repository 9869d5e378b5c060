//! Style types for classified text
//!
//! The engine only classifies; these types describe how a class is
//! meant to look, and the spans it produces.

use std::ops::Range;

use super::tokens::StyleClass;

/// Display colors: the ANSI 16-color palette plus 24-bit RGB
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    #[default]
    Default,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
    Rgb(u8, u8, u8),
}

impl Color {
    /// Parse a color from `#rrggbb` or an ANSI color name (`bright-blue`, `bright_blue`)
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if let Some(hex) = s.strip_prefix('#') {
            if hex.len() != 6 || !hex.is_ascii() {
                return None;
            }
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            return Some(Color::Rgb(r, g, b));
        }

        let name = s.to_lowercase().replace(['-', '_'], "");
        let color = match name.as_str() {
            "default" => Color::Default,
            "black" => Color::Black,
            "red" => Color::Red,
            "green" => Color::Green,
            "yellow" => Color::Yellow,
            "blue" => Color::Blue,
            "magenta" => Color::Magenta,
            "cyan" => Color::Cyan,
            "white" => Color::White,
            "brightblack" | "grey" | "gray" => Color::BrightBlack,
            "brightred" => Color::BrightRed,
            "brightgreen" => Color::BrightGreen,
            "brightyellow" => Color::BrightYellow,
            "brightblue" => Color::BrightBlue,
            "brightmagenta" => Color::BrightMagenta,
            "brightcyan" => Color::BrightCyan,
            "brightwhite" => Color::BrightWhite,
            _ => return None,
        };
        Some(color)
    }
}

/// Visual attributes for one style class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    /// Foreground color
    pub fg: Color,
    /// Bold weight
    pub bold: bool,
    /// Italic text
    pub italic: bool,
}

impl Style {
    /// Create a style with just a foreground color
    pub fn fg(color: Color) -> Self {
        Self {
            fg: color,
            ..Default::default()
        }
    }

    /// Create a style with an RGB foreground
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::fg(Color::Rgb(r, g, b))
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

    /// Check if this is the default (no styling)
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

/// A classified sub-range of one block's text
///
/// Offsets are UTF-8 byte offsets into the block and always fall on
/// char boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyledSpan {
    /// Byte offset where this span starts
    pub start: usize,
    /// Length in bytes
    pub len: usize,
    /// Class assigned to every byte of the span
    pub class: StyleClass,
}

impl StyledSpan {
    /// Create a new span
    pub fn new(start: usize, len: usize, class: StyleClass) -> Self {
        Self { start, len, class }
    }

    /// Exclusive end offset
    pub fn end(&self) -> usize {
        self.start + self.len
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end()
    }

    /// Check if this span contains a byte position
    pub fn contains(&self, pos: usize) -> bool {
        pos >= self.start && pos < self.end()
    }

    /// Slice the span's text out of its block
    pub fn text<'a>(&self, block: &'a str) -> &'a str {
        &block[self.range()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_default() {
        let style = Style::default();
        assert!(style.is_default());
        assert_eq!(style.fg, Color::Default);
        assert!(!style.bold);
        assert!(!style.italic);
    }

    #[test]
    fn test_style_builders() {
        let style = Style::rgb(128, 128, 128).with_italic();
        assert_eq!(style.fg, Color::Rgb(128, 128, 128));
        assert!(style.italic);
        assert!(!style.bold);
        assert!(!style.is_default());
    }

    #[test]
    fn test_color_parse() {
        assert_eq!(Color::parse("#c586c0"), Some(Color::Rgb(0xc5, 0x86, 0xc0)));
        assert_eq!(Color::parse("bright-blue"), Some(Color::BrightBlue));
        assert_eq!(Color::parse("Bright_Blue"), Some(Color::BrightBlue));
        assert_eq!(Color::parse("grey"), Some(Color::BrightBlack));
        assert_eq!(Color::parse("#12345"), None);
        assert_eq!(Color::parse("#gg0000"), None);
        assert_eq!(Color::parse("mauve"), None);
    }

    #[test]
    fn test_span_contains() {
        let span = StyledSpan::new(8, 5, StyleClass::Number);
        assert!(!span.contains(7));
        assert!(span.contains(8));
        assert!(span.contains(12));
        assert!(!span.contains(13));
        assert_eq!(span.end(), 13);
        assert_eq!(span.text("let x = 12345;"), "12345");
    }
}
