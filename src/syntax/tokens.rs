//! Style classes for lexical classification
//!
//! This module defines the visual categories a span of text can be
//! classified as, and their default look.

use super::style::Style;

/// Visual categories assigned by the highlighter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleClass {
    /// Language keywords (def, SELECT, let)
    Keyword,
    /// Builtin functions and well-known names (len, COUNT, console)
    Builtin,
    /// Numeric literals
    Number,
    /// Quoted strings
    String,
    /// Single-line comments (#, //, --)
    Comment,
    /// Delimited comments that may span blocks
    BlockComment,
    /// Decorators and annotations (@property)
    Decorator,
    /// Markup tags
    Tag,
    /// Markup attributes
    Attribute,
    /// CSS selectors and pseudo-classes
    Selector,
    /// CSS properties
    Property,
    /// CSS and attribute values
    Value,
    /// true / false / null
    Literal,
    /// Preprocessor directives and doctype declarations
    Preprocessor,
    /// Distinguished identifiers (Python `self`)
    Special,
}

impl StyleClass {
    /// Every class, in declaration order
    pub const ALL: [StyleClass; 15] = [
        StyleClass::Keyword,
        StyleClass::Builtin,
        StyleClass::Number,
        StyleClass::String,
        StyleClass::Comment,
        StyleClass::BlockComment,
        StyleClass::Decorator,
        StyleClass::Tag,
        StyleClass::Attribute,
        StyleClass::Selector,
        StyleClass::Property,
        StyleClass::Value,
        StyleClass::Literal,
        StyleClass::Preprocessor,
        StyleClass::Special,
    ];

    /// Get the default style for this class
    pub fn default_style(&self) -> Style {
        match self {
            StyleClass::Keyword => Style::rgb(197, 134, 192).with_bold(),
            StyleClass::Builtin => Style::rgb(229, 192, 123),
            StyleClass::Number => Style::rgb(255, 170, 0),
            StyleClass::String => Style::rgb(152, 195, 121),
            StyleClass::Comment => Style::rgb(128, 128, 128).with_italic(),
            StyleClass::BlockComment => Style::rgb(128, 128, 128).with_italic(),
            StyleClass::Decorator => Style::rgb(220, 220, 170),
            StyleClass::Tag => Style::rgb(86, 156, 214),
            StyleClass::Attribute => Style::rgb(156, 220, 254),
            StyleClass::Selector => Style::rgb(215, 186, 125),
            StyleClass::Property => Style::rgb(156, 220, 254),
            StyleClass::Value => Style::rgb(184, 115, 211),
            StyleClass::Literal => Style::rgb(86, 156, 214),
            StyleClass::Preprocessor => Style::rgb(155, 155, 155),
            StyleClass::Special => Style::rgb(86, 156, 214),
        }
    }

    /// Whether this class is one of the comment classes
    pub fn is_comment(&self) -> bool {
        matches!(self, StyleClass::Comment | StyleClass::BlockComment)
    }

    /// Get the snake_case name for this class (used in theme files)
    pub fn name(&self) -> &'static str {
        match self {
            StyleClass::Keyword => "keyword",
            StyleClass::Builtin => "builtin",
            StyleClass::Number => "number",
            StyleClass::String => "string",
            StyleClass::Comment => "comment",
            StyleClass::BlockComment => "block_comment",
            StyleClass::Decorator => "decorator",
            StyleClass::Tag => "tag",
            StyleClass::Attribute => "attribute",
            StyleClass::Selector => "selector",
            StyleClass::Property => "property",
            StyleClass::Value => "value",
            StyleClass::Literal => "literal",
            StyleClass::Preprocessor => "preprocessor",
            StyleClass::Special => "special",
        }
    }

    /// Parse a class from its name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|class| class.name() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_styles_not_empty() {
        for class in StyleClass::ALL {
            assert!(!class.default_style().is_default(), "{}", class.name());
        }
        assert!(StyleClass::Keyword.default_style().bold);
        assert!(StyleClass::Comment.default_style().italic);
        assert!(StyleClass::BlockComment.default_style().italic);
    }

    #[test]
    fn test_from_name_roundtrip() {
        for class in StyleClass::ALL {
            assert_eq!(StyleClass::from_name(class.name()), Some(class));
        }
    }

    #[test]
    fn test_from_name_invalid() {
        assert_eq!(StyleClass::from_name("Keyword"), None);
        assert_eq!(StyleClass::from_name(""), None);
    }

    #[test]
    fn test_is_comment() {
        assert!(StyleClass::Comment.is_comment());
        assert!(StyleClass::BlockComment.is_comment());
        assert!(!StyleClass::String.is_comment());
    }
}
