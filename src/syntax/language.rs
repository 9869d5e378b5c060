//! Supported languages
//!
//! Language names arrive as free text from the host (a combo box, a
//! database column). They are resolved once into this closed set; any
//! name that is not recognised becomes `Text`.

use std::fmt;

/// A language the highlighter has a grammar for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    Python,
    JavaScript,
    Html,
    Css,
    Sql,
    Java,
    Cpp,
    CSharp,
    Php,
    Ruby,
    Go,
    /// Plain text: common number and string rules only
    #[default]
    Text,
}

impl Language {
    /// Every language, in the order they are listed to users
    pub const ALL: [Language; 12] = [
        Language::Python,
        Language::JavaScript,
        Language::Html,
        Language::Css,
        Language::Sql,
        Language::Java,
        Language::Cpp,
        Language::CSharp,
        Language::Php,
        Language::Ruby,
        Language::Go,
        Language::Text,
    ];

    /// Resolve a language name, case-insensitively and ignoring surrounding whitespace
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "python" | "py" => Language::Python,
            "javascript" | "js" => Language::JavaScript,
            "html" | "htm" => Language::Html,
            "css" => Language::Css,
            "sql" => Language::Sql,
            "java" => Language::Java,
            "c++" | "cpp" => Language::Cpp,
            "c#" | "cs" => Language::CSharp,
            "php" => Language::Php,
            "ruby" => Language::Ruby,
            "go" => Language::Go,
            _ => Language::Text,
        }
    }

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            Language::Python => "Python",
            Language::JavaScript => "JavaScript",
            Language::Html => "HTML",
            Language::Css => "CSS",
            Language::Sql => "SQL",
            Language::Java => "Java",
            Language::Cpp => "C++",
            Language::CSharp => "C#",
            Language::Php => "PHP",
            Language::Ruby => "Ruby",
            Language::Go => "Go",
            Language::Text => "Text",
        }
    }

    /// Position of this language in `Language::ALL`
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Whether this language shares the generic C-style grammar
    pub fn is_c_style(&self) -> bool {
        matches!(
            self,
            Language::Java | Language::Cpp | Language::CSharp | Language::Php | Language::Ruby | Language::Go
        )
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
