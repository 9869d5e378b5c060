//! Generic C-style grammar
//!
//! Shared by Java, C++, C#, PHP, Ruby and Go: a common keyword subset,
//! literals, `#` directives and C comments.

use crate::error::Result;
use crate::syntax::grammar::Grammar;
use crate::syntax::rules::Rule;
use crate::syntax::tokens::StyleClass;

const KEYWORDS: &[&str] = &[
    "if", "else", "for", "while", "do", "switch", "case", "default", "break", "continue", "return",
    "goto", "try", "catch", "finally", "throw", "throws", "public", "private", "protected",
    "static", "final", "abstract", "class", "interface", "enum", "struct", "namespace", "using",
    "import", "package", "new", "delete", "this", "super", "extends", "implements", "virtual",
    "override", "const", "volatile", "synchronized", "transient", "native", "void", "int", "long",
    "float", "double", "char", "byte", "short", "boolean", "string", "var", "let", "auto",
];

const LITERALS: &[&str] = &["true", "false", "null", "nullptr", "undefined"];

pub fn add_rules(grammar: &mut Grammar) -> Result<()> {
    grammar.push(Rule::words("keyword", KEYWORDS, StyleClass::Keyword, false)?);
    grammar.push(Rule::words("literal", LITERALS, StyleClass::Literal, false)?);
    grammar.push(Rule::new("preprocessor", r"(?m)^[ \t]*#.*", StyleClass::Preprocessor)?);

    grammar.set_line_comment(r"(?m)//.*$")?;
    grammar.set_block_comment(r"/\*", r"\*/")?;
    Ok(())
}
