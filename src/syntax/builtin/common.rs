//! Rules shared by every language: numbers and quoted strings

use crate::error::Result;
use crate::syntax::grammar::Grammar;
use crate::syntax::rules::Rule;
use crate::syntax::tokens::StyleClass;

/// Optional sign, integer part, optional fraction and exponent
const NUMBER: &str = r"[-+]?\b\d+(?:\.\d+)?(?:[eE][+-]?\d+)?\b";

/// Quoted strings run to the first unescaped closing quote
const DOUBLE_STRING: &str = r#""(?:\\.|[^"\\])*""#;
const SINGLE_STRING: &str = r"'(?:\\.|[^'\\])*'";

pub fn add_common_rules(grammar: &mut Grammar) -> Result<()> {
    grammar.push(Rule::new("number", NUMBER, StyleClass::Number)?);
    grammar.push(Rule::new("double_string", DOUBLE_STRING, StyleClass::String)?);
    grammar.push(Rule::new("single_string", SINGLE_STRING, StyleClass::String)?);
    Ok(())
}
