//! Syntax highlighting module
//!
//! Classifies source text one block (line) at a time:
//! - Rule tables per language (`builtin`)
//! - Block highlighting with block-comment state carried between blocks
//! - Language switching and per-document result caching

mod builtin;
mod engine;
mod grammar;
mod language;
mod rules;
mod style;
mod tokens;

pub use engine::{BlockCache, Engine};
pub use grammar::Grammar;
pub use language::Language;
pub use rules::{BlockDelimiters, BlockState, Highlight, Rule};
pub use style::{Color, Style, StyledSpan};
pub use tokens::StyleClass;

use crate::error::Result;

/// Build the grammar for a language name
///
/// Names are matched case-insensitively after trimming; unknown names
/// get the plain `Text` grammar.
pub fn build_grammar(name: &str) -> Result<Grammar> {
    builtin::grammar_for(Language::from_name(name))
}
