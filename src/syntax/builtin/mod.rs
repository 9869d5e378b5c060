//! Built-in grammars
//!
//! Every grammar starts with the common number and string rules, then
//! the language's own rules are appended. Order is significant: later
//! rules repaint earlier ones where they overlap.

mod c_style;
mod common;
mod css;
mod html;
mod javascript;
mod python;
mod sql;

use super::grammar::Grammar;
use super::language::Language;
use crate::error::Result;

/// Build the grammar for a language
pub fn grammar_for(language: Language) -> Result<Grammar> {
    let mut grammar = Grammar::new(language);
    common::add_common_rules(&mut grammar)?;

    match language {
        Language::Python => python::add_rules(&mut grammar)?,
        Language::JavaScript => javascript::add_rules(&mut grammar)?,
        Language::Html => html::add_rules(&mut grammar)?,
        Language::Css => css::add_rules(&mut grammar)?,
        Language::Sql => sql::add_rules(&mut grammar)?,
        language if language.is_c_style() => c_style::add_rules(&mut grammar)?,
        _ => {}
    }

    Ok(grammar)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_grammars_compile() {
        for language in Language::ALL {
            let grammar = grammar_for(language);
            assert!(grammar.is_ok(), "{language}: {:?}", grammar.err());
        }
    }

    #[test]
    fn test_common_rules_first() {
        for language in Language::ALL {
            let grammar = grammar_for(language).unwrap();
            let names: Vec<_> = grammar.rules().iter().take(3).map(|r| r.name.as_str()).collect();
            assert_eq!(names, ["number", "double_string", "single_string"], "{language}");
        }
    }

    #[test]
    fn test_text_has_no_comment_rules() {
        let grammar = grammar_for(Language::Text).unwrap();
        assert_eq!(grammar.rules().len(), 3);
        assert!(!grammar.has_line_comment());
        assert!(!grammar.has_block_comment());
    }

    #[test]
    fn test_comment_configuration() {
        let expect = [
            (Language::Python, true, true),
            (Language::JavaScript, true, true),
            (Language::Html, false, true),
            (Language::Css, false, true),
            (Language::Sql, true, true),
            (Language::Go, true, true),
        ];
        for (language, line, block) in expect {
            let grammar = grammar_for(language).unwrap();
            assert_eq!(grammar.has_line_comment(), line, "{language}");
            assert_eq!(grammar.has_block_comment(), block, "{language}");
        }
    }
}
