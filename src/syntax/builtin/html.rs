//! HTML grammar

use crate::error::Result;
use crate::syntax::grammar::Grammar;
use crate::syntax::rules::Rule;
use crate::syntax::tokens::StyleClass;

pub fn add_rules(grammar: &mut Grammar) -> Result<()> {
    grammar.push(Rule::new("tag", r"</?\s*([a-zA-Z0-9\-:]+)[^>]*>", StyleClass::Tag)?);
    grammar.push(Rule::new("attribute", r"\b([a-zA-Z\-]+)\s*=", StyleClass::Attribute)?);
    grammar.push(Rule::new("attribute_value", r#"=\s*("[^"]*"|'[^']*')"#, StyleClass::Value)?.with_group(1));
    grammar.push(Rule::new("doctype", r"<!DOCTYPE[^>]*>", StyleClass::Preprocessor)?);

    grammar.set_block_comment(r"<!--", r"-->")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::syntax::builtin::grammar_for;
    use crate::syntax::language::Language;
    use crate::syntax::rules::BlockState;
    use crate::syntax::tokens::StyleClass;

    #[test]
    fn test_tag_attribute_value() {
        let grammar = grammar_for(Language::Html).unwrap();
        let text = r#"<a href="x.html">link</a>"#;
        let result = grammar.highlight_block(text, BlockState::Normal);
        let found: Vec<_> = result.spans.iter().map(|s| (s.text(text), s.class)).collect();
        assert_eq!(
            found,
            vec![
                ("<a ", StyleClass::Tag),
                ("href=", StyleClass::Attribute),
                (r#""x.html""#, StyleClass::Value),
                (">", StyleClass::Tag),
                ("</a>", StyleClass::Tag),
            ]
        );
    }

    #[test]
    fn test_doctype() {
        let grammar = grammar_for(Language::Html).unwrap();
        let text = "<!DOCTYPE html>";
        let result = grammar.highlight_block(text, BlockState::Normal);
        assert_eq!(result.spans.len(), 1);
        assert_eq!(result.spans[0].class, StyleClass::Preprocessor);
    }

    #[test]
    fn test_comment_across_blocks() {
        let grammar = grammar_for(Language::Html).unwrap();
        let first = grammar.highlight_block("<p>hi</p> <!-- note", BlockState::Normal);
        assert_eq!(first.state, BlockState::InBlockComment);
        let text = "<b>x</b> --> <i>";
        let second = grammar.highlight_block(text, first.state);
        assert_eq!(second.state, BlockState::Normal);
        assert_eq!(second.spans[0].text(text), "<b>x</b> -->");
        assert_eq!(second.spans[0].class, StyleClass::BlockComment);
        assert_eq!(second.spans[1].text(text), "<i>");
        assert_eq!(second.spans[1].class, StyleClass::Tag);
    }

    #[test]
    fn test_no_line_comments() {
        let grammar = grammar_for(Language::Html).unwrap();
        let text = "<p>// not a comment</p>";
        let result = grammar.highlight_block(text, BlockState::Normal);
        assert!(result.spans.iter().all(|s| !s.class.is_comment()));
    }
}
