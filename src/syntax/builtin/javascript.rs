//! JavaScript grammar

use crate::error::Result;
use crate::syntax::grammar::Grammar;
use crate::syntax::rules::Rule;
use crate::syntax::tokens::StyleClass;

const KEYWORDS: &[&str] = &[
    "break", "case", "catch", "class", "const", "continue", "debugger", "default", "delete", "do",
    "else", "export", "extends", "finally", "for", "function", "if", "import", "in", "instanceof",
    "new", "return", "super", "switch", "this", "throw", "try", "typeof", "var", "void", "while",
    "with", "yield", "let", "static", "async", "await", "get", "set",
];

const BUILTINS: &[&str] = &[
    "Array", "Boolean", "Date", "Error", "EvalError", "Function", "Infinity", "JSON", "Math",
    "NaN", "Number", "Object", "Promise", "Proxy", "RangeError", "ReferenceError", "RegExp", "Set",
    "String", "Symbol", "SyntaxError", "TypeError", "URIError", "Uint8Array", "Map", "WeakMap",
    "WeakSet", "console", "decodeURI", "decodeURIComponent", "document", "encodeURI",
    "encodeURIComponent", "eval", "isFinite", "isNaN", "null", "parseFloat", "parseInt",
    "undefined", "window", "globalThis", "arguments",
];

pub fn add_rules(grammar: &mut Grammar) -> Result<()> {
    grammar.push(Rule::words("keyword", KEYWORDS, StyleClass::Keyword, false)?);
    grammar.push(Rule::words("builtin", BUILTINS, StyleClass::Builtin, false)?);
    grammar.push(Rule::words("boolean", &["true", "false"], StyleClass::Literal, false)?);
    grammar.push(Rule::new("template", r"`(?:\\.|[^`])*`", StyleClass::String)?);

    grammar.set_line_comment(r"(?m)//.*$")?;
    grammar.set_block_comment(r"/\*", r"\*/")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::syntax::builtin::grammar_for;
    use crate::syntax::language::Language;
    use crate::syntax::rules::BlockState;
    use crate::syntax::style::StyledSpan;
    use crate::syntax::tokens::StyleClass;

    fn highlight(text: &str) -> Vec<StyledSpan> {
        let grammar = grammar_for(Language::JavaScript).unwrap();
        grammar.highlight_block(text, BlockState::Normal).spans
    }

    #[test]
    fn test_keywords_literals_builtins() {
        let text = "const ok = true; console.log(null)";
        let spans = highlight(text);
        let found: Vec<_> = spans.iter().map(|s| (s.text(text), s.class)).collect();
        assert_eq!(
            found,
            vec![
                ("const", StyleClass::Keyword),
                ("true", StyleClass::Literal),
                ("console", StyleClass::Builtin),
                ("null", StyleClass::Builtin),
            ]
        );
    }

    #[test]
    fn test_template_literal() {
        let text = "let s = `a ${b} c`;";
        let spans = highlight(text);
        let template = spans.iter().find(|s| s.class == StyleClass::String).unwrap();
        assert_eq!(template.text(text), "`a ${b} c`");
    }

    #[test]
    fn test_block_comment_inline() {
        let text = "f(/* 1 */ 2)";
        let spans = highlight(text);
        assert_eq!(spans[0], StyledSpan::new(2, 7, StyleClass::BlockComment));
        assert_eq!(spans[1], StyledSpan::new(10, 1, StyleClass::Number));
    }
}
