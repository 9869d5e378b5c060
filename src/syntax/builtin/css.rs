//! CSS grammar

use crate::error::Result;
use crate::syntax::grammar::Grammar;
use crate::syntax::rules::Rule;
use crate::syntax::tokens::StyleClass;

/// Tags, `.class`, `#id` and `*`, preceded by start of block, `,`, `{` or whitespace
const SELECTOR: &str = r"(?:^|[,{\s])([#.]?[a-zA-Z][a-zA-Z0-9\-_]*|[*])";

const VALUE: &str =
    r":\s*(#[0-9a-fA-F]{3,8}|rgba?\(.*?\)|hsla?\(.*?\)|[-\w]+|\d+(?:\.\d+)?(?:px|em|rem|%|pt|vh|vw)?)\b";

pub fn add_rules(grammar: &mut Grammar) -> Result<()> {
    grammar.push(Rule::new("selector", SELECTOR, StyleClass::Selector)?.with_group(1));
    grammar.push(Rule::new("pseudo_class", r":[a-zA-Z\-]+", StyleClass::Selector)?);
    grammar.push(Rule::new("property", r"\b([a-zA-Z\-]+)\s*:", StyleClass::Property)?);
    grammar.push(Rule::new("value", VALUE, StyleClass::Value)?.with_group(1));

    grammar.set_block_comment(r"/\*", r"\*/")?;
    Ok(())
}
