//! Python grammar

use crate::error::Result;
use crate::syntax::grammar::Grammar;
use crate::syntax::rules::Rule;
use crate::syntax::tokens::StyleClass;

const KEYWORDS: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
    "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global", "if",
    "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return", "try",
    "while", "with", "yield", "match", "case",
];

const BUILTINS: &[&str] = &[
    "abs", "all", "any", "ascii", "bin", "bool", "breakpoint", "bytearray", "bytes", "callable",
    "chr", "classmethod", "compile", "complex", "delattr", "dict", "dir", "divmod", "enumerate",
    "eval", "exec", "filter", "float", "format", "frozenset", "getattr", "globals", "hasattr",
    "hash", "help", "hex", "id", "input", "int", "isinstance", "issubclass", "iter", "len",
    "list", "locals", "map", "max", "memoryview", "min", "next", "object", "oct", "open", "ord",
    "pow", "print", "property", "range", "repr", "reversed", "round", "set", "setattr", "slice",
    "sorted", "staticmethod", "str", "sum", "super", "tuple", "type", "vars", "zip", "__import__",
];

/// Triple quotes open and close docstrings with the same token
const TRIPLE_QUOTE: &str = r#""""|'''"#;

pub fn add_rules(grammar: &mut Grammar) -> Result<()> {
    grammar.push(Rule::words("keyword", KEYWORDS, StyleClass::Keyword, false)?);
    grammar.push(Rule::words("builtin", BUILTINS, StyleClass::Builtin, false)?);
    grammar.push(Rule::new("decorator", r"@[a-zA-Z_][a-zA-Z0-9_]*", StyleClass::Decorator)?);
    // Must follow the identifier rules above to win over them.
    grammar.push(Rule::new("self", r"\bself\b", StyleClass::Special)?);
    grammar.push(Rule::new("triple_double", r#""""(?:\\.|[^"\\])*""""#, StyleClass::String)?);
    grammar.push(Rule::new("triple_single", r"'''(?:\\.|[^'\\])*'''", StyleClass::String)?);

    grammar.set_line_comment(r"(?m)#.*$")?;
    grammar.set_block_comment(TRIPLE_QUOTE, TRIPLE_QUOTE)?;
    Ok(())
}
