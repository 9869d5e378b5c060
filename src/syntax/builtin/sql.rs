//! SQL grammar
//!
//! Keywords are listed uppercase but matched without regard to case,
//! since SQL itself is case-insensitive.

use crate::error::Result;
use crate::syntax::grammar::Grammar;
use crate::syntax::rules::Rule;
use crate::syntax::tokens::StyleClass;

const KEYWORDS: &[&str] = &[
    "SELECT", "FROM", "WHERE", "INSERT", "INTO", "VALUES", "UPDATE", "SET", "DELETE", "CREATE",
    "TABLE", "INDEX", "VIEW", "DATABASE", "ALTER", "DROP", "GRANT", "REVOKE", "COMMIT", "ROLLBACK",
    "SAVEPOINT", "BEGIN", "TRANSACTION", "END", "JOIN", "INNER", "LEFT", "RIGHT", "OUTER", "ON",
    "GROUP", "BY", "ORDER", "ASC", "DESC", "LIMIT", "OFFSET", "HAVING", "AS", "DISTINCT", "UNION",
    "ALL", "CASE", "WHEN", "THEN", "ELSE", "AND", "OR", "NOT", "IN", "LIKE", "BETWEEN", "IS",
    "NULL", "EXISTS", "PRIMARY", "KEY", "FOREIGN", "REFERENCES", "UNIQUE", "CHECK", "DEFAULT",
    "CONSTRAINT", "VARCHAR", "INT", "INTEGER", "TEXT", "BLOB", "REAL", "FLOAT", "DATE", "DATETIME",
    "TIMESTAMP", "BOOLEAN", "TRUE", "FALSE",
];

const FUNCTIONS: &[&str] = &[
    "COUNT", "SUM", "AVG", "MIN", "MAX", "ABS", "ROUND", "UPPER", "LOWER", "SUBSTR", "SUBSTRING",
    "LENGTH", "CAST", "COALESCE", "NULLIF", "DATE", "TIME", "DATETIME", "STRFTIME", "RANDOM",
];

pub fn add_rules(grammar: &mut Grammar) -> Result<()> {
    grammar.push(Rule::words("keyword", KEYWORDS, StyleClass::Keyword, true)?);
    grammar.push(Rule::words("function", FUNCTIONS, StyleClass::Builtin, true)?);

    grammar.set_line_comment(r"(?m)--.*$")?;
    grammar.set_block_comment(r"/\*", r"\*/")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::syntax::builtin::grammar_for;
    use crate::syntax::language::Language;
    use crate::syntax::rules::BlockState;
    use crate::syntax::tokens::StyleClass;

    fn found(text: &str) -> Vec<(&str, StyleClass)> {
        let grammar = grammar_for(Language::Sql).unwrap();
        let result = grammar.highlight_block(text, BlockState::Normal);
        result.spans.iter().map(|s| (s.text(text), s.class)).collect()
    }

    #[test]
    fn test_keywords_any_case() {
        assert_eq!(
            found("select count(*) FROM t"),
            vec![
                ("select", StyleClass::Keyword),
                ("count", StyleClass::Builtin),
                ("FROM", StyleClass::Keyword),
            ]
        );
    }

    #[test]
    fn test_function_listed_as_keyword_too() {
        // DATE is in both lists; the function rule comes later and wins.
        assert_eq!(found("DATE"), vec![("DATE", StyleClass::Builtin)]);
    }

    #[test]
    fn test_dash_comment() {
        assert_eq!(
            found("SELECT 1 -- WHERE 2"),
            vec![
                ("SELECT", StyleClass::Keyword),
                ("1", StyleClass::Number),
                ("-- WHERE 2", StyleClass::Comment),
            ]
        );
    }
}
