//! Pattern rules for lexical classification
//!
//! This module defines the rule types a grammar is assembled from and
//! the state carried between blocks.

use std::ops::Range;

use regex::Regex;

use super::style::StyledSpan;
use super::tokens::StyleClass;
use crate::error::{HighlightError, Result};

/// Compile a pattern, naming the rule on failure
fn compile(rule: &str, pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|source| HighlightError::InvalidPattern {
        rule: rule.to_string(),
        source,
    })
}

/// A single pattern rule
///
/// Every non-overlapping match of `pattern` in a block is painted with
/// `class`. With a capture group set, only that group is painted.
#[derive(Debug, Clone)]
pub struct Rule {
    /// Name for debugging
    pub name: String,
    /// Compiled regex pattern
    pub pattern: Regex,
    /// Class assigned to matches
    pub class: StyleClass,
    /// Paint only this capture group instead of the whole match
    pub group: Option<usize>,
}

impl Rule {
    /// Create a new pattern rule
    pub fn new(name: &str, pattern: &str, class: StyleClass) -> Result<Self> {
        Ok(Self {
            name: name.to_string(),
            pattern: compile(name, pattern)?,
            class,
            group: None,
        })
    }

    /// Create a rule matching any of `words` on word boundaries
    pub fn words(name: &str, words: &[&str], class: StyleClass, case_insensitive: bool) -> Result<Self> {
        let alternation = words
            .iter()
            .map(|word| regex::escape(word))
            .collect::<Vec<_>>()
            .join("|");
        let flags = if case_insensitive { "(?i)" } else { "" };
        Self::new(name, &format!(r"{flags}\b(?:{alternation})\b"), class)
    }

    /// Builder: paint only a capture group of each match
    pub fn with_group(mut self, group: usize) -> Self {
        self.group = Some(group);
        self
    }

    /// Lazily iterate the byte ranges this rule paints in `text`
    ///
    /// Empty matches and matches where the group did not participate are
    /// skipped.
    pub fn matches<'a>(&'a self, text: &'a str) -> Box<dyn Iterator<Item = Range<usize>> + 'a> {
        match self.group {
            Some(group) => Box::new(
                self.pattern
                    .captures_iter(text)
                    .filter_map(move |caps| caps.get(group))
                    .map(|m| m.range())
                    .filter(|range| !range.is_empty()),
            ),
            None => Box::new(
                self.pattern
                    .find_iter(text)
                    .map(|m| m.range())
                    .filter(|range| !range.is_empty()),
            ),
        }
    }
}

/// Start and end delimiters of a comment that may span blocks
///
/// Start and end may be the same token (Python's triple quote), so the
/// end is always searched for strictly after the start delimiter.
#[derive(Debug, Clone)]
pub struct BlockDelimiters {
    /// Pattern that opens the comment
    pub start: Regex,
    /// Pattern that closes the comment
    pub end: Regex,
}

impl BlockDelimiters {
    /// Create a delimiter pair
    pub fn new(start_pattern: &str, end_pattern: &str) -> Result<Self> {
        Ok(Self {
            start: compile("block_comment_start", start_pattern)?,
            end: compile("block_comment_end", end_pattern)?,
        })
    }

    /// Find the next start delimiter at or after `from`
    ///
    /// Returns the delimiter's start offset and the offset just past it.
    pub fn find_start(&self, text: &str, from: usize) -> Option<(usize, usize)> {
        if from > text.len() {
            return None;
        }
        self.start.find_at(text, from).map(|m| (m.start(), m.end()))
    }

    /// Find the next end delimiter at or after `from`, returning the offset just past it
    pub fn find_end(&self, text: &str, from: usize) -> Option<usize> {
        if from > text.len() {
            return None;
        }
        self.end.find_at(text, from).map(|m| m.end())
    }
}

/// State carried from the end of one block to the start of the next
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum BlockState {
    /// Outside any block comment
    #[default]
    Normal,
    /// Inside a block comment left unterminated by an earlier block
    InBlockComment,
}

impl BlockState {
    /// Integer form used by host editors: 0 = normal, 1 = inside a block comment
    pub fn as_i32(&self) -> i32 {
        match self {
            BlockState::Normal => 0,
            BlockState::InBlockComment => 1,
        }
    }

    /// Parse the integer form; only `1` means inside a block comment
    pub fn from_i32(value: i32) -> Self {
        if value == 1 {
            BlockState::InBlockComment
        } else {
            BlockState::Normal
        }
    }

    /// Check if we're inside a block comment
    pub fn is_inside_comment(&self) -> bool {
        *self == BlockState::InBlockComment
    }
}

/// Result of highlighting a single block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Highlight {
    /// Resolved spans, sorted and non-overlapping
    pub spans: Vec<StyledSpan>,
    /// State at end of block (for the next block)
    pub state: BlockState,
}
