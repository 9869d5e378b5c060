//! Grammars and block highlighting
//!
//! A `Grammar` is the ordered rule table for one language plus its
//! comment configuration. `Grammar::highlight_block` classifies one
//! block of text given the state left by the previous block.

use std::ops::Range;

use regex::Regex;

use super::language::Language;
use super::rules::{BlockDelimiters, BlockState, Highlight, Rule};
use super::style::StyledSpan;
use super::tokens::StyleClass;
use crate::error::{HighlightError, Result};

/// The complete highlighting configuration for one language
#[derive(Debug, Clone)]
pub struct Grammar {
    language: Language,
    /// Rules in application order; later rules win on overlap
    rules: Vec<Rule>,
    line_comment: Option<Regex>,
    block_comment: Option<BlockDelimiters>,
}

impl Grammar {
    /// Create an empty grammar
    pub fn new(language: Language) -> Self {
        Self {
            language,
            rules: Vec::new(),
            line_comment: None,
            block_comment: None,
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Rules in application order
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Append a rule after all existing ones
    pub fn push(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    /// Set the single-line comment pattern
    pub fn set_line_comment(&mut self, pattern: &str) -> Result<()> {
        let regex = Regex::new(pattern).map_err(|source| HighlightError::InvalidPattern {
            rule: "line_comment".to_string(),
            source,
        })?;
        self.line_comment = Some(regex);
        Ok(())
    }

    /// Set the block comment delimiter pair
    pub fn set_block_comment(&mut self, start: &str, end: &str) -> Result<()> {
        self.block_comment = Some(BlockDelimiters::new(start, end)?);
        Ok(())
    }

    pub fn has_line_comment(&self) -> bool {
        self.line_comment.is_some()
    }

    pub fn has_block_comment(&self) -> bool {
        self.block_comment.is_some()
    }

    /// Highlight a single block of text
    ///
    /// Takes the block text and the state left by the previous block.
    /// Returns resolved spans and the state for the next block.
    pub fn highlight_block(&self, text: &str, incoming: BlockState) -> Highlight {
        let mut canvas = Canvas::new(text.len());

        // Rule table, in order. Later rules overwrite earlier ones.
        for rule in &self.rules {
            for range in rule.matches(text) {
                if !canvas.is_claimed(range.clone()) {
                    canvas.paint(range, rule.class);
                }
            }
        }

        let mut state = BlockState::Normal;
        if let Some(delims) = &self.block_comment {
            let mut cursor = 0;

            if incoming.is_inside_comment() {
                match delims.find_end(text, 0) {
                    Some(end) => {
                        canvas.claim(0..end);
                        cursor = end;
                    }
                    None => {
                        canvas.claim(0..text.len());
                        return canvas.finish(self.language, BlockState::InBlockComment);
                    }
                }
            }

            while cursor < text.len() {
                let Some((start, after_start)) = delims.find_start(text, cursor) else {
                    break;
                };
                match delims.find_end(text, after_start) {
                    Some(end) => {
                        canvas.claim(start..end);
                        cursor = end;
                    }
                    None => {
                        canvas.claim(start..text.len());
                        state = BlockState::InBlockComment;
                        break;
                    }
                }
            }
        }

        if let (Some(line_comment), BlockState::Normal) = (&self.line_comment, state) {
            for m in line_comment.find_iter(text) {
                if !m.range().is_empty() && !canvas.is_claimed_at(m.start()) {
                    canvas.paint(m.range(), StyleClass::Comment);
                }
            }
        }

        canvas.finish(self.language, state)
    }
}

/// Per-byte class assignments for one block
struct Canvas {
    classes: Vec<Option<StyleClass>>,
    /// Bytes inside a block comment; nothing may repaint these
    claimed: Vec<bool>,
}

impl Canvas {
    fn new(len: usize) -> Self {
        Self {
            classes: vec![None; len],
            claimed: vec![false; len],
        }
    }

    fn is_claimed(&self, range: Range<usize>) -> bool {
        self.claimed[range].iter().any(|&c| c)
    }

    fn is_claimed_at(&self, pos: usize) -> bool {
        self.claimed.get(pos).copied().unwrap_or(false)
    }

    fn paint(&mut self, range: Range<usize>, class: StyleClass) {
        for slot in &mut self.classes[range] {
            *slot = Some(class);
        }
    }

    fn claim(&mut self, range: Range<usize>) {
        for flag in &mut self.claimed[range.clone()] {
            *flag = true;
        }
        self.paint(range, StyleClass::BlockComment);
    }

    /// Collapse per-byte classes into maximal runs
    fn finish(self, language: Language, state: BlockState) -> Highlight {
        let mut spans: Vec<StyledSpan> = Vec::new();
        let mut run: Option<(usize, StyleClass)> = None;

        for (pos, class) in self.classes.iter().copied().enumerate() {
            match (run, class) {
                (Some((_, current)), Some(class)) if current == class => {}
                _ => {
                    if let Some((start, current)) = run.take() {
                        spans.push(StyledSpan::new(start, pos - start, current));
                    }
                    run = class.map(|class| (pos, class));
                }
            }
        }
        if let Some((start, current)) = run {
            spans.push(StyledSpan::new(start, self.classes.len() - start, current));
        }

        tracing::trace!(%language, spans = spans.len(), state = state.as_i32(), "highlighted block");
        Highlight { spans, state }
    }
}
