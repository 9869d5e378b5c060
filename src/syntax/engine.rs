//! Highlighting engine
//!
//! The `Engine` owns the grammar table and the active language. It holds
//! no memory of document position: callers thread `BlockState` from one
//! block to the next, either by hand or through a `BlockCache`.

use std::ops::Range;

use super::builtin;
use super::grammar::Grammar;
use super::language::Language;
use super::rules::{BlockState, Highlight};
use super::style::StyledSpan;
use crate::error::Result;

/// Classifies blocks of text for the active language
///
/// Not meant to be shared between threads; callers serialize access.
pub struct Engine {
    /// One grammar per language, indexed by `Language::index`
    grammars: Vec<Grammar>,
    language: Language,
    /// Bumped on every effective language switch
    generation: u64,
}

impl Engine {
    /// Build every grammar and start in `Text`
    ///
    /// Fails on the first rule whose pattern does not compile.
    pub fn new() -> Result<Self> {
        let grammars = Language::ALL
            .into_iter()
            .map(builtin::grammar_for)
            .collect::<Result<Vec<_>>>()?;
        tracing::debug!(count = grammars.len(), "built grammar table");

        Ok(Self {
            grammars,
            language: Language::Text,
            generation: 0,
        })
    }

    /// Build the engine with an initial language
    pub fn with_language(name: &str) -> Result<Self> {
        let mut engine = Self::new()?;
        engine.set_language(name);
        Ok(engine)
    }

    /// Switch the active language
    ///
    /// Returns `true` if the language changed, in which case every block
    /// of the document must be re-highlighted from block 0 with
    /// `BlockState::Normal`. Unknown names select `Text`.
    pub fn set_language(&mut self, name: &str) -> bool {
        let language = Language::from_name(name);
        if language == self.language {
            return false;
        }

        tracing::debug!(from = %self.language, to = %language, requested = name, "switching language");
        self.language = language;
        self.generation += 1;
        true
    }

    /// The active language
    pub fn language(&self) -> Language {
        self.language
    }

    /// Counter identifying the current language selection
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The active grammar
    pub fn grammar(&self) -> &Grammar {
        &self.grammars[self.language.index()]
    }

    /// Highlight one block given the state left by the block before it
    pub fn highlight_block(&self, text: &str, previous: BlockState) -> Highlight {
        self.grammar().highlight_block(text, previous)
    }

    /// Highlight a whole document from block 0 with state 0
    pub fn highlight_document<I, S>(&self, blocks: I) -> Vec<Highlight>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut state = BlockState::Normal;
        blocks
            .into_iter()
            .map(|block| {
                let highlight = self.highlight_block(block.as_ref(), state);
                state = highlight.state;
                highlight
            })
            .collect()
    }
}

#[derive(Debug, Clone)]
struct CachedBlock {
    /// State the block was highlighted with
    incoming: BlockState,
    highlight: Highlight,
}

/// Per-document highlighting cache
///
/// Keeps the last result for every block. `refresh` recomputes blocks
/// that were invalidated or whose incoming state changed, and reuses the
/// rest. Results are keyed on the language they were computed with, so
/// a language switch, or refreshing against an engine with a different
/// active language, invalidates everything.
#[derive(Debug, Default)]
pub struct BlockCache {
    language: Option<Language>,
    blocks: Vec<Option<CachedBlock>>,
}

impl BlockCache {
    /// Create a new empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of blocks tracked
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Mark one edited block for recomputation
    pub fn invalidate_block(&mut self, block: usize) {
        if let Some(slot) = self.blocks.get_mut(block) {
            *slot = None;
        }
    }

    /// Mark a block and everything after it for recomputation
    ///
    /// Use after inserting or removing blocks, since indices shift.
    pub fn invalidate_from(&mut self, block: usize) {
        for slot in self.blocks.iter_mut().skip(block) {
            *slot = None;
        }
    }

    /// Drop every cached result
    pub fn invalidate_all(&mut self) {
        self.blocks.clear();
    }

    /// Cached result for a block
    pub fn highlight(&self, block: usize) -> Option<&Highlight> {
        self.blocks.get(block)?.as_ref().map(|cached| &cached.highlight)
    }

    /// Cached spans for a block
    pub fn spans(&self, block: usize) -> Option<&[StyledSpan]> {
        self.highlight(block).map(|h| h.spans.as_slice())
    }

    /// Cached outgoing state for a block
    pub fn state(&self, block: usize) -> Option<BlockState> {
        self.highlight(block).map(|h| h.state)
    }

    /// Bring the cache up to date with `blocks`
    ///
    /// Returns the range of block indices that were recomputed (empty if
    /// nothing changed).
    pub fn refresh<S: AsRef<str>>(&mut self, engine: &Engine, blocks: &[S]) -> Range<usize> {
        if self.language != Some(engine.language()) {
            self.invalidate_all();
            self.language = Some(engine.language());
        }
        self.blocks.resize(blocks.len(), None);

        let mut recomputed: Option<Range<usize>> = None;
        let mut previous = BlockState::Normal;

        for (idx, text) in blocks.iter().enumerate() {
            let reusable = self.blocks[idx]
                .as_ref()
                .filter(|cached| cached.incoming == previous)
                .map(|cached| cached.highlight.state);

            previous = match reusable {
                Some(state) => state,
                None => {
                    let highlight = engine.highlight_block(text.as_ref(), previous);
                    let state = highlight.state;
                    self.blocks[idx] = Some(CachedBlock {
                        incoming: previous,
                        highlight,
                    });
                    let range = recomputed.get_or_insert(idx..idx);
                    range.end = idx + 1;
                    state
                }
            };
        }

        recomputed.unwrap_or(0..0)
    }
}
