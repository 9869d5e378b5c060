//! snippet-highlight - incremental syntax highlighting for code snippets
//!
//! Text is classified one block (line) at a time. The only memory carried
//! between blocks is whether the previous block left a block comment open.
//!
//! ```no_run
//! use snippet_highlight::{BlockState, Engine};
//!
//! let mut engine = Engine::new()?;
//! engine.set_language("python");
//!
//! let mut state = BlockState::Normal;
//! for line in ["def f():", "    \"\"\"doc", "    \"\"\"", "    return 1"] {
//!     let highlight = engine.highlight_block(line, state);
//!     state = highlight.state;
//! }
//! # Ok::<(), snippet_highlight::HighlightError>(())
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod render;
pub mod syntax;

pub use config::Theme;
pub use error::{HighlightError, Result};
pub use syntax::{
    build_grammar, BlockCache, BlockState, Color, Engine, Grammar, Highlight, Language, Style, StyleClass,
    StyledSpan,
};
