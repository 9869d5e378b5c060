//! Theme configuration
//!
//! Loads style overrides from ~/.snippet-highlight.toml (or
//! %USERPROFILE%\.snippet-highlight.toml on Windows).
//!
//! Format: one table per style class, with optional `fg`, `bold` and
//! `italic` keys. Classes not mentioned keep their default style.
//!
//! Example:
//! ```text
//! # snippet-highlight theme
//! [keyword]
//! fg = "#c586c0"
//! bold = true
//!
//! [comment]
//! fg = "bright-black"
//! italic = false
//! ```

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{HighlightError, Result};
use crate::syntax::{Color, Style, StyleClass};

/// Mapping from style class to visual style
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    styles: HashMap<StyleClass, Style>,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            styles: StyleClass::ALL
                .into_iter()
                .map(|class| (class, class.default_style()))
                .collect(),
        }
    }
}

impl Theme {
    /// Get the theme file path
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(windows)]
        {
            std::env::var("USERPROFILE")
                .ok()
                .map(|home| PathBuf::from(home).join(".snippet-highlight.toml"))
        }

        #[cfg(not(windows))]
        {
            std::env::var("HOME")
                .ok()
                .map(|home| PathBuf::from(home).join(".snippet-highlight.toml"))
        }
    }

    /// Load the user's theme, or the default theme if there is none
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => match Self::load_from(&path) {
                Err(HighlightError::Io(e)) if e.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
                other => other,
            },
            None => Ok(Self::default()),
        }
    }

    /// Load a theme from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), "loading theme");
        Self::from_toml_str(&contents)
    }

    /// Parse theme overrides on top of the default theme
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let table: toml::Table = contents.parse()?;
        let mut theme = Self::default();
        theme.apply(&table)?;
        Ok(theme)
    }

    /// Style for a class
    pub fn style(&self, class: StyleClass) -> Style {
        self.styles.get(&class).copied().unwrap_or_else(|| class.default_style())
    }

    /// Override the style for a class
    pub fn set(&mut self, class: StyleClass, style: Style) {
        self.styles.insert(class, style);
    }

    /// Apply overrides from a parsed theme table
    fn apply(&mut self, table: &toml::Table) -> Result<()> {
        for (key, value) in table {
            let Some(class) = StyleClass::from_name(key) else {
                tracing::warn!(key = %key, "ignoring unknown style class in theme");
                continue;
            };
            let entry = value.as_table().ok_or_else(|| invalid(key, "expected a table"))?;

            let mut style = self.style(class);
            for (field, value) in entry {
                match field.as_str() {
                    "fg" => {
                        let name = value.as_str().ok_or_else(|| invalid(key, "`fg` must be a string"))?;
                        style.fg = Color::parse(name)
                            .ok_or_else(|| invalid(key, &format!("unknown color `{name}`")))?;
                    }
                    "bold" => {
                        style.bold = value.as_bool().ok_or_else(|| invalid(key, "`bold` must be a boolean"))?;
                    }
                    "italic" => {
                        style.italic = value.as_bool().ok_or_else(|| invalid(key, "`italic` must be a boolean"))?;
                    }
                    _ => tracing::warn!(key = %key, field = %field, "ignoring unknown theme field"),
                }
            }
            self.set(class, style);
        }
        Ok(())
    }
}

fn invalid(key: &str, reason: &str) -> HighlightError {
    HighlightError::InvalidTheme {
        key: key.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_theme_matches_classes() {
        let theme = Theme::default();
        for class in StyleClass::ALL {
            assert_eq!(theme.style(class), class.default_style());
        }
    }

    #[test]
    fn test_parse_overrides() {
        let contents = r##"
# Comment
[keyword]
fg = "#ff0000"
bold = false

[comment]
italic = false
        "##;

        let theme = Theme::from_toml_str(contents).unwrap();
        let keyword = theme.style(StyleClass::Keyword);
        assert_eq!(keyword.fg, Color::Rgb(255, 0, 0));
        assert!(!keyword.bold);

        let comment = theme.style(StyleClass::Comment);
        assert_eq!(comment.fg, StyleClass::Comment.default_style().fg);
        assert!(!comment.italic);

        assert_eq!(theme.style(StyleClass::String), StyleClass::String.default_style());
    }

    #[test]
    fn test_unknown_class_ignored() {
        let theme = Theme::from_toml_str("[sparkles]\nfg = \"red\"\n").unwrap();
        assert_eq!(theme, Theme::default());
    }

    #[test]
    fn test_invalid_entries() {
        assert!(matches!(
            Theme::from_toml_str("[keyword]\nfg = \"mauve\"\n"),
            Err(HighlightError::InvalidTheme { ref key, .. }) if key == "keyword"
        ));
        assert!(matches!(
            Theme::from_toml_str("[keyword]\nbold = \"yes\"\n"),
            Err(HighlightError::InvalidTheme { .. })
        ));
        assert!(matches!(
            Theme::from_toml_str("keyword = 3\n"),
            Err(HighlightError::InvalidTheme { .. })
        ));
        assert!(matches!(
            Theme::from_toml_str("[keyword\n"),
            Err(HighlightError::ThemeParse(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[number]\nfg = \"cyan\"\nbold = true").unwrap();

        let theme = Theme::load_from(file.path()).unwrap();
        assert_eq!(theme.style(StyleClass::Number), Style::fg(Color::Cyan).with_bold());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Theme::load_from(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, HighlightError::Io(_)));
    }

    #[test]
    fn test_load_from_home() {
        let home_var = if cfg!(windows) { "USERPROFILE" } else { "HOME" };
        let saved = std::env::var_os(home_var);
        let dir = tempfile::tempdir().unwrap();
        std::env::set_var(home_var, dir.path());

        assert_eq!(Theme::config_path(), Some(dir.path().join(".snippet-highlight.toml")));
        let missing = Theme::load();

        std::fs::write(dir.path().join(".snippet-highlight.toml"), "[number]\nfg = \"cyan\"\n").unwrap();
        let present = Theme::load();

        match saved {
            Some(value) => std::env::set_var(home_var, value),
            None => std::env::remove_var(home_var),
        }

        assert_eq!(missing.unwrap(), Theme::default());
        assert_eq!(present.unwrap().style(StyleClass::Number).fg, Color::Cyan);
    }
}
