//! Terminal rendering of highlighted blocks

use std::io::Write;

use crossterm::queue;
use crossterm::style::{Attribute, Color as TermColor, Print, SetAttribute, SetForegroundColor};
use unicode_width::UnicodeWidthStr;

use crate::config::Theme;
use crate::error::Result;
use crate::syntax::{Color, Highlight, Style};

/// Map a theme color onto the terminal palette
fn term_color(color: Color) -> TermColor {
    match color {
        Color::Default => TermColor::Reset,
        Color::Black => TermColor::Black,
        Color::Red => TermColor::DarkRed,
        Color::Green => TermColor::DarkGreen,
        Color::Yellow => TermColor::DarkYellow,
        Color::Blue => TermColor::DarkBlue,
        Color::Magenta => TermColor::DarkMagenta,
        Color::Cyan => TermColor::DarkCyan,
        Color::White => TermColor::Grey,
        Color::BrightBlack => TermColor::DarkGrey,
        Color::BrightRed => TermColor::Red,
        Color::BrightGreen => TermColor::Green,
        Color::BrightYellow => TermColor::Yellow,
        Color::BrightBlue => TermColor::Blue,
        Color::BrightMagenta => TermColor::Magenta,
        Color::BrightCyan => TermColor::Cyan,
        Color::BrightWhite => TermColor::White,
        Color::Rgb(r, g, b) => TermColor::Rgb { r, g, b },
    }
}

fn write_styled<W: Write>(out: &mut W, text: &str, style: Style) -> Result<()> {
    queue!(out, SetForegroundColor(term_color(style.fg)))?;
    if style.bold {
        queue!(out, SetAttribute(Attribute::Bold))?;
    }
    if style.italic {
        queue!(out, SetAttribute(Attribute::Italic))?;
    }
    queue!(out, Print(text), SetAttribute(Attribute::Reset))?;
    Ok(())
}

/// Write one block with ANSI styling, followed by a newline
pub fn write_block<W: Write>(out: &mut W, text: &str, highlight: &Highlight, theme: &Theme) -> Result<()> {
    let mut pos = 0;
    for span in &highlight.spans {
        if span.start > pos {
            queue!(out, Print(&text[pos..span.start]))?;
        }
        write_styled(out, span.text(text), theme.style(span.class))?;
        pos = span.end();
    }
    if pos < text.len() {
        queue!(out, Print(&text[pos..]))?;
    }
    queue!(out, Print("\n"))?;
    Ok(())
}

/// Write a plain-text listing of one block's spans
///
/// One line per span: byte range, display column, class and text.
pub fn write_span_dump<W: Write>(out: &mut W, index: usize, text: &str, highlight: &Highlight) -> Result<()> {
    writeln!(out, "block {} state={}", index, highlight.state.as_i32())?;
    for span in &highlight.spans {
        let column = text[..span.start].width();
        writeln!(
            out,
            "  {}..{} col {} {} {:?}",
            span.start,
            span.end(),
            column,
            span.class.name(),
            span.text(text)
        )?;
    }
    Ok(())
}
