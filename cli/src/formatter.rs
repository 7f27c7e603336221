//! Rendering for the two-line calculator display.

use abacus::{Session, Theme};
use anyhow::Result;
use crossterm::style::{style, Color, Stylize};
use crossterm::{cursor, queue, terminal};
use std::io::Write;

/// Style-variable names the terminal frontend understands; anything else
/// in a theme is carried but not rendered.
pub const EXPRESSION_COLOR: &str = "--expression-color";
pub const RESULT_COLOR: &str = "--result-color";
pub const ERROR_COLOR: &str = "--error-color";

/// Redraw the expression line and the result line in place, leaving the
/// cursor where the next redraw starts.
pub fn draw(out: &mut impl Write, session: &Session, theme: Option<&Theme>) -> Result<()> {
    queue!(
        out,
        cursor::MoveToColumn(0),
        terminal::Clear(terminal::ClearType::CurrentLine)
    )?;
    write!(
        out,
        "{}",
        paint(&session.expression_line(), theme, EXPRESSION_COLOR)
    )?;
    write!(out, "\r\n")?;
    queue!(out, terminal::Clear(terminal::ClearType::CurrentLine))?;

    let variable = if session.display() == "Error" {
        ERROR_COLOR
    } else {
        RESULT_COLOR
    };
    write!(out, "{}", paint(session.display(), theme, variable))?;

    queue!(out, cursor::MoveUp(1), cursor::MoveToColumn(0))?;
    out.flush()?;
    Ok(())
}

/// Apply a themed color when one is configured and parseable; plain text
/// otherwise.
pub fn paint(text: &str, theme: Option<&Theme>, variable: &str) -> String {
    match theme.and_then(|t| t.get(variable)).and_then(parse_color) {
        Some(color) => style(text).with(color).to_string(),
        None => text.to_string(),
    }
}

fn parse_color(value: &str) -> Option<Color> {
    if let Some(hex) = value.strip_prefix('#') {
        return parse_hex(hex);
    }
    match value.to_ascii_lowercase().as_str() {
        "black" => Some(Color::Black),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "yellow" => Some(Color::Yellow),
        "blue" => Some(Color::Blue),
        "magenta" => Some(Color::Magenta),
        "cyan" => Some(Color::Cyan),
        "white" => Some(Color::White),
        "grey" | "gray" => Some(Color::Grey),
        _ => None,
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb { r, g, b })
}
