//! The input-source boundary
//!
//! Frontends deliver discrete intents, each mapped from a labeled control
//! or a physical key. The engine never sees raw events.

/// A discrete calculator input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Digit(char),
    Operator(char),
    Decimal,
    Paren(char),
    Delete,
    Clear,
    Percent,
    Equals,
}

impl Intent {
    /// Map a typed character to an intent.
    ///
    /// Enter and Backspace carry no character; frontends map those to
    /// [`Intent::Equals`] and [`Intent::Delete`] directly.
    pub fn from_key(key: char) -> Option<Self> {
        match key {
            '0'..='9' => Some(Intent::Digit(key)),
            '+' | '-' | '*' | '/' => Some(Intent::Operator(key)),
            '.' => Some(Intent::Decimal),
            '(' | ')' => Some(Intent::Paren(key)),
            '%' => Some(Intent::Percent),
            '=' => Some(Intent::Equals),
            _ => None,
        }
    }
}
