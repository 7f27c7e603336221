//! The expression buffer and its mutation operations
//!
//! A single mutable string accumulated from key presses. The operations keep
//! it syntactically sane for later evaluation without full parsing:
//! leading-zero suppression, operator collapsing, at most one decimal point
//! per token. Parenthesis balance is deliberately not checked here; imbalance
//! surfaces at evaluation time.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// Characters the buffer treats as binary operators.
pub const OPERATORS: [char; 4] = ['+', '-', '*', '/'];

/// Characters that delimit a token (operators plus parentheses).
const TOKEN_DELIMITERS: [char; 6] = ['+', '-', '*', '/', '(', ')'];

/// A trailing numeric literal, optionally with a fractional part.
static TRAILING_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+(\.\d+)?)$").expect("trailing number pattern"));

/// The accumulated arithmetic expression.
///
/// Initialized empty, mutated in place by every operation, replaced wholesale
/// by the stringified result after a successful evaluation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpressionBuffer {
    text: String,
}

impl ExpressionBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// The raw buffer contents.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Replace the whole buffer, used when an evaluation result becomes the
    /// next expression.
    pub fn replace(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Append a digit, replacing a lone `"0"` so a freshly cleared state
    /// cannot grow a redundant leading zero. `"0."` decimals are still
    /// reachable through [`push_decimal`](Self::push_decimal).
    pub fn push_digit(&mut self, digit: char) {
        debug_assert!(digit.is_ascii_digit());
        if self.text == "0" {
            self.text.clear();
        }
        self.text.push(digit);
    }

    /// Append a binary operator.
    ///
    /// An empty buffer accepts only `-` as a unary minus seed; every other
    /// operator is silently ignored. A trailing operator is replaced rather
    /// than stacked, so consecutive operator presses always leave exactly one
    /// operator at the cursor.
    pub fn push_operator(&mut self, op: char) {
        debug_assert!(OPERATORS.contains(&op));
        if self.text.is_empty() {
            if op == '-' {
                self.text.push('-');
            }
            return;
        }
        if self.ends_with_operator() {
            self.text.pop();
        }
        self.text.push(op);
    }

    /// Append a decimal point, at most one per token. An empty trailing
    /// token (right after an operator or parenthesis, or an empty buffer)
    /// gets `"0."` to seed a new decimal number.
    pub fn push_decimal(&mut self) {
        let token = self.trailing_token();
        if token.contains('.') {
            return;
        }
        if token.is_empty() {
            self.text.push_str("0.");
        } else {
            self.text.push('.');
        }
    }

    /// Append a parenthesis without balance checking.
    pub fn push_paren(&mut self, paren: char) {
        debug_assert!(paren == '(' || paren == ')');
        self.text.push(paren);
    }

    /// Remove the final character; no-op on an empty buffer.
    pub fn delete_last(&mut self) {
        self.text.pop();
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// Rewrite a trailing numeric literal `N` as `(N/100)`.
    ///
    /// No-op when the buffer does not end in a numeric literal, including a
    /// literal with a trailing decimal point.
    pub fn apply_percent(&mut self) {
        let Some(start) = TRAILING_NUMBER.find(&self.text).map(|m| m.start()) else {
            return;
        };
        let replacement = format!("({}/100)", &self.text[start..]);
        self.text.replace_range(start.., &replacement);
    }

    fn ends_with_operator(&self) -> bool {
        self.text
            .chars()
            .last()
            .is_some_and(|c| OPERATORS.contains(&c))
    }

    /// The maximal digit run after the last operator or parenthesis.
    fn trailing_token(&self) -> &str {
        let cut = self
            .text
            .rfind(TOKEN_DELIMITERS)
            .map(|i| i + 1)
            .unwrap_or(0);
        &self.text[cut..]
    }
}

impl fmt::Display for ExpressionBuffer {
    /// Render for a display surface: an empty buffer shows as `"0"`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.text.is_empty() {
            write!(f, "0")
        } else {
            write!(f, "{}", self.text)
        }
    }
}
