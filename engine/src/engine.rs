//! The compute pipeline: validation, percent transform, parse, evaluate.

use crate::error::AbacusError;
use crate::{evaluator, parser, AbacusResult};
use regex::Regex;
use rust_decimal::Decimal;
use std::sync::LazyLock;

/// Characters an expression may contain before the percent transform.
static WHITELIST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9+\-*/().\s%]+$").expect("whitelist pattern"));

/// `N%` groups anywhere in the expression.
static PERCENT_GROUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+(\.\d+)?)%").expect("percent pattern"));

/// The calculator compute pipeline.
///
/// Stateless; sessions and frontends call [`compute`](Engine::compute) with
/// whatever text they hold.
#[derive(Debug, Clone, Copy, Default)]
pub struct Engine;

impl Engine {
    pub fn new() -> Self {
        Self
    }

    /// Compute a numeric result from raw expression text.
    ///
    /// Pipeline: whitelist validation, `N%` → `(N/100)` rewriting, parse,
    /// checked evaluation, rounding. The percent rewrite runs here even
    /// though the percent key already rewrites the buffer, so `50%` typed
    /// through another frontend still evaluates.
    pub fn compute(&self, text: &str) -> AbacusResult<Decimal> {
        if text.is_empty() {
            return Err(AbacusError::Engine("Empty expression".to_string()));
        }
        if !WHITELIST.is_match(text) {
            let offending = text
                .chars()
                .find(|c| !is_whitelisted(*c))
                .unwrap_or('?');
            return Err(AbacusError::InvalidCharacter(offending));
        }

        let transformed = PERCENT_GROUP.replace_all(text, "($1/100)");
        let expr = parser::parse(&transformed)?;
        let value = evaluator::evaluate(&expr)?;
        Ok(evaluator::round_result(value))
    }
}

fn is_whitelisted(c: char) -> bool {
    c.is_ascii_digit()
        || c.is_whitespace()
        || matches!(c, '+' | '-' | '*' | '/' | '(' | ')' | '.' | '%')
}
