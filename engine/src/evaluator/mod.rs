//! Arithmetic evaluation
//!
//! Recursively evaluates an [`Expr`] tree to a `Decimal`. Decimal
//! arithmetic keeps results exact (`0.1 + 0.2` is exactly `0.3`), so the
//! final rounding pass only matters for long divisions.

pub mod operations;

use crate::ast::{Expr, UnaryOp};
use crate::error::AbacusError;
use rust_decimal::Decimal;

/// Number of decimal places kept in results.
pub const RESULT_SCALE: u32 = 10;

/// Evaluate an expression tree to a numeric value.
pub fn evaluate(expr: &Expr) -> Result<Decimal, AbacusError> {
    match expr {
        Expr::Number(n) => Ok(*n),
        Expr::Unary(UnaryOp::Negate, inner) => Ok(-evaluate(inner)?),
        Expr::Binary(left, op, right) => {
            let l = evaluate(left)?;
            let r = evaluate(right)?;
            operations::binary_operation(l, *op, r)
        }
    }
}

/// Round a result to [`RESULT_SCALE`] places and strip trailing zeros, so
/// `4/2` displays as `2` and `1/3` as `0.3333333333`.
pub fn round_result(value: Decimal) -> Decimal {
    value.round_dp(RESULT_SCALE).normalize()
}
