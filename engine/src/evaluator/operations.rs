//! Checked arithmetic on `Decimal` values
//!
//! Every operation goes through the checked variants; overflow and
//! division by zero surface as errors instead of panics or infinities.

use crate::ast::BinaryOp;
use crate::error::AbacusError;
use rust_decimal::Decimal;

/// Perform a binary arithmetic operation.
pub fn binary_operation(
    left: Decimal,
    op: BinaryOp,
    right: Decimal,
) -> Result<Decimal, AbacusError> {
    match op {
        BinaryOp::Add => left.checked_add(right).ok_or(AbacusError::Overflow),
        BinaryOp::Subtract => left.checked_sub(right).ok_or(AbacusError::Overflow),
        BinaryOp::Multiply => left.checked_mul(right).ok_or(AbacusError::Overflow),
        BinaryOp::Divide => {
            if right == Decimal::ZERO {
                return Err(AbacusError::DivisionByZero);
            }
            left.checked_div(right).ok_or(AbacusError::Overflow)
        }
    }
}
