//! Building `Expr` trees from pest pairs
//!
//! Each grammar level folds its operand chain left to right, so `1-2-3`
//! becomes `(1-2)-3`.

use crate::ast::{BinaryOp, Expr, Span, UnaryOp};
use crate::error::AbacusError;
use crate::parser::Rule;
use pest::iterators::Pair;
use rust_decimal::Decimal;
use std::str::FromStr;

type BuildFn = fn(Pair<Rule>) -> Result<Expr, AbacusError>;

/// Build an `Expr` from an `expression` pair (the lowest precedence level).
pub(crate) fn build_expression(pair: Pair<Rule>) -> Result<Expr, AbacusError> {
    // expression = { term ~ (add_op ~ term)* }
    fold_binary_chain(pair, build_term)
}

fn build_term(pair: Pair<Rule>) -> Result<Expr, AbacusError> {
    // term = { unary ~ (mul_op ~ unary)* }
    fold_binary_chain(pair, build_unary)
}

/// Left-fold `operand (op operand)*` into nested `Expr::Binary` nodes.
fn fold_binary_chain(pair: Pair<Rule>, build_operand: BuildFn) -> Result<Expr, AbacusError> {
    let mut inner = pair.into_inner();
    let first = inner
        .next()
        .ok_or_else(|| AbacusError::Engine("Empty expression node".to_string()))?;
    let mut expr = build_operand(first)?;

    while let Some(op_pair) = inner.next() {
        let op = binary_op(&op_pair)?;
        let rhs_pair = inner
            .next()
            .ok_or_else(|| AbacusError::Engine("Operator without right operand".to_string()))?;
        let rhs = build_operand(rhs_pair)?;
        expr = Expr::Binary(Box::new(expr), op, Box::new(rhs));
    }

    Ok(expr)
}

fn binary_op(pair: &Pair<Rule>) -> Result<BinaryOp, AbacusError> {
    match pair.as_str() {
        "+" => Ok(BinaryOp::Add),
        "-" => Ok(BinaryOp::Subtract),
        "*" => Ok(BinaryOp::Multiply),
        "/" => Ok(BinaryOp::Divide),
        other => Err(AbacusError::Engine(format!(
            "Unknown operator '{}'",
            other
        ))),
    }
}

fn build_unary(pair: Pair<Rule>) -> Result<Expr, AbacusError> {
    // unary = { neg_op* ~ primary }
    let mut negations = 0usize;
    let mut operand = None;
    for inner in pair.into_inner() {
        match inner.as_rule() {
            Rule::neg_op => negations += 1,
            Rule::primary => operand = Some(build_primary(inner)?),
            _ => {}
        }
    }

    let mut expr =
        operand.ok_or_else(|| AbacusError::Engine("Unary without operand".to_string()))?;
    for _ in 0..negations {
        expr = Expr::Unary(UnaryOp::Negate, Box::new(expr));
    }
    Ok(expr)
}

fn build_primary(pair: Pair<Rule>) -> Result<Expr, AbacusError> {
    // primary = { number | "(" ~ expression ~ ")" }
    for inner in pair.into_inner() {
        match inner.as_rule() {
            Rule::number => return build_number(inner),
            Rule::expression => return build_expression(inner),
            _ => {}
        }
    }
    Err(AbacusError::Engine("Empty primary expression".to_string()))
}

fn build_number(pair: Pair<Rule>) -> Result<Expr, AbacusError> {
    let raw = pair.as_str();
    // "5." is a half-typed decimal; ".5" needs the leading zero restored
    let trimmed = raw.trim_end_matches('.');
    let text = if trimmed.starts_with('.') {
        format!("0{}", trimmed)
    } else {
        trimmed.to_string()
    };

    Decimal::from_str(&text).map(Expr::Number).map_err(|_| {
        AbacusError::parse(
            format!("Invalid number literal '{}'", raw),
            Span::from_pest_span(pair.as_span()),
        )
    })
}
