use crate::ast::{BinaryOp, Expr, UnaryOp};
use crate::error::AbacusError;
use crate::parser::parse;
use rust_decimal::Decimal;

fn num(n: i64) -> Expr {
    Expr::Number(Decimal::from(n))
}

fn binary(left: Expr, op: BinaryOp, right: Expr) -> Expr {
    Expr::Binary(Box::new(left), op, Box::new(right))
}

#[test]
fn test_parse_single_number() {
    assert_eq!(parse("42").unwrap(), num(42));
}

#[test]
fn test_parse_decimal_number() {
    assert_eq!(
        parse("0.5").unwrap(),
        Expr::Number(Decimal::new(5, 1))
    );
}

#[test]
fn test_parse_leading_dot_number() {
    assert_eq!(parse(".5").unwrap(), Expr::Number(Decimal::new(5, 1)));
}

#[test]
fn test_parse_trailing_dot_number() {
    // A half-typed decimal evaluates as the integer part
    assert_eq!(parse("5.").unwrap(), num(5));
}

#[test]
fn test_multiplication_binds_tighter_than_addition() {
    assert_eq!(
        parse("2+3*4").unwrap(),
        binary(num(2), BinaryOp::Add, binary(num(3), BinaryOp::Multiply, num(4)))
    );
}

#[test]
fn test_parentheses_override_precedence() {
    assert_eq!(
        parse("(2+3)*4").unwrap(),
        binary(binary(num(2), BinaryOp::Add, num(3)), BinaryOp::Multiply, num(4))
    );
}

#[test]
fn test_subtraction_is_left_associative() {
    assert_eq!(
        parse("1-2-3").unwrap(),
        binary(binary(num(1), BinaryOp::Subtract, num(2)), BinaryOp::Subtract, num(3))
    );
}

#[test]
fn test_division_is_left_associative() {
    assert_eq!(
        parse("8/4/2").unwrap(),
        binary(binary(num(8), BinaryOp::Divide, num(4)), BinaryOp::Divide, num(2))
    );
}

#[test]
fn test_unary_minus() {
    assert_eq!(
        parse("-5").unwrap(),
        Expr::Unary(UnaryOp::Negate, Box::new(num(5)))
    );
}

#[test]
fn test_unary_minus_inside_parens() {
    assert_eq!(
        parse("2*(-3)").unwrap(),
        binary(
            num(2),
            BinaryOp::Multiply,
            Expr::Unary(UnaryOp::Negate, Box::new(num(3)))
        )
    );
}

#[test]
fn test_whitespace_between_tokens() {
    assert_eq!(
        parse("2 + 3").unwrap(),
        binary(num(2), BinaryOp::Add, num(3))
    );
}

#[test]
fn test_unbalanced_paren_is_parse_error() {
    assert!(matches!(parse("(5"), Err(AbacusError::Parse { .. })));
}

#[test]
fn test_dangling_operator_is_parse_error() {
    assert!(matches!(parse("5+"), Err(AbacusError::Parse { .. })));
}

#[test]
fn test_doubled_operator_is_parse_error() {
    assert!(matches!(parse("2+*3"), Err(AbacusError::Parse { .. })));
}

#[test]
fn test_empty_input_is_parse_error() {
    assert!(parse("").is_err());
}

#[test]
fn test_adjacent_numbers_are_parse_error() {
    assert!(matches!(parse("1 2"), Err(AbacusError::Parse { .. })));
}
