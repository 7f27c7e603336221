//! Expression parsing
//!
//! A pest grammar with stacked precedence levels produces an [`Expr`] tree.
//! The grammar is the whole story: there is no dynamic evaluation facility
//! behind it, so anything it rejects simply fails to evaluate.

use crate::ast::Span;
use crate::error::AbacusError;
use crate::Expr;
use pest::Parser;
use pest_derive::Parser;

pub mod expressions;

#[derive(Parser)]
#[grammar = "src/parser/calc.pest"]
pub struct CalcParser;

/// Parse an arithmetic expression into an AST.
pub fn parse(input: &str) -> Result<Expr, AbacusError> {
    match CalcParser::parse(Rule::calculation, input) {
        Ok(mut pairs) => {
            let expr_pair = pairs
                .find(|p| p.as_rule() == Rule::expression)
                .ok_or_else(|| AbacusError::Engine("Empty expression".to_string()))?;
            expressions::build_expression(expr_pair)
        }
        Err(e) => {
            let span = match e.line_col {
                pest::error::LineColLocation::Pos((line, col)) => Span {
                    start: 0,
                    end: 0,
                    line,
                    col,
                },
                pest::error::LineColLocation::Span((start_line, start_col), (_, _)) => Span {
                    start: 0,
                    end: 0,
                    line: start_line,
                    col: start_col,
                },
            };
            Err(AbacusError::parse(format!("{}", e.variant), span))
        }
    }
}
