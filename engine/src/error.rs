use crate::ast::Span;
use std::fmt;

/// Error types for the calculator engine
///
/// Frontends collapse all of these into a single user-visible error state;
/// the variants exist for tests and logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AbacusError {
    /// A character outside the arithmetic whitelist reached evaluation
    InvalidCharacter(char),

    /// Parse error with source location
    Parse { message: String, span: Span },

    /// Division by zero during evaluation
    DivisionByZero,

    /// The result cannot be represented by the numeric type
    Overflow,

    /// Engine error without a specific source location
    Engine(String),
}

impl AbacusError {
    /// Create a parse error with source information
    pub fn parse(message: impl Into<String>, span: Span) -> Self {
        Self::Parse {
            message: message.into(),
            span,
        }
    }
}

impl fmt::Display for AbacusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AbacusError::InvalidCharacter(c) => {
                write!(f, "Invalid character '{}' in expression", c)
            }
            AbacusError::Parse { message, span } => {
                write!(f, "Parse error: {} at {}:{}", message, span.line, span.col)
            }
            AbacusError::DivisionByZero => write!(f, "Division by zero"),
            AbacusError::Overflow => write!(f, "Result is out of range"),
            AbacusError::Engine(msg) => write!(f, "Engine error: {}", msg),
        }
    }
}

impl std::error::Error for AbacusError {}
