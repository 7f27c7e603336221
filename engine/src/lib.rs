//! # Abacus Engine
//!
//! **A calculator that parses instead of trusting**
//!
//! Abacus accumulates a textual arithmetic expression from discrete input
//! intents (keypad buttons, key presses), evaluates it asynchronously, and
//! exposes the result for display. Evaluation goes through an explicit
//! grammar and a checked decimal evaluator; no dynamic code execution is
//! involved anywhere.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use abacus::{Intent, Session};
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut session = Session::new();
//!
//!     // "2+3*4" typed on the keypad
//!     for key in "2+3*4".chars() {
//!         session.handle(Intent::from_key(key).unwrap());
//!     }
//!
//!     session.evaluate().await;
//!     assert_eq!(session.display(), "14");
//! }
//! ```
//!
//! ## Core Concepts
//!
//! ### Buffer
//! The accumulated expression text. Mutation operations keep it
//! syntactically sane (operator collapsing, one decimal point per token)
//! without ever parsing it fully.
//!
//! ### Session
//! The state object a frontend owns: buffer plus display state, with an
//! asynchronous evaluation path guarded by a generation token so a stale
//! completion can never overwrite a newer result.
//!
//! ### Engine
//! The compute pipeline: whitelist validation, percent rewriting, parsing
//! with standard operator precedence, checked decimal arithmetic.

pub mod ast;
pub mod buffer;
pub mod engine;
pub mod error;
pub mod evaluator;
pub mod input;
pub mod parser;
pub mod session;
pub mod theme;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use ast::{BinaryOp, Expr, Span, UnaryOp};
pub use buffer::ExpressionBuffer;
pub use engine::Engine;
pub use error::AbacusError;
pub use input::Intent;
pub use parser::parse;
pub use session::{
    compute, compute_now, EvalCompletion, EvalOutcome, EvalRequest, Session, EVAL_DELAY_MS,
};
pub use theme::{Theme, ThemeSet};

/// Result type for engine operations
pub type AbacusResult<T> = Result<T, AbacusError>;

#[cfg(test)]
mod tests;
