//! Session state and the asynchronous evaluation path
//!
//! [`Session`] is the state object a frontend owns: the expression buffer
//! plus the result/status display string. Evaluation follows
//! Idle → Pending → (Resolved | Failed) → Idle:
//!
//! 1. [`Session::begin_evaluation`] marks the display pending and hands out
//!    an [`EvalRequest`] carrying a generation token.
//! 2. [`compute`] runs after the artificial delay and produces an
//!    [`EvalCompletion`].
//! 3. [`Session::apply_completion`] applies the outcome only while the
//!    token still matches the latest request; stale completions are
//!    discarded, so overlapping evaluations cannot clobber a newer result.
//!
//! [`Session::evaluate`] chains the three for frontends that do not
//! interleave.

use crate::{AbacusResult, Engine, ExpressionBuffer, Intent};
use rust_decimal::Decimal;

/// Artificial evaluation delay in milliseconds.
///
/// Models a non-blocking computation path: control returns to the caller's
/// event loop while the delay elapses.
pub const EVAL_DELAY_MS: u64 = 300;

/// Placeholder shown while an evaluation is pending.
pub const PENDING_PLACEHOLDER: &str = "...";

/// Displayed when an evaluation fails.
pub const ERROR_DISPLAY: &str = "Error";

/// An evaluation request captured from a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvalRequest {
    generation: u64,
    expression: String,
}

impl EvalRequest {
    /// The expression text captured when the request was made.
    pub fn expression(&self) -> &str {
        &self.expression
    }
}

/// The outcome of a computed request, tagged with its generation.
#[derive(Debug, Clone)]
pub struct EvalCompletion {
    generation: u64,
    outcome: AbacusResult<Decimal>,
}

/// How an applied completion resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvalOutcome {
    /// The result became the new buffer and display contents.
    Resolved(String),
    /// The display shows the error state and the buffer was reset.
    Failed,
    /// The completion no longer matched the latest request and was
    /// discarded without touching any state.
    Stale,
}

/// Calculator state owned by a frontend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    buffer: ExpressionBuffer,
    display: String,
    generation: u64,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            buffer: ExpressionBuffer::new(),
            display: "0".to_string(),
            generation: 0,
        }
    }
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn buffer(&self) -> &ExpressionBuffer {
        &self.buffer
    }

    /// The current-expression line; an empty buffer renders as `"0"`.
    pub fn expression_line(&self) -> String {
        self.buffer.to_string()
    }

    /// The result/status line: a numeric result, the pending placeholder,
    /// or the error state.
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Route a frontend intent to the buffer.
    ///
    /// Returns an [`EvalRequest`] when the intent was [`Intent::Equals`]
    /// and the buffer was non-empty; the caller drives it through
    /// [`compute`] and [`Session::apply_completion`] (or ignores it and
    /// calls [`Session::evaluate`] instead).
    pub fn handle(&mut self, intent: Intent) -> Option<EvalRequest> {
        match intent {
            Intent::Digit(d) => self.buffer.push_digit(d),
            Intent::Operator(op) => self.buffer.push_operator(op),
            Intent::Decimal => self.buffer.push_decimal(),
            Intent::Paren(p) => self.buffer.push_paren(p),
            Intent::Delete => self.buffer.delete_last(),
            Intent::Clear => {
                self.buffer.clear();
                self.display = "0".to_string();
            }
            Intent::Percent => self.buffer.apply_percent(),
            Intent::Equals => return self.begin_evaluation(),
        }
        None
    }

    /// Start an evaluation: pending placeholder up, generation bumped.
    ///
    /// Returns `None` when the buffer is empty; equals on an empty
    /// expression is a no-op.
    pub fn begin_evaluation(&mut self) -> Option<EvalRequest> {
        if self.buffer.is_empty() {
            return None;
        }
        self.display = PENDING_PLACEHOLDER.to_string();
        self.generation += 1;
        Some(EvalRequest {
            generation: self.generation,
            expression: self.buffer.as_str().to_string(),
        })
    }

    /// Apply a computed completion to the session.
    ///
    /// A completion whose generation no longer matches the latest request
    /// is discarded, so an older evaluation cannot overwrite a newer one.
    /// On success the stringified result replaces the buffer and display;
    /// every failure collapses to the same error state with an empty
    /// buffer.
    pub fn apply_completion(&mut self, completion: EvalCompletion) -> EvalOutcome {
        if completion.generation != self.generation {
            return EvalOutcome::Stale;
        }
        match completion.outcome {
            Ok(value) => {
                let text = value.to_string();
                self.buffer.replace(text.clone());
                self.display = text.clone();
                EvalOutcome::Resolved(text)
            }
            Err(_) => {
                self.buffer.clear();
                self.display = ERROR_DISPLAY.to_string();
                EvalOutcome::Failed
            }
        }
    }

    /// Begin, compute, and apply in one step.
    pub async fn evaluate(&mut self) -> Option<EvalOutcome> {
        let request = self.begin_evaluation()?;
        let completion = compute(request).await;
        Some(self.apply_completion(completion))
    }
}

/// Compute a request after the artificial delay.
pub async fn compute(request: EvalRequest) -> EvalCompletion {
    delay().await;
    compute_now(&request)
}

/// Compute a request immediately, without the delay.
///
/// Used by the wasm frontend and by callers that manage their own timing.
pub fn compute_now(request: &EvalRequest) -> EvalCompletion {
    EvalCompletion {
        generation: request.generation,
        outcome: Engine::new().compute(&request.expression),
    }
}

#[cfg(not(target_arch = "wasm32"))]
async fn delay() {
    tokio::time::sleep(std::time::Duration::from_millis(EVAL_DELAY_MS)).await;
}

/// The artificial delay is skipped on wasm32; browser hosts get their
/// asynchrony from the event loop.
#[cfg(target_arch = "wasm32")]
async fn delay() {}
