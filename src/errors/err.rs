use thiserror::Error as ThisError;

use crate::{source_pos::Span, syntax::operators::BinOp};

pub type EvalResult<T> = Result<T, ErrorInfo>;

/// An error kind paired with the source range it was detected at.
#[derive(Debug, Clone, PartialEq, ThisError)]
#[error("{error} at {}..{}", .span.start, .span.end)]
pub struct ErrorInfo {
    pub error: Error,
    pub span: Span,
}

impl ErrorInfo {
    pub fn new(error: Error, span: Span) -> Self {
        Self { error, span }
    }
}

#[derive(Debug, Clone, PartialEq, ThisError)]
pub enum Error {
    #[error("malformed number `{0}`")]
    MalformedNumber(String),

    #[error("unbalanced parentheses")]
    UnbalancedParentheses,

    #[error("not enough operands for `{0}`")]
    InsufficientOperands(BinOp),

    #[error("division by zero")]
    DivisionByZero,

    // Only reachable if a delimiter leaks into a postfix sequence.
    #[error("unexpected token `{0}`")]
    InvalidToken(String),

    #[error("empty expression")]
    EmptyExpression,

    #[error("{0} operands left without an operator")]
    ExtraOperands(usize),
}
