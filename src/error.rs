//! Error types for expression parsing.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Parse failure raised by an [`ExpressionParser`](crate::ExpressionParser).
///
/// The evaluator propagates these unchanged to the caller of
/// [`resolve`](crate::ExpressionEvaluator::resolve) and never writes a store
/// entry for a failed parse, so a later call with the same key re-attempts
/// the parse.
#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParseError {
    #[error("syntax error in expression {expression:?} at offset {offset}: {reason}")]
    Syntax {
        expression: String,
        offset: usize,
        reason: String,
    },

    #[error("expression {expression:?} ended unexpectedly: {reason}")]
    Incomplete { expression: String, reason: String },
}
