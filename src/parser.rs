//! Parser capability consumed by the evaluator.

use crate::error::ParseError;

/// A configured expression parser.
///
/// Implementations turn raw expression source text into a reusable parsed
/// artifact. Parsing must be a pure function of the input text: the evaluator
/// tolerates duplicate parses under concurrent misses precisely because two
/// parses of the same text produce equivalent artifacts.
///
/// Construction-time configuration is entirely the implementation's concern;
/// the evaluator only ever calls [`parse`](ExpressionParser::parse).
pub trait ExpressionParser {
    /// Reusable artifact produced by a successful parse.
    ///
    /// `Clone` is required so the store can stay the authoritative holder
    /// while callers receive their own copy. Implementations with expensive
    /// artifacts typically wrap them in `Arc`.
    type Expr: Clone;

    /// Parse expression source text into a reusable artifact.
    ///
    /// Fails with a [`ParseError`] on malformed input.
    fn parse(&self, text: &str) -> Result<Self::Expr, ParseError>;
}
