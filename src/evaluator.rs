//! Lookup-or-parse evaluator built on the composite key.
//!
//! This module implements the core caching logic: resolve a key against a
//! caller-supplied store, parse lazily on the first encounter, and reuse the
//! stored artifact thereafter.

use tracing::trace;

use crate::error::ParseError;
use crate::key::ExpressionKey;
use crate::parser::ExpressionParser;
use crate::store::ExpressionStore;

/// Lazily parses and caches expressions found on metadata elements.
///
/// The evaluator owns a configured parser, fixed for its lifetime, and
/// nothing else. Stores are supplied per call site, so the evaluator itself
/// is safe to share across concurrent callers; only the store is a mutation
/// hazard, and its concurrency guarantees are the caller's choice.
///
/// # Type Parameters
///
/// - `P`: The parser invoked on a cache miss
///
/// # Concurrency
///
/// [`resolve`](ExpressionEvaluator::resolve) is a plain check-then-act
/// sequence with no atomicity across the lookup and the store. Concurrent
/// misses on the same key may parse more than once; parsing is pure, so the
/// duplicated results are equivalent and the last write wins. Callers that
/// need strict at-most-once parsing add per-key locking at the store
/// boundary.
///
/// # Example
///
/// ```ignore
/// let evaluator = ExpressionEvaluator::new(parser);
/// let mut cache = HashMap::new();
///
/// // First call parses and stores.
/// let expr = evaluator.resolve(&mut cache, element_id, Some("#root.name"))?;
///
/// // Second call returns the stored artifact without re-parsing.
/// let again = evaluator.resolve(&mut cache, element_id, Some("#root.name"))?;
/// ```
pub struct ExpressionEvaluator<P: ExpressionParser> {
    /// The configured parser, immutable after construction.
    parser: P,
}

impl<P: ExpressionParser> ExpressionEvaluator<P> {
    /// Create a new evaluator with the specified parser.
    pub fn new(parser: P) -> Self {
        Self { parser }
    }

    /// Get the configured parser.
    ///
    /// For collaborators that need direct parsing outside the cached path.
    pub fn parser(&self) -> &P {
        &self.parser
    }

    /// Resolve the parsed expression for `text` as found on `element`.
    ///
    /// Looks the composite key up in `store` and returns the stored artifact
    /// on a hit without invoking the parser. On a miss, parses `text` (absent
    /// text is handed to the parser as the empty string), stores the result
    /// under the key, and returns it.
    ///
    /// # Errors
    ///
    /// Propagates the parser's [`ParseError`] unchanged. Nothing is written
    /// to the store on failure, so the next call with the same key attempts
    /// the parse again.
    pub fn resolve<E, C>(
        &self,
        store: &mut C,
        element: E,
        text: Option<&str>,
    ) -> Result<P::Expr, ParseError>
    where
        C: ExpressionStore<E, P::Expr>,
    {
        let key = ExpressionKey::new(element, text.map(String::from));

        if let Some(expr) = store.get(&key) {
            trace!(text = key.text().unwrap_or(""), "expression cache hit");
            return Ok(expr);
        }

        let expr = self.parser.parse(key.text().unwrap_or(""))?;
        trace!(
            text = key.text().unwrap_or(""),
            "expression parsed and cached"
        );
        store.put(key, expr.clone());

        Ok(expr)
    }
}

impl<P: ExpressionParser + Default> ExpressionEvaluator<P> {
    /// Create a new evaluator with a default-configured parser.
    pub fn with_defaults() -> Self {
        Self::new(P::default())
    }
}
