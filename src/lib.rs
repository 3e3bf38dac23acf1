//! exprcache - Lazy parse-and-cache layer for metadata-attached expressions
//!
//! Textual expressions declared on program-metadata elements (annotations on
//! methods, fields, and the like) are expensive to re-parse on every
//! evaluation. This crate memoizes parse results behind a composite key of
//! element identity plus expression text, parsing lazily on first encounter
//! and reusing the artifact thereafter.
//!
//! Architecture:
//! ```text
//! caller-owned store (any ExpressionStore)
//!     ↓ lookup by ExpressionKey (element identity + text)
//! ExpressionEvaluator::resolve
//!     ↓ miss
//! ExpressionParser::parse (external collaborator)
//!     ↓ success
//! store.put → artifact returned
//! ```
//!
//! The evaluator owns nothing but its parser: every call site supplies its
//! own store, so cache lifecycle, bounding, and concurrency strategy remain
//! entirely with the caller. Failed parses are never cached.

pub mod element;
pub mod error;
pub mod evaluator;
pub mod key;
pub mod parser;
pub mod store;

// Re-export key types for convenience
pub use element::ElementId;
pub use error::ParseError;
pub use evaluator::ExpressionEvaluator;
pub use key::ExpressionKey;
pub use parser::ExpressionParser;
pub use store::ExpressionStore;
