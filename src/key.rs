//! Composite cache key pairing an element identity with expression text.
//!
//! The key insight is that the same expression text can appear on many
//! different elements, and the same element can carry several expressions.
//! Memoized parse results are therefore keyed by the *pair*, never by the
//! text alone.

/// Cache key for a memoized parse result.
///
/// Combines an opaque element identity `E` with the expression source text
/// found on it. Absent text is a legitimate, distinct slot: a key built with
/// `None` never collides with one built from the empty string.
///
/// # Equality and Hashing
///
/// Two keys are equal iff their element identities are equal AND their texts
/// are equal or both absent. The derived hash feeds the element, the option
/// discriminant, and the text bytes through the hasher, so equal keys always
/// hash identically and the result is never a passthrough of the element's
/// own hash. Both operations are total: they never panic, including on
/// absent text.
///
/// Keys are immutable once constructed; both inputs are stored verbatim with
/// no validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExpressionKey<E> {
    element: E,
    text: Option<String>,
}

impl<E> ExpressionKey<E> {
    /// Create a new key from an element identity and optional expression text.
    ///
    /// Any identity and any text, including empty or absent, are accepted.
    pub fn new(element: E, text: Option<String>) -> Self {
        Self { element, text }
    }

    /// Get the element identity this key is scoped to.
    pub fn element(&self) -> &E {
        &self.element
    }

    /// Get the expression text, if any.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}
