//! Ready-made element identity for common call sites.
//!
//! The evaluator is generic over any identity type that supports equality
//! and stable hashing. Callers that do not already carry one can use
//! [`ElementId`], which models the usual method-plus-target-type identity
//! used by annotation processors.

use serde::{Deserialize, Serialize};

/// Identity of the metadata element an expression was declared on.
///
/// Pairs the declaring element's name with the concrete target type it was
/// resolved against. The target type matters because the same declaration
/// can be inherited by several concrete types, each of which is a distinct
/// cache slot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ElementId {
    element: String,
    target_type: Option<String>,
}

impl ElementId {
    /// Create an identity for a named element with no target type.
    pub fn new(element: impl Into<String>) -> Self {
        Self {
            element: element.into(),
            target_type: None,
        }
    }

    /// Set the concrete target type the element was resolved against.
    pub fn with_target_type(mut self, target_type: impl Into<String>) -> Self {
        self.target_type = Some(target_type.into());
        self
    }

    /// Get the declaring element's name.
    pub fn element(&self) -> &str {
        &self.element
    }

    /// Get the target type, if any.
    pub fn target_type(&self) -> Option<&str> {
        self.target_type.as_deref()
    }
}

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.target_type {
            Some(target) => write!(f, "{} on {}", self.element, target),
            None => write!(f, "{}", self.element),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_and_getters() {
        let id = ElementId::new("process_order").with_target_type("OrderService");

        assert_eq!(id.element(), "process_order");
        assert_eq!(id.target_type(), Some("OrderService"));
    }

    #[test]
    fn test_display_with_target_type() {
        let id = ElementId::new("process_order").with_target_type("OrderService");
        assert_eq!(id.to_string(), "process_order on OrderService");
    }

    #[test]
    fn test_display_without_target_type() {
        let id = ElementId::new("process_order");
        assert_eq!(id.to_string(), "process_order");
    }

    #[test]
    fn test_same_element_different_targets_are_distinct() {
        let id1 = ElementId::new("process_order").with_target_type("OrderService");
        let id2 = ElementId::new("process_order").with_target_type("AuditedOrderService");

        assert_ne!(id1, id2);
    }

    #[test]
    fn test_ordering_is_element_first() {
        let a = ElementId::new("a").with_target_type("Z");
        let b = ElementId::new("b").with_target_type("A");

        assert!(a < b);
    }
}
