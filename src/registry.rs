//! View registry keyed by element id.
//!
//! Navigational link components handle their own clicks. Before claiming a
//! click, the interceptor asks the registry whether the clicked element
//! belongs to such a component. Components are tagged with a
//! [`ComponentKind`] when registered instead of being identified by type at
//! runtime.

use crate::trace_log;
use std::collections::HashMap;

/// Capability tag stored alongside each registered component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComponentKind {
    /// A managed navigational link component
    LinkComponent,
    /// Any other component, identified by name
    Other(String),
}

impl ComponentKind {
    /// Return `true` for [`LinkComponent`](Self::LinkComponent).
    pub fn is_link_component(&self) -> bool {
        matches!(self, ComponentKind::LinkComponent)
    }
}

/// Rendered components indexed by their element id.
///
/// # Example
///
/// ```
/// use href_to::{ComponentKind, ViewRegistry};
///
/// let mut registry = ViewRegistry::new();
/// registry.register("ember42", ComponentKind::LinkComponent);
///
/// assert!(registry.is_link_component("ember42"));
/// assert!(!registry.is_link_component("ember43"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ViewRegistry {
    views: HashMap<String, ComponentKind>,
}

impl ViewRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a component under its element id, replacing any previous entry.
    pub fn register(&mut self, element_id: impl Into<String>, kind: ComponentKind) {
        let element_id = element_id.into();
        trace_log!("registering view '{}' as {:?}", element_id, kind);
        self.views.insert(element_id, kind);
    }

    /// Remove a component when its element is torn down.
    pub fn unregister(&mut self, element_id: &str) -> Option<ComponentKind> {
        self.views.remove(element_id)
    }

    /// Look up the kind of component registered under `element_id`.
    pub fn kind_of(&self, element_id: &str) -> Option<&ComponentKind> {
        self.views.get(element_id)
    }

    /// Return `true` if `element_id` belongs to a managed link component.
    pub fn is_link_component(&self, element_id: &str) -> bool {
        self.kind_of(element_id)
            .is_some_and(ComponentKind::is_link_component)
    }

    /// Return the number of registered components.
    pub fn len(&self) -> usize {
        self.views.len()
    }

    /// Return `true` if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }
}
