//! Click event and element primitives.
//!
//! [`ClickEvent`] and [`ClickTarget`] describe the small slice of a DOM the
//! interceptor reads. Hosts with a real DOM implement them over their own
//! event and element types. [`MouseClick`] and [`Element`] are in-memory
//! implementations for hosts without one (and for tests).

use std::cell::Cell;
use std::collections::HashMap;

// ============================================================================
// Click event
// ============================================================================

/// Mouse button that produced a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Primary,
    Auxiliary,
    Secondary,
    Other(u16),
}

impl MouseButton {
    /// Map a legacy `which` code (1 = primary, 2 = auxiliary, 3 = secondary).
    pub fn from_which(which: u16) -> Self {
        match which {
            1 => MouseButton::Primary,
            2 => MouseButton::Auxiliary,
            3 => MouseButton::Secondary,
            other => MouseButton::Other(other),
        }
    }
}

/// The originating click event.
///
/// Read-only apart from [`prevent_default`](Self::prevent_default).
pub trait ClickEvent {
    /// Button identity, or `None` when the environment does not report it.
    fn button(&self) -> Option<MouseButton>;

    /// Whether the ctrl key was held.
    fn ctrl_key(&self) -> bool;

    /// Whether the meta (cmd) key was held.
    fn meta_key(&self) -> bool;

    /// Suppress the event's default action.
    fn prevent_default(&self);
}

/// In-memory click event.
///
/// # Example
///
/// ```
/// use href_to::{ClickEvent, MouseButton, MouseClick};
///
/// let click = MouseClick::new().with_meta_key();
/// assert_eq!(click.button(), Some(MouseButton::Primary));
/// assert!(click.meta_key());
///
/// click.prevent_default();
/// assert!(click.default_prevented());
/// ```
#[derive(Debug, Clone, Default)]
pub struct MouseClick {
    button: Option<MouseButton>,
    ctrl_key: bool,
    meta_key: bool,
    default_prevented: Cell<bool>,
    prevent_default_calls: Cell<usize>,
}

impl MouseClick {
    /// An unmodified primary-button click.
    pub fn new() -> Self {
        Self {
            button: Some(MouseButton::Primary),
            ..Self::default()
        }
    }

    /// A click from an environment that does not report button identity.
    pub fn without_button() -> Self {
        Self::default()
    }

    /// Set the button.
    pub fn with_button(mut self, button: MouseButton) -> Self {
        self.button = Some(button);
        self
    }

    /// Mark the ctrl key as held.
    pub fn with_ctrl_key(mut self) -> Self {
        self.ctrl_key = true;
        self
    }

    /// Mark the meta key as held.
    pub fn with_meta_key(mut self) -> Self {
        self.meta_key = true;
        self
    }

    /// Whether [`prevent_default`](ClickEvent::prevent_default) was called.
    pub fn default_prevented(&self) -> bool {
        self.default_prevented.get()
    }

    /// How many times [`prevent_default`](ClickEvent::prevent_default) was called.
    pub fn prevent_default_calls(&self) -> usize {
        self.prevent_default_calls.get()
    }
}

impl ClickEvent for MouseClick {
    fn button(&self) -> Option<MouseButton> {
        self.button
    }

    fn ctrl_key(&self) -> bool {
        self.ctrl_key
    }

    fn meta_key(&self) -> bool {
        self.meta_key
    }

    fn prevent_default(&self) {
        self.default_prevented.set(true);
        self.prevent_default_calls
            .set(self.prevent_default_calls.get() + 1);
    }
}

// ============================================================================
// Click target
// ============================================================================

/// The element responsible for a click, usually the nearest anchor.
pub trait ClickTarget {
    /// The element's id, if any.
    fn id(&self) -> Option<String>;

    /// Value of an attribute, or `None` when it is not set.
    fn attribute(&self, name: &str) -> Option<String>;

    /// Whether an attribute is set (an empty value still counts).
    fn has_attribute(&self, name: &str) -> bool {
        self.attribute(name).is_some()
    }
}

/// In-memory element with an id and attributes.
///
/// # Example
///
/// ```
/// use href_to::{ClickTarget, Element};
///
/// let link = Element::anchor("/app/users/5").with_attribute("download", "");
/// assert_eq!(link.attribute("href").as_deref(), Some("/app/users/5"));
/// assert!(link.has_attribute("download"));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Element {
    id: Option<String>,
    attributes: HashMap<String, String>,
}

impl Element {
    /// An element without id or attributes.
    pub fn new() -> Self {
        Self::default()
    }

    /// An anchor element with the given `href`.
    pub fn anchor(href: impl Into<String>) -> Self {
        Self::new().with_attribute("href", href)
    }

    /// Set the element id.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set an attribute.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }
}

impl ClickTarget for Element {
    fn id(&self) -> Option<String> {
        self.id.clone()
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.attributes.get(name).cloned()
    }

    fn has_attribute(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }
}
