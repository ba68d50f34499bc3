//! Interceptor configuration.
//!
//! The defaults match the markup conventions the interceptor has always
//! understood, so most applications never build [`InterceptorOptions`] by
//! hand.
//!
//! | Option | Default |
//! |--------|---------|
//! | ignore attribute | `data-href-to-ignore` |
//! | action-helper attribute | `data-ember-action` |
//! | new-window target | `_blank` |
//! | external open target | [`OpenTarget::System`] |

use crate::services::OpenTarget;

/// Attribute that opts a link out of interception.
pub const DEFAULT_IGNORE_ATTRIBUTE: &str = "data-href-to-ignore";

/// Attribute set on elements already bound to an in-app action handler.
pub const DEFAULT_ACTION_ATTRIBUTE: &str = "data-ember-action";

/// `target` value that requests a new window.
pub const DEFAULT_NEW_WINDOW_TARGET: &str = "_blank";

/// Markup conventions and external-link behavior of the interceptor.
///
/// # Examples
///
/// ```
/// use href_to::{InterceptorOptions, OpenTarget};
///
/// let options = InterceptorOptions::new()
///     .ignore_attribute("data-native-link")
///     .external_target(OpenTarget::Blank);
///
/// assert_eq!(options.ignore_attribute, "data-native-link");
/// assert_eq!(options.action_attribute, "data-ember-action");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterceptorOptions {
    /// Attribute that opts a link out of interception
    pub ignore_attribute: String,

    /// Attribute marking an element bound to an action handler
    pub action_attribute: String,

    /// `target` attribute value that requests a new window
    pub new_window_target: String,

    /// Where external links go on native builds
    pub external_target: OpenTarget,
}

impl InterceptorOptions {
    /// Options with the default conventions.
    pub fn new() -> Self {
        Self {
            ignore_attribute: DEFAULT_IGNORE_ATTRIBUTE.to_string(),
            action_attribute: DEFAULT_ACTION_ATTRIBUTE.to_string(),
            new_window_target: DEFAULT_NEW_WINDOW_TARGET.to_string(),
            external_target: OpenTarget::System,
        }
    }

    /// Set the ignore marker attribute
    pub fn ignore_attribute(mut self, name: impl Into<String>) -> Self {
        self.ignore_attribute = name.into();
        self
    }

    /// Set the action-helper marker attribute
    pub fn action_attribute(mut self, name: impl Into<String>) -> Self {
        self.action_attribute = name.into();
        self
    }

    /// Set the new-window sentinel for the `target` attribute
    pub fn new_window_target(mut self, value: impl Into<String>) -> Self {
        self.new_window_target = value.into();
        self
    }

    /// Set where external links open on native builds
    pub fn external_target(mut self, target: OpenTarget) -> Self {
        self.external_target = target;
        self
    }
}

impl Default for InterceptorOptions {
    fn default() -> Self {
        Self::new()
    }
}
