//! Error type shared by the crate and its collaborators.
//!
//! The interceptor and the href builder never recover from collaborator
//! failures. A router that cannot generate a URL or refuses a transition
//! returns a [`NavigationError`], and that value reaches the caller as-is
//! through `?`.
//!
//! Missing inputs (no `href`, no attributes) are not errors: the predicate
//! that looks at them simply evaluates to `false`.
//!
//! # Examples
//!
//! ```
//! use href_to::NavigationError;
//!
//! let error = NavigationError::RouteNotFound { path: "/missing".into() };
//! assert_eq!(error.to_string(), "Route not found: /missing");
//! ```

use std::fmt;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, NavigationError>;

/// Failures reported by the crate or raised by a collaborator.
///
/// Implements [`std::error::Error`] and [`Display`](std::fmt::Display).
#[derive(Debug, Clone, PartialEq)]
pub enum NavigationError {
    /// No route matches the given path or route name
    RouteNotFound { path: String },

    /// Raw helper parameters are malformed (e.g. missing route name)
    InvalidParams { message: String },

    /// The router refused or failed a transition
    TransitionFailed { path: String, message: String },

    /// The host could not open a URL outside the current view
    ExternalOpenFailed { url: String, message: String },

    /// Custom error
    Custom { message: String },
}

impl NavigationError {
    /// Build an [`InvalidParams`](Self::InvalidParams) error.
    pub fn invalid_params(message: impl Into<String>) -> Self {
        Self::InvalidParams {
            message: message.into(),
        }
    }

    /// Build a [`TransitionFailed`](Self::TransitionFailed) error.
    pub fn transition_failed(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::TransitionFailed {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Build an [`ExternalOpenFailed`](Self::ExternalOpenFailed) error.
    pub fn external_open_failed(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ExternalOpenFailed {
            url: url.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for NavigationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavigationError::RouteNotFound { path } => {
                write!(f, "Route not found: {}", path)
            }
            NavigationError::InvalidParams { message } => {
                write!(f, "Invalid parameters: {}", message)
            }
            NavigationError::TransitionFailed { path, message } => {
                write!(f, "Transition to '{}' failed: {}", path, message)
            }
            NavigationError::ExternalOpenFailed { url, message } => {
                write!(f, "Could not open '{}': {}", url, message)
            }
            NavigationError::Custom { message } => {
                write!(f, "{}", message)
            }
        }
    }
}

impl std::error::Error for NavigationError {}
