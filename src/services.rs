//! Collaborator capabilities supplied by the host application.
//!
//! The crate does not route, render, or open windows on its own. It talks to
//! the host through a handful of traits:
//!
//! | Trait | Provides |
//! |-------|----------|
//! | [`Router`] | URL generation, transitions, root URL, route recognition |
//! | [`Platform`] | Whether the app runs inside a native shell |
//! | [`ExternalOpener`] | Opening a URL outside the current view |
//! | [`Application`] | Hands out all of the above plus the [`ViewRegistry`] |
//!
//! An [`Application`] is passed explicitly to [`ClickContext`](crate::ClickContext)
//! and [`HrefTo`](crate::HrefTo), so tests substitute fakes freely.
//!
//! All methods are **synchronous**. A click is evaluated in one pass with no
//! suspension points.

use crate::error::Result;
use crate::params::{HrefParam, QueryParams, RouteParams};
use crate::registry::ViewRegistry;

// ============================================================================
// Router
// ============================================================================

/// A route the router recognized for a root-relative path.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RecognizedRoute {
    /// Name of the matched route (e.g. `users.show`)
    pub name: String,
    /// Dynamic segment values extracted from the path
    pub params: RouteParams,
}

impl RecognizedRoute {
    /// Create a recognition result with no dynamic segments.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: RouteParams::new(),
        }
    }

    /// Attach a dynamic segment value.
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key, value);
        self
    }
}

/// The application router.
///
/// # Example
///
/// ```
/// use href_to::{HrefParam, QueryParams, RecognizedRoute, Result, Router};
///
/// struct StaticRouter;
///
/// impl Router for StaticRouter {
///     fn root_url(&self) -> String {
///         "/".to_string()
///     }
///
///     fn generate_url(&self, route_name: &str, _: &[HrefParam], _: &QueryParams) -> Result<String> {
///         Ok(format!("/{}", route_name.replace('.', "/")))
///     }
///
///     fn transition_to(&self, _path: &str) -> Result<()> {
///         Ok(())
///     }
///
///     fn recognize(&self, path: &str) -> Option<RecognizedRoute> {
///         (path == "about").then(|| RecognizedRoute::new("about"))
///     }
/// }
///
/// assert_eq!(StaticRouter.generate_url("blog.index", &[], &QueryParams::new()).unwrap(), "/blog/index");
/// ```
pub trait Router {
    /// Configured root URL under which all routes are mounted (e.g. `/app/`).
    fn root_url(&self) -> String;

    /// Generate the full in-app URL for a named route.
    ///
    /// Unknown route names are the router's failure to report.
    fn generate_url(
        &self,
        route_name: &str,
        models: &[HrefParam],
        query_params: &QueryParams,
    ) -> Result<String>;

    /// Transition to a root-relative path without a page reload.
    fn transition_to(&self, path: &str) -> Result<()>;

    /// Match a root-relative path against the route table.
    fn recognize(&self, path: &str) -> Option<RecognizedRoute>;
}

// ============================================================================
// Platform
// ============================================================================

/// Information about the environment the application is packaged for.
pub trait Platform {
    /// `true` when running inside an embedded webview shell (hash-based routing).
    fn is_native_build(&self) -> bool;
}

impl Platform for bool {
    fn is_native_build(&self) -> bool {
        *self
    }
}

// ============================================================================
// External opener
// ============================================================================

/// Where an external URL should be opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OpenTarget {
    /// The device's system browser, escaping any embedded webview.
    #[default]
    System,
    /// A new in-app window or tab.
    Blank,
    /// The current frame.
    SelfFrame,
}

impl OpenTarget {
    /// The window-name token the host's open primitive expects.
    pub fn as_str(self) -> &'static str {
        match self {
            OpenTarget::System => "_system",
            OpenTarget::Blank => "_blank",
            OpenTarget::SelfFrame => "_self",
        }
    }
}

/// Host primitive that opens a URL outside the current view.
pub trait ExternalOpener {
    /// Open `url` in the given target.
    fn open(&self, url: &str, target: OpenTarget) -> Result<()>;
}

// ============================================================================
// Application
// ============================================================================

/// Capability provider for one running application instance.
pub trait Application {
    /// The application router.
    fn router(&self) -> &dyn Router;

    /// Platform information.
    fn platform(&self) -> &dyn Platform;

    /// Registry of rendered components keyed by element id.
    fn view_registry(&self) -> &ViewRegistry;

    /// Primitive used for links that must leave the webview.
    fn external_opener(&self) -> &dyn ExternalOpener;
}
