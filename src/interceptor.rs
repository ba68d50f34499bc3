//! Click interception.
//!
//! A [`ClickContext`] is built for every click on an anchor and decides
//! between three outcomes:
//!
//! ```text
//! maybe_handle()
//!   ├─ should_handle()                       → Transition        (router.transition_to)
//!   ├─ should_handle_as_external_native_link → OpenExternalNative (opener.open(url, _system))
//!   └─ otherwise                             → NoOp              (browser default)
//! ```
//!
//! Predicates run left to right and short-circuit, so the attribute checks
//! reject a click before the router is asked to recognize anything.
//!
//! # Root URL
//!
//! The router's root URL decides whether a link is internal. Native builds
//! route by hash, so the effective root gets a `#` prefix there. The root
//! always ends with `/`:
//!
//! | `root_url` | native | effective root |
//! |------------|--------|----------------|
//! | `/app`     | no     | `/app/`        |
//! | `/app/`    | yes    | `#/app/`       |
//!
//! A link is internal when its `href` starts with the effective root. The
//! remainder after the root is what the router recognizes and transitions to.

use crate::config::InterceptorOptions;
use crate::dom::{ClickEvent, ClickTarget, MouseButton};
use crate::error::{NavigationError, Result};
use crate::services::Application;
use crate::{debug_log, info_log, trace_log, warn_log};

/// What [`ClickContext::maybe_handle`] did with a click.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The router transitioned to `path` and the default action was suppressed.
    Transition { path: String },
    /// `url` was opened outside the webview and the default action was suppressed.
    OpenExternalNative { url: String },
    /// Nothing happened; the browser's default behavior proceeds.
    NoOp,
}

impl ClickOutcome {
    /// Return `true` if the click was claimed by the interceptor.
    pub fn is_handled(&self) -> bool {
        !matches!(self, ClickOutcome::NoOp)
    }
}

/// Per-click interception state.
///
/// The `target` must already be resolved to the anchor responsible for the
/// click (e.g. the closest `<a>` ancestor of the event target).
///
/// # Example
///
/// ```ignore
/// let click = MouseClick::new();
/// let link = Element::anchor("/app/users/5");
///
/// match ClickContext::new(&app, &click, &link).maybe_handle()? {
///     ClickOutcome::Transition { path } => assert_eq!(path, "users/5"),
///     other => panic!("unexpected {other:?}"),
/// }
/// assert!(click.default_prevented());
/// ```
pub struct ClickContext<'a> {
    app: &'a dyn Application,
    event: &'a dyn ClickEvent,
    target: &'a dyn ClickTarget,
    url: Option<String>,
    options: InterceptorOptions,
}

impl<'a> ClickContext<'a> {
    /// Capture a click on `target`, reading its `href` once.
    pub fn new(
        app: &'a dyn Application,
        event: &'a dyn ClickEvent,
        target: &'a dyn ClickTarget,
    ) -> Self {
        Self {
            app,
            event,
            target,
            url: target.attribute("href"),
            options: InterceptorOptions::default(),
        }
    }

    /// Replace the default markup conventions.
    pub fn with_options(mut self, options: InterceptorOptions) -> Self {
        self.options = options;
        self
    }

    /// The target's `href`, if any.
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    /// Route the click through the router, out to the system browser, or not at all.
    ///
    /// Collaborator failures are returned unchanged.
    pub fn maybe_handle(&self) -> Result<ClickOutcome> {
        if self.should_handle() {
            return self.handle();
        }

        if self.should_handle_as_external_native_link() {
            return self.handle_as_external_native_link();
        }

        trace_log!("click on {:?} left to the browser", self.url);
        Ok(ClickOutcome::NoOp)
    }

    /// Whether the click is an in-app link the router should take over.
    pub fn should_handle(&self) -> bool {
        self.is_unmodified_left_click()
            && self.is_not_ignored()
            && self.has_no_target_blank()
            && self.has_no_action_helper()
            && self.has_no_download()
            && self.is_not_link_component()
            && self.recognize_url()
    }

    /// Whether the click is an external link that must escape the native webview.
    pub fn should_handle_as_external_native_link(&self) -> bool {
        self.is_unmodified_left_click()
            && self.is_not_ignored()
            && self.has_no_action_helper()
            && self.has_no_download()
            && self.is_not_link_component()
            && self.has_url()
            && self.is_native_build()
            && !self.recognize_url()
    }

    /// Transition to the root-relative path and suppress the default action.
    ///
    /// Fails with [`NavigationError::RouteNotFound`] when the URL lies outside
    /// the root. A router failure is returned before the default action is
    /// touched.
    pub fn handle(&self) -> Result<ClickOutcome> {
        let path = self
            .url_without_root()
            .ok_or_else(|| NavigationError::RouteNotFound {
                path: self.url.clone().unwrap_or_default(),
            })?;

        debug_log!("intercepted click, transitioning to '{}'", path);
        if let Err(err) = self.app.router().transition_to(&path) {
            warn_log!("transition to '{}' failed: {}", path, err);
            return Err(err);
        }
        self.event.prevent_default();

        Ok(ClickOutcome::Transition { path })
    }

    /// Open the raw URL in the configured external target and suppress the
    /// default action.
    pub fn handle_as_external_native_link(&self) -> Result<ClickOutcome> {
        let url = self.url.clone().unwrap_or_default();
        let target = self.options.external_target;

        info_log!("opening external link '{}' in {}", url, target.as_str());
        if let Err(err) = self.app.external_opener().open(&url, target) {
            warn_log!("external open of '{}' failed: {}", url, err);
            return Err(err);
        }
        self.event.prevent_default();

        Ok(ClickOutcome::OpenExternalNative { url })
    }

    // ------------------------------------------------------------------------
    // Predicates
    // ------------------------------------------------------------------------

    /// Primary button (or unreported) with neither ctrl nor meta held.
    pub fn is_unmodified_left_click(&self) -> bool {
        let event = self.event;
        let left = matches!(event.button(), None | Some(MouseButton::Primary));
        let unmodified = left && !event.ctrl_key() && !event.meta_key();
        if !unmodified {
            trace_log!("click on {:?} rejected: modified or non-primary", self.url);
        }
        unmodified
    }

    /// The target does not carry the ignore marker.
    pub fn is_not_ignored(&self) -> bool {
        self.lacks_attribute(&self.options.ignore_attribute)
    }

    /// The target does not ask for a new window.
    pub fn has_no_target_blank(&self) -> bool {
        let blank = self
            .target
            .attribute("target")
            .is_some_and(|value| value == self.options.new_window_target);
        if blank {
            trace_log!("click on {:?} rejected: opens a new window", self.url);
        }
        !blank
    }

    /// The target is not bound to an action handler.
    pub fn has_no_action_helper(&self) -> bool {
        self.lacks_attribute(&self.options.action_attribute)
    }

    /// The target is not a download link.
    pub fn has_no_download(&self) -> bool {
        self.lacks_attribute("download")
    }

    /// The target is not a managed link component (which handles its own clicks).
    pub fn is_not_link_component(&self) -> bool {
        let is_link = self
            .target
            .id()
            .filter(|id| !id.is_empty())
            .is_some_and(|id| self.app.view_registry().is_link_component(&id));
        if is_link {
            trace_log!("click on {:?} rejected: link component", self.url);
        }
        !is_link
    }

    /// The target has a non-blank `href`.
    pub fn has_url(&self) -> bool {
        self.url.as_deref().is_some_and(|url| !url.trim().is_empty())
    }

    /// The application runs inside a native shell.
    pub fn is_native_build(&self) -> bool {
        self.app.platform().is_native_build()
    }

    /// The URL lies under the effective root and the router recognizes the
    /// remainder.
    pub fn recognize_url(&self) -> bool {
        let Some(path) = self.url_without_root() else {
            return false;
        };

        let recognized = self.app.router().recognize(&path);
        match &recognized {
            Some(route) => {
                trace_log!("'{}' recognized as route '{}'", path, route.name);
            }
            None => {
                trace_log!("'{}' not recognized by the router", path);
            }
        }
        recognized.is_some()
    }

    // ------------------------------------------------------------------------
    // Root URL
    // ------------------------------------------------------------------------

    /// Effective root URL: `#`-prefixed on native builds, always `/`-terminated.
    pub fn root_url(&self) -> String {
        let mut root = self.app.router().root_url();

        if self.is_native_build() {
            root.insert(0, '#');
        }

        if !root.ends_with('/') {
            root.push('/');
        }

        root
    }

    /// The URL with the effective root stripped, or `None` if there is no URL
    /// or it lies outside the root.
    pub fn url_without_root(&self) -> Option<String> {
        let url = self.url.as_deref()?;
        let root = self.root_url();
        url.strip_prefix(root.as_str()).map(str::to_string)
    }

    fn lacks_attribute(&self, name: &str) -> bool {
        let present = self.target.has_attribute(name);
        if present {
            trace_log!("click on {:?} rejected: has '{}'", self.url, name);
        }
        !present
    }
}

/// Evaluate one click with the default conventions.
///
/// Convenience for a global click listener that has already resolved the
/// anchor element.
pub fn handle_click(
    app: &dyn Application,
    event: &dyn ClickEvent,
    target: &dyn ClickTarget,
) -> Result<ClickOutcome> {
    ClickContext::new(app, event, target).maybe_handle()
}
