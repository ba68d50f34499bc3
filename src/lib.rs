//! In-app link handling for client-side applications.
//!
//! Two independent pieces share one collaborator, the application [`Router`]:
//!
//! - **Click interception** — [`ClickContext`] decides whether a click on an
//!   anchor becomes an in-app transition, an external open that escapes a
//!   native webview, or nothing at all (see [`interceptor`]).
//! - **Href generation** — [`compute_href`] / [`HrefTo`] turn a route name,
//!   models and query parameters into a URL string for rendering (see
//!   [`href`]).
//!
//! The host supplies its router, platform flag, view registry and external
//! open primitive through the [`Application`] trait.
//!
//! # Example
//!
//! ```ignore
//! use href_to::{handle_click, ClickOutcome, Element, MouseClick};
//!
//! let click = MouseClick::new();
//! let link = Element::anchor("/app/users/5");
//!
//! if let ClickOutcome::Transition { path } = handle_click(&app, &click, &link)? {
//!     assert_eq!(path, "users/5");
//! }
//! ```
//!
//! # Features
//!
//! | Feature | Effect |
//! |---------|--------|
//! | `log` (default) | Log through the `log` crate |
//! | `tracing` | Log through the `tracing` crate |

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod logging;

pub mod config;
pub mod dom;
pub mod error;
pub mod href;
pub mod interceptor;
pub mod params;
pub mod registry;
pub mod services;

pub use config::InterceptorOptions;
pub use dom::{ClickEvent, ClickTarget, Element, MouseButton, MouseClick};
pub use error::{NavigationError, Result};
pub use href::{compute_href, HrefTo, NavigationRequest};
pub use interceptor::{handle_click, ClickContext, ClickOutcome};
pub use params::{HrefParam, QueryParams, QueryValue, RouteObject, RouteParams};
pub use registry::{ComponentKind, ViewRegistry};
pub use services::{Application, ExternalOpener, OpenTarget, Platform, RecognizedRoute, Router};
