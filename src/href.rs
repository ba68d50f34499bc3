//! URL builder for template helpers.
//!
//! Turns a raw helper parameter list into a URL string without navigating:
//!
//! ```text
//! ["users.show", 5, QueryParams{tab: "posts"}]
//!        │        │            │
//!   route_name  models    query_params  ──► Router::generate_url ──► "/app/users/5?tab=posts"
//! ```
//!
//! The first element is the route name. A trailing query-params marker is
//! unwrapped into the query parameters. Everything in between becomes a
//! model once absent values (see [`HrefParam::is_present`]) are dropped.

use crate::error::{NavigationError, Result};
use crate::params::{HrefParam, QueryParams};
use crate::services::{Application, Router};
use crate::{trace_log, warn_log};

/// Route name, models, and query parameters for one URL.
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationRequest {
    /// Symbolic target route
    pub route_name: String,
    /// Positional route parameters, absent values removed
    pub models: Vec<HrefParam>,
    /// Named query parameters, empty when no marker was supplied
    pub query_params: QueryParams,
}

impl NavigationRequest {
    /// Split a raw parameter list into route name, models and query params.
    ///
    /// The caller's slice is never modified.
    ///
    /// # Example
    ///
    /// ```
    /// use href_to::{HrefParam, NavigationRequest, QueryParams};
    ///
    /// let mut query = QueryParams::new();
    /// query.insert("tab", "posts");
    ///
    /// let request = NavigationRequest::from_params(&[
    ///     HrefParam::from("users.show"),
    ///     HrefParam::Null,
    ///     HrefParam::from(5),
    ///     HrefParam::QueryParams(query.clone()),
    /// ])
    /// .unwrap();
    ///
    /// assert_eq!(request.route_name, "users.show");
    /// assert_eq!(request.models, vec![HrefParam::from(5)]);
    /// assert_eq!(request.query_params, query);
    /// ```
    pub fn from_params(params: &[HrefParam]) -> Result<Self> {
        let (first, mut rest) = params
            .split_first()
            .ok_or_else(|| NavigationError::invalid_params("missing route name"))?;

        let route_name = match first.as_str() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => {
                return Err(NavigationError::invalid_params(format!(
                    "route name must be a non-empty string, got {:?}",
                    first
                )))
            }
        };

        let query_params = match rest.split_last() {
            Some((HrefParam::QueryParams(query), init)) => {
                rest = init;
                query.clone()
            }
            _ => QueryParams::new(),
        };

        let models = rest
            .iter()
            .filter(|param| param.is_present())
            .cloned()
            .collect();

        Ok(Self {
            route_name,
            models,
            query_params,
        })
    }

    /// Ask the router for the URL of this request.
    pub fn generate(&self, router: &dyn Router) -> Result<String> {
        let result = router.generate_url(&self.route_name, &self.models, &self.query_params);
        if let Err(err) = &result {
            warn_log!("router could not generate '{}': {}", self.route_name, err);
        }
        result
    }
}

/// Compute the URL for a raw helper parameter list.
///
/// The router's result is returned verbatim; its errors propagate unchanged.
pub fn compute_href(router: &dyn Router, params: &[HrefParam]) -> Result<String> {
    let request = NavigationRequest::from_params(params)?;
    let url = request.generate(router)?;
    trace_log!("href for '{}' computed as '{}'", request.route_name, url);
    Ok(url)
}

/// Template-helper adapter bound to one application.
///
/// # Example
///
/// ```ignore
/// let helper = HrefTo::new(&app);
///
/// // {{href-to "users.show" user}}
/// let url = helper.compute(&["users.show".into(), user.into()], None)?;
///
/// // {{href-to params=linkParams}} -- named params win over positional ones
/// let url = helper.compute(&[], Some(&link_params))?;
/// ```
pub struct HrefTo<'a> {
    app: &'a dyn Application,
}

impl<'a> HrefTo<'a> {
    /// Bind the helper to an application instance.
    pub fn new(app: &'a dyn Application) -> Self {
        Self { app }
    }

    /// Compute an href from positional params, or from the named `params`
    /// argument when one is supplied.
    pub fn compute(&self, positional: &[HrefParam], params: Option<&[HrefParam]>) -> Result<String> {
        compute_href(self.app.router(), params.unwrap_or(positional))
    }
}
