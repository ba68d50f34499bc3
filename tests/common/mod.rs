//! Test doubles for the router, platform and external opener.
//!
//! [`FakeApp`] records every call the crate makes into its collaborators so
//! tests can assert on transitions, opens and recognition lookups.

#![allow(dead_code)]

use href_to::*;
use std::cell::{Cell, RefCell};

/// Initialise `env_logger` once so `RUST_LOG=trace` shows interceptor decisions.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Router with a fixed table of `segment/:param` patterns.
pub struct FakeRouter {
    pub root: String,
    pub routes: Vec<(&'static str, &'static str)>,
    pub fail_transitions: bool,
    pub transitions: RefCell<Vec<String>>,
    pub generated: RefCell<Vec<(String, Vec<HrefParam>, QueryParams)>>,
    pub recognize_calls: Cell<usize>,
}

impl FakeRouter {
    pub fn new(root: &str) -> Self {
        Self {
            root: root.to_string(),
            routes: vec![
                ("index", ""),
                ("users.index", "users"),
                ("users.show", "users/:id"),
                ("posts.show", "posts/:post_id"),
            ],
            fail_transitions: false,
            transitions: RefCell::new(Vec::new()),
            generated: RefCell::new(Vec::new()),
            recognize_calls: Cell::new(0),
        }
    }

    fn pattern_for(&self, route_name: &str) -> Option<&'static str> {
        self.routes
            .iter()
            .find(|(name, _)| *name == route_name)
            .map(|(_, pattern)| *pattern)
    }
}

impl Router for FakeRouter {
    fn root_url(&self) -> String {
        self.root.clone()
    }

    fn generate_url(
        &self,
        route_name: &str,
        models: &[HrefParam],
        query_params: &QueryParams,
    ) -> Result<String> {
        self.generated.borrow_mut().push((
            route_name.to_string(),
            models.to_vec(),
            query_params.clone(),
        ));

        let pattern = self
            .pattern_for(route_name)
            .ok_or_else(|| NavigationError::RouteNotFound {
                path: route_name.to_string(),
            })?;

        let mut models = models.iter();
        let mut segments = Vec::new();
        for segment in pattern.split('/').filter(|s| !s.is_empty()) {
            if segment.starts_with(':') {
                let value = models
                    .next()
                    .and_then(HrefParam::segment)
                    .ok_or_else(|| NavigationError::invalid_params(segment))?;
                segments.push(value);
            } else {
                segments.push(segment.to_string());
            }
        }

        let mut root = self.root.clone();
        if !root.ends_with('/') {
            root.push('/');
        }
        let mut url = format!("{}{}", root, segments.join("/"));
        if !query_params.is_empty() {
            url.push('?');
            url.push_str(&query_params.to_query_string());
        }
        Ok(url)
    }

    fn transition_to(&self, path: &str) -> Result<()> {
        if self.fail_transitions {
            return Err(NavigationError::transition_failed(path, "aborted by route"));
        }
        self.transitions.borrow_mut().push(path.to_string());
        Ok(())
    }

    fn recognize(&self, path: &str) -> Option<RecognizedRoute> {
        self.recognize_calls.set(self.recognize_calls.get() + 1);

        let path_segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        self.routes.iter().find_map(|(name, pattern)| {
            let pattern_segments: Vec<&str> =
                pattern.split('/').filter(|s| !s.is_empty()).collect();
            if pattern_segments.len() != path_segments.len() {
                return None;
            }

            let mut route = RecognizedRoute::new(*name);
            for (pattern_seg, path_seg) in pattern_segments.iter().zip(&path_segments) {
                if let Some(param) = pattern_seg.strip_prefix(':') {
                    route = route.with_param(param, *path_seg);
                } else if pattern_seg != path_seg {
                    return None;
                }
            }
            Some(route)
        })
    }
}

/// External opener that records what it was asked to open.
#[derive(Default)]
pub struct FakeOpener {
    pub fail: bool,
    pub opened: RefCell<Vec<(String, OpenTarget)>>,
}

impl ExternalOpener for FakeOpener {
    fn open(&self, url: &str, target: OpenTarget) -> Result<()> {
        if self.fail {
            return Err(NavigationError::external_open_failed(url, "popup blocked"));
        }
        self.opened.borrow_mut().push((url.to_string(), target));
        Ok(())
    }
}

/// Application wiring the fakes together.
pub struct FakeApp {
    pub router: FakeRouter,
    pub native: bool,
    pub registry: ViewRegistry,
    pub opener: FakeOpener,
}

impl FakeApp {
    /// Plain web deployment mounted at `root`.
    pub fn web(root: &str) -> Self {
        init_logging();
        Self {
            router: FakeRouter::new(root),
            native: false,
            registry: ViewRegistry::new(),
            opener: FakeOpener::default(),
        }
    }

    /// Native-shell deployment mounted at `root`.
    pub fn native(root: &str) -> Self {
        Self {
            native: true,
            ..Self::web(root)
        }
    }

    pub fn transitions(&self) -> Vec<String> {
        self.router.transitions.borrow().clone()
    }

    pub fn opened(&self) -> Vec<(String, OpenTarget)> {
        self.opener.opened.borrow().clone()
    }
}

impl Application for FakeApp {
    fn router(&self) -> &dyn Router {
        &self.router
    }

    fn platform(&self) -> &dyn Platform {
        &self.native
    }

    fn view_registry(&self) -> &ViewRegistry {
        &self.registry
    }

    fn external_opener(&self) -> &dyn ExternalOpener {
        &self.opener
    }
}
