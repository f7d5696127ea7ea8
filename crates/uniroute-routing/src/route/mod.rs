//! The routing unit.
//!
//! This module provides [`Route`]: one URL template bound to a set of
//! accepted HTTP methods, optional per-placeholder filters, and a controller
//! target. A route compiles its template into a matching expression
//! ([`Route::pattern`], [`Route::compile`]) and dispatches captured
//! parameters to a resolved controller ([`Route::dispatch`]).
//!
//! Applying the expression to a request path is the owning router's job: it
//! matches, hands the captures back via [`Route::set_parameters`] (or
//! directly to [`Route::dispatch_with`]), and dispatches.
//!
//! # Examples
//!
//! ```
//! use uniroute_routing::route::{Route, RouteConfig};
//!
//! let route = Route::new(
//!     "/user/:id",
//!     RouteConfig::new().with_filter(":id", r"(\d+)"),
//! );
//!
//! // The template is normalized to end in a separator.
//! assert_eq!(route.url(), "/user/:id/");
//! // The filter replaces the placeholder in the compiled expression.
//! assert_eq!(route.pattern(), r"/user/(\d+)/");
//! ```

mod config;
mod dispatch;
mod pattern;

pub use config::{ControllerSpec, RouteConfig};
pub use dispatch::{Dispatch, DispatchArgs};
pub use pattern::DEFAULT_SEGMENT;

use std::collections::HashMap;

use http::Method;

/// A single URL-template-to-controller binding.
///
/// A route is exclusively owned by whichever router holds it. Mutation
/// happens during setup (or single-threaded request handling); dispatch
/// itself borrows the route immutably and returns its outcome in a
/// per-dispatch [`Dispatch`] value.
#[derive(Debug, Clone)]
pub struct Route {
    /// The URL template, normalized to end in exactly one `/`.
    url: String,
    /// Accepted HTTP methods, deduplicated, in first-occurrence order.
    methods: Vec<Method>,
    /// Optional name for reverse lookup by an external router.
    name: Option<String>,
    /// Opaque target identifier owned by the host.
    target: Option<String>,
    /// Placeholder filters, keyed by the exact token (e.g. `":id"`).
    filters: HashMap<String, String>,
    /// Whether dispatch bundles captured parameters instead of spreading them.
    parameters_by_name: bool,
    /// Captured parameter values, populated by the external matcher.
    parameters: Vec<String>,
    /// The controller target.
    controller: Option<ControllerSpec>,
}

impl Route {
    /// Creates a route from a URL template and its configuration.
    ///
    /// The template is normalized exactly like [`set_url`](Self::set_url)
    /// does, so constructed and later-mutated routes never compile to
    /// different expressions. Supplying `filters`, even an empty table,
    /// switches the route to named-parameter dispatch.
    pub fn new(url: impl Into<String>, config: RouteConfig) -> Self {
        let RouteConfig {
            methods,
            target,
            name,
            filters,
            controller,
        } = config;

        let mut route = Self {
            url: normalize(&url.into()),
            methods: dedup_methods(methods),
            name,
            target,
            filters: HashMap::new(),
            parameters_by_name: false,
            parameters: Vec::new(),
            controller,
        };
        if let Some(filters) = filters {
            route.set_filters(filters, true);
        }
        route
    }

    /// Returns the URL template.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Replaces the URL template, normalizing the trailing separator.
    ///
    /// A template without a trailing `/` gets one appended; a run of
    /// trailing separators collapses to one. Setting an already-normalized
    /// template is a no-op on the stored value.
    pub fn set_url(&mut self, url: impl Into<String>) {
        self.url = normalize(&url.into());
    }

    /// Returns the accepted HTTP methods.
    pub fn methods(&self) -> &[Method] {
        &self.methods
    }

    /// Replaces the accepted methods wholesale, deduplicating them.
    pub fn set_methods(&mut self, methods: impl IntoIterator<Item = Method>) {
        self.methods = dedup_methods(methods.into_iter().collect());
    }

    /// Whether this route accepts the given method.
    ///
    /// An empty method set is unrestricted and accepts every method.
    pub fn accepts(&self, method: &Method) -> bool {
        self.methods.is_empty() || self.methods.contains(method)
    }

    /// Returns the route name, if set.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Sets the route name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    /// Returns the opaque target identifier, if set.
    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    /// Sets the opaque target identifier.
    pub fn set_target(&mut self, target: impl Into<String>) {
        self.target = Some(target.into());
    }

    /// Returns the placeholder filters.
    pub fn filters(&self) -> &HashMap<String, String> {
        &self.filters
    }

    /// Replaces the placeholder filters.
    ///
    /// `parameters_by_name` decides whether dispatch bundles the captured
    /// values into one container; supplying filters at construction always
    /// sets it.
    pub fn set_filters(&mut self, filters: HashMap<String, String>, parameters_by_name: bool) {
        self.filters = filters;
        self.parameters_by_name = parameters_by_name;
    }

    /// Whether dispatch bundles captured parameters into one container.
    pub const fn parameters_by_name(&self) -> bool {
        self.parameters_by_name
    }

    /// Returns the captured parameter values.
    pub fn parameters(&self) -> &[String] {
        &self.parameters
    }

    /// Stores the values the external matcher captured for this route.
    pub fn set_parameters(&mut self, parameters: Vec<String>) {
        self.parameters = parameters;
    }

    /// Returns the controller target, if configured.
    pub fn controller(&self) -> Option<&ControllerSpec> {
        self.controller.as_ref()
    }
}

/// Normalizes a template to end in exactly one trailing separator.
fn normalize(url: &str) -> String {
    let trimmed = url.trim_end_matches('/');
    format!("{trimmed}/")
}

/// Removes duplicate methods, keeping first-occurrence order.
fn dedup_methods(methods: Vec<Method>) -> Vec<Method> {
    let mut out: Vec<Method> = Vec::with_capacity(methods.len());
    for method in methods {
        if !out.contains(&method) {
            out.push(method);
        }
    }
    out
}
