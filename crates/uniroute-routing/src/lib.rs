//! # uniroute-routing
//!
//! The routing unit for uniroute: one URL template bound to accepted HTTP
//! methods, optional per-placeholder filters, and a controller target.
//!
//! A [`Route`] compiles its template into a matching expression and
//! dispatches captured parameters to a controller resolved through the
//! [`Resolver`] capability. What it deliberately does not do: pick between
//! candidate routes, extract captures from request paths, or speak HTTP.
//! That is the owning router's job.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use serde_json::{json, Value};
//! use uniroute_core::error::RouteResult;
//! use uniroute_routing::resolver::{Controller, ControllerRegistry};
//! use uniroute_routing::route::{ControllerSpec, DispatchArgs, Route, RouteConfig};
//!
//! struct ArticleController;
//!
//! impl Controller for ArticleController {
//!     type Output = Value;
//!
//!     fn invoke(&self, _action: &str, args: DispatchArgs) -> RouteResult<Value> {
//!         Ok(json!({ "slug": args.values()[0] }))
//!     }
//!
//!     fn construct(&self, args: DispatchArgs) -> RouteResult<Value> {
//!         Ok(json!({ "args": args.into_values() }))
//!     }
//! }
//!
//! let mut registry = ControllerRegistry::new();
//! registry.register("ArticleController", Arc::new(ArticleController));
//!
//! let mut route = Route::new(
//!     "/articles/:slug/",
//!     RouteConfig::new()
//!         .with_filter(":slug", "([a-z0-9-]+)")
//!         .with_controller(ControllerSpec::parse("ArticleController::view")),
//! );
//!
//! // The owning router applies the compiled matcher and stores the captures.
//! let matcher = route.compile().unwrap();
//! let captures = matcher.captures("/articles/hello-world/").unwrap();
//! route.set_parameters(vec![captures[1].to_string()]);
//!
//! let outcome = route.dispatch(&registry).unwrap();
//! assert_eq!(outcome.action(), Some("view"));
//! assert_eq!(outcome.value()["slug"], "hello-world");
//! ```

pub mod resolver;
pub mod route;

// Re-export the most commonly used types at the crate root.
pub use resolver::{Controller, ControllerRegistry, Resolver, SharedController};
pub use route::{ControllerSpec, Dispatch, DispatchArgs, Route, RouteConfig};
