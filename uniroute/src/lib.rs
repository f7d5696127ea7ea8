//! # uniroute
//!
//! A single-route URL pattern matching and dispatch library.
//!
//! This is the meta-crate that re-exports the sub-crates for convenient
//! access. Depend on `uniroute` to get everything, or on the individual
//! crates for finer-grained control.

/// Core types: errors, settings, logging helpers.
pub use uniroute_core as core;

/// The routing unit: routes, pattern compilation, controller dispatch.
pub use uniroute_routing as routing;

// The working set most hosts need, at the top level.
pub use uniroute_core::error::{RouteError, RouteResult};
pub use uniroute_core::settings::Settings;
pub use uniroute_routing::resolver::{Controller, ControllerRegistry, Resolver};
pub use uniroute_routing::route::{ControllerSpec, Dispatch, DispatchArgs, Route, RouteConfig};
