//! Controller resolution.
//!
//! Routes never look controllers up themselves: they call the [`Resolver`]
//! capability they are handed at dispatch time. This module provides the
//! [`Resolver`] and [`Controller`] traits plus [`ControllerRegistry`], an
//! in-process resolver backed by a name-to-instance map.
//!
//! The registry's optional namespace is the explicit replacement for a
//! process-wide controller search path: it is configured on the resolver
//! (typically from [`Settings::controller_namespace`]) and prefixed onto
//! unit identifiers at lookup time, so routes stay free of any loading
//! convention.
//!
//! [`Settings::controller_namespace`]: uniroute_core::settings::Settings

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use uniroute_core::error::{RouteError, RouteResult};
use uniroute_core::settings::Settings;

use crate::route::DispatchArgs;

/// A resolved unit that dispatch can invoke.
///
/// `invoke` receives the action named by the controller spec; `construct`
/// models targets with no action, which are built directly from the
/// captured parameter sequence. Implementations decide what their output
/// is; the route hands it back to the dispatch caller unchanged.
pub trait Controller {
    /// The value produced by a successful invocation.
    type Output;

    /// Invokes the named action with the dispatch arguments.
    ///
    /// # Errors
    ///
    /// Whatever the controller raises; routes propagate it unchanged.
    fn invoke(&self, action: &str, args: DispatchArgs) -> RouteResult<Self::Output>;

    /// Constructor-style invocation for targets that name no action.
    ///
    /// # Errors
    ///
    /// Whatever the controller raises; routes propagate it unchanged.
    fn construct(&self, args: DispatchArgs) -> RouteResult<Self::Output>;
}

impl<C: Controller + ?Sized> Controller for Arc<C> {
    type Output = C::Output;

    fn invoke(&self, action: &str, args: DispatchArgs) -> RouteResult<Self::Output> {
        (**self).invoke(action, args)
    }

    fn construct(&self, args: DispatchArgs) -> RouteResult<Self::Output> {
        (**self).construct(args)
    }
}

/// Maps unit identifiers to controller instances.
///
/// The loading mechanism behind an identifier is entirely the resolver's
/// business; a route only asks for an instance it can invoke.
pub trait Resolver {
    /// The resolved unit type.
    type Unit: Controller;

    /// Resolves a unit identifier to a controller instance.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::TargetResolution`] when the identifier names
    /// nothing this resolver knows.
    fn resolve(&self, unit: &str) -> RouteResult<Self::Unit>;
}

/// The output type produced by the controllers a resolver yields.
pub type ResolvedOutput<R> = <<R as Resolver>::Unit as Controller>::Output;

/// A shareable, type-erased controller producing JSON values.
pub type SharedController = Arc<dyn Controller<Output = serde_json::Value> + Send + Sync>;

/// An in-process [`Resolver`] backed by a registration map.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use serde_json::{json, Value};
/// use uniroute_core::error::RouteResult;
/// use uniroute_routing::resolver::{Controller, ControllerRegistry, Resolver};
/// use uniroute_routing::route::DispatchArgs;
///
/// struct HealthController;
///
/// impl Controller for HealthController {
///     type Output = Value;
///
///     fn invoke(&self, _action: &str, _args: DispatchArgs) -> RouteResult<Value> {
///         Ok(json!({ "ok": true }))
///     }
///
///     fn construct(&self, _args: DispatchArgs) -> RouteResult<Value> {
///         Ok(json!({ "ok": true }))
///     }
/// }
///
/// let mut registry = ControllerRegistry::new();
/// registry.register("HealthController", Arc::new(HealthController));
/// assert!(registry.resolve("HealthController").is_ok());
/// ```
#[derive(Default)]
pub struct ControllerRegistry {
    controllers: HashMap<String, SharedController>,
    namespace: Option<String>,
}

impl fmt::Debug for ControllerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ControllerRegistry")
            .field("namespace", &self.namespace)
            .field("controllers", &self.controllers.keys())
            .finish_non_exhaustive()
    }
}

impl ControllerRegistry {
    /// Creates an empty registry with no namespace.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty registry whose lookups are prefixed with `namespace`.
    ///
    /// With a namespace of `"admin"`, resolving `"UserController"` looks up
    /// the registration named `"admin::UserController"`.
    #[must_use]
    pub fn with_namespace(namespace: impl Into<String>) -> Self {
        Self {
            controllers: HashMap::new(),
            namespace: Some(namespace.into()),
        }
    }

    /// Creates an empty registry configured from settings.
    #[must_use]
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            controllers: HashMap::new(),
            namespace: settings.controller_namespace.clone(),
        }
    }

    /// Registers a controller under the given (fully-qualified) name.
    ///
    /// A later registration under the same name replaces the earlier one.
    pub fn register(&mut self, name: impl Into<String>, controller: SharedController) {
        self.controllers.insert(name.into(), controller);
    }

    /// Whether a registration exists under the given fully-qualified name.
    pub fn contains(&self, name: &str) -> bool {
        self.controllers.contains_key(name)
    }

    /// Applies the namespace prefix to a unit identifier.
    fn qualified<'a>(&self, unit: &'a str) -> Cow<'a, str> {
        match &self.namespace {
            Some(namespace) => Cow::Owned(format!("{namespace}::{unit}")),
            None => Cow::Borrowed(unit),
        }
    }
}

impl Resolver for ControllerRegistry {
    type Unit = SharedController;

    fn resolve(&self, unit: &str) -> RouteResult<SharedController> {
        let name = self.qualified(unit);
        self.controllers.get(name.as_ref()).cloned().ok_or_else(|| {
            RouteError::TargetResolution(format!("controller '{name}' is not registered"))
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use super::*;

    struct StubController;

    impl Controller for StubController {
        type Output = Value;

        fn invoke(&self, action: &str, _args: DispatchArgs) -> RouteResult<Value> {
            Ok(json!({ "invoked": action }))
        }

        fn construct(&self, _args: DispatchArgs) -> RouteResult<Value> {
            Ok(json!("constructed"))
        }
    }

    #[test]
    fn test_register_and_resolve() {
        let mut registry = ControllerRegistry::new();
        registry.register("StubController", Arc::new(StubController));

        let unit = registry.resolve("StubController").unwrap();
        let value = unit
            .invoke("show", DispatchArgs::Positional(Vec::new()))
            .unwrap();
        assert_eq!(value, json!({ "invoked": "show" }));
    }

    #[test]
    fn test_unknown_unit_is_target_resolution_error() {
        let registry = ControllerRegistry::new();
        let err = registry.resolve("GhostController").err().unwrap();
        assert!(matches!(err, RouteError::TargetResolution(_)));
        assert!(err.to_string().contains("GhostController"));
    }

    #[test]
    fn test_namespace_prefixes_lookups() {
        let mut registry = ControllerRegistry::with_namespace("admin");
        registry.register("admin::StubController", Arc::new(StubController));

        assert!(registry.resolve("StubController").is_ok());

        let err = registry.resolve("OtherController").err().unwrap();
        assert!(err.to_string().contains("admin::OtherController"));
    }

    #[test]
    fn test_from_settings_picks_up_namespace() {
        let settings = Settings {
            controller_namespace: Some("api".to_string()),
            ..Settings::default()
        };
        let mut registry = ControllerRegistry::from_settings(&settings);
        registry.register("api::StubController", Arc::new(StubController));
        assert!(registry.resolve("StubController").is_ok());
    }

    #[test]
    fn test_later_registration_replaces_earlier() {
        struct OtherController;

        impl Controller for OtherController {
            type Output = Value;

            fn invoke(&self, _action: &str, _args: DispatchArgs) -> RouteResult<Value> {
                Ok(json!("other"))
            }

            fn construct(&self, _args: DispatchArgs) -> RouteResult<Value> {
                Ok(json!("other"))
            }
        }

        let mut registry = ControllerRegistry::new();
        registry.register("StubController", Arc::new(StubController));
        registry.register("StubController", Arc::new(OtherController));

        let unit = registry.resolve("StubController").unwrap();
        let value = unit
            .construct(DispatchArgs::Positional(Vec::new()))
            .unwrap();
        assert_eq!(value, json!("other"));
    }
}
