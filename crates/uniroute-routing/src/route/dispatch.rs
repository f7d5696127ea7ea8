//! Controller dispatch.
//!
//! Dispatching a route resolves its controller target through a
//! [`Resolver`] and performs exactly one invocation: the named action when
//! the target carries one, a constructor-style invocation otherwise. The
//! outcome (resolved action plus whatever the controller returned) comes
//! back in a per-dispatch [`Dispatch`] value; nothing request-scoped is
//! written to the route.

use tracing::debug;

use uniroute_core::error::{RouteError, RouteResult};

use crate::resolver::{Controller, ResolvedOutput, Resolver};

use super::Route;

/// The captured parameters, shaped for a controller invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchArgs {
    /// Each captured value is its own argument.
    Positional(Vec<String>),
    /// The whole capture sequence is handed over as one bundle.
    ///
    /// Used by routes with filters, whose targets declare a single
    /// named-parameter container rather than a fixed positional signature.
    Bundled(Vec<String>),
}

impl DispatchArgs {
    /// Returns the captured values regardless of shape.
    pub fn values(&self) -> &[String] {
        match self {
            Self::Positional(values) | Self::Bundled(values) => values,
        }
    }

    /// Whether the values arrive as one bundle.
    pub const fn is_bundled(&self) -> bool {
        matches!(self, Self::Bundled(_))
    }

    /// Consumes the arguments, returning the captured values.
    pub fn into_values(self) -> Vec<String> {
        match self {
            Self::Positional(values) | Self::Bundled(values) => values,
        }
    }

    /// The number of captured values.
    pub fn len(&self) -> usize {
        self.values().len()
    }

    /// Whether no values were captured.
    pub fn is_empty(&self) -> bool {
        self.values().is_empty()
    }
}

/// The outcome of one dispatch: the resolved action and the controller's
/// return value, passed back unchanged.
#[derive(Debug, Clone)]
pub struct Dispatch<T> {
    action: Option<String>,
    value: T,
}

impl<T> Dispatch<T> {
    /// The action that was invoked, or `None` for a constructor-style target.
    pub fn action(&self) -> Option<&str> {
        self.action.as_deref()
    }

    /// Borrows the controller's return value.
    pub const fn value(&self) -> &T {
        &self.value
    }

    /// Consumes the outcome, returning the controller's return value.
    pub fn into_value(self) -> T {
        self.value
    }
}

impl Route {
    /// Dispatches the route with its stored captured parameters.
    ///
    /// See [`dispatch_with`](Self::dispatch_with) for the contract; this
    /// variant reads the values the external matcher stored via
    /// [`set_parameters`](Self::set_parameters).
    ///
    /// # Errors
    ///
    /// See [`dispatch_with`](Self::dispatch_with).
    pub fn dispatch<R: Resolver>(&self, resolver: &R) -> RouteResult<Dispatch<ResolvedOutput<R>>> {
        self.dispatch_with(resolver, self.parameters().to_vec())
    }

    /// Dispatches the route with explicit captured parameters.
    ///
    /// Resolves the controller unit through `resolver` and performs exactly
    /// one invocation: the target's action with the captured values (bundled
    /// when the route uses named parameters, positional otherwise), or a
    /// constructor-style invocation when the target names no action. The
    /// controller's return value is handed back unchanged.
    ///
    /// Hosts serving concurrent requests against one route should prefer
    /// this variant: the captures stay in the request's own scope instead of
    /// the shared route.
    ///
    /// # Errors
    ///
    /// - [`RouteError::MissingConfiguration`] if no controller target was
    ///   configured.
    /// - [`RouteError::TargetResolution`] if the resolver does not know the
    ///   unit; propagated unchanged, no fallback target is tried.
    /// - Whatever the controller itself raises, passed through unchanged.
    pub fn dispatch_with<R: Resolver>(
        &self,
        resolver: &R,
        parameters: Vec<String>,
    ) -> RouteResult<Dispatch<ResolvedOutput<R>>> {
        let spec = self.controller().ok_or_else(|| {
            RouteError::MissingConfiguration("route has no controller target".to_string())
        })?;

        let args = if self.parameters_by_name() {
            DispatchArgs::Bundled(parameters)
        } else {
            DispatchArgs::Positional(parameters)
        };

        debug!(url = self.url(), controller = %spec, "dispatching route");

        let unit = resolver.resolve(spec.unit())?;
        match spec.action() {
            Some(action) => {
                let value = unit.invoke(action, args)?;
                Ok(Dispatch {
                    action: Some(action.to_string()),
                    value,
                })
            }
            None => {
                let value = unit.construct(args)?;
                Ok(Dispatch {
                    action: None,
                    value,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::{json, Value};

    use crate::resolver::ControllerRegistry;
    use crate::route::{ControllerSpec, Route, RouteConfig};

    use super::*;

    /// Echoes back how it was invoked, so tests can observe the contract.
    struct EchoController;

    impl Controller for EchoController {
        type Output = Value;

        fn invoke(&self, action: &str, args: DispatchArgs) -> RouteResult<Value> {
            Ok(json!({
                "action": action,
                "bundled": args.is_bundled(),
                "values": args.into_values(),
            }))
        }

        fn construct(&self, args: DispatchArgs) -> RouteResult<Value> {
            Ok(json!({ "constructed": args.into_values() }))
        }
    }

    struct FailingController;

    impl Controller for FailingController {
        type Output = Value;

        fn invoke(&self, _action: &str, _args: DispatchArgs) -> RouteResult<Value> {
            Err(RouteError::invocation(std::io::Error::new(
                std::io::ErrorKind::Other,
                "boom",
            )))
        }

        fn construct(&self, _args: DispatchArgs) -> RouteResult<Value> {
            Err(RouteError::invocation(std::io::Error::new(
                std::io::ErrorKind::Other,
                "boom",
            )))
        }
    }

    fn registry() -> ControllerRegistry {
        let mut registry = ControllerRegistry::new();
        registry.register("UserController", Arc::new(EchoController));
        registry.register("FailingController", Arc::new(FailingController));
        registry
    }

    #[test]
    fn test_dispatch_invokes_named_action() {
        let mut route = Route::new(
            "/user/:id/",
            RouteConfig::new().with_controller(ControllerSpec::parse("UserController::show")),
        );
        route.set_parameters(vec!["42".to_string()]);

        let outcome = route.dispatch(&registry()).unwrap();
        assert_eq!(outcome.action(), Some("show"));
        assert_eq!(outcome.value()["action"], "show");
        assert_eq!(outcome.value()["values"], json!(["42"]));
    }

    #[test]
    fn test_dispatch_without_action_constructs() {
        let mut route = Route::new(
            "/user/:id/",
            RouteConfig::new().with_controller(ControllerSpec::parse("UserController")),
        );
        route.set_parameters(vec!["42".to_string()]);

        let outcome = route.dispatch(&registry()).unwrap();
        assert_eq!(outcome.action(), None);
        assert_eq!(outcome.value()["constructed"], json!(["42"]));
    }

    #[test]
    fn test_filters_switch_dispatch_to_bundled() {
        let mut route = Route::new(
            "/user/:id/",
            RouteConfig::new()
                .with_filter(":id", r"(\d+)")
                .with_controller(ControllerSpec::parse("UserController::show")),
        );
        route.set_parameters(vec!["42".to_string()]);

        let outcome = route.dispatch(&registry()).unwrap();
        assert_eq!(outcome.value()["bundled"], json!(true));

        let plain = Route::new(
            "/user/:id/",
            RouteConfig::new().with_controller(ControllerSpec::parse("UserController::show")),
        );
        let outcome = plain.dispatch_with(&registry(), vec!["42".to_string()]).unwrap();
        assert_eq!(outcome.value()["bundled"], json!(false));
    }

    #[test]
    fn test_dispatch_with_keeps_route_untouched() {
        let route = Route::new(
            "/user/:id/",
            RouteConfig::new().with_controller(ControllerSpec::parse("UserController::show")),
        );

        let outcome = route
            .dispatch_with(&registry(), vec!["7".to_string()])
            .unwrap();
        assert_eq!(outcome.value()["values"], json!(["7"]));
        assert!(route.parameters().is_empty());
    }

    #[test]
    fn test_dispatch_without_controller_is_missing_configuration() {
        let route = Route::new("/user/:id/", RouteConfig::new());
        let err = route.dispatch(&registry()).unwrap_err();
        assert!(matches!(err, RouteError::MissingConfiguration(_)));
    }

    #[test]
    fn test_dispatch_unknown_unit_is_target_resolution() {
        let route = Route::new(
            "/user/:id/",
            RouteConfig::new().with_controller(ControllerSpec::parse("GhostController::show")),
        );
        let err = route.dispatch(&registry()).unwrap_err();
        assert!(matches!(err, RouteError::TargetResolution(_)));
    }

    #[test]
    fn test_controller_failure_propagates_unchanged() {
        let route = Route::new(
            "/user/:id/",
            RouteConfig::new().with_controller(ControllerSpec::parse("FailingController::show")),
        );
        let err = route.dispatch(&registry()).unwrap_err();
        assert!(matches!(err, RouteError::Invocation(_)));
        assert_eq!(err.to_string(), "boom");
    }
}
