//! Route configuration.
//!
//! This module provides [`RouteConfig`], the typed options bag a [`Route`]
//! is constructed from, and [`ControllerSpec`], the parsed form of a
//! controller target. Both deserialize with serde so route tables can be
//! loaded from JSON or TOML documents the same way settings are.
//!
//! [`Route`]: crate::route::Route

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use http::Method;
use serde::de::{Deserializer, Error as _};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// A controller target: a unit identifier plus an optional action name.
///
/// The textual form is `"Unit::action"`. A spec without an action names a
/// unit that is constructed directly at dispatch time instead of having a
/// method invoked on it.
///
/// # Examples
///
/// ```
/// use uniroute_routing::route::ControllerSpec;
///
/// let spec = ControllerSpec::parse("UserController::show");
/// assert_eq!(spec.unit(), "UserController");
/// assert_eq!(spec.action(), Some("show"));
///
/// let spec = ControllerSpec::parse("InvokableController");
/// assert_eq!(spec.action(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerSpec {
    unit: String,
    action: Option<String>,
}

impl ControllerSpec {
    /// Creates a spec from its parts.
    pub fn new(unit: impl Into<String>, action: Option<String>) -> Self {
        Self {
            unit: unit.into(),
            action,
        }
    }

    /// Parses the `Unit::action` textual form.
    ///
    /// The first `::`-separated segment is the unit identifier; the second,
    /// if present and non-blank after trimming, is the action. Any further
    /// segments are ignored.
    pub fn parse(spec: &str) -> Self {
        let mut segments = spec.split("::");
        let unit = segments.next().unwrap_or_default().to_string();
        let action = segments
            .next()
            .map(str::trim)
            .filter(|a| !a.is_empty())
            .map(String::from);
        Self { unit, action }
    }

    /// Returns the unit identifier.
    pub fn unit(&self) -> &str {
        &self.unit
    }

    /// Returns the action name, if one was given.
    pub fn action(&self) -> Option<&str> {
        self.action.as_deref()
    }
}

impl fmt::Display for ControllerSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.action {
            Some(action) => write!(f, "{}::{action}", self.unit),
            None => write!(f, "{}", self.unit),
        }
    }
}

impl From<&str> for ControllerSpec {
    fn from(spec: &str) -> Self {
        Self::parse(spec)
    }
}

impl<'de> Deserialize<'de> for ControllerSpec {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}

impl Serialize for ControllerSpec {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

/// The options a [`Route`](crate::route::Route) is constructed from.
///
/// All fields are optional. A `filters` table that is present, even empty,
/// switches the route to named-parameter dispatch: captured values are
/// handed to the controller as one bundle instead of positionally.
///
/// # Examples
///
/// ```
/// use http::Method;
/// use uniroute_routing::route::{ControllerSpec, RouteConfig};
///
/// let config = RouteConfig::new()
///     .with_methods([Method::GET])
///     .with_name("article-view")
///     .with_filter(":slug", "[a-z0-9-]+")
///     .with_controller(ControllerSpec::parse("ArticleController::view"));
/// assert_eq!(config.name.as_deref(), Some("article-view"));
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RouteConfig {
    /// Accepted HTTP methods, as tokens (e.g. `["GET", "POST"]`) in config files.
    #[serde(deserialize_with = "methods_from_tokens")]
    pub methods: Vec<Method>,
    /// Opaque target identifier owned by the host.
    pub target: Option<String>,
    /// Route name for reverse lookup by an external router.
    pub name: Option<String>,
    /// Per-placeholder filter sub-expressions, keyed by the exact
    /// placeholder token (e.g. `":id"`).
    pub filters: Option<HashMap<String, String>>,
    /// The controller target, in `"Unit::action"` form in config files.
    pub controller: Option<ControllerSpec>,
}

impl RouteConfig {
    /// Creates an empty configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the accepted methods.
    #[must_use]
    pub fn with_methods(mut self, methods: impl IntoIterator<Item = Method>) -> Self {
        self.methods = methods.into_iter().collect();
        self
    }

    /// Sets the opaque target identifier.
    #[must_use]
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    /// Sets the route name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Adds a placeholder filter, keyed by the exact token (e.g. `":id"`).
    #[must_use]
    pub fn with_filter(mut self, token: impl Into<String>, expression: impl Into<String>) -> Self {
        self.filters
            .get_or_insert_with(HashMap::new)
            .insert(token.into(), expression.into());
        self
    }

    /// Sets the controller target.
    #[must_use]
    pub fn with_controller(mut self, controller: impl Into<ControllerSpec>) -> Self {
        self.controller = Some(controller.into());
        self
    }
}

/// Deserializes HTTP methods from their token form.
fn methods_from_tokens<'de, D>(deserializer: D) -> Result<Vec<Method>, D::Error>
where
    D: Deserializer<'de>,
{
    let tokens = Vec::<String>::deserialize(deserializer)?;
    tokens
        .iter()
        .map(|token| {
            Method::from_str(token)
                .map_err(|_| D::Error::custom(format!("invalid HTTP method token: {token}")))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spec_parse_unit_and_action() {
        let spec = ControllerSpec::parse("UserController::show");
        assert_eq!(spec.unit(), "UserController");
        assert_eq!(spec.action(), Some("show"));
    }

    #[test]
    fn test_spec_parse_unit_only() {
        let spec = ControllerSpec::parse("UserController");
        assert_eq!(spec.unit(), "UserController");
        assert_eq!(spec.action(), None);
    }

    #[test]
    fn test_spec_parse_blank_action_means_none() {
        assert_eq!(ControllerSpec::parse("UserController::").action(), None);
        assert_eq!(ControllerSpec::parse("UserController::   ").action(), None);
    }

    #[test]
    fn test_spec_parse_extra_segments_ignored() {
        let spec = ControllerSpec::parse("A::B::C");
        assert_eq!(spec.unit(), "A");
        assert_eq!(spec.action(), Some("B"));
    }

    #[test]
    fn test_spec_display_round_trip() {
        assert_eq!(
            ControllerSpec::parse("UserController::show").to_string(),
            "UserController::show"
        );
        assert_eq!(
            ControllerSpec::parse("UserController").to_string(),
            "UserController"
        );
    }

    #[test]
    fn test_config_from_json() {
        let config: RouteConfig = serde_json::from_str(
            r#"{
                "methods": ["GET", "POST"],
                "name": "user-detail",
                "filters": { ":id": "(\\d+)" },
                "controller": "UserController::show"
            }"#,
        )
        .unwrap();

        assert_eq!(config.methods, vec![Method::GET, Method::POST]);
        assert_eq!(config.name.as_deref(), Some("user-detail"));
        assert_eq!(
            config.filters.as_ref().unwrap().get(":id").unwrap(),
            "(\\d+)"
        );
        let spec = config.controller.unwrap();
        assert_eq!(spec.unit(), "UserController");
        assert_eq!(spec.action(), Some("show"));
    }

    #[test]
    fn test_config_from_json_all_absent() {
        let config: RouteConfig = serde_json::from_str("{}").unwrap();
        assert!(config.methods.is_empty());
        assert!(config.target.is_none());
        assert!(config.name.is_none());
        assert!(config.filters.is_none());
        assert!(config.controller.is_none());
    }

    #[test]
    fn test_config_rejects_bad_method_token() {
        let result: Result<RouteConfig, _> =
            serde_json::from_str(r#"{ "methods": ["GE T"] }"#);
        assert!(result.is_err());
    }
}
