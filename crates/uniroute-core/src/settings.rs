//! Settings for uniroute.
//!
//! This module provides the [`Settings`] struct holding the library's
//! configuration. There is no process-wide settings instance: hosts build a
//! `Settings` value (directly or via [`Settings::from_toml_str`]) and hand
//! it to the collaborators that need it: [`setup_logging`] for the log
//! output, the controller resolver for its namespace.
//!
//! [`setup_logging`]: crate::logging::setup_logging

use serde::{Deserialize, Serialize};

use crate::error::{RouteError, RouteResult};

/// Library configuration.
///
/// # Examples
///
/// ```
/// use uniroute_core::settings::Settings;
///
/// let settings = Settings::from_toml_str(
///     r#"
///     debug = true
///     log_level = "debug"
///     controller_namespace = "admin"
///     "#,
/// )
/// .unwrap();
/// assert!(settings.debug);
/// assert_eq!(settings.controller_namespace.as_deref(), Some("admin"));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Debug mode: pretty, human-readable log output instead of JSON.
    pub debug: bool,
    /// The log filter directive (e.g. "info", "uniroute=debug").
    pub log_level: String,
    /// Optional namespace the controller resolver prefixes onto unit
    /// identifiers before lookup. Owned by the resolver; routes never read it.
    pub controller_namespace: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debug: false,
            log_level: "info".to_string(),
            controller_namespace: None,
        }
    }
}

impl Settings {
    /// Parses settings from a TOML document.
    ///
    /// Unknown keys are rejected so configuration typos fail loudly.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::InvalidConfiguration`] if the document is not
    /// valid TOML or contains unknown keys.
    pub fn from_toml_str(raw: &str) -> RouteResult<Self> {
        toml::from_str(raw)
            .map_err(|e| RouteError::InvalidConfiguration(format!("invalid settings: {e}")))
    }
}
