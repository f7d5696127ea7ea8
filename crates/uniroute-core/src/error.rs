//! Core error types for uniroute.
//!
//! This module provides the [`RouteError`] enum covering every failure a
//! route can surface: configuration errors at dispatch time, target
//! resolution failures, pattern compilation failures, and errors raised by
//! invoked controllers (which pass through unchanged).

use thiserror::Error;

/// The primary error type for uniroute.
///
/// Routes never retry and never fall back: every failure is surfaced to the
/// caller immediately. Controller failures in particular are carried
/// transparently: a route neither wraps nor swallows what its target raises.
#[derive(Error, Debug)]
pub enum RouteError {
    // ── Configuration ────────────────────────────────────────────────

    /// Dispatch was attempted before a controller target was configured.
    #[error("Missing configuration: {0}")]
    MissingConfiguration(String),

    /// A configuration value could not be parsed.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    // ── Resolution ───────────────────────────────────────────────────

    /// The resolver could not find or load the named controller unit.
    #[error("Target resolution failed: {0}")]
    TargetResolution(String),

    // ── Pattern compilation ──────────────────────────────────────────

    /// The compiled matching expression is not a valid regex.
    ///
    /// Filter sub-expressions are never validated up front; an invalid one
    /// fails here, when the anchored matcher is built.
    #[error("Pattern compilation failed: {0}")]
    PatternCompilation(#[from] regex::Error),

    /// A reverse URL build had no value for one of the template's placeholders.
    #[error("No value provided for parameter ':{0}'")]
    MissingParameter(String),

    // ── Invocation ───────────────────────────────────────────────────

    /// A failure raised by an invoked controller, passed through unchanged.
    #[error(transparent)]
    Invocation(#[from] anyhow::Error),
}

impl RouteError {
    /// Wraps an arbitrary controller failure for transparent propagation.
    pub fn invocation<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Invocation(anyhow::Error::new(err))
    }
}

/// A convenience type alias for `Result<T, RouteError>`.
pub type RouteResult<T> = Result<T, RouteError>;
