//! # uniroute-core
//!
//! Core types for the uniroute routing library. This crate has no routing
//! logic of its own and provides the foundation the other crates build on.
//!
//! ## Modules
//!
//! - [`error`] - Error types and result alias
//! - [`settings`] - Library settings
//! - [`logging`] - Tracing-based logging integration

pub mod error;
pub mod logging;
pub mod settings;

// Re-export the most commonly used types at the crate root.
pub use error::{RouteError, RouteResult};
pub use settings::Settings;
