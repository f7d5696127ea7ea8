//! Logging integration for uniroute.
//!
//! Provides helpers for configuring [`tracing`]-based logging from
//! [`Settings`](crate::settings::Settings) and for creating per-dispatch spans.

use crate::settings::Settings;

/// Sets up the global tracing subscriber based on the given settings.
///
/// The log filter is read from `settings.log_level` (e.g. "debug", "info",
/// "warn", "error"). In debug mode a pretty, human-readable format is used;
/// otherwise a structured JSON format is used.
///
/// Installing a subscriber when one is already set is a no-op.
pub fn setup_logging(settings: &Settings) {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_new(&settings.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    if settings.debug {
        fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(true)
            .with_thread_ids(false)
            .with_file(true)
            .with_line_number(true)
            .pretty()
            .try_init()
            .ok();
    } else {
        fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(true)
            .json()
            .try_init()
            .ok();
    }
}

/// Creates a tracing span for a single dispatch.
///
/// Attach this span around a match-and-dispatch cycle so that all log
/// entries emitted while a controller runs carry the route's template.
///
/// # Examples
///
/// ```
/// use uniroute_core::logging::dispatch_span;
///
/// let span = dispatch_span("/articles/:slug/");
/// let _guard = span.enter();
/// tracing::info!("invoking controller");
/// ```
pub fn dispatch_span(route: &str) -> tracing::Span {
    tracing::info_span!("dispatch", route = route)
}
