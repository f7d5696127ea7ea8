//! Pattern compilation for routes.
//!
//! A URL template marks variable path segments with `:`-prefixed placeholder
//! tokens (e.g. `/user/:id/`). Compilation replaces each token with either
//! the route's filter sub-expression for that exact token or with
//! [`DEFAULT_SEGMENT`], leaving every other character untouched as a literal
//! anchor. The result is handed to the external matcher, which applies it as
//! a fully-matching test against a request path.

use std::collections::HashMap;
use std::hash::BuildHasher;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use uniroute_core::error::{RouteError, RouteResult};

use super::Route;

/// The default capturing sub-expression for a placeholder with no filter.
///
/// Matches one or more word characters, hyphens, dots, and percent signs
/// (the unreserved path-segment characters plus URL-encoded octets) as a
/// single capturing group.
pub const DEFAULT_SEGMENT: &str = r"([\w\-.%]+)";

/// A placeholder token: `:` followed by one or more word characters.
/// A bare `:` with nothing word-like after it is not a placeholder.
static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r":\w+").expect("placeholder token regex is valid"));

impl Route {
    /// Compiles the URL template into a matching expression.
    ///
    /// Placeholder tokens are substituted left-to-right over non-overlapping
    /// occurrences, each resolved independently: the filter keyed by the
    /// exact token wins, otherwise [`DEFAULT_SEGMENT`] is used. Compilation
    /// is pure and never fails, even when a filter holds invalid regex
    /// syntax: calling it twice without mutating the template or filters
    /// yields the identical expression.
    ///
    /// The expression is unanchored; applying it as a full match is the
    /// external matcher's concern (see [`compile`](Self::compile)).
    pub fn pattern(&self) -> String {
        PLACEHOLDER
            .replace_all(&self.url, |caps: &Captures<'_>| {
                let token = &caps[0];
                self.filters
                    .get(token)
                    .cloned()
                    .unwrap_or_else(|| DEFAULT_SEGMENT.to_string())
            })
            .into_owned()
    }

    /// Builds the anchored matcher the external router applies.
    ///
    /// Wraps [`pattern`](Self::pattern) in `^…$` and compiles it. This is
    /// the point where an invalid filter sub-expression surfaces.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::PatternCompilation`] if the expression is not
    /// valid regex syntax.
    pub fn compile(&self) -> RouteResult<Regex> {
        let anchored = format!("^{}$", self.pattern());
        Ok(Regex::new(&anchored)?)
    }

    /// Builds a concrete URL from the template and the given values.
    ///
    /// Each placeholder token is replaced by the value keyed by its bare
    /// name (without the `:` prefix). Literal characters pass through
    /// unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::MissingParameter`] if a placeholder has no
    /// value.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::collections::HashMap;
    /// use uniroute_routing::route::{Route, RouteConfig};
    ///
    /// let route = Route::new("/articles/:slug/", RouteConfig::new());
    /// let mut values = HashMap::new();
    /// values.insert("slug", "hello-world");
    /// assert_eq!(route.url_for(&values).unwrap(), "/articles/hello-world/");
    /// ```
    pub fn url_for<S: BuildHasher>(&self, values: &HashMap<&str, &str, S>) -> RouteResult<String> {
        let mut missing: Option<String> = None;
        let url = PLACEHOLDER
            .replace_all(&self.url, |caps: &Captures<'_>| {
                let name = &caps[0][1..];
                values.get(name).map_or_else(
                    || {
                        if missing.is_none() {
                            missing = Some(name.to_string());
                        }
                        String::new()
                    },
                    |value| (*value).to_string(),
                )
            })
            .into_owned();

        match missing {
            Some(name) => Err(RouteError::MissingParameter(name)),
            None => Ok(url),
        }
    }
}
