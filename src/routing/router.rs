//! Route registration and lookup.
//!
//! # Responsibilities
//! - Store compiled routes in registration order
//! - Look up the first route whose pattern accepts a path
//! - Invoke the matched handler with extracted parameters
//!
//! # Design Decisions
//! - Append-only; registration order is the only priority
//! - O(n) scan, first match wins, later routes are never evaluated
//! - No match is a normal outcome (`None`), never an error
//! - Handler output is handed back untouched, so handler errors propagate

use std::fmt;

use crate::routing::params::Params;
use crate::routing::pattern::{CompileError, Matcher};

/// Callback invoked when a route matches.
///
/// `A` carries whatever the caller passes through [`Router::resolve`]; it is
/// the same type for every route in one table. `R` is returned to the caller
/// unchanged.
pub trait Handler<A, R = ()>: Send + Sync {
    fn call(&self, params: Params, args: A) -> R;
}

impl<F, A, R> Handler<A, R> for F
where
    F: Fn(Params, A) -> R + Send + Sync,
{
    fn call(&self, params: Params, args: A) -> R {
        self(params, args)
    }
}

/// A compiled pattern paired with its handler.
pub struct Route<A, R = ()> {
    matcher: Matcher,
    handler: Box<dyn Handler<A, R>>,
}

impl<A, R> Route<A, R> {
    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    pub fn handler(&self) -> &dyn Handler<A, R> {
        self.handler.as_ref()
    }

    pub fn pattern(&self) -> &str {
        self.matcher.pattern()
    }
}

impl<A, R> fmt::Debug for Route<A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("pattern", &self.matcher.pattern())
            .field("regex", &self.matcher.as_str())
            .finish_non_exhaustive()
    }
}

/// Ordered route table.
pub struct Router<A, R = ()> {
    routes: Vec<Route<A, R>>,
}

impl<A, R> Router<A, R> {
    /// Create an empty router.
    pub fn new() -> Self {
        Self { routes: Vec::new() }
    }

    /// Compile `pattern` and append a route for it.
    ///
    /// Duplicate patterns are accepted; the earlier registration always wins.
    /// Nothing is appended if compilation fails.
    pub fn register<F>(&mut self, pattern: &str, handler: F) -> Result<(), CompileError>
    where
        F: Fn(Params, A) -> R + Send + Sync + 'static,
    {
        self.register_handler(pattern, handler)
    }

    /// Same as [`register`](Self::register) for any [`Handler`] implementor.
    pub fn register_handler<H>(&mut self, pattern: &str, handler: H) -> Result<(), CompileError>
    where
        H: Handler<A, R> + 'static,
    {
        let matcher = Matcher::new(pattern)?;
        tracing::debug!(
            pattern,
            regex = matcher.as_str(),
            index = self.routes.len(),
            "Route registered"
        );

        self.routes.push(Route {
            matcher,
            handler: Box::new(handler),
        });
        Ok(())
    }

    /// First route, in registration order, whose pattern accepts `path`.
    pub fn find(&self, path: &str) -> Option<&Route<A, R>> {
        self.routes.iter().find(|route| route.matcher.is_match(path))
    }

    /// Find the route for `path` and invoke its handler.
    ///
    /// Returns the handler's output, or `None` when nothing matched.
    pub fn resolve(&self, path: &str, args: A) -> Option<R> {
        let Some(route) = self.find(path) else {
            tracing::trace!(path, "No route matched");
            return None;
        };

        let params = route.matcher.captures(path).unwrap_or_default();
        tracing::trace!(path, pattern = route.pattern(), "Route matched");
        Some(route.handler.call(params, args))
    }

    pub fn routes(&self) -> impl Iterator<Item = &Route<A, R>> {
        self.routes.iter()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl<A, R> Default for Router<A, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A, R> fmt::Debug for Router<A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Router").field("routes", &self.routes).finish()
    }
}
