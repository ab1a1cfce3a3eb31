//! Method-aware router for HTTP servers.
//!
//! # Responsibilities
//! - Register handlers per (method, pattern)
//! - Route a request by its URL path, then check its method
//! - Build a router from a validated route manifest
//!
//! # Design Decisions
//! - Path matching happens before method filtering: the first route whose
//!   pattern accepts the path consumes the lookup even when its method
//!   differs, and no later route is tried
//! - Methods are compared exactly (case-sensitive)
//! - The host server owns request/response types; they are passed through
//!   to handlers untouched

use thiserror::Error;

use crate::config::validation::join_errors;
use crate::config::{validate_config, RouteConfig, RouterConfig, ValidationError};
use crate::http::request::{request_path, UrlRequest};
use crate::routing::{CompileError, Params, Router};

/// Type-erased handler, as produced by manifest handler lookups.
pub type BoxedHttpHandler<Req, Res, R = ()> = Box<dyn Fn(Req, Res, Params) -> R + Send + Sync>;

/// Errors raised while building a router from configuration.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("invalid route configuration: {}", join_errors(.0))]
    Invalid(Vec<ValidationError>),

    #[error("no handler provided for route `{0}`")]
    MissingHandler(String),

    #[error(transparent)]
    Compile(#[from] CompileError),
}

/// Router that dispatches requests by method and path.
///
/// `Req` must expose its method and URL through [`UrlRequest`]. `Res` is any
/// per-request value the host wants handed to the handler alongside it.
pub struct HttpRouter<Req, Res, R = ()> {
    router: Router<(Req, Res), Option<R>>,
}

impl<Req, Res, R> HttpRouter<Req, Res, R> {
    pub fn new() -> Self {
        Self {
            router: Router::new(),
        }
    }

    /// The underlying route table.
    pub fn router(&self) -> &Router<(Req, Res), Option<R>> {
        &self.router
    }

    pub fn len(&self) -> usize {
        self.router.len()
    }

    pub fn is_empty(&self) -> bool {
        self.router.is_empty()
    }
}

impl<Req, Res, R> HttpRouter<Req, Res, R>
where
    Req: UrlRequest + 'static,
    Res: 'static,
    R: 'static,
{
    /// Register `handler` for `method` requests matching `pattern`.
    ///
    /// Chainable:
    /// ```
    /// use zephyri::http::HttpRouter;
    /// use axum::http::Request;
    ///
    /// let router = HttpRouter::<Request<()>, (), String>::new()
    ///     .on("GET", "/user/:id", |_, _, params| params.get("id").unwrap_or("").to_string())?
    ///     .on("GET", "**", |_, _, _| "404".to_string())?;
    ///
    /// let req = Request::get("/user/7").body(()).unwrap();
    /// assert_eq!(router.lookup(req, ()), Some("7".to_string()));
    /// # Ok::<(), zephyri::routing::CompileError>(())
    /// ```
    pub fn on<F>(mut self, method: &str, pattern: &str, handler: F) -> Result<Self, CompileError>
    where
        F: Fn(Req, Res, Params) -> R + Send + Sync + 'static,
    {
        self.add(method, pattern, handler)?;
        Ok(self)
    }

    /// Non-consuming form of [`on`](Self::on).
    pub fn add<F>(&mut self, method: &str, pattern: &str, handler: F) -> Result<&mut Self, CompileError>
    where
        F: Fn(Req, Res, Params) -> R + Send + Sync + 'static,
    {
        let expected = method.to_string();
        self.router.register(pattern, move |params, (req, res): (Req, Res)| {
            if req.method() == expected {
                Some(handler(req, res, params))
            } else {
                tracing::trace!(expected = %expected, actual = req.method(), "Method mismatch");
                None
            }
        })?;
        Ok(self)
    }

    /// Route `req` and invoke the matching handler.
    ///
    /// Returns `None` when no pattern accepted the path or the first
    /// accepting route was registered for another method.
    pub fn lookup(&self, req: Req, res: Res) -> Option<R> {
        let path = request_path(req.url()).into_owned();
        self.router.resolve(&path, (req, res)).flatten()
    }

    /// Build a router from a route manifest.
    ///
    /// `handler_for` supplies the handler for each configured route, usually
    /// by name. Routes are registered in manifest order.
    pub fn from_config<F>(config: &RouterConfig, mut handler_for: F) -> Result<Self, BuildError>
    where
        F: FnMut(&RouteConfig) -> Option<BoxedHttpHandler<Req, Res, R>>,
    {
        validate_config(config).map_err(BuildError::Invalid)?;

        let mut router = Self::new();
        for route in &config.routes {
            let handler =
                handler_for(route).ok_or_else(|| BuildError::MissingHandler(route.name.clone()))?;
            router.add(&route.method, &route.pattern, handler)?;
        }

        tracing::info!(routes = router.len(), "Router built from config");
        Ok(router)
    }
}

impl<Req, Res, R> Default for HttpRouter<Req, Res, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Req, Res, R> std::fmt::Debug for HttpRouter<Req, Res, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpRouter").field("router", &self.router).finish()
    }
}
