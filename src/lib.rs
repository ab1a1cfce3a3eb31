//! Ordered path router.
//!
//! Patterns are compiled to regular expressions and checked in registration
//! order; the first one that accepts a path wins and its handler is called
//! with the extracted parameters.
//!
//! ```
//! use zephyri::Router;
//!
//! let mut router: Router<(), String> = Router::new();
//! router.register("/app", |_, ()| "app".to_string())?;
//! router.register("/user/:name/:message", |params, ()| {
//!     format!("{} says {}", params.get("name").unwrap_or(""), params.get("message").unwrap_or(""))
//! })?;
//!
//! assert_eq!(router.resolve("/app", ()), Some("app".to_string()));
//! assert_eq!(router.resolve("/user/bree/123", ()), Some("bree says 123".to_string()));
//! assert_eq!(router.resolve("/missing", ()), None);
//! # Ok::<(), zephyri::CompileError>(())
//! ```

pub mod config;
pub mod http;
pub mod observability;
pub mod routing;

pub use config::RouterConfig;
pub use http::HttpRouter;
pub use routing::{compile, CompileError, Handler, Matcher, Params, Route, Router};
