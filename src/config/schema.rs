//! Route manifest schema.
//!
//! All types derive Serde traits for deserialization from TOML.
//!
//! ```toml
//! [[routes]]
//! name = "profile"
//! method = "GET"
//! pattern = "/@:username/profile"
//!
//! [[routes]]
//! name = "not_found"
//! pattern = "**"
//! ```

use serde::{Deserialize, Serialize};

/// Root of a route manifest.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RouterConfig {
    /// Routes in priority order (first match wins).
    pub routes: Vec<RouteConfig>,
}

/// A single route entry.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RouteConfig {
    /// Route identifier, used to look up its handler.
    pub name: String,

    /// HTTP method (default: GET).
    #[serde(default = "default_method")]
    pub method: String,

    /// Route pattern, e.g. `/user/:id`.
    pub pattern: String,
}

fn default_method() -> String {
    "GET".to_string()
}
