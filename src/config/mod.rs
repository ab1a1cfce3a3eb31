//! Route manifest subsystem.
//!
//! # Data Flow
//! ```text
//! manifest file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → RouterConfig (validated, immutable)
//!     → HttpRouter::from_config (routes registered in file order)
//! ```
//!
//! # Design Decisions
//! - Manifest order is route priority; nothing is sorted
//! - Validation separates syntactic (serde) from semantic checks
//! - Handlers are code, not config: the manifest names routes and the host
//!   supplies a handler per name

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{RouteConfig, RouterConfig};
pub use validation::{validate_config, ValidationError};
