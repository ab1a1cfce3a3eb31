//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Registration:
//!     pattern string
//!     → pattern.rs (expand wildcards, bind :params, anchor)
//!     → Matcher appended to the route table
//!
//! Lookup:
//!     path
//!     → router.rs (scan routes in registration order)
//!     → first Matcher that accepts the path
//!     → captures → Params → handler(params, args)
//!     → or None when nothing matched
//! ```
//!
//! # Design Decisions
//! - Registration order is the only priority
//! - Deterministic: same table and path always select the same route
//! - First match wins; later routes are never evaluated

pub mod params;
pub mod pattern;
pub mod router;

pub use params::Params;
pub use pattern::{compile, CompileError, Matcher};
pub use router::{Handler, Route, Router};
