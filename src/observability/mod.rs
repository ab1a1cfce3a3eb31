//! Observability subsystem.
//!
//! # Events
//! - `debug` "Route registered": pattern, generated regex, table index
//! - `trace` "Route matched" / "No route matched": lookup outcome
//! - `trace` "Method mismatch": HTTP route matched by path only
//! - `info` "Router built from config": route count
//!
//! # Design Decisions
//! - Events only; no metrics, no spans on the lookup path

pub mod logging;

pub use logging::init_logging;
