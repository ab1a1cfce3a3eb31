//! HTTP adapter over the generic route table.
//!
//! # Data Flow
//! ```text
//! host server request
//!     → request.rs (method + URL via UrlRequest, path extraction)
//!     → router.rs (route table lookup by path)
//!     → method check on the matched route
//!     → handler(req, res, params)
//! ```

pub mod request;
pub mod router;

pub use request::{request_path, UrlRequest};
pub use router::{BoxedHttpHandler, BuildError, HttpRouter};
