//! Request inspection.
//!
//! # Responsibilities
//! - Expose the method and URL the router needs from a request
//! - Reduce an absolute-form URL to its path (and query)
//!
//! # Design Decisions
//! - The query string is kept; every compiled pattern accepts an optional
//!   `?query` suffix
//! - Origin-form URLs (`/path?query`) are passed through without parsing

use std::borrow::Cow;

use axum::http::Request;
use url::{Position, Url};

/// The minimum a request must expose to be routed.
pub trait UrlRequest {
    /// HTTP method token, e.g. `GET`.
    fn method(&self) -> &str;

    /// Request target as received.
    fn url(&self) -> &str;
}

impl<B> UrlRequest for Request<B> {
    fn method(&self) -> &str {
        Request::method(self).as_str()
    }

    fn url(&self) -> &str {
        self.uri().path_and_query().map_or("/", |pq| pq.as_str())
    }
}

impl<T: UrlRequest + ?Sized> UrlRequest for &T {
    fn method(&self) -> &str {
        (**self).method()
    }

    fn url(&self) -> &str {
        (**self).url()
    }
}

/// Path component of a request URL, query string included.
///
/// Scheme, authority and fragment are dropped from absolute URLs. Input that
/// is not an absolute URL is returned unchanged.
pub fn request_path(url: &str) -> Cow<'_, str> {
    if url.starts_with('/') {
        return Cow::Borrowed(url);
    }

    match Url::parse(url) {
        Ok(parsed) if parsed.has_host() => {
            Cow::Owned(parsed[Position::BeforePath..Position::AfterQuery].to_string())
        }
        _ => Cow::Borrowed(url),
    }
}
