//! Minimal server that hands every request to an `HttpRouter`.
//!
//! ```text
//! cargo run --example basic
//! curl localhost:3000/hello        → {"param":"hello"}
//! curl localhost:3000/user/7       → 7
//! curl localhost:3000/a/b          → 404
//! ```

use std::sync::Arc;

use axum::extract::Request;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tokio::net::TcpListener;
use zephyri::observability::logging::{init_logging, DEFAULT_FILTER};
use zephyri::HttpRouter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging(DEFAULT_FILTER);

    // `/user/:id` sits after `/:param` but never conflicts: segment counts differ.
    let routes = HttpRouter::<Request, (), Response>::new()
        .on("GET", "/:param", |_, _, params| Json(params).into_response())?
        .on("GET", "/user/:id", |_, _, params| {
            params.get("id").unwrap_or_default().to_string().into_response()
        })?
        .on("GET", "**", |_, _, _| (StatusCode::NOT_FOUND, "404").into_response())?;
    let routes = Arc::new(routes);

    let app = axum::Router::new().fallback(move |req: Request| {
        let routes = routes.clone();
        async move {
            routes
                .lookup(req, ())
                .unwrap_or_else(|| StatusCode::METHOD_NOT_ALLOWED.into_response())
        }
    });

    let listener = TcpListener::bind("127.0.0.1:3000").await?;
    tracing::info!(address = %listener.local_addr()?, "Demo server listening");

    axum::serve(listener, app).await?;
    Ok(())
}
