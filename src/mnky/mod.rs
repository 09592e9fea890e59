use crate::mnky::handlers::{health, runtime_config};
use anyhow::Result;
use axum::{
    body::Body,
    http::{HeaderName, HeaderValue, Request},
    routing::get,
    Extension, Router,
};
use std::{path::PathBuf, sync::Arc};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    request_id::PropagateRequestIdLayer,
    services::{ServeDir, ServeFile},
    set_header::SetRequestHeaderLayer,
    trace::TraceLayer,
};
use tracing::{debug_span, info, Span};
use ulid::Ulid;

pub mod handlers;

/// Settings shared by every request.
#[derive(Clone, Debug)]
pub struct SiteConfig {
    /// Directory produced by `trunk build`.
    pub dist: PathBuf,
    pub auth_url: String,
    pub auth_anon_key: String,
}

/// Build the router: API routes first, then static files with an
/// `index.html` fallback so client-side routes survive a reload.
#[must_use]
pub fn router(config: Arc<SiteConfig>) -> Router {
    let assets =
        ServeDir::new(&config.dist).fallback(ServeFile::new(config.dist.join("index.html")));

    Router::new()
        .route("/health", get(health::health).options(health::health))
        .route("/config.js", get(runtime_config::runtime_config))
        .fallback_service(assets)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestHeaderLayer::if_not_present(
                    HeaderName::from_static("x-request-id"),
                    |_req: &_| HeaderValue::from_str(Ulid::new().to_string().as_str()).ok(),
                ))
                .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
                    "x-request-id",
                )))
                .layer(TraceLayer::new_for_http().make_span_with(make_span))
                .layer(Extension(config)),
        )
}

/// Serve until ctrl-c.
/// # Errors
/// Returns an error if the listener cannot be bound or the server fails
pub async fn new(port: u16, config: SiteConfig) -> Result<()> {
    let app = router(Arc::new(config));

    let listener = TcpListener::bind(format!("::0:{port}")).await?;

    info!("Listening on [::]:{}", port);

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(async {
            if tokio::signal::ctrl_c().await.is_ok() {
                info!("Gracefully shutdown");
            }
        })
        .await?;

    Ok(())
}

// span
fn make_span(request: &Request<Body>) -> Span {
    let path = request.uri().path();
    let method = request.method().as_str();
    let request_id = request
        .headers()
        .get("x-request-id")
        .and_then(|val| val.to_str().ok())
        .unwrap_or("none");

    debug_span!("http-request", method, path, request_id)
}
