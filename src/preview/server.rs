//! Local HTTP server handing the current document to browser renderers.

use std::net::SocketAddr;

use axum::{
    extract::State,
    http::header,
    response::{Html, IntoResponse, Json},
    routing::get,
    Router,
};
use serde_json::json;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tower_http::cors::{Any, CorsLayer};

use super::html::render_page;
use crate::error::SystemError;
use crate::spec::StoreSnapshot;

/// Shared state for the handlers: the latest published snapshot.
#[derive(Clone)]
pub struct PreviewState {
    snapshots: watch::Receiver<StoreSnapshot>,
}

impl PreviewState {
    pub fn new(snapshots: watch::Receiver<StoreSnapshot>) -> Self {
        Self { snapshots }
    }

    fn current(&self) -> StoreSnapshot {
        self.snapshots.borrow().clone()
    }
}

/// A running preview server.
#[derive(Debug)]
pub struct PreviewServer {
    addr: SocketAddr,
    handle: JoinHandle<()>,
}

impl PreviewServer {
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Address for the browser.
    pub fn url(&self) -> String {
        format!("http://{}/", self.addr)
    }

    pub fn shutdown(self) {
        self.handle.abort();
    }
}

/// Build the router. Exposed for tests that drive it without a socket.
pub fn router(state: PreviewState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(page_handler))
        .route("/openapi.json", get(document_handler))
        .route("/healthz", get(health_handler))
        .layer(cors)
        .with_state(state)
}

/// Bind `addr` and serve snapshots from `snapshots` until aborted.
///
/// Port 0 picks an ephemeral port; the bound address is returned.
pub async fn start_preview_server(
    addr: SocketAddr,
    snapshots: watch::Receiver<StoreSnapshot>,
) -> Result<PreviewServer, SystemError> {
    let bind_failed = |e: std::io::Error| SystemError::BindFailed {
        addr: addr.to_string(),
        message: e.to_string(),
    };
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(bind_failed)?;
    let actual_addr = listener.local_addr().map_err(bind_failed)?;

    tracing::info!("Preview server listening on http://{}", actual_addr);

    let app = router(PreviewState::new(snapshots));
    let handle = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            tracing::error!("Preview server error: {}", e);
        }
    });

    Ok(PreviewServer {
        addr: actual_addr,
        handle,
    })
}

async fn page_handler(State(state): State<PreviewState>) -> impl IntoResponse {
    let snapshot = state.current();
    let title = snapshot
        .document
        .get("info")
        .and_then(|info| info.get("title"))
        .and_then(|title| title.as_str())
        .unwrap_or_default()
        .to_string();
    (
        [(header::CACHE_CONTROL, "no-store")],
        Html(render_page(snapshot.viewer, &title)),
    )
}

async fn document_handler(State(state): State<PreviewState>) -> impl IntoResponse {
    let snapshot = state.current();
    (
        [(header::CACHE_CONTROL, "no-store")],
        Json(snapshot.document.as_ref().clone()),
    )
}

async fn health_handler(State(state): State<PreviewState>) -> impl IntoResponse {
    let snapshot = state.current();
    Json(json!({
        "status": "ok",
        "revision": snapshot.revision,
        "viewer": snapshot.viewer.id(),
    }))
}
