use axum::{
    Router,
    routing::get,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::api::{classes, users};
use crate::db::Store;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
}

pub fn router(store: Arc<dyn Store>) -> Router {
    let state = Arc::new(AppState { store });

    Router::new()
        .route("/health", get(|| async { "OK" }))
        .route("/users", get(users::list_users).post(users::create_user))
        .route("/users/{id}", get(users::get_user))
        .route("/classes", get(classes::list_classes).post(classes::create_class))
        .route("/classes/{id}", get(classes::get_class))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serves the API on an already bound listener until the process exits.
pub async fn serve(listener: TcpListener, store: Arc<dyn Store>) -> std::io::Result<()> {
    tracing::info!(addr = %listener.local_addr()?, "server running");
    axum::serve(listener, router(store)).await
}
