mod handlers;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::Extension,
    routing::{get, patch, post},
    Json, Router,
};
use chrono::Utc;
use serde_json::json;

use crate::api::API;
use crate::server::handlers::{quotes, rides};

pub type DynAPI = Arc<dyn API + Send + Sync>;

pub async fn serve<T: API + Sync + Send + 'static>(api: T) {
    let api = Arc::new(api) as DynAPI;

    let app = Router::new()
        .route("/quotes", post(quotes::create))
        .route("/rides/search", post(rides::search))
        .route("/rides/history", get(rides::history))
        .route("/rides/providers", get(rides::providers))
        .route("/rides/:token", get(rides::find))
        .route("/rides/:token/book", patch(rides::book))
        .route("/rides/:token/cancel", patch(rides::cancel))
        .route("/health", get(health))
        .layer(Extension(api));

    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));

    tracing::info!("listening on {}", addr);

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .unwrap();
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "OK",
        "timestamp": Utc::now().to_rfc3339(),
    }))
}
