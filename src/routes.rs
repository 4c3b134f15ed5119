use std::sync::Arc;

use axum::{middleware, routing::get, Extension, Json, Router};
use serde_json::json;
use tower_http::trace::TraceLayer;

use crate::{
    handler::{
        auctions::auction_handler, chat::chat_handler, properties::property_handler,
        session::session_handler,
    },
    middleware::session,
    AppState,
};

// Health check handler
async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "message": "Server is running"
    }))
}

pub fn create_router(app_state: Arc<AppState>) -> Router {
    let api_route = Router::new()
        .nest("/properties", property_handler())
        .nest("/auctions", auction_handler())
        .nest("/chat", chat_handler())
        .nest("/session", session_handler())
        .layer(middleware::from_fn(session))
        .layer(TraceLayer::new_for_http())
        .layer(Extension(app_state));

    Router::new()
        .route("/health", get(health_check))
        .nest("/api", api_route)
}
