use std::sync::Arc;
use axum::{
    extract::Path,
    response::IntoResponse,
    routing::{get, post, put},
    Extension, Json, Router,
};
use uuid::Uuid;

use crate::{
    dtos::{propertydtos::PropertySummaryDto, sessiondtos::UpdatePreferencesDto},
    error::HttpError,
    middleware::SessionAuth,
    store::sessionstore::SessionExt,
    AppState,
};

pub fn session_handler() -> Router {
    Router::new()
        .route("/", get(get_session))
        .route("/favorites", get(list_favorites))
        .route("/favorites/:property_id", post(toggle_favorite))
        .route("/preferences", put(update_preferences))
}

pub async fn get_session(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(session): Extension<SessionAuth>,
) -> Result<impl IntoResponse, HttpError> {
    let state = app_state.store.get_session(session.session_id).await;

    Ok(Json(serde_json::json!({
        "status": "success",
        "data": { "session": state }
    })))
}

pub async fn list_favorites(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(session): Extension<SessionAuth>,
) -> Result<impl IntoResponse, HttpError> {
    let favorites = app_state
        .store
        .get_favorite_properties(session.session_id)
        .await;

    let results: Vec<PropertySummaryDto> = favorites
        .iter()
        .map(PropertySummaryDto::from_property)
        .collect();

    Ok(Json(serde_json::json!({
        "status": "success",
        "count": results.len(),
        "data": { "favorites": results }
    })))
}

pub async fn toggle_favorite(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(session): Extension<SessionAuth>,
    Path(property_id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpError> {
    let (is_favorite, state) = app_state
        .store
        .toggle_favorite(session.session_id, property_id)
        .await
        .map_err(HttpError::from)?;

    Ok(Json(serde_json::json!({
        "status": "success",
        "data": {
            "property_id": property_id,
            "is_favorite": is_favorite,
            "favorite_count": state.favorites.len()
        }
    })))
}

pub async fn update_preferences(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(session): Extension<SessionAuth>,
    Json(body): Json<UpdatePreferencesDto>,
) -> Result<impl IntoResponse, HttpError> {
    let state = app_state
        .store
        .update_preferences(session.session_id, body.language, body.theme)
        .await;

    Ok(Json(serde_json::json!({
        "status": "success",
        "data": { "session": state }
    })))
}
