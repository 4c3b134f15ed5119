use std::sync::Arc;
use axum::{
    extract::{Path, Query},
    response::IntoResponse,
    routing::get,
    Extension, Json, Router,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    dtos::propertydtos::{PropertyQueryDto, PropertySummaryDto},
    error::HttpError,
    store::propertystore::PropertyExt,
    AppState,
};

pub fn property_handler() -> Router {
    Router::new()
        .route("/", get(list_properties))
        .route("/featured", get(get_featured_properties))
        .route("/:property_id", get(get_property_by_id))
}

pub async fn list_properties(
    Query(query): Query<PropertyQueryDto>,
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    query
        .validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let properties = app_state.store.get_properties(query.into_filters()).await;

    let results: Vec<PropertySummaryDto> = properties
        .iter()
        .map(PropertySummaryDto::from_property)
        .collect();

    if results.is_empty() {
        return Ok(Json(serde_json::json!({
            "status": "success",
            "message": "No properties found matching your criteria.",
            "count": 0,
            "data": { "properties": [] }
        })));
    }

    Ok(Json(serde_json::json!({
        "status": "success",
        "count": results.len(),
        "data": { "properties": results }
    })))
}

pub async fn get_featured_properties(
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    let featured = app_state.store.get_featured_properties().await;

    let results: Vec<PropertySummaryDto> = featured
        .iter()
        .map(PropertySummaryDto::from_property)
        .collect();

    Ok(Json(serde_json::json!({
        "status": "success",
        "count": results.len(),
        "data": { "properties": results }
    })))
}

pub async fn get_property_by_id(
    Path(property_id): Path<Uuid>,
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    let property = app_state
        .store
        .get_property_by_id(property_id)
        .await
        .ok_or_else(|| HttpError::not_found("Property not found"))?;

    Ok(Json(serde_json::json!({
        "status": "success",
        "data": { "property": property }
    })))
}
