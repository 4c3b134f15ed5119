use std::sync::Arc;
use axum::{
    extract::Path,
    response::IntoResponse,
    routing::get,
    Extension, Json, Router,
};
use chrono::Utc;
use uuid::Uuid;
use validator::Validate;

use crate::{
    dtos::auctiondtos::{AuctionViewDto, PlaceBidDto},
    error::HttpError,
    middleware::SessionAuth,
    store::{auctionstore::AuctionExt, propertystore::PropertyExt},
    AppState,
};

pub fn auction_handler() -> Router {
    Router::new()
        .route("/", get(list_auctions))
        .route("/:property_id", get(get_auction))
        .route("/:property_id/bids", get(list_bids).post(place_bid))
}

pub async fn list_auctions(
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    let properties = app_state.store.get_auction_properties().await;
    let now = Utc::now();

    let auctions: Vec<AuctionViewDto> = properties
        .iter()
        .filter_map(|property| {
            property
                .auction
                .as_ref()
                .map(|auction| AuctionViewDto::from_property(property, auction, now))
        })
        .collect();

    if auctions.is_empty() {
        return Ok(Json(serde_json::json!({
            "status": "success",
            "message": "No active auctions at the moment.",
            "count": 0,
            "data": { "auctions": [] }
        })));
    }

    Ok(Json(serde_json::json!({
        "status": "success",
        "count": auctions.len(),
        "data": { "auctions": auctions }
    })))
}

pub async fn get_auction(
    Path(property_id): Path<Uuid>,
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    let property = app_state
        .store
        .get_property_by_id(property_id)
        .await
        .ok_or_else(|| HttpError::not_found("Property not found"))?;

    let auction = property
        .auction
        .as_ref()
        .ok_or_else(|| HttpError::not_found("Property is not up for auction"))?;

    let view = AuctionViewDto::from_property(&property, auction, Utc::now());

    Ok(Json(serde_json::json!({
        "status": "success",
        "data": { "auction": view }
    })))
}

pub async fn place_bid(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(session): Extension<SessionAuth>,
    Path(property_id): Path<Uuid>,
    Json(body): Json<PlaceBidDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    // The session id doubles as the bidder id; there is no account system.
    let (bid, auction) = app_state
        .store
        .place_bid(property_id, session.session_id, body.amount)
        .await
        .map_err(HttpError::from)?;

    let property = app_state
        .store
        .get_property_by_id(property_id)
        .await
        .ok_or_else(|| HttpError::server_error("Property vanished mid-request"))?;

    let view = AuctionViewDto::from_property(&property, &auction, Utc::now());

    Ok(Json(serde_json::json!({
        "status": "success",
        "message": "Bid placed successfully",
        "data": {
            "bid": bid,
            "auction": view
        }
    })))
}

pub async fn list_bids(
    Path(property_id): Path<Uuid>,
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    let bids = app_state
        .store
        .get_bids(property_id)
        .await
        .map_err(HttpError::from)?;

    Ok(Json(serde_json::json!({
        "status": "success",
        "count": bids.len(),
        "data": { "bids": bids }
    })))
}
