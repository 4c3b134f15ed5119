use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::{
    models::{
        auctionmodel::{AuctionDetails, AuctionStatus},
        propertymodel::{Property, PropertyType},
    },
    service::auction_service::{derived_status, suggested_bid, time_left},
    utils::currency::format_sar,
};

#[derive(Debug, Deserialize, Validate)]
pub struct PlaceBidDto {
    // Ceiling far above any realistic sale price; keeps absurd amounts
    // out of the bid arithmetic.
    #[validate(range(
        min = 1,
        max = 10_000_000_000,
        message = "Bid amount must be between 1 and 10,000,000,000 riyals"
    ))]
    pub amount: i64,
}

/// One auction as the bidding page renders it: the countdown string, the
/// derived status and the stepper's suggested amount are computed
/// server-side at response time.
#[derive(Debug, Serialize, Deserialize)]
pub struct AuctionViewDto {
    pub auction_id: Uuid,
    pub property_id: Uuid,
    pub title: String,
    pub city: String,
    pub location: String,
    pub property_type: PropertyType,
    pub area_sqm: i64,
    pub cover_image: Option<String>,

    pub starting_price: i64,
    pub current_bid: i64,
    pub current_bid_label: String,
    pub increment_amount: i64,
    pub suggested_bid: i64,

    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub status: AuctionStatus,
    pub time_left: String,

    pub bid_count: usize,
}

impl AuctionViewDto {
    pub fn from_property(property: &Property, auction: &AuctionDetails, now: DateTime<Utc>) -> Self {
        Self {
            auction_id: auction.id,
            property_id: property.id,
            title: property.title.clone(),
            city: property.city.clone(),
            location: property.location.clone(),
            property_type: property.property_type,
            area_sqm: property.area_sqm,
            cover_image: property.images.first().cloned(),
            starting_price: auction.starting_price,
            current_bid: auction.current_bid,
            current_bid_label: format_sar(auction.current_bid),
            increment_amount: auction.increment_amount,
            suggested_bid: suggested_bid(auction),
            start_date: auction.start_date,
            end_date: auction.end_date,
            status: derived_status(auction, now),
            time_left: time_left(auction.end_date, now),
            bid_count: auction.bids.len(),
        }
    }
}
