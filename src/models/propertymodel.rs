use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::auctionmodel::AuctionDetails;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    Apartment,
    Villa,
    Land,
    Commercial,
    Office,
}

impl PropertyType {
    /// Lowercase label used by the free-text search and in responses.
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::Apartment => "apartment",
            PropertyType::Villa => "villa",
            PropertyType::Land => "land",
            PropertyType::Commercial => "commercial",
            PropertyType::Office => "office",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PropertyStatus {
    ForSale,
    ForRent,
    Sold,
    Rented,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Property {
    pub id: Uuid,

    // Basic property info
    pub title: String,
    pub description: String,
    pub property_type: PropertyType,
    pub status: PropertyStatus,

    // Location details
    pub location: String,
    pub city: String,

    // Specifications
    pub area_sqm: i64,
    pub bedrooms: i32,
    pub bathrooms: i32,

    // Pricing (whole SAR)
    pub price: i64,

    // Features
    pub amenities: Vec<String>,
    pub images: Vec<String>,

    // Homepage carousel flag
    pub is_featured: bool,

    pub auction: Option<AuctionDetails>,

    pub created_at: DateTime<Utc>,
}

impl Property {
    pub fn is_auction(&self) -> bool {
        self.auction.is_some()
    }
}
