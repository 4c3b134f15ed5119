use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AuctionStatus {
    Upcoming,
    Live,
    Ended,
    Cancelled,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AuctionDetails {
    pub id: Uuid,
    pub property_id: Uuid,

    pub starting_price: i64,
    pub current_bid: i64,
    pub increment_amount: i64,

    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,

    // Last stored status. Reads must go through the derived status so a
    // stale value can never present a past-deadline auction as live.
    pub status: AuctionStatus,

    pub bids: Vec<Bid>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Bid {
    pub id: Uuid,
    pub auction_id: Uuid,
    pub bidder_id: Uuid,
    pub amount: i64,
    pub placed_at: DateTime<Utc>,
}
