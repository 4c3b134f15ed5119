use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::{
    models::{
        auctionmodel::{AuctionDetails, AuctionStatus, Bid},
        propertymodel::Property,
    },
    service::auction_service::{derived_status, minimum_bid},
    service::error::ServiceError,
    store::ListingStore,
};

#[async_trait]
pub trait AuctionExt {
    /// Every property carrying an auction sub-record, in list order.
    async fn get_auction_properties(&self) -> Vec<Property>;

    async fn get_auction(&self, property_id: Uuid) -> Result<AuctionDetails, ServiceError>;

    /// Records a bid and promotes it to the current bid. The minimum
    /// increment is enforced here: the store is the bidding authority.
    async fn place_bid(
        &self,
        property_id: Uuid,
        bidder_id: Uuid,
        amount: i64,
    ) -> Result<(Bid, AuctionDetails), ServiceError>;

    /// Bid history, newest first.
    async fn get_bids(&self, property_id: Uuid) -> Result<Vec<Bid>, ServiceError>;

    /// Persists the live -> ended transition for auctions whose deadline
    /// has passed. Returns how many were flipped.
    async fn sweep_ended_auctions(&self) -> usize;
}

#[async_trait]
impl AuctionExt for ListingStore {
    async fn get_auction_properties(&self) -> Vec<Property> {
        self.properties
            .read()
            .await
            .iter()
            .filter(|property| property.auction.is_some())
            .cloned()
            .collect()
    }

    async fn get_auction(&self, property_id: Uuid) -> Result<AuctionDetails, ServiceError> {
        let properties = self.properties.read().await;

        let property = properties
            .iter()
            .find(|property| property.id == property_id)
            .ok_or(ServiceError::PropertyNotFound(property_id))?;

        property
            .auction
            .clone()
            .ok_or(ServiceError::NoAuctionForProperty(property_id))
    }

    async fn place_bid(
        &self,
        property_id: Uuid,
        bidder_id: Uuid,
        amount: i64,
    ) -> Result<(Bid, AuctionDetails), ServiceError> {
        let mut properties = self.properties.write().await;

        let property = properties
            .iter_mut()
            .find(|property| property.id == property_id)
            .ok_or(ServiceError::PropertyNotFound(property_id))?;

        let auction = property
            .auction
            .as_mut()
            .ok_or(ServiceError::NoAuctionForProperty(property_id))?;

        let now = Utc::now();
        let status = derived_status(auction, now);
        if status != AuctionStatus::Live {
            return Err(ServiceError::AuctionNotOpen(property_id, status));
        }

        let minimum = minimum_bid(auction);
        if amount < minimum {
            return Err(ServiceError::BidBelowMinimum {
                minimum,
                offered: amount,
            });
        }

        let bid = Bid {
            id: Uuid::new_v4(),
            auction_id: auction.id,
            bidder_id,
            amount,
            placed_at: now,
        };

        auction.bids.push(bid.clone());
        auction.current_bid = amount;
        auction.status = status;

        tracing::info!(
            "Bid of {} SAR accepted on property {} (auction {})",
            amount,
            property_id,
            auction.id
        );

        Ok((bid, auction.clone()))
    }

    async fn get_bids(&self, property_id: Uuid) -> Result<Vec<Bid>, ServiceError> {
        let auction = self.get_auction(property_id).await?;

        let mut bids = auction.bids;
        bids.reverse();
        Ok(bids)
    }

    async fn sweep_ended_auctions(&self) -> usize {
        let mut properties = self.properties.write().await;
        let now = Utc::now();
        let mut flipped = 0;

        for property in properties.iter_mut() {
            if let Some(auction) = property.auction.as_mut() {
                let status = derived_status(auction, now);
                if status == AuctionStatus::Ended && auction.status != AuctionStatus::Ended {
                    auction.status = AuctionStatus::Ended;
                    flipped += 1;
                }
            }
        }

        flipped
    }
}
