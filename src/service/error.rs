use thiserror::Error;
use uuid::Uuid;

use crate::{error::HttpError, models::auctionmodel::AuctionStatus};
use axum::http::StatusCode;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Property {0} not found")]
    PropertyNotFound(Uuid),

    #[error("Property {0} is not up for auction")]
    NoAuctionForProperty(Uuid),

    #[error("Auction for property {0} is not open for bidding (status: {1:?})")]
    AuctionNotOpen(Uuid, AuctionStatus),

    #[error("Bid of {offered} SAR is below the minimum of {minimum} SAR")]
    BidBelowMinimum { minimum: i64, offered: i64 },
}

impl From<ServiceError> for HttpError {
    fn from(error: ServiceError) -> Self {
        match error {
            ServiceError::PropertyNotFound(_)
            | ServiceError::NoAuctionForProperty(_) => {
                HttpError::not_found(error.to_string())
            }

            ServiceError::AuctionNotOpen(_, _)
            | ServiceError::BidBelowMinimum { .. } => {
                HttpError::bad_request(error.to_string())
            }
        }
    }
}

impl ServiceError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::PropertyNotFound(_)
            | ServiceError::NoAuctionForProperty(_) => StatusCode::NOT_FOUND,

            ServiceError::AuctionNotOpen(_, _)
            | ServiceError::BidBelowMinimum { .. } => StatusCode::BAD_REQUEST,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_variant_maps_to_a_client_visible_status() {
        let not_found = ServiceError::PropertyNotFound(Uuid::new_v4());
        assert_eq!(not_found.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(HttpError::from(not_found).status, StatusCode::NOT_FOUND);

        let no_auction = ServiceError::NoAuctionForProperty(Uuid::new_v4());
        assert_eq!(no_auction.status_code(), StatusCode::NOT_FOUND);

        let not_open = ServiceError::AuctionNotOpen(Uuid::new_v4(), AuctionStatus::Ended);
        assert_eq!(not_open.status_code(), StatusCode::BAD_REQUEST);

        let low = ServiceError::BidBelowMinimum {
            minimum: 100,
            offered: 1,
        };
        assert_eq!(low.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(HttpError::from(low).status, StatusCode::BAD_REQUEST);
    }
}
