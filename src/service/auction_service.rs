use chrono::{DateTime, Utc};

use crate::models::auctionmodel::{AuctionDetails, AuctionStatus};

/// Status as of `now`, derived from the auction window. Cancelled is
/// terminal and never recomputed.
pub fn derived_status(auction: &AuctionDetails, now: DateTime<Utc>) -> AuctionStatus {
    if auction.status == AuctionStatus::Cancelled {
        return AuctionStatus::Cancelled;
    }

    if now < auction.start_date {
        AuctionStatus::Upcoming
    } else if now >= auction.end_date {
        AuctionStatus::Ended
    } else {
        AuctionStatus::Live
    }
}

/// Remaining-time string shown next to the countdown clock. Once the
/// deadline passes this is permanently "Auction Ended", regardless of how
/// often or rarely it gets recomputed.
pub fn time_left(end_date: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let remaining = end_date.signed_duration_since(now);

    if remaining.num_seconds() <= 0 {
        return "Auction Ended".to_string();
    }

    let days = remaining.num_days();
    let hours = remaining.num_hours() % 24;
    let minutes = remaining.num_minutes() % 60;
    let seconds = remaining.num_seconds() % 60;

    if days > 0 {
        format!("{}d {}h {}m", days, hours, minutes)
    } else {
        format!("{}h {}m {}s", hours, minutes, seconds)
    }
}

/// Default amount offered to the bidder: one increment above the current
/// bid. Each press of the stepper adds exactly one more increment.
/// Saturates at `i64::MAX` so an extreme current bid cannot wrap the
/// suggestion negative.
pub fn suggested_bid(auction: &AuctionDetails) -> i64 {
    auction.current_bid.saturating_add(auction.increment_amount)
}

/// Lowest amount the service will accept. Same value as [`suggested_bid`];
/// named separately because one is a hint and the other is a rule.
pub fn minimum_bid(auction: &AuctionDetails) -> i64 {
    auction.current_bid.saturating_add(auction.increment_amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use uuid::Uuid;

    fn auction(start_offset_secs: i64, end_offset_secs: i64) -> AuctionDetails {
        let now = Utc::now();
        AuctionDetails {
            id: Uuid::new_v4(),
            property_id: Uuid::new_v4(),
            starting_price: 1_000_000,
            current_bid: 1_200_000,
            increment_amount: 50_000,
            start_date: now + Duration::seconds(start_offset_secs),
            end_date: now + Duration::seconds(end_offset_secs),
            status: AuctionStatus::Live,
            bids: vec![],
        }
    }

    #[test]
    fn past_deadline_is_always_ended() {
        let auction = auction(-7200, -3600);
        let now = Utc::now();

        assert_eq!(derived_status(&auction, now), AuctionStatus::Ended);
        // A coarse polling cadence must not resurrect the countdown.
        assert_eq!(
            derived_status(&auction, now + Duration::days(30)),
            AuctionStatus::Ended
        );
        assert_eq!(time_left(auction.end_date, now), "Auction Ended");
    }

    #[test]
    fn window_bounds_drive_status() {
        let now = Utc::now();

        assert_eq!(
            derived_status(&auction(3600, 7200), now),
            AuctionStatus::Upcoming
        );
        assert_eq!(
            derived_status(&auction(-3600, 3600), now),
            AuctionStatus::Live
        );
    }

    #[test]
    fn cancelled_is_terminal() {
        let mut auction = auction(-3600, 3600);
        auction.status = AuctionStatus::Cancelled;

        assert_eq!(
            derived_status(&auction, Utc::now()),
            AuctionStatus::Cancelled
        );
    }

    #[test]
    fn time_left_switches_format_at_one_day() {
        let now = Utc::now();

        let long = now + Duration::days(2) + Duration::hours(5) + Duration::minutes(3);
        assert_eq!(time_left(long, now), "2d 5h 3m");

        let short = now + Duration::hours(5) + Duration::minutes(3) + Duration::seconds(2);
        assert_eq!(time_left(short, now), "5h 3m 2s");
    }

    #[test]
    fn extreme_current_bid_saturates_instead_of_wrapping() {
        let mut auction = auction(-3600, 3600);
        auction.current_bid = i64::MAX;

        assert_eq!(suggested_bid(&auction), i64::MAX);
        assert_eq!(minimum_bid(&auction), i64::MAX);
        // The minimum never goes backwards, so a small bid still loses.
        assert!(1 < minimum_bid(&auction));
    }

    #[test]
    fn stepper_accumulates_by_one_increment() {
        let mut auction = auction(-3600, 3600);

        assert_eq!(suggested_bid(&auction), 1_250_000);

        // Each accepted bid at the suggestion moves the next suggestion up
        // by exactly the increment.
        auction.current_bid = suggested_bid(&auction);
        assert_eq!(suggested_bid(&auction), 1_300_000);
        auction.current_bid = suggested_bid(&auction);
        assert_eq!(suggested_bid(&auction), 1_350_000);
    }
}
