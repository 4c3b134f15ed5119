// service/background_jobs.rs
use std::sync::Arc;
use tokio::time::{interval, Duration};

use crate::{store::auctionstore::AuctionExt, AppState};

/// Cooperative sweep that persists the ended state for auctions whose
/// deadline has passed. Reads derive status from timestamps anyway, so the
/// cadence only affects how quickly the stored record catches up.
pub async fn start_auction_sweep_job(app_state: Arc<AppState>) {
    let mut interval = interval(Duration::from_secs(app_state.env.auction_sweep_secs));

    loop {
        interval.tick().await;

        let flipped = app_state.store.sweep_ended_auctions().await;
        if flipped > 0 {
            tracing::info!("Auction sweep marked {} auction(s) as ended", flipped);
        } else {
            tracing::debug!("Auction sweep found nothing to close");
        }
    }
}
