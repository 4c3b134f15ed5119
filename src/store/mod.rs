pub mod auctionstore;
pub mod propertystore;
pub mod seed;
pub mod sessionstore;

use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::{propertymodel::Property, sessionmodel::SessionState};

/// In-memory stand-in for a backend the site never had: the seeded
/// catalogue plus per-visitor session state. Everything is created and
/// destroyed with the process.
pub struct ListingStore {
    // Vec keeps the seed order; listings are returned in list order.
    pub(crate) properties: RwLock<Vec<Property>>,
    pub(crate) sessions: RwLock<HashMap<Uuid, SessionState>>,
}

impl std::fmt::Debug for ListingStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListingStore")
            .field("properties", &"RwLock<Vec<Property>>")
            .field("sessions", &"RwLock<HashMap<Uuid, SessionState>>")
            .finish()
    }
}

impl ListingStore {
    pub fn new(properties: Vec<Property>) -> Self {
        ListingStore {
            properties: RwLock::new(properties),
            sessions: RwLock::new(HashMap::new()),
        }
    }

    pub fn seeded() -> Self {
        Self::new(seed::seed_properties())
    }

    pub async fn property_count(&self) -> usize {
        self.properties.read().await.len()
    }
}
