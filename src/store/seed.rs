use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::models::{
    auctionmodel::{AuctionDetails, AuctionStatus},
    propertymodel::{Property, PropertyStatus, PropertyType},
};

const DEFAULT_INCREMENT: i64 = 50_000;

fn auction(
    property_id: Uuid,
    starting_price: i64,
    start_offset_days: i64,
    end_offset_days: i64,
) -> AuctionDetails {
    let now = Utc::now();
    AuctionDetails {
        id: Uuid::new_v4(),
        property_id,
        starting_price,
        current_bid: starting_price,
        increment_amount: DEFAULT_INCREMENT,
        start_date: now + Duration::days(start_offset_days),
        end_date: now + Duration::days(end_offset_days),
        status: AuctionStatus::Upcoming,
        bids: vec![],
    }
}

/// The static catalogue the site markets. Seeded once at startup; auction
/// windows are anchored to boot time so one auction is live, one upcoming
/// and one already ended.
pub fn seed_properties() -> Vec<Property> {
    let now = Utc::now();

    let villa_id = Uuid::new_v4();
    let land_id = Uuid::new_v4();
    let office_id = Uuid::new_v4();

    vec![
        Property {
            id: villa_id,
            title: "Luxury Villa in Al Nakheel".to_string(),
            description: "Spacious five-bedroom villa with a private pool, landscaped garden and driver quarters in the heart of Al Nakheel district.".to_string(),
            property_type: PropertyType::Villa,
            status: PropertyStatus::ForSale,
            location: "Al Nakheel District".to_string(),
            city: "Riyadh".to_string(),
            area_sqm: 620,
            bedrooms: 5,
            bathrooms: 6,
            price: 4_800_000,
            amenities: vec![
                "Private Pool".to_string(),
                "Garden".to_string(),
                "Smart Home".to_string(),
                "Covered Parking".to_string(),
            ],
            images: vec![
                "/images/villa-nakheel-1.jpg".to_string(),
                "/images/villa-nakheel-2.jpg".to_string(),
            ],
            is_featured: true,
            auction: Some(auction(villa_id, 4_200_000, -1, 3)),
            created_at: now - Duration::days(40),
        },
        Property {
            id: Uuid::new_v4(),
            title: "Modern Apartment near King Fahd Road".to_string(),
            description: "Two-bedroom apartment on a high floor with skyline views, walking distance from the financial district.".to_string(),
            property_type: PropertyType::Apartment,
            status: PropertyStatus::ForRent,
            location: "Al Olaya District".to_string(),
            city: "Riyadh".to_string(),
            area_sqm: 140,
            bedrooms: 2,
            bathrooms: 2,
            price: 95_000,
            amenities: vec![
                "Gym".to_string(),
                "Concierge".to_string(),
                "Parking".to_string(),
            ],
            images: vec!["/images/apartment-olaya-1.jpg".to_string()],
            is_featured: true,
            auction: None,
            created_at: now - Duration::days(25),
        },
        Property {
            id: Uuid::new_v4(),
            title: "Seafront Apartment on the Corniche".to_string(),
            description: "Three-bedroom apartment overlooking the Red Sea with direct Corniche access and a family-friendly compound.".to_string(),
            property_type: PropertyType::Apartment,
            status: PropertyStatus::ForSale,
            location: "Corniche Road".to_string(),
            city: "Jeddah".to_string(),
            area_sqm: 185,
            bedrooms: 3,
            bathrooms: 3,
            price: 1_650_000,
            amenities: vec![
                "Sea View".to_string(),
                "Playground".to_string(),
                "Security".to_string(),
            ],
            images: vec!["/images/apartment-corniche-1.jpg".to_string()],
            is_featured: true,
            auction: None,
            created_at: now - Duration::days(18),
        },
        Property {
            id: land_id,
            title: "Residential Land Plot in Obhur".to_string(),
            description: "Corner plot in North Obhur zoned for residential development, minutes from the new marina.".to_string(),
            property_type: PropertyType::Land,
            status: PropertyStatus::ForSale,
            location: "North Obhur".to_string(),
            city: "Jeddah".to_string(),
            area_sqm: 900,
            bedrooms: 0,
            bathrooms: 0,
            price: 2_100_000,
            amenities: vec!["Corner Plot".to_string()],
            images: vec!["/images/land-obhur-1.jpg".to_string()],
            is_featured: false,
            auction: Some(auction(land_id, 1_800_000, 2, 9)),
            created_at: now - Duration::days(60),
        },
        Property {
            id: Uuid::new_v4(),
            title: "Family Villa in Al Shatea".to_string(),
            description: "Four-bedroom villa near the Dammam waterfront with a majlis, maid's room and shaded backyard.".to_string(),
            property_type: PropertyType::Villa,
            status: PropertyStatus::ForSale,
            location: "Al Shatea District".to_string(),
            city: "Dammam".to_string(),
            area_sqm: 480,
            bedrooms: 4,
            bathrooms: 5,
            price: 2_950_000,
            amenities: vec![
                "Majlis".to_string(),
                "Backyard".to_string(),
                "Parking".to_string(),
            ],
            images: vec!["/images/villa-shatea-1.jpg".to_string()],
            is_featured: false,
            auction: None,
            created_at: now - Duration::days(12),
        },
        Property {
            id: office_id,
            title: "Fitted Office Floor in Al Khobar Business Gate".to_string(),
            description: "Full office floor with partitioned meeting rooms, raised floors and dedicated parking in the business district.".to_string(),
            property_type: PropertyType::Office,
            status: PropertyStatus::ForRent,
            location: "Business Gate Tower".to_string(),
            city: "Al Khobar".to_string(),
            area_sqm: 520,
            bedrooms: 0,
            bathrooms: 4,
            price: 380_000,
            amenities: vec![
                "Raised Floors".to_string(),
                "Meeting Rooms".to_string(),
                "Dedicated Parking".to_string(),
            ],
            images: vec!["/images/office-khobar-1.jpg".to_string()],
            is_featured: false,
            auction: Some(auction(office_id, 300_000, -10, -2)),
            created_at: now - Duration::days(90),
        },
        Property {
            id: Uuid::new_v4(),
            title: "Commercial Showroom on Prince Sultan Street".to_string(),
            description: "Street-facing showroom with double-height glass frontage and mezzanine storage, previously rented to a furniture brand.".to_string(),
            property_type: PropertyType::Commercial,
            status: PropertyStatus::Rented,
            location: "Prince Sultan Street".to_string(),
            city: "Jeddah".to_string(),
            area_sqm: 340,
            bedrooms: 0,
            bathrooms: 2,
            price: 520_000,
            amenities: vec!["Glass Frontage".to_string(), "Mezzanine".to_string()],
            images: vec!["/images/showroom-jeddah-1.jpg".to_string()],
            is_featured: false,
            auction: None,
            created_at: now - Duration::days(200),
        },
        Property {
            id: Uuid::new_v4(),
            title: "Compact Studio in Al Malaz".to_string(),
            description: "Recently renovated studio apartment close to the university, sold furnished.".to_string(),
            property_type: PropertyType::Apartment,
            status: PropertyStatus::Sold,
            location: "Al Malaz District".to_string(),
            city: "Riyadh".to_string(),
            area_sqm: 55,
            bedrooms: 1,
            bathrooms: 1,
            price: 420_000,
            amenities: vec!["Furnished".to_string()],
            images: vec!["/images/studio-malaz-1.jpg".to_string()],
            is_featured: false,
            auction: None,
            created_at: now - Duration::days(150),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::auction_service::derived_status;

    #[test]
    fn seed_covers_every_type_and_has_featured_entries() {
        let properties = seed_properties();

        assert_eq!(properties.len(), 8);
        assert_eq!(properties.iter().filter(|p| p.is_featured).count(), 3);

        for property_type in [
            PropertyType::Apartment,
            PropertyType::Villa,
            PropertyType::Land,
            PropertyType::Commercial,
            PropertyType::Office,
        ] {
            assert!(
                properties.iter().any(|p| p.property_type == property_type),
                "missing {property_type:?}"
            );
        }
    }

    #[test]
    fn seed_auctions_span_live_upcoming_and_ended() {
        let properties = seed_properties();
        let now = Utc::now();

        let statuses: Vec<AuctionStatus> = properties
            .iter()
            .filter_map(|p| p.auction.as_ref())
            .map(|auction| derived_status(auction, now))
            .collect();

        assert_eq!(statuses.len(), 3);
        assert!(statuses.contains(&AuctionStatus::Live));
        assert!(statuses.contains(&AuctionStatus::Upcoming));
        assert!(statuses.contains(&AuctionStatus::Ended));
    }

    #[test]
    fn auction_records_point_back_at_their_property() {
        for property in seed_properties() {
            if let Some(auction) = property.auction {
                assert_eq!(auction.property_id, property.id);
                assert_eq!(auction.current_bid, auction.starting_price);
                assert_eq!(auction.increment_amount, DEFAULT_INCREMENT);
            }
        }
    }
}
