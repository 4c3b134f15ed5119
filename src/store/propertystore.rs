use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    models::propertymodel::{Property, PropertyStatus, PropertyType},
    store::ListingStore,
};

/// Optional constraints composed with AND semantics; an absent field means
/// "no constraint". Bedroom/bathroom values are minimums.
#[derive(Debug, Default, Clone)]
pub struct PropertySearchFilters {
    pub status: Option<PropertyStatus>,
    pub property_type: Option<PropertyType>,
    pub city: Option<String>,
    pub price_min: Option<i64>,
    pub price_max: Option<i64>,
    pub bedrooms: Option<i32>,
    pub bathrooms: Option<i32>,
    pub query: Option<String>,
}

/// Case-insensitive substring search over the fields the site surfaces.
fn matches_query(property: &Property, query: &str) -> bool {
    let needle = query.to_lowercase();

    property.title.to_lowercase().contains(&needle)
        || property.description.to_lowercase().contains(&needle)
        || property.location.to_lowercase().contains(&needle)
        || property.city.to_lowercase().contains(&needle)
        || property.property_type.as_str().contains(&needle)
}

pub fn matches_filters(property: &Property, filters: &PropertySearchFilters) -> bool {
    if let Some(status) = filters.status {
        if property.status != status {
            return false;
        }
    }

    if let Some(property_type) = filters.property_type {
        if property.property_type != property_type {
            return false;
        }
    }

    if let Some(ref city) = filters.city {
        if !property.city.eq_ignore_ascii_case(city) {
            return false;
        }
    }

    if let Some(price_min) = filters.price_min {
        if property.price < price_min {
            return false;
        }
    }

    if let Some(price_max) = filters.price_max {
        if property.price > price_max {
            return false;
        }
    }

    if let Some(bedrooms) = filters.bedrooms {
        if bedrooms > 0 && property.bedrooms < bedrooms {
            return false;
        }
    }

    if let Some(bathrooms) = filters.bathrooms {
        if bathrooms > 0 && property.bathrooms < bathrooms {
            return false;
        }
    }

    if let Some(ref query) = filters.query {
        if !query.trim().is_empty() && !matches_query(property, query.trim()) {
            return false;
        }
    }

    true
}

#[async_trait]
pub trait PropertyExt {
    /// Linear scan of the catalogue; result preserves list order and is
    /// always a subset of the seed list.
    async fn get_properties(&self, filters: PropertySearchFilters) -> Vec<Property>;

    async fn get_property_by_id(&self, property_id: Uuid) -> Option<Property>;

    /// Properties flagged for the homepage carousel.
    async fn get_featured_properties(&self) -> Vec<Property>;
}

#[async_trait]
impl PropertyExt for ListingStore {
    async fn get_properties(&self, filters: PropertySearchFilters) -> Vec<Property> {
        self.properties
            .read()
            .await
            .iter()
            .filter(|property| matches_filters(property, &filters))
            .cloned()
            .collect()
    }

    async fn get_property_by_id(&self, property_id: Uuid) -> Option<Property> {
        self.properties
            .read()
            .await
            .iter()
            .find(|property| property.id == property_id)
            .cloned()
    }

    async fn get_featured_properties(&self) -> Vec<Property> {
        self.properties
            .read()
            .await
            .iter()
            .filter(|property| property.is_featured)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::seed;
    use chrono::Utc;

    fn property(
        title: &str,
        city: &str,
        property_type: PropertyType,
        status: PropertyStatus,
        price: i64,
        bedrooms: i32,
        bathrooms: i32,
    ) -> Property {
        Property {
            id: Uuid::new_v4(),
            title: title.to_string(),
            description: format!("{title} in {city}"),
            property_type,
            status,
            location: "Al Olaya District".to_string(),
            city: city.to_string(),
            area_sqm: 250,
            bedrooms,
            bathrooms,
            price,
            amenities: vec!["Parking".to_string()],
            images: vec![],
            is_featured: false,
            auction: None,
            created_at: Utc::now(),
        }
    }

    fn sample_catalogue() -> Vec<Property> {
        vec![
            property(
                "Modern Villa",
                "Riyadh",
                PropertyType::Villa,
                PropertyStatus::ForSale,
                3_500_000,
                3,
                4,
            ),
            property(
                "Cozy Apartment",
                "Jeddah",
                PropertyType::Apartment,
                PropertyStatus::ForRent,
                85_000,
                2,
                2,
            ),
        ]
    }

    #[tokio::test]
    async fn city_and_bedroom_filter_returns_exactly_the_villa() {
        let store = ListingStore::new(sample_catalogue());

        let filters = PropertySearchFilters {
            city: Some("Riyadh".to_string()),
            bedrooms: Some(2),
            ..Default::default()
        };

        let results = store.get_properties(filters).await;
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "Modern Villa");
    }

    #[tokio::test]
    async fn every_result_satisfies_every_nonempty_constraint() {
        let store = ListingStore::new(seed::seed_properties());

        let filters = PropertySearchFilters {
            status: Some(PropertyStatus::ForSale),
            price_min: Some(500_000),
            price_max: Some(10_000_000),
            bathrooms: Some(2),
            ..Default::default()
        };

        let all = store.get_properties(PropertySearchFilters::default()).await;
        let results = store.get_properties(filters).await;

        assert!(results.len() <= all.len());
        for property in &results {
            assert!(all.iter().any(|p| p.id == property.id), "not a subset");
            assert_eq!(property.status, PropertyStatus::ForSale);
            assert!(property.price >= 500_000 && property.price <= 10_000_000);
            assert!(property.bathrooms >= 2);
        }
    }

    #[tokio::test]
    async fn free_text_query_is_case_insensitive_substring() {
        let store = ListingStore::new(sample_catalogue());

        let filters = PropertySearchFilters {
            query: Some("VILLA".to_string()),
            ..Default::default()
        };

        let results = store.get_properties(filters).await;
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].city, "Riyadh");
    }

    #[tokio::test]
    async fn query_matching_nothing_returns_empty_list() {
        let store = ListingStore::new(sample_catalogue());

        let filters = PropertySearchFilters {
            query: Some("penthouse in mars".to_string()),
            ..Default::default()
        };

        assert!(store.get_properties(filters).await.is_empty());
    }

    #[tokio::test]
    async fn zero_minimums_mean_no_constraint() {
        let store = ListingStore::new(sample_catalogue());

        let filters = PropertySearchFilters {
            bedrooms: Some(0),
            bathrooms: Some(0),
            ..Default::default()
        };

        assert_eq!(store.get_properties(filters).await.len(), 2);
    }

    #[tokio::test]
    async fn type_label_is_searchable() {
        let store = ListingStore::new(sample_catalogue());

        let filters = PropertySearchFilters {
            query: Some("apartment".to_string()),
            ..Default::default()
        };

        let results = store.get_properties(filters).await;
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].city, "Jeddah");
    }
}
