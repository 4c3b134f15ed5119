use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::{
    models::propertymodel::{Property, PropertyStatus, PropertyType},
    store::propertystore::PropertySearchFilters,
    utils::currency::format_sar,
};

#[derive(Debug, Deserialize, Validate, Default)]
pub struct PropertyQueryDto {
    pub status: Option<PropertyStatus>,
    pub property_type: Option<PropertyType>,
    pub city: Option<String>,

    #[validate(range(min = 0, message = "price_min cannot be negative"))]
    pub price_min: Option<i64>,

    #[validate(range(min = 0, message = "price_max cannot be negative"))]
    pub price_max: Option<i64>,

    #[validate(range(min = 0, max = 20, message = "bedrooms must be between 0 and 20"))]
    pub bedrooms: Option<i32>,

    #[validate(range(min = 0, max = 20, message = "bathrooms must be between 0 and 20"))]
    pub bathrooms: Option<i32>,

    pub q: Option<String>,
}

impl PropertyQueryDto {
    pub fn into_filters(self) -> PropertySearchFilters {
        PropertySearchFilters {
            status: self.status,
            property_type: self.property_type,
            city: self.city,
            price_min: self.price_min,
            price_max: self.price_max,
            bedrooms: self.bedrooms,
            bathrooms: self.bathrooms,
            query: self.q,
        }
    }
}

/// Card-sized view of a property for list responses; detail responses
/// return the full model.
#[derive(Debug, Serialize, Deserialize)]
pub struct PropertySummaryDto {
    pub id: Uuid,
    pub title: String,
    pub property_type: PropertyType,
    pub status: PropertyStatus,
    pub location: String,
    pub city: String,
    pub price: i64,
    pub price_label: String,
    pub area_sqm: i64,
    pub bedrooms: i32,
    pub bathrooms: i32,
    pub is_featured: bool,
    pub is_auction: bool,
    pub cover_image: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl PropertySummaryDto {
    pub fn from_property(property: &Property) -> Self {
        Self {
            id: property.id,
            title: property.title.clone(),
            property_type: property.property_type,
            status: property.status,
            location: property.location.clone(),
            city: property.city.clone(),
            price: property.price,
            price_label: format_sar(property.price),
            area_sqm: property.area_sqm,
            bedrooms: property.bedrooms,
            bathrooms: property.bathrooms,
            is_featured: property.is_featured,
            is_auction: property.is_auction(),
            cover_image: property.images.first().cloned(),
            created_at: property.created_at,
        }
    }
}
