// Provider records - the two directory variants and their shared vocabulary

use serde::{Deserialize, Serialize};
use std::fmt;

/// Discriminates the two provider variants wherever a record is referenced
/// by bare id (reviews, favorites, routes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderType {
    Veterinary,
    Chaperone,
}

impl ProviderType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderType::Veterinary => "veterinary",
            ProviderType::Chaperone => "chaperone",
        }
    }
}

impl fmt::Display for ProviderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Chaperone pricing tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PriceRange {
    #[serde(rename = "$")]
    Budget,
    #[serde(rename = "$$")]
    Moderate,
    #[serde(rename = "$$$")]
    Premium,
}

/// Opening hours, one free-text entry per weekday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyHours {
    pub monday: String,
    pub tuesday: String,
    pub wednesday: String,
    pub thursday: String,
    pub friday: String,
    pub saturday: String,
    pub sunday: String,
}

/// Veterinary clinic listing. `rating` and `review_count` are display
/// aggregates carried by the catalog seed; live aggregates are derived from
/// the review store on read.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VeterinaryClinic {
    pub id: String,
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub phone: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    pub rating: f64,
    pub review_count: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    pub image: String,
    pub services: Vec<String>,
    pub hours: WeeklyHours,
    #[serde(rename = "emergency24_7")]
    pub emergency_24_7: bool,
    pub accepts_walk_ins: bool,
    pub description: String,
}

/// Pet transport chaperone listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PetChaperone {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_name: Option<String>,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub phone: String,
    pub email: String,
    pub rating: f64,
    pub review_count: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    pub image: String,
    pub services: Vec<String>,
    pub vehicle_types: Vec<String>,
    pub pet_types: Vec<String>,
    pub price_range: PriceRange,
    pub availability: String,
    pub years_experience: u32,
    pub licensed: bool,
    pub insured: bool,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_type_serialization() {
        assert_eq!(
            serde_json::to_string(&ProviderType::Veterinary).unwrap(),
            "\"veterinary\""
        );
        assert_eq!(
            serde_json::to_string(&ProviderType::Chaperone).unwrap(),
            "\"chaperone\""
        );
    }

    #[test]
    fn test_price_range_serialization() {
        assert_eq!(serde_json::to_string(&PriceRange::Budget).unwrap(), "\"$\"");
        assert_eq!(
            serde_json::from_str::<PriceRange>("\"$$$\"").unwrap(),
            PriceRange::Premium
        );
    }
}
