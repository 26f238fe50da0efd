// Filter/Match Engine - pure predicate filtering over provider slices
//
// Every predicate is independent; a provider survives only if all active
// predicates hold. Input order is preserved and nothing is re-ranked.

use serde::Deserialize;

use crate::models::{PetChaperone, PriceRange, VeterinaryClinic};

/// Free-text portion of a query. Empty strings deactivate the predicate.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
    #[serde(default)]
    pub search_term: String,
    #[serde(default)]
    pub location: String,
}

/// Structured filters for clinic listings.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClinicFilters {
    pub services: Vec<String>,
    #[serde(rename = "emergency24_7")]
    pub emergency_24_7: bool,
    pub accepts_walk_ins: bool,
    pub min_rating: f64,
    pub max_distance: Option<f64>,
}

impl Default for ClinicFilters {
    fn default() -> Self {
        Self {
            services: Vec::new(),
            emergency_24_7: false,
            accepts_walk_ins: false,
            min_rating: 0.0,
            max_distance: None,
        }
    }
}

/// Structured filters for chaperone listings.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChaperoneFilters {
    pub services: Vec<String>,
    pub vehicle_types: Vec<String>,
    pub pet_types: Vec<String>,
    pub price_ranges: Vec<PriceRange>,
    pub licensed: bool,
    pub insured: bool,
    pub min_rating: f64,
    pub max_distance: Option<f64>,
}

impl Default for ChaperoneFilters {
    fn default() -> Self {
        Self {
            services: Vec::new(),
            vehicle_types: Vec::new(),
            pet_types: Vec::new(),
            price_ranges: Vec::new(),
            licensed: false,
            insured: false,
            min_rating: 0.0,
            max_distance: None,
        }
    }
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// OR within a multi-select category: the provider's tag set must intersect
/// the selection. An empty selection deactivates the category.
fn intersects(tags: &[String], selected: &[String]) -> bool {
    selected.is_empty() || selected.iter().any(|s| tags.contains(s))
}

fn within_distance(distance: Option<f64>, max_distance: Option<f64>) -> bool {
    // Providers with no distance value pass unconditionally.
    match (distance, max_distance) {
        (Some(d), Some(max)) => d <= max,
        _ => true,
    }
}

fn clinic_matches(clinic: &VeterinaryClinic, query: &SearchQuery, filters: &ClinicFilters) -> bool {
    if !query.search_term.is_empty() {
        let search = query.search_term.to_lowercase();
        let matches_search = contains_ci(&clinic.name, &search)
            || clinic.services.iter().any(|s| contains_ci(s, &search))
            || contains_ci(&clinic.description, &search);
        if !matches_search {
            return false;
        }
    }

    if !query.location.is_empty() {
        let loc = query.location.to_lowercase();
        let matches_location = contains_ci(&clinic.city, &loc)
            || contains_ci(&clinic.state, &loc)
            || contains_ci(&clinic.zip_code, &loc);
        if !matches_location {
            return false;
        }
    }

    if !intersects(&clinic.services, &filters.services) {
        return false;
    }
    if filters.emergency_24_7 && !clinic.emergency_24_7 {
        return false;
    }
    if filters.accepts_walk_ins && !clinic.accepts_walk_ins {
        return false;
    }
    if clinic.rating < filters.min_rating {
        return false;
    }
    within_distance(clinic.distance, filters.max_distance)
}

fn chaperone_matches(
    chaperone: &PetChaperone,
    query: &SearchQuery,
    filters: &ChaperoneFilters,
) -> bool {
    if !query.search_term.is_empty() {
        let search = query.search_term.to_lowercase();
        let matches_search = contains_ci(&chaperone.name, &search)
            || chaperone
                .business_name
                .as_deref()
                .is_some_and(|b| contains_ci(b, &search))
            || chaperone.services.iter().any(|s| contains_ci(s, &search))
            || contains_ci(&chaperone.description, &search);
        if !matches_search {
            return false;
        }
    }

    if !query.location.is_empty() {
        let loc = query.location.to_lowercase();
        let matches_location = contains_ci(&chaperone.city, &loc)
            || contains_ci(&chaperone.state, &loc)
            || contains_ci(&chaperone.zip_code, &loc);
        if !matches_location {
            return false;
        }
    }

    if !intersects(&chaperone.services, &filters.services) {
        return false;
    }
    if !intersects(&chaperone.vehicle_types, &filters.vehicle_types) {
        return false;
    }
    if !intersects(&chaperone.pet_types, &filters.pet_types) {
        return false;
    }
    if !filters.price_ranges.is_empty() && !filters.price_ranges.contains(&chaperone.price_range) {
        return false;
    }
    if filters.licensed && !chaperone.licensed {
        return false;
    }
    if filters.insured && !chaperone.insured {
        return false;
    }
    if chaperone.rating < filters.min_rating {
        return false;
    }
    within_distance(chaperone.distance, filters.max_distance)
}

/// Subsequence of `clinics` satisfying every active predicate.
pub fn filter_clinics<'a>(
    clinics: &'a [VeterinaryClinic],
    query: &SearchQuery,
    filters: &ClinicFilters,
) -> Vec<&'a VeterinaryClinic> {
    clinics
        .iter()
        .filter(|c| clinic_matches(c, query, filters))
        .collect()
}

/// Subsequence of `chaperones` satisfying every active predicate.
pub fn filter_chaperones<'a>(
    chaperones: &'a [PetChaperone],
    query: &SearchQuery,
    filters: &ChaperoneFilters,
) -> Vec<&'a PetChaperone> {
    chaperones
        .iter()
        .filter(|c| chaperone_matches(c, query, filters))
        .collect()
}
