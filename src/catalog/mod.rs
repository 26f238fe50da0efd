// Provider Catalog - read-mostly store of clinic and chaperone listings
//
// Immutable after construction; every lookup service (search, reviews,
// favorites) resolves provider references through it.

pub mod seed;

use crate::models::{PetChaperone, ProviderType, VeterinaryClinic};

#[derive(Debug)]
pub struct ProviderCatalog {
    clinics: Vec<VeterinaryClinic>,
    chaperones: Vec<PetChaperone>,
}

impl ProviderCatalog {
    /// Catalog seeded with the sample listings.
    pub fn seeded() -> Self {
        Self {
            clinics: seed::VETERINARY_CLINICS.clone(),
            chaperones: seed::PET_CHAPERONES.clone(),
        }
    }

    pub fn with_records(clinics: Vec<VeterinaryClinic>, chaperones: Vec<PetChaperone>) -> Self {
        Self { clinics, chaperones }
    }

    pub fn clinics(&self) -> &[VeterinaryClinic] {
        &self.clinics
    }

    pub fn chaperones(&self) -> &[PetChaperone] {
        &self.chaperones
    }

    pub fn clinic_by_id(&self, id: &str) -> Option<&VeterinaryClinic> {
        self.clinics.iter().find(|c| c.id == id)
    }

    pub fn chaperone_by_id(&self, id: &str) -> Option<&PetChaperone> {
        self.chaperones.iter().find(|c| c.id == id)
    }

    /// Whether a (type, id) reference resolves to a known provider. Used to
    /// reject dangling review and favorite references at the write boundary.
    pub fn contains(&self, provider_type: ProviderType, id: &str) -> bool {
        match provider_type {
            ProviderType::Veterinary => self.clinic_by_id(id).is_some(),
            ProviderType::Chaperone => self.chaperone_by_id(id).is_some(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_catalog_counts() {
        let catalog = ProviderCatalog::seeded();
        assert_eq!(catalog.clinics().len(), 4);
        assert_eq!(catalog.chaperones().len(), 5);
    }

    #[test]
    fn test_lookup_by_id() {
        let catalog = ProviderCatalog::seeded();
        let clinic = catalog.clinic_by_id("2").unwrap();
        assert_eq!(clinic.name, "Bay Area Emergency Vet");
        assert!(clinic.emergency_24_7);
        assert!(catalog.clinic_by_id("99").is_none());
    }

    #[test]
    fn test_contains_checks_variant() {
        let catalog = ProviderCatalog::seeded();
        assert!(catalog.contains(ProviderType::Chaperone, "5"));
        assert!(!catalog.contains(ProviderType::Veterinary, "5"));
    }
}
