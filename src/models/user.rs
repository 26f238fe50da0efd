// User and pet entities - the single canonical identity model
//
// The persisted session blob is exactly a serialized `User`. Collections
// default to empty so blobs written before a field existed still load.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserType {
    #[serde(rename = "pet-owner")]
    PetOwner,
    #[serde(rename = "admin")]
    Admin,
}

/// A pet owned by exactly one user, embedded in the owning `User` record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pet {
    pub id: String,
    pub name: String,
    pub breed: String,
    pub age: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allergies: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conditions: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medications: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vaccinations: Option<String>,
}

/// The current identity plus its owned sub-entities. Favorite lists hold
/// provider ids validated against the catalog at toggle time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub user_type: UserType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip_code: Option<String>,
    #[serde(default)]
    pub pets: Vec<Pet>,
    #[serde(default)]
    pub favorite_vets: Vec<String>,
    #[serde(default)]
    pub favorite_chaperones: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_blob_roundtrip() {
        let user = User {
            id: "1".into(),
            name: "alice".into(),
            email: "alice@example.com".into(),
            user_type: UserType::PetOwner,
            phone: None,
            address: None,
            city: None,
            state: None,
            zip_code: None,
            pets: vec![],
            favorite_vets: vec!["2".into()],
            favorite_chaperones: vec![],
        };
        let blob = serde_json::to_string(&user).unwrap();
        let back: User = serde_json::from_str(&blob).unwrap();
        assert_eq!(back.favorite_vets, vec!["2".to_string()]);
        assert_eq!(back.user_type, UserType::PetOwner);
    }

    #[test]
    fn test_user_blob_missing_collections_default_empty() {
        // An admin blob written without pets/favorites still loads.
        let blob = r#"{"id":"admin","name":"Admin","email":"admin@petcare.com","userType":"admin"}"#;
        let user: User = serde_json::from_str(blob).unwrap();
        assert_eq!(user.user_type, UserType::Admin);
        assert!(user.pets.is_empty());
        assert!(user.favorite_vets.is_empty());
    }
}
