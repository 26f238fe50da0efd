// Session/Identity Store - single current identity persisted as one JSON blob
//
// The blob file is the local-storage analog: read once at open, overwritten
// wholesale on every mutation, last writer wins. Absent or malformed content
// means "no session". Credentials are never validated beyond the one
// hardcoded admin pair; login and register always succeed.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Deserialize;
use tokio::sync::Mutex;
use tracing::{info, warn};
use uuid::Uuid;

use crate::catalog::ProviderCatalog;
use crate::error::{AppError, AppResult};
use crate::ids::IdGenerator;
use crate::models::{Pet, ProviderType, User, UserType};

pub const ADMIN_EMAIL: &str = "admin@petcare.com";
pub const ADMIN_PASSWORD: &str = "admin123";

#[derive(Debug, Clone, Deserialize)]
pub struct RegisterData {
    pub name: String,
    pub email: String,
    #[allow(dead_code)]
    pub password: String,
}

/// Partial profile update; absent fields keep their current value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
}

/// Pet fields supplied at creation; the id is assigned by the store.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPet {
    pub name: String,
    pub breed: String,
    pub age: u32,
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(default)]
    pub allergies: Option<String>,
    #[serde(default)]
    pub conditions: Option<String>,
    #[serde(default)]
    pub medications: Option<String>,
    #[serde(default)]
    pub vaccinations: Option<String>,
}

/// Partial pet update; absent fields keep their current value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PetUpdate {
    pub name: Option<String>,
    pub breed: Option<String>,
    pub age: Option<u32>,
    pub photo: Option<String>,
    pub allergies: Option<String>,
    pub conditions: Option<String>,
    pub medications: Option<String>,
    pub vaccinations: Option<String>,
}

pub struct SessionStore {
    current: Mutex<Option<User>>,
    store_path: PathBuf,
    catalog: Arc<ProviderCatalog>,
    ids: IdGenerator,
}

impl SessionStore {
    /// Open the store, loading any previously persisted session.
    pub fn open(store_path: impl Into<PathBuf>, catalog: Arc<ProviderCatalog>) -> Self {
        let store_path = store_path.into();
        let current = load_session(&store_path);
        if current.is_some() {
            info!("Restored session from {}", store_path.display());
        }
        Self {
            current: Mutex::new(current),
            store_path,
            catalog,
            ids: IdGenerator::new(),
        }
    }

    pub async fn current_user(&self) -> Option<User> {
        self.current.lock().await.clone()
    }

    /// Mock login: the hardcoded admin pair yields the admin identity, any
    /// other credentials yield a pet-owner named after the email local part.
    pub async fn login(&self, email: &str, password: &str) -> AppResult<User> {
        let user = if email == ADMIN_EMAIL && password == ADMIN_PASSWORD {
            User {
                id: "admin".to_string(),
                name: "Admin".to_string(),
                email: email.to_string(),
                user_type: UserType::Admin,
                phone: None,
                address: None,
                city: None,
                state: None,
                zip_code: None,
                pets: Vec::new(),
                favorite_vets: Vec::new(),
                favorite_chaperones: Vec::new(),
            }
        } else {
            User {
                id: "1".to_string(),
                name: email.split('@').next().unwrap_or(email).to_string(),
                email: email.to_string(),
                user_type: UserType::PetOwner,
                phone: None,
                address: None,
                city: None,
                state: None,
                zip_code: None,
                pets: Vec::new(),
                favorite_vets: Vec::new(),
                favorite_chaperones: Vec::new(),
            }
        };

        let mut current = self.current.lock().await;
        *current = Some(user.clone());
        self.persist(&current)?;
        info!("Logged in {} ({})", user.email, user.id);
        Ok(user)
    }

    /// Mock register: always succeeds and assigns a fresh identity.
    pub async fn register(&self, data: RegisterData) -> AppResult<User> {
        let user = User {
            id: Uuid::new_v4().to_string(),
            name: data.name,
            email: data.email,
            user_type: UserType::PetOwner,
            phone: None,
            address: None,
            city: None,
            state: None,
            zip_code: None,
            pets: Vec::new(),
            favorite_vets: Vec::new(),
            favorite_chaperones: Vec::new(),
        };

        let mut current = self.current.lock().await;
        *current = Some(user.clone());
        self.persist(&current)?;
        info!("Registered {} ({})", user.email, user.id);
        Ok(user)
    }

    pub async fn logout(&self) -> AppResult<()> {
        let mut current = self.current.lock().await;
        *current = None;
        if self.store_path.exists() {
            fs::remove_file(&self.store_path)
                .map_err(|e| AppError::Internal(format!("Failed to clear session blob: {}", e)))?;
        }
        Ok(())
    }

    pub async fn update_profile(&self, update: ProfileUpdate) -> AppResult<User> {
        self.mutate(|user| {
            if let Some(name) = update.name {
                user.name = name;
            }
            if let Some(email) = update.email {
                user.email = email;
            }
            if update.phone.is_some() {
                user.phone = update.phone;
            }
            if update.address.is_some() {
                user.address = update.address;
            }
            if update.city.is_some() {
                user.city = update.city;
            }
            if update.state.is_some() {
                user.state = update.state;
            }
            if update.zip_code.is_some() {
                user.zip_code = update.zip_code;
            }
            Ok(user.clone())
        })
        .await
    }

    pub async fn add_pet(&self, pet: NewPet) -> AppResult<Pet> {
        let id = self.ids.next_id();
        self.mutate(move |user| {
            let pet = Pet {
                id,
                name: pet.name,
                breed: pet.breed,
                age: pet.age,
                photo: pet.photo,
                allergies: pet.allergies,
                conditions: pet.conditions,
                medications: pet.medications,
                vaccinations: pet.vaccinations,
            };
            user.pets.push(pet.clone());
            Ok(pet)
        })
        .await
    }

    pub async fn update_pet(&self, pet_id: &str, update: PetUpdate) -> AppResult<Pet> {
        self.mutate(|user| {
            let pet = user
                .pets
                .iter_mut()
                .find(|p| p.id == pet_id)
                .ok_or_else(|| AppError::NotFound(format!("Pet {} not found", pet_id)))?;
            if let Some(name) = update.name {
                pet.name = name;
            }
            if let Some(breed) = update.breed {
                pet.breed = breed;
            }
            if let Some(age) = update.age {
                pet.age = age;
            }
            if update.photo.is_some() {
                pet.photo = update.photo;
            }
            if update.allergies.is_some() {
                pet.allergies = update.allergies;
            }
            if update.conditions.is_some() {
                pet.conditions = update.conditions;
            }
            if update.medications.is_some() {
                pet.medications = update.medications;
            }
            if update.vaccinations.is_some() {
                pet.vaccinations = update.vaccinations;
            }
            Ok(pet.clone())
        })
        .await
    }

    pub async fn delete_pet(&self, pet_id: &str) -> AppResult<()> {
        self.mutate(|user| {
            let before = user.pets.len();
            user.pets.retain(|p| p.id != pet_id);
            if user.pets.len() == before {
                return Err(AppError::NotFound(format!("Pet {} not found", pet_id)));
            }
            Ok(())
        })
        .await
    }

    /// Toggle a clinic in the favorites set. Returns the updated set.
    pub async fn toggle_favorite_vet(&self, vet_id: &str) -> AppResult<Vec<String>> {
        if !self.catalog.contains(ProviderType::Veterinary, vet_id) {
            return Err(AppError::NotFound(format!("veterinary provider {} not found", vet_id)));
        }
        let vet_id = vet_id.to_string();
        self.mutate(move |user| {
            toggle(&mut user.favorite_vets, vet_id);
            Ok(user.favorite_vets.clone())
        })
        .await
    }

    /// Toggle a chaperone in the favorites set. Returns the updated set.
    pub async fn toggle_favorite_chaperone(&self, chaperone_id: &str) -> AppResult<Vec<String>> {
        if !self.catalog.contains(ProviderType::Chaperone, chaperone_id) {
            return Err(AppError::NotFound(format!(
                "chaperone provider {} not found",
                chaperone_id
            )));
        }
        let chaperone_id = chaperone_id.to_string();
        self.mutate(move |user| {
            toggle(&mut user.favorite_chaperones, chaperone_id);
            Ok(user.favorite_chaperones.clone())
        })
        .await
    }

    /// Apply a transformation to the current user and persist the whole blob.
    async fn mutate<T>(&self, f: impl FnOnce(&mut User) -> AppResult<T>) -> AppResult<T> {
        let mut current = self.current.lock().await;
        let user = current
            .as_mut()
            .ok_or_else(|| AppError::Unauthorized("No active session".to_string()))?;
        let result = f(user)?;
        self.persist(&current)?;
        Ok(result)
    }

    fn persist(&self, current: &Option<User>) -> AppResult<()> {
        let user = match current {
            Some(user) => user,
            None => return Ok(()),
        };
        if let Some(parent) = self.store_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    AppError::Internal(format!("Failed to create session dir: {}", e))
                })?;
            }
        }
        let blob = serde_json::to_string(user)?;
        fs::write(&self.store_path, blob)
            .map_err(|e| AppError::Internal(format!("Failed to write session blob: {}", e)))
    }
}

fn toggle(favorites: &mut Vec<String>, id: String) {
    if let Some(pos) = favorites.iter().position(|f| *f == id) {
        favorites.remove(pos);
    } else {
        favorites.push(id);
    }
}

fn load_session(path: &Path) -> Option<User> {
    let blob = match fs::read_to_string(path) {
        Ok(blob) => blob,
        Err(_) => return None,
    };
    match serde_json::from_str(&blob) {
        Ok(user) => Some(user),
        Err(e) => {
            // Malformed blob is treated as no session.
            warn!("Ignoring malformed session blob at {}: {}", path.display(), e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store(dir: &TempDir) -> SessionStore {
        SessionStore::open(
            dir.path().join("petcare_user.json"),
            Arc::new(ProviderCatalog::seeded()),
        )
    }

    #[tokio::test]
    async fn test_admin_login() {
        let dir = TempDir::new().unwrap();
        let sessions = store(&dir);
        let user = sessions.login(ADMIN_EMAIL, ADMIN_PASSWORD).await.unwrap();
        assert_eq!(user.user_type, UserType::Admin);
        assert_eq!(user.id, "admin");
        assert_eq!(user.name, "Admin");
    }

    #[tokio::test]
    async fn test_any_other_credentials_yield_pet_owner() {
        let dir = TempDir::new().unwrap();
        let sessions = store(&dir);
        let user = sessions.login("jane.doe@example.com", "whatever").await.unwrap();
        assert_eq!(user.user_type, UserType::PetOwner);
        assert_eq!(user.name, "jane.doe");
        assert!(user.pets.is_empty());
    }

    #[tokio::test]
    async fn test_wrong_admin_password_is_pet_owner() {
        let dir = TempDir::new().unwrap();
        let sessions = store(&dir);
        let user = sessions.login(ADMIN_EMAIL, "nope").await.unwrap();
        assert_eq!(user.user_type, UserType::PetOwner);
    }

    #[tokio::test]
    async fn test_session_survives_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("petcare_user.json");
        let catalog = Arc::new(ProviderCatalog::seeded());

        let sessions = SessionStore::open(&path, catalog.clone());
        sessions.login("bob@example.com", "pw").await.unwrap();
        drop(sessions);

        let reopened = SessionStore::open(&path, catalog);
        let user = reopened.current_user().await.unwrap();
        assert_eq!(user.name, "bob");
    }

    #[tokio::test]
    async fn test_malformed_blob_means_no_session() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("petcare_user.json");
        fs::write(&path, "{not json").unwrap();
        let sessions = SessionStore::open(&path, Arc::new(ProviderCatalog::seeded()));
        assert!(sessions.current_user().await.is_none());
    }

    #[tokio::test]
    async fn test_logout_clears_session_and_blob() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("petcare_user.json");
        let sessions = SessionStore::open(&path, Arc::new(ProviderCatalog::seeded()));
        sessions.login("bob@example.com", "pw").await.unwrap();
        assert!(path.exists());
        sessions.logout().await.unwrap();
        assert!(sessions.current_user().await.is_none());
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_mutation_without_session_is_unauthorized() {
        let dir = TempDir::new().unwrap();
        let sessions = store(&dir);
        let err = sessions.toggle_favorite_vet("1").await.unwrap_err();
        assert!(matches!(err, AppError::Unauthorized(_)));
    }

    #[tokio::test]
    async fn test_pet_lifecycle() {
        let dir = TempDir::new().unwrap();
        let sessions = store(&dir);
        sessions.login("bob@example.com", "pw").await.unwrap();

        let pet = sessions
            .add_pet(NewPet {
                name: "Rex".into(),
                breed: "Labrador".into(),
                age: 3,
                photo: None,
                allergies: None,
                conditions: None,
                medications: None,
                vaccinations: None,
            })
            .await
            .unwrap();

        let updated = sessions
            .update_pet(
                &pet.id,
                PetUpdate {
                    age: Some(4),
                    allergies: Some("pollen".into()),
                    ..PetUpdate::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.age, 4);
        assert_eq!(updated.name, "Rex");
        assert_eq!(updated.allergies.as_deref(), Some("pollen"));

        sessions.delete_pet(&pet.id).await.unwrap();
        let err = sessions.delete_pet(&pet.id).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_favorite_toggle_is_involution() {
        let dir = TempDir::new().unwrap();
        let sessions = store(&dir);
        sessions.login("bob@example.com", "pw").await.unwrap();

        let original = sessions.current_user().await.unwrap().favorite_vets;
        let added = sessions.toggle_favorite_vet("2").await.unwrap();
        assert!(added.contains(&"2".to_string()));
        let removed = sessions.toggle_favorite_vet("2").await.unwrap();
        assert_eq!(removed, original);
    }

    #[tokio::test]
    async fn test_favorite_requires_known_provider() {
        let dir = TempDir::new().unwrap();
        let sessions = store(&dir);
        sessions.login("bob@example.com", "pw").await.unwrap();
        let err = sessions.toggle_favorite_chaperone("99").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_profile_update_merges_fields() {
        let dir = TempDir::new().unwrap();
        let sessions = store(&dir);
        sessions.login("bob@example.com", "pw").await.unwrap();

        let user = sessions
            .update_profile(ProfileUpdate {
                phone: Some("(415) 555-9999".into()),
                city: Some("San Francisco".into()),
                ..ProfileUpdate::default()
            })
            .await
            .unwrap();
        assert_eq!(user.name, "bob");
        assert_eq!(user.phone.as_deref(), Some("(415) 555-9999"));
        assert_eq!(user.city.as_deref(), Some("San Francisco"));
    }
}
