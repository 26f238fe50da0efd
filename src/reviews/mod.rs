// Review Subsystem - append-only review collection with derived aggregates
//
// Reviews reference providers by (id, type). The reference is validated
// against the catalog at append time, so stored reviews never dangle.
// Aggregates are computed on read and never written back to the catalog.

pub mod seed;

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::info;

use crate::catalog::ProviderCatalog;
use crate::error::{AppError, AppResult};
use crate::ids::IdGenerator;
use crate::models::{ProviderType, Review};

/// Fields a caller supplies when submitting a review; id, date, and the
/// helpful counter are assigned by the store.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReview {
    pub provider_id: String,
    pub provider_type: ProviderType,
    pub user_id: String,
    pub user_name: String,
    pub rating: u8,
    pub title: String,
    pub comment: String,
}

/// Rating aggregate derived from the stored reviews of one provider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingAggregate {
    pub average_rating: f64,
    pub review_count: u32,
}

pub struct ReviewStore {
    reviews: RwLock<Vec<Review>>,
    catalog: Arc<ProviderCatalog>,
    ids: IdGenerator,
}

impl ReviewStore {
    /// Store seeded with the sample reviews.
    pub fn seeded(catalog: Arc<ProviderCatalog>) -> Self {
        Self {
            reviews: RwLock::new(seed::REVIEWS.clone()),
            catalog,
            ids: IdGenerator::new(),
        }
    }

    pub fn empty(catalog: Arc<ProviderCatalog>) -> Self {
        Self {
            reviews: RwLock::new(Vec::new()),
            catalog,
            ids: IdGenerator::new(),
        }
    }

    /// All reviews for one provider, in insertion order.
    pub async fn reviews_for_provider(
        &self,
        provider_id: &str,
        provider_type: ProviderType,
    ) -> Vec<Review> {
        self.reviews
            .read()
            .await
            .iter()
            .filter(|r| r.provider_id == provider_id && r.provider_type == provider_type)
            .cloned()
            .collect()
    }

    /// All reviews authored by one user, in insertion order.
    pub async fn reviews_by_user(&self, user_id: &str) -> Vec<Review> {
        self.reviews
            .read()
            .await
            .iter()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect()
    }

    /// Append a review. Rejects out-of-range ratings, empty required fields,
    /// and references to providers the catalog does not know.
    pub async fn add_review(&self, input: NewReview) -> AppResult<Review> {
        if !(1..=5).contains(&input.rating) {
            return Err(AppError::Validation(format!(
                "Rating must be between 1 and 5, got {}",
                input.rating
            )));
        }
        if input.title.trim().is_empty() || input.comment.trim().is_empty() {
            return Err(AppError::Validation(
                "Review title and comment are required".to_string(),
            ));
        }
        if !self.catalog.contains(input.provider_type, &input.provider_id) {
            return Err(AppError::NotFound(format!(
                "{} provider {} not found",
                input.provider_type, input.provider_id
            )));
        }

        let review = Review {
            id: self.ids.next_id(),
            provider_id: input.provider_id,
            provider_type: input.provider_type,
            user_id: input.user_id,
            user_name: input.user_name,
            rating: input.rating,
            title: input.title,
            comment: input.comment,
            date: chrono::Utc::now().format("%Y-%m-%d").to_string(),
            helpful: 0,
        };

        let mut reviews = self.reviews.write().await;
        reviews.push(review.clone());
        info!(
            "Added review {} for {} provider {}",
            review.id, review.provider_type, review.provider_id
        );
        Ok(review)
    }

    /// Average rating and count over the stored reviews of one provider,
    /// computed on read. `None` when the provider has no reviews yet.
    pub async fn aggregate_for_provider(
        &self,
        provider_id: &str,
        provider_type: ProviderType,
    ) -> Option<RatingAggregate> {
        let reviews = self.reviews.read().await;
        let ratings: Vec<u8> = reviews
            .iter()
            .filter(|r| r.provider_id == provider_id && r.provider_type == provider_type)
            .map(|r| r.rating)
            .collect();
        if ratings.is_empty() {
            return None;
        }
        let sum: u32 = ratings.iter().map(|&r| r as u32).sum();
        Some(RatingAggregate {
            average_rating: sum as f64 / ratings.len() as f64,
            review_count: ratings.len() as u32,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_review(provider_id: &str, provider_type: ProviderType, rating: u8) -> NewReview {
        NewReview {
            provider_id: provider_id.to_string(),
            provider_type,
            user_id: "u1".to_string(),
            user_name: "Test User".to_string(),
            rating,
            title: "Title".to_string(),
            comment: "Comment".to_string(),
        }
    }

    #[tokio::test]
    async fn test_add_then_get_includes_review_exactly_once() {
        let catalog = Arc::new(ProviderCatalog::seeded());
        let store = ReviewStore::seeded(catalog);

        let before = store
            .reviews_for_provider("3", ProviderType::Veterinary)
            .await;
        assert!(before.is_empty());

        let added = store
            .add_review(new_review("3", ProviderType::Veterinary, 4))
            .await
            .unwrap();
        let after = store
            .reviews_for_provider("3", ProviderType::Veterinary)
            .await;
        assert_eq!(after.len(), 1);
        assert_eq!(after[0].id, added.id);
        assert_eq!(after[0].helpful, 0);
    }

    #[tokio::test]
    async fn test_provider_type_disambiguates_shared_ids() {
        // Clinic "1" and chaperone "1" are distinct providers.
        let catalog = Arc::new(ProviderCatalog::seeded());
        let store = ReviewStore::seeded(catalog);

        let vet = store
            .reviews_for_provider("1", ProviderType::Veterinary)
            .await;
        let chap = store
            .reviews_for_provider("1", ProviderType::Chaperone)
            .await;
        assert_eq!(vet.len(), 3);
        assert_eq!(chap.len(), 2);
    }

    #[tokio::test]
    async fn test_reviews_by_user() {
        let catalog = Arc::new(ProviderCatalog::seeded());
        let store = ReviewStore::seeded(catalog);
        let reviews = store.reviews_by_user("4").await;
        assert_eq!(reviews.len(), 1);
        assert_eq!(reviews[0].title, "Saved my dog's life");
    }

    #[tokio::test]
    async fn test_dangling_provider_reference_rejected() {
        let catalog = Arc::new(ProviderCatalog::seeded());
        let store = ReviewStore::seeded(catalog);
        let err = store
            .add_review(new_review("99", ProviderType::Veterinary, 5))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_out_of_range_rating_rejected() {
        let catalog = Arc::new(ProviderCatalog::seeded());
        let store = ReviewStore::seeded(catalog);
        for rating in [0u8, 6] {
            let err = store
                .add_review(new_review("1", ProviderType::Veterinary, rating))
                .await
                .unwrap_err();
            assert!(matches!(err, AppError::Validation(_)));
        }
    }

    #[tokio::test]
    async fn test_aggregate_computed_on_read() {
        let catalog = Arc::new(ProviderCatalog::seeded());
        let store = ReviewStore::empty(catalog);

        assert!(store
            .aggregate_for_provider("1", ProviderType::Veterinary)
            .await
            .is_none());

        store
            .add_review(new_review("1", ProviderType::Veterinary, 5))
            .await
            .unwrap();
        store
            .add_review(new_review("1", ProviderType::Veterinary, 4))
            .await
            .unwrap();

        let agg = store
            .aggregate_for_provider("1", ProviderType::Veterinary)
            .await
            .unwrap();
        assert_eq!(agg.review_count, 2);
        assert!((agg.average_rating - 4.5).abs() < f64::EPSILON);
    }
}
