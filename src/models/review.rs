// Review records - append-only, keyed by (provider id, provider type)

use serde::{Deserialize, Serialize};

use super::ProviderType;

/// A user review of a provider. Immutable once created; `helpful` is a
/// stored counter that the seed data carries but no operation increments.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub provider_id: String,
    pub provider_type: ProviderType,
    pub user_id: String,
    pub user_name: String,
    /// Integer stars, 1 through 5.
    pub rating: u8,
    pub title: String,
    pub comment: String,
    /// Submission date, YYYY-MM-DD.
    pub date: String,
    pub helpful: u32,
}
