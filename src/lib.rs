// PetCare Directory - provider catalog, filtering, reviews, and sessions

// Domain models
pub mod models;

// Stores - provider catalog, reviews, and the persisted session
pub mod catalog;
pub mod reviews;
pub mod session;

// Filter/Match Engine
pub mod search;

// HTTP API surface
pub mod api;
pub mod app_state;

// Common utilities
pub mod config;
pub mod error;
pub mod ids;

// Re-exports for convenience
pub use error::{AppError, AppResult};
