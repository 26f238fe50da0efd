// HTTP API - the navigation surface of the directory
//
// Route parameters carry the free-text search/location strings; structured
// filter sets travel in POST bodies. Login, register, and review submission
// apply the configured simulated latency before responding.

use std::time::Duration;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::{get, patch, post},
    Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;

use crate::{
    app_state::AppState,
    error::{AppError, AppResult},
    models::ProviderType,
    reviews::NewReview,
    search::{self, ChaperoneFilters, ClinicFilters, SearchQuery},
    session::{NewPet, PetUpdate, ProfileUpdate, RegisterData},
};

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub location: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClinicSearchRequest {
    #[serde(default)]
    pub search_term: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub filters: ClinicFilters,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChaperoneSearchRequest {
    #[serde(default)]
    pub search_term: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub filters: ChaperoneFilters,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

fn parse_provider_type(type_str: &str) -> AppResult<ProviderType> {
    match type_str.to_lowercase().as_str() {
        "veterinary" => Ok(ProviderType::Veterinary),
        "chaperone" => Ok(ProviderType::Chaperone),
        _ => Err(AppError::Validation(format!(
            "Unknown provider type: {}",
            type_str
        ))),
    }
}

async fn simulate_latency(state: &AppState) {
    let ms = state.config.session.simulated_latency_ms;
    if ms > 0 {
        tokio::time::sleep(Duration::from_millis(ms)).await;
    }
}

// Provider handlers

async fn list_clinics(
    State(state): State<AppState>,
    Query(params): Query<ListQuery>,
) -> Json<Value> {
    let query = SearchQuery {
        search_term: params.search,
        location: params.location,
    };
    let results = search::filter_clinics(state.catalog.clinics(), &query, &ClinicFilters::default());
    Json(json!({ "count": results.len(), "clinics": results }))
}

async fn search_clinics(
    State(state): State<AppState>,
    Json(req): Json<ClinicSearchRequest>,
) -> Json<Value> {
    let query = SearchQuery {
        search_term: req.search_term,
        location: req.location,
    };
    let results = search::filter_clinics(state.catalog.clinics(), &query, &req.filters);
    Json(json!({ "count": results.len(), "clinics": results }))
}

async fn get_clinic(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Value>> {
    let clinic = state
        .catalog
        .clinic_by_id(&id)
        .ok_or_else(|| AppError::NotFound(format!("Clinic {} not found", id)))?;
    let aggregate = state
        .reviews
        .aggregate_for_provider(&id, ProviderType::Veterinary)
        .await;
    Ok(Json(json!({ "provider": clinic, "aggregate": aggregate })))
}

async fn list_chaperones(
    State(state): State<AppState>,
    Query(params): Query<ListQuery>,
) -> Json<Value> {
    let query = SearchQuery {
        search_term: params.search,
        location: params.location,
    };
    let results = search::filter_chaperones(
        state.catalog.chaperones(),
        &query,
        &ChaperoneFilters::default(),
    );
    Json(json!({ "count": results.len(), "chaperones": results }))
}

async fn search_chaperones(
    State(state): State<AppState>,
    Json(req): Json<ChaperoneSearchRequest>,
) -> Json<Value> {
    let query = SearchQuery {
        search_term: req.search_term,
        location: req.location,
    };
    let results = search::filter_chaperones(state.catalog.chaperones(), &query, &req.filters);
    Json(json!({ "count": results.len(), "chaperones": results }))
}

async fn get_chaperone(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Value>> {
    let chaperone = state
        .catalog
        .chaperone_by_id(&id)
        .ok_or_else(|| AppError::NotFound(format!("Chaperone {} not found", id)))?;
    let aggregate = state
        .reviews
        .aggregate_for_provider(&id, ProviderType::Chaperone)
        .await;
    Ok(Json(json!({ "provider": chaperone, "aggregate": aggregate })))
}

// Review handlers

async fn get_provider_reviews(
    State(state): State<AppState>,
    Path((type_str, id)): Path<(String, String)>,
) -> AppResult<Json<Value>> {
    let provider_type = parse_provider_type(&type_str)?;
    if !state.catalog.contains(provider_type, &id) {
        return Err(AppError::NotFound(format!(
            "{} provider {} not found",
            provider_type, id
        )));
    }
    let reviews = state.reviews.reviews_for_provider(&id, provider_type).await;
    Ok(Json(json!({ "reviews": reviews })))
}

async fn get_user_reviews(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Json<Value> {
    let reviews = state.reviews.reviews_by_user(&user_id).await;
    Json(json!({ "reviews": reviews }))
}

async fn add_review(
    State(state): State<AppState>,
    Json(input): Json<NewReview>,
) -> AppResult<(StatusCode, Json<Value>)> {
    simulate_latency(&state).await;
    let review = state.reviews.add_review(input).await?;
    Ok((StatusCode::CREATED, Json(json!({ "review": review }))))
}

// Session handlers

async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> AppResult<Json<Value>> {
    info!("Login attempt for {}", req.email);
    simulate_latency(&state).await;
    let user = state.sessions.login(&req.email, &req.password).await?;
    Ok(Json(json!({ "user": user })))
}

async fn register(
    State(state): State<AppState>,
    Json(data): Json<RegisterData>,
) -> AppResult<(StatusCode, Json<Value>)> {
    info!("Registering {}", data.email);
    simulate_latency(&state).await;
    let user = state.sessions.register(data).await?;
    Ok((StatusCode::CREATED, Json(json!({ "user": user }))))
}

async fn logout(State(state): State<AppState>) -> AppResult<Json<Value>> {
    state.sessions.logout().await?;
    Ok(Json(json!({ "loggedOut": true })))
}

async fn get_session(State(state): State<AppState>) -> Json<Value> {
    Json(json!({ "user": state.sessions.current_user().await }))
}

async fn update_profile(
    State(state): State<AppState>,
    Json(update): Json<ProfileUpdate>,
) -> AppResult<Json<Value>> {
    let user = state.sessions.update_profile(update).await?;
    Ok(Json(json!({ "user": user })))
}

// Pet handlers

async fn add_pet(
    State(state): State<AppState>,
    Json(pet): Json<NewPet>,
) -> AppResult<(StatusCode, Json<Value>)> {
    let pet = state.sessions.add_pet(pet).await?;
    Ok((StatusCode::CREATED, Json(json!({ "pet": pet }))))
}

async fn update_pet(
    State(state): State<AppState>,
    Path(pet_id): Path<String>,
    Json(update): Json<PetUpdate>,
) -> AppResult<Json<Value>> {
    let pet = state.sessions.update_pet(&pet_id, update).await?;
    Ok(Json(json!({ "pet": pet })))
}

async fn delete_pet(
    State(state): State<AppState>,
    Path(pet_id): Path<String>,
) -> AppResult<Json<Value>> {
    state.sessions.delete_pet(&pet_id).await?;
    Ok(Json(json!({ "deleted": true })))
}

// Favorite handlers

async fn toggle_favorite_vet(
    State(state): State<AppState>,
    Path(vet_id): Path<String>,
) -> AppResult<Json<Value>> {
    let favorites = state.sessions.toggle_favorite_vet(&vet_id).await?;
    Ok(Json(json!({ "favoriteVets": favorites })))
}

async fn toggle_favorite_chaperone(
    State(state): State<AppState>,
    Path(chaperone_id): Path<String>,
) -> AppResult<Json<Value>> {
    let favorites = state
        .sessions
        .toggle_favorite_chaperone(&chaperone_id)
        .await?;
    Ok(Json(json!({ "favoriteChaperones": favorites })))
}

async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": "PetCare Directory"
    }))
}

/// Assemble the API router over the shared application state.
pub fn create_api_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        // Provider listings
        .route("/vets", get(list_clinics))
        .route("/vets/search", post(search_clinics))
        .route("/vets/{id}", get(get_clinic))
        .route("/chaperones", get(list_chaperones))
        .route("/chaperones/search", post(search_chaperones))
        .route("/chaperones/{id}", get(get_chaperone))
        // Reviews
        .route("/providers/{type}/{id}/reviews", get(get_provider_reviews))
        .route("/users/{id}/reviews", get(get_user_reviews))
        .route("/reviews", post(add_review))
        // Session lifecycle
        .route("/auth/login", post(login))
        .route("/auth/register", post(register))
        .route("/auth/logout", post(logout))
        .route("/session", get(get_session))
        .route("/profile", patch(update_profile))
        // Pets
        .route("/pets", post(add_pet))
        .route("/pets/{id}", patch(update_pet).delete(delete_pet))
        // Favorites
        .route("/favorites/vets/{id}", post(toggle_favorite_vet))
        .route("/favorites/chaperones/{id}", post(toggle_favorite_chaperone))
        .with_state(state)
}
