//! Handlers for the `/user` resource (profile, bookings, favorites).
//!
//! None of these identify the caller: every request sees the demo user's
//! fixtures, and writes are echoed back without being stored.

use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use stayhub_core::types::PropertyId;
use stayhub_core::user::ProfileUpdate;
use stayhub_core::wire::{
    BookingsResponse, FavoriteRequest, FavoritesResponse, MessageResponse, ProfileResponse,
};

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppQuery};
use crate::state::AppState;

/// Query parameters for `DELETE /user/favorites`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveFavoriteParams {
    pub property_id: Option<String>,
}

/// GET /api/user/profile
pub async fn get_profile(State(state): State<AppState>) -> Json<ProfileResponse> {
    Json(ProfileResponse {
        success: true,
        user: state.fixtures.profile().clone(),
        message: None,
    })
}

/// PUT /api/user/profile
///
/// Returns the demo profile with the provided fields applied.
pub async fn update_profile(
    State(state): State<AppState>,
    AppJson(update): AppJson<ProfileUpdate>,
) -> AppResult<Json<ProfileResponse>> {
    let user = state.fixtures.profile().with_update(&update);
    tracing::info!(user_id = %user.id, "Profile updated");

    Ok(Json(ProfileResponse {
        success: true,
        user,
        message: Some("Profile updated successfully".into()),
    }))
}

/// GET /api/user/bookings
pub async fn list_bookings(State(state): State<AppState>) -> Json<BookingsResponse> {
    Json(BookingsResponse {
        success: true,
        bookings: state.fixtures.bookings().to_vec(),
    })
}

/// GET /api/user/favorites
pub async fn list_favorites(State(state): State<AppState>) -> Json<FavoritesResponse> {
    Json(FavoritesResponse {
        success: true,
        favorites: state.fixtures.favorites().to_vec(),
    })
}

/// POST /api/user/favorites
pub async fn add_favorite(
    AppJson(input): AppJson<FavoriteRequest>,
) -> AppResult<Json<MessageResponse>> {
    tracing::info!(property_id = ?input.property_id, "Favorite added");
    Ok(Json(MessageResponse::new("Property added to favorites")))
}

/// DELETE /api/user/favorites?propertyId=
pub async fn remove_favorite(
    AppQuery(params): AppQuery<RemoveFavoriteParams>,
) -> AppResult<Json<MessageResponse>> {
    let raw = params
        .property_id
        .filter(|id| !id.is_empty())
        .ok_or_else(|| AppError::BadRequest("Property ID is required".into()))?;

    let property_id: PropertyId = raw
        .parse()
        .map_err(|_| AppError::BadRequest(format!("Invalid property ID '{raw}'")))?;

    tracing::info!(property_id, "Favorite removed");
    Ok(Json(MessageResponse::new("Property removed from favorites")))
}
