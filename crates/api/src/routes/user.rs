//! Route definitions for the `/user` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::user;
use crate::state::AppState;

/// Routes mounted at `/user`.
///
/// ```text
/// GET    /profile    -> get_profile
/// PUT    /profile    -> update_profile
/// GET    /bookings   -> list_bookings
/// GET    /favorites  -> list_favorites
/// POST   /favorites  -> add_favorite
/// DELETE /favorites  -> remove_favorite (?propertyId=)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/profile",
            get(user::get_profile).put(user::update_profile),
        )
        .route("/bookings", get(user::list_bookings))
        .route(
            "/favorites",
            get(user::list_favorites)
                .post(user::add_favorite)
                .delete(user::remove_favorite),
        )
}
