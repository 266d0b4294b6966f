pub mod auth;
pub mod health;
pub mod properties;
pub mod user;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                    login
/// /auth/register                 register
/// /auth/forgot-password          request reset link
/// /auth/reset-password           reset password
///
/// /user/profile                  get, update
/// /user/bookings                 booking history
/// /user/favorites                list, add, remove (?propertyId=)
///
/// /properties                    filtered catalog
/// /properties/{id}               single listing
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/user", user::router())
        .nest("/properties", properties::router())
}
