//! Route definitions for the `/properties` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::properties;
use crate::state::AppState;

/// Routes mounted at `/properties`.
///
/// ```text
/// GET /       -> list_properties (filter via query string)
/// GET /{id}   -> get_property
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(properties::list_properties))
        .route("/{id}", get(properties::get_property))
}
