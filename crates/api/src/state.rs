use std::sync::Arc;

use stayhub_core::catalog::Catalog;

use crate::config::ServerConfig;
use crate::fixtures::Fixtures;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (everything is behind `Arc`) and read-only after
/// startup.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration, including the demo credentials.
    pub config: Arc<ServerConfig>,
    /// Listing catalog served by `/properties`.
    pub catalog: Arc<Catalog>,
    /// Canned profile, bookings and favorites.
    pub fixtures: Arc<Fixtures>,
}

impl AppState {
    /// Build state around the standard catalog.
    pub fn new(config: ServerConfig) -> Self {
        let catalog = Catalog::standard();
        let fixtures = Fixtures::new(&config.demo, &catalog);
        Self {
            config: Arc::new(config),
            catalog: Arc::new(catalog),
            fixtures: Arc::new(fixtures),
        }
    }
}
