//! Favorites for the logged-in user.

use std::sync::{Arc, Mutex, PoisonError};

use stayhub_core::favorites::{FavoriteChange, Favorites};
use stayhub_core::types::PropertyId;

use crate::api::FavoritesApi;
use crate::notify::{Notifier, Toast};
use crate::session::SessionStore;

pub struct FavoritesStore {
    api: Arc<dyn FavoritesApi>,
    notifier: Arc<dyn Notifier>,
    favorites: Mutex<Favorites>,
}

impl FavoritesStore {
    pub fn new(api: Arc<dyn FavoritesApi>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            api,
            notifier,
            favorites: Mutex::new(Favorites::new()),
        }
    }

    pub fn contains(&self, id: PropertyId) -> bool {
        self.lock().contains(id)
    }

    pub fn ids(&self) -> Vec<PropertyId> {
        self.lock().ids().collect()
    }

    /// Reload the set from the server, or clear it when logged out.
    ///
    /// A failed fetch is logged and leaves the current set untouched.
    pub async fn refresh(&self, session: &SessionStore) -> bool {
        if !session.is_authenticated() {
            self.lock().clear();
            return true;
        }

        match self.api.favorites().await {
            Ok(response) => {
                let count = response.favorites.len();
                self.lock()
                    .replace(response.favorites.into_iter().map(|f| f.id));
                tracing::debug!(count, "Favorites refreshed");
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to fetch favorites");
                false
            }
        }
    }

    /// Add or remove `id` depending on its current state.
    ///
    /// The local set changes only after the server confirms. Returns the
    /// change made, or `None` when nothing changed.
    pub async fn toggle(&self, session: &SessionStore, id: PropertyId) -> Option<FavoriteChange> {
        if !session.is_authenticated() {
            self.notifier.notify(Toast::error(
                "Authentication required",
                "Please log in to save favorites",
            ));
            return None;
        }

        let change = self.lock().pending_change(id);
        let result = match change {
            FavoriteChange::Added => self.api.add_favorite(id).await,
            FavoriteChange::Removed => self.api.remove_favorite(id).await,
        };

        match result {
            Ok(_) => {
                self.lock().apply(id, change);
                tracing::info!(property_id = id, ?change, "Favorite toggled");
                self.notifier.notify(match change {
                    FavoriteChange::Added => Toast::info(
                        "Added to favorites",
                        "Property has been added to your favorites",
                    ),
                    FavoriteChange::Removed => Toast::info(
                        "Removed from favorites",
                        "Property has been removed from your favorites",
                    ),
                });
                Some(change)
            }
            Err(e) => {
                tracing::warn!(error = %e, property_id = id, "Failed to update favorites");
                self.notifier.notify(Toast::error(
                    "Error",
                    "An error occurred while updating favorites",
                ));
                None
            }
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Favorites> {
        self.favorites.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
