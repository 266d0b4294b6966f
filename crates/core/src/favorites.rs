//! Per-user favorite listings.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::property::Property;
use crate::types::PropertyId;

/// Summary of a favorited listing as returned by the favorites endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FavoriteListing {
    pub id: PropertyId,
    pub title: String,
    pub location: String,
    pub price: u32,
    pub rating: f64,
    pub image: String,
}

impl From<&Property> for FavoriteListing {
    fn from(p: &Property) -> Self {
        Self {
            id: p.id,
            title: p.title.clone(),
            location: p.location.clone(),
            price: p.price,
            rating: p.rating,
            image: p.images.first().cloned().unwrap_or_default(),
        }
    }
}

/// Outcome of toggling a favorite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteChange {
    Added,
    Removed,
}

/// Set of favorited listing ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Favorites {
    ids: BTreeSet<PropertyId>,
}

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: PropertyId) -> bool {
        self.ids.contains(&id)
    }

    /// The change that toggling `id` would make.
    pub fn pending_change(&self, id: PropertyId) -> FavoriteChange {
        if self.contains(id) {
            FavoriteChange::Removed
        } else {
            FavoriteChange::Added
        }
    }

    /// Record a change confirmed by the server.
    pub fn apply(&mut self, id: PropertyId, change: FavoriteChange) {
        match change {
            FavoriteChange::Added => {
                self.ids.insert(id);
            }
            FavoriteChange::Removed => {
                self.ids.remove(&id);
            }
        }
    }

    /// Replace the whole set.
    pub fn replace(&mut self, ids: impl IntoIterator<Item = PropertyId>) {
        self.ids = ids.into_iter().collect();
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn ids(&self) -> impl Iterator<Item = PropertyId> + '_ {
        self.ids.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
