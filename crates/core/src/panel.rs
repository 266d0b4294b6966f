//! Draft/active filter state behind the filter bar and category strip.
//!
//! [`FilterPanel`] keeps two named criteria values. Only `active` is used to
//! compute visible listings; `draft` collects edits made in the picker and is
//! copied over by an explicit commit, either whole or one facet at a time.

use crate::catalog::Catalog;
use crate::category;
use crate::error::CoreError;
use crate::filter::{Facet, FilterCriteria, PriceRange};
use crate::property::{Amenity, Property, PropertyType};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterPanel {
    active: FilterCriteria,
    draft: FilterCriteria,
    selected_category: Option<&'static str>,
}

impl FilterPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Criteria currently applied to the catalog.
    pub fn active(&self) -> &FilterCriteria {
        &self.active
    }

    /// Criteria being edited but not yet applied.
    pub fn draft(&self) -> &FilterCriteria {
        &self.draft
    }

    pub fn selected_category(&self) -> Option<&'static str> {
        self.selected_category
    }

    /// Listings visible under the active criteria.
    pub fn visible<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Property> {
        catalog.filter(&self.active)
    }

    /// Facets of the active criteria that narrow the result.
    pub fn active_facets(&self) -> Vec<Facet> {
        self.active.active_facets()
    }

    // ---- draft editing ----

    pub fn toggle_draft_property_type(&mut self, property_type: PropertyType) {
        toggle(&mut self.draft.property_types, property_type);
    }

    pub fn toggle_draft_amenity(&mut self, amenity: Amenity) {
        toggle(&mut self.draft.amenities, amenity);
    }

    pub fn set_draft_price(&mut self, min: u32, max: u32) {
        self.draft.price_range = PriceRange::new(min, max);
    }

    pub fn set_draft_instant_book(&mut self, instant_book: bool) {
        self.draft.instant_book = instant_book;
    }

    // ---- commits ----

    /// Apply every draft facet.
    pub fn commit(&mut self) {
        self.active = self.draft.clone();
    }

    /// Apply a single draft facet, leaving the other active facets untouched.
    pub fn commit_facet(&mut self, facet: Facet) {
        self.active.copy_facet(&self.draft, facet);
    }

    // ---- immediate toggles ----

    /// Toggle a property type on the active criteria without going through
    /// the draft.
    pub fn toggle_property_type(&mut self, property_type: PropertyType) {
        toggle(&mut self.active.property_types, property_type);
    }

    /// Flip the active instant-book flag without going through the draft.
    pub fn toggle_instant_book(&mut self) {
        self.active.instant_book = !self.active.instant_book;
    }

    // ---- resets ----

    /// Reset one facet in both the draft and the active criteria.
    pub fn remove_facet(&mut self, facet: Facet) {
        self.active.reset(facet);
        self.draft.reset(facet);
        if facet == Facet::PropertyType {
            self.selected_category = None;
        }
    }

    /// Reset everything, including the selected category.
    pub fn clear_all(&mut self) {
        self.active = FilterCriteria::default();
        self.draft = FilterCriteria::default();
        self.selected_category = None;
    }

    // ---- categories ----

    /// Select a category (replacing the active property-type facet) or clear
    /// the selection with `None`.
    pub fn select_category(&mut self, id: Option<&str>) -> Result<(), CoreError> {
        match id {
            Some(id) => {
                let types = category::property_types_for(id)?;
                // property_types_for succeeded, so the id is known.
                self.selected_category = category::find(id).map(|c| c.id);
                self.active.property_types = types;
            }
            None => {
                self.selected_category = None;
                self.active.property_types.clear();
            }
        }
        Ok(())
    }

    /// Select `id`, or deselect it if it is already selected.
    pub fn toggle_category(&mut self, id: &str) -> Result<(), CoreError> {
        if self.selected_category == Some(id) {
            self.select_category(None)
        } else {
            self.select_category(Some(id))
        }
    }
}

fn toggle<T: Ord>(set: &mut std::collections::BTreeSet<T>, value: T) {
    if !set.remove(&value) {
        set.insert(value);
    }
}
