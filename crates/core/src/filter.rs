//! Filter criteria and the listing predicate they define.
//!
//! A listing is visible iff it satisfies every predicate:
//!
//! 1. its type is in `property_types` (skipped when the set is empty);
//! 2. its nightly price lies in the inclusive `price_range`;
//! 3. it offers every amenity in `amenities` (skipped when empty);
//! 4. it is instant-bookable when `instant_book` is set.
//!
//! The predicates are independent, so evaluation order never changes the
//! result.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::property::{Amenity, Property, PropertyType};

// ---------------------------------------------------------------------------
// Price range
// ---------------------------------------------------------------------------

/// Lowest price the range slider can select.
pub const SLIDER_MIN: u32 = 0;

/// Highest price the range slider can select.
pub const SLIDER_MAX: u32 = 2000;

/// Slider granularity in dollars.
pub const SLIDER_STEP: u32 = 10;

/// Inclusive nightly price bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: u32,
    pub max: u32,
}

impl PriceRange {
    /// Range applied before the user touches the slider.
    pub const DEFAULT: PriceRange = PriceRange { min: 50, max: 1000 };

    /// Build a range clamped to the slider bounds with `min <= max`.
    pub fn new(min: u32, max: u32) -> Self {
        let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
        Self {
            min: lo.clamp(SLIDER_MIN, SLIDER_MAX),
            max: hi.clamp(SLIDER_MIN, SLIDER_MAX),
        }
    }

    pub fn contains(&self, price: u32) -> bool {
        self.min <= price && price <= self.max
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self::DEFAULT
    }
}

// ---------------------------------------------------------------------------
// Facets
// ---------------------------------------------------------------------------

/// One independently resettable part of [`FilterCriteria`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Facet {
    PropertyType,
    Price,
    Amenities,
    InstantBook,
}

impl Facet {
    pub const ALL: [Facet; 4] = [
        Facet::PropertyType,
        Facet::Price,
        Facet::Amenities,
        Facet::InstantBook,
    ];

    /// Badge label shown for an active facet.
    pub fn label(self) -> &'static str {
        match self {
            Facet::PropertyType => "Property type",
            Facet::Price => "Price",
            Facet::Amenities => "Amenities",
            Facet::InstantBook => "Instant Book",
        }
    }
}

impl fmt::Display for Facet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Criteria
// ---------------------------------------------------------------------------

/// The set of predicates applied to the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    #[serde(rename = "propertyType")]
    pub property_types: BTreeSet<PropertyType>,
    pub price_range: PriceRange,
    pub amenities: BTreeSet<Amenity>,
    pub instant_book: bool,
}

impl FilterCriteria {
    /// Whether `property` passes every predicate.
    pub fn matches(&self, property: &Property) -> bool {
        (self.property_types.is_empty() || self.property_types.contains(&property.property_type))
            && self.price_range.contains(property.price)
            && (self.amenities.is_empty() || property.has_amenities(&self.amenities))
            && (!self.instant_book || property.instant_book)
    }

    /// Whether a facet differs from its default value.
    pub fn is_active(&self, facet: Facet) -> bool {
        match facet {
            Facet::PropertyType => !self.property_types.is_empty(),
            Facet::Price => self.price_range != PriceRange::DEFAULT,
            Facet::Amenities => !self.amenities.is_empty(),
            Facet::InstantBook => self.instant_book,
        }
    }

    /// Facets that currently narrow the result, in badge order.
    pub fn active_facets(&self) -> Vec<Facet> {
        Facet::ALL
            .into_iter()
            .filter(|f| self.is_active(*f))
            .collect()
    }

    pub fn is_default(&self) -> bool {
        self.active_facets().is_empty()
    }

    /// Reset one facet to its default value.
    pub fn reset(&mut self, facet: Facet) {
        match facet {
            Facet::PropertyType => self.property_types.clear(),
            Facet::Price => self.price_range = PriceRange::DEFAULT,
            Facet::Amenities => self.amenities.clear(),
            Facet::InstantBook => self.instant_book = false,
        }
    }

    /// Overwrite one facet with the value held by `other`.
    pub fn copy_facet(&mut self, other: &FilterCriteria, facet: Facet) {
        match facet {
            Facet::PropertyType => self.property_types = other.property_types.clone(),
            Facet::Price => self.price_range = other.price_range,
            Facet::Amenities => self.amenities = other.amenities.clone(),
            Facet::InstantBook => self.instant_book = other.instant_book,
        }
    }
}
