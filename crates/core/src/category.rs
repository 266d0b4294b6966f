//! Browse categories and their mapping onto property-type filters.
//!
//! A category is a shortcut: selecting one replaces the property-type facet
//! of the active criteria with the category's type set. Categories without a
//! dedicated property type map to the empty set (no type restriction).

use std::collections::BTreeSet;

use serde::Serialize;

use crate::error::CoreError;
use crate::property::PropertyType;

/// A browse category shown in the category strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Category {
    pub id: &'static str,
    pub label: &'static str,
}

/// All categories, in strip order.
pub const CATEGORIES: &[Category] = &[
    Category { id: "amazing-views", label: "Amazing views" },
    Category { id: "beach", label: "Beach" },
    Category { id: "cabins", label: "Cabins" },
    Category { id: "mansions", label: "Mansions" },
    Category { id: "tiny-homes", label: "Tiny homes" },
    Category { id: "camping", label: "Camping" },
    Category { id: "boats", label: "Boats" },
    Category { id: "lakefront", label: "Lakefront" },
    Category { id: "ski-in-out", label: "Ski-in/out" },
    Category { id: "tropical", label: "Tropical" },
    Category { id: "countryside", label: "Countryside" },
    Category { id: "historical", label: "Historical" },
    Category { id: "trending", label: "Trending" },
    Category { id: "apartments", label: "Apartments" },
    Category { id: "hotels", label: "Hotels" },
];

/// Find a category by id.
pub fn find(id: &str) -> Option<&'static Category> {
    CATEGORIES.iter().find(|c| c.id == id)
}

/// Property types selected by a category.
///
/// Returns a validation error for ids that are not in [`CATEGORIES`].
pub fn property_types_for(id: &str) -> Result<BTreeSet<PropertyType>, CoreError> {
    let category =
        find(id).ok_or_else(|| CoreError::Validation(format!("Unknown category '{id}'")))?;

    let mapped = match category.id {
        "cabins" => Some(PropertyType::Cabin),
        "beach" => Some(PropertyType::Beach),
        "apartments" => Some(PropertyType::Apartment),
        "tiny-homes" => Some(PropertyType::House),
        "hotels" => Some(PropertyType::Hotel),
        _ => None,
    };

    Ok(mapped.into_iter().collect())
}
