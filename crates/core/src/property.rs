//! Listing records and the closed vocabularies used to filter them.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::PropertyId;

// ---------------------------------------------------------------------------
// Property type
// ---------------------------------------------------------------------------

/// Kind of dwelling a listing offers. Serialized by display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PropertyType {
    House,
    Apartment,
    Loft,
    Cabin,
    Beach,
    Mountain,
    Condo,
    Hotel,
}

impl PropertyType {
    /// Every property type, in picker order.
    pub const ALL: [PropertyType; 8] = [
        PropertyType::House,
        PropertyType::Apartment,
        PropertyType::Loft,
        PropertyType::Cabin,
        PropertyType::Beach,
        PropertyType::Mountain,
        PropertyType::Condo,
        PropertyType::Hotel,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PropertyType::House => "House",
            PropertyType::Apartment => "Apartment",
            PropertyType::Loft => "Loft",
            PropertyType::Cabin => "Cabin",
            PropertyType::Beach => "Beach",
            PropertyType::Mountain => "Mountain",
            PropertyType::Condo => "Condo",
            PropertyType::Hotel => "Hotel",
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PropertyType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PropertyType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CoreError::Validation(format!("Unknown property type '{s}'")))
    }
}

// ---------------------------------------------------------------------------
// Amenity
// ---------------------------------------------------------------------------

/// A feature a listing may offer. Serialized by display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Amenity {
    Wifi,
    #[serde(rename = "Free parking")]
    FreeParking,
    Pool,
    #[serde(rename = "TV")]
    Tv,
    Kitchen,
    #[serde(rename = "Pets allowed")]
    PetsAllowed,
}

impl Amenity {
    /// Every amenity, in picker order.
    pub const ALL: [Amenity; 6] = [
        Amenity::Wifi,
        Amenity::FreeParking,
        Amenity::Pool,
        Amenity::Tv,
        Amenity::Kitchen,
        Amenity::PetsAllowed,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Amenity::Wifi => "Wifi",
            Amenity::FreeParking => "Free parking",
            Amenity::Pool => "Pool",
            Amenity::Tv => "TV",
            Amenity::Kitchen => "Kitchen",
            Amenity::PetsAllowed => "Pets allowed",
        }
    }
}

impl fmt::Display for Amenity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Amenity {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Amenity::ALL
            .into_iter()
            .find(|a| a.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CoreError::Validation(format!("Unknown amenity '{s}'")))
    }
}

// ---------------------------------------------------------------------------
// Property
// ---------------------------------------------------------------------------

/// A single listing in the catalog.
///
/// Listings are reference data: the filter engine hands out borrowed views and
/// never mutates them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: PropertyId,
    pub title: String,
    pub location: String,
    pub distance: String,
    pub dates: String,
    /// Nightly price in whole dollars.
    pub price: u32,
    pub rating: f64,
    pub reviews: u32,
    pub images: Vec<String>,
    pub superhost: bool,
    pub property_type: PropertyType,
    pub amenities: BTreeSet<Amenity>,
    pub instant_book: bool,
}

impl Property {
    /// Whether this listing offers every amenity in `wanted`.
    pub fn has_amenities(&self, wanted: &BTreeSet<Amenity>) -> bool {
        wanted.is_subset(&self.amenities)
    }
}
