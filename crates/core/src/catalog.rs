//! The static listing catalog.
//!
//! The catalog is created once at startup and only ever read afterwards.
//! Lookups and filtering return borrowed views into it.

use std::collections::BTreeSet;

use crate::error::CoreError;
use crate::filter::FilterCriteria;
use crate::property::{Amenity, Property, PropertyType};
use crate::types::PropertyId;

/// Placeholder artwork used by every demo listing.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg?height=500&width=500";

/// Immutable collection of listings.
#[derive(Debug, Clone)]
pub struct Catalog {
    properties: Vec<Property>,
}

impl Catalog {
    /// Wrap an arbitrary set of listings.
    pub fn new(properties: Vec<Property>) -> Self {
        Self { properties }
    }

    /// The twelve demo listings shown on the home page.
    pub fn standard() -> Self {
        use Amenity::*;
        use PropertyType::*;

        Self::new(vec![
            listing(1, "Beachfront Villa with Ocean View", "Malibu, California", "50 miles away", "Nov 12-17", 350, 4.98, 124, true, House, &[Wifi, Pool, Kitchen, FreeParking], true),
            listing(2, "Modern Downtown Loft", "New York, New York", "2 miles away", "Nov 5-10", 200, 4.85, 87, false, Loft, &[Wifi, Kitchen], false),
            listing(3, "Cozy Mountain Cabin", "Aspen, Colorado", "120 miles away", "Dec 1-6", 175, 4.92, 56, true, Cabin, &[Wifi, Kitchen, FreeParking], true),
            listing(4, "Luxury Penthouse with City Views", "Miami, Florida", "15 miles away", "Nov 20-25", 400, 4.9, 102, false, Apartment, &[Wifi, Pool, Tv, Kitchen], true),
            listing(5, "Charming Cottage in Wine Country", "Napa Valley, California", "60 miles away", "Dec 10-15", 225, 4.95, 78, true, House, &[Wifi, Kitchen, FreeParking], false),
            listing(6, "Historic Brownstone", "Boston, Massachusetts", "5 miles away", "Nov 15-20", 275, 4.88, 65, false, Apartment, &[Wifi, Tv, Kitchen], true),
            listing(7, "Lakefront Cabin with Private Dock", "Lake Tahoe, Nevada", "150 miles away", "Dec 5-10", 300, 4.97, 91, true, Cabin, &[Wifi, Tv, Kitchen, FreeParking], false),
            listing(8, "Desert Oasis with Pool", "Palm Springs, California", "110 miles away", "Nov 25-30", 250, 4.89, 73, false, House, &[Pool, Tv, Kitchen, FreeParking], true),
            listing(9, "Ski-in/Ski-out Mountain Condo", "Park City, Utah", "200 miles away", "Dec 15-20", 280, 4.91, 85, true, Condo, &[Wifi, Tv, Kitchen], true),
            listing(10, "Trendy Downtown Hotel Suite", "Chicago, Illinois", "10 miles away", "Nov 10-15", 180, 4.87, 112, false, Hotel, &[Wifi, Tv], true),
            listing(11, "Beachside Bungalow", "San Diego, California", "80 miles away", "Dec 7-12", 195, 4.93, 67, true, House, &[Wifi, Kitchen, FreeParking, PetsAllowed], false),
            listing(12, "Urban Loft with Skyline View", "Seattle, Washington", "5 miles away", "Nov 18-23", 220, 4.86, 94, false, Loft, &[Wifi, Tv, Kitchen], true),
        ])
    }

    /// All listings in catalog order.
    pub fn all(&self) -> &[Property] {
        &self.properties
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Look up a listing by id.
    pub fn get(&self, id: PropertyId) -> Result<&Property, CoreError> {
        self.properties
            .iter()
            .find(|p| p.id == id)
            .ok_or(CoreError::NotFound {
                entity: "Property",
                id,
            })
    }

    /// Listings matching every predicate in `criteria`, in catalog order.
    ///
    /// An empty result is a valid outcome.
    pub fn filter(&self, criteria: &FilterCriteria) -> Vec<&Property> {
        self.properties
            .iter()
            .filter(|p| criteria.matches(p))
            .collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

#[allow(clippy::too_many_arguments)]
fn listing(
    id: PropertyId,
    title: &str,
    location: &str,
    distance: &str,
    dates: &str,
    price: u32,
    rating: f64,
    reviews: u32,
    superhost: bool,
    property_type: PropertyType,
    amenities: &[Amenity],
    instant_book: bool,
) -> Property {
    Property {
        id,
        title: title.to_string(),
        location: location.to_string(),
        distance: distance.to_string(),
        dates: dates.to_string(),
        price,
        rating,
        reviews,
        images: vec![PLACEHOLDER_IMAGE.to_string()],
        superhost,
        property_type,
        amenities: amenities.iter().copied().collect::<BTreeSet<_>>(),
        instant_book,
    }
}
