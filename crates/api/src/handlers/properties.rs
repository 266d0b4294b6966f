//! Handlers for the `/properties` resource (catalog browsing).

use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use stayhub_core::category;
use stayhub_core::filter::{FilterCriteria, PriceRange};
use stayhub_core::property::{Amenity, PropertyType};
use stayhub_core::types::PropertyId;
use stayhub_core::wire::{PropertiesResponse, PropertyResponse};

use crate::error::AppResult;
use crate::extract::{AppPath, AppQuery};
use crate::state::AppState;

/// Query parameters for `GET /properties`.
///
/// List-valued parameters are comma separated, e.g.
/// `?propertyType=House,Cabin&amenities=Wifi,Pool`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyQuery {
    pub category: Option<String>,
    pub property_type: Option<String>,
    pub min_price: Option<u32>,
    pub max_price: Option<u32>,
    pub amenities: Option<String>,
    #[serde(default)]
    pub instant_book: bool,
}

impl PropertyQuery {
    /// Translate the query into filter criteria.
    ///
    /// A category sets the property-type facet first; an explicit
    /// `propertyType` list then replaces it.
    pub fn to_criteria(&self) -> AppResult<FilterCriteria> {
        let mut criteria = FilterCriteria::default();

        if let Some(id) = self.category.as_deref().filter(|s| !s.is_empty()) {
            criteria.property_types = category::property_types_for(id)?;
        }

        if let Some(list) = &self.property_type {
            criteria.property_types = parse_list::<PropertyType>(list)?.into_iter().collect();
        }

        criteria.price_range = PriceRange::new(
            self.min_price.unwrap_or(PriceRange::DEFAULT.min),
            self.max_price.unwrap_or(PriceRange::DEFAULT.max),
        );

        if let Some(list) = &self.amenities {
            criteria.amenities = parse_list::<Amenity>(list)?.into_iter().collect();
        }

        criteria.instant_book = self.instant_book;
        Ok(criteria)
    }
}

fn parse_list<T>(list: &str) -> AppResult<Vec<T>>
where
    T: std::str::FromStr<Err = stayhub_core::error::CoreError>,
{
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<T>().map_err(Into::into))
        .collect()
}

/// GET /api/properties
pub async fn list_properties(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<PropertyQuery>,
) -> AppResult<Json<PropertiesResponse>> {
    let criteria = query.to_criteria()?;
    let properties: Vec<_> = state
        .catalog
        .filter(&criteria)
        .into_iter()
        .cloned()
        .collect();

    tracing::debug!(
        count = properties.len(),
        facets = ?criteria.active_facets(),
        "Filtered catalog"
    );

    Ok(Json(PropertiesResponse {
        success: true,
        properties,
    }))
}

/// GET /api/properties/{id}
pub async fn get_property(
    State(state): State<AppState>,
    AppPath(id): AppPath<PropertyId>,
) -> AppResult<Json<PropertyResponse>> {
    let property = state.catalog.get(id)?.clone();
    Ok(Json(PropertyResponse {
        success: true,
        property,
    }))
}
