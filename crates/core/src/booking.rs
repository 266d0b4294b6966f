//! Booking history records and stay price quotes.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::PropertyId;

/// Flat cleaning fee added to every stay, in dollars.
pub const CLEANING_FEE: u32 = 150;

/// Flat service fee added to every stay, in dollars.
pub const SERVICE_FEE: u32 = 250;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Upcoming,
    Completed,
    Cancelled,
}

/// A past or upcoming reservation in the user's history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub property_id: PropertyId,
    pub property_name: String,
    pub location: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: u32,
    pub total_price: u32,
    pub status: BookingStatus,
    pub image: String,
}

/// Bookings with the given status, preserving order. Backs the tabbed
/// history view.
pub fn with_status(bookings: &[Booking], status: BookingStatus) -> Vec<&Booking> {
    bookings.iter().filter(|b| b.status == status).collect()
}

/// Price breakdown for a stay at a single listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StayQuote {
    pub nights: u32,
    pub nightly_price: u32,
    pub subtotal: u32,
    pub cleaning_fee: u32,
    pub service_fee: u32,
    pub total: u32,
}

impl StayQuote {
    /// Quote a stay between two dates.
    ///
    /// The night count is the absolute day difference, so swapped dates quote
    /// the same stay. Returns `None` when both dates are the same day or
    /// when the total does not fit in a `u32`.
    pub fn for_stay(nightly_price: u32, check_in: NaiveDate, check_out: NaiveDate) -> Option<Self> {
        let nights = u32::try_from((check_out - check_in).num_days().unsigned_abs()).ok()?;
        if nights == 0 {
            return None;
        }

        let subtotal = nightly_price.checked_mul(nights)?;
        let total = subtotal.checked_add(CLEANING_FEE)?.checked_add(SERVICE_FEE)?;
        Some(Self {
            nights,
            nightly_price,
            subtotal,
            cleaning_fee: CLEANING_FEE,
            service_fee: SERVICE_FEE,
            total,
        })
    }
}
