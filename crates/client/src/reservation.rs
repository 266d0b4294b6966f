//! Reservation requests from a listing page.
//!
//! Nothing is sent to the server or persisted. A reservation that passes the
//! checks is confirmed with a toast and a price quote.

use chrono::NaiveDate;
use stayhub_core::booking::StayQuote;
use stayhub_core::property::Property;

use crate::notify::{Notifier, Toast};
use crate::session::SessionStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ReservationError {
    #[error("Please log in to make a reservation")]
    NotAuthenticated,

    #[error("Please select check-in and check-out dates")]
    DatesRequired,

    #[error("Check-in and check-out must be on different days")]
    NoNights,

    #[error("This stay is too long to price")]
    TooLong,
}

impl ReservationError {
    fn title(self) -> &'static str {
        match self {
            ReservationError::NotAuthenticated => "Authentication required",
            ReservationError::DatesRequired
            | ReservationError::NoNights
            | ReservationError::TooLong => "Dates required",
        }
    }
}

/// Check and confirm a stay at `property`.
pub fn reserve(
    session: &SessionStore,
    notifier: &dyn Notifier,
    property: &Property,
    check_in: Option<NaiveDate>,
    check_out: Option<NaiveDate>,
) -> Result<StayQuote, ReservationError> {
    match quote(session, property, check_in, check_out) {
        Ok(quote) => {
            tracing::info!(
                property_id = property.id,
                nights = quote.nights,
                total = quote.total,
                "Reservation confirmed"
            );
            notifier.notify(Toast::info(
                "Booking successful!",
                format!("Your stay at {} has been booked.", property.title),
            ));
            Ok(quote)
        }
        Err(e) => {
            notifier.notify(Toast::error(e.title(), e.to_string()));
            Err(e)
        }
    }
}

fn quote(
    session: &SessionStore,
    property: &Property,
    check_in: Option<NaiveDate>,
    check_out: Option<NaiveDate>,
) -> Result<StayQuote, ReservationError> {
    if !session.is_authenticated() {
        return Err(ReservationError::NotAuthenticated);
    }
    let (Some(check_in), Some(check_out)) = (check_in, check_out) else {
        return Err(ReservationError::DatesRequired);
    };
    if check_in == check_out {
        return Err(ReservationError::NoNights);
    }
    StayQuote::for_stay(property.price, check_in, check_out).ok_or(ReservationError::TooLong)
}
