//! Canned data served by the mock endpoints.
//!
//! Nothing here is persisted or mutated after startup. Handlers clone what
//! they need into their responses.

use chrono::{NaiveDate, TimeZone, Utc};
use stayhub_core::booking::{Booking, BookingStatus};
use stayhub_core::catalog::{Catalog, PLACEHOLDER_IMAGE};
use stayhub_core::favorites::FavoriteListing;
use stayhub_core::types::PropertyId;
use stayhub_core::user::{User, UserProfile};

use crate::config::DemoAccount;

/// Opaque token handed out by login and registration.
pub const MOCK_TOKEN: &str = "mock-jwt-token";

/// Id assigned to every freshly registered account.
pub const REGISTERED_USER_ID: &str = "new-user-123";

/// Avatar used for every mock user.
pub const AVATAR_IMAGE: &str = "/placeholder.svg?height=200&width=200";

/// Listings that start out favorited for the demo user.
const FAVORITE_IDS: [PropertyId; 3] = [1, 7, 9];

#[derive(Debug, Clone)]
pub struct Fixtures {
    profile: UserProfile,
    bookings: Vec<Booking>,
    favorites: Vec<FavoriteListing>,
}

impl Fixtures {
    /// Build the fixture set for `demo`, drawing favorite summaries from
    /// `catalog`. Favorite ids missing from the catalog are skipped.
    pub fn new(demo: &DemoAccount, catalog: &Catalog) -> Self {
        let profile = UserProfile {
            id: "user-123".to_string(),
            name: "John Doe".to_string(),
            email: demo.email.clone(),
            phone: "+1 (555) 123-4567".to_string(),
            address: "123 Main St, New York, NY 10001".to_string(),
            bio: "Travel enthusiast and food lover. Always looking for new adventures!"
                .to_string(),
            image: AVATAR_IMAGE.to_string(),
            created_at: Utc.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).single().unwrap_or_default(),
        };

        let bookings = vec![
            booking("booking-1", 1, "Beachfront Villa with Ocean View", "Malibu, California", (2023, 11, 12), (2023, 11, 17), 2, 1750, BookingStatus::Upcoming),
            booking("booking-2", 3, "Cozy Mountain Cabin", "Aspen, Colorado", (2023, 10, 5), (2023, 10, 10), 4, 875, BookingStatus::Completed),
            booking("booking-3", 5, "Charming Cottage in Wine Country", "Napa Valley, California", (2023, 9, 15), (2023, 9, 20), 2, 1125, BookingStatus::Completed),
        ];

        let favorites = FAVORITE_IDS
            .iter()
            .filter_map(|id| catalog.get(*id).ok())
            .map(FavoriteListing::from)
            .collect();

        Self {
            profile,
            bookings,
            favorites,
        }
    }

    /// Identity returned by a successful login.
    pub fn demo_user(&self) -> User {
        self.profile.identity()
    }

    /// Identity returned by a successful registration.
    pub fn registered_user(&self, name: &str, email: &str) -> User {
        User {
            id: REGISTERED_USER_ID.to_string(),
            name: name.to_string(),
            email: email.to_string(),
            image: Some(AVATAR_IMAGE.to_string()),
        }
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn favorites(&self) -> &[FavoriteListing] {
        &self.favorites
    }
}

#[allow(clippy::too_many_arguments)]
fn booking(
    id: &str,
    property_id: PropertyId,
    property_name: &str,
    location: &str,
    check_in: (i32, u32, u32),
    check_out: (i32, u32, u32),
    guests: u32,
    total_price: u32,
    status: BookingStatus,
) -> Booking {
    Booking {
        id: id.to_string(),
        property_id,
        property_name: property_name.to_string(),
        location: location.to_string(),
        check_in: ymd(check_in),
        check_out: ymd(check_out),
        guests,
        total_price,
        status,
        image: PLACEHOLDER_IMAGE.to_string(),
    }
}

fn ymd((y, m, d): (i32, u32, u32)) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}
