//! JSON request and response bodies exchanged with the mock API.
//!
//! Every endpoint has its own response type. All of them carry a `success`
//! flag; failures share [`FailureResponse`].
//!
//! Request fields default to the empty string when absent, so "missing" and
//! "empty" are the same thing to the handlers.

use serde::{Deserialize, Serialize};

use crate::booking::Booking;
use crate::favorites::FavoriteListing;
use crate::property::Property;
use crate::types::PropertyId;
use crate::user::{User, UserProfile};

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

impl LoginRequest {
    pub fn is_complete(&self) -> bool {
        all_present(&[&self.email, &self.password])
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

impl RegisterRequest {
    pub fn is_complete(&self) -> bool {
        all_present(&[&self.name, &self.email, &self.password])
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ForgotPasswordRequest {
    #[serde(default)]
    pub email: String,
}

impl ForgotPasswordRequest {
    pub fn is_complete(&self) -> bool {
        all_present(&[&self.email])
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResetPasswordRequest {
    #[serde(default)]
    pub token: String,
    #[serde(default)]
    pub password: String,
}

impl ResetPasswordRequest {
    pub fn is_complete(&self) -> bool {
        all_present(&[&self.token, &self.password])
    }
}

/// Body of `POST /user/favorites`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteRequest {
    #[serde(default)]
    pub property_id: Option<PropertyId>,
}

fn all_present(values: &[&str]) -> bool {
    values.iter().all(|v| !v.is_empty())
}

// ---------------------------------------------------------------------------
// Responses
// ---------------------------------------------------------------------------

/// Successful login or registration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthGrant {
    pub success: bool,
    pub user: User,
    pub token: String,
}

impl AuthGrant {
    pub fn new(user: User, token: impl Into<String>) -> Self {
        Self {
            success: true,
            user,
            token: token.into(),
        }
    }
}

/// Success carrying only a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub success: bool,
    pub user: UserProfile,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingsResponse {
    pub success: bool,
    pub bookings: Vec<Booking>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FavoritesResponse {
    pub success: bool,
    pub favorites: Vec<FavoriteListing>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertiesResponse {
    pub success: bool,
    pub properties: Vec<Property>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyResponse {
    pub success: bool,
    pub property: Property,
}

/// Body of every non-2xx response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureResponse {
    pub success: bool,
    pub message: String,
    /// Machine-readable error code, e.g. `"CONFLICT"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl FailureResponse {
    pub fn new(message: impl Into<String>, code: &str) -> Self {
        Self {
            success: false,
            message: message.into(),
            code: Some(code.to_string()),
        }
    }
}
