//! User identity and profile records.

use serde::{Deserialize, Serialize};

use crate::types::{Timestamp, UserId};

/// The identity held by a client session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Full profile shown on the profile page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub bio: String,
    pub image: String,
    pub created_at: Timestamp,
}

/// Editable profile fields. Missing or empty values keep the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
}

impl UserProfile {
    /// Return a copy of this profile with `update` applied.
    pub fn with_update(&self, update: &ProfileUpdate) -> UserProfile {
        UserProfile {
            name: pick(&update.name, &self.name),
            phone: pick(&update.phone, &self.phone),
            address: pick(&update.address, &self.address),
            bio: pick(&update.bio, &self.bio),
            ..self.clone()
        }
    }

    /// The session-level identity for this profile.
    pub fn identity(&self) -> User {
        User {
            id: self.id.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
            image: Some(self.image.clone()),
        }
    }
}

fn pick(candidate: &Option<String>, current: &str) -> String {
    match candidate.as_deref() {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => current.to_string(),
    }
}
