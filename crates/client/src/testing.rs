//! Fakes shared by the unit tests in this crate.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use async_trait::async_trait;
use stayhub_core::catalog::Catalog;
use stayhub_core::favorites::FavoriteListing;
use stayhub_core::types::PropertyId;
use stayhub_core::user::User;
use stayhub_core::wire::{
    AuthGrant, FavoritesResponse, ForgotPasswordRequest, LoginRequest, MessageResponse,
    RegisterRequest, ResetPasswordRequest,
};
use tokio::sync::Notify;

use crate::api::{AuthApi, FavoritesApi};
use crate::error::{ClientError, StorageError};
use crate::notify::{Notifier, Toast};
use crate::storage::{KeyValueStore, MemoryStore};

pub const DEMO_EMAIL: &str = "user@example.com";
pub const DEMO_PASSWORD: &str = "password";

/// Email that makes every fake auth call fail without a failure body.
pub const UNREACHABLE_EMAIL: &str = "offline@example.com";

pub fn demo_user() -> User {
    User {
        id: "user-123".into(),
        name: "John Doe".into(),
        email: DEMO_EMAIL.into(),
        image: None,
    }
}

fn rejected(status: u16, message: &str) -> ClientError {
    ClientError::Rejected {
        status,
        message: message.into(),
    }
}

fn unreachable() -> ClientError {
    ClientError::Unexpected {
        status: 502,
        body: "Bad Gateway".into(),
    }
}

/// In-process stand-in for the mock server.
#[derive(Default)]
pub struct FakeApi {
    pub fail_favorites: AtomicBool,
    /// When set, `login` waits on `release` before answering.
    pub hold_login: AtomicBool,
    pub release: Notify,
    calls: Mutex<Vec<String>>,
}

impl FakeApi {
    pub fn calls(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn record(&self, call: String) {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(call);
    }

    fn favorites_down(&self) -> bool {
        self.fail_favorites.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AuthApi for FakeApi {
    async fn login(&self, request: &LoginRequest) -> Result<AuthGrant, ClientError> {
        self.record(format!("login {}", request.email));
        if self.hold_login.load(Ordering::SeqCst) {
            self.release.notified().await;
        }
        if request.email == UNREACHABLE_EMAIL {
            return Err(unreachable());
        }
        if !request.is_complete() {
            return Err(rejected(400, "Email and password are required"));
        }
        if request.email != DEMO_EMAIL || request.password != DEMO_PASSWORD {
            return Err(rejected(401, "Invalid email or password"));
        }
        Ok(AuthGrant::new(demo_user(), "mock-jwt-token"))
    }

    async fn register(&self, request: &RegisterRequest) -> Result<AuthGrant, ClientError> {
        self.record(format!("register {}", request.email));
        if request.email == UNREACHABLE_EMAIL {
            return Err(unreachable());
        }
        if request.email == DEMO_EMAIL {
            return Err(rejected(409, "Email is already in use"));
        }
        let user = User {
            id: "new-user-123".into(),
            name: request.name.clone(),
            email: request.email.clone(),
            image: None,
        };
        Ok(AuthGrant::new(user, "mock-jwt-token"))
    }

    async fn forgot_password(
        &self,
        request: &ForgotPasswordRequest,
    ) -> Result<MessageResponse, ClientError> {
        self.record(format!("forgot {}", request.email));
        if request.email == UNREACHABLE_EMAIL {
            return Err(unreachable());
        }
        if !request.is_complete() {
            return Err(rejected(400, "Email is required"));
        }
        Ok(MessageResponse::new(
            "Password reset link has been sent to your email",
        ))
    }

    async fn reset_password(
        &self,
        request: &ResetPasswordRequest,
    ) -> Result<MessageResponse, ClientError> {
        self.record("reset".to_string());
        if !request.is_complete() {
            return Err(rejected(400, "Token and password are required"));
        }
        Ok(MessageResponse::new("Password has been reset successfully"))
    }
}

#[async_trait]
impl FavoritesApi for FakeApi {
    async fn favorites(&self) -> Result<FavoritesResponse, ClientError> {
        self.record("favorites".to_string());
        if self.favorites_down() {
            return Err(unreachable());
        }
        let catalog = Catalog::standard();
        let favorites = [1, 7, 9]
            .iter()
            .filter_map(|id| catalog.get(*id).ok())
            .map(FavoriteListing::from)
            .collect();
        Ok(FavoritesResponse {
            success: true,
            favorites,
        })
    }

    async fn add_favorite(&self, property_id: PropertyId) -> Result<MessageResponse, ClientError> {
        self.record(format!("add {property_id}"));
        if self.favorites_down() {
            return Err(unreachable());
        }
        Ok(MessageResponse::new("Property added to favorites"))
    }

    async fn remove_favorite(
        &self,
        property_id: PropertyId,
    ) -> Result<MessageResponse, ClientError> {
        self.record(format!("remove {property_id}"));
        if self.favorites_down() {
            return Err(unreachable());
        }
        Ok(MessageResponse::new("Property removed from favorites"))
    }
}

/// Notifier that keeps every toast for later inspection.
#[derive(Default)]
pub struct RecordingNotifier {
    toasts: Mutex<Vec<Toast>>,
}

impl RecordingNotifier {
    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn last(&self) -> Option<Toast> {
        self.toasts().pop()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, toast: Toast) {
        self.toasts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(toast);
    }
}

/// Store whose writes always fail. Reads see nothing.
#[derive(Default)]
pub struct BrokenStore;

impl KeyValueStore for BrokenStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Ok(None)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(std::io::Error::other("disk full").into())
    }

    fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Err(std::io::Error::other("disk full").into())
    }
}

/// Memory store that stalls after writing a batch that mentions `slow_marker`.
pub struct SlowStore {
    inner: MemoryStore,
    slow_marker: &'static str,
    delay: Duration,
}

impl SlowStore {
    pub fn new(slow_marker: &'static str, delay: Duration) -> Self {
        Self {
            inner: MemoryStore::new(),
            slow_marker,
            delay,
        }
    }
}

impl KeyValueStore for SlowStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.set_many(&[(key, value)])
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.inner.remove(key)
    }

    fn set_many(&self, pairs: &[(&str, &str)]) -> Result<(), StorageError> {
        self.inner.set_many(pairs)?;
        if pairs.iter().any(|(_, value)| value.contains(self.slow_marker)) {
            std::thread::sleep(self.delay);
        }
        Ok(())
    }
}
