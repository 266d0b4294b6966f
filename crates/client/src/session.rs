//! The session store: who is logged in, and the operations that change it.
//!
//! A [`SessionStore`] is built once with [`SessionStore::restore`] and shared
//! by reference (or `Arc`) with whatever needs to know the current user.
//! Operations never return errors: each one reports its outcome through the
//! [`Notifier`] and answers with a plain `bool`.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use stayhub_core::user::User;
use stayhub_core::wire::{
    AuthGrant, ForgotPasswordRequest, LoginRequest, RegisterRequest, ResetPasswordRequest,
};

use crate::api::AuthApi;
use crate::error::ClientError;
use crate::notify::{Notifier, Toast};
use crate::storage::{clear_session, load_session, save_session, KeyValueStore};

/// Point-in-time view of the session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub user: Option<User>,
    /// True while any network operation is in flight.
    pub pending: bool,
}

#[derive(Debug, Clone)]
struct Credentials {
    user: User,
    token: String,
}

/// Toast copy for one operation.
struct Wording {
    success: &'static str,
    failure: &'static str,
    fallback: &'static str,
}

const LOGIN: Wording = Wording {
    success: "Login successful",
    failure: "Login failed",
    fallback: "An error occurred during login",
};

const REGISTER: Wording = Wording {
    success: "Registration successful",
    failure: "Registration failed",
    fallback: "An error occurred during registration",
};

const FORGOT_PASSWORD: Wording = Wording {
    success: "Password reset email sent",
    failure: "Request failed",
    fallback: "An error occurred while processing your request",
};

const RESET_PASSWORD: Wording = Wording {
    success: "Password reset successful",
    failure: "Password reset failed",
    fallback: "An error occurred while resetting your password",
};

pub struct SessionStore {
    api: Arc<dyn AuthApi>,
    storage: Arc<dyn KeyValueStore>,
    notifier: Arc<dyn Notifier>,
    credentials: RwLock<Option<Credentials>>,
    in_flight: AtomicUsize,
}

/// Decrements the in-flight counter when an operation ends, however it ends.
struct PendingGuard<'a>(&'a AtomicUsize);

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

impl SessionStore {
    /// Build the store, picking up a persisted session if one exists.
    ///
    /// Storage read errors are logged and leave the session logged out.
    pub fn restore(
        api: Arc<dyn AuthApi>,
        storage: Arc<dyn KeyValueStore>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let credentials = match load_session(storage.as_ref()) {
            Ok(Some((user, token))) => {
                tracing::info!(user_id = %user.id, "Restored session");
                Some(Credentials { user, token })
            }
            Ok(None) => None,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read stored session");
                None
            }
        };

        Self {
            api,
            storage,
            notifier,
            credentials: RwLock::new(credentials),
            in_flight: AtomicUsize::new(0),
        }
    }

    // -- accessors ----------------------------------------------------------

    pub fn current_user(&self) -> Option<User> {
        self.read(|c| c.map(|c| c.user.clone()))
    }

    pub fn token(&self) -> Option<String> {
        self.read(|c| c.map(|c| c.token.clone()))
    }

    pub fn is_authenticated(&self) -> bool {
        self.read(|c| c.is_some())
    }

    pub fn is_pending(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst) > 0
    }

    pub fn snapshot(&self) -> Session {
        Session {
            user: self.current_user(),
            pending: self.is_pending(),
        }
    }

    // -- operations ---------------------------------------------------------

    pub async fn login(&self, email: &str, password: &str) -> bool {
        let _pending = self.begin();
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        let result = self
            .api
            .login(&request)
            .await
            .and_then(|grant| self.establish(grant))
            .map(|()| "Welcome back!".to_string());
        self.finish(&LOGIN, result)
    }

    pub async fn register(&self, name: &str, email: &str, password: &str) -> bool {
        let _pending = self.begin();
        let request = RegisterRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };

        let result = self
            .api
            .register(&request)
            .await
            .and_then(|grant| self.establish(grant))
            .map(|()| "Welcome to StayHub!".to_string());
        self.finish(&REGISTER, result)
    }

    /// End the session. Always succeeds, with or without a current user.
    pub fn logout(&self) {
        {
            let mut credentials = self
                .credentials
                .write()
                .unwrap_or_else(PoisonError::into_inner);
            *credentials = None;
            if let Err(e) = clear_session(self.storage.as_ref()) {
                tracing::warn!(error = %e, "Failed to clear stored session");
            }
        }

        tracing::info!("Logged out");
        self.notifier.notify(Toast::info(
            "Logged out",
            "You have been logged out successfully",
        ));
    }

    pub async fn forgot_password(&self, email: &str) -> bool {
        let _pending = self.begin();
        let request = ForgotPasswordRequest {
            email: email.to_string(),
        };

        let result = self
            .api
            .forgot_password(&request)
            .await
            .map(|response| response.message);
        self.finish(&FORGOT_PASSWORD, result)
    }

    pub async fn reset_password(&self, token: &str, password: &str) -> bool {
        let _pending = self.begin();
        let request = ResetPasswordRequest {
            token: token.to_string(),
            password: password.to_string(),
        };

        let result = self
            .api
            .reset_password(&request)
            .await
            .map(|response| response.message);
        self.finish(&RESET_PASSWORD, result)
    }

    // -- private helpers ----------------------------------------------------

    fn read<T>(&self, f: impl FnOnce(Option<&Credentials>) -> T) -> T {
        let guard = self
            .credentials
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        f(guard.as_ref())
    }

    fn begin(&self) -> PendingGuard<'_> {
        self.in_flight.fetch_add(1, Ordering::SeqCst);
        PendingGuard(&self.in_flight)
    }

    /// Persist the grant, then publish it in memory.
    ///
    /// The write lock is held across both steps so concurrent grants land
    /// in the same order in memory and in storage.
    fn establish(&self, grant: AuthGrant) -> Result<(), ClientError> {
        let mut credentials = self
            .credentials
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        save_session(self.storage.as_ref(), &grant.user, &grant.token)?;

        tracing::info!(user_id = %grant.user.id, "Session established");
        *credentials = Some(Credentials {
            user: grant.user,
            token: grant.token,
        });
        Ok(())
    }

    /// Toast the outcome and collapse it to a boolean.
    fn finish(&self, wording: &Wording, result: Result<String, ClientError>) -> bool {
        match result {
            Ok(description) => {
                self.notifier.notify(Toast::info(wording.success, description));
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, operation = wording.failure, "Session operation failed");
                let description = e.server_message().unwrap_or(wording.fallback);
                self.notifier.notify(Toast::error(wording.failure, description));
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use assert_matches::assert_matches;

    use super::*;
    use crate::notify::{ToastVariant, TracingNotifier};
    use crate::storage::{MemoryStore, TOKEN_KEY, USER_KEY};
    use crate::testing::*;

    struct Harness {
        api: Arc<FakeApi>,
        storage: Arc<MemoryStore>,
        notifier: Arc<RecordingNotifier>,
        session: SessionStore,
    }

    fn harness() -> Harness {
        let api = Arc::new(FakeApi::default());
        let storage = Arc::new(MemoryStore::new());
        let notifier = Arc::new(RecordingNotifier::default());
        let session = SessionStore::restore(api.clone(), storage.clone(), notifier.clone());
        Harness {
            api,
            storage,
            notifier,
            session,
        }
    }

    #[tokio::test]
    async fn login_with_demo_credentials_sets_and_persists_user() {
        let h = harness();

        assert!(h.session.login(DEMO_EMAIL, DEMO_PASSWORD).await);

        assert_eq!(h.session.current_user(), Some(demo_user()));
        assert_eq!(h.session.token().as_deref(), Some("mock-jwt-token"));
        assert!(h.storage.get(USER_KEY).unwrap().is_some());
        assert_eq!(
            h.storage.get(TOKEN_KEY).unwrap().as_deref(),
            Some("mock-jwt-token")
        );

        let toast = h.notifier.last().unwrap();
        assert_eq!(toast.title, "Login successful");
        assert_eq!(toast.description, "Welcome back!");
        assert_eq!(toast.variant, ToastVariant::Default);
    }

    #[tokio::test]
    async fn wrong_password_shows_server_message() {
        let h = harness();

        assert!(!h.session.login(DEMO_EMAIL, "nope").await);

        assert!(!h.session.is_authenticated());
        assert_eq!(h.storage.get(TOKEN_KEY).unwrap(), None);
        let toast = h.notifier.last().unwrap();
        assert_eq!(toast.title, "Login failed");
        assert_eq!(toast.description, "Invalid email or password");
        assert!(toast.is_destructive());
    }

    #[tokio::test]
    async fn transport_failure_shows_generic_message() {
        let h = harness();

        assert!(!h.session.login(UNREACHABLE_EMAIL, DEMO_PASSWORD).await);

        let toast = h.notifier.last().unwrap();
        assert_eq!(toast.description, "An error occurred during login");
    }

    #[tokio::test]
    async fn one_api_call_per_attempt() {
        let h = harness();
        h.session.login(DEMO_EMAIL, "nope").await;
        assert_eq!(h.api.calls(), vec!["login user@example.com".to_string()]);
    }

    #[tokio::test]
    async fn register_duplicate_email_is_rejected() {
        let h = harness();

        assert!(!h.session.register("Jane", DEMO_EMAIL, "pw").await);

        let toast = h.notifier.last().unwrap();
        assert_eq!(toast.title, "Registration failed");
        assert_eq!(toast.description, "Email is already in use");
        assert!(h.session.current_user().is_none());
    }

    #[tokio::test]
    async fn register_new_email_logs_in() {
        let h = harness();

        assert!(h.session.register("Jane", "jane@example.com", "pw").await);

        let user = h.session.current_user().unwrap();
        assert_eq!(user.id, "new-user-123");
        assert_eq!(user.name, "Jane");
        assert_eq!(h.notifier.last().unwrap().title, "Registration successful");
    }

    #[tokio::test]
    async fn logout_clears_memory_and_storage() {
        let h = harness();
        h.session.login(DEMO_EMAIL, DEMO_PASSWORD).await;

        h.session.logout();

        assert!(!h.session.is_authenticated());
        assert_eq!(h.storage.get(USER_KEY).unwrap(), None);
        assert_eq!(h.storage.get(TOKEN_KEY).unwrap(), None);
        assert_eq!(h.notifier.last().unwrap().title, "Logged out");
    }

    #[test]
    fn logout_without_session_still_succeeds() {
        let h = harness();
        h.session.logout();
        assert!(!h.session.is_authenticated());
        assert_eq!(h.notifier.toasts().len(), 1);
    }

    #[test]
    fn restore_picks_up_persisted_pair() {
        let storage = Arc::new(MemoryStore::new());
        save_session(storage.as_ref(), &demo_user(), "tok").unwrap();

        let session = SessionStore::restore(
            Arc::new(FakeApi::default()),
            storage,
            Arc::new(RecordingNotifier::default()),
        );

        assert_eq!(session.current_user(), Some(demo_user()));
        assert_eq!(session.token().as_deref(), Some("tok"));
        assert!(!session.is_pending());
    }

    #[tokio::test]
    async fn storage_failure_fails_login_and_keeps_memory_clear() {
        let notifier = Arc::new(RecordingNotifier::default());
        let session = SessionStore::restore(
            Arc::new(FakeApi::default()),
            Arc::new(BrokenStore),
            notifier.clone(),
        );

        assert!(!session.login(DEMO_EMAIL, DEMO_PASSWORD).await);

        assert!(!session.is_authenticated());
        let toast = notifier.last().unwrap();
        assert_eq!(toast.title, "Login failed");
        assert_eq!(toast.description, "An error occurred during login");
    }

    #[test]
    fn logout_tolerates_storage_failure() {
        let notifier = Arc::new(RecordingNotifier::default());
        let session = SessionStore::restore(
            Arc::new(FakeApi::default()),
            Arc::new(BrokenStore),
            notifier.clone(),
        );

        session.logout();
        assert_eq!(notifier.last().unwrap().title, "Logged out");
    }

    #[tokio::test]
    async fn forgot_password_reports_server_message() {
        let h = harness();

        assert!(h.session.forgot_password(DEMO_EMAIL).await);
        let toast = h.notifier.last().unwrap();
        assert_eq!(toast.title, "Password reset email sent");
        assert_eq!(
            toast.description,
            "Password reset link has been sent to your email"
        );

        assert!(!h.session.forgot_password("").await);
        let toast = h.notifier.last().unwrap();
        assert_eq!(toast.title, "Request failed");
        assert_eq!(toast.description, "Email is required");
    }

    #[tokio::test]
    async fn reset_password_requires_token() {
        let h = harness();

        assert!(h.session.reset_password("abc", "new-pw").await);
        assert_eq!(
            h.notifier.last().unwrap().title,
            "Password reset successful"
        );

        assert!(!h.session.reset_password("", "new-pw").await);
        let toast = h.notifier.last().unwrap();
        assert_eq!(toast.title, "Password reset failed");
        assert_eq!(toast.description, "Token and password are required");
    }

    #[tokio::test]
    async fn pending_is_cleared_after_each_operation() {
        let h = harness();
        assert!(!h.session.is_pending());

        h.session.login(DEMO_EMAIL, "nope").await;
        assert!(!h.session.is_pending());

        h.session.login(DEMO_EMAIL, DEMO_PASSWORD).await;
        assert_matches!(
            h.session.snapshot(),
            Session {
                user: Some(_),
                pending: false
            }
        );
    }

    #[tokio::test]
    async fn pending_is_true_while_login_in_flight() {
        let api = Arc::new(FakeApi::default());
        api.hold_login.store(true, Ordering::SeqCst);
        let session = Arc::new(SessionStore::restore(
            api.clone(),
            Arc::new(MemoryStore::new()),
            Arc::new(RecordingNotifier::default()),
        ));

        let login = {
            let session = session.clone();
            tokio::spawn(async move { session.login(DEMO_EMAIL, DEMO_PASSWORD).await })
        };
        for _ in 0..100 {
            if session.is_pending() {
                break;
            }
            tokio::task::yield_now().await;
        }

        assert!(session.is_pending());
        assert!(!session.is_authenticated());

        api.release.notify_one();
        assert!(login.await.unwrap());
        assert!(!session.is_pending());
        assert!(session.is_authenticated());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn racing_registrations_agree_in_memory_and_storage() {
        let storage = Arc::new(SlowStore::new("alice", Duration::from_millis(300)));
        let session = Arc::new(SessionStore::restore(
            Arc::new(FakeApi::default()),
            storage.clone(),
            Arc::new(RecordingNotifier::default()),
        ));

        let first = {
            let session = session.clone();
            tokio::spawn(async move { session.register("alice", "alice@example.com", "pw").await })
        };
        tokio::time::sleep(Duration::from_millis(50)).await;
        let second = {
            let session = session.clone();
            tokio::spawn(async move { session.register("bob", "bob@example.com", "pw").await })
        };
        assert!(first.await.unwrap());
        assert!(second.await.unwrap());

        let (stored_user, _) = load_session(storage.as_ref()).unwrap().unwrap();
        let current = session.current_user().unwrap();
        assert_eq!(current, stored_user);
        assert_eq!(current.name, "bob");
    }

    #[test]
    fn logout_with_tracing_notifier() {
        let storage = Arc::new(MemoryStore::new());
        save_session(storage.as_ref(), &demo_user(), "tok").unwrap();
        let session = SessionStore::restore(
            Arc::new(FakeApi::default()),
            storage.clone(),
            Arc::new(TracingNotifier),
        );

        session.logout();

        assert!(!session.is_authenticated());
        assert!(load_session(storage.as_ref()).unwrap().is_none());
    }
}
