//! Collaborator traits for the marketplace API and their HTTP
//! implementation.
//!
//! [`AuthApi`] and [`FavoritesApi`] are the seams the stores talk to.
//! [`HttpApi`] implements both against the mock server using [`reqwest`].

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use stayhub_core::types::PropertyId;
use stayhub_core::wire::{
    AuthGrant, BookingsResponse, FailureResponse, FavoriteRequest, FavoritesResponse,
    ForgotPasswordRequest, LoginRequest, MessageResponse, ProfileResponse, PropertiesResponse,
    PropertyResponse, RegisterRequest, ResetPasswordRequest,
};
use stayhub_core::user::ProfileUpdate;

use crate::config::ClientConfig;
use crate::error::ClientError;

/// Authentication endpoints used by the session store.
#[async_trait]
pub trait AuthApi: Send + Sync {
    async fn login(&self, request: &LoginRequest) -> Result<AuthGrant, ClientError>;

    async fn register(&self, request: &RegisterRequest) -> Result<AuthGrant, ClientError>;

    async fn forgot_password(
        &self,
        request: &ForgotPasswordRequest,
    ) -> Result<MessageResponse, ClientError>;

    async fn reset_password(
        &self,
        request: &ResetPasswordRequest,
    ) -> Result<MessageResponse, ClientError>;
}

/// Favorites endpoints used by the favorites store.
#[async_trait]
pub trait FavoritesApi: Send + Sync {
    async fn favorites(&self) -> Result<FavoritesResponse, ClientError>;

    async fn add_favorite(&self, property_id: PropertyId) -> Result<MessageResponse, ClientError>;

    async fn remove_favorite(
        &self,
        property_id: PropertyId,
    ) -> Result<MessageResponse, ClientError>;
}

/// HTTP client for the StayHub mock API.
pub struct HttpApi {
    client: reqwest::Client,
    api_url: String,
}

impl HttpApi {
    /// Create a client for the API rooted at `api_url`,
    /// e.g. `http://localhost:3000/api`.
    pub fn new(api_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), api_url)
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, api_url: impl Into<String>) -> Self {
        Self {
            client,
            api_url: api_url.into(),
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.api_url.clone())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.api_url)
    }

    /// Fetch the demo user's full profile.
    pub async fn profile(&self) -> Result<ProfileResponse, ClientError> {
        let response = self.client.get(self.url("/user/profile")).send().await?;
        Self::parse_response(response).await
    }

    /// Submit a profile update; the server echoes the merged profile.
    pub async fn update_profile(
        &self,
        update: &ProfileUpdate,
    ) -> Result<ProfileResponse, ClientError> {
        let response = self
            .client
            .put(self.url("/user/profile"))
            .json(update)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    pub async fn bookings(&self) -> Result<BookingsResponse, ClientError> {
        let response = self.client.get(self.url("/user/bookings")).send().await?;
        Self::parse_response(response).await
    }

    /// List catalog entries. `query` holds raw query pairs such as
    /// `("category", "cabins")` or `("amenities", "Wifi,Pool")`.
    pub async fn properties(
        &self,
        query: &[(&str, &str)],
    ) -> Result<PropertiesResponse, ClientError> {
        let response = self
            .client
            .get(self.url("/properties"))
            .query(query)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    pub async fn property(&self, id: PropertyId) -> Result<PropertyResponse, ClientError> {
        let response = self
            .client
            .get(self.url(&format!("/properties/{id}")))
            .send()
            .await?;
        Self::parse_response(response).await
    }

    async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        B: serde::Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.client.post(self.url(path)).json(body).send().await?;
        Self::parse_response(response).await
    }

    // -- private helpers ----------------------------------------------------

    /// Turn a non-2xx response into [`ClientError::Rejected`] when the body
    /// carries a failure message, or [`ClientError::Unexpected`] otherwise.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<unreadable body>".to_string());

        match serde_json::from_str::<FailureResponse>(&body) {
            Ok(failure) => Err(ClientError::Rejected {
                status: status.as_u16(),
                message: failure.message,
            }),
            Err(_) => Err(ClientError::Unexpected {
                status: status.as_u16(),
                body,
            }),
        }
    }

    /// Parse a successful JSON response body into the expected type.
    async fn parse_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl AuthApi for HttpApi {
    async fn login(&self, request: &LoginRequest) -> Result<AuthGrant, ClientError> {
        self.post("/auth/login", request).await
    }

    async fn register(&self, request: &RegisterRequest) -> Result<AuthGrant, ClientError> {
        self.post("/auth/register", request).await
    }

    async fn forgot_password(
        &self,
        request: &ForgotPasswordRequest,
    ) -> Result<MessageResponse, ClientError> {
        self.post("/auth/forgot-password", request).await
    }

    async fn reset_password(
        &self,
        request: &ResetPasswordRequest,
    ) -> Result<MessageResponse, ClientError> {
        self.post("/auth/reset-password", request).await
    }
}

#[async_trait]
impl FavoritesApi for HttpApi {
    async fn favorites(&self) -> Result<FavoritesResponse, ClientError> {
        let response = self.client.get(self.url("/user/favorites")).send().await?;
        Self::parse_response(response).await
    }

    async fn add_favorite(&self, property_id: PropertyId) -> Result<MessageResponse, ClientError> {
        let request = FavoriteRequest {
            property_id: Some(property_id),
        };
        self.post("/user/favorites", &request).await
    }

    async fn remove_favorite(
        &self,
        property_id: PropertyId,
    ) -> Result<MessageResponse, ClientError> {
        let response = self
            .client
            .delete(self.url("/user/favorites"))
            .query(&[("propertyId", property_id)])
            .send()
            .await?;
        Self::parse_response(response).await
    }
}
