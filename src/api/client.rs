//! API client for communicating with the hotel-booking REST API.
//!
//! This module provides the `ApiClient` struct for the session endpoints
//! (register, login, token refresh, current user) and the hotel, room, and
//! reservation CRUD endpoints.
//!
//! The bearer token is read from the credential store and attached in one
//! place (`auth_headers`), so a login or logout elsewhere in the process
//! takes effect on the next request without rebuilding the client.

use std::time::Duration;

use reqwest::{header, Client};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::{debug, warn};

use crate::auth::{CredentialKey, CredentialStore};
use crate::models::{
    Hotel, NewHotel, NewReservation, NewRoom, Registration, Reservation, Room, TokenPair, User,
};

use super::ApiError;

/// HTTP request timeout in seconds.
/// 30s allows for slow API responses while failing fast enough for good UX.
const REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Deserialize)]
struct RefreshResponse {
    access: String,
}

/// API client for the hotel-booking backend.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    credentials: CredentialStore,
}

impl ApiClient {
    /// Create a new API client against the given base URL.
    pub fn new(base_url: impl Into<String>, credentials: CredentialStore) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }

        Ok(Self {
            client,
            base_url,
            credentials,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Bearer header built from the credential store at request time.
    /// With no stored token the request goes out unauthenticated and the
    /// backend decides whether that is acceptable.
    fn auth_headers(&self) -> header::HeaderMap {
        let mut headers = header::HeaderMap::new();
        if let Some(token) = self.credentials.get(CredentialKey::AccessToken) {
            match header::HeaderValue::from_str(&format!("Bearer {}", token)) {
                Ok(value) => {
                    headers.insert(header::AUTHORIZATION, value);
                }
                Err(e) => {
                    // A token with control characters cannot form a header;
                    // the backend will reject the bare request instead.
                    warn!(error = %e, "Stored access token is not header-safe");
                }
            }
        }
        headers
    }

    /// Check if response is successful, returning an error with body if not.
    async fn check_response(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        if response.status().is_success() {
            Ok(response)
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::from_status(status, &body))
        }
    }

    async fn parse_json<T: DeserializeOwned>(
        response: reqwest::Response,
        url: &str,
    ) -> Result<T, ApiError> {
        let text = response.text().await?;
        serde_json::from_str(&text).map_err(|e| {
            debug!(url = url, error = %e, "Failed to parse JSON response");
            ApiError::invalid_json(e, &text)
        })
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.url(path);
        let response = self
            .client
            .get(&url)
            .headers(self.auth_headers())
            .send()
            .await?;
        let response = Self::check_response(response).await?;
        Self::parse_json(response, &url).await
    }

    async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = self.url(path);
        let response = self
            .client
            .post(&url)
            .headers(self.auth_headers())
            .json(body)
            .send()
            .await?;
        let response = Self::check_response(response).await?;
        Self::parse_json(response, &url).await
    }

    async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = self.url(path);
        let response = self
            .client
            .put(&url)
            .headers(self.auth_headers())
            .json(body)
            .send()
            .await?;
        let response = Self::check_response(response).await?;
        Self::parse_json(response, &url).await
    }

    async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let url = self.url(path);
        let response = self
            .client
            .delete(&url)
            .headers(self.auth_headers())
            .send()
            .await?;
        Self::check_response(response).await?;
        Ok(())
    }

    // ===== Session Endpoints =====

    /// Create an account. A 2xx response carries no data the client needs;
    /// a 400 carries field-keyed validation messages.
    pub async fn register(&self, registration: &Registration) -> Result<(), ApiError> {
        let url = self.url("register/");
        let response = self
            .client
            .post(&url)
            .headers(self.auth_headers())
            .json(registration)
            .send()
            .await?;
        Self::check_response(response).await?;
        Ok(())
    }

    /// Exchange credentials for an access/refresh token pair.
    pub async fn login(&self, username: &str, password: &str) -> Result<TokenPair, ApiError> {
        let body = serde_json::json!({
            "username": username,
            "password": password,
        });
        self.post("token/", &body).await
    }

    /// Exchange a refresh token for a fresh access token.
    pub async fn refresh(&self, refresh_token: &str) -> Result<String, ApiError> {
        let body = serde_json::json!({ "refresh": refresh_token });
        let response: RefreshResponse = self.post("token/refresh/", &body).await?;
        Ok(response.access)
    }

    /// Fetch the account behind the attached bearer token.
    pub async fn current_user(&self) -> Result<User, ApiError> {
        self.get("me/").await
    }

    // ===== Hotels =====

    pub async fn hotels(&self) -> Result<Vec<Hotel>, ApiError> {
        self.get("hotels/").await
    }

    pub async fn hotel(&self, id: i64) -> Result<Hotel, ApiError> {
        self.get(&format!("hotels/{}/", id)).await
    }

    pub async fn create_hotel(&self, hotel: &NewHotel) -> Result<Hotel, ApiError> {
        self.post("hotels/", hotel).await
    }

    pub async fn update_hotel(&self, id: i64, hotel: &NewHotel) -> Result<Hotel, ApiError> {
        self.put(&format!("hotels/{}/", id), hotel).await
    }

    pub async fn delete_hotel(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&format!("hotels/{}/", id)).await
    }

    // ===== Rooms =====

    pub async fn rooms(&self) -> Result<Vec<Room>, ApiError> {
        self.get("rooms/").await
    }

    pub async fn create_room(&self, room: &NewRoom) -> Result<Room, ApiError> {
        self.post("rooms/", room).await
    }

    pub async fn update_room(&self, id: i64, room: &NewRoom) -> Result<Room, ApiError> {
        self.put(&format!("rooms/{}/", id), room).await
    }

    pub async fn delete_room(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&format!("rooms/{}/", id)).await
    }

    // ===== Reservations =====

    /// Fetch the calling user's reservations. The backend scopes the list
    /// to the bearer token's account.
    pub async fn reservations(&self) -> Result<Vec<Reservation>, ApiError> {
        self.get("reservations/").await
    }

    pub async fn create_reservation(
        &self,
        reservation: &NewReservation,
    ) -> Result<Reservation, ApiError> {
        self.post("reservations/", reservation).await
    }
}
