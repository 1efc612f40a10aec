// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Event backend client.

use std::sync::Arc;

use gatepass_payload::EventId;
use reqwest::Method;

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::http::HttpClient;
use crate::types::{
    AgendaDay, Announcement, CheckInReceipt, Event, EventLocation, LoginResponse, NewAccount,
    ProfileUpdate, RegistrationStatus, Session, SignUpResponse, Speaker, UserProfile,
};

/// Client for the event backend.
///
/// # Example
///
/// ```ignore
/// use gatepass_client::{ApiConfig, AuthMethod, EventClient};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = ApiConfig {
///     base_url: "https://events.example.com/api".to_string(),
///     auth: AuthMethod::Token {
///         token: "secret".to_string(),
///     },
///     ..Default::default()
/// };
///
/// let client = EventClient::new(config)?;
/// let events = client.list_events().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct EventClient {
    http: Arc<HttpClient>,
}

/// Which slice of the event list to fetch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EventScope {
    /// Every visible event.
    #[default]
    All,
    /// Events organized by the current user.
    Mine,
    /// Events the current user registered for.
    Registered,
    /// Events that have not started yet.
    Upcoming,
    /// Upcoming events the current user registered for.
    UpcomingRegistered,
}

impl EventScope {
    const fn path(self) -> &'static str {
        match self {
            Self::All => "/events/",
            Self::Mine => "/events/my_events/",
            Self::Registered => "/events/registered_events/",
            Self::Upcoming => "/events/upcoming/",
            Self::UpcomingRegistered => "/events/upcoming_registered/",
        }
    }
}

impl EventClient {
    /// Creates a new client.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or HTTP client initialization fails.
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let http = HttpClient::new(config)?;
        Ok(Self {
            http: Arc::new(http),
        })
    }

    /// Logs in with a username and password and returns the API token.
    ///
    /// # Errors
    ///
    /// Returns an error if the credentials are rejected or the request fails.
    #[tracing::instrument(skip(self, password))]
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let path = "/auth/login/";
        let body = serde_json::json!({ "username": username, "password": password });
        let req = self.http.build_request(Method::POST, path).json(&body);
        self.http.execute_json(path, req).await
    }

    /// Fetches the current user's profile.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the user is not authenticated.
    #[tracing::instrument(skip(self))]
    pub async fn profile(&self) -> Result<UserProfile, ApiError> {
        self.get("/auth/profile/").await
    }

    /// Creates a new account.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::BadRequest`] if the backend rejects a field, e.g. the
    /// email address is taken.
    #[tracing::instrument(skip(self, account), fields(username = %account.username))]
    pub async fn sign_up(&self, account: &NewAccount) -> Result<SignUpResponse, ApiError> {
        let path = "/auth/register/";
        let req = self.http.build_request(Method::POST, path).json(account);
        self.http.execute_json(path, req).await
    }

    /// Changes fields of the current user's profile and returns the updated profile.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects a field or the request fails.
    #[tracing::instrument(skip(self))]
    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<UserProfile, ApiError> {
        let path = "/auth/profile/";
        let req = self.http.build_request(Method::PATCH, path).json(update);
        self.http.execute_json(path, req).await
    }

    /// Changes the current user's password.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::BadRequest`] if the current password is wrong or the
    /// new one is refused.
    #[tracing::instrument(skip_all)]
    pub async fn change_password(&self, current: &str, new: &str) -> Result<(), ApiError> {
        let path = "/auth/change-password/";
        let body = serde_json::json!({ "current_password": current, "new_password": new });
        let req = self.http.build_request(Method::POST, path).json(&body);
        self.http.execute(path, req).await?;
        Ok(())
    }

    /// Lists announcements for the events the current user registered for.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[tracing::instrument(skip(self))]
    pub async fn announcements(&self) -> Result<Vec<Announcement>, ApiError> {
        self.get("/auth/announcements/").await
    }

    /// Lists every visible event.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn list_events(&self) -> Result<Vec<Event>, ApiError> {
        self.list_events_in(EventScope::All).await
    }

    /// Lists events in the given scope.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[tracing::instrument(skip(self))]
    pub async fn list_events_in(&self, scope: EventScope) -> Result<Vec<Event>, ApiError> {
        self.get(scope.path()).await
    }

    /// Fetches one event.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] if the event does not exist.
    #[tracing::instrument(skip(self), fields(event_id = %event_id))]
    pub async fn get_event(&self, event_id: &EventId) -> Result<Event, ApiError> {
        self.get(&format!("/events/{event_id}/")).await
    }

    /// Whether the current user is registered for an event.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails; not every backend has this endpoint.
    #[tracing::instrument(skip(self), fields(event_id = %event_id))]
    pub async fn registration_status(
        &self,
        event_id: &EventId,
    ) -> Result<RegistrationStatus, ApiError> {
        self.get(&format!("/events/{event_id}/registration_status/"))
            .await
    }

    /// Registers the current user for an event.
    ///
    /// Returns whatever the backend sends back, its shape varies between versions.
    ///
    /// # Errors
    ///
    /// Returns an error if registration is refused, e.g. the user is already
    /// registered or the event is full.
    #[tracing::instrument(skip(self), fields(event_id = %event_id))]
    pub async fn register(&self, event_id: &EventId) -> Result<serde_json::Value, ApiError> {
        let path = format!("/events/{event_id}/register/");
        let req = self
            .http
            .build_request(Method::POST, &path)
            .json(&serde_json::json!({}));
        let resp = self.http.execute(&path, req).await?;
        let bytes = resp.bytes().await?;
        if bytes.is_empty() {
            return Ok(serde_json::Value::Null);
        }
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Cancels the current user's registration.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[tracing::instrument(skip(self), fields(event_id = %event_id))]
    pub async fn unregister(&self, event_id: &EventId) -> Result<(), ApiError> {
        let path = format!("/events/{event_id}/unregister/");
        let req = self.http.build_request(Method::DELETE, &path);
        self.http.execute(&path, req).await?;
        Ok(())
    }

    /// Checks a registered user in to an event.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] if the user has no registration, or
    /// [`ApiError::BadRequest`] if the backend refuses (e.g. already checked in).
    #[tracing::instrument(skip(self), fields(event_id = %event_id))]
    pub async fn check_in(
        &self,
        event_id: &EventId,
        user_id: u64,
    ) -> Result<CheckInReceipt, ApiError> {
        let path = format!("/events/{event_id}/check_in/");
        let req = self
            .http
            .build_request(Method::POST, &path)
            .json(&serde_json::json!({ "user_id": user_id }));
        self.http.execute_json(&path, req).await
    }

    /// Fetches the agenda of an event, one entry per day.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[tracing::instrument(skip(self), fields(event_id = %event_id))]
    pub async fn agenda(&self, event_id: &EventId) -> Result<Vec<AgendaDay>, ApiError> {
        self.get(&format!("/events/{event_id}/agenda/")).await
    }

    /// Fetches the venue and maps of an event.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] if the event or its venue details do not exist.
    #[tracing::instrument(skip(self), fields(event_id = %event_id))]
    pub async fn location(&self, event_id: &EventId) -> Result<EventLocation, ApiError> {
        self.get(&format!("/events/{event_id}/location/")).await
    }

    /// Fetches the sessions of an event.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[tracing::instrument(skip(self), fields(event_id = %event_id))]
    pub async fn sessions(&self, event_id: &EventId) -> Result<Vec<Session>, ApiError> {
        self.get(&format!("/events/{event_id}/sessions/")).await
    }

    /// Fetches the speakers of an event.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[tracing::instrument(skip(self), fields(event_id = %event_id))]
    pub async fn speakers(&self, event_id: &EventId) -> Result<Vec<Speaker>, ApiError> {
        self.get(&format!("/events/{event_id}/speakers/")).await
    }

    async fn get<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let req = self.http.build_request(Method::GET, path);
        self.http.execute_json(path, req).await
    }
}
