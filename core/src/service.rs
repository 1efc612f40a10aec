// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;
use gatepass_client::{
    ApiError, CheckInReceipt, Event, EventClient, RegistrationStatus, UserProfile,
};
use gatepass_payload::EventId;

/// The backend operations the scan flow relies on.
#[async_trait]
pub trait EventService: Send + Sync {
    /// Fetches one event.
    async fn get_event(&self, event_id: &EventId) -> Result<Event, ApiError>;

    /// Whether the current user is registered for an event.
    async fn registration_status(&self, event_id: &EventId)
    -> Result<RegistrationStatus, ApiError>;

    /// Registers the current user for an event.
    async fn register(&self, event_id: &EventId) -> Result<(), ApiError>;

    /// Checks a user in to an event.
    async fn check_in(&self, event_id: &EventId, user_id: u64)
    -> Result<CheckInReceipt, ApiError>;

    /// The current user's profile.
    async fn profile(&self) -> Result<UserProfile, ApiError>;
}

#[async_trait]
impl EventService for EventClient {
    async fn get_event(&self, event_id: &EventId) -> Result<Event, ApiError> {
        EventClient::get_event(self, event_id).await
    }

    async fn registration_status(
        &self,
        event_id: &EventId,
    ) -> Result<RegistrationStatus, ApiError> {
        EventClient::registration_status(self, event_id).await
    }

    async fn register(&self, event_id: &EventId) -> Result<(), ApiError> {
        EventClient::register(self, event_id).await.map(|_| ())
    }

    async fn check_in(&self, event_id: &EventId, user_id: u64) -> Result<CheckInReceipt, ApiError> {
        EventClient::check_in(self, event_id, user_id).await
    }

    async fn profile(&self) -> Result<UserProfile, ApiError> {
        EventClient::profile(self).await
    }
}
