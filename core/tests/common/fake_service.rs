// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! An [`EventService`] backed by canned responses.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use gatepass_core::{
    ApiError, CheckInReceipt, Event, EventId, EventService, RegistrationStatus, UserProfile,
};

/// A backend call as seen by the fake.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    GetEvent(String),
    RegistrationStatus(String),
    Register(String),
    CheckIn(String, u64),
    Profile,
}

/// In-memory event service.
///
/// Events not added with [`FakeService::with_event`] are reported as not
/// found. Every call is recorded in order.
#[derive(Debug, Default)]
pub struct FakeService {
    events: HashMap<String, Event>,
    registered: HashMap<String, bool>,
    status_error: Option<ApiError>,
    register_error: Option<ApiError>,
    receipt: Option<CheckInReceipt>,
    check_in_error: Option<ApiError>,
    profile: Option<UserProfile>,
    profile_error: Option<ApiError>,
    calls: Mutex<Vec<Call>>,
}

#[allow(dead_code)]
impl FakeService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_event(mut self, event: Event, registered: bool) -> Self {
        self.registered
            .insert(event.id.as_str().to_string(), registered);
        self.events.insert(event.id.as_str().to_string(), event);
        self
    }

    pub fn with_status_error(mut self, error: ApiError) -> Self {
        self.status_error = Some(error);
        self
    }

    pub fn with_register_error(mut self, error: ApiError) -> Self {
        self.register_error = Some(error);
        self
    }

    pub fn with_receipt(mut self, receipt: CheckInReceipt) -> Self {
        self.receipt = Some(receipt);
        self
    }

    pub fn with_check_in_error(mut self, error: ApiError) -> Self {
        self.check_in_error = Some(error);
        self
    }

    pub fn with_profile(mut self, id: u64) -> Self {
        self.profile = Some(UserProfile {
            id,
            username: "alice".to_string(),
            email: None,
            first_name: None,
            last_name: None,
        });
        self
    }

    pub fn with_profile_error(mut self, error: ApiError) -> Self {
        self.profile_error = Some(error);
        self
    }

    /// All calls received so far.
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

// `ApiError` is not `Clone`; rebuild an equivalent value for each call.
fn replay(error: &ApiError) -> ApiError {
    match error {
        ApiError::Unauthorized(m) => ApiError::Unauthorized(m.clone()),
        ApiError::NotFound(m) => ApiError::NotFound(m.clone()),
        ApiError::BadRequest(m) => ApiError::BadRequest(m.clone()),
        ApiError::Http(m) => ApiError::Http(m.clone()),
        other => ApiError::Http(other.to_string()),
    }
}

#[async_trait]
impl EventService for FakeService {
    async fn get_event(&self, event_id: &EventId) -> Result<Event, ApiError> {
        self.record(Call::GetEvent(event_id.to_string()));
        self.events
            .get(event_id.as_str())
            .cloned()
            .ok_or_else(|| ApiError::NotFound(format!("/events/{event_id}/")))
    }

    async fn registration_status(
        &self,
        event_id: &EventId,
    ) -> Result<RegistrationStatus, ApiError> {
        self.record(Call::RegistrationStatus(event_id.to_string()));
        if let Some(e) = &self.status_error {
            return Err(replay(e));
        }
        Ok(RegistrationStatus {
            is_registered: self
                .registered
                .get(event_id.as_str())
                .copied()
                .unwrap_or(false),
        })
    }

    async fn register(&self, event_id: &EventId) -> Result<(), ApiError> {
        self.record(Call::Register(event_id.to_string()));
        match &self.register_error {
            Some(e) => Err(replay(e)),
            None => Ok(()),
        }
    }

    async fn check_in(&self, event_id: &EventId, user_id: u64) -> Result<CheckInReceipt, ApiError> {
        self.record(Call::CheckIn(event_id.to_string(), user_id));
        if let Some(e) = &self.check_in_error {
            return Err(replay(e));
        }
        Ok(self.receipt.clone().unwrap_or(CheckInReceipt {
            success: true,
            message: None,
            attendee: None,
        }))
    }

    async fn profile(&self) -> Result<UserProfile, ApiError> {
        self.record(Call::Profile);
        if let Some(e) = &self.profile_error {
            return Err(replay(e));
        }
        self.profile
            .clone()
            .ok_or_else(|| ApiError::NotFound("/auth/profile/".to_string()))
    }
}
