// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Test data factories for integration tests.

use gatepass_core::{ApiConfig, AuthMethod, CheckInReceipt, Config, Event, EventId};

/// Creates a test configuration pointing at `base_url`.
///
/// # Example
///
/// ```ignore
/// let config = test_config("http://127.0.0.1:8000/api", Some(7));
/// ```
#[must_use]
pub fn test_config(base_url: &str, user_id: Option<u64>) -> Config {
    let mut config = Config::new(ApiConfig {
        base_url: base_url.to_string(),
        auth: AuthMethod::Token {
            token: "test-token".to_string(),
        },
        ..Default::default()
    });
    config.user_id = user_id;
    config
}

/// Parses an event id, panicking on malformed input.
#[must_use]
pub fn event_id(id: &str) -> EventId {
    EventId::new(id).unwrap()
}

/// Creates an event with the given id and title.
#[must_use]
pub fn test_event(id: &str, title: &str) -> Event {
    Event {
        id: event_id(id),
        title: title.to_string(),
        description: None,
        date: Some("2026-11-03T09:00:00Z".to_string()),
        location: Some("Hall A".to_string()),
        status: Some("published".to_string()),
        is_registered: None,
        registrations_count: None,
        max_attendees: None,
        image: None,
    }
}

/// Creates a check-in receipt.
#[must_use]
pub fn test_receipt(success: bool, message: Option<&str>) -> CheckInReceipt {
    CheckInReceipt {
        success,
        message: message.map(ToString::to_string),
        attendee: None,
    }
}
