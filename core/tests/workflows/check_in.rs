// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Check-in links scanned at the door.

use gatepass_core::{ApiError, Gate, GateError, ScanInput, ScanOutcome};

use crate::common::{Call, FakeService, event_id, test_config, test_receipt};

const LINK: &str = "https://events.example.com/api/events/42/check-in";

#[tokio::test]
async fn check_in_uses_configured_user_id() {
    // Arrange
    let gate = Gate::new(test_config("http://localhost", Some(7)), FakeService::new());

    // Act
    let outcome = gate.scan(&ScanInput::camera(LINK)).await.unwrap();

    // Assert
    assert!(matches!(
        outcome,
        ScanOutcome::CheckedIn { ref event_id, .. } if event_id.as_str() == "42"
    ));
    assert_eq!(
        gate.service().calls(),
        vec![Call::CheckIn("42".to_string(), 7)]
    );
}

#[tokio::test]
async fn check_in_falls_back_to_profile() {
    // Arrange
    let service = FakeService::new().with_profile(99);
    let gate = Gate::new(test_config("http://localhost", None), service);

    // Act
    let outcome = gate.scan(&ScanInput::camera(LINK)).await.unwrap();

    // Assert
    assert!(matches!(outcome, ScanOutcome::CheckedIn { .. }));
    assert_eq!(
        gate.service().calls(),
        vec![Call::Profile, Call::CheckIn("42".to_string(), 99)]
    );
}

#[tokio::test]
async fn check_in_without_user_id() {
    let gate = Gate::new(test_config("http://localhost", None), FakeService::new());

    let err = gate.scan(&ScanInput::camera(LINK)).await.unwrap_err();

    assert!(matches!(err, GateError::MissingUserId));
    assert_eq!(err.to_string(), "User ID not found. Please log in again.");
    assert_eq!(gate.service().calls(), vec![Call::Profile]);
}

#[tokio::test]
async fn check_in_with_expired_session() {
    let service =
        FakeService::new().with_profile_error(ApiError::Unauthorized("expired".to_string()));
    let gate = Gate::new(test_config("http://localhost", None), service);

    let err = gate.scan(&ScanInput::camera(LINK)).await.unwrap_err();

    assert_eq!(
        err.to_string(),
        "Authentication failed. Please log in and try again."
    );
}

#[tokio::test]
async fn check_in_rejected_by_backend() {
    let service = FakeService::new().with_receipt(test_receipt(false, Some("Event has ended")));
    let gate = Gate::new(test_config("http://localhost", Some(7)), service);

    let err = gate.scan(&ScanInput::camera(LINK)).await.unwrap_err();

    assert!(matches!(err, GateError::CheckInRejected(ref m) if m == "Event has ended"));
    assert_eq!(err.to_string(), "Check-in failed: Event has ended");
}

#[tokio::test]
async fn check_in_when_not_registered() {
    let service =
        FakeService::new().with_check_in_error(ApiError::NotFound("/events/42/".to_string()));
    let gate = Gate::new(test_config("http://localhost", Some(7)), service);

    let err = gate.scan(&ScanInput::camera(LINK)).await.unwrap_err();

    assert_eq!(
        err.to_string(),
        "Registration not found. Please ensure you are registered for this event."
    );
}

#[tokio::test]
async fn check_in_directly_by_id() {
    let gate = Gate::new(test_config("http://localhost", Some(3)), FakeService::new());

    let outcome = gate.check_in(&event_id("8")).await.unwrap();

    assert!(matches!(outcome, ScanOutcome::CheckedIn { .. }));
    assert_eq!(gate.service().calls(), vec![Call::CheckIn("8".to_string(), 3)]);
}

#[tokio::test]
async fn check_in_link_never_triggers_registration() {
    let gate = Gate::new(test_config("http://localhost", Some(7)), FakeService::new());

    gate.scan(&ScanInput::camera(LINK)).await.unwrap();

    assert!(
        gate.service()
            .calls()
            .iter()
            .all(|c| matches!(c, Call::CheckIn(..)))
    );
}
