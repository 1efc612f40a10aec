// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Registration flow: event lookup, status check, confirmation.

use gatepass_core::{ApiError, Gate, GateError, ScanInput, ScanOutcome};

use crate::common::{Call, FakeService, event_id, test_config, test_event};

fn gate(service: FakeService) -> Gate<FakeService> {
    Gate::new(test_config("http://localhost", Some(7)), service)
}

#[tokio::test]
async fn registration_link_awaits_confirmation() {
    // Arrange
    let gate = gate(FakeService::new().with_event(test_event("17", "RustConf"), false));

    // Act
    let outcome = gate
        .scan(&ScanInput::camera("https://events.example.com/register/17/"))
        .await
        .unwrap();

    // Assert
    match outcome {
        ScanOutcome::AwaitingConfirmation { event, agenda } => {
            assert_eq!(event.title, "RustConf");
            assert!(!agenda);
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
    assert_eq!(
        gate.service().calls(),
        vec![
            Call::GetEvent("17".to_string()),
            Call::RegistrationStatus("17".to_string())
        ]
    );
}

#[tokio::test]
async fn registration_already_registered() {
    let gate = gate(FakeService::new().with_event(test_event("17", "RustConf"), true));

    let outcome = gate
        .scan(&ScanInput::manual(" https://events.example.com/events/17 ").unwrap())
        .await
        .unwrap();

    assert!(matches!(outcome, ScanOutcome::AlreadyRegistered { .. }));
    assert!(!gate.service().calls().contains(&Call::Register("17".to_string())));
}

#[tokio::test]
async fn registration_from_agenda_handout() {
    let gate = gate(FakeService::new().with_event(test_event("123", "Summit"), false));

    let outcome = gate
        .scan(&ScanInput::camera("EVENT_AGENDA:123|TITLE:Summit"))
        .await
        .unwrap();

    assert!(matches!(
        outcome,
        ScanOutcome::AwaitingConfirmation { agenda: true, .. }
    ));
}

#[tokio::test]
async fn registration_from_numeric_id() {
    let gate = gate(FakeService::new().with_event(test_event("5", "Meetup"), false));

    let outcome = gate.scan(&ScanInput::manual("5").unwrap()).await.unwrap();

    assert!(matches!(outcome, ScanOutcome::AwaitingConfirmation { .. }));
}

#[tokio::test]
async fn registration_status_failure_is_ignored() {
    let service = FakeService::new()
        .with_event(test_event("17", "RustConf"), true)
        .with_status_error(ApiError::Http("connection reset".to_string()));
    let gate = gate(service);

    let outcome = gate
        .scan(&ScanInput::camera("TICKET:A1|EVENT:17"))
        .await
        .unwrap();

    assert!(matches!(outcome, ScanOutcome::AwaitingConfirmation { .. }));
}

#[tokio::test]
async fn registration_unknown_event() {
    let gate = gate(FakeService::new());

    let err = gate
        .scan(&ScanInput::camera("https://events.example.com/register/404/"))
        .await
        .unwrap_err();

    assert!(matches!(err, GateError::Lookup(_)));
    assert_eq!(
        err.to_string(),
        "Event not found. The QR code may be invalid or the event may no longer exist."
    );
    assert_eq!(gate.service().calls(), vec![Call::GetEvent("404".to_string())]);
}

#[tokio::test]
async fn registration_confirmed() {
    let gate = gate(FakeService::new().with_event(test_event("17", "RustConf"), false));

    let outcome = gate.register(&event_id("17")).await.unwrap();

    assert!(matches!(
        outcome,
        ScanOutcome::Registered { ref event_id } if event_id.as_str() == "17"
    ));
    assert_eq!(gate.service().calls(), vec![Call::Register("17".to_string())]);
}

#[tokio::test]
async fn registration_refused_as_duplicate() {
    let service = FakeService::new().with_register_error(ApiError::BadRequest(
        "You are already registered for this event".to_string(),
    ));
    let gate = gate(service);

    let err = gate.register(&event_id("17")).await.unwrap_err();

    assert!(err.is_already_registered());
    assert_eq!(err.to_string(), "You are already registered for this event");
}

#[tokio::test]
async fn unrecognized_payload_makes_no_calls() {
    let gate = gate(FakeService::new());

    let outcome = gate
        .scan(&ScanInput::camera("WIFI:S:guest;T:WPA;P:secret;;"))
        .await
        .unwrap();

    assert_eq!(
        outcome,
        ScanOutcome::Unrecognized {
            raw_data: "WIFI:S:guest;T:WPA;P:secret;;".to_string()
        }
    );
    assert!(gate.service().calls().is_empty());
}
