// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Scans against a mock backend, through the real HTTP client.

use gatepass_core::{Gate, GateError, ScanInput, ScanOutcome};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::common::test_config;

#[tokio::test]
async fn http_check_in_round_trip() {
    // Arrange
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/events/42/check_in/"))
        .and(header("Authorization", "Token test-token"))
        .and(body_json(serde_json::json!({ "user_id": 7 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": true,
            "message": "Welcome",
            "attendee": { "event": "RustConf", "name": "Alice" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let gate = Gate::connect(test_config(&server.uri(), Some(7))).unwrap();

    // Act
    let outcome = gate
        .scan(&ScanInput::camera(
            "https://events.example.com/api/events/42/check-in",
        ))
        .await
        .unwrap();

    // Assert
    match outcome {
        ScanOutcome::CheckedIn { receipt, .. } => {
            assert_eq!(receipt.message.as_deref(), Some("Welcome"));
            let attendee = receipt.attendee.unwrap();
            assert_eq!(attendee.name.as_deref(), Some("Alice"));
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
}

#[tokio::test]
async fn http_registration_lookup_and_confirm() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/events/17/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "id": 17, "title": "RustConf" })),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/events/17/registration_status/"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "is_registered": false })),
        )
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/events/17/register/"))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({ "id": 1 })))
        .expect(1)
        .mount(&server)
        .await;

    let gate = Gate::connect(test_config(&server.uri(), Some(7))).unwrap();

    let outcome = gate
        .scan(&ScanInput::camera("https://events.example.com/register/17/"))
        .await
        .unwrap();
    let ScanOutcome::AwaitingConfirmation { event, .. } = outcome else {
        panic!("unexpected outcome: {outcome:?}");
    };
    assert_eq!(event.title, "RustConf");

    let outcome = gate.register(&event.id).await.unwrap();
    assert!(matches!(outcome, ScanOutcome::Registered { .. }));
}

#[tokio::test]
async fn http_lookup_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/events/9/"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let gate = Gate::connect(test_config(&server.uri(), Some(7))).unwrap();

    let err = gate
        .scan(&ScanInput::manual("9").unwrap())
        .await
        .unwrap_err();

    assert!(matches!(err, GateError::Lookup(_)));
    assert_eq!(err.api_error().and_then(|e| e.status()), Some(404));
}

#[tokio::test]
async fn http_status_endpoint_missing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/events/17/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "id": "17", "title": "RustConf" })),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/events/17/registration_status/"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let gate = Gate::connect(test_config(&server.uri(), Some(7))).unwrap();

    let outcome = gate
        .scan(&ScanInput::camera("https://events.example.com/events/17"))
        .await
        .unwrap();

    assert!(matches!(outcome, ScanOutcome::AwaitingConfirmation { .. }));
}
