// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use gatepass_client::{ApiError, CheckInReceipt, Event, EventClient};
use gatepass_payload::{EventId, ParsedReference, classify};

use crate::config::Config;
use crate::error::GateError;
use crate::service::EventService;

/// A payload together with where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanInput {
    /// Decoded by a camera; passed to the classifier untouched.
    Camera(String),
    /// Typed in by hand; already trimmed and known to be non-blank.
    Manual(String),
}

impl ScanInput {
    /// Input decoded from a QR code.
    pub fn camera(raw: impl Into<String>) -> Self {
        Self::Camera(raw.into())
    }

    /// Input typed in by hand. Surrounding whitespace is dropped.
    ///
    /// # Errors
    ///
    /// Returns [`GateError::EmptyInput`] if nothing but whitespace was entered.
    pub fn manual(text: &str) -> Result<Self, GateError> {
        match text.trim() {
            "" => Err(GateError::EmptyInput),
            text => Ok(Self::Manual(text.to_string())),
        }
    }

    /// The payload text.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Camera(s) | Self::Manual(s) => s,
        }
    }
}

/// What to do about a scanned payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanPlan {
    /// Check the current user in.
    CheckIn {
        /// Event to check in to.
        event_id: EventId,
    },

    /// Offer registration for the event.
    Register {
        /// Event to register for.
        event_id: EventId,
        /// The code came from an agenda handout.
        agenda: bool,
    },

    /// Tell the user the code is not an event code.
    Reject {
        /// The payload that was not understood.
        raw_data: String,
    },
}

/// Decide the follow-up action for a classified payload.
pub fn plan(reference: &ParsedReference) -> ScanPlan {
    match reference {
        ParsedReference::CheckIn { event_id } => ScanPlan::CheckIn {
            event_id: event_id.clone(),
        },
        ParsedReference::RegistrationUrl { event_id, .. }
        | ParsedReference::EventUrl { event_id, .. }
        | ParsedReference::StructuredData { event_id, .. }
        | ParsedReference::NumericId { event_id } => ScanPlan::Register {
            event_id: event_id.clone(),
            agenda: reference.from_agenda(),
        },
        ParsedReference::Unrecognized { raw_data } => ScanPlan::Reject {
            raw_data: raw_data.clone(),
        },
    }
}

/// Result of acting on a scan.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ScanOutcome {
    /// The user is checked in.
    CheckedIn {
        /// Event checked in to.
        event_id: EventId,
        /// What the backend returned.
        receipt: CheckInReceipt,
    },

    /// Nothing to do, the user is registered already.
    AlreadyRegistered {
        /// The scanned event.
        event: Event,
    },

    /// The event exists and the user is not registered: ask before calling
    /// [`Gate::register`].
    AwaitingConfirmation {
        /// The scanned event.
        event: Event,
        /// The code came from an agenda handout.
        agenda: bool,
    },

    /// The user is now registered.
    Registered {
        /// Event registered for.
        event_id: EventId,
    },

    /// The payload was not an event code.
    Unrecognized {
        /// The payload that was not understood.
        raw_data: String,
    },
}

/// Drives a scan from payload to backend call.
#[derive(Debug)]
pub struct Gate<S: EventService> {
    config: Config,
    service: S,
}

impl Gate<EventClient> {
    /// Creates a gate talking to the configured server.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn connect(config: Config) -> Result<Self, ApiError> {
        let client = EventClient::new(config.server.clone())?;
        Ok(Self::new(config, client))
    }
}

impl<S: EventService> Gate<S> {
    /// Creates a gate over any event service.
    pub fn new(config: Config, service: S) -> Self {
        Self { config, service }
    }

    /// The configuration in use.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The underlying event service.
    pub fn service(&self) -> &S {
        &self.service
    }

    /// Classify the input and decide what to do with it, without any I/O.
    pub fn resolve(&self, input: &ScanInput) -> (ParsedReference, ScanPlan) {
        let reference = classify(input.as_str());
        let plan = plan(&reference);
        (reference, plan)
    }

    /// Classify the input and carry out the first step of its plan.
    ///
    /// Registration stops at [`ScanOutcome::AwaitingConfirmation`]; call
    /// [`Gate::register`] once the user agrees.
    ///
    /// # Errors
    ///
    /// Returns an error if a backend call fails. An unrecognized payload is
    /// not an error.
    #[tracing::instrument(skip(self))]
    pub async fn scan(&self, input: &ScanInput) -> Result<ScanOutcome, GateError> {
        let (_, plan) = self.resolve(input);
        self.execute(plan).await
    }

    /// Carry out the first step of a plan.
    ///
    /// # Errors
    ///
    /// Returns an error if a backend call fails.
    pub async fn execute(&self, plan: ScanPlan) -> Result<ScanOutcome, GateError> {
        match plan {
            ScanPlan::CheckIn { event_id } => self.check_in(&event_id).await,
            ScanPlan::Register { event_id, agenda } => {
                self.prepare_registration(&event_id, agenda).await
            }
            ScanPlan::Reject { raw_data } => {
                tracing::info!("payload is not an event code");
                Ok(ScanOutcome::Unrecognized { raw_data })
            }
        }
    }

    /// Check the current user in to an event.
    ///
    /// # Errors
    ///
    /// Returns an error if no user id is known, the request fails, or the
    /// backend does not accept the check-in.
    #[tracing::instrument(skip(self), fields(event_id = %event_id))]
    pub async fn check_in(&self, event_id: &EventId) -> Result<ScanOutcome, GateError> {
        let user_id = self.user_id().await?;
        let receipt = self
            .service
            .check_in(event_id, user_id)
            .await
            .map_err(GateError::CheckIn)?;

        if !receipt.success {
            let message = receipt
                .message
                .unwrap_or_else(|| "the server did not accept the check-in".to_string());
            return Err(GateError::CheckInRejected(message));
        }

        tracing::info!(user_id, "checked in");
        Ok(ScanOutcome::CheckedIn {
            event_id: event_id.clone(),
            receipt,
        })
    }

    /// Register the current user for an event.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend refuses the registration.
    #[tracing::instrument(skip(self), fields(event_id = %event_id))]
    pub async fn register(&self, event_id: &EventId) -> Result<ScanOutcome, GateError> {
        self.service
            .register(event_id)
            .await
            .map_err(GateError::Registration)?;

        tracing::info!("registered");
        Ok(ScanOutcome::Registered {
            event_id: event_id.clone(),
        })
    }

    async fn prepare_registration(
        &self,
        event_id: &EventId,
        agenda: bool,
    ) -> Result<ScanOutcome, GateError> {
        let event = self
            .service
            .get_event(event_id)
            .await
            .map_err(GateError::Lookup)?;

        // Not every backend exposes the status endpoint; registering anyway
        // lets the backend report a duplicate.
        match self.service.registration_status(event_id).await {
            Ok(status) if status.is_registered => {
                return Ok(ScanOutcome::AlreadyRegistered { event });
            }
            Ok(_) => {}
            Err(e) => tracing::warn!(error = %e, "registration status unavailable"),
        }

        Ok(ScanOutcome::AwaitingConfirmation { event, agenda })
    }

    async fn user_id(&self) -> Result<u64, GateError> {
        if let Some(user_id) = self.config.user_id {
            return Ok(user_id);
        }

        match self.service.profile().await {
            Ok(profile) => Ok(profile.id),
            Err(ApiError::Unauthorized(m)) => Err(GateError::CheckIn(ApiError::Unauthorized(m))),
            Err(e) => {
                tracing::warn!(error = %e, "failed to look up user id");
                Err(GateError::MissingUserId)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> EventId {
        EventId::new(s).unwrap()
    }

    #[test]
    fn test_manual_input_is_trimmed() {
        let input = ScanInput::manual("  https://host/register/17/ \n").unwrap();
        assert_eq!(input.as_str(), "https://host/register/17/");
    }

    #[test]
    fn test_manual_input_rejects_blank() {
        assert!(matches!(ScanInput::manual(" \t"), Err(GateError::EmptyInput)));
        assert!(matches!(ScanInput::manual(""), Err(GateError::EmptyInput)));
    }

    #[test]
    fn test_camera_input_is_untouched() {
        let input = ScanInput::camera(" 5 ");
        assert_eq!(input.as_str(), " 5 ");
    }

    #[test]
    fn test_plan_check_in() {
        let reference = classify("https://host/api/events/42/check-in");
        assert_eq!(
            plan(&reference),
            ScanPlan::CheckIn {
                event_id: id("42")
            }
        );
    }

    #[test]
    fn test_plan_register_for_every_event_reference() {
        for raw in [
            "https://host/register/17/",
            "https://host/events/17",
            "TICKET:abc|EVENT:17",
            "17",
        ] {
            assert_eq!(
                plan(&classify(raw)),
                ScanPlan::Register {
                    event_id: id("17"),
                    agenda: false
                },
                "input {raw:?}"
            );
        }
    }

    #[test]
    fn test_plan_agenda() {
        let reference = classify("EVENT_AGENDA:123|TITLE:Event Name");
        assert_eq!(
            plan(&reference),
            ScanPlan::Register {
                event_id: id("123"),
                agenda: true
            }
        );
    }

    #[test]
    fn test_plan_reject() {
        assert_eq!(
            plan(&classify("hello")),
            ScanPlan::Reject {
                raw_data: "hello".to_string()
            }
        );
    }
}
