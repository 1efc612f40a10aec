// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use gatepass_client::ApiError;

/// Errors of the scan flow.
///
/// The `Display` text is meant for the person holding the scanner: it names
/// what went wrong in their terms, with the server's message when that is
/// the most specific thing available.
#[derive(Debug, thiserror::Error)]
pub enum GateError {
    /// Manual entry was blank.
    #[error("Please enter a QR code or URL")]
    EmptyInput,

    /// Check-in needs a user id and neither the config nor the profile had one.
    #[error("User ID not found. Please log in again.")]
    MissingUserId,

    /// The backend answered the check-in but did not accept it.
    #[error("Check-in failed: {0}")]
    CheckInRejected(String),

    /// Fetching the scanned event failed.
    #[error("{}", Stage::Lookup.describe(.0))]
    Lookup(#[source] ApiError),

    /// The check-in request failed.
    #[error("{}", Stage::CheckIn.describe(.0))]
    CheckIn(#[source] ApiError),

    /// The registration request failed.
    #[error("{}", Stage::Registration.describe(.0))]
    Registration(#[source] ApiError),
}

impl GateError {
    /// The underlying API error, if any.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Lookup(e) | Self::CheckIn(e) | Self::Registration(e) => Some(e),
            _ => None,
        }
    }

    /// Whether the user is already registered, which callers usually treat
    /// as a notice rather than a failure.
    pub fn is_already_registered(&self) -> bool {
        matches!(self, Self::Registration(e)
            if e.server_message()
                .is_some_and(|m| m.to_lowercase().contains("already registered")))
    }
}

#[derive(Debug, Clone, Copy)]
enum Stage {
    Lookup,
    CheckIn,
    Registration,
}

impl Stage {
    fn describe(self, e: &ApiError) -> Message<'_> {
        Message { stage: self, error: e }
    }
}

struct Message<'a> {
    stage: Stage,
    error: &'a ApiError,
}

impl fmt::Display for Message<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.stage, self.error) {
            (_, ApiError::Unauthorized(_)) => {
                f.write_str("Authentication failed. Please log in and try again.")
            }
            (Stage::Lookup, ApiError::NotFound(_)) => f.write_str(
                "Event not found. The QR code may be invalid or the event may no longer exist.",
            ),
            (Stage::CheckIn, ApiError::NotFound(_)) => f.write_str(
                "Registration not found. Please ensure you are registered for this event.",
            ),
            (_, e) => match (e.server_message(), self.stage) {
                (Some(m), _) => f.write_str(m),
                (None, Stage::Lookup) => write!(f, "Failed to process QR code: {e}"),
                (None, Stage::CheckIn) => write!(f, "Check-in failed: {e}"),
                (None, Stage::Registration) => write!(f, "Registration failed: {e}"),
            },
        }
    }
}
