// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use reqwest::StatusCode;

/// Event backend client errors.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Transport error: connection refused, timeout, TLS.
    #[error("HTTP error: {0}")]
    Http(String),

    /// Missing or rejected credentials (401).
    #[error("Authentication failed: {0}")]
    Unauthorized(String),

    /// Resource not found (404).
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// The server refused the request (400).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Any other non-success status.
    #[error("Server returned {status}: {message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Message extracted from the response body.
        message: String,
    },

    /// The response body could not be decoded.
    #[error("Invalid server response: {0}")]
    InvalidResponse(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ApiError {
    /// The HTTP status behind this error, if the server answered.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized(_) => Some(StatusCode::UNAUTHORIZED.as_u16()),
            Self::NotFound(_) => Some(StatusCode::NOT_FOUND.as_u16()),
            Self::BadRequest(_) => Some(StatusCode::BAD_REQUEST.as_u16()),
            Self::Status { status, .. } => Some(*status),
            Self::Http(_) | Self::InvalidResponse(_) | Self::Config(_) => None,
        }
    }

    /// The message the server sent along with the error, if any.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Unauthorized(m) | Self::BadRequest(m) | Self::Status { message: m, .. } => {
                Some(m.as_str())
            }
            _ => None,
        }
    }

    /// Maps an error status and its body to an error.
    pub(crate) fn from_status(status: StatusCode, path: &str, body: &str) -> Self {
        let message = extract_message(body);
        match status {
            StatusCode::UNAUTHORIZED => Self::Unauthorized(message),
            StatusCode::NOT_FOUND => Self::NotFound(path.to_string()),
            StatusCode::BAD_REQUEST => Self::BadRequest(message),
            status => Self::Status {
                status: status.as_u16(),
                message,
            },
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            Self::InvalidResponse(e.to_string())
        } else {
            Self::Http(e.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        Self::InvalidResponse(e.to_string())
    }
}

/// Form fields whose validation errors are worth showing, in order.
const FIELD_ERROR_KEYS: [&str; 3] = ["email", "username", "password"];

/// Pulls the human-readable message out of an error body.
///
/// The backend reports errors as `{"detail": ...}` or `{"error": ...}`, and
/// rejected form fields as `{"email": ["..."]}`; anything else is passed
/// through as text.
fn extract_message(body: &str) -> String {
    use serde_json::Value;

    if let Ok(Value::Object(map)) = serde_json::from_str(body) {
        for key in ["detail", "error"] {
            if let Some(Value::String(message)) = map.get(key) {
                return message.clone();
            }
        }
        for key in FIELD_ERROR_KEYS {
            match map.get(key) {
                Some(Value::String(message)) => return message.clone(),
                Some(Value::Array(messages)) => {
                    if let Some(Value::String(message)) = messages.first() {
                        return message.clone();
                    }
                }
                _ => {}
            }
        }
    }

    let body = body.trim();
    if body.is_empty() {
        "no details".to_string()
    } else {
        body.to_string()
    }
}
