// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::collections::BTreeMap;
use std::fmt;

use crate::EventId;

/// What a scanned payload refers to.
///
/// Produced fresh for every scan by [`classify`](crate::classify) and consumed
/// right away by whoever decides the follow-up action.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ParsedReference {
    /// Organizer check-in link, `.../api/events/{id}/check-in`.
    #[serde(rename = "checkin_url")]
    CheckIn {
        /// Event to check in to.
        event_id: EventId,
    },

    /// Registration page link, `.../register/{id}/`.
    #[serde(rename = "registration_url")]
    RegistrationUrl {
        /// Event to register for.
        event_id: EventId,
        /// The scanned link, unchanged.
        raw_url: String,
    },

    /// Any absolute URL whose path contains `/event/{id}` or `/events/{id}`.
    EventUrl {
        /// Event the link points at.
        event_id: EventId,
        /// The scanned link, unchanged.
        raw_url: String,
    },

    /// Pipe-delimited `KEY:VALUE|KEY:VALUE` ticket data.
    StructuredData {
        /// Value of the `event` key, or of `event_agenda` when `event` is absent.
        event_id: EventId,
        /// Every pair found, keyed by the lower-cased key.
        fields: BTreeMap<String, String>,
    },

    /// A bare event number.
    #[serde(rename = "event_id")]
    NumericId {
        /// The number itself.
        event_id: EventId,
    },

    /// Nothing recognizable.
    Unrecognized {
        /// The scanned payload, unchanged.
        raw_data: String,
    },
}

impl ParsedReference {
    /// The event this payload refers to, if any.
    #[must_use]
    pub fn event_id(&self) -> Option<&EventId> {
        match self {
            Self::CheckIn { event_id }
            | Self::RegistrationUrl { event_id, .. }
            | Self::EventUrl { event_id, .. }
            | Self::StructuredData { event_id, .. }
            | Self::NumericId { event_id } => Some(event_id),
            Self::Unrecognized { .. } => None,
        }
    }

    /// The kind of reference, without its data.
    #[must_use]
    pub fn kind(&self) -> ReferenceKind {
        match self {
            Self::CheckIn { .. } => ReferenceKind::CheckIn,
            Self::RegistrationUrl { .. } => ReferenceKind::RegistrationUrl,
            Self::EventUrl { .. } => ReferenceKind::EventUrl,
            Self::StructuredData { .. } => ReferenceKind::StructuredData,
            Self::NumericId { .. } => ReferenceKind::NumericId,
            Self::Unrecognized { .. } => ReferenceKind::Unrecognized,
        }
    }

    /// Whether the payload was understood.
    #[must_use]
    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Unrecognized { .. })
    }

    /// Whether this is an agenda code, i.e. structured data whose event id
    /// came from the `event_agenda` key.
    #[must_use]
    pub fn from_agenda(&self) -> bool {
        match self {
            Self::StructuredData { event_id, fields } => {
                fields.get("event").is_none_or(String::is_empty)
                    && fields.get("event_agenda").map(String::as_str) == Some(event_id.as_str())
            }
            _ => false,
        }
    }
}

/// The variants of [`ParsedReference`] without their data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReferenceKind {
    /// See [`ParsedReference::CheckIn`].
    CheckIn,
    /// See [`ParsedReference::RegistrationUrl`].
    RegistrationUrl,
    /// See [`ParsedReference::EventUrl`].
    EventUrl,
    /// See [`ParsedReference::StructuredData`].
    StructuredData,
    /// See [`ParsedReference::NumericId`].
    NumericId,
    /// See [`ParsedReference::Unrecognized`].
    Unrecognized,
}

impl ReferenceKind {
    /// Stable name, the same one used as the serialized `type` tag.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CheckIn => "checkin_url",
            Self::RegistrationUrl => "registration_url",
            Self::EventUrl => "event_url",
            Self::StructuredData => "structured_data",
            Self::NumericId => "event_id",
            Self::Unrecognized => "unrecognized",
        }
    }
}

impl fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> EventId {
        EventId::new(s).unwrap()
    }

    #[test]
    fn event_id_of_each_variant() {
        let check_in = ParsedReference::CheckIn { event_id: id("1") };
        assert_eq!(check_in.event_id(), Some(&id("1")));

        let unknown = ParsedReference::Unrecognized {
            raw_data: "x".to_string(),
        };
        assert_eq!(unknown.event_id(), None);
        assert!(!unknown.is_recognized());
        assert_eq!(unknown.kind(), ReferenceKind::Unrecognized);
    }

    #[test]
    fn serialized_type_tags() {
        let reference = ParsedReference::NumericId { event_id: id("55") };
        let json = serde_json::to_value(&reference).unwrap();
        assert_eq!(json["type"], "event_id");
        assert_eq!(json["event_id"], "55");

        let reference = ParsedReference::CheckIn { event_id: id("42") };
        let json = serde_json::to_value(&reference).unwrap();
        assert_eq!(json["type"], ReferenceKind::CheckIn.as_str());
    }

    #[test]
    fn agenda_only_when_event_key_missing() {
        let agenda = ParsedReference::StructuredData {
            event_id: id("3"),
            fields: BTreeMap::from([
                ("event_agenda".to_string(), "3".to_string()),
                ("title".to_string(), "Day one".to_string()),
            ]),
        };
        assert!(agenda.from_agenda());

        let ticket = ParsedReference::StructuredData {
            event_id: id("3"),
            fields: BTreeMap::from([
                ("event".to_string(), "3".to_string()),
                ("event_agenda".to_string(), "3".to_string()),
            ]),
        };
        assert!(!ticket.from_agenda());

        let numeric = ParsedReference::NumericId { event_id: id("3") };
        assert!(!numeric.from_agenda());
    }
}
