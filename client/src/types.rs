// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Resources returned by the event backend.
//!
//! The backend is loose about which fields it fills in, so everything but
//! the identifiers is optional and unknown fields are ignored.

use gatepass_payload::EventId;

/// An event as listed by the backend.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Event {
    /// Event identifier.
    pub id: EventId,
    /// Event title.
    #[serde(default)]
    pub title: String,
    /// Long description.
    #[serde(default)]
    pub description: Option<String>,
    /// Start date as sent by the backend (ISO 8601).
    #[serde(default)]
    pub date: Option<String>,
    /// Venue.
    #[serde(default)]
    pub location: Option<String>,
    /// Publication status, e.g. `published`.
    #[serde(default)]
    pub status: Option<String>,
    /// Whether the current user is registered.
    #[serde(default)]
    pub is_registered: Option<bool>,
    /// Number of registrations so far.
    #[serde(default)]
    pub registrations_count: Option<u32>,
    /// Capacity.
    #[serde(default)]
    pub max_attendees: Option<u32>,
    /// Banner image URL.
    #[serde(default)]
    pub image: Option<String>,
}

/// Registration status of the current user for one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RegistrationStatus {
    /// Whether the user is registered.
    #[serde(default)]
    pub is_registered: bool,
}

/// Result of a check-in request.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CheckInReceipt {
    /// Whether the backend accepted the check-in.
    #[serde(default)]
    pub success: bool,
    /// Optional message from the backend.
    #[serde(default)]
    pub message: Option<String>,
    /// Attendee record that was checked in.
    #[serde(default)]
    pub attendee: Option<CheckInAttendee>,
}

/// Attendee record in a [`CheckInReceipt`].
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CheckInAttendee {
    /// Title of the event checked in to.
    #[serde(default)]
    pub event: Option<String>,
    /// Attendee name.
    #[serde(default)]
    pub name: Option<String>,
    /// Check-in time as sent by the backend.
    #[serde(default)]
    pub checked_in_at: Option<String>,
}

/// Response of the login endpoint.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LoginResponse {
    /// API token for subsequent requests.
    pub token: String,
    /// The logged-in user.
    #[serde(default)]
    pub user: Option<UserProfile>,
}

/// The current user's profile.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct UserProfile {
    /// User identifier, used for check-in.
    pub id: u64,
    /// Login name.
    #[serde(default)]
    pub username: String,
    /// Email address.
    #[serde(default)]
    pub email: Option<String>,
    /// Given name.
    #[serde(default)]
    pub first_name: Option<String>,
    /// Family name.
    #[serde(default)]
    pub last_name: Option<String>,
}

/// One day of an event's agenda.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AgendaDay {
    /// Agenda entry identifier.
    pub id: u64,
    /// Day title.
    #[serde(default)]
    pub title: String,
    /// Day description.
    #[serde(default)]
    pub description: Option<String>,
    /// Date of the day.
    #[serde(default)]
    pub date: Option<String>,
    /// 1-based day number.
    #[serde(default)]
    pub day_number: Option<u32>,
    /// Sort order.
    #[serde(default)]
    pub order: Option<u32>,
    /// Sessions of the day.
    #[serde(default)]
    pub sessions: Vec<Session>,
}

/// A session on the agenda.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Session {
    /// Session identifier.
    pub id: u64,
    /// Session title.
    #[serde(default)]
    pub title: String,
    /// Start time as displayed, e.g. `09:30 AM`.
    #[serde(default)]
    pub time: Option<String>,
    /// Duration as displayed, e.g. `45 min`.
    #[serde(default)]
    pub duration: Option<String>,
    /// Session description.
    #[serde(default)]
    pub description: Option<String>,
    /// Room.
    #[serde(default)]
    pub location: Option<String>,
    /// Session type, e.g. `keynote`, `workshop`.
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    /// Speaker names.
    #[serde(default)]
    pub speakers: Vec<String>,
}

/// A speaker at an event.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Speaker {
    /// Speaker identifier.
    pub id: u64,
    /// Full name.
    #[serde(default)]
    pub name: String,
    /// Job title.
    #[serde(default)]
    pub title: Option<String>,
    /// Company.
    #[serde(default)]
    pub company: Option<String>,
    /// Short biography.
    #[serde(default)]
    pub bio: Option<String>,
    /// Contact address.
    #[serde(default)]
    pub email: Option<String>,
    /// Topics.
    #[serde(default)]
    pub expertise: Vec<String>,
}

/// Fields to change on the current user's profile.
///
/// Fields left as `None` are not sent, so the backend keeps their values.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct ProfileUpdate {
    /// Given name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// Family name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl ProfileUpdate {
    /// Whether there is nothing to send.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none() && self.last_name.is_none() && self.email.is_none()
    }
}

/// A new account for the sign-up endpoint.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct NewAccount {
    /// Login name; the backend expects the email address here.
    pub username: String,
    /// Email address.
    pub email: String,
    /// Password in clear text, sent once over TLS.
    pub password: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
}

/// Response of the sign-up endpoint.
///
/// Some backends log the new user in right away and include a token.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SignUpResponse {
    /// API token, when the backend logs the new user in.
    #[serde(default)]
    pub token: Option<String>,
    /// The created user.
    #[serde(default)]
    pub user: Option<UserProfile>,
}

/// How urgent an [`Announcement`] is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum AnnouncementPriority {
    /// Needs attention now.
    Urgent,
    /// Important.
    High,
    /// Regular news.
    #[default]
    Medium,
    /// Nice to know.
    Low,
}

impl AnnouncementPriority {
    /// Parses the backend's priority name; unknown names are [`Self::Medium`].
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "urgent" => Self::Urgent,
            "high" => Self::High,
            "low" => Self::Low,
            _ => Self::Medium,
        }
    }

    /// Upper-case label, e.g. `URGENT`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Urgent => "URGENT",
            Self::High => "HIGH",
            Self::Medium => "MEDIUM",
            Self::Low => "LOW",
        }
    }
}

/// An announcement posted to one of the user's registered events.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Announcement {
    /// Announcement identifier.
    pub id: u64,
    /// Headline.
    #[serde(default)]
    pub title: String,
    /// Body text.
    #[serde(default)]
    pub content: String,
    /// Priority name as sent by the backend, see [`Announcement::priority`].
    #[serde(default, rename = "priority")]
    pub priority_name: Option<String>,
    /// Title of the event it belongs to.
    #[serde(default)]
    pub event_title: Option<String>,
    /// Who posted it.
    #[serde(default)]
    pub author_name: Option<String>,
    /// Creation time as sent by the backend (ISO 8601).
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Announcement {
    /// The priority, [`AnnouncementPriority::Medium`] when missing or unknown.
    #[must_use]
    pub fn priority(&self) -> AnnouncementPriority {
        self.priority_name
            .as_deref()
            .map(AnnouncementPriority::from_name)
            .unwrap_or_default()
    }
}

/// Venue details of an event.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct EventLocation {
    /// Venue name.
    #[serde(default)]
    pub venue: Option<String>,
    /// Street address.
    #[serde(default)]
    pub address: Option<String>,
    /// Floor plans and site maps.
    #[serde(default)]
    pub venue_maps: Vec<VenueMap>,
}

impl EventLocation {
    /// Query string for a map search: venue and address joined by a space.
    #[must_use]
    pub fn search_query(&self) -> Option<String> {
        let parts: Vec<&str> = [self.venue.as_deref(), self.address.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();
        (!parts.is_empty()).then(|| parts.join(" "))
    }

    /// Map search link for the venue.
    #[must_use]
    pub fn maps_url(&self) -> Option<String> {
        self.google_maps("https://www.google.com/maps/search/?api=1", "query")
    }

    /// Directions link to the venue.
    #[must_use]
    pub fn directions_url(&self) -> Option<String> {
        self.google_maps("https://www.google.com/maps/dir/?api=1", "destination")
    }

    fn google_maps(&self, base: &str, key: &str) -> Option<String> {
        let query = self.search_query()?;
        url::Url::parse_with_params(base, &[(key, query)])
            .ok()
            .map(String::from)
    }
}

/// A floor plan or site map of a venue.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct VenueMap {
    /// Map identifier.
    pub id: u64,
    /// Map title, e.g. `Ground floor`.
    #[serde(default)]
    pub title: String,
    /// Short description.
    #[serde(default)]
    pub description: Option<String>,
    /// Image URL.
    #[serde(default)]
    pub image: Option<String>,
}
