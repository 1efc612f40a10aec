// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Client for the event backend's REST API: browsing events, registering and checking in.

#![warn(
    trivial_casts,
    trivial_numeric_casts,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications,
    clippy::dbg_macro,
    clippy::indexing_slicing,
    clippy::pedantic
)]
// Allow certain clippy lints that are too restrictive for this crate
#![allow(clippy::single_match_else, clippy::module_name_repetitions)]

mod client;
mod config;
mod error;
mod http;
mod types;

pub use crate::client::{EventClient, EventScope};
pub use crate::config::{ApiConfig, AuthMethod};
pub use crate::error::ApiError;
pub use crate::types::{
    AgendaDay, Announcement, AnnouncementPriority, CheckInAttendee, CheckInReceipt, Event,
    EventLocation, LoginResponse, NewAccount, ProfileUpdate, RegistrationStatus, Session,
    SignUpResponse, Speaker, UserProfile, VenueMap,
};
