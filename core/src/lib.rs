// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Turn scanned event QR codes into check-ins and registrations.

mod account;
mod config;
mod error;
mod gate;
mod service;

pub use crate::account::{
    AccountError, MIN_PASSWORD_LEN, SignUpForm, check_password_change, profile_update,
};
pub use crate::config::{APP_NAME, Config};
pub use crate::error::GateError;
pub use crate::gate::{Gate, ScanInput, ScanOutcome, ScanPlan, plan};
pub use crate::service::EventService;

pub use gatepass_client::{
    AgendaDay, Announcement, AnnouncementPriority, ApiConfig, ApiError, AuthMethod,
    CheckInReceipt, Event, EventClient, EventLocation, EventScope, LoginResponse, NewAccount,
    ProfileUpdate, RegistrationStatus, Session, SignUpResponse, Speaker, UserProfile, VenueMap,
};
pub use gatepass_payload::{EventId, InvalidEventId, ParsedReference, ReferenceKind, classify};
