// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Classify scanned QR payloads into event references.
//!
//! A payload is whatever string came out of a QR decoder (or was typed in by
//! hand). [`classify`] recognizes the formats printed on event material and
//! extracts the event identifier from them.

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

mod classify;
mod event_id;
mod reference;

pub use crate::classify::classify;
pub use crate::event_id::{EventId, InvalidEventId};
pub use crate::reference::{ParsedReference, ReferenceKind};
