// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Command-line front end for gatepass: classify event QR codes, register
//! and check in against the event backend.

mod announcement_formatter;
mod arg;
mod cli;
mod cmd_announcements;
mod cmd_classify;
mod cmd_event;
mod cmd_generate_completion;
mod cmd_login;
mod cmd_profile;
mod cmd_scan;
mod config;
mod event_formatter;
mod prompt;
mod reference_formatter;
mod table;
mod util;

pub use crate::cli::{Cli, Commands, run};
