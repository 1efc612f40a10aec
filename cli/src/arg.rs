// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use clap::{Arg, ArgMatches, arg, value_parser};
use gatepass_core::{EventId, EventScope};

use crate::util::OutputFormat;

#[derive(Debug, Clone, Copy)]
pub struct CommonArgs;

impl CommonArgs {
    pub fn verbose() -> Arg {
        arg!(-v --verbose "Show more detailed information")
    }

    pub fn get_verbose(matches: &ArgMatches) -> bool {
        matches.get_flag("verbose")
    }

    pub fn output_format() -> Arg {
        arg!(--"output-format" <FORMAT> "Output format")
            .value_parser(value_parser!(OutputFormat))
            .default_value("table")
    }

    pub fn get_output_format(matches: &ArgMatches) -> OutputFormat {
        matches
            .get_one("output-format")
            .copied()
            .unwrap_or(OutputFormat::Table)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct EventArgs;

impl EventArgs {
    pub fn id() -> Arg {
        arg!(id: <ID> "The numeric id of the event").value_parser(value_parser!(EventId))
    }

    pub fn get_id(matches: &ArgMatches) -> EventId {
        match matches.get_one::<EventId>("id") {
            Some(id) => id.clone(),
            None => unreachable!("id is required"),
        }
    }

    pub fn scope() -> Arg {
        arg!(--scope <SCOPE> "Which events to list")
            .value_parser(["all", "mine", "registered", "upcoming", "upcoming-registered"])
            .default_value("all")
    }

    pub fn get_scope(matches: &ArgMatches) -> EventScope {
        match matches.get_one::<String>("scope").map(String::as_str) {
            Some("mine") => EventScope::Mine,
            Some("registered") => EventScope::Registered,
            Some("upcoming") => EventScope::Upcoming,
            Some("upcoming-registered") => EventScope::UpcomingRegistered,
            _ => EventScope::All,
        }
    }
}
