// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command};
use colored::Colorize;
use gatepass_core::{EventClient, EventId, EventScope, Gate, ScanOutcome};

use crate::arg::{CommonArgs, EventArgs};
use crate::event_formatter::{
    Agenda, EventColumn, EventDetail, LocationDetail, SessionColumn, SpeakerColumn,
};
use crate::table::Table;
use crate::util::{OutputFormat, notice_if_already_registered, print_json};

#[derive(Debug, Clone, Copy)]
pub struct CmdEventList {
    pub scope: EventScope,
    pub output_format: OutputFormat,
    pub verbose: bool,
}

impl CmdEventList {
    pub const NAME: &str = "list";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("ls")
            .about("List events")
            .arg(EventArgs::scope())
            .arg(CommonArgs::output_format())
            .arg(CommonArgs::verbose())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            scope: EventArgs::get_scope(matches),
            output_format: CommonArgs::get_output_format(matches),
            verbose: CommonArgs::get_verbose(matches),
        }
    }

    pub async fn run(self, gate: &Gate<EventClient>) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "listing events...");
        let events = gate.service().list_events_in(self.scope).await?;
        match self.output_format {
            OutputFormat::Json => print_json(&events)?,
            OutputFormat::Table if events.is_empty() => {
                println!("{}", "No events found".italic());
            }
            OutputFormat::Table => {
                let columns = EventColumn::defaults(self.verbose);
                print!("{}", Table::new(&columns, &events));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdEventShow {
    pub id: EventId,
    pub output_format: OutputFormat,
}

impl CmdEventShow {
    pub const NAME: &str = "show";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Show the details of an event")
            .arg(EventArgs::id())
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            id: EventArgs::get_id(matches),
            output_format: CommonArgs::get_output_format(matches),
        }
    }

    pub async fn run(self, gate: &Gate<EventClient>) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "showing event...");
        let event = gate.service().get_event(&self.id).await?;
        match self.output_format {
            OutputFormat::Json => print_json(&event)?,
            OutputFormat::Table => print!("{}", EventDetail(&event)),
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdEventAgenda {
    pub id: EventId,
    pub output_format: OutputFormat,
}

impl CmdEventAgenda {
    pub const NAME: &str = "agenda";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Show the agenda of an event, day by day")
            .arg(EventArgs::id())
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            id: EventArgs::get_id(matches),
            output_format: CommonArgs::get_output_format(matches),
        }
    }

    pub async fn run(self, gate: &Gate<EventClient>) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "showing agenda...");
        let days = gate.service().agenda(&self.id).await?;
        match self.output_format {
            OutputFormat::Json => print_json(&days)?,
            OutputFormat::Table if days.is_empty() => {
                println!("{}", "No agenda published yet".italic());
            }
            OutputFormat::Table => print!("{}", Agenda(&days)),
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdEventSessions {
    pub id: EventId,
    pub output_format: OutputFormat,
}

impl CmdEventSessions {
    pub const NAME: &str = "sessions";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("List the sessions of an event")
            .arg(EventArgs::id())
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            id: EventArgs::get_id(matches),
            output_format: CommonArgs::get_output_format(matches),
        }
    }

    pub async fn run(self, gate: &Gate<EventClient>) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "listing sessions...");
        let sessions = gate.service().sessions(&self.id).await?;
        match self.output_format {
            OutputFormat::Json => print_json(&sessions)?,
            OutputFormat::Table if sessions.is_empty() => {
                println!("{}", "No sessions found".italic());
            }
            OutputFormat::Table => print!("{}", Table::new(&SessionColumn::ALL, &sessions)),
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdEventLocation {
    pub id: EventId,
    pub output_format: OutputFormat,
}

impl CmdEventLocation {
    pub const NAME: &str = "location";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("map")
            .about("Show the venue of an event with map links")
            .arg(EventArgs::id())
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            id: EventArgs::get_id(matches),
            output_format: CommonArgs::get_output_format(matches),
        }
    }

    pub async fn run(self, gate: &Gate<EventClient>) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "showing location...");
        let location = match gate.service().location(&self.id).await {
            Ok(location) => location,
            Err(e) if e.status() == Some(404) => {
                return Err(format!("No venue details for event #{}", self.id).into());
            }
            Err(e) => return Err(e.into()),
        };
        match self.output_format {
            OutputFormat::Json => print_json(&location)?,
            OutputFormat::Table => print!("{}", LocationDetail(&location)),
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdEventSpeakers {
    pub id: EventId,
    pub output_format: OutputFormat,
}

impl CmdEventSpeakers {
    pub const NAME: &str = "speakers";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("List the speakers of an event")
            .arg(EventArgs::id())
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            id: EventArgs::get_id(matches),
            output_format: CommonArgs::get_output_format(matches),
        }
    }

    pub async fn run(self, gate: &Gate<EventClient>) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "listing speakers...");
        let speakers = gate.service().speakers(&self.id).await?;
        match self.output_format {
            OutputFormat::Json => print_json(&speakers)?,
            OutputFormat::Table if speakers.is_empty() => {
                println!("{}", "No speakers found".italic());
            }
            OutputFormat::Table => print!("{}", Table::new(&SpeakerColumn::ALL, &speakers)),
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdEventRegister {
    pub id: EventId,
}

impl CmdEventRegister {
    pub const NAME: &str = "register";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Register for an event")
            .arg(EventArgs::id())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            id: EventArgs::get_id(matches),
        }
    }

    pub async fn run(self, gate: &Gate<EventClient>) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "registering...");
        match gate.register(&self.id).await {
            Ok(_) => {
                println!(
                    "{} You have been registered for event #{}.",
                    "Registration Successful!".green(),
                    self.id
                );
                Ok(())
            }
            Err(e) => notice_if_already_registered(e),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CmdEventUnregister {
    pub id: EventId,
}

impl CmdEventUnregister {
    pub const NAME: &str = "unregister";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Cancel your registration for an event")
            .arg(EventArgs::id())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            id: EventArgs::get_id(matches),
        }
    }

    pub async fn run(self, gate: &Gate<EventClient>) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "unregistering...");
        gate.service().unregister(&self.id).await?;
        println!("Your registration for event #{} is cancelled.", self.id);
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdEventCheckIn {
    pub id: EventId,
    pub output_format: OutputFormat,
}

impl CmdEventCheckIn {
    pub const NAME: &str = "check-in";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("checkin")
            .about("Check in to an event you are registered for")
            .arg(EventArgs::id())
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            id: EventArgs::get_id(matches),
            output_format: CommonArgs::get_output_format(matches),
        }
    }

    pub async fn run(self, gate: &Gate<EventClient>) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "checking in...");
        let outcome = gate.check_in(&self.id).await?;
        match (self.output_format, &outcome) {
            (OutputFormat::Json, _) => print_json(&outcome)?,
            (OutputFormat::Table, ScanOutcome::CheckedIn { receipt, .. }) => {
                let name = receipt.attendee.as_ref().and_then(|a| a.name.as_deref());
                match name {
                    Some(name) => println!("{} {name} is checked in.", "✅".green()),
                    None => println!("{} Checked in to event #{}.", "✅".green(), self.id),
                }
            }
            (OutputFormat::Table, _) => {}
        }
        Ok(())
    }
}
