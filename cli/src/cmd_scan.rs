// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command, arg};
use colored::Colorize;
use gatepass_core::{EventClient, Gate, ScanInput, ScanOutcome, ScanPlan};

use crate::arg::CommonArgs;
use crate::prompt::confirm_registration;
use crate::util::{OutputFormat, notice_if_already_registered, print_json};

#[derive(Debug, Clone)]
pub struct CmdScan {
    pub payload: String,
    pub camera: bool,
    pub yes: bool,
    pub output_format: OutputFormat,
}

impl CmdScan {
    pub const NAME: &str = "scan";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Scan a QR code payload: check in, or register for the event")
            .arg(arg!(payload: <PAYLOAD> "The decoded QR code text").allow_hyphen_values(true))
            .arg(arg!(--camera "Treat the payload as decoded by a camera and pass it on untouched"))
            .arg(arg!(-y --yes "Register without asking for confirmation"))
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        let payload = match matches.get_one::<String>("payload") {
            Some(payload) => payload.clone(),
            None => unreachable!("payload is required"),
        };

        Self {
            payload,
            camera: matches.get_flag("camera"),
            yes: matches.get_flag("yes"),
            output_format: CommonArgs::get_output_format(matches),
        }
    }

    pub fn input(&self) -> Result<ScanInput, Box<dyn Error>> {
        Ok(match self.camera {
            true => ScanInput::camera(self.payload.clone()),
            false => ScanInput::manual(&self.payload)?,
        })
    }

    pub async fn run(self, gate: &Gate<EventClient>) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "scanning...");
        let input = self.input()?;
        let (reference, plan) = gate.resolve(&input);
        tracing::debug!(kind = %reference.kind(), "payload resolved");

        if let ScanPlan::Reject { .. } = plan {
            return Err(
                "This QR code is not recognized as a valid event registration code.\n\nExamples:\n  • http://domain.com/register/123/\n  • EVENT_AGENDA:123|TITLE:Event Name"
                    .into(),
            );
        }

        let outcome = match gate.execute(plan).await? {
            ScanOutcome::AwaitingConfirmation { event, agenda } => {
                if !self.yes && !confirm_registration(&event, agenda)? {
                    tracing::info!("user declined the registration");
                    return Ok(());
                }
                match gate.register(&event.id).await {
                    Ok(_) => {
                        if self.output_format == OutputFormat::Table {
                            println!("{}", "Registration Successful!".green().bold());
                            println!("You have been registered for \"{}\".", event.title);
                        }
                        ScanOutcome::Registered { event_id: event.id }
                    }
                    Err(e) => return notice_if_already_registered(e),
                }
            }
            outcome => {
                if self.output_format == OutputFormat::Table {
                    print_outcome(&outcome);
                }
                outcome
            }
        };

        if self.output_format == OutputFormat::Json {
            print_json(&outcome)?;
        }
        Ok(())
    }
}

fn print_outcome(outcome: &ScanOutcome) {
    match outcome {
        ScanOutcome::CheckedIn { event_id, receipt } => {
            let event = receipt
                .attendee
                .as_ref()
                .and_then(|a| a.event.clone())
                .unwrap_or_else(|| format!("event #{event_id}"));
            println!("{}", "✅ Check-In Successful!".green().bold());
            println!("You have been checked in for \"{event}\".");
            if let Some(message) = &receipt.message {
                println!("{}", message.italic());
            }
            println!("Please proceed to the entrance to collect your entry pass.");
        }
        ScanOutcome::AlreadyRegistered { event } => {
            println!(
                "{} You are already registered for \"{}\".",
                "Already Registered:".yellow(),
                event.title
            );
        }
        ScanOutcome::Registered { event_id } => {
            println!("{}", "Registration Successful!".green().bold());
            println!("You have been registered for event #{event_id}.");
        }
        ScanOutcome::AwaitingConfirmation { event, .. } => {
            println!("Event found: \"{}\"", event.title);
        }
        ScanOutcome::Unrecognized { raw_data } => {
            println!("{} {raw_data}", "Invalid QR Code:".red());
        }
    }
}
