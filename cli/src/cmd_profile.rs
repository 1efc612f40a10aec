// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, fmt};

use clap::{ArgMatches, Command, arg};
use colored::Colorize;
use gatepass_core::{AccountError, EventClient, Gate, UserProfile, profile_update};

use crate::arg::CommonArgs;
use crate::prompt::prompt_password_change;
use crate::util::{OutputFormat, print_json};

#[derive(Debug, Clone, Copy)]
pub struct CmdProfileShow {
    pub output_format: OutputFormat,
}

impl CmdProfileShow {
    pub const NAME: &str = "show";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Show your profile")
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            output_format: CommonArgs::get_output_format(matches),
        }
    }

    pub async fn run(self, gate: &Gate<EventClient>) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "showing profile...");
        let profile = gate.service().profile().await?;
        match self.output_format {
            OutputFormat::Json => print_json(&profile)?,
            OutputFormat::Table => print!("{}", ProfileDetail(&profile)),
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct CmdProfileEdit {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub password: bool,
}

impl CmdProfileEdit {
    pub const NAME: &str = "edit";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Change your name, email or password")
            .arg(arg!(--"first-name" <NAME> "New given name"))
            .arg(arg!(--"last-name" <NAME> "New family name"))
            .arg(arg!(--email <EMAIL> "New email address"))
            .arg(arg!(--password "Change the password, prompting for the old and new one"))
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            first_name: matches.get_one::<String>("first-name").cloned(),
            last_name: matches.get_one::<String>("last-name").cloned(),
            email: matches.get_one::<String>("email").cloned(),
            password: matches.get_flag("password"),
        }
    }

    fn has_fields(&self) -> bool {
        self.first_name.is_some() || self.last_name.is_some() || self.email.is_some()
    }

    pub async fn run(self, gate: &Gate<EventClient>) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "editing profile...");
        if !self.has_fields() && !self.password {
            return Err(AccountError::NothingToUpdate.into());
        }

        if self.has_fields() {
            let update = profile_update(
                self.first_name.as_deref(),
                self.last_name.as_deref(),
                self.email.as_deref(),
            )?;
            let profile = gate.service().update_profile(&update).await?;
            println!("{}", "Profile updated successfully!".green());
            print!("{}", ProfileDetail(&profile));
        }

        if self.password {
            let change = prompt_password_change()?;
            gate.service()
                .change_password(&change.current, &change.new)
                .await?;
            println!("{}", "Password changed.".green());
        }
        Ok(())
    }
}

/// The profile as a short card.
struct ProfileDetail<'a>(&'a UserProfile);

impl fmt::Display for ProfileDetail<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let profile = self.0;
        let name = [profile.first_name.as_deref(), profile.last_name.as_deref()]
            .into_iter()
            .flatten()
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        let heading = match name.is_empty() {
            true => profile.username.as_str(),
            false => name.as_str(),
        };
        writeln!(f, "{} {}", heading.bold(), format!("#{}", profile.id).dimmed())?;
        writeln!(f, "  Username: {}", profile.username)?;
        if let Some(email) = &profile.email {
            writeln!(f, "  Email:    {email}")?;
        }
        Ok(())
    }
}
