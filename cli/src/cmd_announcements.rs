// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command, arg};
use colored::Colorize;
use gatepass_core::{EventClient, Gate};

use crate::announcement_formatter::Announcements;
use crate::arg::CommonArgs;
use crate::util::{OutputFormat, print_json};

#[derive(Debug, Clone, Copy)]
pub struct CmdAnnouncements {
    pub count: bool,
    pub output_format: OutputFormat,
}

impl CmdAnnouncements {
    pub const NAME: &str = "announcements";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("news")
            .about("Show announcements for the events you registered for")
            .arg(arg!(--count "Only print how many announcements there are"))
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            count: matches.get_flag("count"),
            output_format: CommonArgs::get_output_format(matches),
        }
    }

    pub async fn run(self, gate: &Gate<EventClient>) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "fetching announcements...");
        let announcements = gate.service().announcements().await?;
        match (self.output_format, self.count) {
            (OutputFormat::Json, true) => {
                print_json(&serde_json::json!({ "count": announcements.len() }))?;
            }
            (OutputFormat::Json, false) => print_json(&announcements)?,
            (OutputFormat::Table, true) => println!("{}", announcements.len()),
            (OutputFormat::Table, false) if announcements.is_empty() => {
                println!("{}", "No announcements".italic());
            }
            (OutputFormat::Table, false) => print!("{}", Announcements(&announcements)),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_announcements() {
        let cmd = Command::new("test").subcommand(CmdAnnouncements::command());
        let matches = cmd
            .try_get_matches_from(["test", "announcements", "--count"])
            .unwrap();
        let parsed = CmdAnnouncements::from(matches.subcommand_matches("announcements").unwrap());
        assert!(parsed.count);
        assert_eq!(parsed.output_format, OutputFormat::Table);
    }

    #[test]
    fn test_parse_announcements_alias() {
        let cmd = Command::new("test").subcommand(CmdAnnouncements::command());
        let matches = cmd
            .try_get_matches_from(["test", "news", "--output-format", "json"])
            .unwrap();
        let parsed = CmdAnnouncements::from(matches.subcommand_matches("announcements").unwrap());
        assert!(!parsed.count);
        assert_eq!(parsed.output_format, OutputFormat::Json);
    }
}
