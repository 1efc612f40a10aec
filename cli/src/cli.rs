// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, ffi::OsString, path::PathBuf};

use clap::{ArgMatches, Command, ValueHint, arg, builder::styling, crate_version, value_parser};
use colored::Colorize;
use futures::{FutureExt, future::BoxFuture};
use gatepass_core::{APP_NAME, EventClient, Gate};
use tracing_subscriber::EnvFilter;

use crate::cmd_announcements::CmdAnnouncements;
use crate::cmd_classify::CmdClassify;
use crate::cmd_event::{
    CmdEventAgenda, CmdEventCheckIn, CmdEventList, CmdEventLocation, CmdEventRegister,
    CmdEventSessions, CmdEventShow, CmdEventSpeakers, CmdEventUnregister,
};
use crate::cmd_generate_completion::CmdGenerateCompletion;
use crate::cmd_login::{CmdLogin, CmdSignUp};
use crate::cmd_profile::{CmdProfileEdit, CmdProfileShow};
use crate::cmd_scan::CmdScan;
use crate::config::parse_config;

const GATEPASS_LOG_ENV: &str = "GATEPASS_LOG";

/// Run the gatepass command-line interface.
pub async fn run() -> Result<(), Box<dyn Error>> {
    init_tracing();
    let result = match Cli::parse() {
        Ok(cli) => cli.run().await,
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        eprintln!("{} {}", "Error:".red(), e);
        std::process::exit(1);
    }
    Ok(())
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_env(GATEPASS_LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Command-line interface
#[derive(Debug)]
pub struct Cli {
    /// Path to the configuration file
    pub config: Option<PathBuf>,

    /// The command to execute
    pub command: Commands,
}

impl Cli {
    /// Create the command-line interface
    pub fn command() -> Command {
        const STYLES: styling::Styles = styling::Styles::styled()
            .header(styling::AnsiColor::Green.on_default().bold())
            .usage(styling::AnsiColor::Green.on_default().bold())
            .literal(styling::AnsiColor::Blue.on_default().bold())
            .placeholder(styling::AnsiColor::Cyan.on_default());

        Command::new(APP_NAME)
            .about("Scan event QR codes, register and check in from the terminal.")
            .author("Zexin Yuan <aim@yzx9.xyz>")
            .version(crate_version!())
            .styles(STYLES)
            .subcommand_required(true)
            .arg_required_else_help(true)
            .arg(
                arg!(-c --config [CONFIG] "Path to the configuration file")
                    .long_help(
                        "\
Path to the configuration file. Defaults to $GATEPASS_CONFIG, then \
$XDG_CONFIG_HOME/gatepass/config.toml on Linux and MacOS, %APPDATA%/gatepass/config.toml on Windows.",
                    )
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath)
                    .global(true),
            )
            .subcommand(CmdClassify::command())
            .subcommand(CmdScan::command())
            .subcommand(
                Command::new("event")
                    .alias("e")
                    .about("Browse events and manage your registrations")
                    .arg_required_else_help(true)
                    .subcommand_required(true)
                    .subcommand(CmdEventList::command())
                    .subcommand(CmdEventShow::command())
                    .subcommand(CmdEventAgenda::command())
                    .subcommand(CmdEventSessions::command())
                    .subcommand(CmdEventSpeakers::command())
                    .subcommand(CmdEventLocation::command())
                    .subcommand(CmdEventRegister::command())
                    .subcommand(CmdEventUnregister::command())
                    .subcommand(CmdEventCheckIn::command()),
            )
            .subcommand(CmdAnnouncements::command())
            .subcommand(
                Command::new("profile")
                    .about("Show or change your account")
                    .arg_required_else_help(true)
                    .subcommand_required(true)
                    .subcommand(CmdProfileShow::command())
                    .subcommand(CmdProfileEdit::command()),
            )
            .subcommand(CmdLogin::command())
            .subcommand(CmdSignUp::command())
            .subcommand(CmdGenerateCompletion::command())
    }

    /// Parse the command-line arguments
    pub fn parse() -> Result<Self, Box<dyn Error>> {
        let commands = Self::command();
        let matches = commands.get_matches();
        Self::from(&matches)
    }

    /// Parse the specified arguments
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, Box<dyn Error>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let commands = Self::command();
        let matches = commands.try_get_matches_from(args)?;
        Self::from(&matches)
    }

    /// Create a CLI instance from the `ArgMatches`
    pub fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        use Commands::*;
        let command = match matches.subcommand() {
            Some((CmdClassify::NAME, matches)) => Classify(CmdClassify::from(matches)),
            Some((CmdScan::NAME, matches)) => Scan(CmdScan::from(matches)),
            Some(("event", matches)) => match matches.subcommand() {
                Some((CmdEventList::NAME, matches)) => EventList(CmdEventList::from(matches)),
                Some((CmdEventShow::NAME, matches)) => EventShow(CmdEventShow::from(matches)),
                Some((CmdEventAgenda::NAME, matches)) => {
                    EventAgenda(CmdEventAgenda::from(matches))
                }
                Some((CmdEventSessions::NAME, matches)) => {
                    EventSessions(CmdEventSessions::from(matches))
                }
                Some((CmdEventSpeakers::NAME, matches)) => {
                    EventSpeakers(CmdEventSpeakers::from(matches))
                }
                Some((CmdEventLocation::NAME, matches)) => {
                    EventLocation(CmdEventLocation::from(matches))
                }
                Some((CmdEventRegister::NAME, matches)) => {
                    EventRegister(CmdEventRegister::from(matches))
                }
                Some((CmdEventUnregister::NAME, matches)) => {
                    EventUnregister(CmdEventUnregister::from(matches))
                }
                Some((CmdEventCheckIn::NAME, matches)) => {
                    EventCheckIn(CmdEventCheckIn::from(matches))
                }
                _ => unreachable!(),
            },
            Some((CmdAnnouncements::NAME, matches)) => {
                Announcements(CmdAnnouncements::from(matches))
            }
            Some(("profile", matches)) => match matches.subcommand() {
                Some((CmdProfileShow::NAME, matches)) => {
                    ProfileShow(CmdProfileShow::from(matches))
                }
                Some((CmdProfileEdit::NAME, matches)) => {
                    ProfileEdit(CmdProfileEdit::from(matches))
                }
                _ => unreachable!(),
            },
            Some((CmdLogin::NAME, matches)) => Login(CmdLogin::from(matches)),
            Some((CmdSignUp::NAME, matches)) => SignUp(CmdSignUp::from(matches)),
            Some((CmdGenerateCompletion::NAME, matches)) => {
                GenerateCompletion(CmdGenerateCompletion::from(matches))
            }
            _ => return Err("No command given, see --help".into()),
        };

        let config = matches.get_one("config").cloned();
        Ok(Cli { config, command })
    }

    /// Run the command
    pub async fn run(self) -> Result<(), Box<dyn Error>> {
        self.command.run(self.config).await
    }
}

/// The commands available in the CLI
#[derive(Debug, Clone)]
pub enum Commands {
    /// Classify a payload offline
    Classify(CmdClassify),

    /// Scan a payload and act on it
    Scan(CmdScan),

    /// List events
    EventList(CmdEventList),

    /// Show one event
    EventShow(CmdEventShow),

    /// Show the agenda of an event
    EventAgenda(CmdEventAgenda),

    /// List the sessions of an event
    EventSessions(CmdEventSessions),

    /// List the speakers of an event
    EventSpeakers(CmdEventSpeakers),

    /// Show the venue of an event
    EventLocation(CmdEventLocation),

    /// Register for an event
    EventRegister(CmdEventRegister),

    /// Cancel a registration
    EventUnregister(CmdEventUnregister),

    /// Check in to an event
    EventCheckIn(CmdEventCheckIn),

    /// Show announcements
    Announcements(CmdAnnouncements),

    /// Show the profile
    ProfileShow(CmdProfileShow),

    /// Change the profile or password
    ProfileEdit(CmdProfileEdit),

    /// Log in and print a token
    Login(CmdLogin),

    /// Create an account
    SignUp(CmdSignUp),

    /// Generate shell completion
    GenerateCompletion(CmdGenerateCompletion),
}

impl Commands {
    /// Run the command with the given configuration
    #[rustfmt::skip]
    pub async fn run(self, config: Option<PathBuf>) -> Result<(), Box<dyn Error>> {
        use Commands::*;
        match self {
            Classify(a)        => a.run(),
            Scan(a)            => Self::run_with(config, |x| a.run(x).boxed()).await,
            EventList(a)       => Self::run_with(config, |x| a.run(x).boxed()).await,
            EventShow(a)       => Self::run_with(config, |x| a.run(x).boxed()).await,
            EventAgenda(a)     => Self::run_with(config, |x| a.run(x).boxed()).await,
            EventSessions(a)   => Self::run_with(config, |x| a.run(x).boxed()).await,
            EventSpeakers(a)   => Self::run_with(config, |x| a.run(x).boxed()).await,
            EventLocation(a)   => Self::run_with(config, |x| a.run(x).boxed()).await,
            EventRegister(a)   => Self::run_with(config, |x| a.run(x).boxed()).await,
            EventUnregister(a) => Self::run_with(config, |x| a.run(x).boxed()).await,
            EventCheckIn(a)    => Self::run_with(config, |x| a.run(x).boxed()).await,
            Announcements(a)   => Self::run_with(config, |x| a.run(x).boxed()).await,
            ProfileShow(a)     => Self::run_with(config, |x| a.run(x).boxed()).await,
            ProfileEdit(a)     => Self::run_with(config, |x| a.run(x).boxed()).await,
            Login(a)           => Self::run_with(config, |x| a.run(x).boxed()).await,
            SignUp(a)          => Self::run_with(config, |x| a.run(x).boxed()).await,
            GenerateCompletion(a) => a.run(),
        }
    }

    async fn run_with<F>(config: Option<PathBuf>, f: F) -> Result<(), Box<dyn Error>>
    where
        F: for<'a> FnOnce(&'a Gate<EventClient>) -> BoxFuture<'a, Result<(), Box<dyn Error>>>,
    {
        tracing::debug!("parsing configuration...");
        let config = parse_config(config).await?;
        let gate = Gate::connect(config)?;
        f(&gate).await
    }
}
