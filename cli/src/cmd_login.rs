// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command, arg};
use colored::Colorize;
use gatepass_core::{EventClient, Gate, UserProfile};

use crate::arg::CommonArgs;
use crate::prompt::{prompt_password, prompt_sign_up};
use crate::util::{OutputFormat, print_json};

#[derive(Debug, Clone)]
pub struct CmdLogin {
    pub username: String,
    pub output_format: OutputFormat,
}

impl CmdLogin {
    pub const NAME: &str = "login";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Log in and print an API token for the configuration file")
            .arg(arg!(username: <USERNAME> "Your account name"))
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        let username = match matches.get_one::<String>("username") {
            Some(username) => username.clone(),
            None => unreachable!("username is required"),
        };

        Self {
            username,
            output_format: CommonArgs::get_output_format(matches),
        }
    }

    pub async fn run(self, gate: &Gate<EventClient>) -> Result<(), Box<dyn Error>> {
        tracing::debug!(username = %self.username, "logging in...");
        let password = prompt_password(&self.username)?;
        let resp = gate.service().login(&self.username, &password).await?;
        match self.output_format {
            OutputFormat::Json => print_json(&resp)?,
            OutputFormat::Table => {
                let heading = "Logged in. Add the following to your configuration file:";
                println!("{}", config_snippet(heading, &resp.token, resp.user.as_ref()));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CmdSignUp {
    pub output_format: OutputFormat,
}

impl CmdSignUp {
    pub const NAME: &str = "signup";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Create an account on the event server")
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            output_format: CommonArgs::get_output_format(matches),
        }
    }

    pub async fn run(self, gate: &Gate<EventClient>) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "creating account...");
        let account = prompt_sign_up()?;
        let resp = gate.service().sign_up(&account).await?;
        match (self.output_format, &resp.token) {
            (OutputFormat::Json, _) => print_json(&resp)?,
            (OutputFormat::Table, Some(token)) => {
                let heading = "Account created. Add the following to your configuration file:";
                println!("{}", config_snippet(heading, token, resp.user.as_ref()));
            }
            (OutputFormat::Table, None) => {
                println!(
                    "{} Log in with `gatepass login {}`.",
                    "Account created.".green(),
                    account.username
                );
            }
        }
        Ok(())
    }
}

/// The lines to paste into the configuration file.
fn config_snippet(heading: &str, token: &str, user: Option<&UserProfile>) -> String {
    let mut out = format!("{}\n", heading.green());
    if let Some(user) = user {
        out.push_str(&format!("\n[core]\nuser_id = {}\n", user.id));
    }
    out.push_str(&format!(
        "\n[core.server]\nauth = {{ type = \"token\", token = \"{token}\" }}"
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_login() {
        let cmd = Command::new("test").subcommand(CmdLogin::command());
        let matches = cmd.try_get_matches_from(["test", "login", "alice"]).unwrap();
        let parsed = CmdLogin::from(matches.subcommand_matches("login").unwrap());
        assert_eq!(parsed.username, "alice");
    }

    #[test]
    fn test_config_snippet() {
        colored::control::set_override(false);
        let user = UserProfile {
            id: 7,
            username: "alice".to_string(),
            email: None,
            first_name: None,
            last_name: None,
        };
        let snippet = config_snippet("Logged in.", "abc123", Some(&user));
        assert_eq!(
            snippet,
            "Logged in.\n\n[core]\nuser_id = 7\n\n\
             [core.server]\nauth = { type = \"token\", token = \"abc123\" }"
        );
    }

    #[test]
    fn test_config_snippet_without_user() {
        colored::control::set_override(false);
        let snippet = config_snippet("Account created.", "t0k", None);
        assert!(!snippet.contains("[core]\n"));
        assert!(snippet.ends_with("token = \"t0k\" }"));
    }

    #[test]
    fn test_parse_sign_up() {
        let cmd = Command::new("test").subcommand(CmdSignUp::command());
        let matches = cmd
            .try_get_matches_from(["test", "signup", "--output-format", "json"])
            .unwrap();
        let parsed = CmdSignUp::from(matches.subcommand_matches("signup").unwrap());
        assert_eq!(parsed.output_format, OutputFormat::Json);
    }
}
