// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command, arg};
use gatepass_core::classify;

use crate::arg::CommonArgs;
use crate::reference_formatter::ReferenceFormatter;
use crate::util::OutputFormat;

#[derive(Debug, Clone)]
pub struct CmdClassify {
    pub payload: String,
    pub output_format: OutputFormat,
}

impl CmdClassify {
    pub const NAME: &str = "classify";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Show what a QR code payload refers to, without contacting the server")
            .arg(arg!(payload: <PAYLOAD> "The decoded QR code text").allow_hyphen_values(true))
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        let payload = match matches.get_one::<String>("payload") {
            Some(payload) => payload.clone(),
            None => unreachable!("payload is required"),
        };

        Self {
            payload,
            output_format: CommonArgs::get_output_format(matches),
        }
    }

    pub fn run(self) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "classifying payload...");
        let reference = classify(&self.payload);
        let formatter = ReferenceFormatter::new(self.output_format);
        print!("{}", formatter.format(&reference));
        Ok(())
    }
}
