// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use colored::Colorize;
use gatepass_core::GateError;
use unicode_width::UnicodeWidthStr;

/// The output format for commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
}

/// Print a value as pretty JSON.
pub fn print_json(value: &impl serde::Serialize) -> Result<(), Box<dyn Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Report a duplicate registration as a notice; pass any other error through.
pub fn notice_if_already_registered(err: GateError) -> Result<(), Box<dyn Error>> {
    if err.is_already_registered() {
        println!("{}", "You are already registered for this event.".yellow());
        Ok(())
    } else {
        Err(err.into())
    }
}

/// Shorten `s` to at most `max` display columns, ending with `…` when cut.
pub fn truncate_width(s: &str, max: usize) -> String {
    if s.width() <= max {
        return s.to_string();
    }

    let mut out = String::new();
    let mut width = 0;
    for ch in s.chars() {
        let w = ch.to_string().width();
        if width + w + 1 > max {
            break;
        }
        out.push(ch);
        width += w;
    }
    out.push('…');
    out
}
