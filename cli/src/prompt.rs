// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use cliclack::{confirm, input, intro, note, outro, outro_cancel, password};
use gatepass_core::{AccountError, Event, MIN_PASSWORD_LEN, NewAccount, SignUpForm};

/// Ask whether to register for a scanned event.
pub fn confirm_registration(event: &Event, agenda: bool) -> Result<bool, Box<dyn Error>> {
    intro("Register for Event")?;

    let mut details = Vec::new();
    if let Some(date) = &event.date {
        details.push(format!("Date:     {date}"));
    }
    if let Some(location) = &event.location {
        details.push(format!("Location: {location}"));
    }
    if agenda {
        details.push("Scanned from the event agenda".to_string());
    }
    if !details.is_empty() {
        note(&event.title, details.join("\n"))?;
    }

    let yes = confirm(format!("Would you like to register for \"{}\"?", event.title))
        .initial_value(true)
        .interact()?;

    if yes {
        outro("Registering...")?;
    } else {
        outro_cancel("Registration cancelled")?;
    }
    Ok(yes)
}

/// Read a password without echoing it.
pub fn prompt_password(username: &str) -> Result<String, Box<dyn Error>> {
    intro("Log in")?;
    let password = password(format!("Password for {username}:"))
        .mask('▪')
        .interact()?;
    Ok(password)
}

/// Ask for the fields of a new account and check them.
pub fn prompt_sign_up() -> Result<NewAccount, Box<dyn Error>> {
    intro("Create Account")?;
    let form = SignUpForm {
        first_name: input("First name:").interact()?,
        last_name: input("Last name:").interact()?,
        email: input("Email:")
            .placeholder("you@example.com")
            .interact()?,
        password: password(format!("Password (at least {MIN_PASSWORD_LEN} characters):"))
            .mask('▪')
            .interact()?,
        confirm_password: password("Confirm password:").mask('▪').interact()?,
    };
    finish(form.validate(), "Creating account...")
}

/// A checked password change.
pub struct PasswordChange {
    pub current: String,
    pub new: String,
}

/// Ask for the current password and a new one, typed twice.
pub fn prompt_password_change() -> Result<PasswordChange, Box<dyn Error>> {
    intro("Change Password")?;
    let current: String = password("Current password:").mask('▪').interact()?;
    let new: String = password("New password:").mask('▪').interact()?;
    let confirm: String = password("Confirm new password:").mask('▪').interact()?;
    let checked = gatepass_core::check_password_change(&current, &new, &confirm);
    finish(checked.map(|()| PasswordChange { current, new }), "Updating password...")
}

fn finish<T>(checked: Result<T, AccountError>, done: &str) -> Result<T, Box<dyn Error>> {
    match checked {
        Ok(value) => {
            outro(done)?;
            Ok(value)
        }
        Err(e) => {
            outro_cancel(e.to_string())?;
            Err(e.into())
        }
    }
}
