// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Checks on account forms before they are sent to the backend.

use std::sync::OnceLock;

use gatepass_client::{NewAccount, ProfileUpdate};
use regex::Regex;

/// Shortest password the backend accepts.
pub const MIN_PASSWORD_LEN: usize = 6;

/// A form field failed validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AccountError {
    /// A required field was blank.
    #[error("{0} is required")]
    Required(&'static str),

    /// The email address does not look like one.
    #[error("Email is invalid")]
    InvalidEmail,

    /// The password is shorter than [`MIN_PASSWORD_LEN`].
    #[error("Password must be at least {MIN_PASSWORD_LEN} characters")]
    PasswordTooShort,

    /// The confirmation differs from the password.
    #[error("Passwords do not match")]
    PasswordMismatch,

    /// An edit that changes nothing.
    #[error("Nothing to update")]
    NothingToUpdate,
}

/// The sign-up form as typed.
#[derive(Debug, Clone, Default)]
pub struct SignUpForm {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Email address, also used as the login name.
    pub email: String,
    /// Password.
    pub password: String,
    /// Password, typed again.
    pub confirm_password: String,
}

impl SignUpForm {
    /// Checks every field and builds the account to send.
    ///
    /// Names are trimmed and the email is trimmed and lower-cased.
    ///
    /// # Errors
    ///
    /// Returns the first field that fails, in form order.
    pub fn validate(self) -> Result<NewAccount, AccountError> {
        let first_name = required("First name", &self.first_name)?;
        let last_name = required("Last name", &self.last_name)?;
        let email = normalize_email(&self.email)?;
        check_new_password(&self.password, &self.confirm_password)?;
        Ok(NewAccount {
            username: email.clone(),
            email,
            password: self.password,
            first_name,
            last_name,
        })
    }
}

/// Builds a profile update from the fields the user chose to change.
///
/// # Errors
///
/// Returns an error if a given field is blank or the email is invalid, or if
/// no field was given at all.
pub fn profile_update(
    first_name: Option<&str>,
    last_name: Option<&str>,
    email: Option<&str>,
) -> Result<ProfileUpdate, AccountError> {
    let update = ProfileUpdate {
        first_name: first_name.map(|s| required("First name", s)).transpose()?,
        last_name: last_name.map(|s| required("Last name", s)).transpose()?,
        email: email.map(normalize_email).transpose()?,
    };
    if update.is_empty() {
        return Err(AccountError::NothingToUpdate);
    }
    Ok(update)
}

/// Checks a password change before it is sent.
///
/// # Errors
///
/// Returns an error if the current password is empty, or the new one is too
/// short or not confirmed.
pub fn check_password_change(
    current: &str,
    new: &str,
    confirm: &str,
) -> Result<(), AccountError> {
    if current.is_empty() {
        return Err(AccountError::Required("Current password"));
    }
    check_new_password(new, confirm)
}

fn check_new_password(password: &str, confirm: &str) -> Result<(), AccountError> {
    if password.is_empty() {
        return Err(AccountError::Required("Password"));
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AccountError::PasswordTooShort);
    }
    if password != confirm {
        return Err(AccountError::PasswordMismatch);
    }
    Ok(())
}

fn required(field: &'static str, value: &str) -> Result<String, AccountError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(AccountError::Required(field));
    }
    Ok(value.to_string())
}

fn normalize_email(email: &str) -> Result<String, AccountError> {
    const RE: &str = r"\S+@\S+\.\S+";
    static REGEX: OnceLock<Regex> = OnceLock::new();

    let email = required("Email", email)?.to_lowercase();
    let re = REGEX.get_or_init(|| Regex::new(RE).unwrap());
    if !re.is_match(&email) {
        return Err(AccountError::InvalidEmail);
    }
    Ok(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> SignUpForm {
        SignUpForm {
            first_name: " Ada ".to_string(),
            last_name: "Lovelace".to_string(),
            email: " Ada@Example.COM ".to_string(),
            password: "engine1".to_string(),
            confirm_password: "engine1".to_string(),
        }
    }

    #[test]
    fn test_sign_up_normalizes_fields() {
        let account = form().validate().unwrap();
        assert_eq!(account.first_name, "Ada");
        assert_eq!(account.email, "ada@example.com");
        assert_eq!(account.username, "ada@example.com");
        assert_eq!(account.password, "engine1");
    }

    #[test]
    fn test_sign_up_reports_first_failing_field() {
        let mut f = form();
        f.first_name = "  ".to_string();
        f.email = String::new();
        assert_eq!(f.validate(), Err(AccountError::Required("First name")));

        let mut f = form();
        f.email = "ada at example".to_string();
        assert_eq!(f.validate(), Err(AccountError::InvalidEmail));

        let mut f = form();
        f.password = "abc".to_string();
        f.confirm_password = "abc".to_string();
        assert_eq!(f.validate(), Err(AccountError::PasswordTooShort));

        let mut f = form();
        f.confirm_password = "engine2".to_string();
        assert_eq!(f.validate(), Err(AccountError::PasswordMismatch));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            AccountError::Required("Last name").to_string(),
            "Last name is required"
        );
        assert_eq!(
            AccountError::PasswordTooShort.to_string(),
            "Password must be at least 6 characters"
        );
    }

    #[test]
    fn test_profile_update_only_given_fields() {
        let update = profile_update(None, Some(" Byron "), None).unwrap();
        assert_eq!(update.first_name, None);
        assert_eq!(update.last_name.as_deref(), Some("Byron"));
        assert_eq!(update.email, None);
    }

    #[test]
    fn test_profile_update_rejects_blank_and_empty() {
        assert_eq!(
            profile_update(Some(""), None, None),
            Err(AccountError::Required("First name"))
        );
        assert_eq!(
            profile_update(None, None, Some("nope")),
            Err(AccountError::InvalidEmail)
        );
        assert_eq!(
            profile_update(None, None, None),
            Err(AccountError::NothingToUpdate)
        );
    }

    #[test]
    fn test_password_change() {
        assert_eq!(check_password_change("old-one", "new-one", "new-one"), Ok(()));
        assert_eq!(
            check_password_change("", "new-one", "new-one"),
            Err(AccountError::Required("Current password"))
        );
        assert_eq!(
            check_password_change("old-one", "", ""),
            Err(AccountError::Required("Password"))
        );
        assert_eq!(
            check_password_change("old-one", "new-one", "new-two"),
            Err(AccountError::PasswordMismatch)
        );
    }

    #[test]
    fn test_password_length_counts_characters() {
        assert_eq!(check_new_password("äöüßéè", "äöüßéè"), Ok(()));
    }
}
