//! Two-step forgot-password flow modeled as an explicit state machine rather
//! than inferred from visible DOM elements, so the transitions are testable
//! without a rendered dialog.
//!
//! Flow Overview: step 1 verifies the username exists in the store; step 2
//! collects and confirms a new password and persists it. Cancel returns to
//! step 1 without persisting anything. A failing save keeps the flow in
//! step 2; there is no partial write to roll back since the slot is written
//! in one operation.

use crate::app_lib::AppError;
use crate::features::auth::login::MSG_ENTER_USERNAME;
use crate::features::auth::store::{StoragePort, UserStore};

/// Minimum accepted password length, counted in characters.
pub const MIN_PASSWORD_LENGTH: usize = 4;

pub const MSG_USERNAME_NOT_FOUND: &str = "Username not found.";
pub const MSG_ENTER_NEW_PASSWORD: &str = "Please enter new password.";
pub const MSG_PASSWORD_TOO_SHORT: &str = "Password must be at least 4 characters.";
pub const MSG_PASSWORD_MISMATCH: &str = "Passwords do not match.";
pub const MSG_RESET_SUCCESS: &str =
    "Password reset successful. Please login with your new password.";
pub const MSG_RESET_FAILED: &str = "An unexpected error occurred while resetting password.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResetStep {
    VerifyUsername,
    /// Username confirmed to exist; collecting the replacement password.
    SetPassword { username: String },
}

/// Field a validation error should be rendered against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResetField {
    Username,
    NewPassword,
    ConfirmPassword,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ResetError {
    EmptyUsername,
    UnknownUsername,
    EmptyPassword,
    PasswordTooShort,
    PasswordMismatch,
    Store(AppError),
}

impl ResetError {
    /// User-facing message for this error.
    pub fn message(&self) -> &'static str {
        match self {
            ResetError::EmptyUsername => MSG_ENTER_USERNAME,
            ResetError::UnknownUsername => MSG_USERNAME_NOT_FOUND,
            ResetError::EmptyPassword => MSG_ENTER_NEW_PASSWORD,
            ResetError::PasswordTooShort => MSG_PASSWORD_TOO_SHORT,
            ResetError::PasswordMismatch => MSG_PASSWORD_MISMATCH,
            ResetError::Store(_) => MSG_RESET_FAILED,
        }
    }

    /// Field the message belongs next to; `None` for non-field failures,
    /// which the dialog reports through a blocking notice instead.
    pub fn field(&self) -> Option<ResetField> {
        match self {
            ResetError::EmptyUsername | ResetError::UnknownUsername => Some(ResetField::Username),
            ResetError::EmptyPassword | ResetError::PasswordTooShort => {
                Some(ResetField::NewPassword)
            }
            ResetError::PasswordMismatch => Some(ResetField::ConfirmPassword),
            ResetError::Store(_) => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResetFlow {
    step: ResetStep,
}

impl Default for ResetFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl ResetFlow {
    pub fn new() -> Self {
        Self {
            step: ResetStep::VerifyUsername,
        }
    }

    pub fn step(&self) -> &ResetStep {
        &self.step
    }

    /// Step 1: advance only when the trimmed username names an existing
    /// record. Any failure keeps the flow at `VerifyUsername`.
    pub fn check_username<S: StoragePort>(
        &mut self,
        store: &UserStore<S>,
        input: &str,
    ) -> Result<(), ResetError> {
        let username = input.trim();
        if username.is_empty() {
            return Err(ResetError::EmptyUsername);
        }
        match store.contains(username) {
            Ok(true) => {
                self.step = ResetStep::SetPassword {
                    username: username.to_string(),
                };
                Ok(())
            }
            Ok(false) => Err(ResetError::UnknownUsername),
            Err(err) => Err(ResetError::Store(err)),
        }
    }

    /// Step 2: validate the new password and persist it. On success the flow
    /// is consumed back to step 1 and the verified username is returned so
    /// the login form can be prefilled. Any failure keeps the flow in
    /// `SetPassword`.
    pub fn reset_password<S: StoragePort>(
        &mut self,
        store: &UserStore<S>,
        new_password: &str,
        confirm_password: &str,
    ) -> Result<String, ResetError> {
        let ResetStep::SetPassword { username } = &self.step else {
            // Unreachable through the dialog; surface as the step-1 error.
            return Err(ResetError::EmptyUsername);
        };

        let new_password = new_password.trim();
        let confirm_password = confirm_password.trim();

        if new_password.is_empty() {
            return Err(ResetError::EmptyPassword);
        }
        if new_password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(ResetError::PasswordTooShort);
        }
        if confirm_password != new_password {
            return Err(ResetError::PasswordMismatch);
        }

        store
            .save(username, new_password)
            .map_err(ResetError::Store)?;

        let username = username.clone();
        self.step = ResetStep::VerifyUsername;
        Ok(username)
    }

    /// Valid from either step: back to step 1, nothing persisted.
    pub fn cancel(&mut self) {
        self.step = ResetStep::VerifyUsername;
    }
}
