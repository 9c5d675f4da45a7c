// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Console-ready error messages. Every failure is terminal for the run.

use crate::error::IconError;

/// A human-readable error with a one-line message and a follow-up hint.
#[derive(Debug, Clone)]
pub struct HumanError {
    /// Printed after the error marker.
    pub message: String,
    /// What the user should try next.
    pub suggestion: String,
}

/// Convert an `IconError` into the message printed at the end of a failed run.
pub fn humanize_error(err: &IconError) -> HumanError {
    match err {
        IconError::SourceNotFound { path } => HumanError {
            message: format!("Error: Could not find logo at {}", path.display()),
            suggestion: "Place the source logo at that path and run again.".into(),
        },

        IconError::Decode(_) => HumanError {
            message: format!("Error: {err}"),
            suggestion: "Make sure the logo is a valid PNG or JPEG image.".into(),
        },

        IconError::Encode(_) | IconError::Io(_) => HumanError {
            message: format!("Error: {err}"),
            suggestion: "Check that the assets folder is writable and the disk is not full.".into(),
        },

        IconError::InvalidConfig(_) => HumanError {
            message: format!("Error: {err}"),
            suggestion: "Restore the default icon settings.".into(),
        },
    }
}
