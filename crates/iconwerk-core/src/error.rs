// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Iconwerk.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for all Iconwerk operations.
#[derive(Debug, Error)]
pub enum IconError {
    // -- Input --
    #[error("could not find logo at {}", .path.display())]
    SourceNotFound { path: PathBuf },

    #[error("image decoding failed: {0}")]
    Decode(String),

    // -- Output --
    #[error("image encoding failed: {0}")]
    Encode(String),

    // -- Setup --
    #[error("invalid icon configuration: {0}")]
    InvalidConfig(String),

    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, IconError>;
