// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for icon generation.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Where the logo landed on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    /// Left edge of the logo on the canvas.
    pub x: u32,
    /// Top edge of the logo on the canvas.
    pub y: u32,
    /// Logo width after shrinking.
    pub width: u32,
    /// Logo height after shrinking.
    pub height: u32,
}

impl Placement {
    /// Centre a `width` x `height` logo on a square canvas of side `canvas`.
    ///
    /// Offsets use integer division, so an odd leftover pixel goes to the
    /// right/bottom margin.
    pub fn centered(canvas: u32, width: u32, height: u32) -> Self {
        Self {
            x: canvas.saturating_sub(width) / 2,
            y: canvas.saturating_sub(height) / 2,
            width,
            height,
        }
    }
}

/// Summary of one completed icon run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IconReport {
    /// Source logo dimensions as decoded.
    pub original_size: (u32, u32),
    /// Output canvas dimensions.
    pub canvas_size: (u32, u32),
    /// Position and size of the pasted logo.
    pub placement: Placement,
    /// Whether the logo's alpha channel was used as the paste mask.
    pub masked: bool,
    pub icon_path: PathBuf,
    pub preview_path: PathBuf,
}
