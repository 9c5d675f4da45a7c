// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Icon generation settings.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{IconError, Result};

/// Default source logo location.
pub const DEFAULT_INPUT_PATH: &str = "assets/images/Word of Covenant Logo.png";
/// Default adaptive icon output location.
pub const DEFAULT_ICON_PATH: &str = "assets/adaptive-icon.png";
/// Default safe-zone preview output location.
pub const DEFAULT_PREVIEW_PATH: &str = "assets/adaptive-icon-preview.png";

/// Everything the icon pipeline needs to know.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IconConfig {
    /// Source logo to read.
    pub input_path: PathBuf,
    /// Where the finished adaptive icon is written.
    pub icon_path: PathBuf,
    /// Where the safe-zone preview is written.
    pub preview_path: PathBuf,
    /// Side length of the square output canvas in pixels.
    pub canvas_size: u32,
    /// Fraction of the canvas the logo's longer side may occupy.
    pub safe_ratio: f64,
    /// Radius of the safe-zone circle drawn on the preview.
    pub safe_zone_radius: u32,
    /// Stroke width of the safe-zone circle.
    pub outline_width: u32,
    /// RGBA colour of the safe-zone circle.
    pub outline_color: [u8; 4],
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            icon_path: PathBuf::from(DEFAULT_ICON_PATH),
            preview_path: PathBuf::from(DEFAULT_PREVIEW_PATH),
            canvas_size: 1024,
            // 66% is the platform safe zone; 60% leaves extra padding.
            safe_ratio: 0.60,
            safe_zone_radius: 336,
            outline_width: 3,
            outline_color: [255, 0, 0, 128],
        }
    }
}

impl IconConfig {
    /// Largest side length the logo may have after shrinking.
    pub fn safe_size(&self) -> u32 {
        (f64::from(self.canvas_size) * self.safe_ratio).floor() as u32
    }

    /// Centre of the canvas, used for the safe-zone circle.
    pub fn center(&self) -> u32 {
        self.canvas_size / 2
    }

    /// Reject settings that cannot produce a sensible icon.
    pub fn validate(&self) -> Result<()> {
        if self.canvas_size == 0 {
            return Err(IconError::InvalidConfig(
                "canvas size must be greater than zero".into(),
            ));
        }
        if !(self.safe_ratio > 0.0 && self.safe_ratio <= 1.0) {
            return Err(IconError::InvalidConfig(format!(
                "safe ratio must be in (0, 1], got {}",
                self.safe_ratio
            )));
        }
        if self.safe_size() == 0 {
            return Err(IconError::InvalidConfig(
                "safe zone is smaller than one pixel".into(),
            ));
        }
        if self.outline_width == 0 {
            return Err(IconError::InvalidConfig(
                "outline width must be at least 1".into(),
            ));
        }
        if self.safe_zone_radius > self.center() {
            return Err(IconError::InvalidConfig(format!(
                "safe zone radius {} does not fit a {}px canvas",
                self.safe_zone_radius, self.canvas_size
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_safe_size_is_614() {
        let cfg = IconConfig::default();
        assert_eq!(cfg.safe_size(), 614);
        assert_eq!(cfg.center(), 512);
    }

    #[test]
    fn default_config_is_valid() {
        assert!(IconConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_out_of_range_ratio() {
        let cfg = IconConfig {
            safe_ratio: 1.5,
            ..IconConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(IconError::InvalidConfig(_))));

        let cfg = IconConfig {
            safe_ratio: f64::NAN,
            ..IconConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_radius_larger_than_half_canvas() {
        let cfg = IconConfig {
            safe_zone_radius: 600,
            ..IconConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn survives_json_round_trip() {
        let cfg = IconConfig {
            icon_path: PathBuf::from("out/icon.png"),
            outline_color: [0, 128, 255, 200],
            ..IconConfig::default()
        };
        let json = serde_json::to_string(&cfg).expect("serialize");
        assert!(json.contains("\"canvas_size\":1024"));

        let back: IconConfig = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, cfg);
        assert!(back.validate().is_ok());
    }

    #[test]
    fn rejects_zero_outline_and_canvas() {
        let cfg = IconConfig {
            outline_width: 0,
            ..IconConfig::default()
        };
        assert!(cfg.validate().is_err());

        let cfg = IconConfig {
            canvas_size: 0,
            ..IconConfig::default()
        };
        assert!(cfg.validate().is_err());
    }
}
