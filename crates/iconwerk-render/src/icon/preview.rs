// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Safe-zone preview — a translucent circle outline stamped onto a copy of the
// finished icon so the platform crop boundary can be checked by eye.

use iconwerk_core::IconConfig;
use image::{Rgba, RgbaImage};
use imageproc::drawing::Canvas;
use tracing::{debug, instrument};

/// A circular stroke marking the guaranteed-visible region of the icon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SafeZoneOverlay {
    pub center: (u32, u32),
    pub radius: u32,
    /// Stroke width, growing inwards from `radius`.
    pub width: u32,
    pub color: Rgba<u8>,
}

impl SafeZoneOverlay {
    pub fn from_config(config: &IconConfig) -> Self {
        let c = config.center();
        Self {
            center: (c, c),
            radius: config.safe_zone_radius,
            width: config.outline_width,
            color: Rgba(config.outline_color),
        }
    }

    /// Whether pixel `(x, y)` lies on the stroke: `radius - width < d <= radius`.
    pub fn contains(&self, x: u32, y: u32) -> bool {
        let dx = f64::from(x) - f64::from(self.center.0);
        let dy = f64::from(y) - f64::from(self.center.1);
        let d = dx.hypot(dy);
        let outer = f64::from(self.radius);
        let inner = outer - f64::from(self.width);
        d > inner && d <= outer
    }

    /// Copy `icon` and draw the circle onto it.
    ///
    /// Stroke pixels are replaced with `color` as-is, alpha included; the
    /// ink is not blended with what lies underneath.
    #[instrument(skip_all, fields(radius = self.radius, width = self.width))]
    pub fn render(&self, icon: &RgbaImage) -> RgbaImage {
        let mut canvas = icon.clone();
        let (w, h) = canvas.dimensions();
        if w == 0 || h == 0 {
            return canvas;
        }

        let (cx, cy) = self.center;
        let x_range = cx.saturating_sub(self.radius)..=(cx + self.radius).min(w - 1);
        let y_range = cy.saturating_sub(self.radius)..=(cy + self.radius).min(h - 1);

        let mut stroked = 0usize;
        for y in y_range {
            for x in x_range.clone() {
                if self.contains(x, y) {
                    canvas.draw_pixel(x, y, self.color);
                    stroked += 1;
                }
            }
        }
        debug!(stroked, "Safe-zone outline drawn");
        canvas
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn overlay() -> SafeZoneOverlay {
        SafeZoneOverlay::from_config(&IconConfig::default())
    }

    #[test]
    fn defaults_match_icon_geometry() {
        let o = overlay();
        assert_eq!(o.center, (512, 512));
        assert_eq!(o.radius, 336);
        assert_eq!(o.width, 3);
        assert_eq!(o.color, Rgba([255, 0, 0, 128]));
    }

    #[test]
    fn stroke_band_is_three_pixels_wide_on_the_axis() {
        let o = overlay();
        assert!(!o.contains(512 + 337, 512));
        assert!(o.contains(512 + 336, 512));
        assert!(o.contains(512 + 335, 512));
        assert!(o.contains(512 + 334, 512));
        assert!(!o.contains(512 + 333, 512));
        assert!(!o.contains(512, 512));
        assert!(o.contains(512, 512 - 336));
    }

    #[test]
    fn outline_is_translucent_red_over_transparent_canvas() {
        let icon = RgbaImage::from_pixel(1024, 1024, Rgba([0, 0, 0, 0]));
        let preview = overlay().render(&icon);

        assert_eq!(preview.get_pixel(512 + 336, 512), &Rgba([255, 0, 0, 128]));
        assert_eq!(preview.get_pixel(512, 512), &Rgba([0, 0, 0, 0]));
        assert_eq!(preview.get_pixel(0, 0), &Rgba([0, 0, 0, 0]));
    }

    #[test]
    fn outline_replaces_opaque_logo_pixels() {
        let icon = RgbaImage::from_pixel(1024, 1024, Rgba([20, 40, 200, 255]));
        let preview = overlay().render(&icon);

        for (x, y) in [(512 + 336, 512), (512 + 334, 512), (512, 512 - 335), (512 - 336, 512)] {
            assert_eq!(preview.get_pixel(x, y), &Rgba([255, 0, 0, 128]), "pixel ({x}, {y})");
        }
        assert_eq!(preview.get_pixel(512 + 333, 512), &Rgba([20, 40, 200, 255]));
    }

    #[test]
    fn only_the_stroke_band_changes() {
        let icon = RgbaImage::from_fn(1024, 1024, |x, y| {
            Rgba([(x % 256) as u8, (y % 256) as u8, 77, 255])
        });
        let o = overlay();
        let preview = o.render(&icon);

        assert_eq!(preview.dimensions(), icon.dimensions());
        for (x, y, pixel) in preview.enumerate_pixels() {
            if o.contains(x, y) {
                assert_eq!(pixel, &Rgba([255, 0, 0, 128]), "stroke pixel ({x}, {y})");
            } else {
                assert_eq!(pixel, icon.get_pixel(x, y), "pixel ({x}, {y}) changed");
            }
        }
    }

    #[test]
    fn stroke_is_clipped_to_small_canvases() {
        let o = SafeZoneOverlay {
            center: (4, 4),
            radius: 10,
            width: 2,
            color: Rgba([255, 0, 0, 255]),
        };
        let preview = o.render(&RgbaImage::new(8, 8));
        assert_eq!(preview.dimensions(), (8, 8));
    }
}
