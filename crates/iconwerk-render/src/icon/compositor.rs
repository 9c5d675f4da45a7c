// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Canvas compositor — places an already-shrunk logo at the centre of a
// transparent square canvas.

use iconwerk_core::{IconConfig, Placement};
use image::{DynamicImage, Rgba, RgbaImage};
use tracing::{debug, info, instrument};

/// Result of pasting a logo onto the canvas.
#[derive(Debug, Clone)]
pub struct ComposedIcon {
    /// The finished square RGBA canvas.
    pub canvas: RgbaImage,
    /// Where the logo was pasted.
    pub placement: Placement,
    /// Whether the logo's alpha was used as the paste mask.
    pub masked: bool,
}

/// Builds square icon canvases of a fixed size.
#[derive(Debug, Clone, Copy)]
pub struct IconCompositor {
    canvas_size: u32,
}

impl IconCompositor {
    pub fn new(canvas_size: u32) -> Self {
        Self { canvas_size }
    }

    pub fn from_config(config: &IconConfig) -> Self {
        Self::new(config.canvas_size)
    }

    /// A fully transparent `(0, 0, 0, 0)` canvas.
    pub fn blank_canvas(&self) -> RgbaImage {
        RgbaImage::from_pixel(self.canvas_size, self.canvas_size, Rgba([0, 0, 0, 0]))
    }

    /// Paste `logo` at the centre of a fresh canvas.
    ///
    /// Logos with an alpha channel are pasted through that alpha as a mask;
    /// logos without one overwrite their rectangle opaquely.
    #[instrument(skip_all, fields(logo_w = logo.width(), logo_h = logo.height()))]
    pub fn compose(&self, logo: &DynamicImage) -> ComposedIcon {
        let placement = Placement::centered(self.canvas_size, logo.width(), logo.height());
        let masked = logo.color().has_alpha();
        let rgba = logo.to_rgba8();

        let mut canvas = self.blank_canvas();
        if masked {
            paste_masked(&mut canvas, &rgba, placement.x, placement.y);
        } else {
            image::imageops::replace(
                &mut canvas,
                &rgba,
                i64::from(placement.x),
                i64::from(placement.y),
            );
        }

        info!(
            x = placement.x,
            y = placement.y,
            masked,
            "Logo pasted onto canvas"
        );
        ComposedIcon {
            canvas,
            placement,
            masked,
        }
    }
}

/// Paste `logo` at `(x, y)` using its own alpha as the mask.
///
/// Every destination channel, alpha included, moves towards the logo's
/// channel in proportion to the mask: `dst * (255 - m) / 255 + src * m / 255`.
/// Pixels falling outside the canvas are skipped.
pub fn paste_masked(canvas: &mut RgbaImage, logo: &RgbaImage, x: u32, y: u32) {
    let (canvas_w, canvas_h) = canvas.dimensions();
    let mut clipped = 0usize;

    for (lx, ly, src) in logo.enumerate_pixels() {
        let (cx, cy) = (x + lx, y + ly);
        if cx >= canvas_w || cy >= canvas_h {
            clipped += 1;
            continue;
        }
        let mask = src[3];
        let dst = canvas.get_pixel_mut(cx, cy);
        for channel in 0..4 {
            dst[channel] = mask_blend(dst[channel], src[channel], mask);
        }
    }

    if clipped > 0 {
        debug!(clipped, "Logo pixels fell outside the canvas");
    }
}

fn mask_blend(dst: u8, src: u8, mask: u8) -> u8 {
    let m = u32::from(mask);
    ((u32::from(dst) * (255 - m) + u32::from(src) * m + 127) / 255) as u8
}
