// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Image processor — open a source logo, shrink it to fit a bounding box
// without ever enlarging it, and write RGBA canvases out as PNG. Operates on
// in-memory images using the `image` crate.

use std::io::ErrorKind;
use std::path::Path;

use iconwerk_core::error::IconError;
use image::{DynamicImage, ImageError, ImageFormat, RgbaImage};
use tracing::{debug, info, instrument};

/// Wrapper around the logo being prepared for the canvas.
///
/// Transformations consume `self` and return a new `ImageProcessor`, so the
/// steps chain:
///
/// ```ignore
/// let logo = ImageProcessor::open("logo.png")?
///     .thumbnail(614, 614);
/// let icon = compositor.compose(logo.as_dynamic());
/// ```
pub struct ImageProcessor {
    /// The current working image.
    image: DynamicImage,
}

impl ImageProcessor {
    // -- Construction ---------------------------------------------------------

    /// Load an image from a file path.
    ///
    /// A missing file is reported as [`IconError::SourceNotFound`]; every
    /// other failure (unreadable file, unknown format, corrupt data) as
    /// [`IconError::Decode`].
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn open(path: impl AsRef<Path>) -> Result<Self, IconError> {
        let path = path.as_ref();
        let img = image::open(path).map_err(|err| match err {
            ImageError::IoError(io) if io.kind() == ErrorKind::NotFound => {
                IconError::SourceNotFound {
                    path: path.to_path_buf(),
                }
            }
            other => IconError::Decode(format!(
                "failed to open {}: {}",
                path.display(),
                other
            )),
        })?;
        info!(
            width = img.width(),
            height = img.height(),
            color = ?img.color(),
            "Logo loaded"
        );
        Ok(Self { image: img })
    }

    /// Wrap an already-decoded `DynamicImage`.
    pub fn from_dynamic(image: DynamicImage) -> Self {
        Self { image }
    }

    // -- Accessors ------------------------------------------------------------

    /// `(width, height)` in pixels.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.image.width(), self.image.height())
    }

    /// Borrow the underlying `DynamicImage`.
    pub fn as_dynamic(&self) -> &DynamicImage {
        &self.image
    }

    // -- Transformations (consume self, return new Self) -----------------------

    /// Shrink the image so it fits within `max_width` x `max_height`,
    /// preserving aspect ratio. Images that already fit are returned
    /// untouched. Uses Lanczos3 filtering.
    #[instrument(skip(self), fields(max_width, max_height))]
    pub fn thumbnail(self, max_width: u32, max_height: u32) -> Self {
        let (from_w, from_h) = self.dimensions();
        let (to_w, to_h) = thumbnail_dimensions(from_w, from_h, max_width, max_height);
        if (to_w, to_h) == (from_w, from_h) {
            debug!(from_w, from_h, "Already within bounds, not resizing");
            return self;
        }

        info!(from_w, from_h, to_w, to_h, "Shrinking logo");
        let resized = self
            .image
            .resize_exact(to_w, to_h, image::imageops::FilterType::Lanczos3);
        Self { image: resized }
    }
}

/// Size an image of `width` x `height` takes after shrinking to fit
/// `max_width` x `max_height`.
///
/// The constrained side becomes the bound exactly. The other side is the
/// floor or ceiling of its scaled length, whichever keeps the aspect ratio
/// closer (floor on a tie), and never less than one pixel.
pub fn thumbnail_dimensions(width: u32, height: u32, max_width: u32, max_height: u32) -> (u32, u32) {
    if width <= max_width && height <= max_height {
        return (width, height);
    }
    if width == 0 || height == 0 {
        return (width.min(max_width), height.min(max_height));
    }

    let aspect = f64::from(width) / f64::from(height);
    let bound_w = f64::from(max_width);
    let bound_h = f64::from(max_height);

    if bound_w / bound_h >= aspect {
        let w = round_aspect(bound_h * aspect, |n| (aspect - n / bound_h).abs());
        (w, max_height)
    } else {
        let h = round_aspect(bound_w / aspect, |n| {
            if n == 0.0 { 0.0 } else { (aspect - bound_w / n).abs() }
        });
        (max_width, h)
    }
}

fn round_aspect(value: f64, error: impl Fn(f64) -> f64) -> u32 {
    let lower = value.floor();
    let upper = value.ceil();
    let best = if error(upper) < error(lower) { upper } else { lower };
    (best as u32).max(1)
}

/// Write an RGBA image to `path` as PNG, creating parent directories as
/// needed.
#[instrument(skip_all, fields(path = %path.as_ref().display(), width = image.width(), height = image.height()))]
pub fn save_png(image: &RgbaImage, path: impl AsRef<Path>) -> Result<(), IconError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    image
        .save_with_format(path, ImageFormat::Png)
        .map_err(|err| {
            IconError::Encode(format!(
                "failed to save image to {}: {}",
                path.display(),
                err
            ))
        })?;
    debug!("PNG written");
    Ok(())
}
