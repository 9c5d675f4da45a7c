// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Icon pipeline — open the logo, shrink it into the safe zone, centre it on
// the canvas, write the icon, then derive and write the preview.
//
// The two writes are not transactional: if the preview fails, the icon that
// was already written stays on disk.

use std::path::PathBuf;

use iconwerk_core::error::Result;
use iconwerk_core::{IconConfig, IconReport, Placement};
use tracing::{info, instrument};

use crate::icon::compositor::IconCompositor;
use crate::icon::preview::SafeZoneOverlay;
use crate::image::processor::{self, ImageProcessor};

/// Milestones reported while the pipeline runs.
#[derive(Debug, Clone, PartialEq)]
pub enum Progress {
    /// The source logo was decoded.
    LogoLoaded { width: u32, height: u32 },
    /// The adaptive icon was written.
    IconWritten {
        path: PathBuf,
        canvas_size: (u32, u32),
        placement: Placement,
    },
    /// The safe-zone preview was written.
    PreviewWritten { path: PathBuf },
}

/// Runs one logo through to an adaptive icon and its preview.
pub struct IconPipeline {
    config: IconConfig,
}

impl IconPipeline {
    /// Build a pipeline, rejecting invalid settings up front.
    pub fn new(config: IconConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Run without progress reporting.
    pub fn run(&self) -> Result<IconReport> {
        self.run_with_progress(|_| {})
    }

    /// Run the whole pipeline, calling `on_progress` after each milestone.
    #[instrument(skip_all, fields(input = %self.config.input_path.display()))]
    pub fn run_with_progress(&self, mut on_progress: impl FnMut(Progress)) -> Result<IconReport> {
        let cfg = &self.config;

        let source = ImageProcessor::open(&cfg.input_path)?;
        let original_size = source.dimensions();
        on_progress(Progress::LogoLoaded {
            width: original_size.0,
            height: original_size.1,
        });

        let safe = cfg.safe_size();
        let logo = source.thumbnail(safe, safe);

        let icon = IconCompositor::from_config(cfg).compose(logo.as_dynamic());
        processor::save_png(&icon.canvas, &cfg.icon_path)?;
        let canvas_size = icon.canvas.dimensions();
        info!(path = %cfg.icon_path.display(), "Adaptive icon written");
        on_progress(Progress::IconWritten {
            path: cfg.icon_path.clone(),
            canvas_size,
            placement: icon.placement,
        });

        let preview = SafeZoneOverlay::from_config(cfg).render(&icon.canvas);
        processor::save_png(&preview, &cfg.preview_path)?;
        info!(path = %cfg.preview_path.display(), "Safe-zone preview written");
        on_progress(Progress::PreviewWritten {
            path: cfg.preview_path.clone(),
        });

        Ok(IconReport {
            original_size,
            canvas_size,
            placement: icon.placement,
            masked: icon.masked,
            icon_path: cfg.icon_path.clone(),
            preview_path: cfg.preview_path.clone(),
        })
    }
}
