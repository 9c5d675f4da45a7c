// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// iconwerk-render — Image work for adaptive icon generation.
//
// Provides logo loading and aspect-preserving shrinking, compositing onto a
// transparent square canvas, the safe-zone preview overlay, and the pipeline
// that ties them together and writes the PNG outputs.

pub mod icon;
pub mod image;

// Re-export the primary structs so callers can use `iconwerk_render::IconPipeline` etc.
pub use icon::compositor::{ComposedIcon, IconCompositor};
pub use icon::pipeline::{IconPipeline, Progress};
pub use icon::preview::SafeZoneOverlay;
pub use self::image::processor::ImageProcessor;
