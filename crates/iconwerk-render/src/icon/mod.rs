// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Icon module — canvas compositing, safe-zone preview, and the end-to-end
// pipeline.

pub mod compositor;
pub mod pipeline;
pub mod preview;

pub use compositor::{ComposedIcon, IconCompositor};
pub use pipeline::{IconPipeline, Progress};
pub use preview::SafeZoneOverlay;
