// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Iconwerk — adaptive icon generator
//
// Entry point. Initialises logging, runs the icon pipeline against the fixed
// asset paths, and prints progress lines to stdout. Diagnostics go to stderr.

use std::process::ExitCode;

use iconwerk_core::human_errors::humanize_error;
use iconwerk_core::IconConfig;
use iconwerk_render::{IconPipeline, Progress};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("Iconwerk starting");

    let result = IconPipeline::new(IconConfig::default())
        .and_then(|pipeline| pipeline.run_with_progress(|p| print_progress(&p)));

    match result {
        Ok(report) => {
            tracing::debug!(masked = report.masked, "Icon run complete");
            ExitCode::SUCCESS
        }
        Err(err) => {
            // Reported, not panicked; the non-zero status lets scripts notice.
            tracing::error!(error = %err, "Icon run failed");
            let human = humanize_error(&err);
            println!("❌ {}", human.message);
            println!("   {}", human.suggestion);
            ExitCode::FAILURE
        }
    }
}

fn print_progress(progress: &Progress) {
    for line in progress_lines(progress) {
        println!("{line}");
    }
}

/// Console lines shown for each pipeline milestone.
fn progress_lines(progress: &Progress) -> Vec<String> {
    match progress {
        Progress::LogoLoaded { width, height } => {
            vec![format!("Original logo size: ({width}, {height})")]
        }
        Progress::IconWritten {
            path,
            canvas_size,
            placement,
        } => vec![
            format!("✓ Adaptive icon created successfully at: {}", path.display()),
            format!("✓ New size: ({}, {})", canvas_size.0, canvas_size.1),
            format!(
                "✓ Logo size in icon: ({}, {})",
                placement.width, placement.height
            ),
            format!("✓ Position: ({}, {})", placement.x, placement.y),
        ],
        Progress::PreviewWritten { path } => vec![format!(
            "✓ Preview created at: {} (with red circle showing safe zone)",
            path.display()
        )],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iconwerk_core::Placement;
    use std::path::PathBuf;

    #[test]
    fn icon_written_reports_size_and_position() {
        let lines = progress_lines(&Progress::IconWritten {
            path: PathBuf::from("assets/adaptive-icon.png"),
            canvas_size: (1024, 1024),
            placement: Placement {
                x: 205,
                y: 358,
                width: 614,
                height: 307,
            },
        });
        assert_eq!(
            lines,
            vec![
                "✓ Adaptive icon created successfully at: assets/adaptive-icon.png",
                "✓ New size: (1024, 1024)",
                "✓ Logo size in icon: (614, 307)",
                "✓ Position: (205, 358)",
            ]
        );
    }

    #[test]
    fn loaded_and_preview_are_single_lines() {
        let loaded = progress_lines(&Progress::LogoLoaded {
            width: 2000,
            height: 1000,
        });
        assert_eq!(loaded, vec!["Original logo size: (2000, 1000)"]);

        let preview = progress_lines(&Progress::PreviewWritten {
            path: PathBuf::from("assets/adaptive-icon-preview.png"),
        });
        assert_eq!(preview.len(), 1);
        assert!(preview[0].contains("assets/adaptive-icon-preview.png"));
    }
}
