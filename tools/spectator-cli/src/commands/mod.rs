pub mod check;
pub mod map;
pub mod recenter;
pub mod resolve;

use std::path::Path;

use anyhow::Context;
use serde::Serialize;

use spectator_platform_core::{Point2D, SurfaceSnapshot};

/// Load a host surface snapshot from JSON.
pub fn load_surfaces(path: &Path) -> anyhow::Result<SurfaceSnapshot> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read surfaces {}", path.display()))?;
    let snapshot = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse surfaces {}", path.display()))?;
    tracing::debug!(path = %path.display(), "Loaded surface snapshot");
    Ok(snapshot)
}

/// Apply command-line size overrides on top of a configured size.
///
/// Overrides go through the same positive-finite rule as the config file.
pub fn override_size(
    what: &str,
    base: Point2D,
    width: Option<f64>,
    height: Option<f64>,
) -> anyhow::Result<Point2D> {
    let size = Point2D::new(width.unwrap_or(base.x), height.unwrap_or(base.y));
    anyhow::ensure!(
        size.is_positive_extent(),
        "{what} must be positive and finite, got {}x{}",
        size.x,
        size.y
    );
    Ok(size)
}

/// Print a labelled point as text or as a JSON document.
pub fn print_point<T: Serialize>(
    label: &str,
    point: Point2D,
    report: &T,
    json: bool,
) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        println!("{label}: ({}, {})", point.x, point.y);
    }
    Ok(())
}

#[cfg(test)]
pub(crate) fn fixture_path(name: &str) -> std::path::PathBuf {
    std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("fixtures")
        .join("surfaces")
        .join(name)
}
