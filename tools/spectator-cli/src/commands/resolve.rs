//! Show the resolved display resolution.

use std::path::PathBuf;

use serde::Serialize;

use spectator_cursor_mapper::{CursorCoordinateMapper, DisplayMode, Point2D};

#[derive(Serialize)]
struct ResolveReport {
    mode: DisplayMode,
    resolution: Point2D,
    available: bool,
}

pub fn run(surfaces: PathBuf, json: bool) -> anyhow::Result<()> {
    let snapshot = super::load_surfaces(&surfaces)?;
    let mapper = CursorCoordinateMapper::new(snapshot);

    let resolution = mapper.resolve_display_resolution();
    let report = ResolveReport {
        mode: mapper.display_mode(),
        resolution,
        available: resolution.is_positive_extent(),
    };

    if !json {
        println!("Display mode: {}", report.mode);
    }
    super::print_point("Resolution", resolution, &report, json)
}
