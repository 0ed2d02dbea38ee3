//! Offset an absolute widget position for a middle pivot.

use serde::Serialize;

use spectator_common::config::AppConfig;
use spectator_cursor_mapper::{recenter_for_middle_pivot, Point2D};

#[derive(Serialize)]
struct RecenterReport {
    absolute: Point2D,
    target_resolution: Point2D,
    offset: Point2D,
}

pub fn run(
    config: &AppConfig,
    x: f64,
    y: f64,
    width: Option<f64>,
    height: Option<f64>,
    json: bool,
) -> anyhow::Result<()> {
    let configured = Point2D::new(config.mapping.target_width, config.mapping.target_height);
    let target_resolution = super::override_size("Target resolution", configured, width, height)?;
    let absolute = Point2D::new(x, y);
    let offset = recenter_for_middle_pivot(absolute, target_resolution);

    let report = RecenterReport {
        absolute,
        target_resolution,
        offset,
    };
    super::print_point("Pivot offset", offset, &report, json)
}
