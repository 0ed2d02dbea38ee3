//! Map a pointer position into widget space.

use std::path::PathBuf;

use serde::Serialize;

use spectator_common::config::AppConfig;
use spectator_cursor_mapper::{CursorCoordinateMapper, DisplayMode, MappingConfig, Point2D};

#[derive(Serialize)]
struct MapReport {
    mode: DisplayMode,
    resolution: Point2D,
    pointer: Point2D,
    widget_size: Point2D,
    location: Point2D,
}

#[allow(clippy::too_many_arguments)]
pub fn run(
    config: &AppConfig,
    surfaces: PathBuf,
    x: f64,
    y: f64,
    widget_width: Option<f64>,
    widget_height: Option<f64>,
    clamp: bool,
    strict: bool,
    json: bool,
) -> anyhow::Result<()> {
    let snapshot = super::load_surfaces(&surfaces)?;

    let mut mapping = MappingConfig::from(&config.mapping);
    mapping.widget_size =
        super::override_size("Widget size", mapping.widget_size, widget_width, widget_height)?;
    mapping.clamp_percentages |= clamp;

    let mapper = CursorCoordinateMapper::with_config(snapshot, mapping);
    let pointer = Point2D::new(x, y);

    let location = if strict {
        mapper.try_map_pointer_to_widget_space(pointer, mapping.widget_size)?
    } else {
        mapper.map_pointer(pointer)
    };

    let report = MapReport {
        mode: mapper.display_mode(),
        resolution: mapper.resolve_display_resolution(),
        pointer,
        widget_size: mapping.widget_size,
        location,
    };
    super::print_point("Widget location", location, &report, json)
}
