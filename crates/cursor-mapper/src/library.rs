//! Script-facing function surface.
//!
//! Flat functions with the names script authors already know. A `None`
//! size argument means the 1920x1080 reference canvas.

use spectator_platform_core::{DisplaySurfaceProvider, Point2D, PointerSource};

use crate::mapper::CursorCoordinateMapper;
use crate::pivot::recenter_for_middle_pivot;
use crate::resolution::resolve_display_resolution;
use crate::REFERENCE_CANVAS;

/// Spectator display resolution for both editor and packaged builds.
pub fn get_spectator_display_resolution<P: DisplaySurfaceProvider>(provider: &P) -> Point2D {
    resolve_display_resolution(provider)
}

/// Cursor position in widget space, measured from the widget's top-left corner.
///
/// Returns `(0, 0)` when the pointer source has no position or no eligible
/// display surface exists.
pub fn get_absolute_location_for_cursor_widget_from_mouse_position<P, S>(
    provider: &P,
    pointer_source: &S,
    widget_size: Option<Point2D>,
) -> Point2D
where
    P: DisplaySurfaceProvider,
    S: PointerSource + ?Sized,
{
    let Some(pointer) = pointer_source.pointer_position() else {
        tracing::debug!("No pointer position available");
        return Point2D::ZERO;
    };

    CursorCoordinateMapper::new(provider)
        .map_pointer_to_widget_space(pointer, widget_size.unwrap_or(REFERENCE_CANVAS))
}

/// Cursor location corrected for a `(0.5, 0.5)` widget pivot.
pub fn offset_cursor_widget_from_mouse_location_for_middle_pivot(
    absolute_cursor_location: Point2D,
    target_resolution: Option<Point2D>,
) -> Point2D {
    recenter_for_middle_pivot(
        absolute_cursor_location,
        target_resolution.unwrap_or(REFERENCE_CANVAS),
    )
}
