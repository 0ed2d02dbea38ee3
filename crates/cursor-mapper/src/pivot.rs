//! Middle-pivot offsets.

use spectator_platform_core::Point2D;

/// Re-express a top-left-origin position as an offset from the center of a
/// space of size `target_resolution`.
///
/// World-space widgets interact correctly only with a `(0.5, 0.5)` pivot, so
/// the cursor location is measured from the middle instead of a corner.
/// Results outside the target extent, or negative, are valid.
pub fn recenter_for_middle_pivot(absolute_pos: Point2D, target_resolution: Point2D) -> Point2D {
    target_resolution / 2.0 - absolute_pos
}
