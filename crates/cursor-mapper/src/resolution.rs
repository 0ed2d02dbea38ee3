//! Display resolution lookup.
//!
//! In-editor, a viewport only counts when stereo rendering is allowed on
//! it: the resolution feeds HMD spectator screens, so flat desktop
//! viewports report no resolution at all.

use spectator_platform_core::{DisplayMode, DisplaySurfaceProvider, Point2D, SurfaceViewport};

/// Pick the viewport the user is currently looking at.
///
/// - Standalone: the runtime viewport, if one exists.
/// - Editor: the play-preview viewport if it allows stereo, otherwise the
///   active editor viewport if it allows stereo, otherwise none.
pub fn select_viewport<P>(provider: &P) -> Option<SurfaceViewport>
where
    P: DisplaySurfaceProvider + ?Sized,
{
    if !provider.is_editor() {
        return provider.runtime_viewport();
    }

    provider
        .play_preview_viewport()
        .filter(|vp| vp.stereo_allowed)
        .or_else(|| provider.active_editor_viewport().filter(|vp| vp.stereo_allowed))
}

/// Pixel size of the active display surface, or `(0, 0)` when no eligible
/// viewport (or its window) exists.
pub fn resolve_display_resolution<P: DisplaySurfaceProvider + ?Sized>(provider: &P) -> Point2D {
    let size = select_viewport(provider)
        .map(|vp| vp.size_in_screen())
        .unwrap_or(Point2D::ZERO);

    tracing::debug!(
        mode = %DisplayMode::classify(provider),
        width = size.x,
        height = size.y,
        "Resolved spectator display resolution"
    );
    size
}
