//! Display surface contracts.
//!
//! A host exposes up to three viewports: the standalone runtime viewport,
//! the editor's play-in-editor preview viewport, and the editor's general
//! active viewport. Each may or may not allow stereo (HMD) rendering and
//! may or may not have an owning window yet.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::point::Point2D;

/// Window size in screen pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WindowSize {
    pub width: f64,
    pub height: f64,
}

impl WindowSize {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn as_point(&self) -> Point2D {
        Point2D::new(self.width, self.height)
    }
}

/// What the host reports about one viewport.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SurfaceViewport {
    /// Whether stereo rendering is currently allowed on this viewport.
    #[serde(default)]
    pub stereo_allowed: bool,

    /// Owning window, if it has been created.
    #[serde(default)]
    pub window: Option<WindowSize>,
}

impl SurfaceViewport {
    pub fn new(width: f64, height: f64, stereo_allowed: bool) -> Self {
        Self {
            stereo_allowed,
            window: Some(WindowSize::new(width, height)),
        }
    }

    /// A viewport whose window does not exist yet.
    pub fn windowless(stereo_allowed: bool) -> Self {
        Self {
            stereo_allowed,
            window: None,
        }
    }

    /// Window size in screen pixels, `(0, 0)` when there is no window.
    pub fn size_in_screen(&self) -> Point2D {
        self.window.map(|w| w.as_point()).unwrap_or(Point2D::ZERO)
    }
}

/// Host-side viewport queries.
pub trait DisplaySurfaceProvider {
    /// Whether the process is running inside an editor host.
    fn is_editor(&self) -> bool;

    /// The runtime viewport owned by a standalone application.
    fn runtime_viewport(&self) -> Option<SurfaceViewport>;

    /// The editor's play-in-editor preview viewport.
    fn play_preview_viewport(&self) -> Option<SurfaceViewport>;

    /// The editor's general active viewport.
    fn active_editor_viewport(&self) -> Option<SurfaceViewport>;
}

impl<T: DisplaySurfaceProvider + ?Sized> DisplaySurfaceProvider for &T {
    fn is_editor(&self) -> bool {
        (**self).is_editor()
    }

    fn runtime_viewport(&self) -> Option<SurfaceViewport> {
        (**self).runtime_viewport()
    }

    fn play_preview_viewport(&self) -> Option<SurfaceViewport> {
        (**self).play_preview_viewport()
    }

    fn active_editor_viewport(&self) -> Option<SurfaceViewport> {
        (**self).active_editor_viewport()
    }
}

/// Which surface query path applies to the current host state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayMode {
    /// Packaged build with its own runtime window.
    Standalone,
    /// Editor with a play-preview viewport that allows stereo rendering.
    #[serde(rename = "editor_preview_vr")]
    EditorPreviewVR,
    /// Editor with a play-preview viewport that is desktop-only.
    EditorPreviewFlat,
    /// Editor without a play-preview viewport.
    EditorNoPreview,
}

impl DisplayMode {
    /// Classify the provider's current state. Recomputed on every call.
    pub fn classify<P: DisplaySurfaceProvider + ?Sized>(provider: &P) -> Self {
        if !provider.is_editor() {
            return DisplayMode::Standalone;
        }
        match provider.play_preview_viewport() {
            Some(vp) if vp.stereo_allowed => DisplayMode::EditorPreviewVR,
            Some(_) => DisplayMode::EditorPreviewFlat,
            None => DisplayMode::EditorNoPreview,
        }
    }

    pub fn is_editor(&self) -> bool {
        !matches!(self, DisplayMode::Standalone)
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DisplayMode::Standalone => "standalone",
            DisplayMode::EditorPreviewVR => "editor (VR preview)",
            DisplayMode::EditorPreviewFlat => "editor (flat preview)",
            DisplayMode::EditorNoPreview => "editor (no preview)",
        };
        f.write_str(name)
    }
}

/// Host state captured as plain data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceSnapshot {
    pub is_editor: bool,
    pub runtime_viewport: Option<SurfaceViewport>,
    pub play_preview_viewport: Option<SurfaceViewport>,
    pub active_editor_viewport: Option<SurfaceViewport>,
}

impl SurfaceSnapshot {
    /// Standalone host with a single runtime window.
    pub fn standalone(width: f64, height: f64) -> Self {
        Self {
            is_editor: false,
            runtime_viewport: Some(SurfaceViewport::new(width, height, false)),
            ..Self::default()
        }
    }

    /// Editor host with no viewports yet.
    pub fn editor() -> Self {
        Self {
            is_editor: true,
            ..Self::default()
        }
    }

    pub fn with_play_preview(mut self, viewport: SurfaceViewport) -> Self {
        self.play_preview_viewport = Some(viewport);
        self
    }

    pub fn with_active_editor(mut self, viewport: SurfaceViewport) -> Self {
        self.active_editor_viewport = Some(viewport);
        self
    }
}

impl DisplaySurfaceProvider for SurfaceSnapshot {
    fn is_editor(&self) -> bool {
        self.is_editor
    }

    fn runtime_viewport(&self) -> Option<SurfaceViewport> {
        self.runtime_viewport
    }

    fn play_preview_viewport(&self) -> Option<SurfaceViewport> {
        self.play_preview_viewport
    }

    fn active_editor_viewport(&self) -> Option<SurfaceViewport> {
        self.active_editor_viewport
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_standalone_ignores_editor_viewports() {
        let snapshot = SurfaceSnapshot {
            is_editor: false,
            play_preview_viewport: Some(SurfaceViewport::new(1920.0, 1080.0, true)),
            ..SurfaceSnapshot::default()
        };
        assert_eq!(DisplayMode::classify(&snapshot), DisplayMode::Standalone);
    }

    #[test]
    fn test_classify_editor_modes() {
        let vr = SurfaceSnapshot::editor().with_play_preview(SurfaceViewport::new(
            2160.0, 1200.0, true,
        ));
        assert_eq!(DisplayMode::classify(&vr), DisplayMode::EditorPreviewVR);

        let flat = SurfaceSnapshot::editor().with_play_preview(SurfaceViewport::new(
            1280.0, 720.0, false,
        ));
        assert_eq!(DisplayMode::classify(&flat), DisplayMode::EditorPreviewFlat);

        let none = SurfaceSnapshot::editor();
        assert_eq!(DisplayMode::classify(&none), DisplayMode::EditorNoPreview);
        assert!(DisplayMode::EditorNoPreview.is_editor());
    }

    #[test]
    fn test_windowless_viewport_reports_zero_size() {
        assert_eq!(SurfaceViewport::windowless(true).size_in_screen(), Point2D::ZERO);
    }

    #[test]
    fn test_snapshot_parses_from_sparse_json() {
        let json = r#"{
            "is_editor": true,
            "active_editor_viewport": {
                "stereo_allowed": true,
                "window": { "width": 1600, "height": 900 }
            }
        }"#;
        let snapshot: SurfaceSnapshot = serde_json::from_str(json).unwrap();
        assert!(snapshot.is_editor);
        assert!(snapshot.play_preview_viewport.is_none());
        assert_eq!(
            snapshot.active_editor_viewport,
            Some(SurfaceViewport::new(1600.0, 900.0, true))
        );
    }
}
