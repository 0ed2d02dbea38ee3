//! Cursor coordinate mapper.
//!
//! Pointer positions arrive in viewport pixels. Mapping divides by the
//! resolved display resolution to get percentages, then scales those into
//! the target widget's size. Widget space keeps the top-left origin.

use spectator_common::config::MappingDefaults;
use spectator_common::error::{SpectatorError, SpectatorResult};
use spectator_platform_core::{DisplayMode, DisplaySurfaceProvider, Point2D};

use crate::pivot::recenter_for_middle_pivot;
use crate::resolution::resolve_display_resolution;
use crate::REFERENCE_CANVAS;

/// Mapping behavior knobs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MappingConfig {
    /// Widget size used by [`CursorCoordinateMapper::map_pointer`].
    pub widget_size: Point2D,
    /// Target resolution used by [`CursorCoordinateMapper::recenter`].
    pub target_resolution: Point2D,
    /// Clamp percentages to `[0.0, 1.0]` so a pointer outside the display
    /// lands on the widget edge instead of past it.
    pub clamp_percentages: bool,
}

impl Default for MappingConfig {
    fn default() -> Self {
        Self {
            widget_size: REFERENCE_CANVAS,
            target_resolution: REFERENCE_CANVAS,
            clamp_percentages: false,
        }
    }
}

impl From<&MappingDefaults> for MappingConfig {
    fn from(defaults: &MappingDefaults) -> Self {
        Self {
            widget_size: Point2D::new(defaults.widget_width, defaults.widget_height),
            target_resolution: Point2D::new(defaults.target_width, defaults.target_height),
            clamp_percentages: defaults.clamp_percentages,
        }
    }
}

/// Maps pointer positions against the display surface reported by `P`.
///
/// Holds no state besides its provider and config; every query re-reads
/// the provider.
#[derive(Debug, Clone)]
pub struct CursorCoordinateMapper<P> {
    provider: P,
    config: MappingConfig,
}

impl<P: DisplaySurfaceProvider> CursorCoordinateMapper<P> {
    pub fn new(provider: P) -> Self {
        Self::with_config(provider, MappingConfig::default())
    }

    pub fn with_config(provider: P, config: MappingConfig) -> Self {
        Self { provider, config }
    }

    pub fn display_mode(&self) -> DisplayMode {
        DisplayMode::classify(&self.provider)
    }

    /// Pixel size of the active display surface; `(0, 0)` if none is eligible.
    pub fn resolve_display_resolution(&self) -> Point2D {
        resolve_display_resolution(&self.provider)
    }

    /// Pointer position as a fraction of the display resolution.
    pub fn normalize_pointer(&self, pointer_pixel_pos: Point2D) -> SpectatorResult<Point2D> {
        let resolution = self.resolve_display_resolution();
        if !resolution.is_positive_extent() {
            return Err(SpectatorError::degenerate_resolution(
                resolution.x,
                resolution.y,
            ));
        }

        let percentage = pointer_pixel_pos / resolution;
        if self.config.clamp_percentages {
            Ok(percentage.clamp_unit())
        } else {
            Ok(percentage)
        }
    }

    /// Map a viewport-pixel pointer position into a widget of `widget_size`.
    ///
    /// Fails with [`SpectatorError::DegenerateResolution`] when no eligible
    /// viewport exists.
    pub fn try_map_pointer_to_widget_space(
        &self,
        pointer_pixel_pos: Point2D,
        widget_size: Point2D,
    ) -> SpectatorResult<Point2D> {
        tracing::trace!(
            x = pointer_pixel_pos.x,
            y = pointer_pixel_pos.y,
            "Mouse position"
        );
        Ok(self.normalize_pointer(pointer_pixel_pos)? * widget_size)
    }

    /// Like [`Self::try_map_pointer_to_widget_space`], but falls back to
    /// `(0, 0)` on a degenerate resolution.
    pub fn map_pointer_to_widget_space(
        &self,
        pointer_pixel_pos: Point2D,
        widget_size: Point2D,
    ) -> Point2D {
        match self.try_map_pointer_to_widget_space(pointer_pixel_pos, widget_size) {
            Ok(mapped) => mapped,
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    mode = %self.display_mode(),
                    "Cursor mapping fell back to origin"
                );
                Point2D::ZERO
            }
        }
    }

    /// Map into the configured widget size.
    pub fn map_pointer(&self, pointer_pixel_pos: Point2D) -> Point2D {
        self.map_pointer_to_widget_space(pointer_pixel_pos, self.config.widget_size)
    }

    /// Middle-pivot offset against the configured target resolution.
    pub fn recenter(&self, absolute_pos: Point2D) -> Point2D {
        recenter_for_middle_pivot(absolute_pos, self.config.target_resolution)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spectator_platform_core::{SurfaceSnapshot, SurfaceViewport};

    fn standalone(width: f64, height: f64) -> CursorCoordinateMapper<SurfaceSnapshot> {
        CursorCoordinateMapper::new(SurfaceSnapshot::standalone(width, height))
    }

    #[test]
    fn test_maps_into_reference_canvas() {
        let mapper = standalone(2560.0, 1440.0);
        let mapped =
            mapper.map_pointer_to_widget_space(Point2D::new(1280.0, 720.0), REFERENCE_CANVAS);
        assert_eq!(mapped, Point2D::new(960.0, 540.0));
    }

    #[test]
    fn test_corner_maps_to_full_widget() {
        let mapper = standalone(2560.0, 1440.0);
        let widget = Point2D::new(800.0, 600.0);
        let mapped = mapper.map_pointer_to_widget_space(Point2D::new(2560.0, 1440.0), widget);
        assert_eq!(mapped, widget);
    }

    #[test]
    fn test_degenerate_resolution_errors() {
        let mapper = CursorCoordinateMapper::new(SurfaceSnapshot::editor());
        let err = mapper
            .try_map_pointer_to_widget_space(Point2D::new(10.0, 10.0), REFERENCE_CANVAS)
            .unwrap_err();
        assert!(matches!(
            err,
            SpectatorError::DegenerateResolution { width, height } if width == 0.0 && height == 0.0
        ));
    }

    #[test]
    fn test_degenerate_resolution_falls_back_to_origin() {
        let snapshot = SurfaceSnapshot::editor()
            .with_active_editor(SurfaceViewport::new(1600.0, 900.0, false));
        let mapper = CursorCoordinateMapper::new(snapshot);
        let mapped =
            mapper.map_pointer_to_widget_space(Point2D::new(800.0, 450.0), REFERENCE_CANVAS);
        assert_eq!(mapped, Point2D::ZERO);
        assert!(mapped.is_finite());
    }

    #[test]
    fn test_unclamped_by_default() {
        let mapper = standalone(1000.0, 500.0);
        let pct = mapper.normalize_pointer(Point2D::new(1100.0, -50.0)).unwrap();
        assert!((pct.x - 1.1).abs() < 1e-12);
        assert!((pct.y + 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_clamped_when_configured() {
        let config = MappingConfig {
            clamp_percentages: true,
            ..MappingConfig::default()
        };
        let mapper =
            CursorCoordinateMapper::with_config(SurfaceSnapshot::standalone(1000.0, 500.0), config);
        let mapped = mapper.map_pointer(Point2D::new(1100.0, -50.0));
        assert_eq!(mapped, Point2D::new(1920.0, 0.0));
    }

    #[test]
    fn test_config_from_defaults() {
        let defaults = MappingDefaults {
            widget_width: 1280.0,
            widget_height: 720.0,
            ..MappingDefaults::default()
        };
        let config = MappingConfig::from(&defaults);
        assert_eq!(config.widget_size, Point2D::new(1280.0, 720.0));
        assert_eq!(config.target_resolution, REFERENCE_CANVAS);

        let mapper =
            CursorCoordinateMapper::with_config(SurfaceSnapshot::standalone(640.0, 360.0), config);
        assert_eq!(
            mapper.map_pointer(Point2D::new(320.0, 180.0)),
            Point2D::new(640.0, 360.0)
        );
        assert_eq!(mapper.recenter(Point2D::ZERO), Point2D::new(960.0, 540.0));
    }

    #[test]
    fn test_mapper_borrows_provider() {
        let snapshot = SurfaceSnapshot::standalone(1920.0, 1080.0);
        let mapper = CursorCoordinateMapper::new(&snapshot);
        assert_eq!(mapper.display_mode(), DisplayMode::Standalone);
        assert_eq!(
            mapper.resolve_display_resolution(),
            Point2D::new(1920.0, 1080.0)
        );
    }
}
