//! Spectator Cursor Mapper
//!
//! Converts mouse-cursor positions between coordinate spaces for cursor
//! widgets shown on HMD spectator screens:
//!
//! - **Viewport pixels:** raw pointer positions reported by the host
//! - **Percentages:** pointer position relative to the active display surface
//! - **Widget space:** percentages scaled into a target widget's size
//! - **Middle-pivot offsets:** widget positions measured from the center
//!
//! The host is injected as a [`DisplaySurfaceProvider`]; nothing here reads
//! global engine state.

pub mod library;
pub mod mapper;
pub mod pivot;
pub mod resolution;

pub use mapper::{CursorCoordinateMapper, MappingConfig};
pub use pivot::recenter_for_middle_pivot;
pub use resolution::{resolve_display_resolution, select_viewport};

pub use spectator_platform_core::{
    DisplayMode, DisplaySurfaceProvider, Point2D, PointerSnapshot, PointerSource,
    SurfaceSnapshot, SurfaceViewport, WindowSize,
};

/// Canonical reference canvas used when no widget size or target
/// resolution is given.
pub const REFERENCE_CANVAS: Point2D = Point2D::new(1920.0, 1080.0);
