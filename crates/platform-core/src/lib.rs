//! Spectator platform core contracts.
//!
//! This crate contains the data structures and collaborator traits the
//! cursor mapper consumes without coupling to a concrete engine host:
//!
//! - [`Point2D`]: the coordinate type shared by pixels, percentages and offsets
//! - [`DisplaySurfaceProvider`]: editor/runtime viewport queries
//! - [`PointerSource`]: current pointer position in viewport pixels
//!
//! Snapshot implementations of both traits let tests and tooling describe
//! engine state as plain data.

pub mod point;
pub mod pointer;
pub mod surface;

pub use point::Point2D;
pub use pointer::{PointerSnapshot, PointerSource};
pub use surface::{
    DisplayMode, DisplaySurfaceProvider, SurfaceSnapshot, SurfaceViewport, WindowSize,
};
