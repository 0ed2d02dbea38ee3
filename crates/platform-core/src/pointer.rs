//! Pointer position contract.

use serde::{Deserialize, Serialize};

use crate::point::Point2D;

/// Source of the current pointer position in viewport-pixel coordinates.
pub trait PointerSource {
    /// Current pointer position, or `None` when the host has no pointer
    /// (e.g. no player or the cursor is outside every viewport).
    fn pointer_position(&self) -> Option<Point2D>;
}

impl<T: PointerSource + ?Sized> PointerSource for &T {
    fn pointer_position(&self) -> Option<Point2D> {
        (**self).pointer_position()
    }
}

/// Fixed pointer position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PointerSnapshot {
    pub position: Option<Point2D>,
}

impl PointerSnapshot {
    pub fn at(x: f64, y: f64) -> Self {
        Self {
            position: Some(Point2D::new(x, y)),
        }
    }

    pub fn absent() -> Self {
        Self { position: None }
    }
}

impl PointerSource for PointerSnapshot {
    fn pointer_position(&self) -> Option<Point2D> {
        self.position
    }
}
