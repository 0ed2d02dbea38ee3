//! 2D coordinate type.
//!
//! The unit of a [`Point2D`] is set by the calling convention: viewport
//! pixels, `[0.0, 1.0]` percentages, widget-space positions, sizes and
//! centered offsets all share this type. No range is enforced.

use std::ops::{Div, Mul, Sub};

use serde::{Deserialize, Serialize};

/// A 2D point or extent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub const ZERO: Point2D = Point2D { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Whether both components are positive and finite, i.e. usable as a divisor.
    pub fn is_positive_extent(&self) -> bool {
        self.is_finite() && self.x > 0.0 && self.y > 0.0
    }

    /// Clamp both components to `[0.0, 1.0]`.
    pub fn clamp_unit(self) -> Point2D {
        Point2D {
            x: self.x.clamp(0.0, 1.0),
            y: self.y.clamp(0.0, 1.0),
        }
    }
}

impl Sub for Point2D {
    type Output = Point2D;
    fn sub(self, rhs: Point2D) -> Point2D {
        Point2D::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Component-wise product.
impl Mul for Point2D {
    type Output = Point2D;
    fn mul(self, rhs: Point2D) -> Point2D {
        Point2D::new(self.x * rhs.x, self.y * rhs.y)
    }
}

/// Component-wise quotient.
impl Div for Point2D {
    type Output = Point2D;
    fn div(self, rhs: Point2D) -> Point2D {
        Point2D::new(self.x / rhs.x, self.y / rhs.y)
    }
}

impl Div<f64> for Point2D {
    type Output = Point2D;
    fn div(self, rhs: f64) -> Point2D {
        Point2D::new(self.x / rhs, self.y / rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_componentwise_ops() {
        let a = Point2D::new(0.5, 0.25);
        let b = Point2D::new(1920.0, 1080.0);
        assert_eq!(a * b, Point2D::new(960.0, 270.0));
        assert_eq!(b / Point2D::new(2.0, 4.0), Point2D::new(960.0, 270.0));
        assert_eq!(b / 2.0 - a, Point2D::new(959.5, 539.75));
    }

    #[test]
    fn test_positive_extent() {
        assert!(Point2D::new(2560.0, 1440.0).is_positive_extent());
        assert!(!Point2D::ZERO.is_positive_extent());
        assert!(!Point2D::new(1920.0, -1.0).is_positive_extent());
        assert!(!Point2D::new(f64::INFINITY, 1080.0).is_positive_extent());
    }

    #[test]
    fn test_clamp_unit() {
        let p = Point2D::new(-0.2, 1.3).clamp_unit();
        assert_eq!(p, Point2D::new(0.0, 1.0));
    }

    #[test]
    fn test_serde_shape() {
        let p: Point2D = serde_json::from_str(r#"{"x":1.5,"y":2.0}"#).unwrap();
        assert_eq!(p, Point2D::new(1.5, 2.0));
    }
}
