//! Surface rectangle as reported by the geometry source.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use wobble_types::{Scalar, WobbleError, WobbleResult};

/// Axis-aligned rectangle `(x, y, width, height)`, y growing downwards.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: Scalar,
    pub y: Scalar,
    pub width: Scalar,
    pub height: Scalar,
}

impl Rect {
    #[inline]
    pub const fn new(x: Scalar, y: Scalar, width: Scalar, height: Scalar) -> Self {
        Self { x, y, width, height }
    }

    /// Top-left corner of the rectangle.
    #[inline]
    pub fn origin(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Geometric center.
    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    /// Radius of the largest circle inscribed in the rectangle.
    #[inline]
    pub fn inscribed_radius(&self) -> Scalar {
        self.width.min(self.height) * 0.5
    }

    /// Returns true when either dimension is zero (a flat, degenerate shape).
    pub fn is_degenerate(&self) -> bool {
        self.width == 0.0 || self.height == 0.0
    }

    /// Checks the rectangle can drive the simulation.
    ///
    /// Non-finite coordinates are rejected. Negative extents are clamped
    /// to zero, which yields a valid flat shape.
    pub fn validated(self) -> WobbleResult<Self> {
        let values = [self.x, self.y, self.width, self.height];
        if values.iter().any(|v| !v.is_finite()) {
            return Err(WobbleError::InvalidGeometry(format!(
                "Rectangle has non-finite components: {:?}",
                self
            )));
        }
        Ok(Self {
            width: self.width.max(0.0),
            height: self.height.max(0.0),
            ..self
        })
    }
}
