//! Design-space geometry.
//!
//! All positions and path data in the engine are expressed in a fixed
//! 400x500 logical coordinate system, independent of on-screen pixel scale.

use serde::{Deserialize, Serialize};

/// Width of the logical design space.
pub const DESIGN_WIDTH: f64 = 400.0;

/// Height of the logical design space.
pub const DESIGN_HEIGHT: f64 = 500.0;

/// A point in design-space coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Creates a new point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Reflects the point about the vertical midline of the design space.
    ///
    /// This is the reflection mirrored logo placements are derived with:
    /// `x' = 400 - x`, `y` unchanged.
    pub fn reflect_x(&self) -> Self {
        Self {
            x: DESIGN_WIDTH - self.x,
            y: self.y,
        }
    }
}
