//! Geometry helpers shared by shapes, the gesture interpreter, and hit testing.
//!
//! This module provides:
//! - [`Point`] and [`Bounds`] value types
//! - Drag-rectangle normalization
//! - Circle radius from a drag
//! - Arrowhead geometry

use serde::{Deserialize, Serialize};

/// A canvas coordinate in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance_to(self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

/// Axis-aligned bounds used for hit testing and the drag rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Builds bounds from min/max corners.
    pub fn from_min_max(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self::new(min_x, min_y, max_x - min_x, max_y - min_y)
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Returns true when `point` lies inside or on the edge of the bounds.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left
            && point.x <= self.right()
            && point.y >= self.top
            && point.y <= self.bottom()
    }

    /// Grows the bounds evenly on every side.
    pub fn inflate(self, amount: f64) -> Self {
        Self::new(
            self.left - amount,
            self.top - amount,
            self.width + amount * 2.0,
            self.height + amount * 2.0,
        )
    }

    /// Smallest bounds covering both inputs.
    pub fn union(self, other: Bounds) -> Self {
        Self::from_min_max(
            self.left.min(other.left),
            self.top.min(other.top),
            self.right().max(other.right()),
            self.bottom().max(other.bottom()),
        )
    }
}

/// Normalizes a drag from `start` to `current` into a rectangle.
///
/// Width and height are absolute deltas; the anchor corner flips to the
/// pointer on any axis where the drag went negative, so the result always
/// spans both points regardless of drag direction.
pub fn normalize_drag_rect(start: Point, current: Point) -> Bounds {
    let dx = current.x - start.x;
    let dy = current.y - start.y;
    Bounds::new(
        if dx < 0.0 { current.x } else { start.x },
        if dy < 0.0 { current.y } else { start.y },
        dx.abs(),
        dy.abs(),
    )
}

/// Circle radius for a drag: half the distance from the start point.
///
/// The circle keeps its anchor at the start point, so the pointer does not sit
/// on the circle edge.
pub fn drag_radius(start: Point, current: Point) -> f64 {
    start.distance_to(current) / 2.0
}

/// Calculates the two arrowhead barbs for a shaft from `from` to `tip`.
///
/// Each barb starts at `tip` and ends `length` pixels back along the shaft,
/// rotated by `±angle_degrees` around the reversed shaft direction. A zero
/// length shaft yields `atan2(0, 0) = 0`, so the barbs still point left.
///
/// # Returns
/// `[first, second]` end points, for `angle - θ` and `angle + θ` respectively.
pub fn arrowhead_barbs(from: Point, tip: Point, length: f64, angle_degrees: f64) -> [Point; 2] {
    let angle = (tip.y - from.y).atan2(tip.x - from.x);
    let spread = angle_degrees.to_radians();
    let barb = |theta: f64| Point::new(tip.x - length * theta.cos(), tip.y - length * theta.sin());
    [barb(angle - spread), barb(angle + spread)]
}
