//! Freehand brush used by the draw and eraser tools.

use super::color::{BLACK, Color};
use super::shape::Shape;
use crate::util::Point;

/// Pencil-style brush: paints a polyline through every pointer sample.
#[derive(Debug, Clone, PartialEq)]
pub struct Brush {
    /// Stroke color
    pub color: Color,
    /// Stroke width in pixels
    pub width: f64,
    /// Points of the stroke in progress, if any
    stroke: Option<Vec<Point>>,
}

impl Default for Brush {
    /// One pixel black pencil, matching a freshly constructed canvas brush.
    fn default() -> Self {
        Self::new(BLACK, 1.0)
    }
}

impl Brush {
    pub fn new(color: Color, width: f64) -> Self {
        Self {
            color,
            width,
            stroke: None,
        }
    }

    /// Starts a stroke, discarding any unfinished one.
    pub fn begin(&mut self, at: Point) {
        self.stroke = Some(vec![at]);
    }

    /// Appends a sample to the stroke in progress.
    pub fn extend(&mut self, to: Point) {
        if let Some(points) = &mut self.stroke {
            points.push(to);
        }
    }

    /// Samples of the stroke in progress, for live preview.
    pub fn stroke_points(&self) -> Option<&[Point]> {
        self.stroke.as_deref()
    }

    /// Ends the stroke and returns it as a path with the brush's current paint.
    pub fn finish(&mut self) -> Option<Shape> {
        self.stroke.take().map(|points| Shape::Path {
            points,
            stroke: self.color,
            stroke_width: self.width,
        })
    }

    /// Drops the stroke in progress without producing a shape.
    pub fn cancel(&mut self) {
        self.stroke = None;
    }
}
