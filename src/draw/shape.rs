//! Shape definitions for canvas objects.

use super::color::Color;
use super::font::FontDescriptor;
use crate::util::{Bounds, Point};
use serde::{Deserialize, Serialize};

/// Fill and stroke applied to closed shapes.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Style {
    /// Interior paint; `None` leaves the interior transparent
    pub fill: Option<Color>,
    /// Outline paint; `None` skips the outline
    pub stroke: Option<Color>,
    /// Outline width in pixels
    pub stroke_width: f64,
    /// Multiplier applied on top of the paint alpha
    pub opacity: f64,
}

impl Style {
    /// Transparent interior with a colored outline.
    pub fn outline(stroke: Color, stroke_width: f64) -> Self {
        Self {
            fill: None,
            stroke: Some(stroke),
            stroke_width,
            opacity: 1.0,
        }
    }

    /// Solid interior, no outline.
    pub fn filled(fill: Color) -> Self {
        Self {
            fill: Some(fill),
            stroke: None,
            stroke_width: 0.0,
            opacity: 1.0,
        }
    }

    /// Solid interior with an outline.
    pub fn filled_outline(fill: Color, stroke: Color, stroke_width: f64) -> Self {
        Self {
            fill: Some(fill),
            stroke: Some(stroke),
            stroke_width,
            opacity: 1.0,
        }
    }

    pub fn with_opacity(self, opacity: f64) -> Self {
        Self { opacity, ..self }
    }

    fn stroke_padding(&self) -> f64 {
        if self.stroke.is_some() {
            self.stroke_width / 2.0
        } else {
            0.0
        }
    }
}

/// Represents a drawable object on the canvas.
///
/// Coordinates follow the canvas convention: `left`/`top` are the top-left of
/// the shape's box. Group children are positioned relative to the group origin.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Shape {
    /// Straight segment between two points
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        stroke: Color,
        stroke_width: f64,
    },
    /// Axis-aligned rectangle, optionally with rounded corners
    Rect {
        left: f64,
        top: f64,
        width: f64,
        height: f64,
        /// Corner radius (0 for square corners)
        corner_radius: f64,
        style: Style,
    },
    /// Circle whose box starts at `left`/`top` and spans `2 * radius`
    Circle {
        left: f64,
        top: f64,
        radius: f64,
        style: Style,
    },
    /// Ellipse whose box starts at `left`/`top` and spans `2 * rx` by `2 * ry`
    Ellipse {
        left: f64,
        top: f64,
        rx: f64,
        ry: f64,
        style: Style,
    },
    /// Freehand brush stroke
    Path {
        points: Vec<Point>,
        stroke: Color,
        stroke_width: f64,
    },
    /// Text block; `top` is the top of the first line
    Text {
        left: f64,
        top: f64,
        text: String,
        fill: Color,
        font_size: f64,
        font: FontDescriptor,
    },
    /// Atomic composite; children use group-local coordinates
    Group {
        left: f64,
        top: f64,
        children: Vec<Shape>,
    },
}

impl Shape {
    /// Short name used in logs and scene dumps.
    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Line { .. } => "line",
            Shape::Rect { .. } => "rect",
            Shape::Circle { .. } => "circle",
            Shape::Ellipse { .. } => "ellipse",
            Shape::Path { .. } => "path",
            Shape::Text { .. } => "text",
            Shape::Group { .. } => "group",
        }
    }

    /// Returns the axis-aligned bounding box, expanded to cover the stroke.
    pub fn bounding_box(&self) -> Bounds {
        match self {
            Shape::Line {
                x1,
                y1,
                x2,
                y2,
                stroke_width,
                ..
            } => Bounds::from_min_max(x1.min(*x2), y1.min(*y2), x1.max(*x2), y1.max(*y2))
                .inflate(stroke_width / 2.0),
            Shape::Rect {
                left,
                top,
                width,
                height,
                style,
                ..
            } => Bounds::new(*left, *top, *width, *height).inflate(style.stroke_padding()),
            Shape::Circle {
                left,
                top,
                radius,
                style,
            } => Bounds::new(*left, *top, radius * 2.0, radius * 2.0)
                .inflate(style.stroke_padding()),
            Shape::Ellipse {
                left,
                top,
                rx,
                ry,
                style,
            } => Bounds::new(*left, *top, rx * 2.0, ry * 2.0).inflate(style.stroke_padding()),
            Shape::Path {
                points,
                stroke_width,
                ..
            } => bounding_box_for_points(points).inflate(stroke_width / 2.0),
            Shape::Text {
                left,
                top,
                text,
                font_size,
                font,
                ..
            } => {
                let (width, height) = measure_text(text, *font_size, font);
                Bounds::new(*left, *top, width, height)
            }
            Shape::Group {
                left,
                top,
                children,
            } => children
                .iter()
                .map(Shape::bounding_box)
                .reduce(Bounds::union)
                .map(|b| Bounds::new(b.left + left, b.top + top, b.width, b.height))
                .unwrap_or(Bounds::new(*left, *top, 0.0, 0.0)),
        }
    }

    /// Moves the shape by the given delta.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        match self {
            Shape::Line { x1, y1, x2, y2, .. } => {
                *x1 += dx;
                *y1 += dy;
                *x2 += dx;
                *y2 += dy;
            }
            Shape::Path { points, .. } => {
                for point in points {
                    point.x += dx;
                    point.y += dy;
                }
            }
            Shape::Rect { left, top, .. }
            | Shape::Circle { left, top, .. }
            | Shape::Ellipse { left, top, .. }
            | Shape::Text { left, top, .. }
            | Shape::Group { left, top, .. } => {
                *left += dx;
                *top += dy;
            }
        }
    }
}

fn bounding_box_for_points(points: &[Point]) -> Bounds {
    let Some(first) = points.first() else {
        return Bounds::default();
    };
    let (mut min_x, mut min_y, mut max_x, mut max_y) = (first.x, first.y, first.x, first.y);
    for point in &points[1..] {
        min_x = min_x.min(point.x);
        min_y = min_y.min(point.y);
        max_x = max_x.max(point.x);
        max_y = max_y.max(point.y);
    }
    Bounds::from_min_max(min_x, min_y, max_x, max_y)
}

/// Measures a text block with Pango.
///
/// Falls back to a per-character estimate when no cairo surface is available.
pub(crate) fn measure_text(text: &str, font_size: f64, font: &FontDescriptor) -> (f64, f64) {
    measure_with_pango(text, font_size, font).unwrap_or_else(|| {
        let lines = text.split('\n');
        let line_count = lines.clone().count().max(1) as f64;
        let longest = lines.map(|l| l.chars().count()).max().unwrap_or(0) as f64;
        (longest * font_size * 0.6, line_count * font_size * 1.16)
    })
}

thread_local! {
    // Hit tests measure text on every press, so the layout is built once per thread
    static MEASURE_LAYOUT: Option<pango::Layout> = measuring_layout();
}

fn measuring_layout() -> Option<pango::Layout> {
    // A tiny image surface is enough for measurement; only the layout matters.
    let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, 1, 1).ok()?;
    let ctx = cairo::Context::new(&surface).ok()?;
    Some(pangocairo::functions::create_layout(&ctx))
}

fn measure_with_pango(text: &str, font_size: f64, font: &FontDescriptor) -> Option<(f64, f64)> {
    MEASURE_LAYOUT.with(|layout| {
        let layout = layout.as_ref()?;
        let font_desc = pango::FontDescription::from_string(&font.to_pango_string(font_size));
        layout.set_font_description(Some(&font_desc));
        layout.set_text(text);

        let (_ink_rect, logical_rect) = layout.extents();
        let scale = pango::SCALE as f64;
        Some((
            logical_rect.width() as f64 / scale,
            logical_rect.height() as f64 / scale,
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{RED, WHITE};

    #[test]
    fn line_bounding_box_covers_stroke() {
        let shape = Shape::Line {
            x1: 50.0,
            y1: 40.0,
            x2: 70.0,
            y2: 90.0,
            stroke: WHITE,
            stroke_width: 4.0,
        };
        assert_eq!(shape.bounding_box(), Bounds::new(48.0, 38.0, 24.0, 54.0));
    }

    #[test]
    fn circle_box_starts_at_anchor() {
        let shape = Shape::Circle {
            left: 10.0,
            top: 20.0,
            radius: 5.0,
            style: Style::outline(RED, 2.0),
        };
        assert_eq!(shape.bounding_box(), Bounds::new(9.0, 19.0, 12.0, 12.0));
    }

    #[test]
    fn group_bounds_are_offset_by_origin() {
        let group = Shape::Group {
            left: 100.0,
            top: 50.0,
            children: vec![
                Shape::Rect {
                    left: -3.0,
                    top: -3.0,
                    width: 146.0,
                    height: 116.0,
                    corner_radius: 14.0,
                    style: Style::filled(RED),
                },
                Shape::Rect {
                    left: 0.0,
                    top: 0.0,
                    width: 140.0,
                    height: 110.0,
                    corner_radius: 12.0,
                    style: Style::filled(WHITE),
                },
            ],
        };
        assert_eq!(group.bounding_box(), Bounds::new(97.0, 47.0, 146.0, 116.0));
    }

    #[test]
    fn translate_moves_every_point() {
        let mut path = Shape::Path {
            points: vec![Point::new(0.0, 0.0), Point::new(10.0, 5.0)],
            stroke: RED,
            stroke_width: 2.0,
        };
        path.translate(3.0, -1.0);
        assert_eq!(path.bounding_box(), Bounds::new(2.0, -2.0, 12.0, 7.0));
    }

    #[test]
    fn text_measurement_is_non_zero() {
        let (w, h) = measure_text("Double click to edit", 20.0, &FontDescriptor::default());
        assert!(w > 0.0);
        assert!(h > 0.0);
    }

    #[test]
    fn shared_layout_does_not_carry_state_between_measurements() {
        let font = FontDescriptor::default();
        let first = measure_text("API", 12.0, &font);

        let big = measure_text("Load Balancer\nline two", 40.0, &FontDescriptor::new("Sans", "bold"));
        assert!(big.0 > first.0 && big.1 > first.1);

        assert_eq!(measure_text("API", 12.0, &font), first);
    }
}
