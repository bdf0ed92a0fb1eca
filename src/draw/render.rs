//! Cairo-based rendering functions for scenes and shapes.

use super::color::Color;
use super::font::FontDescriptor;
use super::scene::Scene;
use super::shape::{Shape, Style};
use crate::util::Point;
use std::f64::consts::PI;

/// Renders the whole scene: background first, then every object in order.
///
/// Shapes are drawn in the order they appear (first object = bottom layer),
/// so the grid always sits underneath user content. An in-progress brush
/// stroke is painted last.
pub fn render_scene(ctx: &cairo::Context, scene: &Scene) {
    let bg = scene.background();
    ctx.set_source_rgba(bg.r, bg.g, bg.b, bg.a);
    let _ = ctx.paint(); // If paint fails the surface just stays transparent

    for object in scene.objects() {
        render_shape(ctx, &object.shape);
    }

    if let Some(brush) = scene.brush() {
        if let Some(points) = brush.stroke_points() {
            render_path(ctx, points, brush.color, brush.width);
        }
    }
}

/// Renders a single shape to a Cairo context.
///
/// Dispatches to the appropriate internal rendering function based on shape type.
pub fn render_shape(ctx: &cairo::Context, shape: &Shape) {
    match shape {
        Shape::Line {
            x1,
            y1,
            x2,
            y2,
            stroke,
            stroke_width,
        } => render_line(ctx, Point::new(*x1, *y1), Point::new(*x2, *y2), *stroke, *stroke_width),
        Shape::Rect {
            left,
            top,
            width,
            height,
            corner_radius,
            style,
        } => {
            rounded_rect_path(ctx, *left, *top, *width, *height, *corner_radius);
            paint_style(ctx, style);
        }
        Shape::Circle {
            left,
            top,
            radius,
            style,
        } => {
            if *radius <= 0.0 {
                return;
            }
            ctx.new_path();
            ctx.arc(left + radius, top + radius, *radius, 0.0, 2.0 * PI);
            paint_style(ctx, style);
        }
        Shape::Ellipse {
            left,
            top,
            rx,
            ry,
            style,
        } => {
            if *rx <= 0.0 || *ry <= 0.0 {
                return;
            }
            ctx.new_path();
            ctx.save().ok();
            ctx.translate(left + rx, top + ry);
            ctx.scale(*rx, *ry);
            ctx.arc(0.0, 0.0, 1.0, 0.0, 2.0 * PI);
            ctx.restore().ok();
            paint_style(ctx, style);
        }
        Shape::Path {
            points,
            stroke,
            stroke_width,
        } => render_path(ctx, points, *stroke, *stroke_width),
        Shape::Text {
            left,
            top,
            text,
            fill,
            font_size,
            font,
        } => render_text(ctx, *left, *top, text, *fill, *font_size, font),
        Shape::Group {
            left,
            top,
            children,
        } => {
            ctx.save().ok();
            ctx.translate(*left, *top);
            for child in children {
                render_shape(ctx, child);
            }
            ctx.restore().ok();
        }
    }
}

/// Fills then strokes the current path according to `style`.
fn paint_style(ctx: &cairo::Context, style: &Style) {
    if let Some(fill) = style.fill {
        set_source(ctx, fill, style.opacity);
        let _ = ctx.fill_preserve();
    }
    if let Some(stroke) = style.stroke.filter(|_| style.stroke_width > 0.0) {
        set_source(ctx, stroke, style.opacity);
        ctx.set_line_width(style.stroke_width);
        ctx.set_line_join(cairo::LineJoin::Miter);
        let _ = ctx.stroke_preserve();
    }
    ctx.new_path();
}

fn set_source(ctx: &cairo::Context, color: Color, opacity: f64) {
    ctx.set_source_rgba(color.r, color.g, color.b, color.a * opacity.clamp(0.0, 1.0));
}

/// Adds a rectangle path with the corner radius clamped to half the short side.
fn rounded_rect_path(ctx: &cairo::Context, x: f64, y: f64, w: f64, h: f64, radius: f64) {
    ctx.new_path();
    let r = radius.min(w / 2.0).min(h / 2.0).max(0.0);
    if r == 0.0 {
        ctx.rectangle(x, y, w, h);
        return;
    }
    ctx.arc(x + w - r, y + r, r, -PI / 2.0, 0.0);
    ctx.arc(x + w - r, y + h - r, r, 0.0, PI / 2.0);
    ctx.arc(x + r, y + h - r, r, PI / 2.0, PI);
    ctx.arc(x + r, y + r, r, PI, 3.0 * PI / 2.0);
    ctx.close_path();
}

/// Render a straight line
fn render_line(ctx: &cairo::Context, from: Point, to: Point, color: Color, width: f64) {
    set_source(ctx, color, 1.0);
    ctx.set_line_width(width);
    ctx.set_line_cap(cairo::LineCap::Round);

    ctx.move_to(from.x, from.y);
    ctx.line_to(to.x, to.y);
    let _ = ctx.stroke();
}

/// Render a freehand stroke (polyline through points)
fn render_path(ctx: &cairo::Context, points: &[Point], color: Color, width: f64) {
    let Some((first, rest)) = points.split_first() else {
        return;
    };

    set_source(ctx, color, 1.0);
    ctx.set_line_width(width);
    ctx.set_line_cap(cairo::LineCap::Round);
    ctx.set_line_join(cairo::LineJoin::Round);

    ctx.move_to(first.x, first.y);
    if rest.is_empty() {
        // Single click still leaves a dot thanks to the round cap
        ctx.line_to(first.x, first.y);
    }
    for point in rest {
        ctx.line_to(point.x, point.y);
    }
    let _ = ctx.stroke();
}

/// Renders a text block with its top-left at (`left`, `top`) using Pango.
///
/// Text containing newline characters is laid out across multiple lines.
pub fn render_text(
    ctx: &cairo::Context,
    left: f64,
    top: f64,
    text: &str,
    color: Color,
    size: f64,
    font: &FontDescriptor,
) {
    ctx.save().ok();
    ctx.set_antialias(cairo::Antialias::Best);

    let layout = pangocairo::functions::create_layout(ctx);
    let font_desc = pango::FontDescription::from_string(&font.to_pango_string(size));
    layout.set_font_description(Some(&font_desc));
    layout.set_text(text);

    set_source(ctx, color, 1.0);
    ctx.move_to(left, top);
    pangocairo::functions::show_layout(ctx, &layout);

    ctx.restore().ok();
}
