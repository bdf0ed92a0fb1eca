//! Background grid generation.

use crate::config::CanvasConfig;
use crate::draw::Shape;

/// Builds the grid lines for a canvas of the given size.
///
/// Vertical lines sit at `x = i * spacing` for `i` in `0..floor(width / spacing)`
/// and span the full height; horizontal lines follow the same rule along y.
/// All vertical lines come first.
pub fn grid_lines(width: u32, height: u32, cfg: &CanvasConfig) -> Vec<Shape> {
    let spacing = cfg.grid_size.max(1);
    let stroke = cfg.grid_color.to_color();
    let stroke_width = cfg.grid_line_width;
    let (w, h) = (f64::from(width), f64::from(height));

    let vertical = (0..width / spacing).map(|i| {
        let x = f64::from(i * spacing);
        Shape::Line {
            x1: x,
            y1: 0.0,
            x2: x,
            y2: h,
            stroke,
            stroke_width,
        }
    });
    let horizontal = (0..height / spacing).map(|j| {
        let y = f64::from(j * spacing);
        Shape::Line {
            x1: 0.0,
            y1: y,
            x2: w,
            y2: y,
            stroke,
            stroke_width,
        }
    });

    vertical.chain(horizontal).collect()
}

/// Number of lines [`grid_lines`] produces.
pub fn grid_line_count(width: u32, height: u32, cfg: &CanvasConfig) -> usize {
    let spacing = cfg.grid_size.max(1);
    (width / spacing + height / spacing) as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::GRID;

    #[test]
    fn count_uses_whole_cells_only() {
        let cfg = CanvasConfig::default();
        assert_eq!(grid_lines(800, 600, &cfg).len(), 56);
        assert_eq!(grid_lines(810, 610, &cfg).len(), 56);
        assert_eq!(grid_line_count(1400, 650, &cfg), 56 + 26);
        assert!(grid_lines(20, 20, &cfg).is_empty());
    }

    #[test]
    fn lines_span_the_canvas_with_grid_style() {
        let lines = grid_lines(100, 50, &CanvasConfig::default());
        assert_eq!(lines.len(), 6);
        assert_eq!(
            lines[1],
            Shape::Line {
                x1: 25.0,
                y1: 0.0,
                x2: 25.0,
                y2: 50.0,
                stroke: GRID,
                stroke_width: 0.5,
            }
        );
        let Shape::Line { y1, x2, .. } = lines[5] else {
            panic!("expected a line");
        };
        assert_eq!((y1, x2), (25.0, 100.0));
    }
}
