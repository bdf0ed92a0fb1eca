//! Pictograms drawn inside a component card's icon circle.

use crate::draw::color::WHITE;
use crate::draw::{Shape, Style};
use crate::util::Point;
use serde::Serialize;
use std::fmt;

/// Glyph family for a component type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Glyph {
    /// Stacked cylinder
    Database,
    /// Three horizontal layers
    Cache,
    /// Rack unit with status lights
    Server,
    /// Three overlapping puffs
    Cloud,
    /// Box split into shelves
    Container,
    /// Two heads side by side
    Users,
    /// Plain rounded square
    Generic,
}

/// One entry of the dispatch table: the glyph applies when the lowercase type
/// contains any of `contains` or equals any of `exact`.
struct GlyphRule {
    glyph: Glyph,
    contains: &'static [&'static str],
    exact: &'static [&'static str],
}

impl GlyphRule {
    fn matches(&self, icon_type: &str) -> bool {
        self.contains.iter().any(|needle| icon_type.contains(needle))
            || self.exact.iter().any(|name| icon_type == *name)
    }
}

// Order matters: the first matching rule wins.
const RULES: [GlyphRule; 6] = [
    GlyphRule {
        glyph: Glyph::Database,
        contains: &["database"],
        exact: &["postgresql", "mongodb", "mysql", "cassandra"],
    },
    GlyphRule {
        glyph: Glyph::Cache,
        contains: &["redis", "cache"],
        exact: &["memcached"],
    },
    GlyphRule {
        glyph: Glyph::Server,
        contains: &["server"],
        exact: &["nginx"],
    },
    GlyphRule {
        glyph: Glyph::Cloud,
        contains: &["cloud"],
        exact: &["aws", "azure", "gcp"],
    },
    GlyphRule {
        glyph: Glyph::Container,
        contains: &["docker", "kubernetes", "container"],
        exact: &[],
    },
    GlyphRule {
        glyph: Glyph::Users,
        contains: &["users", "client"],
        exact: &[],
    },
];

const GLYPH_STROKE: f64 = 2.0;

impl Glyph {
    /// Resolves the glyph for an icon type, ignoring case.
    pub fn for_type(icon_type: &str) -> Glyph {
        let key = icon_type.trim().to_lowercase();
        RULES
            .iter()
            .find(|rule| rule.matches(&key))
            .map_or(Glyph::Generic, |rule| rule.glyph)
    }

    pub fn name(self) -> &'static str {
        match self {
            Glyph::Database => "database",
            Glyph::Cache => "cache",
            Glyph::Server => "server",
            Glyph::Cloud => "cloud",
            Glyph::Container => "container",
            Glyph::Users => "users",
            Glyph::Generic => "generic",
        }
    }

    /// White line-art shapes for this glyph, centred on `c`.
    pub fn shapes(self, c: Point) -> Vec<Shape> {
        let outline = Style::outline(WHITE, GLYPH_STROKE);
        let rect = |dx: f64, dy: f64, width: f64, height: f64, corner_radius: f64| Shape::Rect {
            left: c.x + dx,
            top: c.y + dy,
            width,
            height,
            corner_radius,
            style: outline,
        };
        let circle = |dx: f64, dy: f64, radius: f64, style: Style| Shape::Circle {
            left: c.x + dx,
            top: c.y + dy,
            radius,
            style,
        };
        let shelf = |dy: f64| Shape::Line {
            x1: c.x - 12.0,
            y1: c.y + dy,
            x2: c.x + 12.0,
            y2: c.y + dy,
            stroke: WHITE,
            stroke_width: GLYPH_STROKE,
        };

        match self {
            Glyph::Database => {
                let cap = |dy: f64| Shape::Ellipse {
                    left: c.x - 12.0,
                    top: c.y + dy,
                    rx: 12.0,
                    ry: 4.0,
                    style: outline,
                };
                vec![cap(-15.0), rect(-12.0, -11.0, 24.0, 20.0, 0.0), cap(5.0)]
            }
            Glyph::Cache => vec![
                rect(-14.0, -12.0, 28.0, 6.0, 2.0),
                rect(-14.0, -3.0, 28.0, 6.0, 2.0),
                rect(-14.0, 6.0, 28.0, 6.0, 2.0),
            ],
            Glyph::Server => vec![
                rect(-12.0, -14.0, 24.0, 28.0, 2.0),
                circle(-2.0, -8.0, 2.0, Style::filled(WHITE)),
                circle(-2.0, 0.0, 2.0, Style::filled(WHITE)),
            ],
            Glyph::Cloud => vec![
                circle(-10.0, -6.0, 7.0, outline),
                circle(-2.0, -8.0, 8.0, outline),
                circle(4.0, -6.0, 6.0, outline),
            ],
            Glyph::Container => vec![
                rect(-12.0, -10.0, 24.0, 20.0, 2.0),
                shelf(-3.0),
                shelf(4.0),
            ],
            Glyph::Users => vec![
                circle(-8.0, -10.0, 5.0, outline),
                circle(3.0, -10.0, 5.0, outline),
            ],
            Glyph::Generic => vec![rect(-10.0, -10.0, 20.0, 20.0, 3.0)],
        }
    }
}

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
