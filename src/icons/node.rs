//! Component cards dropped from the icon palette.

use super::colors::resolve_color;
use super::glyph::Glyph;
use crate::draw::color::WHITE;
use crate::draw::{FontDescriptor, Shape, Style};
use crate::util::Point;

/// Card width in pixels.
pub const CARD_WIDTH: f64 = 140.0;
/// Card height in pixels.
pub const CARD_HEIGHT: f64 = 110.0;

const HEADER_HEIGHT: f64 = 50.0;
const ICON_RADIUS: f64 = 22.0;
const ICON_CENTER: Point = Point::new(CARD_WIDTH / 2.0, 25.0);
const BADGE_WIDTH: f64 = 100.0;
const BADGE_TEXT: &str = "Component";

/// Builds the grouped card for a dropped component, centred on `at`.
///
/// The result is a single [`Shape::Group`], so it occupies exactly one scene
/// slot and moves as a unit. Children are laid out bottom to top: glow, card,
/// header band, icon disc, glyph, label, badge, and badge caption.
pub fn build_icon_node(icon_type: &str, label: &str, at: Point, custom_color: Option<&str>) -> Shape {
    let color = resolve_color(icon_type, custom_color);
    let tint = |alpha: f64| color.with_alpha(alpha);

    let mut children = vec![
        Shape::Rect {
            left: -3.0,
            top: -3.0,
            width: CARD_WIDTH + 6.0,
            height: CARD_HEIGHT + 6.0,
            corner_radius: 14.0,
            style: Style::filled(tint(0.3)),
        },
        Shape::Rect {
            left: 0.0,
            top: 0.0,
            width: CARD_WIDTH,
            height: CARD_HEIGHT,
            corner_radius: 12.0,
            style: Style::filled_outline(tint(0.25), color, 3.0),
        },
        Shape::Rect {
            left: 0.0,
            top: 0.0,
            width: CARD_WIDTH,
            height: HEADER_HEIGHT,
            corner_radius: 12.0,
            style: Style::filled(tint(0.4)),
        },
        Shape::Circle {
            left: ICON_CENTER.x - ICON_RADIUS,
            top: 3.0,
            radius: ICON_RADIUS,
            style: Style::filled_outline(tint(0.6), color, 3.0),
        },
    ];

    let glyph = Glyph::for_type(icon_type);
    children.extend(glyph.shapes(ICON_CENTER));

    let badge_left = (CARD_WIDTH - BADGE_WIDTH) / 2.0;
    children.extend([
        Shape::Text {
            left: badge_left,
            top: 60.0,
            text: label.to_string(),
            fill: WHITE,
            font_size: 12.0,
            font: FontDescriptor::new("Arial", "bold"),
        },
        Shape::Rect {
            left: badge_left,
            top: 82.0,
            width: BADGE_WIDTH,
            height: 18.0,
            corner_radius: 4.0,
            style: Style::filled(color).with_opacity(0.9),
        },
        Shape::Text {
            left: CARD_WIDTH / 2.0 - 35.0,
            top: 85.0,
            text: BADGE_TEXT.to_string(),
            fill: WHITE,
            font_size: 9.0,
            font: FontDescriptor::new("Arial", "600"),
        },
    ]);

    log::debug!("Built {} card for '{}' with {} glyph", color, label, glyph);

    Shape::Group {
        left: at.x - CARD_WIDTH / 2.0,
        top: at.y - CARD_HEIGHT / 2.0,
        children,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_is_centred_on_drop_point() {
        let Shape::Group { left, top, children } =
            build_icon_node("redis", "Redis", Point::new(400.0, 300.0), None)
        else {
            panic!("expected a group");
        };
        assert_eq!((left, top), (330.0, 245.0));
        // glow, card, header, disc, 3 cache layers, label, badge, caption
        assert_eq!(children.len(), 10);
    }

    #[test]
    fn label_and_accent_come_through() {
        let node = build_icon_node("server", "App Server", Point::new(100.0, 100.0), Some("#ef4444"));
        let Shape::Group { children, .. } = node else {
            panic!("expected a group");
        };

        let texts: Vec<&str> = children
            .iter()
            .filter_map(|child| match child {
                Shape::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(texts, ["App Server", "Component"]);

        let Shape::Rect { style, .. } = &children[1] else {
            panic!("expected the card rect");
        };
        assert_eq!(style.stroke.map(|c| c.to_hex()), Some("#ef4444".to_string()));
        assert_eq!(style.fill.map(|c| c.a), Some(0.25));
    }

    #[test]
    fn glow_extends_past_card() {
        let node = build_icon_node("unknown", "Thing", Point::new(70.0, 55.0), None);
        let bounds = node.bounding_box();
        assert_eq!((bounds.left, bounds.top), (-3.0, -3.0));
        assert_eq!((bounds.width, bounds.height), (146.0, 116.0));
    }
}
