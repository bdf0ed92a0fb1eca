//! Accent colors for dropped components.

use crate::draw::Color;

/// Fallback accent when neither the payload nor the table supplies one.
pub const DEFAULT_ACCENT: &str = "#3b82f6";

/// Accent color per icon type. Keys are lowercase.
pub const ICON_COLORS: [(&str, &str); 34] = [
    ("database", "#3b82f6"),
    ("server", "#10b981"),
    ("cloud", "#8b5cf6"),
    ("cache", "#f59e0b"),
    ("storage", "#ec4899"),
    ("network", "#14b8a6"),
    ("security", "#ef4444"),
    ("api", "#eab308"),
    ("service", "#06b6d4"),
    ("loadbalancer", "#a855f7"),
    ("postgresql", "#336791"),
    ("mongodb", "#47A248"),
    ("mysql", "#4479A1"),
    ("redis", "#DC382D"),
    ("kafka", "#231F20"),
    ("aws", "#FF9900"),
    ("nginx", "#009639"),
    ("docker", "#2496ED"),
    ("kubernetes", "#326CE5"),
    ("memcached", "#00B8D4"),
    ("rabbitmq", "#FF6600"),
    ("azure", "#0089D6"),
    ("gcp", "#4285F4"),
    ("cdn", "#F16529"),
    ("lambda", "#FF9900"),
    ("s3", "#569A31"),
    ("users", "#8b5cf6"),
    ("api-gateway", "#eab308"),
    ("microservice", "#06b6d4"),
    ("rest-api", "#00D9FF"),
    ("auth", "#ef4444"),
    ("firewall", "#DC2626"),
    ("blob-storage", "#0089D6"),
    ("cassandra", "#1287B1"),
];

/// Looks up the table entry for an icon type, ignoring case.
pub fn table_color(icon_type: &str) -> Option<&'static str> {
    let key = icon_type.trim().to_lowercase();
    ICON_COLORS
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, hex)| *hex)
}

/// Picks the accent for a component card.
///
/// A non-empty custom color wins, then the type table, then [`DEFAULT_ACCENT`].
/// Whatever string wins, a value that is not `#rrggbb` renders as rgb(59, 130, 246).
pub fn resolve_color(icon_type: &str, custom: Option<&str>) -> Color {
    let hex = custom
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .or_else(|| table_color(icon_type))
        .unwrap_or(DEFAULT_ACCENT);

    Color::from_hex(hex).unwrap_or_else(|err| {
        log::debug!("{err}, using default accent");
        Color::from_rgb8(59, 130, 246)
    })
}
