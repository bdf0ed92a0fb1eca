//! Component palette and the cards it drops onto the canvas.
//!
//! This module provides:
//! - The palette catalog of technologies, grouped by category
//! - Accent color resolution for component types
//! - Glyph selection for the card's icon disc
//! - Construction of the grouped card itself

pub mod colors;
pub mod glyph;
pub mod node;

pub use colors::resolve_color;
pub use glyph::Glyph;
pub use node::{CARD_HEIGHT, CARD_WIDTH, build_icon_node};

use crate::host::DragPayload;
use serde::Serialize;

/// One draggable technology in the palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaletteEntry {
    /// Icon type sent with the drop (`iconType`)
    pub id: &'static str,
    /// Human-readable label, also the card caption
    pub label: &'static str,
    /// Accent color as `#rrggbb`
    pub color: &'static str,
    /// Category id used for filtering
    pub category: &'static str,
}

impl PaletteEntry {
    const fn new(
        id: &'static str,
        label: &'static str,
        color: &'static str,
        category: &'static str,
    ) -> Self {
        Self {
            id,
            label,
            color,
            category,
        }
    }

    /// The data a drag of this entry carries to the canvas.
    pub fn to_payload(&self) -> DragPayload {
        DragPayload {
            icon_type: self.id.to_string(),
            icon: self.label.to_string(),
            color: Some(self.color.to_string()),
        }
    }
}

/// Every palette entry, in display order.
pub const CATALOG: [PaletteEntry; 26] = [
    PaletteEntry::new("postgresql", "PostgreSQL", "#336791", "database"),
    PaletteEntry::new("mongodb", "MongoDB", "#47A248", "database"),
    PaletteEntry::new("mysql", "MySQL", "#4479A1", "database"),
    PaletteEntry::new("cassandra", "Cassandra", "#1287B1", "database"),
    PaletteEntry::new("redis", "Redis", "#DC382D", "cache"),
    PaletteEntry::new("memcached", "Memcached", "#00B8D4", "cache"),
    PaletteEntry::new("kafka", "Kafka", "#231F20", "queue"),
    PaletteEntry::new("rabbitmq", "RabbitMQ", "#FF6600", "queue"),
    PaletteEntry::new("aws", "AWS", "#FF9900", "cloud"),
    PaletteEntry::new("azure", "Azure", "#0089D6", "cloud"),
    PaletteEntry::new("gcp", "GCP", "#4285F4", "cloud"),
    PaletteEntry::new("nginx", "NGINX", "#009639", "network"),
    PaletteEntry::new("loadbalancer", "Load Balancer", "#a855f7", "network"),
    PaletteEntry::new("cdn", "CDN", "#F16529", "network"),
    PaletteEntry::new("api-gateway", "API Gateway", "#eab308", "api"),
    PaletteEntry::new("microservice", "Microservice", "#06b6d4", "service"),
    PaletteEntry::new("rest-api", "REST API", "#00D9FF", "api"),
    PaletteEntry::new("docker", "Docker", "#2496ED", "container"),
    PaletteEntry::new("kubernetes", "Kubernetes", "#326CE5", "container"),
    PaletteEntry::new("server", "App Server", "#10b981", "compute"),
    PaletteEntry::new("lambda", "Lambda", "#FF9900", "compute"),
    PaletteEntry::new("auth", "Auth Service", "#ef4444", "security"),
    PaletteEntry::new("firewall", "Firewall", "#DC2626", "security"),
    PaletteEntry::new("s3", "S3 Storage", "#569A31", "storage"),
    PaletteEntry::new("blob-storage", "Blob Storage", "#0089D6", "storage"),
    PaletteEntry::new("users", "Users/Clients", "#8b5cf6", "client"),
];

/// Category filter that matches every entry.
pub const ALL_CATEGORY: &str = "all";

/// Palette categories as `(id, label)`, `all` first.
pub const CATEGORIES: [(&str, &str); 13] = [
    (ALL_CATEGORY, "All"),
    ("database", "Databases"),
    ("cache", "Cache"),
    ("queue", "Queues"),
    ("cloud", "Cloud"),
    ("network", "Network"),
    ("api", "API"),
    ("service", "Services"),
    ("container", "Containers"),
    ("compute", "Compute"),
    ("security", "Security"),
    ("storage", "Storage"),
    ("client", "Clients"),
];

/// Palette entries in the given category (`all` for everything).
pub fn filter_catalog(category: &str) -> impl Iterator<Item = &'static PaletteEntry> + '_ {
    CATALOG
        .iter()
        .filter(move |entry| category == ALL_CATEGORY || entry.category == category)
}

/// Finds a palette entry by its icon type, ignoring case.
pub fn find_entry(id: &str) -> Option<&'static PaletteEntry> {
    CATALOG.iter().find(|entry| entry.id.eq_ignore_ascii_case(id.trim()))
}

/// Whether `category` names one of [`CATEGORIES`].
pub fn is_known_category(category: &str) -> bool {
    CATEGORIES.iter().any(|(id, _)| *id == category)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_entry_belongs_to_a_known_category() {
        for entry in &CATALOG {
            assert!(is_known_category(entry.category), "{}", entry.id);
            assert_ne!(entry.category, ALL_CATEGORY);
        }
    }

    #[test]
    fn filter_by_category() {
        assert_eq!(filter_catalog(ALL_CATEGORY).count(), CATALOG.len());
        let databases: Vec<&str> = filter_catalog("database").map(|e| e.id).collect();
        assert_eq!(databases, ["postgresql", "mongodb", "mysql", "cassandra"]);
        assert_eq!(filter_catalog("nope").count(), 0);
    }

    #[test]
    fn payload_carries_type_label_and_color() {
        let payload = find_entry("Redis").unwrap().to_payload();
        assert_eq!(payload.icon_type, "redis");
        assert_eq!(payload.icon, "Redis");
        assert_eq!(payload.color.as_deref(), Some("#DC382D"));
    }

    #[test]
    fn catalog_entries_resolve_to_their_own_color() {
        for entry in &CATALOG {
            let expected = crate::draw::Color::from_hex(entry.color).unwrap();
            assert_eq!(resolve_color(entry.id, None), expected, "{}", entry.id);
        }
    }
}
