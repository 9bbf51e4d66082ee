use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Icon tint shared by all hotspots (`#59cccaff`).
pub const HOTSPOT_ICON_COLOR: Color = Color::rgb(89.0 / 255.0, 204.0 / 255.0, 202.0 / 255.0);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HotspotIcon {
    GraduationCap,
    Users,
    Brain,
}

/// Clickable point of interest in the explore-room scene.
///
/// Positions and pans are percentages: `left_pct`/`top_pct` of the scene
/// size, `pan_*_pct` of the background size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Hotspot {
    pub id: &'static str,
    pub left_pct: f64,
    pub top_pct: f64,
    pub icon: HotspotIcon,
    pub icon_size_px: f64,
    pub label: &'static str,
    pub info: &'static str,
    pub pan_x_pct: f64,
    pub pan_y_pct: f64,
}

const BUILTIN_HOTSPOTS: [Hotspot; 3] = [
    Hotspot {
        id: "academic",
        left_pct: 25.0,
        top_pct: 70.0,
        icon: HotspotIcon::GraduationCap,
        icon_size_px: 40.0,
        label: "Academic Performance",
        info: "Studies show that excessive social media use can reduce focus and GPA among \
               students. Maintaining digital balance helps improve productivity and academic \
               outcomes.",
        pan_x_pct: 48.0,
        pan_y_pct: -25.0,
    },
    Hotspot {
        id: "relationships",
        left_pct: 88.0,
        top_pct: 40.0,
        icon: HotspotIcon::Users,
        icon_size_px: 28.0,
        label: "Relationships",
        info: "Social media can connect people but may also cause tension and comparison. \
               Healthy online boundaries strengthen real-world relationships.",
        pan_x_pct: -55.0,
        pan_y_pct: -10.0,
    },
    Hotspot {
        id: "mental-health",
        left_pct: 45.0,
        top_pct: 72.0,
        icon: HotspotIcon::Brain,
        icon_size_px: 28.0,
        label: "Mental Health",
        info: "Prolonged screen time has been linked to anxiety and sleep issues. Limiting \
               usage and mindful scrolling can support better mental well-being.",
        pan_x_pct: 0.0,
        pan_y_pct: -30.0,
    },
];

/// Ordered hotspot lookup by id.
#[derive(Debug, Clone, PartialEq)]
pub struct HotspotRegistry {
    entries: IndexMap<&'static str, Hotspot>,
}

impl Default for HotspotRegistry {
    fn default() -> Self {
        Self {
            entries: BUILTIN_HOTSPOTS
                .into_iter()
                .map(|hotspot| (hotspot.id, hotspot))
                .collect(),
        }
    }
}

impl HotspotRegistry {
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: &str) -> ChartResult<&Hotspot> {
        self.entries
            .get(id)
            .ok_or_else(|| ChartError::UnknownHotspot(id.to_owned()))
    }

    pub(super) fn index_of(&self, id: &str) -> ChartResult<usize> {
        self.entries
            .get_index_of(id)
            .ok_or_else(|| ChartError::UnknownHotspot(id.to_owned()))
    }

    pub(super) fn get_index(&self, index: usize) -> Option<&Hotspot> {
        self.entries.get_index(index).map(|(_, hotspot)| hotspot)
    }

    /// Hotspots in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Hotspot> {
        self.entries.values()
    }
}

#[cfg(test)]
mod tests {
    use super::HotspotRegistry;

    #[test]
    fn registry_keeps_display_order() {
        let registry = HotspotRegistry::default();
        let ids: Vec<_> = registry.iter().map(|hotspot| hotspot.id).collect();
        assert_eq!(ids, ["academic", "relationships", "mental-health"]);
    }

    #[test]
    fn info_text_has_single_spaces() {
        let registry = HotspotRegistry::default();
        let info = registry.get("relationships").expect("builtin").info;
        assert!(info.starts_with("Social media can connect"));
        assert!(!info.contains("  "));
    }
}
