// ABOUTME: Ordering rules for social-media links
// ABOUTME: Fractional reorder arithmetic, next-order assignment, and public visibility filtering

use serde::{Deserialize, Serialize};

use crate::types::SocialMediaLink;

/// Distance a link jumps when moved one slot.
///
/// Moving by 1.5 lands between the neighbour and the one beyond it. Orders are
/// never compacted, so repeated moves can produce ties.
pub const REORDER_STEP: f64 = 1.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReorderDirection {
    Up,
    Down,
}

/// New order value after moving a link one slot
pub fn reordered(order: f64, direction: ReorderDirection) -> f64 {
    match direction {
        ReorderDirection::Up => order - REORDER_STEP,
        ReorderDirection::Down => order + REORDER_STEP,
    }
}

/// Order for a newly appended link: one past the current maximum
pub fn next_order(links: &[SocialMediaLink]) -> f64 {
    links
        .iter()
        .map(|link| link.order)
        .fold(None, |max: Option<f64>, order| {
            Some(max.map_or(order, |m| m.max(order)))
        })
        .unwrap_or(0.0)
        + 1.0
}

/// Stable ascending sort by display order
pub fn sort_by_order(links: &mut [SocialMediaLink]) {
    links.sort_by(|a, b| a.order.total_cmp(&b.order));
}

/// Links a caller may see, sorted for display. Disabled links are admin-only.
pub fn visible_links(links: Vec<SocialMediaLink>, is_admin: bool) -> Vec<SocialMediaLink> {
    let mut visible: Vec<SocialMediaLink> = links
        .into_iter()
        .filter(|link| is_admin || link.enabled)
        .collect();
    sort_by_order(&mut visible);
    visible
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SocialPlatform;
    use crate::utils::parse_timestamp;

    fn link(id: &str, order: f64, enabled: bool) -> SocialMediaLink {
        let at = parse_timestamp("2024-01-01T00:00:00.000Z").unwrap();
        SocialMediaLink {
            id: id.to_string(),
            name: id.to_string(),
            platform: SocialPlatform::Other,
            url: format!("https://example.com/{}", id),
            icon: None,
            enabled,
            order,
            created_at: at,
            updated_at: at,
        }
    }

    #[test]
    fn test_reordered_moves_by_one_and_a_half() {
        assert_eq!(reordered(3.0, ReorderDirection::Up), 1.5);
        assert_eq!(reordered(3.0, ReorderDirection::Down), 4.5);
    }

    #[test]
    fn test_moves_can_tie_without_compaction() {
        let moved_up = reordered(3.0, ReorderDirection::Up);
        let moved_down = reordered(0.0, ReorderDirection::Down);
        assert_eq!(moved_up, moved_down);
    }

    #[test]
    fn test_next_order() {
        assert_eq!(next_order(&[]), 1.0);
        let links = vec![link("a", 1.0, true), link("b", 4.5, true), link("c", -2.0, true)];
        assert_eq!(next_order(&links), 5.5);
    }

    #[test]
    fn test_visible_links_hide_disabled_for_public() {
        let links = vec![
            link("c", 3.0, true),
            link("a", 1.0, false),
            link("b", 1.5, true),
        ];

        let public: Vec<String> = visible_links(links.clone(), false)
            .into_iter()
            .map(|l| l.id)
            .collect();
        assert_eq!(public, vec!["b", "c"]);

        let admin: Vec<String> = visible_links(links, true)
            .into_iter()
            .map(|l| l.id)
            .collect();
        assert_eq!(admin, vec!["a", "b", "c"]);
    }
}
