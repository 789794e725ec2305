use crate::config::LayoutConfig;
use crate::layout::{card_bounds, detect_rows, page_count};
use crate::types::*;

/// Calculate statistics for a card layout
pub fn calculate_statistics(cards: &[Card], config: &LayoutConfig) -> LayoutStatistics {
    let pages = page_count(cards, config);
    let rows = detect_rows(&card_bounds(cards), config.spacing).len();

    let content_height = cards.iter().map(Card::bottom).fold(0.0_f32, f32::max);
    let used_area: f32 = cards.iter().map(|card| card.size.area()).sum();

    let printable_area = pages as f32 * config.usable_width() * config.usable_height();
    let fill_ratio = if printable_area > 0.0 {
        used_area / printable_area
    } else {
        0.0
    };

    let overlapping_pairs = find_overlaps(cards);
    if !overlapping_pairs.is_empty() {
        log::warn!(
            "{} overlapping card pairs; relayout to repair",
            overlapping_pairs.len()
        );
    }

    LayoutStatistics {
        cards: cards.len(),
        pages,
        rows,
        content_height,
        used_area,
        fill_ratio,
        overlapping_pairs,
    }
}

/// Ids of every pair of cards whose boxes intersect, in canvas order.
///
/// The packing engine never produces overlaps; they come from manual moves,
/// resizes or content edits and are only repaired by a relayout.
pub fn find_overlaps(cards: &[Card]) -> Vec<(String, String)> {
    let bounds = card_bounds(cards);
    let mut pairs = Vec::new();

    for (i, a) in bounds.iter().enumerate() {
        for (j, b) in bounds.iter().enumerate().skip(i + 1) {
            if a.intersects(b) {
                pairs.push((cards[i].id.clone(), cards[j].id.clone()));
            }
        }
    }

    pairs
}
