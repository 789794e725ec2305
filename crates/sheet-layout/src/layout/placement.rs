//! Incremental card placement
//!
//! Places one new card among cards that are already on the canvas, filling
//! rows left to right before opening a new row below everything else:
//! - Rows are detected from the top edges of existing cards
//! - Rows are tried top to bottom, so higher rows fill first
//! - A card joins a row only if it is not much taller than the row
//! - A new row always starts at the left margin
//!
//! Placement never fails. A card wider than the usable width still gets a
//! position; it simply overflows the page.

use crate::config::LayoutConfig;
use crate::types::Card;

use super::{Point, Rect, Row, Size};

/// Find a position for a card of `size` that does not overlap `existing`.
///
/// `existing` must be a consistent snapshot of committed, non-overlapping
/// rectangles. Calls against an evolving canvas must be serialized by the
/// caller.
pub fn place(size: Size, existing: &[Rect], config: &LayoutConfig) -> Point {
    if existing.is_empty() {
        return Point::new(config.margin, config.margin);
    }

    for row in detect_rows(existing, config.spacing) {
        if size.height > row.height + config.spacing {
            continue;
        }

        let candidate = Rect::new(
            row.right_edge + config.spacing,
            row.anchor_y,
            size.width,
            size.height,
        );
        if candidate.right() > config.right_limit() {
            continue;
        }

        // Rows may contain gaps left by deleted cards, so check every card
        if existing.iter().any(|rect| rect.intersects(&candidate)) {
            log::trace!(
                "Row at y={} rejected {}x{}: candidate overlaps",
                row.anchor_y,
                size.width,
                size.height
            );
            continue;
        }

        log::trace!(
            "Placed {}x{} in row y={} at x={}",
            size.width,
            size.height,
            row.anchor_y,
            candidate.x
        );
        return Point::new(candidate.x, candidate.y);
    }

    let max_y = existing
        .iter()
        .map(Rect::bottom)
        .fold(f32::NEG_INFINITY, f32::max);
    let position = Point::new(config.margin, max_y + config.spacing);
    log::trace!(
        "Placed {}x{} in new row at y={}",
        size.width,
        size.height,
        position.y
    );
    position
}

/// Find a position for a card of `size` among placed cards
pub fn place_card(size: Size, cards: &[Card], config: &LayoutConfig) -> Point {
    place(size, &card_bounds(cards), config)
}

/// Bounding boxes of `cards`, in order
pub fn card_bounds(cards: &[Card]) -> Vec<Rect> {
    cards.iter().map(Card::bounds).collect()
}

/// Group rectangles into rows, ordered top to bottom.
///
/// Top edges within `spacing` of a row's anchor belong to that row; the
/// anchor is the smallest top edge of its group. Membership is tested per
/// anchor, so a rectangle within `spacing` of two anchors counts toward the
/// height and right edge of both rows.
pub fn detect_rows(existing: &[Rect], spacing: f32) -> Vec<Row> {
    let mut tops: Vec<f32> = existing.iter().map(|rect| rect.y).collect();
    tops.sort_by(f32::total_cmp);

    let mut anchors: Vec<f32> = Vec::new();
    for y in tops {
        match anchors.last() {
            Some(&anchor) if y - anchor <= spacing => {}
            _ => anchors.push(y),
        }
    }

    anchors
        .into_iter()
        .map(|anchor_y| {
            let (height, right_edge) = existing
                .iter()
                .filter(|rect| (rect.y - anchor_y).abs() <= spacing)
                .fold((0.0_f32, f32::NEG_INFINITY), |(height, right), rect| {
                    (height.max(rect.height), right.max(rect.right()))
                });
            Row {
                anchor_y,
                height,
                right_edge,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> LayoutConfig {
        LayoutConfig::default()
    }

    #[test]
    fn test_first_card_anchors_top_left() {
        let pos = place(Size::new(200.0, 150.0), &[], &config());
        assert_eq!(pos, Point::new(40.0, 40.0));
    }

    #[test]
    fn test_second_card_shares_row() {
        let existing = [Rect::new(40.0, 40.0, 200.0, 150.0)];
        let pos = place(Size::new(200.0, 150.0), &existing, &config());
        assert_eq!(pos, Point::new(248.0, 40.0));
    }

    #[test]
    fn test_third_card_fits_exactly() {
        // 448 + 8 + 300 = 756 <= 776
        let existing = [
            Rect::new(40.0, 40.0, 200.0, 150.0),
            Rect::new(248.0, 40.0, 200.0, 150.0),
        ];
        let pos = place(Size::new(300.0, 150.0), &existing, &config());
        assert_eq!(pos, Point::new(456.0, 40.0));
    }

    #[test]
    fn test_full_row_starts_new_row() {
        let existing = [
            Rect::new(40.0, 40.0, 200.0, 150.0),
            Rect::new(248.0, 40.0, 200.0, 150.0),
            Rect::new(456.0, 40.0, 300.0, 150.0),
        ];
        let pos = place(Size::new(200.0, 150.0), &existing, &config());
        assert_eq!(pos, Point::new(40.0, 198.0));
    }

    #[test]
    fn test_tall_card_skips_short_row() {
        // 170 > 150 + 8
        let existing = [Rect::new(40.0, 40.0, 200.0, 150.0)];
        let pos = place(Size::new(200.0, 170.0), &existing, &config());
        assert_eq!(pos, Point::new(40.0, 198.0));

        // 158 <= 150 + 8
        let pos = place(Size::new(200.0, 158.0), &existing, &config());
        assert_eq!(pos, Point::new(248.0, 40.0));
    }

    #[test]
    fn test_higher_row_preferred() {
        let existing = [
            Rect::new(40.0, 40.0, 200.0, 150.0),
            Rect::new(40.0, 198.0, 200.0, 150.0),
        ];
        let pos = place(Size::new(100.0, 100.0), &existing, &config());
        assert_eq!(pos, Point::new(248.0, 40.0));
    }

    #[test]
    fn test_overlap_check_rejects_row() {
        let existing = [
            Rect::new(40.0, 40.0, 200.0, 400.0),
            Rect::new(248.0, 40.0, 520.0, 150.0),
            Rect::new(248.0, 198.0, 100.0, 100.0),
            Rect::new(400.0, 260.0, 100.0, 100.0),
        ];
        // Row y=40 is full; row y=198 would put the card at x=356, over the
        // card anchored at y=260
        let pos = place(Size::new(100.0, 100.0), &existing, &config());
        assert_eq!(pos, Point::new(508.0, 260.0));
    }

    #[test]
    fn test_oversized_card_still_placed() {
        let existing = [Rect::new(40.0, 40.0, 200.0, 150.0)];
        let pos = place(Size::new(900.0, 100.0), &existing, &config());
        assert_eq!(pos, Point::new(40.0, 198.0));
    }

    #[test]
    fn test_detect_rows_groups_within_spacing() {
        let rects = [
            Rect::new(40.0, 40.0, 100.0, 100.0),
            Rect::new(148.0, 45.0, 100.0, 120.0),
            Rect::new(40.0, 200.0, 100.0, 50.0),
        ];
        let rows = detect_rows(&rects, 8.0);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].anchor_y, 40.0);
        assert_eq!(rows[0].height, 120.0);
        assert_eq!(rows[0].right_edge, 248.0);
        assert_eq!(rows[1].anchor_y, 200.0);
    }

    #[test]
    fn test_detect_rows_shares_rect_between_close_anchors() {
        // 48 joins the 40 row; 56 is 16 past 40 and starts a new row, yet
        // 48 is also within 8 of it
        let rects = [
            Rect::new(40.0, 40.0, 100.0, 100.0),
            Rect::new(148.0, 48.0, 200.0, 150.0),
            Rect::new(40.0, 56.0, 50.0, 60.0),
        ];
        let rows = detect_rows(&rects, 8.0);
        assert_eq!(rows.len(), 2);

        assert_eq!(rows[0].anchor_y, 40.0);
        assert_eq!(rows[0].height, 150.0);
        assert_eq!(rows[0].right_edge, 348.0);

        assert_eq!(rows[1].anchor_y, 56.0);
        assert_eq!(rows[1].height, 150.0);
        assert_eq!(rows[1].right_edge, 348.0);
    }
}
