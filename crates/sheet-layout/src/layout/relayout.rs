//! Batch packing and global relayout
//!
//! Incremental placement depends on arrival order and leaves gaps behind
//! deletions. Relayout discards every position and packs the whole set again
//! from an empty canvas, smallest cards first.

use std::cmp::Ordering;

use crate::config::LayoutConfig;
use crate::types::Card;

use super::{Point, Rect, Size, place};

/// Place a batch of sizes one after another, in arrival order.
///
/// Each placement sees only the sizes placed before it in this batch.
pub fn pack_sizes(sizes: &[Size], config: &LayoutConfig) -> Vec<Point> {
    pack_onto(&[], sizes, config)
}

/// Place a batch of sizes on top of already committed rectangles.
pub fn pack_onto(existing: &[Rect], sizes: &[Size], config: &LayoutConfig) -> Vec<Point> {
    let mut placed: Vec<Rect> = Vec::with_capacity(existing.len() + sizes.len());
    placed.extend_from_slice(existing);

    sizes
        .iter()
        .map(|&size| {
            let position = place(size, &placed, config);
            placed.push(Rect::from_parts(position, size));
            position
        })
        .collect()
}

/// Recompute every card position from scratch.
///
/// Cards are packed in ascending (height, width) order; equal sizes keep
/// their relative input order. The result keeps the input order and changes
/// only `position`, so relaying out the output again is a no-op.
pub fn relayout_all(cards: &[Card], config: &LayoutConfig) -> Vec<Card> {
    let mut order: Vec<usize> = (0..cards.len()).collect();
    order.sort_by(|&a, &b| compare_for_packing(cards[a].size, cards[b].size));

    let sizes: Vec<Size> = order.iter().map(|&index| cards[index].size).collect();
    let positions = pack_sizes(&sizes, config);

    let mut result = cards.to_vec();
    for (&index, position) in order.iter().zip(positions) {
        result[index].position = position;
    }

    log::debug!("Relayout of {} cards complete", cards.len());
    result
}

fn compare_for_packing(a: Size, b: Size) -> Ordering {
    a.height
        .total_cmp(&b.height)
        .then_with(|| a.width.total_cmp(&b.width))
}
