//! Page partitioning
//!
//! The canvas is one tall strip; pages are consecutive `page_height` slices
//! of it. A card belongs to every page its vertical span touches, so a card
//! straddling a page boundary is drawn on both. Coordinates are never
//! rewritten here: renderers subtract [`page_offset`] themselves.

use crate::config::LayoutConfig;
use crate::types::Card;

/// Number of pages needed to show every card (at least one).
///
/// A page height that is zero, negative or not finite counts as a single
/// page holding everything.
pub fn page_count(cards: &[Card], config: &LayoutConfig) -> usize {
    if !has_usable_page_height(config) {
        return 1;
    }
    let max_y = cards.iter().map(Card::bottom).fold(0.0_f32, f32::max);
    let pages = ((max_y + config.margin) / config.page_height).ceil();
    if !pages.is_finite() {
        return 1;
    }
    (pages as usize).max(1)
}

/// Cards whose vertical span intersects page `page`.
pub fn cards_for_page<'a>(cards: &'a [Card], page: usize, config: &LayoutConfig) -> Vec<&'a Card> {
    if !has_usable_page_height(config) {
        return if page == 0 { cards.iter().collect() } else { Vec::new() };
    }
    let top = page_offset(page, config);
    let bottom = page_offset(page + 1, config);
    cards
        .iter()
        .filter(|card| card.bounds().overlaps_vertically(top, bottom))
        .collect()
}

/// Every page's cards, one entry per page from [`page_count`].
pub fn split_pages<'a>(cards: &'a [Card], config: &LayoutConfig) -> Vec<Vec<&'a Card>> {
    (0..page_count(cards, config))
        .map(|page| cards_for_page(cards, page, config))
        .collect()
}

/// Canvas y coordinate at which page `page` starts
pub fn page_offset(page: usize, config: &LayoutConfig) -> f32 {
    page as f32 * config.page_height
}

/// The card's top edge relative to the top of page `page`
pub fn page_relative_y(card: &Card, page: usize, config: &LayoutConfig) -> f32 {
    card.position.y - page_offset(page, config)
}

fn has_usable_page_height(config: &LayoutConfig) -> bool {
    config.page_height.is_finite() && config.page_height > 0.0
}
