//! Canvas state
//!
//! The canvas owns the ordered card list (insertion order is z-order) and is
//! the single source of truth for a sheet. Every operation reads a snapshot,
//! runs the pure layout functions on it and commits the result in one step.

use crate::config::LayoutConfig;
use crate::layout::{
    Point, Size, card_bounds, pack_onto, page_count, relayout_all, size_card, size_content,
    split_pages,
};
use crate::stats::{calculate_statistics, find_overlaps};
use crate::types::*;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Canvas {
    config: LayoutConfig,
    cards: Vec<Card>,
}

impl Canvas {
    pub fn new(config: LayoutConfig) -> Self {
        Self {
            config,
            cards: Vec::new(),
        }
    }

    /// Wrap cards that were placed elsewhere, e.g. loaded from disk.
    ///
    /// Sizes are clamped to the configured bounds and positions to
    /// non-negative coordinates, the same limits manual edits obey.
    pub fn with_cards(config: LayoutConfig, mut cards: Vec<Card>) -> Self {
        for card in &mut cards {
            let size = card.size.clamp(config.min_size, config.max_size);
            let position = Point::new(card.position.x.max(0.0), card.position.y.max(0.0));
            if size != card.size || position != card.position {
                log::warn!("Card {:?} was out of bounds; clamped", card.id);
            }
            card.size = size;
            card.position = position;
        }
        Self { config, cards }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn into_cards(self) -> Vec<Card> {
        self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Card> {
        self.cards.iter().find(|card| card.id == id)
    }

    /// Size and place one new card, appending it to the canvas
    pub fn add(&mut self, content: CardContent) -> &Card {
        self.add_batch(vec![content]);
        &self.cards[self.cards.len() - 1]
    }

    /// Size and place a batch of new cards in order, committing them together.
    ///
    /// Returns the number of cards added.
    pub fn add_batch(&mut self, contents: Vec<CardContent>) -> usize {
        if contents.is_empty() {
            return 0;
        }

        let sizes: Vec<Size> = contents
            .iter()
            .map(|content| size_card(content, &self.config))
            .collect();
        let positions = pack_onto(&card_bounds(&self.cards), &sizes, &self.config);

        let added: Vec<Card> = contents
            .into_iter()
            .zip(sizes)
            .zip(positions)
            .map(|((content, size), position)| Card::new(content, position, size))
            .collect();

        let count = added.len();
        self.cards.extend(added);
        log::debug!(
            "Added {} cards; canvas now spans {} pages",
            count,
            self.page_count()
        );
        count
    }

    /// Remove a card, leaving its slot empty until the next relayout
    pub fn remove(&mut self, id: &str) -> Option<Card> {
        let index = self.cards.iter().position(|card| card.id == id)?;
        Some(self.cards.remove(index))
    }

    /// Move a card by hand. Manual placement is authoritative and is not
    /// checked for overlap.
    pub fn move_card(&mut self, id: &str, position: Point) -> Result<()> {
        let card = self.card_mut(id)?;
        card.position = Point::new(position.x.max(0.0), position.y.max(0.0));
        Ok(())
    }

    /// Resize a card by hand, within the configured size bounds
    pub fn resize_card(&mut self, id: &str, size: Size) -> Result<()> {
        let (min, max) = (self.config.min_size, self.config.max_size);
        let card = self.card_mut(id)?;
        card.size = size.clamp(min, max);
        Ok(())
    }

    /// Replace a card's text and re-estimate its size. The position is kept.
    pub fn update_content(&mut self, id: &str, title: String, body: String) -> Result<()> {
        let size = size_content(&title, &body, &self.config);
        let card = self.card_mut(id)?;
        card.title = title;
        card.body = body;
        card.size = size;
        Ok(())
    }

    /// Repack every card from scratch
    pub fn relayout(&mut self) {
        self.cards = relayout_all(&self.cards, &self.config);
    }

    pub fn page_count(&self) -> usize {
        page_count(&self.cards, &self.config)
    }

    /// Cards shown on each page
    pub fn pages(&self) -> Vec<Vec<&Card>> {
        split_pages(&self.cards, &self.config)
    }

    /// Pairs of card ids whose boxes intersect
    pub fn overlaps(&self) -> Vec<(String, String)> {
        find_overlaps(&self.cards)
    }

    pub fn statistics(&self) -> LayoutStatistics {
        calculate_statistics(&self.cards, &self.config)
    }

    /// Load the card list from a JSON array.
    ///
    /// The configuration is validated first; cards are clamped as in
    /// [`Canvas::with_cards`].
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>, config: LayoutConfig) -> Result<Self> {
        config.validate()?;
        let bytes = tokio::fs::read(path).await?;
        let cards: Vec<Card> = serde_json::from_slice(&bytes)?;
        Ok(Self::with_cards(config, cards))
    }

    /// Save the card list as a JSON array
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.cards)?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    fn card_mut(&mut self, id: &str) -> Result<&mut Card> {
        self.cards
            .iter_mut()
            .find(|card| card.id == id)
            .ok_or_else(|| LayoutError::CardNotFound(id.to_string()))
    }
}
