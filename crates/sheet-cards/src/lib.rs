//! Card ingestion for cheat sheets
//!
//! Loads generated or hand-written card content and feeds it through the
//! layout engine as one batch.

mod csv;
mod types;

pub use crate::csv::{load_from_csv, parse_cards};
pub use sheet_layout::constants::DEFAULT_COLOR;
pub use types::*;

use sheet_layout::{Canvas, CardContent, LayoutConfig};
use std::path::Path;

/// Size and place `contents` on a fresh canvas, in order
pub fn build_canvas(contents: Vec<CardContent>, config: LayoutConfig) -> Result<Canvas> {
    config.validate()?;

    let mut canvas = Canvas::new(config);
    canvas.add_batch(contents);
    Ok(canvas)
}

/// Load cards from a CSV file and lay them out on a fresh canvas
pub async fn canvas_from_csv(path: impl AsRef<Path>, config: LayoutConfig) -> Result<Canvas> {
    let contents = load_from_csv(path).await?;
    build_canvas(contents, config)
}
