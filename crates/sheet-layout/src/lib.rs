pub mod canvas;
mod config;
pub mod constants;
pub mod layout;
mod stats;
mod types;

pub use canvas::Canvas;
pub use config::*;
pub use layout::{
    Point, Rect, Size, cards_for_page, page_count, place, place_card, relayout_all, size_card,
    size_content, split_pages,
};
pub use stats::{calculate_statistics, find_overlaps};
pub use types::*;
