//! Layout calculation modules for cheat-sheet cards
//!
//! This module handles all the geometric calculations for the canvas:
//! - Content sizing (card size from its text)
//! - Incremental placement (row filling, new rows below)
//! - Global relayout (repacking every card from scratch)
//! - Page partitioning (which cards each page shows)

mod pages;
mod placement;
mod relayout;
mod sizer;
mod types;

pub use pages::*;
pub use placement::*;
pub use relayout::*;
pub use sizer::*;
pub use types::*;
