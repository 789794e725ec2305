use crate::constants::{DEFAULT_COLOR, UNITS_PER_INCH, mm_to_units};
use crate::layout::{Point, Rect, Size};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[cfg(feature = "serde")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("No card with id {0:?}")]
    CardNotFound(String),
}

pub type Result<T> = std::result::Result<T, LayoutError>;

/// Standard page sizes
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PageSize {
    Letter,
    A4,
    Legal,
    Custom { width: f32, height: f32 },
}

impl PageSize {
    /// Page dimensions in canvas units (portrait)
    pub fn dimensions(self) -> (f32, f32) {
        match self {
            PageSize::Letter => (8.5 * UNITS_PER_INCH, 11.0 * UNITS_PER_INCH),
            PageSize::A4 => (mm_to_units(210.0).round(), mm_to_units(297.0).round()),
            PageSize::Legal => (8.5 * UNITS_PER_INCH, 14.0 * UNITS_PER_INCH),
            PageSize::Custom { width, height } => (width, height),
        }
    }
}

/// Text content of a card before it has been sized or placed
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CardContent {
    pub id: String,
    pub title: String,
    /// May contain markup or LaTeX math
    pub body: String,
    /// Display tag, ignored by layout
    pub color: String,
}

impl CardContent {
    pub fn new(id: impl Into<String>, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            body: body.into(),
            color: DEFAULT_COLOR.to_string(),
        }
    }
}

/// A placed content box on the canvas
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Card {
    pub id: String,
    pub title: String,
    pub body: String,
    pub color: String,
    /// Top-left corner
    pub position: Point,
    pub size: Size,
}

impl Card {
    pub fn new(content: CardContent, position: Point, size: Size) -> Self {
        let CardContent {
            id,
            title,
            body,
            color,
        } = content;
        Self {
            id,
            title,
            body,
            color,
            position,
            size,
        }
    }

    /// Bounding box on the canvas
    pub fn bounds(&self) -> Rect {
        Rect::from_parts(self.position, self.size)
    }

    /// Lowest y coordinate covered by the card
    pub fn bottom(&self) -> f32 {
        self.position.y + self.size.height
    }
}

/// Statistics about a card layout
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutStatistics {
    /// Number of cards on the canvas
    pub cards: usize,
    /// Pages needed to show every card
    pub pages: usize,
    /// Distinct rows detected across all pages
    pub rows: usize,
    /// Lowest point reached by any card
    pub content_height: f32,
    /// Sum of card areas
    pub used_area: f32,
    /// Used area as a fraction of the printable area of all pages
    pub fill_ratio: f32,
    /// Card pairs whose boxes intersect (only manual edits create these)
    pub overlapping_pairs: Vec<(String, String)>,
}
