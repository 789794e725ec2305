//! Shared constants for card layout
//!
//! This module centralizes the page geometry defaults and the tuning
//! numbers used by the content sizer.

// =============================================================================
// Unit Conversion
// =============================================================================

/// Canvas units per inch (CSS pixel density)
pub const UNITS_PER_INCH: f32 = 96.0;

/// Canvas units per millimeter (1 inch = 25.4mm)
pub const UNITS_PER_MM: f32 = UNITS_PER_INCH / 25.4; // ≈ 3.7795

/// Convert millimeters to canvas units
#[inline]
pub fn mm_to_units(mm: f32) -> f32 {
    mm * UNITS_PER_MM
}

// =============================================================================
// Default Page Geometry
// =============================================================================

/// Default page width in canvas units (US Letter: 8.5" × 11")
pub const DEFAULT_PAGE_WIDTH: f32 = 816.0;

/// Default page height in canvas units (US Letter)
pub const DEFAULT_PAGE_HEIGHT: f32 = 1056.0;

/// Default margin around the page content
pub const DEFAULT_MARGIN: f32 = 40.0;

/// Default gap between neighbouring cards
pub const DEFAULT_SPACING: f32 = 8.0;

/// Smallest card size the sizer or a manual resize may produce
pub const DEFAULT_MIN_SIZE: (f32, f32) = (160.0, 100.0);

/// Largest card size the sizer or a manual resize may produce
pub const DEFAULT_MAX_SIZE: (f32, f32) = (450.0, 500.0);

/// Display tag for cards created without one
pub const DEFAULT_COLOR: &str = "default";

// =============================================================================
// Content Sizer
// =============================================================================

/// Starting card size before any content adjustment
pub const BASE_WIDTH: f32 = 180.0;
pub const BASE_HEIGHT: f32 = 120.0;

/// Titles longer than this widen the card
pub const TITLE_WIDEN_THRESHOLD: usize = 20;
/// Extra width per title character past the threshold
pub const TITLE_WIDTH_PER_CHAR: f32 = 3.0;
pub const TITLE_WIDTH_CAP: f32 = 100.0;

/// Titles longer than this are assumed to wrap onto a second line
pub const TITLE_WRAP_THRESHOLD: usize = 30;
pub const TITLE_WRAP_HEIGHT: f32 = 25.0;

/// Bodies longer than this widen the card
pub const BODY_WIDEN_THRESHOLD: usize = 50;
/// One unit of width per this many body characters past the threshold
pub const BODY_CHARS_PER_UNIT: usize = 8;
pub const BODY_WIDTH_CAP: f32 = 120.0;

/// Approximate characters per rendered body line
pub const CHARS_PER_LINE: usize = 40;
/// Height of one rendered body line
pub const LINE_HEIGHT: f32 = 22.0;

/// Bonus for bodies containing LaTeX escapes or `$...$` delimiters
pub const LATEX_BONUS: (f32, f32) = (40.0, 30.0);

/// Bonus for bodies with fractions, roots, sums, scripts or groups
pub const COMPLEX_MATH_BONUS: (f32, f32) = (60.0, 40.0);

/// Bodies with more words than this grow taller
pub const WORD_COUNT_THRESHOLD: usize = 15;
pub const HEIGHT_PER_EXTRA_WORD: f32 = 4.0;
pub const WORD_HEIGHT_CAP: f32 = 80.0;

/// LaTeX commands that mark a body as complex math
pub const COMPLEX_MATH_COMMANDS: [&str; 4] = ["\\frac", "\\sqrt", "\\sum", "\\int"];

/// Single characters that mark a body as complex math
pub const COMPLEX_MATH_CHARS: [char; 4] = ['^', '_', '{', '}'];
