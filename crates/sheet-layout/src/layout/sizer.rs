//! Content-aware card sizing
//!
//! Estimates how large a card needs to be from its text alone, before any
//! real text layout or math rendering is available. The estimate is
//! deliberately cheap; users correct it afterwards by resizing manually.
//!
//! Adjustments are additive and applied in a fixed order:
//! - Long titles widen the card, very long titles add a second title line
//! - Long bodies widen the card
//! - Every estimated body line adds height
//! - LaTeX and complex math add both width and height
//! - Wordy bodies add height
//!
//! The result is clamped to the configured size bounds and rounded.

use crate::config::LayoutConfig;
use crate::constants::*;
use crate::types::CardContent;

use super::Size;

/// Compute the size of a card showing `title` and `body`.
///
/// Total and deterministic: empty or malformed text falls back to the
/// base size plus the single-line allowance.
pub fn size_content(title: &str, body: &str, config: &LayoutConfig) -> Size {
    let title_len = title.chars().count();
    let body_len = body.chars().count();

    let mut width = BASE_WIDTH;
    let mut height = BASE_HEIGHT;

    if title_len > TITLE_WIDEN_THRESHOLD {
        let extra = (title_len - TITLE_WIDEN_THRESHOLD) as f32 * TITLE_WIDTH_PER_CHAR;
        width += extra.min(TITLE_WIDTH_CAP);
    }
    if title_len > TITLE_WRAP_THRESHOLD {
        height += TITLE_WRAP_HEIGHT;
    }

    if body_len > BODY_WIDEN_THRESHOLD {
        let extra = ((body_len - BODY_WIDEN_THRESHOLD) / BODY_CHARS_PER_UNIT) as f32;
        width += extra.min(BODY_WIDTH_CAP);
    }

    height += estimate_line_count(body) as f32 * LINE_HEIGHT;

    if contains_latex(body) {
        width += LATEX_BONUS.0;
        height += LATEX_BONUS.1;
    }

    if contains_complex_math(body) {
        width += COMPLEX_MATH_BONUS.0;
        height += COMPLEX_MATH_BONUS.1;
    }

    let words = body.split_whitespace().count();
    if words > WORD_COUNT_THRESHOLD {
        let extra = (words - WORD_COUNT_THRESHOLD) as f32 * HEIGHT_PER_EXTRA_WORD;
        height += extra.min(WORD_HEIGHT_CAP);
    }

    let clamped = Size::new(width, height).clamp(config.min_size, config.max_size);
    Size::new(clamped.width.round(), clamped.height.round())
}

/// Compute the size of a card from its content
pub fn size_card(content: &CardContent, config: &LayoutConfig) -> Size {
    size_content(&content.title, &content.body, config)
}

/// Explicit newlines plus wrapped lines, never less than one
fn estimate_line_count(body: &str) -> usize {
    let newlines = body.matches('\n').count();
    let wrapped = body.chars().count().div_ceil(CHARS_PER_LINE);
    (newlines + wrapped).max(1)
}

/// A backslash command (`\alpha`) or a `$...$` span
fn contains_latex(body: &str) -> bool {
    let has_command = body
        .as_bytes()
        .windows(2)
        .any(|pair| pair[0] == b'\\' && pair[1].is_ascii_alphabetic());

    has_command || has_dollar_span(body)
}

/// Some `$` is followed later by another `$` with text in between.
/// Covers both `$...$` and `$$...$$`.
fn has_dollar_span(body: &str) -> bool {
    match (body.find('$'), body.rfind('$')) {
        (Some(first), Some(last)) => last > first + 1,
        _ => false,
    }
}

fn contains_complex_math(body: &str) -> bool {
    body.contains(COMPLEX_MATH_CHARS) || COMPLEX_MATH_COMMANDS.iter().any(|cmd| body.contains(cmd))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(title: &str, body: &str) -> Size {
        size_content(title, body, &LayoutConfig::default())
    }

    #[test]
    fn test_empty_content_gets_one_line() {
        assert_eq!(size("", ""), Size::new(180.0, 142.0));
    }

    #[test]
    fn test_pythagorean_theorem() {
        // Short body, `^` triggers the complex math bonus only
        let s = size("Pythagorean Theorem", "a^2 + b^2 = c^2");
        assert_eq!(s, Size::new(240.0, 182.0));
        assert!(s.width > BASE_WIDTH && s.height > BASE_HEIGHT);
    }

    #[test]
    fn test_long_title() {
        // 25 chars: +15 width, no wrap
        let s = size("Fundamental Theorem of Ca", "");
        assert_eq!(s, Size::new(195.0, 142.0));

        // 40 chars: +60 width, +25 height
        let s = size(&"x".repeat(40), "");
        assert_eq!(s, Size::new(240.0, 167.0));

        // Width bonus caps at 100
        let s = size(&"x".repeat(200), "");
        assert_eq!(s.width, 280.0);
    }

    #[test]
    fn test_inline_latex_gets_both_bonuses() {
        // `$` span and `\frac` with braces
        let s = size("Quotient", "$\\frac{a}{b}$");
        assert_eq!(s, Size::new(280.0, 212.0));
    }

    #[test]
    fn test_dollar_detection() {
        assert!(contains_latex("cost is $x$ here"));
        assert!(!contains_latex("costs $5"));
        assert!(!contains_latex("$$"));
        assert!(contains_latex("\\alpha"));
        assert!(!contains_latex("C:\\ 1"));
    }

    #[test]
    fn test_display_math_delimiters() {
        assert!(has_dollar_span("$$x^2$$"));
        assert!(has_dollar_span("$$x$"));
        assert!(!has_dollar_span("$"));

        // Display math gets the same bonus as inline math
        assert_eq!(size("E", "$$E=mc2$$"), size("E", "$E=mc2$"));
        assert_eq!(size("E", "$$E=mc2$$"), Size::new(220.0, 172.0));
    }

    #[test]
    fn test_line_count() {
        assert_eq!(estimate_line_count(""), 1);
        assert_eq!(estimate_line_count(&"a".repeat(40)), 1);
        assert_eq!(estimate_line_count(&"a".repeat(41)), 2);
        assert_eq!(estimate_line_count("a\nb\nc"), 3);
    }

    #[test]
    fn test_wordy_body_grows_taller() {
        let body = vec!["word"; 20].join(" ");
        // 99 chars: +6 width, 3 lines, 5 extra words
        let s = size("Words", &body);
        assert_eq!(s, Size::new(186.0, 120.0 + 66.0 + 20.0));
    }

    #[test]
    fn test_huge_body_is_clamped() {
        let body = "\\int_0^1 f(x) dx\n".repeat(200);
        let s = size(&"T".repeat(100), &body);
        assert_eq!(s, Size::new(450.0, 500.0));
    }

    #[test]
    fn test_clamp_uses_config_bounds() {
        let config = LayoutConfig {
            min_size: Size::new(200.0, 200.0),
            max_size: Size::new(220.0, 220.0),
            ..Default::default()
        };
        assert_eq!(size_content("", "", &config), Size::new(200.0, 200.0));
        assert_eq!(
            size_content("Sum", "$\\sum_{i=1}^n i$", &config),
            Size::new(220.0, 212.0)
        );
    }

    #[test]
    fn test_size_card_matches_size_content() {
        let content = CardContent::new("1", "Euler", "e^{i\\pi} + 1 = 0");
        let config = LayoutConfig::default();
        assert_eq!(
            size_card(&content, &config),
            size_content("Euler", "e^{i\\pi} + 1 = 0", &config)
        );
    }
}
