use crate::constants::*;
use crate::layout::Size;
use crate::types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Page geometry and size bounds shared by the sizer and the packing engine
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LayoutConfig {
    pub page_width: f32,
    pub page_height: f32,
    /// Margin on every side of a page
    pub margin: f32,
    /// Gap between neighbouring cards, also the row-matching tolerance
    pub spacing: f32,
    pub min_size: Size,
    pub max_size: Size,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            page_width: DEFAULT_PAGE_WIDTH,
            page_height: DEFAULT_PAGE_HEIGHT,
            margin: DEFAULT_MARGIN,
            spacing: DEFAULT_SPACING,
            min_size: Size::new(DEFAULT_MIN_SIZE.0, DEFAULT_MIN_SIZE.1),
            max_size: Size::new(DEFAULT_MAX_SIZE.0, DEFAULT_MAX_SIZE.1),
        }
    }
}

impl LayoutConfig {
    /// Default configuration with the page dimensions of `page`
    pub fn for_page(page: PageSize) -> Self {
        let (page_width, page_height) = page.dimensions();
        Self {
            page_width,
            page_height,
            ..Default::default()
        }
    }

    /// Horizontal space between the left and right margins
    pub fn usable_width(&self) -> f32 {
        self.page_width - 2.0 * self.margin
    }

    /// Vertical space between the top and bottom margins of one page
    pub fn usable_height(&self) -> f32 {
        self.page_height - 2.0 * self.margin
    }

    /// Rightmost x coordinate a card placed in a row may reach
    pub fn right_limit(&self) -> f32 {
        self.margin + self.usable_width()
    }

    /// Load configuration from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let config: Self = serde_json::from_slice(&bytes)
            .map_err(|e| LayoutError::Config(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| LayoutError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if !(self.page_width > 0.0 && self.page_height > 0.0) {
            return Err(LayoutError::Config(
                "Page dimensions must be positive".to_string(),
            ));
        }

        if self.margin < 0.0 || self.spacing < 0.0 {
            return Err(LayoutError::Config(
                "Margin and spacing must not be negative".to_string(),
            ));
        }

        if self.usable_width() <= 0.0 || self.usable_height() <= 0.0 {
            return Err(LayoutError::Config(format!(
                "Margin {} leaves no usable area on a {}x{} page",
                self.margin, self.page_width, self.page_height
            )));
        }

        if self.min_size.width <= 0.0 || self.min_size.height <= 0.0 {
            return Err(LayoutError::Config(
                "Minimum card size must be positive".to_string(),
            ));
        }

        if self.min_size.width > self.max_size.width || self.min_size.height > self.max_size.height
        {
            return Err(LayoutError::Config(format!(
                "Minimum card size {}x{} exceeds maximum {}x{}",
                self.min_size.width,
                self.min_size.height,
                self.max_size.width,
                self.max_size.height
            )));
        }

        Ok(())
    }
}
