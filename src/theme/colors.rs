//! Colors - Client Theme Colors

use gpui::{rgb, Rgba};

/// Client color palette - All colors are accessed via associated functions
pub struct ClientColors;

impl ClientColors {
    /// Header background - Cyan/Teal
    pub fn header_bg() -> Rgba { rgb(0x2cb3b8) }

    // Background colors
    /// Main background
    pub fn background() -> Rgba { rgb(0xf5f5f5) }
    /// Content area background
    pub fn content_bg() -> Rgba { rgb(0xffffff) }

    // Text colors
    /// Primary text
    pub fn text_primary() -> Rgba { rgb(0x1f2937) }
    /// Header text
    pub fn text_header() -> Rgba { rgb(0xffffff) }

    // Border colors
    /// Default border
    pub fn border() -> Rgba { rgb(0xe5e7eb) }
}
