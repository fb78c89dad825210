//! Color palette
//!
//! Kept neutral so the gradient swatches carry the color.

use ratatui::style::Color;

#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg_highlight: Color,
    pub fg_primary: Color,
    pub fg_secondary: Color,
    pub accent: Color,
    pub border: Color,
    pub success: Color,
    pub error: Color,
}

impl Palette {
    pub const DARK: Self = Self {
        bg_highlight: Color::Rgb(48, 48, 48),    // #303030
        fg_primary: Color::Rgb(238, 238, 238),   // #eeeeee
        fg_secondary: Color::Rgb(136, 136, 136), // #888888
        accent: Color::Rgb(0, 124, 186),         // #007cba admin blue
        border: Color::Rgb(64, 64, 64),          // #404040
        success: Color::Rgb(70, 180, 80),        // #46b450
        error: Color::Rgb(220, 50, 50),          // #dc3232
    };
}

impl Default for Palette {
    fn default() -> Self {
        Self::DARK
    }
}
