//! Theme for the gallery screen

pub mod palette;

pub use palette::Palette;

use ratatui::symbols::border;

#[derive(Debug, Clone)]
pub struct Theme {
    pub palette: Palette,
    pub marks: Marks,
}

/// Glyphs for toggle state and the cursor.
#[derive(Debug, Clone, Copy)]
pub struct Marks {
    pub checked: &'static str,
    pub unchecked: &'static str,
    pub cursor: &'static str,
}

impl Marks {
    pub const ASCII: Self = Self {
        checked: "[x]",
        unchecked: "[ ]",
        cursor: "> ",
    };
}

impl Theme {
    pub fn new() -> Self {
        Self {
            palette: Palette::DARK,
            marks: Marks::ASCII,
        }
    }

    pub fn border_set(&self) -> border::Set<'static> {
        border::ROUNDED
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}

pub fn get_theme() -> Theme {
    Theme::new()
}
