//! In-memory font used by unit tests.
//!
//! Printable ASCII maps to glyphs `1..=95` (space is glyph 1), the Arabic
//! block maps to `200 + offset`. Every glyph advances 500 units except the
//! space (250) on a 1000 unit em. There are no layout tables, so shaping
//! always takes the cmap fallback path, which keeps positions exact.

use crate::font::{FontHandle, FontMetrics, GlyphBounds};

pub struct TestFont {
    latin: bool,
    arabic: bool,
}

impl TestFont {
    pub const UNITS_PER_EM: u16 = 1000;
    pub const ADVANCE: f32 = 500.0;
    pub const SPACE_ADVANCE: f32 = 250.0;

    pub fn latin() -> Self {
        Self {
            latin: true,
            arabic: false,
        }
    }

    pub fn latin_arabic() -> Self {
        Self {
            latin: true,
            arabic: true,
        }
    }

    /// A font with an empty cmap.
    pub fn empty() -> Self {
        Self {
            latin: false,
            arabic: false,
        }
    }
}

impl FontHandle for TestFont {
    fn family_name(&self) -> Option<String> {
        Some("Test Sans".to_string())
    }

    fn style_name(&self) -> Option<String> {
        Some("Regular".to_string())
    }

    fn glyph_count(&self) -> u16 {
        456
    }

    fn metrics(&self) -> FontMetrics {
        FontMetrics {
            ascent: 800.0,
            descent: 200.0,
            line_gap: 0.0,
            units_per_em: Self::UNITS_PER_EM,
            cap_height: Some(700.0),
            x_height: Some(500.0),
        }
    }

    fn glyph_index(&self, ch: char) -> Option<u16> {
        let code = ch as u32;
        match code {
            0x20..=0x7e if self.latin => Some((code - 0x1f) as u16),
            0x0600..=0x06ff if self.arabic => Some(200 + (code - 0x0600) as u16),
            _ => None,
        }
    }

    fn glyph_advance(&self, glyph: u16) -> f32 {
        if glyph == 1 {
            Self::SPACE_ADVANCE
        } else {
            Self::ADVANCE
        }
    }

    fn glyph_bounds(&self, glyph: u16, font_size: f32) -> Option<GlyphBounds> {
        if glyph == 1 {
            return None;
        }
        let scale = font_size / Self::UNITS_PER_EM as f32;
        Some(GlyphBounds {
            x_min: 50.0 * scale,
            y_min: -700.0 * scale,
            x_max: 450.0 * scale,
            y_max: 0.0,
        })
    }

    fn feature_tags(&self) -> Vec<String> {
        if self.latin {
            vec!["kern".to_string(), "liga".to_string()]
        } else {
            Vec::new()
        }
    }
}
