//! Descriptive font information shown next to the preview.

use core::fmt;

use crate::font::{FontHandle, VariationAxis};

/// Summary of a face: names, glyph count, variation axes and layout
/// features.
#[derive(Debug, Clone, PartialEq)]
pub struct FontInfo {
    pub family: Option<String>,
    pub style: Option<String>,
    pub glyph_count: u16,
    pub axes: Vec<VariationAxis>,
    pub features: Vec<String>,
}

impl FontInfo {
    pub fn from_handle<F: FontHandle + ?Sized>(font: &F) -> Self {
        Self {
            family: font.family_name(),
            style: font.style_name(),
            glyph_count: font.glyph_count(),
            axes: font.variation_axes(),
            features: font.feature_tags(),
        }
    }

    /// Human readable face name: family followed by style, with the
    /// "Regular" style left out.
    pub fn display_name(&self) -> String {
        let family = self.family.as_deref().unwrap_or("Unknown");
        match self.style.as_deref() {
            Some(style) if !style.eq_ignore_ascii_case("regular") => format!("{family} {style}"),
            _ => family.to_string(),
        }
    }

    pub fn is_variable(&self) -> bool {
        !self.axes.is_empty()
    }
}

impl fmt::Display for VariationAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}–{}, default {}",
            self.tag, self.min, self.max, self.default
        )
    }
}
