use crate::font::{FontMetrics, GlyphBounds};

/// Raw font bytes handed to the shaping engine.
#[derive(Debug, Clone, Copy)]
pub struct ShapingSource<'a> {
    /// Complete font file (or collection) data.
    pub data: &'a [u8],
    /// Face index within `data`.
    pub index: u32,
}

/// One variation axis of a variable font, in axis units.
#[derive(Debug, Clone, PartialEq)]
pub struct VariationAxis {
    /// Four-character axis tag such as `wght`.
    pub tag: String,
    pub min: f32,
    pub default: f32,
    pub max: f32,
}

/// Read-only view of a loaded font, borrowed by the layout core for the
/// duration of one `shape` or `fit` call.
///
/// Glyph indices are 16-bit as in every sfnt font. Advances are in font
/// units; bounds are already scaled to `font_size` pixels.
pub trait FontHandle {
    fn family_name(&self) -> Option<String>;

    fn style_name(&self) -> Option<String>;

    fn glyph_count(&self) -> u16;

    /// Vertical metrics in font units.
    fn metrics(&self) -> FontMetrics;

    /// Nominal glyph for `ch`, or `None` when the cmap has no entry.
    fn glyph_index(&self, ch: char) -> Option<u16>;

    /// Horizontal advance of `glyph` in font units.
    fn glyph_advance(&self, glyph: u16) -> f32;

    /// Ink box of `glyph` at `font_size` px per em. `None` for blank glyphs.
    fn glyph_bounds(&self, glyph: u16, font_size: f32) -> Option<GlyphBounds>;

    /// Font bytes for the shaping engine. Handles without OpenType layout
    /// data return `None` and are shaped by direct cmap lookup.
    fn shaping_source(&self) -> Option<ShapingSource<'_>> {
        None
    }

    fn variation_axes(&self) -> Vec<VariationAxis> {
        Vec::new()
    }

    /// OpenType layout feature tags (`liga`, `kern`, ...) offered by the
    /// font, sorted and without duplicates.
    fn feature_tags(&self) -> Vec<String> {
        Vec::new()
    }
}

impl<F: FontHandle + ?Sized> FontHandle for &F {
    fn family_name(&self) -> Option<String> {
        (**self).family_name()
    }

    fn style_name(&self) -> Option<String> {
        (**self).style_name()
    }

    fn glyph_count(&self) -> u16 {
        (**self).glyph_count()
    }

    fn metrics(&self) -> FontMetrics {
        (**self).metrics()
    }

    fn glyph_index(&self, ch: char) -> Option<u16> {
        (**self).glyph_index(ch)
    }

    fn glyph_advance(&self, glyph: u16) -> f32 {
        (**self).glyph_advance(glyph)
    }

    fn glyph_bounds(&self, glyph: u16, font_size: f32) -> Option<GlyphBounds> {
        (**self).glyph_bounds(glyph, font_size)
    }

    fn shaping_source(&self) -> Option<ShapingSource<'_>> {
        (**self).shaping_source()
    }

    fn variation_axes(&self) -> Vec<VariationAxis> {
        (**self).variation_axes()
    }

    fn feature_tags(&self) -> Vec<String> {
        (**self).feature_tags()
    }
}

/// Returns `true` if the font has a glyph for every character of `text`.
///
/// Used to decide whether the font's own name can be previewed in the font.
pub fn covers_text<F: FontHandle + ?Sized>(font: &F, text: &str) -> bool {
    text.chars().all(|ch| font.glyph_index(ch).is_some())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::TestFont;

    #[test]
    fn covers_text_requires_every_char() {
        let font = TestFont::latin();
        assert!(covers_text(&font, "Hello"));
        assert!(!covers_text(&font, "Hello مرحبا"));
        assert!(covers_text(&font, ""));
    }

    #[test]
    fn references_forward_to_the_font() {
        let font = TestFont::latin();
        let by_ref: &TestFont = &font;
        assert_eq!(
            FontHandle::glyph_index(&by_ref, 'A'),
            font.glyph_index('A')
        );
        assert_eq!(by_ref.family_name().as_deref(), Some("Test Sans"));
    }
}
