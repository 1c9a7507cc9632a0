use crate::font::GlyphBounds;
use crate::shaping::ShapedGlyph;

/// A composed line: glyphs in visual left-to-right order, ready to draw.
///
/// Glyph pens are relative to (`origin_x`, baseline). Clusters are byte
/// offsets into the composed text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GlyphRun {
    pub glyphs: Vec<ShapedGlyph>,
    /// Sum of all glyph advances.
    pub x_advance: f32,
    pub y_advance: f32,
    /// Union of the glyph ink boxes relative to the origin.
    pub ink: Option<GlyphBounds>,
    /// Horizontal position of the run origin on the canvas.
    pub origin_x: f32,
}

impl GlyphRun {
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Width of the inked area, zero for blank runs.
    pub fn ink_width(&self) -> f32 {
        self.ink.map_or(0.0, |ink| ink.width())
    }

    /// Glyph ids with absolute canvas positions for a line whose baseline
    /// sits at `baseline_y`.
    pub fn positioned(&self, baseline_y: f32) -> impl Iterator<Item = (u16, f32, f32)> + '_ {
        self.glyphs
            .iter()
            .map(move |g| (g.glyph_id, self.origin_x + g.pen_x, baseline_y + g.pen_y))
    }
}
