use hashbrown::HashMap;

use crate::bidi::{ParagraphDirection, visual_order};
use crate::font::{FontHandle, GlyphBounds};
use crate::layout::{GlyphRun, Padding};
use crate::shaping::{GlyphArena, ShapedGlyph, ShapedRun};

/// Placement parameters for [`compose`].
#[derive(Debug, Clone, Copy)]
pub struct ComposeOptions {
    /// Direction of the surrounding paragraph; decides the anchor edge.
    pub direction: ParagraphDirection,
    pub canvas_width: f32,
    pub padding: Padding,
    /// Size used for ink extents.
    pub font_size: f32,
}

/// Merge shaped runs (in logical order) into one visual glyph stream.
///
/// Runs are reordered by embedding level, then concatenated: every run is
/// offset by the accumulated advance of the runs visually before it. A
/// left-to-right line is anchored at the left padding; a right-to-left line
/// ends at the right padding.
pub fn compose<F: FontHandle + ?Sized>(
    font: &F,
    arena: &GlyphArena,
    runs: &[ShapedRun],
    options: &ComposeOptions,
) -> GlyphRun {
    let levels: Vec<u8> = runs.iter().map(|run| run.bidi_level).collect();
    let total: usize = runs.iter().map(ShapedRun::glyph_count).sum();

    let mut glyphs = Vec::with_capacity(total);
    let mut bounds_cache: HashMap<u16, Option<GlyphBounds>> = HashMap::new();
    let mut ink: Option<GlyphBounds> = None;
    let mut x = 0.0f32;
    let mut y = 0.0f32;

    for index in visual_order(&levels) {
        let run = &runs[index];
        for glyph in arena.glyphs(run) {
            let placed = ShapedGlyph {
                pen_x: glyph.pen_x + x,
                pen_y: glyph.pen_y + y,
                cluster: glyph.cluster + run.text_range.start as u32,
                ..*glyph
            };
            let bounds = *bounds_cache
                .entry(glyph.glyph_id)
                .or_insert_with(|| font.glyph_bounds(glyph.glyph_id, options.font_size));
            if let Some(bounds) = bounds {
                let bounds = bounds.offset(placed.pen_x, placed.pen_y);
                ink = Some(ink.map_or(bounds, |ink| ink.union(&bounds)));
            }
            glyphs.push(placed);
        }
        x += run.x_advance;
        y += run.y_advance;
    }

    let origin_x = match options.direction {
        ParagraphDirection::Ltr => options.padding.left,
        ParagraphDirection::Rtl => options.canvas_width - x - options.padding.right,
    };

    GlyphRun {
        glyphs,
        x_advance: x,
        y_advance: y,
        ink,
        origin_x,
    }
}
