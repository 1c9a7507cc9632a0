use core::ops::Range;

/// Logical direction of a shaped run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    LeftToRight,
    RightToLeft,
}

impl Direction {
    /// Direction implied by a BiDi embedding level (odd is RTL).
    pub fn from_level(level: u8) -> Self {
        if level % 2 == 1 {
            Direction::RightToLeft
        } else {
            Direction::LeftToRight
        }
    }
}

/// How the glyphs of a run were obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapingPath {
    /// Full shaping through the font's layout tables.
    Engine,
    /// Direct cmap lookup with nominal advances.
    Cmap,
}

/// A single glyph relative to the origin of its run, in pixels.
///
/// `pen_y` and `y_advance` are y-down, matching the rendering surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapedGlyph {
    pub glyph_id: u16,
    pub pen_x: f32,
    pub pen_y: f32,
    pub x_advance: f32,
    pub y_advance: f32,
    /// Byte offset of the source cluster, relative to the run start.
    pub cluster: u32,
}

/// One shaped run. The glyphs live in the [`GlyphArena`](super::GlyphArena)
/// the run was shaped into.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapedRun {
    /// Byte range in source text.
    pub text_range: Range<usize>,
    /// Glyph range within the arena.
    pub glyphs: Range<usize>,
    /// BiDi embedding level of the source run.
    pub bidi_level: u8,
    /// Total advance of the run in pixels.
    pub x_advance: f32,
    pub y_advance: f32,
    /// Characters (or engine clusters) without a glyph; skipped in `glyphs`.
    pub missing: usize,
    pub path: ShapingPath,
}

impl ShapedRun {
    pub fn direction(&self) -> Direction {
        Direction::from_level(self.bidi_level)
    }

    pub fn glyph_count(&self) -> usize {
        self.glyphs.len()
    }

    /// True when text was present but not a single glyph could be found.
    pub fn is_unrenderable(&self) -> bool {
        self.glyphs.is_empty() && self.missing > 0
    }
}
