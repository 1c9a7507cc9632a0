use core::ops::Range;

use crate::shaping::{ShapedGlyph, ShapedRun};

/// Scratch storage for every glyph shaped during one `fit` or `shape` call.
///
/// Runs refer to their glyphs by range, so a whole layout pass allocates
/// into one buffer that is dropped (or cleared for reuse) in bulk.
#[derive(Debug, Default)]
pub struct GlyphArena {
    glyphs: Vec<ShapedGlyph>,
}

impl GlyphArena {
    pub fn new() -> Self {
        Self { glyphs: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            glyphs: Vec::with_capacity(capacity),
        }
    }

    /// Drop all glyphs, keeping the allocation.
    pub fn clear(&mut self) {
        self.glyphs.clear();
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    pub(crate) fn push(&mut self, glyph: ShapedGlyph) {
        self.glyphs.push(glyph);
    }

    /// Index the next pushed glyph will get.
    pub(crate) fn mark(&self) -> usize {
        self.glyphs.len()
    }

    pub fn slice(&self, range: Range<usize>) -> &[ShapedGlyph] {
        &self.glyphs[range]
    }

    /// Glyphs of a run shaped into this arena.
    pub fn glyphs(&self, run: &ShapedRun) -> &[ShapedGlyph] {
        self.slice(run.glyphs.clone())
    }
}
