//! specimen-text: shaping and layout core of the font previewer.
//!
//! - font: the `FontHandle` seam, a swash-backed `FontFace`, loading
//! - bidi: script and direction itemization (UAX-9 via `unicode-bidi`)
//! - shaping: harfrust shaping with a cmap fallback
//! - layout: run composition and fit-to-canvas sizing of sample lines

pub mod bidi;
pub mod font;
pub mod layout;
pub mod shaping;

#[cfg(test)]
mod testing;

pub use bidi::{BaseDirection, SegmentOptions, TextRun, segment, segment_with};

pub use font::{
    FontError, FontFace, FontHandle, FontInfo, FontMetrics, GlyphBounds, ScaledFontMetrics,
    ShapingSource, VariationAxis, covers_text, load_font, load_system_font,
};

pub use layout::{
    Canvas, ComposeOptions, FitOptions, FitOutcome, GlyphRun, LayoutMetrics, Padding, PlacedLine,
    SampleSet, compose, fit, fit_with, layout_line,
};

pub use shaping::{
    Direction, GlyphArena, ShapeError, ShapeScale, ShapedGlyph, ShapedRun, ShapingContext,
    ShapingPath,
};
