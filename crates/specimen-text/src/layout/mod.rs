pub mod compose;
pub mod fit;
pub mod glyph_run;
pub mod sample;

pub use compose::{ComposeOptions, compose};
pub use fit::{
    DEFAULT_FONT_SIZE, FitOptions, FitOutcome, LINE_SPACING, LayoutMetrics, PlacedLine,
    SECTION_SPACING, fit, fit_with, layout_line,
};
pub use glyph_run::GlyphRun;
pub use sample::SampleSet;

/// Drawing area offered by the host widget, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Canvas {
    pub width: f32,
    pub height: f32,
}

impl Canvas {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// A canvas smaller than one pixel (or not a number) cannot hold text.
    pub fn is_degenerate(&self) -> bool {
        !(self.width.is_finite() && self.height.is_finite())
            || self.width < 1.0
            || self.height < 1.0
    }
}

/// Padding box around the preview content, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Padding {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Padding {
    pub fn uniform(value: f32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }
}
