//! Fit-to-canvas sizing.
//!
//! The preview uses one font size for every line and walks the sample set
//! once: each line is shaped and measured, and lines are taken while the
//! running height stays inside the canvas. Lines past the first one that
//! overflows are dropped; the size itself is never reduced.

use crate::bidi::{BaseDirection, SegmentOptions, resolve_direction, segment_with};
use crate::font::FontHandle;
use crate::layout::{Canvas, ComposeOptions, GlyphRun, Padding, SampleSet, compose};
use crate::shaping::{GlyphArena, ShapeScale, ShapedRun, ShapingContext};

/// Preview size in pixels per em.
pub const DEFAULT_FONT_SIZE: f32 = 36.0;
/// Vertical space added to every line, split above and below it.
pub const LINE_SPACING: f32 = 2.0;
/// Space below the last line when reporting the natural size.
pub const SECTION_SPACING: f32 = 16.0;

/// Tunables for [`fit_with`].
#[derive(Debug, Clone)]
pub struct FitOptions {
    pub font_size: f32,
    pub line_spacing: f32,
    pub section_spacing: f32,
    /// Horizontal and vertical device scale of the target surface.
    pub x_scale: f32,
    pub y_scale: f32,
    /// Direction of the preview widget; decides which edge lines hang
    /// from. `Auto` resolves it per line from the text.
    pub direction: BaseDirection,
    /// Itemization settings handed to the segmenter.
    pub segment: SegmentOptions,
}

impl Default for FitOptions {
    fn default() -> Self {
        Self {
            font_size: DEFAULT_FONT_SIZE,
            line_spacing: LINE_SPACING,
            section_spacing: SECTION_SPACING,
            x_scale: 1.0,
            y_scale: 1.0,
            direction: BaseDirection::Ltr,
            segment: SegmentOptions::default(),
        }
    }
}

impl FitOptions {
    fn scale(&self) -> ShapeScale {
        ShapeScale::new(self.font_size).with_device_scale(self.x_scale, self.y_scale)
    }
}

/// The sizing engine's answer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutMetrics {
    pub font_size: f32,
    /// Height of the placed lines, padding excluded.
    pub total_height: f32,
    /// Widest line's ink width plus horizontal padding.
    pub max_width: f32,
}

/// A sample line that made it onto the canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLine {
    /// Index of the line in the input sample set.
    pub index: usize,
    /// The sample text this line shows.
    pub text: String,
    pub run: GlyphRun,
    /// Top of the line box on the canvas.
    pub top: f32,
    pub baseline_y: f32,
    pub height: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FitOutcome {
    pub metrics: LayoutMetrics,
    pub lines: Vec<PlacedLine>,
    /// The lines actually rendered, in order; entry `i` is the text of
    /// `lines[i]`, not of the input line `lines[i].index`.
    pub samples: SampleSet,
    padding: Padding,
    section_spacing: f32,
}

impl FitOutcome {
    fn degenerate(font_size: f32) -> Self {
        Self {
            metrics: LayoutMetrics {
                font_size,
                total_height: 1.0,
                max_width: 1.0,
            },
            lines: Vec::new(),
            samples: SampleSet::new(),
            padding: Padding::default(),
            section_spacing: 0.0,
        }
    }

    /// Size the preview widget asks its host for: content plus padding and
    /// the trailing section spacing, never below 1×1.
    pub fn natural_size(&self) -> (f32, f32) {
        let width = self.metrics.max_width.max(1.0);
        let height = self.padding.vertical() + self.metrics.total_height + self.section_spacing;
        (width, height.max(1.0))
    }
}

/// Fit `samples` onto `canvas` with the default options.
pub fn fit<F: FontHandle + ?Sized>(
    font: &F,
    samples: &SampleSet,
    canvas: Canvas,
    padding: Padding,
) -> FitOutcome {
    fit_with(font, samples, canvas, padding, &FitOptions::default())
}

pub fn fit_with<F: FontHandle + ?Sized>(
    font: &F,
    samples: &SampleSet,
    canvas: Canvas,
    padding: Padding,
    options: &FitOptions,
) -> FitOutcome {
    if canvas.is_degenerate() {
        log::debug!("canvas {canvas:?} too small for a preview");
        return FitOutcome::degenerate(options.font_size);
    }

    let scaled = font.metrics().scale_to_pixels(options.font_size);
    let budget = (canvas.height - padding.vertical()).max(0.0);
    let ctx = ShapingContext::new(font);
    let mut arena = GlyphArena::new();

    let mut height = 0.0f32;
    let mut widest = 0.0f32;
    let mut lines = Vec::new();
    let mut rendered = SampleSet::new();

    for (index, text) in samples.iter().enumerate() {
        if text.is_empty() {
            continue;
        }

        arena.clear();
        let shaped = shape_line(&ctx, text, options, &mut arena);
        if shaped.iter().all(ShapedRun::is_unrenderable) {
            log::debug!("skipping sample line {index}: no glyphs in font");
            continue;
        }

        let run = compose(
            font,
            &arena,
            &shaped,
            &ComposeOptions {
                direction: resolve_direction(text, options.direction),
                canvas_width: canvas.width,
                padding,
                font_size: options.font_size,
            },
        );

        let line_height = scaled.extent() + run.y_advance + options.line_spacing;
        if height + line_height > budget {
            log::debug!(
                "sample line {index} overflows ({:.1} > {budget:.1}), stopping",
                height + line_height
            );
            break;
        }

        let top = padding.top + height;
        height += line_height;
        widest = widest.max(run.ink_width());
        lines.push(PlacedLine {
            index,
            text: text.to_string(),
            top,
            baseline_y: top + options.line_spacing / 2.0 + scaled.ascent,
            height: line_height,
            run,
        });
        rendered.push(text);
    }

    log::debug!(
        "fit {} of {} sample lines at {}px",
        lines.len(),
        samples.len(),
        options.font_size
    );

    FitOutcome {
        metrics: LayoutMetrics {
            font_size: options.font_size,
            total_height: height,
            max_width: padding.horizontal() + widest,
        },
        lines,
        samples: rendered,
        padding,
        section_spacing: options.section_spacing,
    }
}

/// Segment, shape and compose a single line. Empty text gives an empty run.
pub fn layout_line<F: FontHandle + ?Sized>(
    font: &F,
    text: &str,
    canvas_width: f32,
    padding: Padding,
    options: &FitOptions,
) -> GlyphRun {
    let ctx = ShapingContext::new(font);
    let mut arena = GlyphArena::new();
    let shaped = shape_line(&ctx, text, options, &mut arena);
    compose(
        font,
        &arena,
        &shaped,
        &ComposeOptions {
            direction: resolve_direction(text, options.direction),
            canvas_width,
            padding,
            font_size: options.font_size,
        },
    )
}

fn shape_line<F: FontHandle + ?Sized>(
    ctx: &ShapingContext<'_, F>,
    text: &str,
    options: &FitOptions,
    arena: &mut GlyphArena,
) -> Vec<ShapedRun> {
    let scale = options.scale();
    segment_with(text, &options.segment)
        .iter()
        .map(|run| ctx.shape_run(run, scale, arena))
        .collect()
}
