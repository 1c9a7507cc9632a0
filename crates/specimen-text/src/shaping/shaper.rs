use harfrust::{
    Direction as HbDirection, FontRef as HbFontRef, Language as HbLanguage, Script as HbScript,
    ShaperData, ShaperInstance, Tag as HbTag, UnicodeBuffer as HbUnicodeBuffer,
};
use thiserror::Error;
use unicode_script::Script;

use crate::bidi::TextRun;
use crate::font::FontHandle;

use super::{Direction, GlyphArena, ShapeScale, ShapedGlyph, ShapedRun, ShapingPath};

/// Recoverable shaping failures. Neither aborts a layout pass.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    /// The font has no layout data the shaping engine can use.
    #[error("font has no usable shaping tables")]
    ShapingUnavailable,
    /// The font has no glyph for a character.
    #[error("no glyph for {0:?}")]
    GlyphNotFound(char),
}

/// Parsed shaping state for one font.
struct Engine<'f> {
    font: HbFontRef<'f>,
    data: ShaperData,
    instance: ShaperInstance,
}

/// Explicitly owned shaping context for a single font.
///
/// The font is parsed for the shaping engine once, when the context is
/// created; every `shape` call after that only builds a cheap shaper over
/// the cached data. Contexts hold no mutable state and may be shared.
pub struct ShapingContext<'f, F: FontHandle + ?Sized> {
    font: &'f F,
    engine: Option<Engine<'f>>,
}

impl<'f, F: FontHandle + ?Sized> ShapingContext<'f, F> {
    pub fn new(font: &'f F) -> Self {
        let engine = font.shaping_source().and_then(|source| {
            match HbFontRef::from_index(source.data, source.index) {
                Ok(font_ref) => {
                    let data = ShaperData::new(&font_ref);
                    let instance = ShaperInstance::from_variations(
                        &font_ref,
                        core::iter::empty::<harfrust::Variation>(),
                    );
                    Some(Engine {
                        font: font_ref,
                        data,
                        instance,
                    })
                }
                Err(err) => {
                    log::debug!("shaping engine rejected font: {err}");
                    None
                }
            }
        });
        Self { font, engine }
    }

    pub fn font(&self) -> &'f F {
        self.font
    }

    /// Whether runs go through the shaping engine rather than the cmap.
    pub fn has_shaping_tables(&self) -> bool {
        self.engine.is_some()
    }

    /// Shape `run` with the font's layout tables.
    ///
    /// Glyphs are appended to `arena` in the engine's output order, which
    /// is visual order within the run (reversed for right-to-left runs).
    /// Glyphs the font does not have are skipped along with their advance.
    pub fn shape(
        &self,
        run: &TextRun<'_>,
        scale: ShapeScale,
        arena: &mut GlyphArena,
    ) -> Result<ShapedRun, ShapeError> {
        let engine = self.engine.as_ref().ok_or(ShapeError::ShapingUnavailable)?;

        let shaper = engine
            .data
            .shaper(&engine.font)
            .instance(Some(&engine.instance))
            .point_size(None)
            .build();

        let mut buffer = HbUnicodeBuffer::new();
        buffer.push_str(run.text);
        buffer.set_direction(match run.direction() {
            Direction::LeftToRight => HbDirection::LeftToRight,
            Direction::RightToLeft => HbDirection::RightToLeft,
        });
        if let Some(script) = hb_script(run.script) {
            buffer.set_script(script);
        }
        if let Some(language) = run.language.as_deref() {
            if let Ok(language) = language.parse::<HbLanguage>() {
                buffer.set_language(language);
            }
        }
        buffer.guess_segment_properties();

        let glyph_buffer = shaper.shape(buffer, &[]);
        let infos = glyph_buffer.glyph_infos();
        let positions = glyph_buffer.glyph_positions();

        // harfrust reports font units; scale to layout pixels first.
        let px_per_unit = self.font.metrics().units_to_pixels(scale.font_size);

        let start = arena.mark();
        let mut pen_x = 0i32;
        let mut pen_y = 0i32;
        let mut missing = 0usize;
        let mut x_advance = 0.0f32;
        let mut y_advance = 0.0f32;

        for (info, pos) in infos.iter().zip(positions.iter()) {
            if info.glyph_id == 0 {
                let ch = run
                    .text
                    .get(info.cluster as usize..)
                    .and_then(|rest| rest.chars().next())
                    .unwrap_or(char::REPLACEMENT_CHARACTER);
                log::debug!("{}", ShapeError::GlyphNotFound(ch));
                missing += 1;
                continue;
            }

            let adv_x = scale.x_fixed(pos.x_advance as f32 * px_per_unit);
            let adv_y = scale.y_fixed(pos.y_advance as f32 * px_per_unit);
            let off_x = scale.x_fixed(pos.x_offset as f32 * px_per_unit);
            let off_y = scale.y_fixed(pos.y_offset as f32 * px_per_unit);

            let glyph = ShapedGlyph {
                glyph_id: info.glyph_id as u16,
                pen_x: scale.x_px(pen_x + off_x),
                pen_y: scale.y_px(pen_y - off_y),
                x_advance: scale.x_px(adv_x),
                y_advance: -scale.y_px(adv_y),
                cluster: info.cluster,
            };
            x_advance += glyph.x_advance;
            y_advance += glyph.y_advance;
            arena.push(glyph);

            pen_x += adv_x;
            pen_y -= adv_y;
        }

        Ok(ShapedRun {
            text_range: run.range.clone(),
            glyphs: start..arena.mark(),
            bidi_level: run.level,
            x_advance,
            y_advance,
            missing,
            path: ShapingPath::Engine,
        })
    }

    /// Shape `run`, degrading to direct cmap lookup when the font cannot be
    /// shaped. Never fails.
    pub fn shape_run(
        &self,
        run: &TextRun<'_>,
        scale: ShapeScale,
        arena: &mut GlyphArena,
    ) -> ShapedRun {
        match self.shape(run, scale, arena) {
            Ok(shaped) => shaped,
            Err(err) => {
                log::trace!("{err}; using cmap for {:?}", run.range);
                self.shape_with_cmap(run, scale, arena)
            }
        }
    }

    /// One glyph per character from the cmap, nominal advances, no
    /// positioning. Right-to-left runs are emitted in visual order, the same
    /// convention the engine follows.
    pub fn shape_with_cmap(
        &self,
        run: &TextRun<'_>,
        scale: ShapeScale,
        arena: &mut GlyphArena,
    ) -> ShapedRun {
        let px_per_unit = self.font.metrics().units_to_pixels(scale.font_size);
        let rtl = run.is_rtl();

        let mut chars: Vec<(usize, char)> = run.text.char_indices().collect();
        if rtl {
            chars.reverse();
        }

        let start = arena.mark();
        let mut pen_x = 0i32;
        let mut missing = 0usize;
        let mut x_advance = 0.0f32;

        for (offset, ch) in chars {
            let glyph_id = match lookup(self.font, ch) {
                Ok(glyph_id) => glyph_id,
                Err(err) => {
                    log::debug!("{err}");
                    missing += 1;
                    continue;
                }
            };
            let adv_x = scale.x_fixed(self.font.glyph_advance(glyph_id) * px_per_unit);
            let glyph = ShapedGlyph {
                glyph_id,
                pen_x: scale.x_px(pen_x),
                pen_y: 0.0,
                x_advance: scale.x_px(adv_x),
                y_advance: 0.0,
                cluster: offset as u32,
            };
            x_advance += glyph.x_advance;
            arena.push(glyph);
            pen_x += adv_x;
        }

        ShapedRun {
            text_range: run.range.clone(),
            glyphs: start..arena.mark(),
            bidi_level: run.level,
            x_advance,
            y_advance: 0.0,
            missing,
            path: ShapingPath::Cmap,
        }
    }
}

fn lookup<F: FontHandle + ?Sized>(font: &F, ch: char) -> Result<u16, ShapeError> {
    font.glyph_index(ch).ok_or(ShapeError::GlyphNotFound(ch))
}

/// Map a Unicode script onto the engine's script, leaving generic scripts
/// for `guess_segment_properties` to resolve.
fn hb_script(script: Script) -> Option<HbScript> {
    if matches!(script, Script::Common | Script::Inherited | Script::Unknown) {
        return None;
    }
    let tag: [u8; 4] = script.short_name().as_bytes().try_into().ok()?;
    HbScript::from_iso15924_tag(HbTag::new(&tag))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bidi::segment;
    use crate::testing::TestFont;

    #[test]
    fn test_font_has_no_shaping_tables() {
        let font = TestFont::latin();
        let ctx = ShapingContext::new(&font);
        assert!(!ctx.has_shaping_tables());

        let runs = segment("abc");
        let mut arena = GlyphArena::new();
        let err = ctx.shape(&runs[0], ShapeScale::new(36.0), &mut arena).unwrap_err();
        assert_eq!(err, ShapeError::ShapingUnavailable);
        assert!(arena.is_empty());
    }

    #[test]
    fn cmap_fallback_positions_glyphs() {
        let font = TestFont::latin();
        let ctx = ShapingContext::new(&font);
        let runs = segment("Ab c");
        let mut arena = GlyphArena::new();
        let shaped = ctx.shape_run(&runs[0], ShapeScale::new(36.0), &mut arena);

        assert_eq!(shaped.path, ShapingPath::Cmap);
        assert_eq!(shaped.missing, 0);
        let glyphs = arena.glyphs(&shaped);
        assert_eq!(glyphs.len(), 4);
        assert_eq!(glyphs[0].glyph_id, font.glyph_index('A').unwrap());
        // 500 units at 36 px / 1000 upem = 18 px, space is 9 px.
        let pens: Vec<f32> = glyphs.iter().map(|g| g.pen_x).collect();
        assert_eq!(pens, vec![0.0, 18.0, 36.0, 45.0]);
        assert_eq!(shaped.x_advance, 63.0);
        assert_eq!(shaped.y_advance, 0.0);
    }

    #[test]
    fn device_scale_converts_back_to_layout_pixels() {
        let font = TestFont::latin();
        let ctx = ShapingContext::new(&font);
        let runs = segment("ab");
        let mut arena = GlyphArena::new();
        let scale = ShapeScale::new(36.0).with_device_scale(2.0, 2.0);
        let shaped = ctx.shape_run(&runs[0], scale, &mut arena);
        assert_eq!(shaped.x_advance, 36.0);
    }

    #[test]
    fn rtl_fallback_emits_visual_order() {
        let font = TestFont::latin_arabic();
        let ctx = ShapingContext::new(&font);
        let text = "مرحبا";
        let runs = segment(text);
        assert!(runs[0].is_rtl());

        let mut arena = GlyphArena::new();
        let shaped = ctx.shape_run(&runs[0], ShapeScale::new(36.0), &mut arena);
        let clusters: Vec<u32> = arena.glyphs(&shaped).iter().map(|g| g.cluster).collect();
        let mut logical: Vec<u32> = text.char_indices().map(|(i, _)| i as u32).collect();
        logical.reverse();
        assert_eq!(clusters, logical);
        assert_eq!(arena.glyphs(&shaped)[0].glyph_id, font.glyph_index('ا').unwrap());
    }

    #[test]
    fn missing_glyphs_are_skipped() {
        let font = TestFont::latin();
        let ctx = ShapingContext::new(&font);
        let runs = segment("a\u{e000}b");
        let mut arena = GlyphArena::new();
        let shaped = ctx.shape_run(&runs[0], ShapeScale::new(36.0), &mut arena);
        assert_eq!(shaped.missing, 1);
        assert_eq!(shaped.glyph_count(), 2);
        assert_eq!(shaped.x_advance, 36.0);
        assert!(!shaped.is_unrenderable());
    }

    #[test]
    fn font_without_glyphs_is_unrenderable() {
        let font = TestFont::empty();
        let ctx = ShapingContext::new(&font);
        let runs = segment("Hello");
        let mut arena = GlyphArena::new();
        let shaped = ctx.shape_run(&runs[0], ShapeScale::new(36.0), &mut arena);
        assert!(shaped.is_unrenderable());
        assert_eq!(shaped.missing, 5);
        assert_eq!(shaped.x_advance, 0.0);
    }

    #[test]
    fn shaping_is_deterministic() {
        let font = TestFont::latin();
        let ctx = ShapingContext::new(&font);
        let runs = segment("Sphinx of black quartz");
        let mut first = GlyphArena::new();
        let mut second = GlyphArena::new();
        let a = ctx.shape_run(&runs[0], ShapeScale::new(36.0), &mut first);
        let b = ctx.shape_run(&runs[0], ShapeScale::new(36.0), &mut second);
        assert_eq!(a, b);
        assert_eq!(first.glyphs(&a), second.glyphs(&b));
    }

    #[test]
    fn generic_scripts_are_left_to_the_engine() {
        assert!(hb_script(Script::Common).is_none());
        assert!(hb_script(Script::Latin).is_some());
        assert!(hb_script(Script::Arabic).is_some());
    }
}
