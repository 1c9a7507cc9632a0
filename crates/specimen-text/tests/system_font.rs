use anyhow::Result;
use specimen_text::{
    Canvas, FitOptions, FontFace, FontHandle, FontInfo, GlyphArena, Padding, SampleSet,
    ShapeScale, ShapingContext, ShapingPath, covers_text, fit, layout_line, load_system_font,
    segment,
};

fn system_font() -> Option<FontFace> {
    match load_system_font() {
        Ok(face) => Some(face),
        Err(err) => {
            eprintln!("no system font available ({err}), skipping");
            None
        }
    }
}

#[test]
fn shapes_latin_through_the_engine() -> Result<()> {
    let Some(face) = system_font() else {
        return Ok(());
    };
    let ctx = ShapingContext::new(&face);
    assert!(ctx.has_shaping_tables());

    let runs = segment("Hello");
    assert_eq!(runs.len(), 1);

    let mut arena = GlyphArena::new();
    let shaped = ctx.shape(&runs[0], ShapeScale::new(36.0), &mut arena)?;
    assert_eq!(shaped.path, ShapingPath::Engine);
    assert_eq!(shaped.missing, 0);
    assert!(shaped.glyph_count() > 0);
    assert!(shaped.x_advance > 0.0);

    let sum: f32 = arena.glyphs(&shaped).iter().map(|g| g.x_advance).sum();
    assert!((sum - shaped.x_advance).abs() < 1e-3);
    Ok(())
}

#[test]
fn shaping_twice_is_identical() -> Result<()> {
    let Some(face) = system_font() else {
        return Ok(());
    };
    let ctx = ShapingContext::new(&face);
    let runs = segment("office affine");
    let mut first = GlyphArena::new();
    let mut second = GlyphArena::new();
    let a = ctx.shape(&runs[0], ShapeScale::new(24.0), &mut first)?;
    let b = ctx.shape(&runs[0], ShapeScale::new(24.0), &mut second)?;
    assert_eq!(first.glyphs(&a), second.glyphs(&b));
    Ok(())
}

#[test]
fn fits_default_specimen() -> Result<()> {
    let Some(face) = system_font() else {
        return Ok(());
    };
    let samples = SampleSet::for_face(&face);
    let outcome = fit(&face, &samples, Canvas::new(800.0, 600.0), Padding::uniform(6.0));

    assert!(!outcome.lines.is_empty());
    assert_eq!(outcome.metrics.font_size, 36.0);
    assert!(outcome.metrics.total_height > 0.0);
    assert!(outcome.metrics.max_width > 12.0);
    for (i, line) in outcome.lines.iter().enumerate() {
        assert_eq!(outcome.samples.get(i), Some(line.text.as_str()));
        assert_eq!(samples.get(line.index), Some(line.text.as_str()));
        assert!(!line.run.is_empty());
        assert!(line.baseline_y > line.top);
    }
    Ok(())
}

#[test]
fn arabic_line_is_reordered_when_covered() -> Result<()> {
    let Some(face) = system_font() else {
        return Ok(());
    };
    let text = "مرحبا";
    if !covers_text(&face, text) {
        eprintln!("system font has no Arabic, skipping");
        return Ok(());
    }
    let run = layout_line(&face, text, 400.0, Padding::default(), &FitOptions::default());
    assert!(!run.is_empty());
    // Visual order puts the last logical cluster first.
    let first = run.glyphs.first().map(|g| g.cluster).unwrap_or_default();
    let last = run.glyphs.last().map(|g| g.cluster).unwrap_or_default();
    assert!(first > last);
    Ok(())
}

#[test]
fn reports_font_info() -> Result<()> {
    let Some(face) = system_font() else {
        return Ok(());
    };
    let info = FontInfo::from_handle(&face);
    assert!(info.family.is_some());
    assert_eq!(info.glyph_count, face.glyph_count());
    assert!(!info.display_name().is_empty());
    assert!(info.features.windows(2).all(|pair| pair[0] < pair[1]));
    Ok(())
}
