use anyhow::{Context, Result};
use specimen_config::{Direction, SpecimenConfig};
use specimen_text::{
    BaseDirection, Canvas, FitOptions, FitOutcome, FontFace, FontInfo, Padding, SampleSet,
    SegmentOptions, fit_with, load_font, load_system_font,
};

fn main() -> Result<()> {
    env_logger::init();

    let mut config = SpecimenConfig::load();
    // A bare argument names the font file, overriding config and env.
    if let Some(path) = std::env::args().skip(1).find(|a| !a.starts_with("--")) {
        config.font.path = Some(path.into());
    }
    if std::env::args().any(|a| a == "--rtl") {
        config.preview.direction = Direction::Rtl;
    }

    let face = open_face(&config)?;
    let info = FontInfo::from_handle(&face);
    println!("{} ({} glyphs)", info.display_name(), info.glyph_count);
    for axis in &info.axes {
        println!("  axis {axis}");
    }
    if !info.features.is_empty() {
        println!("  features {}", info.features.join(" "));
    }

    let samples = match &config.preview.lines {
        Some(lines) => SampleSet::from_lines(lines.iter().cloned()),
        None => SampleSet::for_face(&face),
    };

    let canvas = Canvas::new(config.canvas.width, config.canvas.height);
    let padding = Padding::uniform(config.canvas.padding);
    let outcome = fit_with(&face, &samples, canvas, padding, &fit_options(&config));
    report(&outcome);
    Ok(())
}

fn open_face(config: &SpecimenConfig) -> Result<FontFace> {
    match &config.font.path {
        Some(path) => load_font(path, config.font.index)
            .with_context(|| format!("failed to load font {}", path.display())),
        None => load_system_font().context("no font given and no system font found"),
    }
}

fn fit_options(config: &SpecimenConfig) -> FitOptions {
    let preview = &config.preview;
    FitOptions {
        font_size: preview.text_size,
        line_spacing: preview.line_spacing,
        section_spacing: preview.section_spacing,
        x_scale: config.canvas.scale,
        y_scale: config.canvas.scale,
        direction: match preview.direction {
            Direction::Ltr => BaseDirection::Ltr,
            Direction::Rtl => BaseDirection::Rtl,
            Direction::Auto => BaseDirection::Auto,
        },
        segment: SegmentOptions {
            language: preview.language.clone(),
            ..SegmentOptions::default()
        },
    }
}

fn report(outcome: &FitOutcome) {
    let metrics = &outcome.metrics;
    log::info!("fitted {} lines at {}px", outcome.lines.len(), metrics.font_size);
    let (width, height) = outcome.natural_size();
    println!(
        "size {}px, content {:.1}x{:.1}, natural {:.1}x{:.1}",
        metrics.font_size, metrics.max_width, metrics.total_height, width, height
    );

    for line in &outcome.lines {
        println!(
            "  [{}] y={:.1} baseline={:.1} x={:.1} w={:.1} glyphs={} {:?}",
            line.index,
            line.top,
            line.baseline_y,
            line.run.origin_x,
            line.run.ink_width(),
            line.run.len(),
            line.text,
        );
        for (glyph, x, y) in line.run.positioned(line.baseline_y) {
            log::trace!("    gid {glyph} at ({x:.2}, {y:.2})");
        }
    }
}
