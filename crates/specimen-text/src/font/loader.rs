use std::path::Path;

use fontdb::{Database, Family, Query, Source, Stretch, Style, Weight};

use crate::font::{FontError, FontFace, Result};

/// Load face `index` of the font file at `path`.
pub fn load_font(path: impl AsRef<Path>, index: usize) -> Result<FontFace> {
    FontFace::from_path(path, index)
}

/// Load a regular sans-serif face from the installed system fonts.
pub fn load_system_font() -> Result<FontFace> {
    let mut db = Database::new();
    db.load_system_fonts();

    let id = db
        .query(&Query {
            families: &[
                Family::SansSerif,
                Family::Name("DejaVu Sans"),
                Family::Name("Noto Sans"),
                Family::Name("Cantarell"),
                Family::Name("Arial"),
            ],
            weight: Weight::NORMAL,
            stretch: Stretch::Normal,
            style: Style::Normal,
        })
        .or_else(|| db.faces().next().map(|face| face.id))
        .ok_or(FontError::NoSystemFont)?;

    let face = db.face(id).ok_or(FontError::NoSystemFont)?;
    let bytes: Vec<u8> = match &face.source {
        Source::File(path) => std::fs::read(path)?,
        Source::Binary(data) => data.as_ref().as_ref().to_vec(),
        Source::SharedFile(_, data) => data.as_ref().as_ref().to_vec(),
    };
    log::debug!("using system font {:?}", face.families.first().map(|(name, _)| name));

    FontFace::from_vec(bytes, face.index as usize)
}
