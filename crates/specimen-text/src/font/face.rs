use std::sync::Arc;

use swash::scale::ScaleContext;
use swash::scale::outline::Outline;
use swash::{FontRef, GlyphId, Metrics, StringId};

use crate::font::{
    FontError, FontHandle, FontMetrics, GlyphBounds, Result, ScaledFontMetrics, ShapingSource,
    VariationAxis,
};

/// Loaded font face backed by a font file (TTF/OTF/TTC).
///
/// This is a thin wrapper around `swash::FontRef` that owns the
/// underlying font data and exposes metrics, names and glyph outlines.
/// Shaping goes through `harfrust` on the same bytes.
#[derive(Debug, Clone)]
pub struct FontFace {
    /// Full font data.
    data: Arc<[u8]>,
    /// Face index within the file (for collections).
    index: u32,
    /// Offset to the table directory for this font.
    offset: u32,
    /// Cache key used internally by swash.
    key: swash::CacheKey,
    /// Extracted font metrics in font units.
    metrics: FontMetrics,
    glyph_count: u16,
}

impl FontFace {
    /// Create a font face from raw bytes and a font index within the file.
    pub fn from_bytes(data: Arc<[u8]>, index: usize) -> Result<Self> {
        let font = FontRef::from_index(&data, index).ok_or(FontError::InvalidFont)?;
        let (metrics, glyph_count) = Self::metrics_from_swash(&font);
        let (offset, key) = (font.offset, font.key);
        Ok(Self {
            data,
            index: index as u32,
            offset,
            key,
            metrics,
            glyph_count,
        })
    }

    /// Create a font face from raw bytes owned by a `Vec<u8>`.
    pub fn from_vec(data: Vec<u8>, index: usize) -> Result<Self> {
        Self::from_bytes(Arc::from(data), index)
    }

    /// Create a font face from a font file on disk.
    pub fn from_path(path: impl AsRef<std::path::Path>, index: usize) -> Result<Self> {
        let data = std::fs::read(path)?;
        Self::from_vec(data, index)
    }

    /// Shared font bytes.
    pub fn as_bytes(&self) -> Arc<[u8]> {
        self.data.clone()
    }

    /// Face index within the font file.
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Return a transient `FontRef` for interacting with swash APIs.
    fn as_swash_ref(&self) -> FontRef<'_> {
        FontRef {
            data: &self.data,
            offset: self.offset,
            key: self.key,
        }
    }

    fn metrics_from_swash(font: &FontRef<'_>) -> (FontMetrics, u16) {
        // Use default (no variation) coordinates.
        let Metrics {
            units_per_em,
            glyph_count,
            ascent,
            descent,
            leading,
            cap_height,
            x_height,
            ..
        } = font.metrics(&[]);

        let metrics = FontMetrics {
            ascent,
            descent,
            line_gap: leading,
            units_per_em,
            cap_height: Some(cap_height),
            x_height: Some(x_height),
        };
        (metrics, glyph_count)
    }

    fn name(&self, id: StringId) -> Option<String> {
        self.as_swash_ref()
            .localized_strings()
            .find_by_id(id, None)
            .map(|s| s.chars().collect::<String>())
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    }

    /// Font metrics scaled to the requested pixel size (px per em).
    pub fn scaled_metrics(&self, font_size: f32) -> ScaledFontMetrics {
        self.metrics.scale_to_pixels(font_size)
    }

    /// Convert a glyph id to a scaled outline at the specified size.
    pub fn glyph_outline(&self, glyph_id: GlyphId, font_size: f32) -> Option<Outline> {
        let mut context = ScaleContext::new();
        let font = self.as_swash_ref();
        let mut scaler = context.builder(font).size(font_size).build();
        scaler.scale_outline(glyph_id)
    }
}

impl FontHandle for FontFace {
    fn family_name(&self) -> Option<String> {
        self.name(StringId::TypographicFamily)
            .or_else(|| self.name(StringId::Family))
    }

    fn style_name(&self) -> Option<String> {
        self.name(StringId::TypographicSubFamily)
            .or_else(|| self.name(StringId::SubFamily))
    }

    fn glyph_count(&self) -> u16 {
        self.glyph_count
    }

    fn metrics(&self) -> FontMetrics {
        self.metrics
    }

    fn glyph_index(&self, ch: char) -> Option<u16> {
        match self.as_swash_ref().charmap().map(ch) {
            0 => None,
            gid => Some(gid),
        }
    }

    fn glyph_advance(&self, glyph: u16) -> f32 {
        self.as_swash_ref().glyph_metrics(&[]).advance_width(glyph)
    }

    fn glyph_bounds(&self, glyph: u16, font_size: f32) -> Option<GlyphBounds> {
        let outline = self.glyph_outline(glyph, font_size)?;
        if outline.points().is_empty() {
            return None;
        }
        let bounds = outline.bounds();
        // swash outlines are y-up; flip into screen space.
        Some(GlyphBounds {
            x_min: bounds.min.x,
            y_min: -bounds.max.y,
            x_max: bounds.max.x,
            y_max: -bounds.min.y,
        })
    }

    fn shaping_source(&self) -> Option<ShapingSource<'_>> {
        Some(ShapingSource {
            data: &self.data,
            index: self.index,
        })
    }

    fn variation_axes(&self) -> Vec<VariationAxis> {
        self.as_swash_ref()
            .variations()
            .map(|axis| {
                let tag = axis.tag().to_be_bytes();
                VariationAxis {
                    tag: String::from_utf8_lossy(&tag).into_owned(),
                    min: axis.min_value(),
                    default: axis.default_value(),
                    max: axis.max_value(),
                }
            })
            .collect()
    }

    fn feature_tags(&self) -> Vec<String> {
        // GSUB and GPOS list the same feature once per script and language.
        let mut tags: Vec<String> = self
            .as_swash_ref()
            .features()
            .map(|feature| String::from_utf8_lossy(&feature.tag().to_be_bytes()).into_owned())
            .collect();
        tags.sort();
        tags.dedup();
        tags
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_garbage_bytes() {
        let err = FontFace::from_vec(b"definitely not a font".to_vec(), 0).unwrap_err();
        assert!(matches!(err, FontError::InvalidFont));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = FontFace::from_path("/nonexistent/specimen/font.ttf", 0).unwrap_err();
        assert!(matches!(err, FontError::Io(_)));
    }
}
