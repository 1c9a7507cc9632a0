/// Font-level metrics in font units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontMetrics {
    /// Ascent above baseline (positive).
    pub ascent: f32,
    /// Descent below baseline (positive).
    pub descent: f32,
    /// Line gap (leading).
    pub line_gap: f32,
    /// Units per em.
    pub units_per_em: u16,
    /// Cap height (optional).
    pub cap_height: Option<f32>,
    /// X-height (optional).
    pub x_height: Option<f32>,
}

impl FontMetrics {
    /// Calculate line height (ascent + descent + line_gap).
    pub fn line_height(&self) -> f32 {
        self.ascent + self.descent + self.line_gap
    }

    /// Pixels per font unit at `font_size` px per em.
    ///
    /// A zero `units_per_em` (broken head table) is treated as a 1:1 scale.
    pub fn units_to_pixels(&self, font_size: f32) -> f32 {
        if self.units_per_em != 0 {
            font_size / self.units_per_em as f32
        } else {
            1.0
        }
    }

    /// Scale metrics to pixel size, where `font_size` is in logical pixels
    /// (px per em).
    pub fn scale_to_pixels(&self, font_size: f32) -> ScaledFontMetrics {
        let scale = self.units_to_pixels(font_size);
        ScaledFontMetrics {
            ascent: self.ascent * scale,
            descent: self.descent * scale,
            line_gap: self.line_gap * scale,
            font_size,
        }
    }
}

/// Scaled font metrics in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaledFontMetrics {
    pub ascent: f32,
    pub descent: f32,
    pub line_gap: f32,
    pub font_size: f32,
}

impl ScaledFontMetrics {
    /// Ascent plus descent, the vertical extent the preview reserves per line.
    pub fn extent(&self) -> f32 {
        self.ascent + self.descent
    }
}

/// Ink bounding box of a glyph or glyph run in pixels.
///
/// Coordinates are y-down: `y_min` is the top edge, so glyphs sitting on the
/// baseline usually have a negative `y_min`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphBounds {
    pub x_min: f32,
    pub y_min: f32,
    pub x_max: f32,
    pub y_max: f32,
}

impl GlyphBounds {
    pub fn width(&self) -> f32 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f32 {
        self.y_max - self.y_min
    }

    /// Translate the box by a pen position.
    pub fn offset(&self, dx: f32, dy: f32) -> Self {
        Self {
            x_min: self.x_min + dx,
            y_min: self.y_min + dy,
            x_max: self.x_max + dx,
            y_max: self.y_max + dy,
        }
    }

    /// Smallest box containing both `self` and `other`.
    pub fn union(&self, other: &Self) -> Self {
        Self {
            x_min: self.x_min.min(other.x_min),
            y_min: self.y_min.min(other.y_min),
            x_max: self.x_max.max(other.x_max),
            y_max: self.y_max.max(other.y_max),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics() -> FontMetrics {
        FontMetrics {
            ascent: 800.0,
            descent: 200.0,
            line_gap: 90.0,
            units_per_em: 1000,
            cap_height: Some(700.0),
            x_height: Some(500.0),
        }
    }

    #[test]
    fn scales_to_pixels() {
        let scaled = metrics().scale_to_pixels(36.0);
        assert!((scaled.ascent - 28.8).abs() < 1e-4);
        assert!((scaled.descent - 7.2).abs() < 1e-4);
        assert!((scaled.extent() - 36.0).abs() < 1e-4);
    }

    #[test]
    fn zero_units_per_em_does_not_divide_by_zero() {
        let mut m = metrics();
        m.units_per_em = 0;
        assert_eq!(m.units_to_pixels(36.0), 1.0);
        assert!(m.scale_to_pixels(36.0).ascent.is_finite());
    }

    #[test]
    fn bounds_union_and_offset() {
        let a = GlyphBounds {
            x_min: 0.0,
            y_min: -10.0,
            x_max: 5.0,
            y_max: 0.0,
        };
        let b = a.offset(10.0, 2.0);
        let u = a.union(&b);
        assert_eq!(u.x_min, 0.0);
        assert_eq!(u.x_max, 15.0);
        assert_eq!(u.y_min, -10.0);
        assert_eq!(u.y_max, 2.0);
        assert_eq!(u.width(), 15.0);
        assert_eq!(u.height(), 12.0);
    }
}
