/// Font size and output device scale for one shaping pass.
///
/// Shaping happens at device resolution: engine units are converted to 26.6
/// fixed point at `font_size * device_scale` and then divided by
/// `64 * device_scale` to give layout pixels. On a 1x surface this simply
/// quantizes positions to 1/64 px.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeScale {
    /// Font size in layout pixels per em.
    pub font_size: f32,
    /// Horizontal device scale.
    pub x_scale: f32,
    /// Vertical device scale.
    pub y_scale: f32,
}

impl ShapeScale {
    pub fn new(font_size: f32) -> Self {
        Self {
            font_size,
            x_scale: 1.0,
            y_scale: 1.0,
        }
    }

    pub fn with_device_scale(mut self, x_scale: f32, y_scale: f32) -> Self {
        self.x_scale = sanitize(x_scale);
        self.y_scale = sanitize(y_scale);
        self
    }

    /// Horizontal length in layout pixels to 26.6 device units.
    pub(crate) fn x_fixed(&self, px: f32) -> i32 {
        (px * sanitize(self.x_scale) * 64.0).round() as i32
    }

    pub(crate) fn y_fixed(&self, px: f32) -> i32 {
        (px * sanitize(self.y_scale) * 64.0).round() as i32
    }

    /// 26.6 device units back to layout pixels.
    pub(crate) fn x_px(&self, fixed: i32) -> f32 {
        fixed as f32 / (64.0 * sanitize(self.x_scale))
    }

    pub(crate) fn y_px(&self, fixed: i32) -> f32 {
        fixed as f32 / (64.0 * sanitize(self.y_scale))
    }
}

impl Default for ShapeScale {
    fn default() -> Self {
        Self::new(36.0)
    }
}

fn sanitize(scale: f32) -> f32 {
    if scale.is_finite() && scale > 0.0 {
        scale
    } else {
        1.0
    }
}
