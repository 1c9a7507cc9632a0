pub mod face;
pub mod handle;
pub mod info;
pub mod loader;
pub mod metrics;

pub use face::FontFace;
pub use handle::{FontHandle, ShapingSource, VariationAxis, covers_text};
pub use info::FontInfo;
pub use loader::{load_font, load_system_font};
pub use metrics::{FontMetrics, GlyphBounds, ScaledFontMetrics};

use thiserror::Error;

/// Errors that can occur while loading fonts.
///
/// These belong to the application layer: once a `FontHandle` exists the
/// shaping core never fails because of the font.
#[derive(Debug, Error)]
pub enum FontError {
    #[error("font I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid font data")]
    InvalidFont,
    #[error("no suitable system font found")]
    NoSystemFont,
}

/// Convenient result alias for font-related operations.
pub type Result<T> = std::result::Result<T, FontError>;
