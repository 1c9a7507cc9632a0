//! Text shaping built on harfrust (pure-Rust HarfBuzz port), with a cmap
//! fallback for fonts the engine cannot use.

pub mod arena;
pub mod scale;
pub mod shaped_run;
pub mod shaper;

pub use arena::GlyphArena;
pub use scale::ShapeScale;
pub use shaped_run::{Direction, ShapedGlyph, ShapedRun, ShapingPath};
pub use shaper::{ShapeError, ShapingContext};
