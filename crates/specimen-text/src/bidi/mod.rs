//! Bidirectional (BiDi) text support built on `unicode-bidi`.
//!
//! - Paragraph-level direction detection
//! - Script and embedding-level itemization into runs
//! - Visual reordering of runs

pub mod levels;
pub mod reorder;
pub mod segment;

pub use levels::{
    BaseDirection, ParagraphBidi, ParagraphDirection, paragraph_bidi_info, resolve_direction,
};
pub use reorder::visual_order;
pub use segment::{SegmentOptions, TextRun, segment, segment_with};
