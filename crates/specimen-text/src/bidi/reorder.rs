use unicode_bidi::{BidiInfo, Level};

/// Visual order of a sequence of runs given their embedding levels.
///
/// Applies UAX-9 rule L2: from the highest level down to the lowest odd
/// level, every maximal sequence at that level or above is reversed. The
/// result maps visual position to logical run index.
pub fn visual_order(levels: &[u8]) -> Vec<usize> {
    let levels: Vec<Level> = levels
        .iter()
        .map(|&level| Level::new(level).unwrap_or_else(|_| Level::ltr()))
        .collect();
    BidiInfo::reorder_visual(&levels)
}
