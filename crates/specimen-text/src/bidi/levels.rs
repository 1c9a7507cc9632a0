use core::ops::Range;

use unicode_bidi::{BidiInfo, LTR_LEVEL, Level, RTL_LEVEL};

/// Base direction hint for paragraph analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BaseDirection {
    /// Detect paragraph base direction from text (first strong char).
    Auto,
    /// Force overall left-to-right base direction.
    #[default]
    Ltr,
    /// Force overall right-to-left base direction.
    Rtl,
}

impl BaseDirection {
    pub fn to_level(self) -> Option<Level> {
        match self {
            BaseDirection::Auto => None,
            BaseDirection::Ltr => Some(LTR_LEVEL),
            BaseDirection::Rtl => Some(RTL_LEVEL),
        }
    }
}

/// Paragraph direction classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParagraphDirection {
    Ltr,
    Rtl,
}

/// BiDi information for a single paragraph.
#[derive(Debug, Clone)]
pub struct ParagraphBidi {
    /// Byte range of this paragraph within the input text.
    pub range: Range<usize>,
    /// Paragraph embedding level (UAX-9).
    pub level: u8,
    /// Paragraph direction derived from the paragraph level.
    pub direction: ParagraphDirection,
}

/// Compute paragraph-level BiDi information for the given text.
///
/// This uses the Unicode BiDi algorithm (UAX-9) via `unicode-bidi`
/// and supports explicit base-direction overrides through
/// `BaseDirection`.
pub fn paragraph_bidi_info(text: &str, base_dir: BaseDirection) -> Vec<ParagraphBidi> {
    let info = BidiInfo::new(text, base_dir.to_level());
    info.paragraphs
        .iter()
        .map(|para| ParagraphBidi {
            range: para.range.clone(),
            level: para.level.number(),
            direction: if para.level.is_rtl() {
                ParagraphDirection::Rtl
            } else {
                ParagraphDirection::Ltr
            },
        })
        .collect()
}

/// Direction of the first paragraph of `text`, resolving `Auto` from the
/// first strong character. Empty text is left-to-right.
pub fn resolve_direction(text: &str, base_dir: BaseDirection) -> ParagraphDirection {
    match base_dir {
        BaseDirection::Ltr => ParagraphDirection::Ltr,
        BaseDirection::Rtl => ParagraphDirection::Rtl,
        BaseDirection::Auto => paragraph_bidi_info(text, base_dir)
            .first()
            .map_or(ParagraphDirection::Ltr, |para| para.direction),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_paragraph_direction_auto() {
        // Hebrew + Latin
        let text = "אבג abc";
        let paras = paragraph_bidi_info(text, BaseDirection::Auto);
        assert_eq!(paras.len(), 1);
        assert_eq!(paras[0].direction, ParagraphDirection::Rtl);
        assert_eq!(paras[0].level, 1);
    }

    #[test]
    fn base_direction_override_ltr() {
        let text = "אבג abc";
        let paras = paragraph_bidi_info(text, BaseDirection::Ltr);
        assert_eq!(paras[0].direction, ParagraphDirection::Ltr);
    }

    #[test]
    fn one_entry_per_paragraph() {
        let paras = paragraph_bidi_info("abc\nمرحبا", BaseDirection::Auto);
        assert_eq!(paras.len(), 2);
        assert_eq!(paras[0].direction, ParagraphDirection::Ltr);
        assert_eq!(paras[1].direction, ParagraphDirection::Rtl);
    }

    #[test]
    fn resolve_direction_handles_empty_and_forced() {
        assert_eq!(resolve_direction("", BaseDirection::Auto), ParagraphDirection::Ltr);
        assert_eq!(resolve_direction("abc", BaseDirection::Rtl), ParagraphDirection::Rtl);
        assert_eq!(resolve_direction("مرحبا", BaseDirection::Auto), ParagraphDirection::Rtl);
    }
}
