use core::ops::Range;

use unicode_bidi::BidiInfo;
use unicode_script::{Script, UnicodeScript};

use crate::bidi::BaseDirection;
use crate::shaping::Direction;

/// A substring with a single script and a single embedding level.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun<'a> {
    /// The run's text, `&source[range]`.
    pub text: &'a str,
    /// Byte range in the segmented text.
    pub range: Range<usize>,
    /// Resolved script. `Common` only when the run has no specific script.
    pub script: Script,
    /// BCP 47 language tag, if the caller supplied one.
    pub language: Option<String>,
    /// BiDi embedding level; odd levels are right-to-left.
    pub level: u8,
}

impl TextRun<'_> {
    pub fn direction(&self) -> Direction {
        Direction::from_level(self.level)
    }

    pub fn is_rtl(&self) -> bool {
        self.level % 2 == 1
    }
}

/// Options for [`segment_with`].
#[derive(Debug, Clone, Default)]
pub struct SegmentOptions {
    /// Paragraph base direction used for the bidi analysis. Sample lines
    /// are itemized with a left-to-right base by default.
    pub base_direction: BaseDirection,
    /// Language attached to every run.
    pub language: Option<String>,
}

/// Split `text` into script- and direction-homogeneous runs with the
/// default options.
pub fn segment(text: &str) -> Vec<TextRun<'_>> {
    segment_with(text, &SegmentOptions::default())
}

/// Split `text` into runs in logical order.
///
/// Levels come from UAX-9 (including the L1 reset of trailing whitespace),
/// scripts from the Unicode script property. Characters without a specific
/// script (`Common`, `Inherited`, `Unknown`) join the run around them.
/// Paragraph separators end a paragraph and are not part of any run.
pub fn segment_with<'a>(text: &'a str, options: &SegmentOptions) -> Vec<TextRun<'a>> {
    let mut runs = Vec::new();
    if text.is_empty() {
        return runs;
    }

    let info = BidiInfo::new(text, options.base_direction.to_level());
    for para in &info.paragraphs {
        let start = para.range.start;
        let end = start + text[para.range.clone()].trim_end_matches(is_paragraph_separator).len();
        if start == end {
            continue;
        }

        let levels = info.reordered_levels(para, start..end);
        let mut push = |range: Range<usize>, level: u8, script: Script| {
            log::trace!("run {range:?} level {level} script {script:?}");
            runs.push(TextRun {
                text: &text[range.clone()],
                range,
                script,
                language: options.language.clone(),
                level,
            });
        };

        let mut cursor = start;
        let mut prev_level = levels[start].number();
        let mut prev_script = Script::Common;

        for (offset, ch) in text[start..end].char_indices() {
            let i = start + offset;
            let level = levels[i].number();
            let script = ch.script();

            if level != prev_level || !is_compatible(script, prev_script) {
                if cursor < i {
                    push(cursor..i, prev_level, prev_script);
                }
                cursor = i;
                prev_level = level;
                prev_script = script;
            } else if is_generic_script(prev_script) {
                prev_script = script;
            }
        }

        push(cursor..end, prev_level, prev_script);
    }

    runs
}

fn is_paragraph_separator(ch: char) -> bool {
    matches!(
        ch,
        '\n' | '\r' | '\u{1c}'..='\u{1e}' | '\u{85}' | '\u{2029}'
    )
}

/// Whether this is not a specific script.
fn is_generic_script(script: Script) -> bool {
    matches!(script, Script::Unknown | Script::Common | Script::Inherited)
}

/// Whether these scripts can be part of the same run.
fn is_compatible(a: Script, b: Script) -> bool {
    is_generic_script(a) || is_generic_script(b) || a == b
}
