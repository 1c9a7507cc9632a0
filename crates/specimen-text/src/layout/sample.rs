use crate::font::{FontHandle, FontInfo, covers_text};

pub const LOWERCASE_TEXT: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE_TEXT: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const PUNCTUATION_TEXT: &str = "0123456789.:,;(*!?')";
pub const PANGRAM_TEXT: &str = "The quick brown fox jumps over the lazy dog.";

/// Ordered candidate lines for the preview. There is no upper bound on the
/// number of lines; the fit engine decides how many are shown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SampleSet {
    lines: Vec<String>,
}

impl SampleSet {
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Default specimen for a face: its name (when the face can render it),
    /// the alphabet in both cases, digits and punctuation, and a pangram.
    pub fn for_face<F: FontHandle + ?Sized>(font: &F) -> Self {
        let mut set = Self::new();
        let name = FontInfo::from_handle(font).display_name();
        if covers_text(font, &name) {
            set.push(name);
        } else {
            log::debug!("face cannot render its own name {name:?}");
        }
        for line in [LOWERCASE_TEXT, UPPERCASE_TEXT, PUNCTUATION_TEXT, PANGRAM_TEXT] {
            set.push(line);
        }
        set
    }

    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for SampleSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_lines(iter)
    }
}

impl From<Vec<String>> for SampleSet {
    fn from(lines: Vec<String>) -> Self {
        Self { lines }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::TestFont;

    #[test]
    fn default_specimen_starts_with_name() {
        let set = SampleSet::for_face(&TestFont::latin());
        assert_eq!(set.len(), 5);
        assert_eq!(set.get(0), Some("Test Sans"));
        assert_eq!(set.get(4), Some(PANGRAM_TEXT));
    }

    #[test]
    fn name_is_left_out_when_not_covered() {
        let set = SampleSet::for_face(&TestFont::empty());
        assert_eq!(set.len(), 4);
        assert_eq!(set.get(0), Some(LOWERCASE_TEXT));
    }

    #[test]
    fn collects_from_iterators() {
        let set: SampleSet = ["one", "two"].into_iter().collect();
        assert_eq!(set.iter().collect::<Vec<_>>(), vec!["one", "two"]);
        assert_eq!(SampleSet::from(vec!["x".to_string()]).len(), 1);
        assert!(SampleSet::new().is_empty());
    }
}
