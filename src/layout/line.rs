use crate::{JustifyError, Pt, TextMeasurer};

/// One laid-out line: the words placed on it, in reading order, and the uniform
/// gap inserted between each adjacent pair of them.
///
/// While a paragraph is being broken, a single `Line` is used as a scratch
/// accumulator and refilled for every line. Only [duplicates](Line::duplicate)
/// of it ever end up in a [Layout](crate::layout::Layout), so lines handed out
/// are never touched again.
///
/// A spacing of `Pt(0.0)` means the spacing hasn't been set yet.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Line {
    words: Vec<String>,
    spacing: Pt,
}

impl Line {
    /// Create an empty line with unset spacing
    pub fn empty() -> Line {
        Line::default()
    }

    /// Create a line from already-tokenized words and a positive spacing
    pub fn new<S: Into<String>>(
        words: impl IntoIterator<Item = S>,
        spacing: Pt,
    ) -> Result<Line, JustifyError> {
        let mut line = Line::empty();
        for word in words {
            line.add_word(word)?;
        }
        line.set_spacing(spacing)?;
        Ok(line)
    }

    /// Append a word to the end of the line. The word must not contain whitespace;
    /// this is a contract check, not a tokenizer.
    pub fn add_word<S: Into<String>>(&mut self, word: S) -> Result<(), JustifyError> {
        let word = word.into();
        if word.chars().any(char::is_whitespace) {
            return Err(JustifyError::InvalidWord(word));
        }
        self.words.push(word);
        Ok(())
    }

    /// Set the word spacing of the line, which must be more than 0
    pub fn set_spacing(&mut self, spacing: Pt) -> Result<(), JustifyError> {
        if !spacing.is_positive() {
            return Err(JustifyError::InvalidSpacing(spacing.0));
        }
        self.spacing = spacing;
        Ok(())
    }

    /// Empty the line and reset its spacing to unset
    pub fn clear(&mut self) {
        self.words.clear();
        self.spacing = Pt(0.0);
    }

    /// An independent copy of the line's words and spacing
    pub fn duplicate(&self) -> Line {
        Line {
            words: self.words.clone(),
            spacing: self.spacing,
        }
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn spacing(&self) -> Pt {
        self.spacing
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The words of the line joined by single spaces
    pub fn full_text(&self) -> String {
        self.words.join(" ")
    }

    /// Sum of the measured widths of every word on the line
    pub fn total_word_width<M: TextMeasurer>(&self, measurer: &M) -> Pt {
        self.words.iter().map(|word| measurer.measure(word)).sum()
    }

    /// Width taken up by the gaps between words
    pub fn total_space_width(&self) -> Pt {
        match self.words.len() {
            0 => Pt(0.0),
            count => self.spacing * (count - 1) as f32,
        }
    }

    /// Width of the whole line, words and gaps
    pub fn total_line_width<M: TextMeasurer>(&self, measurer: &M) -> Pt {
        self.total_word_width(measurer) + self.total_space_width()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars_times_ten(text: &str) -> Pt {
        Pt(text.chars().count() as f32 * 10.0)
    }

    #[test]
    fn rejects_words_with_whitespace() {
        let mut line = Line::empty();
        assert_eq!(
            line.add_word("two words"),
            Err(JustifyError::InvalidWord("two words".into()))
        );
        assert_eq!(
            line.add_word("tab\tbed"),
            Err(JustifyError::InvalidWord("tab\tbed".into()))
        );
        assert!(line.is_empty());
    }

    #[test]
    fn rejects_non_positive_spacing() {
        let mut line = Line::empty();
        assert_eq!(line.set_spacing(Pt(0.0)), Err(JustifyError::InvalidSpacing(0.0)));
        assert_eq!(line.set_spacing(Pt(-2.0)), Err(JustifyError::InvalidSpacing(-2.0)));
        assert!(line.set_spacing(Pt(f32::NAN)).is_err());
        assert_eq!(line.spacing(), Pt(0.0));
    }

    #[test]
    fn duplicates_are_independent() {
        let mut line = Line::new(["alpha", "beta"], Pt(4.0)).expect("valid line");
        let copy = line.duplicate();

        line.clear();
        line.add_word("gamma").unwrap();

        assert_eq!(copy.words(), ["alpha", "beta"]);
        assert_eq!(copy.spacing(), Pt(4.0));
        assert_eq!(line.words(), ["gamma"]);
        assert_eq!(line.spacing(), Pt(0.0));
    }

    #[test]
    fn widths_are_derived_from_the_measurer() {
        let line = Line::new(["The", "quick", "fox"], Pt(5.0)).unwrap();
        assert_eq!(line.word_count(), 3);
        assert_eq!(line.full_text(), "The quick fox");
        assert_eq!(line.total_word_width(&chars_times_ten), Pt(110.0));
        assert_eq!(line.total_space_width(), Pt(10.0));
        assert_eq!(line.total_line_width(&chars_times_ten), Pt(120.0));
    }

    #[test]
    fn empty_line_has_no_width() {
        let line = Line::empty();
        assert_eq!(line.full_text(), "");
        assert_eq!(line.total_space_width(), Pt(0.0));
        assert_eq!(line.total_line_width(&chars_times_ten), Pt(0.0));
    }
}
