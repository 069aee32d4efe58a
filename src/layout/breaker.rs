use crate::layout::{LayoutConfig, Line};
use crate::{JustifyError, Pt, TextMeasurer};

/// How a word relates to the line it is offered to
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Fit {
    /// The word fits and there is still room left on the line
    Room,
    /// The word fills the line exactly
    Exact,
    /// The line would be too wide, or its word spacing too narrow
    Overflow,
}

/// The line currently being assembled, along with the running totals needed to
/// decide whether the next word fits on it.
///
/// The line inside is only ever copied out, never handed out, so emitted lines
/// can't be changed by later accumulation.
#[derive(Debug, Default)]
struct Accumulator {
    line: Line,
    /// Sum of the widths of the words on `line`
    committed: Pt,
    /// Spacing proposed by the last word accepted onto a line that already had words
    spacing: Option<Pt>,
}

impl Accumulator {
    fn append(&mut self, word: &str, width: Pt, spacing: Option<Pt>) -> Result<(), JustifyError> {
        self.line.add_word(word)?;
        self.committed += width;
        self.spacing = spacing;
        Ok(())
    }

    fn freeze_and_emit(&mut self, spacing: Pt, lines: &mut Vec<Line>) -> Result<(), JustifyError> {
        self.line.set_spacing(spacing)?;
        log::trace!(
            "line {}: {:?} at spacing {}",
            lines.len(),
            self.line.full_text(),
            spacing
        );
        lines.push(self.line.duplicate());
        self.reset();
        Ok(())
    }

    fn reset(&mut self) {
        self.line.clear();
        self.committed = Pt(0.0);
        self.spacing = None;
    }
}

/// Greedy justified line breaking of single paragraphs.
///
/// Words are taken in order and kept on the current line for as long as the line
/// stays narrower than the available width while its word spacing stays at or
/// above the configured minimum. Lines closed because the next word didn't fit are
/// stretched to the full available width; the last line of a paragraph is set at
/// the minimum spacing unless last-line justification is forced.
#[derive(Debug)]
pub struct LineBreaker<'a, M> {
    config: &'a LayoutConfig,
    measurer: &'a M,
}

impl<'a, M: TextMeasurer> LineBreaker<'a, M> {
    pub fn new(config: &'a LayoutConfig, measurer: &'a M) -> LineBreaker<'a, M> {
        LineBreaker { config, measurer }
    }

    /// Break one paragraph's words into lines, appending them to `lines`.
    ///
    /// Each word must already be a single token without whitespace. A word wider
    /// than the available width gets a line of its own and overflows it.
    pub fn break_paragraph<'w, I>(&self, words: I, lines: &mut Vec<Line>) -> Result<(), JustifyError>
    where
        I: IntoIterator<Item = &'w str>,
    {
        let width = self.config.width();
        let left = self.config.margins().left;
        let right = self.config.margins().right;
        let minimum = self.config.minimum_word_spacing();

        let mut acc = Accumulator::default();

        for word in words {
            let word_width = self.measurer.measure(word);
            if left + right + word_width > width {
                log::warn!(
                    "word {word:?} is {word_width} wide, more than the available {}; it will overflow",
                    self.config.available_width()
                );
            }

            let gaps = acc.line.word_count();
            if gaps == 0 {
                acc.append(word, word_width, None)?;
                continue;
            }

            let gaps = gaps as f32;
            let proposed_width = left + right + acc.committed + word_width + minimum * gaps;
            let proposed_spacing = (width - left - right - acc.committed - word_width) / gaps;

            match fit(proposed_width, proposed_spacing, width, minimum) {
                Fit::Room => {
                    acc.append(word, word_width, Some(proposed_spacing))?;
                }
                Fit::Exact => {
                    acc.append(word, word_width, Some(proposed_spacing))?;
                    acc.freeze_and_emit(proposed_spacing, lines)?;
                }
                Fit::Overflow => {
                    let spacing = acc.spacing.unwrap_or(minimum);
                    acc.freeze_and_emit(spacing, lines)?;
                    acc.append(word, word_width, None)?;
                }
            }
        }

        if !acc.line.is_empty() {
            let spacing = if self.config.force_last_line_justification() {
                acc.spacing.unwrap_or(minimum)
            } else {
                minimum
            };
            acc.freeze_and_emit(spacing, lines)?;
        }

        Ok(())
    }
}

/// Exact comparisons; a line exactly as wide as the box is full, not overflowing
fn fit(proposed_width: Pt, proposed_spacing: Pt, width: Pt, minimum: Pt) -> Fit {
    let spacing_ok = proposed_spacing >= minimum;
    if proposed_width < width && spacing_ok {
        Fit::Room
    } else if proposed_width == width && spacing_ok {
        Fit::Exact
    } else {
        Fit::Overflow
    }
}
