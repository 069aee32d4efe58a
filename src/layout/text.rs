use crate::layout::{BlankParagraphs, LayoutConfig, Line, LineBreaker, Margins};
use crate::{JustifyError, Pt, TextMeasurer};

/// The result of a layout pass: every line of every paragraph, in order
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub lines: Vec<Line>,
    pub line_height: Pt,
    pub margins: Margins,
}

impl Layout {
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Height of the lines alone
    pub fn content_height(&self) -> Pt {
        self.line_height * self.lines.len() as f32
    }

    /// Height of the lines plus the top and bottom margins
    pub fn measured_height(&self) -> Pt {
        self.content_height() + self.margins.vertical()
    }
}

/// Normalize newlines and split the text into paragraphs on hard line breaks
pub fn paragraphs(text: &str) -> Vec<String> {
    text.replace("\r\n", "\n")
        .replace('\r', "\n")
        .split('\n')
        .map(str::to_string)
        .collect()
}

/// Lay out text into fully justified lines.
///
/// The text is split into paragraphs on line breaks and each paragraph into
/// words on whitespace, then every paragraph is broken into lines with a
/// [LineBreaker]. Empty paragraphs become empty lines when blank paragraphs
/// are [preserved](BlankParagraphs::Preserve), except for those trailing after
/// the last word. Paragraphs holding only whitespace never produce a line.
///
/// ```
/// use justified_text::{layout::layout_text, DisplayMetrics, LayoutConfig, LayoutSettings, Pt};
///
/// let measurer = |text: &str| Pt(text.chars().count() as f32 * 10.0);
/// let settings = LayoutSettings::new(Pt(100.0)).with_minimum_word_spacing(Pt(5.0));
/// let config = LayoutConfig::resolve(&settings, &measurer, &DisplayMetrics::default())?;
///
/// let layout = layout_text("one two three four", &config, &measurer)?;
/// assert_eq!(layout.line_count(), 2);
/// assert_eq!(layout.lines[0].full_text(), "one two");
/// assert_eq!(layout.lines[0].spacing(), Pt(40.0));
/// # Ok::<(), justified_text::JustifyError>(())
/// ```
pub fn layout_text<M: TextMeasurer>(
    text: &str,
    config: &LayoutConfig,
    measurer: &M,
) -> Result<Layout, JustifyError> {
    let breaker = LineBreaker::new(config, measurer);
    let mut lines: Vec<Line> = Vec::new();
    // blank lines seen since the last paragraph with words
    let mut pending_blanks = 0usize;

    let paragraphs = paragraphs(text);
    for paragraph in paragraphs.iter() {
        let mut words = paragraph.split_whitespace().peekable();
        if words.peek().is_none() {
            if paragraph.is_empty() && config.blank_paragraphs() == BlankParagraphs::Preserve {
                pending_blanks += 1;
            }
            continue;
        }

        lines.extend((0..pending_blanks).map(|_| Line::empty()));
        pending_blanks = 0;
        breaker.break_paragraph(words, &mut lines)?;
    }

    log::debug!(
        "laid out {} paragraphs into {} lines ({} trailing blank paragraphs dropped)",
        paragraphs.len(),
        lines.len(),
        pending_blanks
    );

    Ok(Layout {
        lines,
        line_height: config.line_height(),
        margins: *config.margins(),
    })
}
